// In-memory backend and session store for service tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::error::{AppError, AppResult};
use crate::models::{
    ApiMessage, BookingRow, Credentials, DestinationRecord, LoginResponse, Role, Session,
    SignInReply, Tour,
};
use crate::services::backend::TourismBackend;
use crate::services::session_store::SessionStore;

#[derive(Default)]
pub struct MemorySessionStore {
    token: RefCell<Option<String>>,
    items: RefCell<HashMap<String, String>>,
    pub writes: Cell<usize>,
    pub clears: Cell<usize>,
    /// Makes `clear` fail without touching anything
    pub fail_clear: Cell<bool>,
}

impl MemorySessionStore {
    pub fn signed_in(user_id: &str, role: Role, token: &str) -> Self {
        let store = Self::default();
        *store.token.borrow_mut() = Some(token.to_string());
        store.items.borrow_mut().insert("userId".into(), user_id.into());
        store.items.borrow_mut().insert("role".into(), role.as_str().into());
        store
    }

    pub fn forget_token(&self) {
        *self.token.borrow_mut() = None;
    }

    pub fn item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.token.borrow().is_none() && self.items.borrow().is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, session: &Session, token: &str) -> AppResult<()> {
        self.writes.set(self.writes.get() + 1);
        *self.token.borrow_mut() = Some(token.to_string());
        let mut items = self.items.borrow_mut();
        items.insert("userId".into(), session.user_id.clone());
        items.insert("role".into(), session.role.as_str().into());
        Ok(())
    }

    fn user_id(&self) -> Option<String> {
        self.item("userId")
    }

    fn role(&self) -> Option<Role> {
        self.item("role").map(|r| Role::parse(&r))
    }

    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn clear(&self) -> AppResult<()> {
        self.clears.set(self.clears.get() + 1);
        if self.fail_clear.get() {
            return Err(AppError::storage("localStorage unavailable"));
        }
        *self.token.borrow_mut() = None;
        self.items.borrow_mut().clear();
        Ok(())
    }
}

pub struct FakeBackend {
    pub sign_in_reply: RefCell<AppResult<SignInReply>>,
    pub rows: Vec<BookingRow>,
    pub destinations: HashMap<String, AppResult<DestinationRecord>>,
    pub tours: RefCell<Vec<Tour>>,
    /// One entry per request, e.g. `GET /get/4`
    pub calls: RefCell<Vec<String>>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self {
            sign_in_reply: RefCell::new(Err(AppError::network("no reply configured"))),
            rows: Vec::new(),
            destinations: HashMap::new(),
            tours: RefCell::new(Vec::new()),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl FakeBackend {
    pub fn answering_sign_in(status: u16, body: LoginResponse) -> Self {
        let backend = Self::default();
        *backend.sign_in_reply.borrow_mut() = Ok(SignInReply { status, body });
        backend
    }

    /// Rows for states `ids`, each resolving to a destination named `Dest <id>`
    pub fn with_bookings(ids: &[&str]) -> Self {
        let mut backend = Self::default();
        for id in ids {
            backend.rows.push(row(id));
            backend.destinations.insert(
                id.to_string(),
                Ok(DestinationRecord {
                    name: Some(format!("Dest {}", id)),
                    ..DestinationRecord::default()
                }),
            );
        }
        backend
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

pub fn row(state_id: &str) -> BookingRow {
    BookingRow {
        booking_id: None,
        booked_state_id: state_id.to_string(),
        extra: Default::default(),
    }
}

impl TourismBackend for FakeBackend {
    async fn sign_in(&self, credentials: &Credentials) -> AppResult<SignInReply> {
        self.record(format!("POST /users/signin {}", credentials.email));
        self.sign_in_reply.borrow().clone()
    }

    async fn user_bookings(&self, user_id: &str, token: &str) -> AppResult<Vec<BookingRow>> {
        self.record(format!("GET /v2/bookings/user/{} ({})", user_id, token));
        Ok(self.rows.clone())
    }

    async fn destination(&self, state_id: &str) -> AppResult<DestinationRecord> {
        self.record(format!("GET /get/{}", state_id));
        self.destinations
            .get(state_id)
            .cloned()
            .unwrap_or_else(|| Err(AppError::Http { status: 404, message: "Not Found".into() }))
    }

    async fn remove_booking(&self, booking_id: &str) -> AppResult<()> {
        self.record(format!("POST /removeBooking/{}", booking_id));
        if booking_id == "missing" {
            return Err(AppError::Http { status: 404, message: "Not Found".into() });
        }
        Ok(())
    }

    async fn list_tours(&self) -> AppResult<Vec<Tour>> {
        self.record("GET /tours".into());
        Ok(self.tours.borrow().clone())
    }

    /// Answers like the tour service: no `tourId` in the body
    async fn tour_by_id(&self, tour_id: i64) -> AppResult<Tour> {
        self.record(format!("GET /tours/{}", tour_id));
        self.tours
            .borrow()
            .iter()
            .find(|t| t.tour_id == Some(tour_id))
            .map(|t| Tour { tour_id: None, ..t.clone() })
            .ok_or(AppError::Http {
                status: 404,
                message: format!("Tour not found with ID: {}", tour_id),
            })
    }

    async fn tours_by_title(&self, title: &str) -> AppResult<Vec<Tour>> {
        self.record(format!("GET /tours/search?title={}", title));
        let found: Vec<Tour> = self
            .tours
            .borrow()
            .iter()
            .filter(|t| t.title.as_deref() == Some(title))
            .cloned()
            .collect();
        if found.is_empty() {
            return Err(AppError::Http {
                status: 404,
                message: format!("No tours found with title: {}", title),
            });
        }
        Ok(found)
    }

    /// Duplicates (same title and start date) come back as a 2xx body
    /// carrying `BAD_REQUEST`, as the tour service does.
    async fn create_tour(&self, tour: &Tour, token: &str) -> AppResult<ApiMessage> {
        self.record(format!("POST /tours ({})", token));
        let mut tours = self.tours.borrow_mut();
        if tours
            .iter()
            .any(|t| t.title == tour.title && t.start_date == tour.start_date)
        {
            return Ok(ApiMessage {
                status: Some("BAD_REQUEST".into()),
                message: "Tour with the same title and start date already exists.".into(),
            });
        }
        let next_id = tours.iter().filter_map(|t| t.tour_id).max().unwrap_or(0) + 1;
        tours.push(Tour { tour_id: Some(next_id), ..tour.clone() });
        Ok(ApiMessage {
            status: Some("CREATED".into()),
            message: "Tour package created successfully.".into(),
        })
    }

    async fn update_tour(&self, tour_id: i64, tour: &Tour, token: &str) -> AppResult<ApiMessage> {
        self.record(format!("PUT /tours/{} ({})", tour_id, token));
        let mut tours = self.tours.borrow_mut();
        let slot = tours
            .iter_mut()
            .find(|t| t.tour_id == Some(tour_id))
            .ok_or(AppError::Http { status: 404, message: "Tour not found".into() })?;
        *slot = Tour { tour_id: Some(tour_id), ..tour.clone() };
        Ok(ApiMessage {
            status: Some("OK".into()),
            message: "Tour package updated successfully.".into(),
        })
    }

    async fn delete_tour(&self, tour_id: i64, token: &str) -> AppResult<ApiMessage> {
        self.record(format!("DELETE /tours/{} ({})", tour_id, token));
        let mut tours = self.tours.borrow_mut();
        let before = tours.len();
        tours.retain(|t| t.tour_id != Some(tour_id));
        if tours.len() == before {
            return Err(AppError::Http { status: 404, message: "Tour not found".into() });
        }
        Ok(ApiMessage {
            status: Some("OK".into()),
            message: "Tour package deleted successfully.".into(),
        })
    }
}
