// ============================================================================
// AUTH SERVICE - login, logout, bookings
// ============================================================================
// Returns values; the auth context applies them to UI state and navigates.
// ============================================================================

use std::rc::Rc;

use crate::error::{AppError, AppResult};
use crate::models::{BookedDestination, Credentials, LoginOutcome, Role, Session};
use crate::routes::Route;
use crate::services::backend::TourismBackend;
use crate::services::enrichment::enrich_in_order;
use crate::services::session_store::SessionStore;

pub struct AuthService<B, S> {
    backend: Rc<B>,
    store: Rc<S>,
    enrichment_concurrency: usize,
}

impl<B: TourismBackend, S: SessionStore> AuthService<B, S> {
    pub fn new(backend: Rc<B>, store: Rc<S>, enrichment_concurrency: usize) -> Self {
        Self {
            backend,
            store,
            enrichment_concurrency,
        }
    }

    /// Checks credentials and persists the session on HTTP 200.
    ///
    /// Any other status is `LoginRejected` carrying the server message, and
    /// nothing is written.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginOutcome> {
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        let reply = self.backend.sign_in(&credentials).await.map_err(|e| {
            log::error!("❌ Login error: {}", e);
            e
        })?;

        if reply.status != 200 {
            let message = reply
                .body
                .message
                .unwrap_or_else(|| format!("Sign-in failed with status {}", reply.status));
            log::error!("❌ Login failed: {}", message);
            return Err(AppError::LoginRejected {
                status: reply.status,
                message,
            });
        }

        let body = reply.body;
        let (token, user_id) = match (body.jwt, body.user_id) {
            (Some(token), Some(user_id)) if !token.is_empty() => (token, user_id),
            _ => return Err(AppError::parse("sign-in reply without jwt or userId")),
        };
        let session = Session {
            user_id,
            role: Role::parse(body.role.as_deref().unwrap_or_default()),
        };

        self.store.save(&session, &token)?;
        log::info!("✅ Signed in as {} ({})", session.user_id, session.role.as_str());

        Ok(LoginOutcome {
            redirect: session.role.landing_route(),
            token,
            session,
        })
    }

    /// Clears persisted state. The caller drops the in-memory session and
    /// navigates to the returned route whatever the result.
    pub fn logout(&self) -> AppResult<Route> {
        log::info!("👋 Logout");
        self.store.clear().map_err(|e| {
            log::error!("❌ Could not clear session storage: {}", e);
            e
        })?;
        Ok(Route::SignUp)
    }

    /// Session persisted by a previous page load, if complete
    pub fn restore(&self) -> Option<Session> {
        let stored = self.store.load()?;
        log::info!("♻️ Restored session for user {}", stored.session.user_id);
        Some(stored.session)
    }

    /// Lists the user's bookings and resolves each row's destination.
    ///
    /// `sink` gets the full list in row order, or is not called at all if
    /// any request fails. Returns the number of rows delivered.
    pub async fn fetch_user_bookings<F>(&self, sink: F) -> AppResult<usize>
    where
        F: FnOnce(Vec<BookedDestination>),
    {
        let user_id = self.store.user_id().ok_or(AppError::NotAuthenticated)?;
        let token = self.store.token().ok_or(AppError::NotAuthenticated)?;

        let rows = self.backend.user_bookings(&user_id, &token).await?;
        let backend = self.backend.as_ref();

        let enriched = enrich_in_order(rows, self.enrichment_concurrency, |booking| async move {
            let destination = backend.destination(&booking.booked_state_id).await?;
            Ok(BookedDestination { booking, destination })
        })
        .await
        .map_err(|e| {
            log::error!("❌ Booking enrichment failed: {}", e);
            e
        })?;

        let count = enriched.len();
        log::info!("✅ {} bookings enriched", count);
        sink(enriched);
        Ok(count)
    }

    pub async fn remove_booking(&self, booking_id: &str) -> AppResult<()> {
        self.backend.remove_booking(booking_id).await?;
        log::info!("✅ Booking {} removed", booking_id);
        Ok(())
    }
}
