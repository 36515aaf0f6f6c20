// ============================================================================
// BACKEND - the two REST services this front end talks to
// ============================================================================
// `ApiClient` is the browser implementation; tests plug in an in-memory one.
// ============================================================================

use crate::error::AppResult;
use crate::models::{ApiMessage, BookingRow, Credentials, DestinationRecord, SignInReply, Tour};

#[allow(async_fn_in_trait)]
pub trait TourismBackend {
    /// `POST /users/signin`. Any HTTP status is a reply; only transport
    /// failures are errors.
    async fn sign_in(&self, credentials: &Credentials) -> AppResult<SignInReply>;

    /// `GET /v2/bookings/user/{user_id}`
    async fn user_bookings(&self, user_id: &str, token: &str) -> AppResult<Vec<BookingRow>>;

    /// `GET /get/{state_id}` on the destination service
    async fn destination(&self, state_id: &str) -> AppResult<DestinationRecord>;

    /// `POST /removeBooking/{booking_id}` on the destination service
    async fn remove_booking(&self, booking_id: &str) -> AppResult<()>;

    /// `GET /tours`
    async fn list_tours(&self) -> AppResult<Vec<Tour>>;

    /// `GET /tours/{tour_id}`, destinations with accommodation
    async fn tour_by_id(&self, tour_id: i64) -> AppResult<Tour>;

    /// `GET /tours/search?title=..`; no match is a 404
    async fn tours_by_title(&self, title: &str) -> AppResult<Vec<Tour>>;

    async fn create_tour(&self, tour: &Tour, token: &str) -> AppResult<ApiMessage>;

    async fn update_tour(&self, tour_id: i64, tour: &Tour, token: &str) -> AppResult<ApiMessage>;

    async fn delete_tour(&self, tour_id: i64, token: &str) -> AppResult<ApiMessage>;
}
