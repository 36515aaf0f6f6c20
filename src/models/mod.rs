pub mod auth;
pub mod booking;
pub mod tour;
mod wire;

pub use auth::{Credentials, LoginOutcome, LoginResponse, Role, Session, SignInReply};
pub use booking::{BookedDestination, BookingRow, BookingsResponse, DestinationEnvelope, DestinationRecord};
pub use tour::{Accommodation, ApiMessage, Tour, TourDestination};
