pub mod use_auth;
pub mod use_tours;

pub use use_auth::{use_auth, AuthContext, AuthProvider};
pub use use_tours::{use_tours, ToursState, UseToursHandle};
