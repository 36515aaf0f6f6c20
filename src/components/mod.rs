pub mod admin_view;
pub mod app;
pub mod bookings_view;
pub mod login_screen;
pub mod tour_card;

pub use admin_view::AdminView;
pub use app::App;
pub use bookings_view::BookingsView;
pub use login_screen::LoginScreen;
pub use tour_card::{TourCard, TourCardFields, TourCardProps};
