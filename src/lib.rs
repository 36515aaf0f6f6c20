// ============================================================================
// TOUR BOOKING APP - Yew front end
// ============================================================================
// - Components: views and the tour card
// - Hooks: auth context (session owner) and tour catalogue state
// - Services: HTTP client, session persistence, business rules
// - Models: wire types shared with the backends
// ============================================================================

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::components::App;
use crate::config::CONFIG;

/// Installs the panic hook and logger, then mounts the app on `<body>`
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Tour booking app starting");

    yew::Renderer::<App>::new().render();
}
