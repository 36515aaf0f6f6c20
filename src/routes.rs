// ============================================================================
// ROUTES - state-driven navigation, mirrored into browser history
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    SignUp,
    Home,
    Admin,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::SignUp => "/signup",
            Route::Home => "/home",
            Route::Admin => "/admin",
        }
    }

    /// Unknown paths land on the sign-up screen
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/home" => Route::Home,
            "/admin" => Route::Admin,
            _ => Route::SignUp,
        }
    }

    /// Route matching the current `window.location`
    pub fn current() -> Self {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .map(|p| Route::from_path(&p))
            .unwrap_or(Route::SignUp)
    }

    pub fn requires_session(&self) -> bool {
        !matches!(self, Route::SignUp)
    }
}

/// Pushes the route onto the history stack without reloading
pub fn push_history(route: Route) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        log::warn!("⚠️ History API unavailable, not updating URL");
        return;
    };
    if let Err(e) = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(route.path())) {
        log::error!("❌ pushState failed: {:?}", e);
    }
}
