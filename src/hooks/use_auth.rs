// ============================================================================
// AUTH CONTEXT - session shared through Yew's Context API
// ============================================================================
// `AuthProvider` owns the in-memory session. Every operation returns a
// Result; views decide how to show failures.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::config::CONFIG;
use crate::error::AppResult;
use crate::models::{BookedDestination, LoginOutcome, Session};
use crate::routes::Route;
use crate::services::{ApiClient, AuthService, BrowserSessionStore, SessionStore, TourismBackend};

pub type AppAuthService = AuthService<ApiClient, BrowserSessionStore>;

#[derive(Clone)]
pub struct AuthContext {
    pub user: Option<Session>,
    set_user: Callback<Option<Session>>,
    navigate: Callback<Route>,
    service: Rc<AppAuthService>,
}

impl PartialEq for AuthContext {
    fn eq(&self, other: &Self) -> bool {
        self.user == other.user
            && self.navigate == other.navigate
            && Rc::ptr_eq(&self.service, &other.service)
    }
}

impl AuthContext {
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn navigator(&self) -> Callback<Route> {
        self.navigate.clone()
    }

    /// On success the session becomes current and the app moves to the
    /// role's landing page.
    pub async fn login(&self, email: String, password: String) -> AppResult<LoginOutcome> {
        sign_in(&*self.service, &email, &password, &self.set_user, &self.navigate).await
    }

    pub fn logout(&self, navigate: &Callback<Route>) -> AppResult<()> {
        sign_out(&*self.service, &self.set_user, navigate)
    }

    pub async fn fetch_user_bookings(&self, sink: Callback<Vec<BookedDestination>>) -> AppResult<usize> {
        self.service
            .fetch_user_bookings(move |bookings| sink.emit(bookings))
            .await
    }

    pub async fn remove_booking(&self, booking_id: String) -> AppResult<()> {
        self.service.remove_booking(&booking_id).await
    }
}

async fn sign_in<B: TourismBackend, S: SessionStore>(
    service: &AuthService<B, S>,
    email: &str,
    password: &str,
    set_user: &Callback<Option<Session>>,
    navigate: &Callback<Route>,
) -> AppResult<LoginOutcome> {
    let outcome = service.login(email, password).await?;
    set_user.emit(Some(outcome.session.clone()));
    navigate.emit(outcome.redirect);
    Ok(outcome)
}

/// Always drops the session and lands on sign-up; a storage failure is
/// still reported.
fn sign_out<B: TourismBackend, S: SessionStore>(
    service: &AuthService<B, S>,
    set_user: &Callback<Option<Session>>,
    navigate: &Callback<Route>,
) -> AppResult<()> {
    let result = service.logout();
    set_user.emit(None);
    navigate.emit(Route::SignUp);
    result.map(|_| ())
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub navigate: Callback<Route>,
    pub children: Children,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let service = use_memo((), |_| {
        AuthService::new(
            Rc::new(ApiClient::new()),
            Rc::new(BrowserSessionStore::new(CONFIG.session_max_age_seconds)),
            CONFIG.enrichment_concurrency,
        )
    });

    let user = {
        let service = service.clone();
        use_state(move || service.restore())
    };

    let set_user = {
        let setter = user.setter();
        Callback::from(move |session: Option<Session>| setter.set(session))
    };

    let context = AuthContext {
        user: (*user).clone(),
        set_user,
        navigate: props.navigate.clone(),
        service,
    };

    html! {
        <ContextProvider<AuthContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("use_auth must be called below <AuthProvider>")
}
