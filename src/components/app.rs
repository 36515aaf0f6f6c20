use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use super::{AdminView, BookingsView, LoginScreen};
use crate::hooks::{use_auth, AuthProvider};
use crate::models::Role;
use crate::routes::{push_history, Route};

#[function_component(App)]
pub fn app() -> Html {
    let route = use_state(Route::current);

    let navigate = {
        let route = route.clone();
        Callback::from(move |next: Route| {
            push_history(next);
            route.set(next);
        })
    };

    // Back/forward buttons
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let listener = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                route.set(Route::current());
            }) as Box<dyn FnMut(web_sys::Event)>);

            if let Some(win) = &window {
                if let Err(e) = win.add_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref()) {
                    log::error!("❌ Could not listen to popstate: {:?}", e);
                }
            }

            move || {
                if let Some(win) = window {
                    let _ = win.remove_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref());
                }
            }
        });
    }

    html! {
        <AuthProvider navigate={navigate}>
            <Screen route={*route} />
        </AuthProvider>
    }
}

#[derive(Properties, PartialEq)]
struct ScreenProps {
    route: Route,
}

#[function_component(Screen)]
fn screen(props: &ScreenProps) -> Html {
    let auth = use_auth();

    match (props.route, auth.user.as_ref()) {
        (Route::SignUp, _) | (_, None) => html! { <LoginScreen /> },
        (Route::Admin, Some(session)) if session.role == Role::Admin => html! { <AdminView /> },
        (_, Some(_)) => html! { <BookingsView /> },
    }
}
