use yew::prelude::*;

use crate::hooks::{use_auth, AuthContext};
use crate::models::BookedDestination;

fn spawn_fetch(
    auth: AuthContext,
    bookings: UseStateHandle<Vec<BookedDestination>>,
    loading: UseStateHandle<bool>,
    error: UseStateHandle<Option<String>>,
) {
    loading.set(true);
    wasm_bindgen_futures::spawn_local(async move {
        let sink = {
            let bookings = bookings.clone();
            Callback::from(move |list: Vec<BookedDestination>| bookings.set(list))
        };
        match auth.fetch_user_bookings(sink).await {
            Ok(_) => error.set(None),
            Err(e) => {
                log::error!("❌ Could not load bookings: {}", e);
                error.set(Some(e.to_string()));
            }
        }
        loading.set(false);
    });
}

#[function_component(BookingsView)]
pub fn bookings_view() -> Html {
    let auth = use_auth();
    let bookings = use_state(Vec::<BookedDestination>::new);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    {
        let auth = auth.clone();
        let bookings = bookings.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_fetch(auth, bookings, loading, error);
            || ()
        });
    }

    let on_remove = {
        let auth = auth.clone();
        let bookings = bookings.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |booking_id: String| {
            let auth = auth.clone();
            let bookings = bookings.clone();
            let loading = loading.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match auth.remove_booking(booking_id).await {
                    Ok(()) => spawn_fetch(auth, bookings, loading, error),
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        })
    };

    let on_logout = {
        let auth = auth.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(e) = auth.logout(&auth.navigator()) {
                log::warn!("⚠️ Logout left storage behind: {}", e);
            }
        })
    };

    html! {
        <div class="container py-4">
            <div class="d-flex justify-content-between align-items-center mb-3">
                <h1 class="h3">{"My bookings"}</h1>
                <button class="btn btn-outline-secondary" onclick={on_logout}>{"Log out"}</button>
            </div>
            if let Some(message) = (*error).clone() {
                <div class="alert alert-danger">{message}</div>
            }
            if *loading {
                <p class="text-muted">{"Loading..."}</p>
            } else if bookings.is_empty() {
                <p class="text-muted">{"No bookings yet."}</p>
            }
            <ul class="list-group">
                { for bookings.iter().map(|booked| {
                    let id = booked.booking.removal_id().to_string();
                    let on_remove = on_remove.reform(move |_: MouseEvent| id.clone());
                    html! {
                        <li class="list-group-item d-flex justify-content-between align-items-start">
                            <div>
                                <strong>{booked.destination.display_name()}</strong>
                                if let Some(description) = booked.destination.description.clone() {
                                    <p class="mb-0 text-muted">{description}</p>
                                }
                            </div>
                            <button class="btn btn-sm btn-danger" onclick={on_remove}>{"Remove"}</button>
                        </li>
                    }
                }) }
            </ul>
        </div>
    }
}
