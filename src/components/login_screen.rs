use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_auth;

#[function_component(LoginScreen)]
pub fn login_screen() -> Html {
    let auth = use_auth();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let auth = auth.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };
            let email = email_input.value().trim().to_string();
            let password = password_input.value();

            if email.is_empty() || password.is_empty() {
                error.set(Some("Please fill in email and password".to_string()));
                return;
            }

            let auth = auth.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match auth.login(email, password).await {
                    Ok(_) => error.set(None),
                    Err(e) => error.set(Some(e.to_string())),
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="login-screen container py-5" style="max-width: 420px;">
            <h1 class="h3 mb-4">{"Sign in"}</h1>
            <form onsubmit={on_submit}>
                <div class="mb-3">
                    <label class="form-label" for="email">{"Email"}</label>
                    <input ref={email_ref} id="email" type="email" class="form-control" autocomplete="username" />
                </div>
                <div class="mb-3">
                    <label class="form-label" for="password">{"Password"}</label>
                    <input ref={password_ref} id="password" type="password" class="form-control" autocomplete="current-password" />
                </div>
                if let Some(message) = (*error).clone() {
                    <div class="alert alert-danger">{message}</div>
                }
                <button type="submit" class="btn btn-primary w-100" disabled={*submitting}>
                    { if *submitting { "Signing in..." } else { "Sign in" } }
                </button>
            </form>
        </div>
    }
}
