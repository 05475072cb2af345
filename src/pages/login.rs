use leptos::*;
use leptos_router::*;

use crate::app::use_config;
use crate::auth::use_auth;
use crate::models::LoginRequest;
use crate::routes::{replace_history, AppRoute};

/// Email and password sign-in form
#[component]
pub fn Login() -> impl IntoView {
    let config = use_config();
    let auth = use_auth();
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (remember, set_remember) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let submit = create_action(move |request: &LoginRequest| {
        let request = request.clone();
        async move { auth.login(request).await }
    });

    create_effect(move |_| match submit.value().get() {
        Some(Ok(_)) => navigate(AppRoute::Chatbot.path(), replace_history()),
        Some(Err(e)) => set_error.set(Some(e.user_message())),
        None => {}
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let request = LoginRequest {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            remember_me: remember.get_untracked(),
        };
        match request.validate() {
            Ok(()) => {
                set_error.set(None);
                submit.dispatch(request);
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h2>{format!("Sign in to {}", config.name)}</h2>

                {move || error.get().map(|message| view! {
                    <div class="error-banner">{message}</div>
                })}

                <label class="field">
                    <span>"Email"</span>
                    <input
                        type="email"
                        autocomplete="email"
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Password"</span>
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=remember
                        on:change=move |ev| set_remember.set(event_target_checked(&ev))
                    />
                    <span>"Remember me"</span>
                </label>

                <button type="submit" class="button primary" disabled=move || submit.pending().get()>
                    {move || if submit.pending().get() { "Signing in..." } else { "Sign in" }}
                </button>

                <p class="auth-switch">
                    "No account yet? "
                    <A href=AppRoute::Signup.path()>"Create one"</A>
                </p>
            </form>
        </div>
    }
}
