use leptos::*;
use leptos_router::*;

use crate::app::use_config;
use crate::auth::use_auth;
use crate::models::SignupRequest;
use crate::routes::{replace_history, AppRoute};

/// Account creation form
#[component]
pub fn Signup() -> impl IntoView {
    let config = use_config();
    let auth = use_auth();
    let navigate = use_navigate();

    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (confirm, set_confirm) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let submit = create_action(move |request: &SignupRequest| {
        let request = request.clone();
        async move { auth.signup(request).await }
    });

    create_effect(move |_| match submit.value().get() {
        Some(Ok(_)) => navigate(AppRoute::Chatbot.path(), replace_history()),
        Some(Err(e)) => set_error.set(Some(e.user_message())),
        None => {}
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let name = name.get_untracked().trim().to_string();
        let request = SignupRequest {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            name: (!name.is_empty()).then_some(name),
        };
        match request.validate(&confirm.get_untracked()) {
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
                <h2>{format!("Create your {} account", config.name)}</h2>

                {move || error.get().map(|message| view! {
                    <div class="error-banner">{message}</div>
                })}

                <label class="field">
                    <span>"Name (optional)"</span>
                    <input
                        type="text"
                        autocomplete="name"
                        prop:value=name
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </label>
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
                        autocomplete="new-password"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Confirm password"</span>
                    <input
                        type="password"
                        autocomplete="new-password"
                        prop:value=confirm
                        on:input=move |ev| set_confirm.set(event_target_value(&ev))
                    />
                </label>

                <button type="submit" class="button primary" disabled=move || submit.pending().get()>
                    {move || if submit.pending().get() { "Creating account..." } else { "Create account" }}
                </button>

                <p class="auth-switch">
                    "Already have an account? "
                    <A href=AppRoute::Login.path()>"Sign in"</A>
                </p>
            </form>
        </div>
    }
}
