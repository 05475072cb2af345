use leptos::*;
use leptos_router::*;

use crate::app::use_config;
use crate::auth::{use_auth, AuthStatus};
use crate::components::ThemeToggle;
use crate::models::UserUpdate;
use crate::routes::{replace_history, AppRoute};

/// Account and appearance settings
#[component]
pub fn Settings() -> impl IntoView {
    let config = use_config();
    let auth = use_auth();

    view! {
        <div class="settings-page">
            <h2>"Settings"</h2>

            <Show
                when=move || auth.is_authenticated()
                fallback=|| view! {
                    <section class="settings-section">
                        <h3>"Profile"</h3>
                        <p class="placeholder-text">"No signed-in account."</p>
                    </section>
                }
            >
                <ProfileForm />
                <AccountSection />
            </Show>

            <section class="settings-section">
                <h3>"Appearance"</h3>
                <ThemeToggle />
            </section>

            <section class="settings-section about">
                <h3>"About"</h3>
                <div class="setting-item">
                    <span class="setting-label">"Version"</span>
                    <span class="setting-value">{config.version.clone()}</span>
                </div>
                <div class="setting-item">
                    <span class="setting-label">"API"</span>
                    <span class="setting-value">{config.api.base_url.clone()}</span>
                </div>
                <p class="copyright">{config.copyright.clone()}</p>
            </section>
        </div>
    }
}

/// Name, email and password update form
#[component]
fn ProfileForm() -> impl IntoView {
    let auth = use_auth();
    let current = auth.user_signal().get_untracked();

    let (name, set_name) = create_signal(
        current
            .as_ref()
            .and_then(|u| u.name.clone())
            .unwrap_or_default(),
    );
    let (email, set_email) = create_signal(current.map(|u| u.email).unwrap_or_default());
    let (password, set_password) = create_signal(String::new());
    let (status, set_status) = create_signal(None::<Result<String, String>>);

    let save = create_action(move |update: &UserUpdate| {
        let update = update.clone();
        async move { auth.update_profile(update).await }
    });

    create_effect(move |_| match save.value().get() {
        Some(Ok(_)) => {
            set_password.set(String::new());
            set_status.set(Some(Ok("Profile updated".to_string())));
        }
        Some(Err(e)) => set_status.set(Some(Err(e.user_message()))),
        None => {}
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let Some(user) = auth.user_signal().get_untracked() else {
            return;
        };
        let update = UserUpdate::from_form(
            &user,
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
        );
        match update.validate() {
            Ok(()) => {
                set_status.set(None);
                save.dispatch(update);
            }
            Err(e) => set_status.set(Some(Err(e.to_string()))),
        }
    };

    view! {
        <section class="settings-section">
            <h3>"Profile"</h3>
            <form class="profile-form" on:submit=on_submit>
                {move || status.get().map(|status| match status {
                    Ok(message) => view! { <div class="success-banner">{message}</div> },
                    Err(message) => view! { <div class="error-banner">{message}</div> },
                })}

                <label class="field">
                    <span>"Name"</span>
                    <input
                        type="text"
                        prop:value=name
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Email"</span>
                    <input
                        type="email"
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"New password"</span>
                    <input
                        type="password"
                        autocomplete="new-password"
                        placeholder="Leave blank to keep the current one"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>

                <button type="submit" class="button primary" disabled=move || save.pending().get()>
                    {move || if save.pending().get() { "Saving..." } else { "Save changes" }}
                </button>
            </form>
        </section>
    }
}

#[component]
fn AccountSection() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let logout = move |_| {
        auth.logout();
        navigate(AppRoute::Login.path(), replace_history());
    };

    view! {
        <section class="settings-section">
            <h3>"Account"</h3>
            <button class="button danger" on:click=logout>
                "Log out"
            </button>
        </section>
    }
}
