use leptos::*;
use leptos_router::*;

use crate::app::use_config;
use crate::auth::{use_auth, AuthStatus};
use crate::routes::AppRoute;

/// Public landing page, no sidebar
#[component]
pub fn Landing() -> impl IntoView {
    let config = use_config();
    let auth = use_auth();
    let bypass_login = config.dev.bypass_login;

    // Straight to the chat when there is nothing to sign in to
    let can_chat = move || bypass_login || auth.is_authenticated();

    view! {
        <div class="landing">
            <header class="landing-header">
                <img class="landing-logo" src=config.logo.clone() alt=config.name.clone() />
                <h1>{config.name.clone()}</h1>
                <p class="landing-tagline">
                    "Your AI-powered knowledge assistant. Ask questions, keep context, build memory."
                </p>
            </header>

            <div class="landing-actions">
                <Show
                    when=can_chat
                    fallback=|| view! {
                        <A href=AppRoute::Login.path() class="button primary">"Sign in"</A>
                        <A href=AppRoute::Signup.path() class="button">"Create account"</A>
                    }
                >
                    <A href=AppRoute::Chatbot.path() class="button primary">"Open chat"</A>
                </Show>
            </div>

            <footer class="landing-footer">{config.copyright.clone()}</footer>
        </div>
    }
}
