use leptos::*;
use leptos_router::*;

use crate::app::use_config;
use crate::auth::{use_auth, AuthStatus};
use crate::routes::{replace_history, AppRoute};
use crate::state::use_theme;

/// Sidebar shell around the signed-in pages
#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Sidebar />
            <main class="main-content">{children()}</main>
        </div>
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    let config = use_config();
    let location = use_location();

    let is_active = move |route: AppRoute| location.pathname.get() == route.path();

    view! {
        <aside class="sidebar">
            <A href=AppRoute::Landing.path() class="sidebar-brand">
                <img class="sidebar-logo" src=config.logo.clone() alt="" />
                <span class="sidebar-title">{config.name.clone()}</span>
            </A>
            <nav class="sidebar-nav">
                <A
                    href=AppRoute::Chatbot.path()
                    class=move || if is_active(AppRoute::Chatbot) { "nav-item active" } else { "nav-item" }
                >
                    "Chat"
                </A>
                <A
                    href=AppRoute::Settings.path()
                    class=move || if is_active(AppRoute::Settings) { "nav-item active" } else { "nav-item" }
                >
                    "Settings"
                </A>
            </nav>
            <div class="sidebar-footer">
                <UserBadge />
                <ThemeToggle />
                <span class="sidebar-version">{format!("v{}", config.version)}</span>
            </div>
        </aside>
    }
}

/// Signed-in user with a logout button
#[component]
fn UserBadge() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let logout = move |_| {
        auth.logout();
        navigate(AppRoute::Login.path(), replace_history());
    };

    view! {
        <Show when=move || auth.is_authenticated()>
            <div class="user-badge">
                <span class="user-name">
                    {move || auth.user().map(|u| u.display_name().to_string())}
                </span>
                <button class="logout-button" on:click=logout.clone()>
                    "Log out"
                </button>
            </div>
        </Show>
    }
}

/// Theme toggle button
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            class="theme-toggle"
            aria-label="Toggle theme"
            on:click=move |_| theme.switch()
        >
            {move || theme.get().switch_label()}
        </button>
    }
}
