//! Route table: the fixed set of paths and how each one resolves

use leptos::{create_memo, Memo, Signal, SignalWith};
use leptos_router::NavigateOptions;

use crate::auth::{decide, AuthStatus, GuardDecision};
use crate::config::DevConfig;

/// Every path the app serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Landing,
    Login,
    Signup,
    Chatbot,
    Settings,
}

impl AppRoute {
    pub const ALL: [AppRoute; 5] = [
        AppRoute::Landing,
        AppRoute::Login,
        AppRoute::Signup,
        AppRoute::Chatbot,
        AppRoute::Settings,
    ];

    pub fn path(self) -> &'static str {
        match self {
            AppRoute::Landing => "/",
            AppRoute::Login => "/login",
            AppRoute::Signup => "/signup",
            AppRoute::Chatbot => "/chatbot",
            AppRoute::Settings => "/settings",
        }
    }

    /// Exact, case-sensitive match; no trailing-slash normalization
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Requires a signed-in user (unless login is bypassed)
    pub fn is_protected(self) -> bool {
        matches!(self, AppRoute::Chatbot | AppRoute::Settings)
    }

    /// Rendered inside the sidebar layout
    pub fn has_layout(self) -> bool {
        self.is_protected()
    }
}

/// What to do with a path nothing in the table matches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Fallback {
    /// Render the "page not found" screen
    #[default]
    NotFoundPage,
    /// Replace the current history entry with another route
    Redirect(AppRoute),
}

/// Result of resolving a navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Render the page for this route
    Render(AppRoute),
    /// Render the loading placeholder
    Loading,
    /// Redirect, replacing the current history entry
    Replace(AppRoute),
    /// Render the "page not found" screen
    NotFound,
}

/// Redirect applied to the auth pages while login is bypassed.
///
/// `/login` goes to the chatbot, `/signup` goes to the landing page.
pub fn bypass_redirect(route: AppRoute, dev: &DevConfig) -> Option<AppRoute> {
    if !dev.bypass_login {
        return None;
    }
    match route {
        AppRoute::Login => Some(AppRoute::Chatbot),
        AppRoute::Signup => Some(AppRoute::Landing),
        _ => None,
    }
}

/// Resolve a known route against the dev flags and the auth state
pub fn resolve<A: AuthStatus + ?Sized>(route: AppRoute, dev: &DevConfig, auth: &A) -> Navigation {
    if let Some(target) = bypass_redirect(route, dev) {
        return Navigation::Replace(target);
    }
    if !route.is_protected() {
        return Navigation::Render(route);
    }
    match decide(dev.bypass_login, auth) {
        GuardDecision::Allow => Navigation::Render(route),
        GuardDecision::Loading => Navigation::Loading,
        GuardDecision::RedirectToLogin => Navigation::Replace(AppRoute::Login),
    }
}

/// Resolve a raw path, applying the fallback policy to unknown paths
pub fn resolve_path<A: AuthStatus + ?Sized>(
    path: &str,
    dev: &DevConfig,
    auth: &A,
    fallback: Fallback,
) -> Navigation {
    match AppRoute::from_path(path) {
        Some(route) => resolve(route, dev, auth),
        None => match fallback {
            Fallback::NotFoundPage => Navigation::NotFound,
            Fallback::Redirect(target) => Navigation::Replace(target),
        },
    }
}

/// Track the navigation for the current path.
///
/// The memo only notifies when the outcome changes, so a page stays mounted
/// while the user record changes underneath it.
pub fn create_navigation<A>(
    path: Signal<String>,
    dev: DevConfig,
    auth: A,
    fallback: Fallback,
) -> Memo<Navigation>
where
    A: AuthStatus + 'static,
{
    create_memo(move |_| path.with(|path| resolve_path(path, &dev, &auth, fallback)))
}

/// Navigation options that overwrite the current history entry
pub fn replace_history() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..Default::default()
    }
}
