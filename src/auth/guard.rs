//! Route guard for pages that require a signed-in user

use leptos::*;

/// Read-only view of the authentication state the guard depends on
pub trait AuthStatus {
    fn is_authenticated(&self) -> bool;
    fn is_loading(&self) -> bool;
}

/// What a guarded route should render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the protected content
    Allow,
    /// Authentication state is not known yet
    Loading,
    /// Replace the current history entry with the login page
    RedirectToLogin,
}

/// Decide what a protected route renders.
///
/// The checks run in a fixed order. The bypass flag short-circuits before the
/// auth state is read at all, and a pending auth check takes precedence over a
/// missing session.
pub fn decide<A: AuthStatus + ?Sized>(bypass_login: bool, auth: &A) -> GuardDecision {
    if bypass_login {
        return GuardDecision::Allow;
    }
    if auth.is_loading() {
        return GuardDecision::Loading;
    }
    if !auth.is_authenticated() {
        return GuardDecision::RedirectToLogin;
    }
    GuardDecision::Allow
}

/// Full-screen placeholder shown while the session is being restored
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-pulse">"Loading..."</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FixedAuth {
        authenticated: bool,
        loading: bool,
    }

    impl AuthStatus for FixedAuth {
        fn is_authenticated(&self) -> bool {
            self.authenticated
        }

        fn is_loading(&self) -> bool {
            self.loading
        }
    }

    /// Counts reads so tests can prove the state was never consulted
    #[derive(Default)]
    struct CountingAuth {
        reads: Cell<u32>,
    }

    impl AuthStatus for CountingAuth {
        fn is_authenticated(&self) -> bool {
            self.reads.set(self.reads.get() + 1);
            false
        }

        fn is_loading(&self) -> bool {
            self.reads.set(self.reads.get() + 1);
            true
        }
    }

    fn all_states() -> Vec<FixedAuth> {
        let mut states = Vec::new();
        for authenticated in [false, true] {
            for loading in [false, true] {
                states.push(FixedAuth {
                    authenticated,
                    loading,
                });
            }
        }
        states
    }

    #[test]
    fn test_bypass_allows_every_state() {
        for auth in all_states() {
            assert_eq!(decide(true, &auth), GuardDecision::Allow);
        }
    }

    #[test]
    fn test_bypass_does_not_read_auth_state() {
        let auth = CountingAuth::default();
        assert_eq!(decide(true, &auth), GuardDecision::Allow);
        assert_eq!(auth.reads.get(), 0);
    }

    #[test]
    fn test_loading_shows_placeholder() {
        for authenticated in [false, true] {
            let auth = FixedAuth {
                authenticated,
                loading: true,
            };
            assert_eq!(decide(false, &auth), GuardDecision::Loading);
        }
    }

    #[test]
    fn test_unauthenticated_redirects_to_login() {
        let auth = FixedAuth {
            authenticated: false,
            loading: false,
        };
        assert_eq!(decide(false, &auth), GuardDecision::RedirectToLogin);
    }

    #[test]
    fn test_authenticated_allows() {
        let auth = FixedAuth {
            authenticated: true,
            loading: false,
        };
        assert_eq!(decide(false, &auth), GuardDecision::Allow);
    }

    #[test]
    fn test_trait_object_is_accepted() {
        let auth: Box<dyn AuthStatus> = Box::new(FixedAuth {
            authenticated: true,
            loading: false,
        });
        assert_eq!(decide(false, auth.as_ref()), GuardDecision::Allow);
    }
}
