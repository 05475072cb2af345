use leptos::*;

use super::guard::AuthStatus;
use super::storage::SessionStore;
use crate::api::{ApiClient, ApiError};
use crate::config::AppConfig;
use crate::models::{LoginRequest, SignupRequest, User, UserUpdate};

#[derive(Clone)]
struct AuthServices {
    api: ApiClient,
    store: SessionStore,
}

/// Authentication state shared with the whole app.
///
/// Only the methods on this type change the state; everything else reads it
/// through [`AuthStatus`] or [`AuthContext::user`].
#[derive(Clone, Copy)]
pub struct AuthContext {
    user: RwSignal<Option<User>>,
    signed_in: Memo<bool>,
    loading: RwSignal<bool>,
    services: StoredValue<AuthServices>,
}

impl AuthContext {
    /// Create the context in the loading state; call [`AuthContext::restore`]
    /// to finish it
    pub fn new(api: ApiClient, store: SessionStore) -> Self {
        let user = create_rw_signal(None::<User>);
        Self {
            user,
            // Profile edits replace the user record without changing this
            signed_in: create_memo(move |_| user.with(Option::is_some)),
            loading: create_rw_signal(true),
            services: store_value(AuthServices { api, store }),
        }
    }

    /// Current user (tracked)
    pub fn user(&self) -> Option<User> {
        self.user.get()
    }

    pub fn user_signal(&self) -> Signal<Option<User>> {
        self.user.into()
    }

    /// API client carrying the current session token
    pub fn api(&self) -> ApiClient {
        let token = self
            .user
            .with_untracked(|user| user.as_ref().and_then(|u| u.token.clone()));
        self.services.with_value(|s| s.api.clone()).with_token(token)
    }

    /// Load the stored session and leave the loading state
    pub fn restore(&self) {
        let user = self.services.with_value(|s| s.store.load());
        match user {
            Some(ref u) => log::info!("Restored session for user {}", u.id),
            None => log::debug!("No stored session"),
        }
        self.finish_restore(user);
    }

    pub(crate) fn finish_restore(&self, user: Option<User>) {
        self.user.set(user);
        self.loading.set(false);
    }

    /// Sign in with email and password
    pub async fn login(&self, request: LoginRequest) -> Result<User, ApiError> {
        let user = self.api().login(&request).await?;
        log::info!("Logged in as user {}", user.id);
        self.services
            .with_value(|s| s.store.save(&user, request.remember_me));
        self.user.set(Some(user.clone()));
        Ok(user)
    }

    /// Create an account and sign in with it
    pub async fn signup(&self, request: SignupRequest) -> Result<User, ApiError> {
        let user = self.api().signup(&request).await?;
        log::info!("Signed up as user {}", user.id);
        self.services.with_value(|s| s.store.save(&user, false));
        self.user.set(Some(user.clone()));
        Ok(user)
    }

    /// Update the signed-in user's profile
    pub async fn update_profile(&self, update: UserUpdate) -> Result<User, ApiError> {
        let current = self
            .user
            .get_untracked()
            .ok_or_else(|| ApiError::Unauthorized("Please sign in again".to_string()))?;

        let updated = self.api().update_user(current.id, &update).await?;
        let user = merge_session(&current, updated);

        self.services.with_value(|s| {
            let remember = s.store.remembered();
            s.store.save(&user, remember);
        });
        self.user.set(Some(user.clone()));
        Ok(user)
    }

    /// Drop the session
    pub fn logout(&self) {
        if let Some(user) = self.user.get_untracked() {
            log::info!("Logging out user {}", user.id);
        }
        self.services.with_value(|s| s.store.clear());
        self.user.set(None);
    }
}

impl AuthStatus for AuthContext {
    fn is_authenticated(&self) -> bool {
        self.signed_in.get()
    }

    fn is_loading(&self) -> bool {
        self.loading.get()
    }
}

/// Keep the session token when the backend response omits it
fn merge_session(current: &User, mut updated: User) -> User {
    if updated.token.is_none() {
        updated.token = current.token.clone();
    }
    if updated.created_at.is_none() {
        updated.created_at = current.created_at.clone();
    }
    updated
}

/// Provide the auth context to the application and start restoring the
/// stored session
pub fn provide_auth_context(config: &AppConfig) -> AuthContext {
    let auth = AuthContext::new(
        ApiClient::new(&config.api),
        SessionStore::new(config.storage_keys.clone()),
    );
    provide_context(auth);

    spawn_local(async move {
        auth.restore();
    });

    auth
}

/// Hook to access auth context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext must be provided by a parent component")
}
