//! Browser tests, run with `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use cortex_web::auth::{AuthStatus, SessionStore};
use cortex_web::config::{AppConfig, StorageKeys};
use cortex_web::models::User;
use gloo_storage::{LocalStorage, SessionStorage, Storage};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn store(prefix: &str) -> SessionStore {
    SessionStore::new(StorageKeys {
        user: format!("{}_user", prefix),
        remember: format!("{}_remember", prefix),
    })
}

fn user() -> User {
    User {
        id: 5,
        email: "ada@example.com".to_string(),
        name: Some("Ada".to_string()),
        token: Some("jwt".to_string()),
        created_at: None,
    }
}

#[wasm_bindgen_test]
fn remembered_session_goes_to_local_storage() {
    let store = store("test_remember");
    store.save(&user(), true);

    assert!(store.remembered());
    assert_eq!(store.load(), Some(user()));
    assert!(LocalStorage::get::<User>("test_remember_user").is_ok());
    assert!(SessionStorage::get::<User>("test_remember_user").is_err());

    store.clear();
}

#[wasm_bindgen_test]
fn unremembered_session_goes_to_session_storage() {
    let store = store("test_session");
    store.save(&user(), false);

    assert!(!store.remembered());
    assert_eq!(store.load(), Some(user()));
    assert!(LocalStorage::get::<User>("test_session_user").is_err());

    store.clear();
}

#[wasm_bindgen_test]
fn clear_removes_everything() {
    let store = store("test_clear");
    store.save(&user(), true);
    store.clear();

    assert_eq!(store.load(), None);
    assert!(!store.remembered());
}

#[wasm_bindgen_test]
fn restore_reads_stored_session() {
    use cortex_web::api::ApiClient;
    use cortex_web::auth::AuthContext;

    let runtime = leptos::create_runtime();
    let config = AppConfig::cortex(None, false);
    let store = store("test_restore");
    store.save(&user(), true);

    let auth = AuthContext::new(ApiClient::new(&config.api), store.clone());
    assert!(auth.is_loading());

    auth.restore();
    assert!(!auth.is_loading());
    assert!(auth.is_authenticated());

    auth.logout();
    assert!(!auth.is_authenticated());
    assert_eq!(store.load(), None);

    runtime.dispose();
}

mod mounted {
    use cortex_web::app::App;
    use cortex_web::auth::SessionStore;
    use cortex_web::config::AppConfig;
    use cortex_web::routes::{AppRoute, Fallback};
    use gloo_timers::future::TimeoutFuture;
    use leptos::*;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_test::*;

    /// App mounted into its own container, removed again on drop
    struct Mounted {
        container: web_sys::HtmlElement,
        history_before: u32,
    }

    impl Mounted {
        fn has(&self, selector: &str) -> bool {
            self.container
                .query_selector(selector)
                .ok()
                .flatten()
                .is_some()
        }

        fn pathname(&self) -> String {
            window().location().pathname().unwrap()
        }

        fn history_grew(&self) -> bool {
            window().history().unwrap().length().unwrap() > self.history_before
        }
    }

    impl Drop for Mounted {
        fn drop(&mut self) {
            self.container.remove();
        }
    }

    async fn render_at(
        path: &str,
        config: AppConfig,
        fallback: Fallback,
        signed_in: bool,
    ) -> Mounted {
        let store = SessionStore::new(config.storage_keys.clone());
        store.clear();
        if signed_in {
            store.save(&super::user(), true);
        }

        let history = window().history().unwrap();
        history
            .replace_state_with_url(&JsValue::NULL, "", Some(path))
            .unwrap();
        let history_before = history.length().unwrap();

        let container = document()
            .create_element("div")
            .unwrap()
            .unchecked_into::<web_sys::HtmlElement>();
        document().body().unwrap().append_child(&container).unwrap();

        mount_to(container.clone(), move || {
            view! { <App config=config fallback=fallback /> }
        });

        // Session restore and redirects run asynchronously
        TimeoutFuture::new(200).await;

        Mounted {
            container,
            history_before,
        }
    }

    fn config(bypass_login: bool) -> AppConfig {
        AppConfig::cortex(None, bypass_login)
    }

    #[wasm_bindgen_test]
    async fn unknown_path_shows_not_found() {
        let app = render_at("/nowhere", config(false), Fallback::default(), false).await;

        assert!(app.has(".not-found"));
        assert_eq!(app.pathname(), "/nowhere");
    }

    #[wasm_bindgen_test]
    async fn unknown_path_can_redirect() {
        let fallback = Fallback::Redirect(AppRoute::Landing);
        let app = render_at("/nowhere", config(false), fallback, false).await;

        assert!(app.has(".landing"));
        assert_eq!(app.pathname(), "/");
        assert!(!app.history_grew());
    }

    #[wasm_bindgen_test]
    async fn signed_out_chatbot_replaces_with_login() {
        let app = render_at("/chatbot", config(false), Fallback::default(), false).await;

        assert_eq!(app.pathname(), "/login");
        assert!(app.has(".auth-card"));
        assert!(!app.has(".app-layout"));
        assert!(!app.history_grew());
    }

    #[wasm_bindgen_test]
    async fn signed_out_settings_replaces_with_login() {
        let app = render_at("/settings", config(false), Fallback::default(), false).await;

        assert_eq!(app.pathname(), "/login");
        assert!(!app.history_grew());
    }

    #[wasm_bindgen_test]
    async fn signed_in_settings_renders_in_layout() {
        let app = render_at("/settings", config(false), Fallback::default(), true).await;

        assert_eq!(app.pathname(), "/settings");
        assert!(app.has(".app-layout .settings-page"));
    }

    #[wasm_bindgen_test]
    async fn signed_in_chatbot_renders_in_layout() {
        let app = render_at("/chatbot", config(false), Fallback::default(), true).await;

        assert!(app.has(".app-layout .chat-page"));
    }

    #[wasm_bindgen_test]
    async fn bypassed_login_goes_to_chatbot() {
        let app = render_at("/login", config(true), Fallback::default(), false).await;

        assert_eq!(app.pathname(), "/chatbot");
        assert!(app.has(".app-layout .chat-page"));
        assert!(!app.history_grew());
    }

    #[wasm_bindgen_test]
    async fn bypassed_signup_goes_to_landing() {
        let app = render_at("/signup", config(true), Fallback::default(), false).await;

        assert_eq!(app.pathname(), "/");
        assert!(app.has(".landing"));
        assert!(!app.history_grew());
    }

    #[wasm_bindgen_test]
    async fn bypass_opens_guarded_pages_without_session() {
        let app = render_at("/settings", config(true), Fallback::default(), false).await;

        assert_eq!(app.pathname(), "/settings");
        assert!(app.has(".app-layout .settings-page"));
    }

    #[wasm_bindgen_test]
    async fn landing_has_no_layout() {
        let app = render_at("/", config(false), Fallback::default(), false).await;

        assert!(app.has(".landing"));
        assert!(!app.has(".app-layout"));
    }
}
