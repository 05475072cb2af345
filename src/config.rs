//! Application configuration
//!
//! A single immutable [`AppConfig`] is built at startup by [`AppConfig::load`]
//! and handed to the router, the route guard and the API client. Nothing in
//! here is global: consumers receive the value they need explicitly.

use serde::{Deserialize, Serialize};

/// Used when no API URL override is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Branding, storage keys, API location and development switches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub name: String,
    pub logo: String,
    pub version: String,
    pub copyright: String,
    pub storage_keys: StorageKeys,
    pub api: ApiConfig,
    pub dev: DevConfig,
}

/// Browser storage key names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageKeys {
    pub user: String,
    pub remember: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevConfig {
    /// Disables the login gate (development and demos)
    pub bypass_login: bool,
}

impl AppConfig {
    /// Build the configuration active for this build, reading the API URL
    /// override from the environment once.
    pub fn load() -> Self {
        let api_override = api_url_override();
        let bypass_login = cfg!(feature = "bypass-login");

        let config = if cfg!(feature = "template-config") {
            Self::template(api_override.as_deref(), bypass_login)
        } else {
            Self::cortex(api_override.as_deref(), bypass_login)
        };

        if config.is_template() {
            log::warn!("Running with template configuration, branding placeholders are not filled in");
        }
        if config.dev.bypass_login {
            log::warn!("Login bypass is enabled, protected pages are open");
        }

        config
    }

    /// The production Cortex instance
    pub fn cortex(api_override: Option<&str>, bypass_login: bool) -> Self {
        Self {
            name: "Cortex".to_string(),
            logo: "/logo.png".to_string(),
            version: "1.0.0".to_string(),
            copyright: "© 2026 Cortex. All rights reserved.".to_string(),
            storage_keys: StorageKeys {
                user: "cortex_user".to_string(),
                remember: "cortex_remember".to_string(),
            },
            api: ApiConfig {
                base_url: resolve_base_url(api_override),
            },
            dev: DevConfig { bypass_login },
        }
    }

    /// Placeholder instance whose markers are substituted when the shell is
    /// rebranded for another product
    pub fn template(api_override: Option<&str>, bypass_login: bool) -> Self {
        Self {
            name: "{{APP_NAME}}".to_string(),
            logo: "{{APP_LOGO}}".to_string(),
            version: "{{APP_VERSION}}".to_string(),
            copyright: "{{APP_COPYRIGHT}}".to_string(),
            storage_keys: StorageKeys {
                user: "{{STORAGE_PREFIX}}_user".to_string(),
                remember: "{{STORAGE_PREFIX}}_remember".to_string(),
            },
            api: ApiConfig {
                base_url: resolve_base_url(api_override),
            },
            dev: DevConfig { bypass_login },
        }
    }

    /// True while any branding field still carries a substitution marker
    pub fn is_template(&self) -> bool {
        [
            &self.name,
            &self.logo,
            &self.version,
            &self.copyright,
            &self.storage_keys.user,
            &self.storage_keys.remember,
        ]
        .iter()
        .any(|value| value.contains("{{"))
    }
}

/// Pick the API base URL: a non-blank override wins, otherwise the default
pub fn resolve_base_url(api_override: Option<&str>) -> String {
    api_override
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .to_string()
}

/// Look up the API URL override: window.ENV.API_URL first, then the
/// build-time CORTEX_API_URL variable
fn api_url_override() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsValue;

        if let Some(window) = web_sys::window() {
            if let Ok(env) = js_sys::Reflect::get(&window, &JsValue::from_str("ENV")) {
                if !env.is_undefined() {
                    let runtime = js_sys::Reflect::get(&env, &JsValue::from_str("API_URL"))
                        .ok()
                        .and_then(|v| v.as_string())
                        .filter(|url| !url.trim().is_empty());
                    if runtime.is_some() {
                        return runtime;
                    }
                }
            }
        }
    }

    option_env!("CORTEX_API_URL")
        .filter(|url| !url.trim().is_empty())
        .map(str::to_string)
}
