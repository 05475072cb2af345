use gloo_storage::{LocalStorage, Storage};
use leptos::*;

const STORAGE_KEY: &str = "cortex_theme";
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stored value and `data-theme` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Text for a button that switches to the other theme
    pub fn switch_label(&self) -> &'static str {
        match self.opposite() {
            Theme::Light => "Light mode",
            Theme::Dark => "Dark mode",
        }
    }

    /// A saved choice wins over the system preference
    pub fn resolve(saved: Option<&str>, system_dark: bool) -> Self {
        match saved.and_then(Theme::parse) {
            Some(theme) => theme,
            None if system_dark => Theme::Dark,
            None => Theme::Light,
        }
    }
}

/// Shared handle to the active theme.
///
/// Changes are written to local storage and to the document root.
#[derive(Clone, Copy)]
pub struct ThemeContext(RwSignal<Theme>);

impl ThemeContext {
    pub fn get(&self) -> Theme {
        self.0.get()
    }

    pub fn switch(&self) {
        self.0.update(|theme| *theme = theme.opposite());
    }
}

fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media(DARK_QUERY).ok().flatten())
        .is_some_and(|query| query.matches())
}

fn persist(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
    if let Err(e) = LocalStorage::set(STORAGE_KEY, theme.as_str()) {
        log::warn!("Failed to save theme: {}", e);
    }
}

pub fn provide_theme_context() {
    let saved = LocalStorage::get::<String>(STORAGE_KEY).ok();
    let theme = create_rw_signal(Theme::resolve(saved.as_deref(), system_prefers_dark()));
    log::debug!("Using {} theme", theme.get_untracked().as_str());

    create_effect(move |_| persist(theme.get()));

    provide_context(ThemeContext(theme));
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext must be provided by a parent component")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_choice_wins() {
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
        assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn test_unreadable_choice_uses_system() {
        assert_eq!(Theme::resolve(Some("Dark"), false), Theme::Light);
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
    }

    #[test]
    fn test_switch_label_names_other_theme() {
        assert_eq!(Theme::Light.opposite(), Theme::Dark);
        assert_eq!(Theme::Light.switch_label(), "Dark mode");
        assert_eq!(Theme::Dark.switch_label(), "Light mode");
    }

    #[test]
    fn test_context_switches() {
        let runtime = create_runtime();
        let ctx = ThemeContext(create_rw_signal(Theme::Dark));

        ctx.switch();
        assert_eq!(ctx.get(), Theme::Light);
        ctx.switch();
        assert_eq!(ctx.get(), Theme::Dark);

        runtime.dispose();
    }
}
