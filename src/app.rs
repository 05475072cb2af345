use leptos::*;
use leptos_router::*;

use crate::auth::{provide_auth_context, AuthContext, LoadingScreen};
use crate::components::AppLayout;
use crate::config::{AppConfig, DevConfig};
use crate::pages::{Chatbot, Landing, Login, NotFound, Settings, Signup};
use crate::routes::{create_navigation, replace_history, AppRoute, Fallback, Navigation};
use crate::state::provide_theme_context;

/// Main application component with routing.
///
/// `config` is built once at startup and shared through context; `fallback`
/// decides what unmatched paths render.
#[component]
pub fn App(config: AppConfig, #[prop(optional)] fallback: Fallback) -> impl IntoView {
    provide_theme_context();
    let auth = provide_auth_context(&config);
    let dev = config.dev;
    provide_context(config);

    view! {
        <Router>
            <Routes>
                // Every path goes through the route table in `routes`
                <Route
                    path="/*any"
                    view=move || view! { <RouteView dev=dev auth=auth fallback=fallback /> }
                />
            </Routes>
        </Router>
    }
}

/// Renders whatever the route table resolves the current path to
#[component]
fn RouteView(dev: DevConfig, auth: AuthContext, fallback: Fallback) -> impl IntoView {
    let navigation = create_navigation(use_location().pathname.into(), dev, auth, fallback);

    move || match navigation.get() {
        Navigation::Render(route) if route.has_layout() => {
            view! { <AppLayout>{page(route)}</AppLayout> }.into_view()
        }
        Navigation::Render(route) => page(route),
        Navigation::Loading => view! { <LoadingScreen /> }.into_view(),
        Navigation::Replace(target) => {
            log::debug!("Redirecting to {}", target.path());
            view! { <Redirect path=target.path() options=replace_history() /> }.into_view()
        }
        Navigation::NotFound => view! { <NotFound /> }.into_view(),
    }
}

fn page(route: AppRoute) -> View {
    match route {
        AppRoute::Landing => view! { <Landing /> }.into_view(),
        AppRoute::Login => view! { <Login /> }.into_view(),
        AppRoute::Signup => view! { <Signup /> }.into_view(),
        AppRoute::Chatbot => view! { <Chatbot /> }.into_view(),
        AppRoute::Settings => view! { <Settings /> }.into_view(),
    }
}

/// Hook to access the application configuration
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig must be provided by the App component")
}
