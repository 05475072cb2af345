use leptos::*;
use leptos_router::*;

use crate::routes::AppRoute;

/// Shown for paths outside the route table
#[component]
pub fn NotFound() -> impl IntoView {
    let location = use_location();
    log::debug!("No route for {}", location.pathname.get_untracked());

    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"This page does not exist."</p>
            <A href=AppRoute::Landing.path() class="button">
                "Back to home"
            </A>
        </div>
    }
}
