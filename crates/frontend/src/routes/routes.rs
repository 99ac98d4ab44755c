use crate::layout::global_context::use_app;
use crate::layout::Shell;
use crate::routes::registry::render_page;
use leptos::prelude::*;

#[component]
pub fn AppRoutes() -> impl IntoView {
    let app = use_app();

    // Initialize router integration. This runs once when the component is created.
    app.init_router_integration();

    view! {
        <Shell center=move || render_page(app.current_page()) />
    }
}
