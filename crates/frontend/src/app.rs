use crate::config::AppConfig;
use crate::layout::global_context::AppContext;
use crate::routes::routes::AppRoutes;
use crate::shared::storage::PersistedStore;
use leptos::prelude::*;

#[component]
pub fn App(store: PersistedStore, config: AppConfig) -> impl IntoView {
    // Provide the AppContext to the whole app via context.
    provide_context(AppContext::new(store, config));

    view! {
        <AppRoutes />
    }
}
