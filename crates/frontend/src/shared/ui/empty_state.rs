use crate::layout::global_context::use_app;
use contracts::enums::Page;
use leptos::prelude::*;

/// Shown when a page opens without the selection it needs, or a list is empty
#[component]
pub fn EmptyState(
    #[prop(into)] message: String,
    /// Where the action button leads
    #[prop(optional)]
    action: Option<(Page, &'static str)>,
) -> impl IntoView {
    let app = use_app();

    view! {
        <div class="empty-state">
            <p class="empty-state__text">{message}</p>
            {action.map(|(page, label)| view! {
                <button class="button button--primary" on:click=move |_| app.navigate(page)>
                    {label}
                </button>
            })}
        </div>
    }
}
