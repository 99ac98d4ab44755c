use contracts::enums::Page;
use leptos::prelude::*;

use crate::shared::ui::EmptyState;

#[component]
#[allow(non_snake_case)]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page">
            <EmptyState message="This page does not exist." action=(Page::Home, "Back to home") />
        </div>
    }
}
