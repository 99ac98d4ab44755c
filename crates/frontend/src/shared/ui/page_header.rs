use crate::layout::global_context::use_app;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// PageHeader component - title row with a back button and page actions
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    /// Hidden on module home pages
    #[prop(optional)]
    hide_back: bool,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let app = use_app();

    view! {
        <div class="page-header">
            <div class="page-header__content">
                {(!hide_back).then(|| view! {
                    <button class="page-header__back" title="Back" on:click=move |_| app.go_back()>
                        {icon("arrow-left")}
                    </button>
                })}
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {subtitle.map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
