use contracts::enums::Page;
use leptos::prelude::*;

use super::super::catalog::spec_names;
use super::home::open_product;
use crate::layout::global_context::use_app;
use crate::shared::format::{format_inr, format_rating};
use crate::shared::icons::icon;
use crate::shared::ui::{EmptyState, PageHeader};

#[component]
#[allow(non_snake_case)]
pub fn ShoppingCompare() -> impl IntoView {
    let app = use_app();
    let items = RwSignal::new(app.visible_compare_items());

    let clear = move |_| {
        app.clear_compare();
        items.set(Vec::new());
    };

    view! {
        <div class="page">
            <PageHeader title="Compare products">
                <button class="button button--ghost" on:click=clear>"Clear all"</button>
            </PageHeader>
            {move || {
                let products = items.get();
                if products.is_empty() {
                    return view! {
                        <EmptyState message="Add products to compare them side by side" action=(Page::ShoppingHome, "Browse products") />
                    }
                    .into_any();
                }
                let names = spec_names(&products);
                let header = products.iter().cloned().map(|p| {
                    let id = p.id.clone();
                    let name = p.name.clone();
                    view! {
                        <th>
                            <button class="link" on:click=move |_| open_product(app, &p)>{name}</button>
                            <button class="button button--ghost" title="Remove" on:click=move |_| items.set(app.remove_from_compare(&id))>
                                {icon("delete")}
                            </button>
                        </th>
                    }
                }).collect_view();
                let price_row = products.iter().map(|p| view! { <td class="price">{format_inr(p.price)}</td> }).collect_view();
                let rating_row = products.iter().map(|p| view! { <td>{format_rating(p.rating)}</td> }).collect_view();
                let spec_rows = names.into_iter().map(|name| {
                    let cells = products
                        .iter()
                        .map(|p| view! { <td>{p.specs.get(&name).cloned().unwrap_or_else(|| "—".to_string())}</td> })
                        .collect_view();
                    view! { <tr><td class="muted">{name}</td>{cells}</tr> }
                }).collect_view();
                view! {
                    <table class="compare">
                        <thead><tr><th></th>{header}</tr></thead>
                        <tbody>
                            <tr><td class="muted">"Price"</td>{price_row}</tr>
                            <tr><td class="muted">"Rating"</td>{rating_row}</tr>
                            {spec_rows}
                        </tbody>
                    </table>
                }
                .into_any()
            }}
        </div>
    }
}
