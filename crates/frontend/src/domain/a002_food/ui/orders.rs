use contracts::enums::Page;
use contracts::shared::StoreKey;
use leptos::prelude::*;

use crate::layout::global_context::use_app;
use crate::shared::date_utils::format_timestamp;
use crate::shared::format::format_inr;
use crate::shared::ui::{EmptyState, PageHeader};
use crate::usecases::u503_repeat_order::repeat_order;

#[component]
#[allow(non_snake_case)]
pub fn FoodOrders() -> impl IntoView {
    let app = use_app();

    let history = move || {
        app.cart_version.track();
        app.order_history(StoreKey::FoodOrderHistory)
    };

    view! {
        <div class="page">
            <PageHeader title="Your orders" />
            {move || {
                let orders = history();
                if orders.is_empty() {
                    return view! {
                        <EmptyState message="No orders yet" action=(Page::FoodHome, "Order food") />
                    }
                    .into_any();
                }
                orders.into_iter().map(|order| {
                    let lines = order
                        .items
                        .iter()
                        .map(|l| format!("{} × {}", l.quantity, l.name))
                        .collect::<Vec<_>>()
                        .join(", ");
                    let total = order.total;
                    let placed_at = format_timestamp(&order.created_at);
                    let title = order.title.clone();
                    let saved = (order.discount > 0.0).then(|| format!("Saved {}", format_inr(order.discount)));
                    view! {
                        <div class="card order-row">
                            <div class="order-row__title">{title}</div>
                            <div class="muted">{placed_at}</div>
                            <div>{lines}</div>
                            {saved.map(|s| view! { <div class="badge">{s}</div> })}
                            <div class="price">{format_inr(total)}</div>
                            <button class="button button--secondary" on:click=move |_| {
                                if repeat_order(&app, &order).is_some() {
                                    app.navigate(Page::FoodCart);
                                }
                            }>
                                "Repeat"
                            </button>
                        </div>
                    }
                }).collect_view().into_any()
            }}
        </div>
    }
}
