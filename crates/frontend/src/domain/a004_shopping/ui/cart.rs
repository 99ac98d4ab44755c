use contracts::domain::common::CartKind;
use contracts::enums::Page;
use contracts::shared::StoreKey;
use leptos::prelude::*;

use crate::layout::global_context::use_app;
use crate::shared::date_utils::format_timestamp;
use crate::shared::format::format_inr;
use crate::shared::ui::{CartLines, CheckoutPanel, EmptyState, PageHeader};

#[component]
#[allow(non_snake_case)]
pub fn ShoppingCart() -> impl IntoView {
    let app = use_app();

    let recent = move || {
        app.cart_version.track();
        app.recent_bookings(StoreKey::ShoppingOrderHistory)
    };

    view! {
        <div class="page">
            <PageHeader title="Your shopping cart" />
            {move || {
                if app.cart_tracked(CartKind::Shopping).is_empty() {
                    view! {
                        <EmptyState message="Your cart is empty" action=(Page::ShoppingHome, "Continue shopping") />
                    }
                    .into_any()
                } else {
                    view! {
                        <CartLines kind=CartKind::Shopping />
                        <CheckoutPanel kind=CartKind::Shopping />
                    }
                    .into_any()
                }
            }}
            <h2 class="section-title">"Recent orders"</h2>
            {move || recent().into_iter().map(|order| view! {
                <div class="card order-row">
                    <div class="order-row__title">{order.title.clone()}</div>
                    <div class="muted">{format_timestamp(&order.created_at)}</div>
                    <div class="price">{format_inr(order.total)}</div>
                </div>
            }).collect_view()}
        </div>
    }
}
