use contracts::domain::common::CartKind;
use contracts::enums::Page;
use leptos::prelude::*;

use crate::layout::global_context::use_app;
use crate::shared::ui::{CartLines, CheckoutPanel, EmptyState, PageHeader};

#[component]
#[allow(non_snake_case)]
pub fn FoodCart() -> impl IntoView {
    let app = use_app();

    view! {
        <div class="page">
            <PageHeader title="Your food cart" />
            {move || {
                let cart = app.cart_tracked(CartKind::Food);
                if cart.is_empty() {
                    view! {
                        <EmptyState message="Your cart is empty" action=(Page::FoodHome, "Browse restaurants") />
                    }
                    .into_any()
                } else {
                    let from = cart.restaurant.map(|r| r.name).unwrap_or_default();
                    view! {
                        <div class="muted">{format!("From {}", from)}</div>
                        <CartLines kind=CartKind::Food />
                        <CheckoutPanel kind=CartKind::Food on_placed=Page::FoodOrders />
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
