use contracts::domain::a004_shopping::Product;
use contracts::domain::common::CartKind;
use contracts::enums::Page;
use contracts::shared::StoreKey;
use contracts::system::FavoriteKey;
use leptos::prelude::*;

use super::super::compare::CompareOutcome;
use crate::layout::global_context::use_app;
use crate::shared::format::{format_inr, format_rating};
use crate::shared::icons::icon;
use crate::shared::ui::{EmptyState, PageHeader};

#[component]
#[allow(non_snake_case)]
pub fn ShoppingDetails() -> impl IntoView {
    let app = use_app();
    let Some(product) = app.selection::<Product>(StoreKey::SelectedProduct) else {
        return view! {
            <div class="page">
                <PageHeader title="Product" />
                <EmptyState message="No product selected" action=(Page::ShoppingHome, "Browse products") />
            </div>
        }
        .into_any();
    };

    let (notice, set_notice) = signal::<Option<String>>(None);
    let fav_key = FavoriteKey::new("product", &product.id);
    let toggle_key = fav_key.clone();
    let product_id = product.id.clone();
    let in_cart = move || app.cart_tracked(CartKind::Shopping).quantity_of(&product_id);

    let add_to_cart = {
        let product = product.clone();
        move |_| {
            app.add_to_cart(CartKind::Shopping, product.to_cart_line());
            set_notice.set(Some("Added to cart".to_string()));
        }
    };

    let add_to_compare = {
        let product = product.clone();
        move |_| {
            let max = app.config().compare.max_items;
            let text = match app.add_to_compare(&product) {
                CompareOutcome::Added => "Added to compare".to_string(),
                CompareOutcome::AlreadyPresent => "Already in compare".to_string(),
                CompareOutcome::Full => format!("You can compare up to {} products", max),
            };
            set_notice.set(Some(text));
        }
    };

    let specs = product
        .specs
        .iter()
        .map(|(name, value)| view! {
            <tr><td class="muted">{name.clone()}</td><td>{value.clone()}</td></tr>
        })
        .collect_view();

    view! {
        <div class="page">
            <PageHeader title=product.name.clone() subtitle=format!("{} · {}", product.brand, product.category)>
                <button
                    class=move || if app.is_favorite(&fav_key) { "fav fav--on" } else { "fav" }
                    title="Favorite"
                    on:click=move |_| { app.toggle_favorite(&toggle_key); }
                >
                    {icon("heart")}
                </button>
            </PageHeader>

            <div class="card product-details">
                <div class="product-details__price">
                    <span class="price">{format_inr(product.price)}</span>
                    <span class="strike">{format_inr(product.mrp)}</span>
                    <span class="badge">{format!("{}% off", product.discount_percent())}</span>
                </div>
                <div class="muted">{format_rating(product.rating)}</div>
                <table class="specs">
                    <tbody>{specs}</tbody>
                </table>
                <div class="product-details__actions">
                    <button class="button button--primary" on:click=add_to_cart>
                        {icon("cart")}
                        {move || match in_cart() {
                            0 => "Add to cart".to_string(),
                            n => format!("Add another ({} in cart)", n),
                        }}
                    </button>
                    <button class="button button--secondary" on:click=add_to_compare>
                        {icon("compare")}
                        "Compare"
                    </button>
                    <button class="button button--ghost" on:click=move |_| app.navigate(Page::ShoppingCompare)>
                        "Open compare"
                    </button>
                </div>
                {move || notice.get().map(|n| view! { <div class="success-box">{n}</div> })}
            </div>
        </div>
    }
    .into_any()
}
