use contracts::domain::a002_food::Restaurant;
use contracts::domain::common::CartKind;
use contracts::enums::Page;
use contracts::shared::StoreKey;
use leptos::prelude::*;

use crate::layout::global_context::use_app;
use crate::shared::format::{format_inr, format_rating, pluralize};
use crate::shared::ui::{EmptyState, PageHeader};

#[component]
#[allow(non_snake_case)]
pub fn FoodMenu() -> impl IntoView {
    let app = use_app();
    let Some(restaurant) = app.selection::<Restaurant>(StoreKey::SelectedRestaurant) else {
        return view! {
            <div class="page">
                <PageHeader title="Menu" />
                <EmptyState message="Pick a restaurant first" action=(Page::FoodHome, "Browse restaurants") />
            </div>
        }
        .into_any();
    };

    let restaurant_id = restaurant.id.clone();
    // a cart from another restaurant is replaced on the first add
    let other_cart = move || {
        app.cart_tracked(CartKind::Food)
            .restaurant
            .filter(|r| r.id != restaurant_id)
            .map(|r| r.name)
    };

    let rows = restaurant
        .menu
        .iter()
        .cloned()
        .map(|item| {
            let owner = restaurant.clone();
            let item_id = item.id.clone();
            let quantity = move || app.cart_tracked(CartKind::Food).quantity_of(&item_id);
            let add = {
                let item = item.clone();
                move |_| {
                    app.add_food_item(&owner, &item);
                }
            };
            let remove_one = {
                let id = item.id.clone();
                move |_| {
                    let current = app.cart(CartKind::Food).quantity_of(&id);
                    app.set_cart_quantity(CartKind::Food, &id, current.saturating_sub(1));
                }
            };
            view! {
                <div class="menu-item">
                    <div class="menu-item__info">
                        <span class={if item.veg { "veg-mark veg-mark--veg" } else { "veg-mark veg-mark--nonveg" }}></span>
                        <div>
                            <div class="menu-item__name">{item.name.clone()}</div>
                            <div class="muted">{item.description.clone()}</div>
                        </div>
                    </div>
                    <div class="price">{format_inr(item.price)}</div>
                    <div class="stepper">
                        <button on:click=remove_one>"−"</button>
                        <span>{quantity}</span>
                        <button on:click=add>"+"</button>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="page">
            <PageHeader
                title=restaurant.name.clone()
                subtitle=format!("{} · {} · {} min", restaurant.cuisine, format_rating(restaurant.rating), restaurant.delivery_minutes)
            />
            {move || other_cart().map(|name| view! {
                <div class="warning-box">{format!("Your cart has items from {}. Adding here starts a new cart.", name)}</div>
            })}
            <div class="menu">{rows}</div>
            {move || {
                let cart = app.cart_tracked(CartKind::Food);
                (!cart.is_empty()).then(|| view! {
                    <div class="cart-bar">
                        <span>{format!("{} · {}", pluralize(cart.item_count() as usize, "item", "items"), format_inr(cart.total))}</span>
                        <button class="button button--primary" on:click=move |_| app.navigate(Page::FoodCart)>"View cart"</button>
                    </div>
                })
            }}
        </div>
    }
    .into_any()
}
