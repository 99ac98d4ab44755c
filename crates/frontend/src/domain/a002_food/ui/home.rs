use contracts::domain::a002_food::Restaurant;
use contracts::enums::{ModuleKind, Page};
use contracts::shared::StoreKey;
use contracts::system::{FavoriteKey, RecentlyViewedEntry};
use leptos::prelude::*;

use super::super::catalog::{restaurants, RestaurantSearch};
use crate::layout::global_context::{use_app, AppContext};
use crate::shared::format::{format_inr, format_rating};
use crate::shared::icons::icon;
use crate::shared::list_utils::filter_list;
use crate::shared::ui::PageHeader;

pub(super) fn open_restaurant(app: AppContext, restaurant: &Restaurant) {
    app.select(StoreKey::SelectedRestaurant, restaurant);
    app.add_recently_viewed(
        RecentlyViewedEntry::new(restaurant.id.clone(), ModuleKind::Food, restaurant.name.clone())
            .with_subtitle(restaurant.cuisine.clone()),
    );
    app.navigate(Page::FoodMenu);
}

#[component]
#[allow(non_snake_case)]
pub fn FoodHome() -> impl IntoView {
    let app = use_app();
    let query = RwSignal::new(String::new());

    let visible = move || {
        let all: Vec<RestaurantSearch> = restaurants().iter().map(RestaurantSearch).collect();
        query.with(|q| filter_list(all, q))
            .into_iter()
            .map(|r| r.0)
            .collect::<Vec<&'static Restaurant>>()
    };

    view! {
        <div class="page">
            <PageHeader title="Food" subtitle="Order from restaurants near you" hide_back=true>
                <button class="button button--secondary" on:click=move |_| app.navigate(Page::FoodOrders)>
                    "Your orders"
                </button>
            </PageHeader>

            <input
                class="search"
                type="search"
                placeholder="Search restaurants or dishes"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />

            <div class="grid">
                {move || visible().into_iter().map(|r| {
                    let key = FavoriteKey::new("restaurant", &r.id);
                    let toggle_key = key.clone();
                    view! {
                        <div class="card restaurant-card">
                            <div class="restaurant-card__head">
                                <div class="restaurant-card__name">{r.name.clone()}</div>
                                <button
                                    class=move || if app.is_favorite(&key) { "fav fav--on" } else { "fav" }
                                    title="Favorite"
                                    on:click=move |_| { app.toggle_favorite(&toggle_key); }
                                >
                                    {icon("heart")}
                                </button>
                            </div>
                            <div class="muted">{r.cuisine.clone()}</div>
                            <div class="restaurant-card__meta">
                                {format!(
                                    "{} · {} min · {} for two",
                                    format_rating(r.rating),
                                    r.delivery_minutes,
                                    format_inr(r.cost_for_two)
                                )}
                            </div>
                            <button class="button button--primary" on:click=move |_| open_restaurant(app, r)>
                                "View menu"
                            </button>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
