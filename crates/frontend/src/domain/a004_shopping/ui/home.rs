use contracts::domain::a004_shopping::Product;
use contracts::domain::common::CartKind;
use contracts::enums::{ModuleKind, Page};
use contracts::shared::StoreKey;
use contracts::system::RecentlyViewedEntry;
use leptos::prelude::*;

use super::super::catalog::{categories, products, ProductRow, ProductSort};
use crate::layout::global_context::{use_app, AppContext};
use crate::shared::format::{format_inr, format_rating};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, sort_list};
use crate::shared::ui::PageHeader;

pub(super) fn open_product(app: AppContext, product: &Product) {
    app.select(StoreKey::SelectedProduct, product);
    app.add_recently_viewed(
        RecentlyViewedEntry::new(product.id.clone(), ModuleKind::Shopping, product.name.clone())
            .with_subtitle(product.brand.clone()),
    );
    app.navigate(Page::ShoppingDetails);
}

#[component]
#[allow(non_snake_case)]
pub fn ShoppingHome() -> impl IntoView {
    let app = use_app();
    let query = RwSignal::new(String::new());
    let category = RwSignal::new(None::<&'static str>);
    let sort = RwSignal::new(ProductSort::default());

    let visible = move || {
        let rows: Vec<ProductRow> = products()
            .iter()
            .filter(|p| category.with(|c| c.map_or(true, |c| p.category == c)))
            .cloned()
            .map(ProductRow)
            .collect();
        let mut rows = query.with(|q| filter_list(rows, q));
        let key = sort.get();
        // cheapest, best rated and biggest discount first
        sort_list(&mut rows, key, key == ProductSort::Price);
        rows
    };

    let cart_count = move || app.cart_tracked(CartKind::Shopping).item_count();

    view! {
        <div class="page">
            <PageHeader title="Shopping" subtitle="Deals on top brands" hide_back=true>
                <button class="button button--secondary" on:click=move |_| app.navigate(Page::ShoppingCompare)>
                    {icon("compare")}
                    "Compare"
                </button>
                <button class="button button--secondary" on:click=move |_| app.navigate(Page::ShoppingCart)>
                    {icon("cart")}
                    {move || format!("Cart ({})", cart_count())}
                </button>
            </PageHeader>

            <div class="toolbar">
                <input
                    class="search"
                    type="search"
                    placeholder="Search products, brands, categories"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <select on:change=move |ev| sort.set(ProductSort::from_code(&event_target_value(&ev)))>
                    {ProductSort::all().into_iter().map(|s| view! {
                        <option value=s.code() prop:selected=move || sort.get() == s>{s.label()}</option>
                    }).collect_view()}
                </select>
            </div>

            <div class="chips">
                <button
                    class=move || if category.get().is_none() { "chip chip--active" } else { "chip" }
                    on:click=move |_| category.set(None)
                >
                    "All"
                </button>
                {categories().into_iter().map(|c| view! {
                    <button
                        class=move || if category.get() == Some(c) { "chip chip--active" } else { "chip" }
                        on:click=move |_| category.set(Some(c))
                    >
                        {c}
                    </button>
                }).collect_view()}
            </div>

            <div class="grid">
                {move || visible().into_iter().map(|ProductRow(product)| {
                    let discount = product.discount_percent();
                    let summary = format!("{} · {}", product.brand, format_rating(product.rating));
                    let name = product.name.clone();
                    let price = format_inr(product.price);
                    let mrp = format_inr(product.mrp);
                    view! {
                        <div class="card product-card" on:click=move |_| open_product(app, &product)>
                            <div class="product-card__name">{name}</div>
                            <div class="muted">{summary}</div>
                            <div class="product-card__price">
                                <span class="price">{price}</span>
                                {(discount > 0).then(|| view! {
                                    <span class="strike">{mrp}</span>
                                    <span class="badge">{format!("{}% off", discount)}</span>
                                })}
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
