use contracts::domain::common::CartKind;
use contracts::enums::Page;
use leptos::prelude::*;

use crate::layout::global_context::use_app;
use crate::shared::format::format_inr;
use crate::shared::icons::icon;
use crate::usecases::u501_checkout::{apply_offer_code, checkout, clear_offer_code, quote};

/// Cart lines with quantity steppers; re-renders on every `CartUpdated`
#[component]
pub fn CartLines(kind: CartKind) -> impl IntoView {
    let app = use_app();

    move || {
        let cart = app.cart_tracked(kind);
        cart.items
            .into_iter()
            .map(|line| {
                let (dec_id, inc_id, del_id) = (line.id.clone(), line.id.clone(), line.id.clone());
                let quantity = line.quantity;
                view! {
                    <div class="cart-line">
                        <div class="cart-line__name">{line.name.clone()}</div>
                        <div class="stepper">
                            <button on:click=move |_| { app.set_cart_quantity(kind, &dec_id, quantity.saturating_sub(1)); }>"−"</button>
                            <span>{quantity}</span>
                            <button on:click=move |_| { app.set_cart_quantity(kind, &inc_id, quantity + 1); }>"+"</button>
                        </div>
                        <div class="price">{format_inr(line.line_total())}</div>
                        <button class="button button--ghost" title="Remove" on:click=move |_| { app.remove_from_cart(kind, &del_id); }>
                            {icon("delete")}
                        </button>
                    </div>
                }
            })
            .collect_view()
    }
}

/// Offer code entry, price breakdown and the checkout button.
///
/// After a successful checkout the app moves to `on_placed` when given.
#[component]
pub fn CheckoutPanel(kind: CartKind, #[prop(optional)] on_placed: Option<Page>) -> impl IntoView {
    let app = use_app();
    let code = RwSignal::new(String::new());
    let (message, set_message) = signal::<Option<String>>(None);

    let breakdown = move || {
        app.cart_version.track();
        message.track();
        quote(&app, kind)
    };

    let apply = move |_| match apply_offer_code(&app, kind, &code.get_untracked()) {
        Ok(offer) => set_message.set(Some(format!("{} applied: {}", offer.code, offer.title))),
        Err(e) => set_message.set(Some(e.to_string())),
    };

    let remove_offer = move |_| {
        clear_offer_code(&app);
        code.set(String::new());
        set_message.set(None);
    };

    let place = move |_| {
        if checkout(&app, kind).is_some() {
            if let Some(page) = on_placed {
                app.navigate(page);
            }
        }
    };

    view! {
        <div class="card checkout">
            <div class="checkout__offer">
                <input
                    type="text"
                    placeholder="Offer code"
                    prop:value=move || code.get()
                    on:input=move |ev| code.set(event_target_value(&ev))
                />
                <button class="button button--secondary" on:click=apply>"Apply"</button>
                <button class="button button--ghost" on:click=remove_offer>"Remove"</button>
            </div>
            {move || message.get().map(|m| view! { <div class="muted">{m}</div> })}
            {move || {
                let q = breakdown();
                view! {
                    <div class="checkout__row"><span>"Subtotal"</span><span>{format_inr(q.subtotal)}</span></div>
                    {q.offer.map(|o| view! {
                        <div class="checkout__row checkout__row--discount">
                            <span>{format!("Discount ({})", o.code)}</span>
                            <span>{format!("−{}", format_inr(q.discount))}</span>
                        </div>
                    })}
                    <div class="checkout__row checkout__row--total"><span>"Total"</span><span>{format_inr(q.total)}</span></div>
                }
            }}
            <button
                class="button button--primary"
                disabled=move || { app.cart_version.track(); app.cart(kind).is_empty() }
                on:click=place
            >
                "Place order"
            </button>
        </div>
    }
}
