use contracts::domain::common::{CartKind, Offer, OrderRecord};
use contracts::enums::ModuleKind;
use contracts::shared::StoreKey;
use thiserror::Error;

use crate::layout::global_context::AppContext;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OfferError {
    #[error("unknown offer code '{0}'")]
    Unknown(String),
    #[error("{code} is not valid for {module}")]
    WrongModule { code: &'static str, module: &'static str },
    #[error("{code} needs a minimum order of ₹{min_order}")]
    BelowMinimum { code: &'static str, min_order: f64 },
}

/// Price breakdown shown under a cart
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub subtotal: f64,
    pub discount: f64,
    pub total: f64,
    pub offer: Option<&'static Offer>,
}

/// Offer stored under `selectedOfferCode`, if it still exists
pub fn selected_offer(ctx: &AppContext) -> Option<&'static Offer> {
    ctx.store()
        .get_raw(StoreKey::SelectedOfferCode)
        .and_then(|code| Offer::find(&code))
}

/// Validates `code` against the cart of `kind` and remembers it
pub fn apply_offer_code(ctx: &AppContext, kind: CartKind, code: &str) -> Result<&'static Offer, OfferError> {
    let offer = Offer::find(code).ok_or_else(|| OfferError::Unknown(code.trim().to_string()))?;
    let module = kind.module();
    if !offer.applies_to(module) {
        return Err(OfferError::WrongModule {
            code: offer.code,
            module: module.display_name(),
        });
    }
    if ctx.cart(kind).total < offer.min_order {
        return Err(OfferError::BelowMinimum {
            code: offer.code,
            min_order: offer.min_order,
        });
    }
    ctx.store().set_raw(StoreKey::SelectedOfferCode, offer.code);
    Ok(offer)
}

pub fn clear_offer_code(ctx: &AppContext) {
    ctx.store().remove(StoreKey::SelectedOfferCode);
}

pub fn quote(ctx: &AppContext, kind: CartKind) -> Quote {
    let subtotal = ctx.cart(kind).total;
    price(kind.module(), subtotal, selected_offer(ctx))
}

fn price(module: ModuleKind, subtotal: f64, offer: Option<&'static Offer>) -> Quote {
    let discount = offer.map_or(0.0, |o| o.discount_for(module, subtotal));
    Quote {
        subtotal,
        discount,
        total: (subtotal - discount).max(0.0),
        offer: offer.filter(|_| discount > 0.0),
    }
}

/// Turns the cart into an order.
///
/// Empty carts produce nothing. Otherwise the order is prepended to the
/// module history, the cart and the offer code are cleared and
/// `CartUpdated` is published.
pub fn checkout(ctx: &AppContext, kind: CartKind) -> Option<OrderRecord> {
    let cart = ctx.cart(kind);
    if cart.is_empty() {
        log::debug!("checkout of empty {:?} cart ignored", kind);
        return None;
    }

    let title = match (&cart.restaurant, kind) {
        (Some(restaurant), CartKind::Food) => restaurant.name.clone(),
        _ => match cart.items.as_slice() {
            [only] => only.name.clone(),
            items => format!("{} and {} more", items[0].name, items.len() - 1),
        },
    };
    let quote = price(kind.module(), cart.total, selected_offer(ctx));

    let mut order = OrderRecord::new(kind.module(), title, cart.items);
    if let Some(restaurant) = cart.restaurant {
        order = order.with_reference(restaurant.id);
    }
    if let Some(offer) = quote.offer {
        order = order.with_discount(offer.code, quote.discount);
    }

    let order = ctx.record_order(kind.history_key(), order);
    clear_offer_code(ctx);
    ctx.clear_cart(kind);
    Some(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_food::catalog::restaurant;
    use crate::layout::global_context::testing::fresh_context;
    use contracts::domain::common::{Cart, CartLine};

    #[test]
    fn test_checkout_applies_offer_and_clears_cart() {
        let ctx = fresh_context();
        let r = restaurant("r3").unwrap().clone();
        for item in &r.menu {
            ctx.add_food_item(&r, item);
        }
        let subtotal = ctx.cart(CartKind::Food).total;
        assert!(subtotal >= 199.0);

        let offer = apply_offer_code(&ctx, CartKind::Food, "welcome50").unwrap();
        assert_eq!(offer.code, "WELCOME50");
        let expected = quote(&ctx, CartKind::Food);
        assert!(expected.discount > 0.0);

        let order = checkout(&ctx, CartKind::Food).unwrap();
        assert_eq!(order.title, r.name);
        assert_eq!(order.reference.as_deref(), Some("r3"));
        assert_eq!(order.subtotal, subtotal);
        assert_eq!(order.total, expected.total);
        assert_eq!(order.offer_code.as_deref(), Some("WELCOME50"));

        assert!(ctx.cart(CartKind::Food).is_empty());
        assert!(ctx.store().get_raw(StoreKey::SelectedOfferCode).is_none());
        let history = ctx.order_history(StoreKey::FoodOrderHistory);
        assert_eq!(history[0].id, order.id);
    }

    #[test]
    fn test_offer_code_validation() {
        let ctx = fresh_context();
        ctx.add_to_cart(CartKind::Shopping, CartLine::new("p8", "Kettle", 749.0));

        assert_eq!(
            apply_offer_code(&ctx, CartKind::Shopping, "bogus"),
            Err(OfferError::Unknown("bogus".to_string()))
        );
        assert!(matches!(
            apply_offer_code(&ctx, CartKind::Shopping, "FLYHIGH"),
            Err(OfferError::WrongModule { .. })
        ));
        assert!(matches!(
            apply_offer_code(&ctx, CartKind::Shopping, "SHOP15"),
            Err(OfferError::BelowMinimum { .. })
        ));
        assert!(apply_offer_code(&ctx, CartKind::Shopping, "PAYDAY").is_ok());
        assert_eq!(selected_offer(&ctx).map(|o| o.code), Some("PAYDAY"));
    }

    #[test]
    fn test_empty_cart_checkout_is_a_no_op() {
        let ctx = fresh_context();
        assert!(checkout(&ctx, CartKind::Shopping).is_none());
        assert!(ctx.order_history(StoreKey::ShoppingOrderHistory).is_empty());
        assert_eq!(ctx.cart(CartKind::Shopping), Cart::default());
    }
}
