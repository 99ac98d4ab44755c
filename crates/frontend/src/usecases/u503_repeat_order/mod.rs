//! Repeat a previous food order: the cart is replaced by the order's lines,
//! bound to the same restaurant.

use contracts::domain::common::{Cart, CartKind, CartRestaurant, OrderRecord};
use contracts::enums::ModuleKind;

use crate::domain::a002_food::catalog::restaurant;
use crate::layout::global_context::AppContext;

pub fn repeat_order(ctx: &AppContext, order: &OrderRecord) -> Option<Cart> {
    if order.module != ModuleKind::Food || order.items.is_empty() {
        return None;
    }
    let bound = order.reference.as_deref().map(|id| match restaurant(id) {
        Some(r) => r.cart_ref(),
        None => CartRestaurant {
            id: id.to_string(),
            name: order.title.clone(),
        },
    });
    let cart = Cart {
        items: order.items.clone(),
        total: 0.0,
        restaurant: bound,
    };
    log::debug!("🔁 repeating order {}", order.id);
    Some(ctx.replace_cart(CartKind::Food, cart))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_food::catalog::restaurant;
    use crate::layout::global_context::testing::fresh_context;
    use crate::usecases::u501_checkout::checkout;
    use contracts::domain::common::CartLine;

    #[test]
    fn test_repeat_restores_cart_after_checkout() {
        let ctx = fresh_context();
        let r = restaurant("r2").unwrap().clone();
        ctx.add_food_item(&r, &r.menu[0]);
        ctx.add_food_item(&r, &r.menu[0]);
        ctx.add_food_item(&r, &r.menu[2]);
        let before = ctx.cart(CartKind::Food);

        let order = checkout(&ctx, CartKind::Food).unwrap();
        assert!(ctx.cart(CartKind::Food).is_empty());

        let cart = repeat_order(&ctx, &order).unwrap();
        assert_eq!(cart, before);
        assert_eq!(ctx.cart(CartKind::Food), before);
    }

    #[test]
    fn test_non_food_orders_are_not_repeated() {
        let ctx = fresh_context();
        let order = OrderRecord::new(
            ModuleKind::Shopping,
            "Kettle",
            vec![CartLine::new("p8", "Kettle", 749.0)],
        );
        assert!(repeat_order(&ctx, &order).is_none());
        assert!(ctx.cart(CartKind::Food).is_empty());
    }
}
