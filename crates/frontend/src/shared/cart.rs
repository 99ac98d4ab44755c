//! Read-modify-write helpers over the `foodCart` / `shoppingCart` keys.
//!
//! Each mutation loads the cart, applies a pure [`Cart`] operation, writes
//! the whole cart back and publishes `CartUpdated`.

use contracts::domain::a002_food::{MenuItem, Restaurant};
use contracts::domain::common::{Cart, CartKind, CartLine};
use leptos::prelude::*;

use crate::layout::global_context::AppContext;
use crate::shared::event_bus::AppEvent;

impl AppContext {
    /// Current cart; the stored total is recomputed, never trusted
    pub fn cart(&self, kind: CartKind) -> Cart {
        self.store()
            .load::<Cart>(kind.store_key())
            .recompute_total()
    }

    /// Same as [`AppContext::cart`], re-evaluated after every cart mutation
    pub fn cart_tracked(&self, kind: CartKind) -> Cart {
        self.cart_version.track();
        self.cart(kind)
    }

    pub fn add_to_cart(&self, kind: CartKind, line: CartLine) -> Cart {
        let next = self.cart(kind).add_item(line);
        self.commit_cart(kind, next)
    }

    /// Food items are bound to their restaurant
    pub fn add_food_item(&self, restaurant: &Restaurant, item: &MenuItem) -> Cart {
        let next = self
            .cart(CartKind::Food)
            .add_item_from(restaurant.cart_ref(), item.to_cart_line());
        self.commit_cart(CartKind::Food, next)
    }

    pub fn remove_from_cart(&self, kind: CartKind, id: &str) -> Cart {
        let next = self.cart(kind).remove_item(id);
        self.commit_cart(kind, next)
    }

    pub fn set_cart_quantity(&self, kind: CartKind, id: &str, quantity: u32) -> Cart {
        let next = self.cart(kind).set_quantity(id, quantity);
        self.commit_cart(kind, next)
    }

    pub fn replace_cart(&self, kind: CartKind, cart: Cart) -> Cart {
        self.commit_cart(kind, cart.recompute_total())
    }

    pub fn clear_cart(&self, kind: CartKind) {
        self.store().remove(kind.store_key());
        self.bus().publish(&AppEvent::CartUpdated(kind));
    }

    fn commit_cart(&self, kind: CartKind, cart: Cart) -> Cart {
        self.store().save(kind.store_key(), &cart);
        self.bus().publish(&AppEvent::CartUpdated(kind));
        cart
    }
}

#[cfg(test)]
mod tests {
    use crate::layout::global_context::testing::fresh_context;
    use crate::shared::event_bus::AppEvent;
    use contracts::domain::common::{Cart, CartKind, CartLine};
    use contracts::shared::StoreKey;
    use leptos::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_food_cart_add_two_remove_one() {
        let ctx = fresh_context();
        let restaurant = crate::domain::a002_food::catalog::restaurants()[0].clone();
        let first = restaurant.menu[0].clone();
        let second = restaurant.menu[1].clone();

        ctx.add_food_item(&restaurant, &first);
        ctx.add_food_item(&restaurant, &second);
        ctx.add_food_item(&restaurant, &second);
        let cart = ctx.remove_from_cart(CartKind::Food, &first.id);

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.total, second.price * 2.0);

        let stored: Cart = ctx.store().load(StoreKey::FoodCart);
        assert_eq!(stored, cart);
        assert_eq!(stored.restaurant.map(|r| r.id), Some(restaurant.id));
    }

    #[test]
    fn test_every_mutation_publishes_cart_updated() {
        let ctx = fresh_context();
        let published = Arc::new(AtomicUsize::new(0));
        let counter = published.clone();
        ctx.bus().subscribe(move |event| {
            if *event == AppEvent::CartUpdated(CartKind::Shopping) {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        ctx.add_to_cart(CartKind::Shopping, CartLine::new("p1", "Kettle", 1_299.0));
        ctx.set_cart_quantity(CartKind::Shopping, "p1", 3);
        ctx.remove_from_cart(CartKind::Shopping, "p1");
        ctx.clear_cart(CartKind::Shopping);

        assert_eq!(published.load(Ordering::SeqCst), 4);
        assert_eq!(ctx.cart_version.get_untracked(), 4);
    }

    #[test]
    fn test_stale_stored_total_is_recomputed() {
        let ctx = fresh_context();
        ctx.store().set_raw(
            StoreKey::ShoppingCart,
            r#"{"items":[{"id":"p1","name":"Lamp","price":500,"quantity":2}],"total":1}"#,
        );
        assert_eq!(ctx.cart(CartKind::Shopping).total, 1_000.0);

        ctx.store().set_raw(StoreKey::ShoppingCart, "{{corrupt");
        assert!(ctx.cart(CartKind::Shopping).is_empty());
    }

    #[test]
    fn test_tracked_cart_matches_stored_cart() {
        let ctx = fresh_context();
        ctx.add_to_cart(CartKind::Shopping, CartLine::new("p8", "Kettle", 749.0).with_quantity(2));
        let tracked = ctx.cart_tracked(CartKind::Shopping);
        assert_eq!(tracked, ctx.cart(CartKind::Shopping));
        assert_eq!(tracked.item_count(), 2);
    }
}
