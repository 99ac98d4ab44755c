use serde::{Deserialize, Serialize};

use crate::enums::ModuleKind;
use crate::shared::record::{ensure, ensure_price};
use crate::shared::{DecodeError, StoreKey, StoreRecord};

/// Which cart a mutation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CartKind {
    Food,
    Shopping,
}

impl CartKind {
    pub fn store_key(&self) -> StoreKey {
        match self {
            CartKind::Food => StoreKey::FoodCart,
            CartKind::Shopping => StoreKey::ShoppingCart,
        }
    }

    pub fn history_key(&self) -> StoreKey {
        match self {
            CartKind::Food => StoreKey::FoodOrderHistory,
            CartKind::Shopping => StoreKey::ShoppingOrderHistory,
        }
    }

    pub fn module(&self) -> ModuleKind {
        match self {
            CartKind::Food => ModuleKind::Food,
            CartKind::Shopping => ModuleKind::Shopping,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl CartLine {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            quantity: 1,
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartRestaurant {
    pub id: String,
    pub name: String,
}

/// Food or shopping cart, one line per item id.
///
/// Every operation returns a new cart whose `total` is recomputed from the
/// lines, so a stored total is never trusted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    #[serde(default)]
    pub items: Vec<CartLine>,
    #[serde(default)]
    pub total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant: Option<CartRestaurant>,
}

impl Cart {
    pub fn computed_total(&self) -> f64 {
        self.items.iter().map(CartLine::line_total).sum()
    }

    pub fn recompute_total(mut self) -> Self {
        self.total = self.computed_total();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Saturates instead of overflowing on absurd stored quantities
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |count, line| count.saturating_add(line.quantity))
    }

    pub fn quantity_of(&self, id: &str) -> u32 {
        self.items
            .iter()
            .find(|line| line.id == id)
            .map(|line| line.quantity)
            .unwrap_or(0)
    }

    /// Adds `item.quantity` units, merging into an existing line with the same id
    pub fn add_item(&self, item: CartLine) -> Cart {
        let mut next = self.clone();
        if item.quantity == 0 {
            return next.recompute_total();
        }
        match next.items.iter_mut().find(|line| line.id == item.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(item.quantity),
            None => next.items.push(item),
        }
        next.recompute_total()
    }

    /// Food carts belong to a single restaurant; items from another
    /// restaurant start a fresh cart.
    pub fn add_item_from(&self, restaurant: CartRestaurant, item: CartLine) -> Cart {
        let base = match &self.restaurant {
            Some(current) if current.id != restaurant.id => Cart::default(),
            _ => self.clone(),
        };
        let mut next = base.add_item(item);
        next.restaurant = Some(restaurant);
        next
    }

    pub fn remove_item(&self, id: &str) -> Cart {
        let mut next = self.clone();
        next.items.retain(|line| line.id != id);
        if next.items.is_empty() {
            next.restaurant = None;
        }
        next.recompute_total()
    }

    pub fn remove_at(&self, index: usize) -> Cart {
        match self.items.get(index) {
            Some(line) => self.remove_item(&line.id),
            None => self.clone().recompute_total(),
        }
    }

    /// Quantity zero removes the line
    pub fn set_quantity(&self, id: &str, quantity: u32) -> Cart {
        if quantity == 0 {
            return self.remove_item(id);
        }
        let mut next = self.clone();
        if let Some(line) = next.items.iter_mut().find(|line| line.id == id) {
            line.quantity = quantity;
        }
        next.recompute_total()
    }
}

impl StoreRecord for CartLine {
    fn validate(&self) -> Result<(), DecodeError> {
        ensure(!self.id.is_empty(), "cart line without id")?;
        ensure(self.quantity > 0, "cart line with zero quantity")?;
        ensure_price(self.price, "price")
    }
}

impl StoreRecord for Cart {
    fn validate(&self) -> Result<(), DecodeError> {
        self.items.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::decode_or_default;

    fn burger() -> CartLine {
        CartLine::new("m1", "Classic Burger", 149.0)
    }

    fn fries() -> CartLine {
        CartLine::new("m2", "Peri Peri Fries", 99.0).with_quantity(2)
    }

    #[test]
    fn test_add_merges_lines_by_id() {
        let cart = Cart::default().add_item(burger()).add_item(burger());
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.total, 298.0);
    }

    #[test]
    fn test_total_tracks_every_mutation() {
        let mut cart = Cart::default();
        let steps: Vec<Box<dyn Fn(&Cart) -> Cart>> = vec![
            Box::new(|c: &Cart| c.add_item(burger())),
            Box::new(|c: &Cart| c.add_item(fries())),
            Box::new(|c: &Cart| c.set_quantity("m1", 3)),
            Box::new(|c: &Cart| c.remove_item("m2")),
            Box::new(|c: &Cart| c.remove_item("missing")),
            Box::new(|c: &Cart| c.add_item(fries())),
            Box::new(|c: &Cart| c.remove_at(0)),
            Box::new(|c: &Cart| c.remove_at(7)),
        ];
        for step in steps {
            cart = step(&cart);
            assert_eq!(cart.total, cart.computed_total());
            assert_eq!(cart.clone().recompute_total(), cart);
        }
        assert_eq!(cart.items, vec![fries()]);
        assert_eq!(cart.total, 198.0);
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let cart = Cart::default().add_item(burger()).set_quantity("m1", 0);
        assert!(cart.is_empty());
        assert_eq!(cart.total, 0.0);
    }

    #[test]
    fn test_other_restaurant_starts_fresh_cart() {
        let first = CartRestaurant { id: "r1".into(), name: "Burger Barn".into() };
        let second = CartRestaurant { id: "r2".into(), name: "Dosa Corner".into() };
        let cart = Cart::default()
            .add_item_from(first.clone(), burger())
            .add_item_from(first, fries());
        assert_eq!(cart.item_count(), 3);

        let switched = cart.add_item_from(second.clone(), CartLine::new("d1", "Masala Dosa", 120.0));
        assert_eq!(switched.items.len(), 1);
        assert_eq!(switched.restaurant, Some(second));
        assert_eq!(switched.total, 120.0);
    }

    #[test]
    fn test_corrupted_cart_reads_as_empty() {
        let bad_quantity = r#"{"items":[{"id":"m1","name":"x","price":10,"quantity":0}],"total":10}"#;
        let negative_price = r#"{"items":[{"id":"m1","name":"x","price":-3}]}"#;
        for raw in ["not json", "[]", bad_quantity, negative_price] {
            assert_eq!(decode_or_default::<Cart>(Some(raw)), Cart::default());
        }
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let cart: Cart = decode_or_default(Some(r#"{"items":[{"id":"p1","name":"Mouse","price":799}]}"#));
        assert_eq!(cart.items[0].quantity, 1);
        assert_eq!(cart.clone().recompute_total().total, 799.0);
    }

    #[test]
    fn test_huge_stored_quantities_saturate() {
        let raw = r#"{"items":[{"id":"p1","name":"Kettle","price":749,"quantity":4294967295},{"id":"p2","name":"Lamp","price":10,"quantity":2}],"total":0}"#;
        let cart: Cart = decode_or_default(Some(raw));
        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.item_count(), u32::MAX);

        let merged = cart.add_item(CartLine::new("p1", "Kettle", 749.0).with_quantity(5));
        assert_eq!(merged.quantity_of("p1"), u32::MAX);
    }
}
