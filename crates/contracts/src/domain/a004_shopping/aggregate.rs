use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::common::CartLine;
use crate::shared::record::{ensure, ensure_price};
use crate::shared::{DecodeError, StoreRecord};

/// `selectedProduct`, and the element type of `compareItems`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub price: f64,
    pub mrp: f64,
    pub rating: f32,
    #[serde(default)]
    pub specs: BTreeMap<String, String>,
}

impl Product {
    /// Whole percent off MRP
    pub fn discount_percent(&self) -> u32 {
        if self.mrp <= 0.0 || self.price >= self.mrp {
            return 0;
        }
        (((self.mrp - self.price) / self.mrp) * 100.0).round() as u32
    }

    pub fn to_cart_line(&self) -> CartLine {
        CartLine::new(self.id.clone(), self.name.clone(), self.price)
    }
}

impl StoreRecord for Product {
    fn validate(&self) -> Result<(), DecodeError> {
        ensure(!self.id.is_empty(), "product without id")?;
        ensure_price(self.price, "price")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_percent() {
        let product = Product {
            id: "p1".into(),
            name: "Earbuds".into(),
            brand: "Boat".into(),
            category: "Audio".into(),
            price: 1_499.0,
            mrp: 2_999.0,
            rating: 4.1,
            specs: BTreeMap::new(),
        };
        assert_eq!(product.discount_percent(), 50);
        let full_price = Product { price: 2_999.0, ..product };
        assert_eq!(full_price.discount_percent(), 0);
    }
}
