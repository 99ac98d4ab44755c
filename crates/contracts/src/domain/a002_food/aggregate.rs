use serde::{Deserialize, Serialize};

use crate::domain::common::{CartLine, CartRestaurant};
use crate::shared::record::{ensure, ensure_price};
use crate::shared::{DecodeError, StoreRecord};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub veg: bool,
    #[serde(default)]
    pub description: String,
}

impl MenuItem {
    pub fn to_cart_line(&self) -> CartLine {
        CartLine::new(self.id.clone(), self.name.clone(), self.price)
    }
}

/// `selectedRestaurant`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub rating: f32,
    pub delivery_minutes: u32,
    pub cost_for_two: f64,
    #[serde(default)]
    pub menu: Vec<MenuItem>,
}

impl Restaurant {
    pub fn cart_ref(&self) -> CartRestaurant {
        CartRestaurant {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }

    pub fn menu_item(&self, id: &str) -> Option<&MenuItem> {
        self.menu.iter().find(|item| item.id == id)
    }
}

impl StoreRecord for MenuItem {
    fn validate(&self) -> Result<(), DecodeError> {
        ensure(!self.id.is_empty(), "menu item without id")?;
        ensure_price(self.price, "price")
    }
}

impl StoreRecord for Restaurant {
    fn validate(&self) -> Result<(), DecodeError> {
        ensure(!self.id.is_empty(), "restaurant without id")?;
        self.menu.validate()
    }
}
