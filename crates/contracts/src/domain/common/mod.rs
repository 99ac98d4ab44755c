//! Records shared by the food and shopping carts and every order history

pub mod cart;
pub mod offer;
pub mod order;

pub use cart::{Cart, CartKind, CartLine, CartRestaurant};
pub use offer::Offer;
pub use order::{OrderRecord, OrderStatus};
