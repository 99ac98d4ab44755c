mod cart;
mod compare;
mod details;
mod home;

pub use cart::ShoppingCart;
pub use compare::ShoppingCompare;
pub use details::ShoppingDetails;
pub use home::ShoppingHome;
