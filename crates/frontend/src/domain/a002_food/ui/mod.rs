mod cart;
mod home;
mod menu;
mod orders;

pub use cart::FoodCart;
pub use home::FoodHome;
pub use menu::FoodMenu;
pub use orders::FoodOrders;
