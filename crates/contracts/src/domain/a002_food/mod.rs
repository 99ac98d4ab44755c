pub mod aggregate;

pub use aggregate::{MenuItem, Restaurant};
