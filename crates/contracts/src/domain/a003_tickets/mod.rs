pub mod aggregate;

pub use aggregate::{Movie, SelectedShow, Show};
