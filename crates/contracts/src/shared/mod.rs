pub mod record;
pub mod store_key;

pub use record::{decode, decode_or_default, encode, DecodeError, StoreRecord};
pub use store_key::StoreKey;
