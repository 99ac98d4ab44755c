//! Record types shared by every module of the marketplace front-end.
//!
//! Each persisted store key has exactly one typed record here. Decoding a
//! record never fails outwards: see [`shared::record`].

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
