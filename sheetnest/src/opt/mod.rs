pub mod config;
pub mod grouping;
pub mod packer;
pub mod pass;
pub mod search;

#[doc(inline)]
pub use config::{PackConfig, PlacementOrder};
#[doc(inline)]
pub use packer::{Packer, pack, validate};
