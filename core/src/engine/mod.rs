// mealcart/src/engine/mod.rs

pub mod cart;
pub mod snapshot;

pub use cart::{AddOutcome, CartEngine};
pub use snapshot::{CartSnapshot, SnapshotLine};
