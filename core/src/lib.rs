// src/lib.rs

//! Mealcart: the cart reconciliation engine of a food-ordering storefront.
//!
//! The engine owns the one piece of this system with real state-machine
//! behavior: how repeated "add to cart" actions merge into quantities, how
//! increment/decrement mutate or delete cart lines, and how the rendered
//! cart listing and badge count stay consistent with the persisted cart
//! collection. Persistence and identity come from a pluggable
//! [`BackendClient`]; rendering goes out through a pluggable [`CartView`].
//!
//! Core rules:
//!  - At most one cart line per dish per user; adds merge, never duplicate.
//!  - Quantity stays >= 1; decrementing a quantity-1 line deletes it.
//!  - Mutating an absent line is a silent no-op, not an error.
//!  - Snapshots resolve each line against the current dish document; lines
//!    whose dish has been deleted are skipped (tombstone tolerance) and the
//!    total is computed from current prices.
//!  - Every mutation is followed by an unconditional full reload pushed to
//!    the view; no client-side cache is ever kept.

pub mod backend;
pub mod engine;
pub mod error;
pub mod model;
pub mod policy;
pub mod view;

// --- Re-exports for the Public API ---

pub use crate::backend::{BackendClient, MemoryBackend};
pub use crate::engine::{AddOutcome, CartEngine, CartSnapshot, SnapshotLine};
pub use crate::error::{CartError, CartResult};
pub use crate::model::{CartLine, Dish, DishId, LineId, LineUpdate, UserId};
pub use crate::policy::{AdminPolicy, DenyAll, EmailAllowlist, Identity};
pub use crate::view::{CartView, NullView};
