// storefront/src/models/mod.rs

//! Application-side data structures. Catalog and cart models come from the
//! `mealcart` core crate; only the user account lives here.

pub mod user;

pub use user::{Role, User};
