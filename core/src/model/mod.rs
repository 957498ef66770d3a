// mealcart/src/model/mod.rs

//! Domain data structures: catalog dishes, cart lines, and their ids.

pub mod cart_line;
pub mod dish;
pub mod ids;

pub use cart_line::{CartLine, LineUpdate};
pub use dish::Dish;
pub use ids::{DishId, LineId, UserId};
