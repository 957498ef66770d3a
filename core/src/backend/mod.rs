// mealcart/src/backend/mod.rs

pub mod client;
pub mod memory;

pub use client::BackendClient;
pub use memory::MemoryBackend;
