// src/infrastructure/mod.rs
pub mod memory;

pub use memory::InMemoryItemRepository;
