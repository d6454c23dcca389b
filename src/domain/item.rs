// src/domain/item.rs
use crate::domain::outcome::Outcome;
use async_trait::async_trait;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub quantity: u32,
}

#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub quantity: u32,
}

/// Storage for the demo catalogue. Lookups report missing items and name
/// clashes as failures rather than `Option`s.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn insert(&self, item: NewItem) -> Outcome<Item>;
    async fn find(&self, id: u64) -> Outcome<Item>;
    async fn list(&self) -> Vec<Item>;
    async fn delete(&self, id: u64) -> Outcome;
}
