// src/infrastructure/memory.rs
use crate::domain::{
    error::Error,
    item::{Item, ItemRepository, NewItem},
    outcome::Outcome,
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    inner: RwLock<State>,
}

#[derive(Debug, Default)]
struct State {
    next_id: u64,
    items: BTreeMap<u64, Item>,
}

fn missing(id: u64) -> Error {
    Error::not_found("item.not_found", format!("item {id} does not exist"))
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn insert(&self, item: NewItem) -> Outcome<Item> {
        let mut state = self.inner.write().await;
        if state.items.values().any(|existing| existing.name == item.name) {
            return Outcome::failure(Error::conflict(
                "item.duplicate_name",
                format!("an item named '{}' already exists", item.name),
            ));
        }

        state.next_id += 1;
        let item = Item {
            id: state.next_id,
            name: item.name,
            quantity: item.quantity,
        };
        state.items.insert(item.id, item.clone());
        Outcome::success(item)
    }

    async fn find(&self, id: u64) -> Outcome<Item> {
        let state = self.inner.read().await;
        match state.items.get(&id) {
            Some(item) => Outcome::success(item.clone()),
            None => Outcome::failure(missing(id)),
        }
    }

    async fn list(&self) -> Vec<Item> {
        self.inner.read().await.items.values().cloned().collect()
    }

    async fn delete(&self, id: u64) -> Outcome {
        let mut state = self.inner.write().await;
        match state.items.remove(&id) {
            Some(_) => Outcome::ok(),
            None => Outcome::failure(missing(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error_kind::ErrorKind;

    fn new_item(name: &str) -> NewItem {
        NewItem {
            name: name.into(),
            quantity: 1,
        }
    }

    #[tokio::test]
    async fn insert_assigns_ids_and_rejects_duplicates() {
        let repo = InMemoryItemRepository::default();
        let first = repo.insert(new_item("bolt")).await;
        assert_eq!(first.data().map(|item| item.id), Some(1));

        let duplicate = repo.insert(new_item("bolt")).await;
        assert_eq!(duplicate.error().map(Error::kind), Some(&ErrorKind::CONFLICT));
        assert_eq!(repo.list().await.len(), 1);
    }

    #[tokio::test]
    async fn find_and_delete_report_missing_items() {
        let repo = InMemoryItemRepository::default();
        let found = repo.find(9).await;
        assert_eq!(found.error().map(Error::kind), Some(&ErrorKind::NOT_FOUND));

        let id = repo.insert(new_item("nut")).await.data().map(|item| item.id).unwrap_or_default();
        assert!(repo.delete(id).await.is_success());
        assert!(repo.delete(id).await.is_failure());
    }
}
