//! # テスト用モックリポジトリ
//!
//! ハンドラテストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! items-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! DynamoDB と同じく、`update` は存在しないキーに対してアイテムを作成し、
//! `delete` は存在しないキーに対して何もしない。

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use items_domain::item::{Item, ItemId, ItemUpdate};

use crate::{error::InfraError, repository::ItemRepository};

// ===== MockItemRepository =====

#[derive(Clone, Default)]
pub struct MockItemRepository {
    items: Arc<Mutex<HashMap<ItemId, Item>>>,
}

impl MockItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// テスト前提データとしてアイテムを登録する
    pub fn add_item(&self, item: Item) {
        self.items.lock().unwrap().insert(item.id().clone(), item);
    }

    /// 格納されているアイテム数
    pub fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 格納されているアイテムを ID で取得する（同期版）
    pub fn get(&self, id: &str) -> Option<Item> {
        self.items
            .lock()
            .unwrap()
            .get(&ItemId::from_string(id))
            .cloned()
    }
}

#[async_trait]
impl ItemRepository for MockItemRepository {
    async fn put(&self, item: &Item) -> Result<(), InfraError> {
        self.items
            .lock()
            .unwrap()
            .insert(item.id().clone(), item.clone());
        Ok(())
    }

    async fn update(&self, id: &ItemId, update: &ItemUpdate) -> Result<(), InfraError> {
        let item = Item::from_stored(
            id.clone(),
            update.name.clone(),
            update.description.clone(),
        );
        self.items.lock().unwrap().insert(id.clone(), item);
        Ok(())
    }

    async fn delete(&self, id: &ItemId) -> Result<(), InfraError> {
        self.items.lock().unwrap().remove(id);
        Ok(())
    }

    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, InfraError> {
        Ok(self.items.lock().unwrap().get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn test_updateは存在しないキーでアイテムを作成する() {
        let repo = MockItemRepository::new();
        let id = ItemId::from_string("abc");

        repo.update(
            &id,
            &ItemUpdate {
                name:        "X".to_string(),
                description: String::new(),
            },
        )
        .await
        .unwrap();

        let stored = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.name(), "X");
        assert_eq!(stored.description(), "");
    }

    #[tokio::test]
    async fn test_deleteは存在しないキーでも成功する() {
        let repo = MockItemRepository::new();

        let result = repo.delete(&ItemId::from_string("missing-id")).await;

        assert!(result.is_ok());
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn test_putで同一idは上書きされる() {
        let repo = MockItemRepository::new();
        let id = ItemId::from_string("abc");
        repo.add_item(Item::from_stored(
            id.clone(),
            "old".to_string(),
            "old".to_string(),
        ));

        repo.put(&Item::from_stored(
            id.clone(),
            "new".to_string(),
            String::new(),
        ))
        .await
        .unwrap();

        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get("abc").unwrap().name(), "new");
    }
}
