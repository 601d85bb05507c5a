//! # ItemRepository
//!
//! アイテムの永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **単一テーブル**: PK = `id` のみ。ソートキー・インデックスは持たない
//! - **無条件書き込み**: put / update / delete はいずれも存在確認や条件式を使わない。
//!   同一キーへの並行書き込みの順序は DynamoDB に委ねる
//! - **update は upsert**: DynamoDB の `UpdateItem` は対象キーが存在しない場合に
//!   アイテムを新規作成する。この挙動をそのまま採用する

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::{Client, types::AttributeValue};
use items_domain::item::{Item, ItemId, ItemUpdate};

use crate::{InfraError, dynamodb::ITEM_KEY_ATTRIBUTE};

/// アイテムリポジトリトレイト
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// アイテムを書き込む（同一 ID が存在すれば上書き）
    async fn put(&self, item: &Item) -> Result<(), InfraError>;

    /// `name` と `description` を無条件に上書きする
    async fn update(&self, id: &ItemId, update: &ItemUpdate) -> Result<(), InfraError>;

    /// アイテムを削除する（存在しなくてもエラーにしない）
    async fn delete(&self, id: &ItemId) -> Result<(), InfraError>;

    /// ID でアイテムを取得する
    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, InfraError>;
}

/// DynamoDB 実装の ItemRepository
pub struct DynamoDbItemRepository {
    client:     Client,
    table_name: String,
}

impl DynamoDbItemRepository {
    pub fn new(client: Client, table_name: String) -> Self {
        Self { client, table_name }
    }
}

#[async_trait]
impl ItemRepository for DynamoDbItemRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(item_id = %item.id()))]
    async fn put(&self, item: &Item) -> Result<(), InfraError> {
        let mut attributes = HashMap::new();
        attributes.insert(
            ITEM_KEY_ATTRIBUTE.to_string(),
            AttributeValue::S(item.id().as_str().to_string()),
        );
        attributes.insert(
            "name".to_string(),
            AttributeValue::S(item.name().to_string()),
        );
        attributes.insert(
            "description".to_string(),
            AttributeValue::S(item.description().to_string()),
        );

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(attributes))
            .send()
            .await
            .map_err(|e| InfraError::dynamo_db(format!("アイテムの書き込みに失敗: {e}")))?;

        Ok(())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(item_id = %id))]
    async fn update(&self, id: &ItemId, update: &ItemUpdate) -> Result<(), InfraError> {
        self.client
            .update_item()
            .table_name(&self.table_name)
            .key(ITEM_KEY_ATTRIBUTE, AttributeValue::S(id.as_str().to_string()))
            // "name" は DynamoDB の予約語のため、ExpressionAttributeNames で回避
            .update_expression("SET #n = :n, description = :d")
            .expression_attribute_names("#n", "name")
            .expression_attribute_values(":n", AttributeValue::S(update.name.clone()))
            .expression_attribute_values(":d", AttributeValue::S(update.description.clone()))
            .send()
            .await
            .map_err(|e| InfraError::dynamo_db(format!("アイテムの更新に失敗: {e}")))?;

        Ok(())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(item_id = %id))]
    async fn delete(&self, id: &ItemId) -> Result<(), InfraError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(ITEM_KEY_ATTRIBUTE, AttributeValue::S(id.as_str().to_string()))
            .send()
            .await
            .map_err(|e| InfraError::dynamo_db(format!("アイテムの削除に失敗: {e}")))?;

        Ok(())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(item_id = %id))]
    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, InfraError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(ITEM_KEY_ATTRIBUTE, AttributeValue::S(id.as_str().to_string()))
            .consistent_read(true)
            .send()
            .await
            .map_err(|e| InfraError::dynamo_db(format!("アイテムの取得に失敗: {e}")))?;

        output.item().map(convert_item).transpose()
    }
}

/// DynamoDB アイテムを Item に変換する
///
/// `name` / `description` が欠けている場合は空文字とみなす。
/// 更新が先行して作られたアイテムや、他経路で書き込まれたアイテムを許容するため。
fn convert_item(attributes: &HashMap<String, AttributeValue>) -> Result<Item, InfraError> {
    let id = attributes
        .get(ITEM_KEY_ATTRIBUTE)
        .and_then(|v| v.as_s().ok())
        .cloned()
        .ok_or_else(|| {
            InfraError::invalid_item(format!("属性 '{ITEM_KEY_ATTRIBUTE}' が見つかりません"))
        })?;

    Ok(Item::from_stored(
        ItemId::from_string(id),
        get_s_or_default(attributes, "name"),
        get_s_or_default(attributes, "description"),
    ))
}

/// DynamoDB アイテムから文字列属性を取得する（存在しなければ空文字）
fn get_s_or_default(attributes: &HashMap<String, AttributeValue>, key: &str) -> String {
    attributes
        .get(key)
        .and_then(|v| v.as_s().ok())
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn attributes(pairs: &[(&str, &str)]) -> HashMap<String, AttributeValue> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), AttributeValue::S(v.to_string())))
            .collect()
    }

    #[test]
    fn test_convert_itemで全属性がitemに変換される() {
        let attrs = attributes(&[("id", "abc"), ("name", "Widget"), ("description", "A thing")]);

        let item = convert_item(&attrs).unwrap();

        assert_eq!(item.id().as_str(), "abc");
        assert_eq!(item.name(), "Widget");
        assert_eq!(item.description(), "A thing");
    }

    #[test]
    fn test_convert_itemで欠けた属性は空文字になる() {
        let attrs = attributes(&[("id", "abc")]);

        let item = convert_item(&attrs).unwrap();

        assert_eq!(item.name(), "");
        assert_eq!(item.description(), "");
    }

    #[test]
    fn test_convert_itemでidがなければエラー() {
        let attrs = attributes(&[("name", "Widget")]);

        let err = convert_item(&attrs).unwrap_err();

        assert!(matches!(
            err.kind(),
            crate::InfraErrorKind::InvalidItem(_)
        ));
    }

    #[test]
    fn test_convert_itemで文字列以外のidはエラー() {
        let mut attrs = attributes(&[("name", "Widget")]);
        attrs.insert("id".to_string(), AttributeValue::N("1".to_string()));

        assert!(convert_item(&attrs).is_err());
    }
}
