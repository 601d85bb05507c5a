//! # アイテム
//!
//! キーバリューストアに格納される唯一のエンティティ。
//!
//! ## ライフサイクル
//!
//! - **作成**: 作成ハンドラのみが生成する。`id` はサーバー側で UUID v4 を採番する
//! - **更新**: `name` と `description` を丸ごと上書きする（マージしない）
//! - **削除**: キー指定で削除する。論理削除・履歴は持たない
//!
//! ## デフォルト値の非対称性
//!
//! `name` が省略された場合、作成時は `"Untitled"`、更新時は空文字になる。
//! `description` はどちらも空文字になる。
//!
//! ```rust
//! use items_domain::item::ItemPayload;
//!
//! let created = ItemPayload::default().into_new_item();
//! assert_eq!(created.name(), "Untitled");
//!
//! let update = ItemPayload::default().into_update();
//! assert_eq!(update.name, "");
//! ```

use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::DomainError;

/// 作成時に `name` が省略された場合の値
pub const DEFAULT_ITEM_NAME: &str = "Untitled";

/// アイテムの一意識別子
///
/// 作成時に採番される ID は UUID v4 の文字列表現だが、更新・削除ではパスから
/// 受け取った任意の文字列をそのまま使う（形式は検証しない）。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(transparent)]
#[display("{_0}")]
pub struct ItemId(String);

impl ItemId {
    /// 新しい ID を生成する（UUID v4、128 ビットのランダム値）
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// 外部から受け取った文字列で ID を作成する
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// 内部の文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

}

/// アイテム
///
/// JSON 表現は `{"id": ..., "name": ..., "description": ...}`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id:          ItemId,
    name:        String,
    description: String,
}

impl Item {
    /// 新しい ID を採番してアイテムを作成する
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id:          ItemId::generate(),
            name:        name.into(),
            description: description.into(),
        }
    }

    /// ストアから読み出した値でアイテムを復元する
    pub fn from_stored(id: ItemId, name: String, description: String) -> Self {
        Self {
            id,
            name,
            description,
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// 更新で書き込むフィールドの組
///
/// 省略されたフィールドは空文字で上書きされる（ブラインド上書き）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemUpdate {
    pub name:        String,
    pub description: String,
}

/// 作成・更新リクエストのボディ
///
/// どちらのフィールドも任意で、値の型は問わない。未知のフィールドは無視する。
/// 文字列はそのまま、`null` は省略と同じ扱い、それ以外は JSON テキストとして格納する。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ItemPayload {
    pub name:        Option<serde_json::Value>,
    pub description: Option<serde_json::Value>,
}

/// フィールド値を格納用の文字列にする
fn field_text(value: Option<serde_json::Value>) -> Option<String> {
    match value? {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

impl ItemPayload {
    /// リクエストボディ文字列をパースする
    ///
    /// ボディが存在しない、または空文字の場合は `{}` として扱う。
    /// JSON オブジェクト以外（配列、文字列など）はエラーにする。
    pub fn parse(body: Option<&str>) -> Result<Self, DomainError> {
        let Some(body) = body.filter(|b| !b.is_empty()) else {
            return Ok(Self::default());
        };

        let value: serde_json::Value = serde_json::from_str(body)?;
        if !value.is_object() {
            return Err(DomainError::Validation(
                "リクエストボディは JSON オブジェクトである必要があります".to_string(),
            ));
        }

        Ok(serde_json::from_value(value)?)
    }

    /// 作成用のアイテムに変換する（`name` 省略時は [`DEFAULT_ITEM_NAME`]）
    pub fn into_new_item(self) -> Item {
        Item::new(
            field_text(self.name).unwrap_or_else(|| DEFAULT_ITEM_NAME.to_string()),
            field_text(self.description).unwrap_or_default(),
        )
    }

    /// 更新用のフィールドに変換する（省略時はいずれも空文字）
    pub fn into_update(self) -> ItemUpdate {
        ItemUpdate {
            name:        field_text(self.name).unwrap_or_default(),
            description: field_text(self.description).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    // ===== ItemId =====

    #[test]
    fn test_generateはuuid_v4形式のidを返す() {
        let id = ItemId::generate();

        let uuid = Uuid::parse_str(id.as_str()).expect("UUID としてパースできること");
        assert_eq!(uuid.get_version(), Some(uuid::Version::Random));
    }

    #[test]
    fn test_generateは毎回異なるidを返す() {
        assert_ne!(ItemId::generate(), ItemId::generate());
    }

    #[test]
    fn test_from_stringは任意の文字列を保持する() {
        let id = ItemId::from_string("abc");
        assert_eq!(id.as_str(), "abc");
        assert_eq!(id.to_string(), "abc");
    }

    // ===== Item =====

    #[test]
    fn test_itemのjson表現がフラットなオブジェクトになる() {
        let item = Item::from_stored(
            ItemId::from_string("id-1"),
            "Widget".to_string(),
            "A thing".to_string(),
        );

        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"id": "id-1", "name": "Widget", "description": "A thing"})
        );
    }

    // ===== ItemPayload::parse =====

    #[rstest]
    #[case::ボディなし(None)]
    #[case::空文字(Some(""))]
    #[case::空オブジェクト(Some("{}"))]
    fn test_parseで省略時は全フィールドがnoneになる(#[case] body: Option<&str>) {
        let payload = ItemPayload::parse(body).unwrap();
        assert_eq!(payload, ItemPayload::default());
    }

    #[test]
    fn test_parseで両フィールドを読み取る() {
        let payload =
            ItemPayload::parse(Some(r#"{"name":"Widget","description":"A thing"}"#)).unwrap();

        assert_eq!(payload.name, Some(json!("Widget")));
        assert_eq!(payload.description, Some(json!("A thing")));
    }

    #[test]
    fn test_parseで未知のフィールドは無視する() {
        let payload = ItemPayload::parse(Some(r#"{"name":"X","color":"red"}"#)).unwrap();
        assert_eq!(payload.name, Some(json!("X")));
    }

    #[test]
    fn test_parseで不正なjsonはmalformed_jsonを返す() {
        let result = ItemPayload::parse(Some("{not json"));
        assert!(matches!(result, Err(DomainError::MalformedJson(_))));
    }

    #[rstest]
    #[case::配列(r#"["Widget", "A thing"]"#)]
    #[case::文字列(r#""Widget""#)]
    #[case::数値("42")]
    #[case::null("null")]
    fn test_parseでオブジェクト以外はvalidationを返す(#[case] body: &str) {
        let result = ItemPayload::parse(Some(body));
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_parseで文字列以外のフィールド値も受け付ける() {
        let payload = ItemPayload::parse(Some(r#"{"name": 123, "description": true}"#)).unwrap();

        assert_eq!(payload.name, Some(json!(123)));
        assert_eq!(payload.description, Some(json!(true)));
    }

    // ===== デフォルト値 =====

    #[test]
    fn test_into_new_itemで省略時はuntitledと空文字になる() {
        let item = ItemPayload::default().into_new_item();

        assert_eq!(item.name(), DEFAULT_ITEM_NAME);
        assert_eq!(item.description(), "");
    }

    #[test]
    fn test_into_new_itemで指定値がそのまま使われる() {
        let payload = ItemPayload {
            name:        Some(json!("Widget")),
            description: Some(json!("A thing")),
        };

        let item = payload.into_new_item();

        assert_eq!(item.name(), "Widget");
        assert_eq!(item.description(), "A thing");
    }

    #[test]
    fn test_into_updateで省略されたフィールドは空文字になる() {
        let payload = ItemPayload {
            name:        Some(json!("X")),
            description: None,
        };

        assert_eq!(
            payload.into_update(),
            ItemUpdate {
                name:        "X".to_string(),
                description: String::new(),
            }
        );
    }

    #[rstest]
    #[case::数値(json!(123), "123")]
    #[case::真偽値(json!(true), "true")]
    #[case::配列(json!(["a", 1]), r#"["a",1]"#)]
    #[case::オブジェクト(json!({"k": "v"}), r#"{"k":"v"}"#)]
    fn test_into_new_itemで文字列以外の値はjsonテキストになる(
        #[case] value: serde_json::Value,
        #[case] expected: &str,
    ) {
        let payload = ItemPayload {
            name:        Some(value.clone()),
            description: Some(value),
        };

        let item = payload.into_new_item();

        assert_eq!(item.name(), expected);
        assert_eq!(item.description(), expected);
    }

    #[test]
    fn test_into_new_itemでnullは省略と同じ扱いになる() {
        let payload = ItemPayload {
            name:        Some(serde_json::Value::Null),
            description: Some(serde_json::Value::Null),
        };

        let item = payload.into_new_item();

        assert_eq!(item.name(), DEFAULT_ITEM_NAME);
        assert_eq!(item.description(), "");
    }

    #[test]
    fn test_into_updateで文字列以外の値はjsonテキストになる() {
        let payload = ItemPayload {
            name:        Some(json!(42)),
            description: Some(serde_json::Value::Null),
        };

        assert_eq!(
            payload.into_update(),
            ItemUpdate {
                name:        "42".to_string(),
                description: String::new(),
            }
        );
    }

    #[test]
    fn test_into_updateでnameの省略はuntitledではなく空文字になる() {
        let update = ItemPayload::default().into_update();
        assert_eq!(update.name, "");
    }
}
