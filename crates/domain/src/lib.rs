//! # Items ドメイン層
//!
//! アイテム（キーバリューストアに格納される単一レコード）のドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: [`item::Item`]（`id` をキーに持つ唯一のエンティティ）
//! - **値オブジェクト**: [`item::ItemId`]、リクエストボディを表す [`item::ItemPayload`]
//! - **ドメインエラー**: ペイロードの解釈失敗を表現する [`DomainError`]
//!
//! ## 依存関係の方向
//!
//! ```text
//! items-api → infra → domain
//!      ↘               ↑
//!        shared ───────┘ (依存なし)
//! ```
//!
//! ドメイン層はインフラ層（DynamoDB）に一切依存しない。
//!
//! ## 使用例
//!
//! ```rust
//! use items_domain::item::ItemPayload;
//!
//! let payload = ItemPayload::parse(Some(r#"{"name": "Widget"}"#)).unwrap();
//! let item = payload.into_new_item();
//! assert_eq!(item.name(), "Widget");
//! assert_eq!(item.description(), "");
//! ```

pub mod error;
pub mod item;

pub use error::DomainError;
