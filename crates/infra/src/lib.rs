//! # Items インフラ層
//!
//! アイテムストア（Amazon DynamoDB）との接続・通信を担当する。
//!
//! ## 設計方針
//!
//! ハンドラはストアを [`repository::ItemRepository`] トレイト経由でのみ扱う。
//! 本番では DynamoDB 実装、テストではインメモリ実装（`test-utils` feature の
//! [`mock`]）を差し替える。
//!
//! ## モジュール構成
//!
//! - [`dynamodb`] - DynamoDB クライアント作成とテーブル自動作成
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトと DynamoDB 実装
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use items_infra::{dynamodb, repository::DynamoDbItemRepository};
//!
//! async fn setup() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = dynamodb::create_client(Some("http://localhost:18000")).await;
//!     dynamodb::ensure_items_table(&client, "ItemsTable").await?;
//!     let repository = DynamoDbItemRepository::new(client, "ItemsTable".to_string());
//!     Ok(())
//! }
//! ```

pub mod dynamodb;
pub mod error;
pub mod repository;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use error::{InfraError, InfraErrorKind};
