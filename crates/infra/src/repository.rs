//! # リポジトリ実装
//!
//! アイテムストアへのアクセスを抽象化するトレイトと、その DynamoDB 実装を提供する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: ハンドラは `Arc<dyn ItemRepository>` を受け取り、
//!   プロセス全体のシングルトンには依存しない
//! - **テスタビリティ**: トレイト経由でインメモリ実装に差し替え可能

pub mod item_repository;

pub use item_repository::{DynamoDbItemRepository, ItemRepository};
