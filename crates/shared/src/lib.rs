//! # Items 共有ユーティリティ
//!
//! ハンドラとルーティング層で共有される型とユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なデータ構造とユーティリティのみを配置
//! - axum には依存しない（HTTP レスポンスへの変換は各サービスの責務）
//! - トレーシング関連は `observability` feature で有効化する

pub mod health;
pub mod observability;
pub mod proxy;

pub use health::HealthResponse;
pub use proxy::{ErrorBody, MessageBody, ProxyRequest, ProxyResponse};
