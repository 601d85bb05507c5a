//! # HTTP リクエストハンドラ
//!
//! - `item`: エンベロープを入出力とするアイテムハンドラ本体
//! - `gateway`: HTTP とエンベロープの相互変換
//! - `health`: ヘルスチェック

pub mod gateway;
pub mod health;
pub mod item;

pub use gateway::{HandlerKind, invoke_handler, post_item, put_item, remove_item};
pub use health::health_check;
pub use item::{ItemCreatedBody, ItemState, create_item, delete_item, update_item};
