//! # Items API ライブラリ
//!
//! アイテムの作成・更新・削除を行うハンドラと、それを HTTP で公開するルーター。
//!
//! ## モジュール構成
//!
//! - `app_builder`: ルーター構築
//! - `config`: 環境変数からの設定読み込み
//! - `error`: ハンドラエラー
//! - `handler`: エンベロープハンドラと HTTP アダプタ

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
