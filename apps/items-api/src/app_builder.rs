//! # Items API アプリケーション構築
//!
//! ルーター定義とレイヤー構成を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, put},
};
use items_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::handler::{
    ItemState,
    health_check,
    invoke_handler,
    post_item,
    put_item,
    remove_item,
};

/// ルーターを構築する
pub fn build_router(state: Arc<ItemState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/items", post(post_item))
        .route("/items/{id}", put(put_item).delete(remove_item))
        .route("/invoke/{handler}", post(invoke_handler))
        .with_state(state)
        // Request ID レイヤー（下に書いたものが外側）
        // 1. SetRequestIdLayer（最外）: UUID v7 を生成（クライアント提供値があればそちらを使用）
        // 2. TraceLayer: スパンに request_id を含める
        // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
