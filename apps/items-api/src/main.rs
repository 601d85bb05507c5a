//! # Items API サーバー
//!
//! アイテムを DynamoDB テーブルに作成・更新・削除する API サーバー。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `ITEMS_API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `ITEMS_API_PORT` | **Yes** | ポート番号 |
//! | `DYNAMODB_ENDPOINT` | No | DynamoDB エンドポイント |
//! | `ITEMS_TABLE_NAME` | No | テーブル名（デフォルト: `ItemsTable`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（DynamoDB Local）
//! ITEMS_API_PORT=3000 DYNAMODB_ENDPOINT=http://localhost:18000 cargo run -p items-api
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use items_api::{app_builder::build_router, config::ItemsApiConfig, handler::ItemState};
use items_infra::{dynamodb, repository::DynamoDbItemRepository};
use items_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    init_tracing(&TracingConfig::from_env("items-api"));
    let _tracing_guard = tracing::info_span!("app", service = "items-api").entered();

    let config = ItemsApiConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "Items API サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    let client = dynamodb::create_client(config.dynamodb_endpoint.as_deref()).await;
    dynamodb::ensure_items_table(&client, &config.table_name)
        .await
        .context("アイテムテーブルの準備に失敗しました")?;
    tracing::info!(table = %config.table_name, "DynamoDB に接続しました");

    let state = Arc::new(ItemState {
        repository: Arc::new(DynamoDbItemRepository::new(client, config.table_name.clone())),
    });
    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("バインドアドレスが不正です")?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Items API サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
