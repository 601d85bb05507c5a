//! # DynamoDB 接続管理
//!
//! Amazon DynamoDB への接続管理とアイテムテーブルの自動作成を行う。
//!
//! ## 設計方針
//!
//! - **ローカル開発**: `DYNAMODB_ENDPOINT` を指定して DynamoDB Local を使用
//! - **本番環境**: エンドポイント未指定時は AWS SDK のデフォルトチェーン
//!   （環境変数、IAM ロール）で認証・リージョンを解決する
//! - **テーブル自動作成**: 起動時にテーブルが存在しなければ作成（冪等）
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use items_infra::dynamodb;
//!
//! async fn setup() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = dynamodb::create_client(Some("http://localhost:18000")).await;
//!     dynamodb::ensure_items_table(&client, "ItemsTable").await?;
//!     Ok(())
//! }
//! ```

use aws_sdk_dynamodb::{
    Client,
    types::{AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType},
};

use crate::InfraError;

/// アイテムテーブルのパーティションキー属性名
pub const ITEM_KEY_ATTRIBUTE: &str = "id";

/// DynamoDB クライアントを作成する
///
/// # 引数
///
/// * `endpoint` - DynamoDB エンドポイント URL（例: `http://localhost:18000`）。
///   指定した場合はダミーの認証情報を使う（DynamoDB Local は検証しない）。
///   `None` の場合は AWS SDK のデフォルト設定を読み込む。
pub async fn create_client(endpoint: Option<&str>) -> Client {
    let loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

    let config = match endpoint {
        Some(endpoint) => {
            loader
                .endpoint_url(endpoint)
                .region(aws_config::Region::new("ap-northeast-1"))
                // DynamoDB Local はクレデンシャルを検証しないが、SDK はプロバイダが必要
                .credentials_provider(aws_sdk_dynamodb::config::Credentials::new(
                    "local", "local", None, None, "local",
                ))
                .load()
                .await
        }
        None => loader.load().await,
    };

    Client::new(&config)
}

/// アイテムテーブルが存在しなければ作成する（冪等）
///
/// テーブルスキーマ:
/// - PK: `id` (String) — アイテム ID
/// - ソートキーなし、オンデマンド課金
pub async fn ensure_items_table(client: &Client, table_name: &str) -> Result<(), InfraError> {
    match client.describe_table().table_name(table_name).send().await {
        Ok(_) => {
            tracing::debug!("テーブル '{}' は既に存在します", table_name);
            return Ok(());
        }
        Err(err) => {
            // ResourceNotFoundException の場合のみテーブル作成に進む
            let not_found = err
                .as_service_error()
                .map(|e| e.is_resource_not_found_exception())
                .unwrap_or(false);
            if !not_found {
                return Err(InfraError::dynamo_db(format!(
                    "テーブル '{}' の確認に失敗: {}",
                    table_name, err
                )));
            }
        }
    }

    tracing::info!("テーブル '{}' を作成します", table_name);

    let key_schema = KeySchemaElement::builder()
        .attribute_name(ITEM_KEY_ATTRIBUTE)
        .key_type(KeyType::Hash)
        .build()
        .map_err(|e| InfraError::dynamo_db(format!("KeySchema 構築エラー: {e}")))?;
    let attribute_definition = AttributeDefinition::builder()
        .attribute_name(ITEM_KEY_ATTRIBUTE)
        .attribute_type(ScalarAttributeType::S)
        .build()
        .map_err(|e| InfraError::dynamo_db(format!("AttributeDefinition 構築エラー: {e}")))?;

    let create_result = client
        .create_table()
        .table_name(table_name)
        .key_schema(key_schema)
        .attribute_definitions(attribute_definition)
        .billing_mode(BillingMode::PayPerRequest)
        .send()
        .await;

    if let Err(err) = create_result {
        // 並行起動時は他プロセスが作成中の可能性がある
        let is_resource_in_use = err
            .as_service_error()
            .map(|e| e.is_resource_in_use_exception())
            .unwrap_or(false);
        if !is_resource_in_use {
            return Err(InfraError::dynamo_db(format!(
                "テーブル '{}' の作成に失敗: {}",
                table_name, err
            )));
        }
        tracing::debug!(
            "テーブル '{}' は既に作成中または存在します（ResourceInUseException）",
            table_name
        );
        return Ok(());
    }

    tracing::info!("テーブル '{}' を作成しました", table_name);

    Ok(())
}
