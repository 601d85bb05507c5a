//! # アイテムハンドラ
//!
//! 作成・更新・削除の 3 ハンドラ。いずれもプロキシ統合エンベロープ
//! （[`ProxyRequest`] → [`ProxyResponse`]）を入出力とし、ストア操作を 1 回だけ行う。
//!
//! ## 処理の流れ
//!
//! ```text
//! 開始 → 入力の解釈 → ストア操作 → 成功 (200)
//!            └──────────┴──────→ 失敗 (500, {"error": ...})
//! ```
//!
//! 終端状態は成功と失敗の 2 つのみ。リトライ・部分コミット・補償処理は行わない。
//! 入力の解釈に失敗した場合、ストアには一切書き込まない。

use std::sync::Arc;

use items_domain::item::{Item, ItemId, ItemPayload};
use items_infra::repository::ItemRepository;
use items_shared::{ProxyRequest, ProxyResponse};
use serde::{Deserialize, Serialize};

use crate::error::HandlerError;

/// 作成成功時のメッセージ
pub const ITEM_CREATED_MESSAGE: &str = "Item created successfully";
/// 更新成功時のメッセージ
pub const ITEM_UPDATED_MESSAGE: &str = "Item updated successfully";
/// 削除成功時のメッセージ
pub const ITEM_DELETED_MESSAGE: &str = "Item deleted successfully";

/// アイテム ID を受け取るパスパラメータ名
pub const ID_PATH_PARAMETER: &str = "id";

/// アイテム API の共有状態
///
/// ストアは起動時に一度だけ作成し、全リクエストで共有する。
pub struct ItemState {
    pub repository: Arc<dyn ItemRepository>,
}

/// 作成成功レスポンスのボディ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCreatedBody {
    pub message: String,
    pub item:    Item,
}

/// アイテムを作成する
///
/// ID を採番し、ボディの `name`（省略時 `"Untitled"`）と `description`
/// （省略時は空文字）でアイテムを無条件に書き込む。
#[tracing::instrument(skip_all)]
pub async fn create_item(repository: &dyn ItemRepository, request: &ProxyRequest) -> ProxyResponse {
    match try_create_item(repository, request).await {
        Ok(item) => ProxyResponse::ok(&ItemCreatedBody {
            message: ITEM_CREATED_MESSAGE.to_string(),
            item,
        }),
        Err(e) => e.into_proxy_response(),
    }
}

async fn try_create_item(
    repository: &dyn ItemRepository,
    request: &ProxyRequest,
) -> Result<Item, HandlerError> {
    let item = ItemPayload::parse(request.body())?.into_new_item();

    repository.put(&item).await?;

    tracing::info!(item_id = %item.id(), "アイテムを作成しました");
    Ok(item)
}

/// アイテムを更新する
///
/// `name` と `description` をボディの値（省略時はいずれも空文字）で
/// 無条件に上書きする。存在確認は行わない。
#[tracing::instrument(skip_all)]
pub async fn update_item(repository: &dyn ItemRepository, request: &ProxyRequest) -> ProxyResponse {
    match try_update_item(repository, request).await {
        Ok(()) => ProxyResponse::message(ITEM_UPDATED_MESSAGE),
        Err(e) => e.into_proxy_response(),
    }
}

async fn try_update_item(
    repository: &dyn ItemRepository,
    request: &ProxyRequest,
) -> Result<(), HandlerError> {
    let id = item_id_from(request)?;
    let update = ItemPayload::parse(request.body())?.into_update();

    repository.update(&id, &update).await?;

    tracing::info!(item_id = %id, "アイテムを更新しました");
    Ok(())
}

/// アイテムを削除する
///
/// 存在しない ID の削除も成功として扱う。
#[tracing::instrument(skip_all)]
pub async fn delete_item(repository: &dyn ItemRepository, request: &ProxyRequest) -> ProxyResponse {
    match try_delete_item(repository, request).await {
        Ok(()) => ProxyResponse::message(ITEM_DELETED_MESSAGE),
        Err(e) => e.into_proxy_response(),
    }
}

async fn try_delete_item(
    repository: &dyn ItemRepository,
    request: &ProxyRequest,
) -> Result<(), HandlerError> {
    let id = item_id_from(request)?;

    repository.delete(&id).await?;

    tracing::info!(item_id = %id, "アイテムを削除しました");
    Ok(())
}

fn item_id_from(request: &ProxyRequest) -> Result<ItemId, HandlerError> {
    request
        .path_parameter(ID_PATH_PARAMETER)
        .filter(|id| !id.is_empty())
        .map(ItemId::from_string)
        .ok_or(HandlerError::MissingPathParameter(ID_PATH_PARAMETER))
}
