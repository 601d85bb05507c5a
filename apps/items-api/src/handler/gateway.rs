//! # ゲートウェイアダプタ
//!
//! HTTP リクエストをプロキシ統合エンベロープに変換してアイテムハンドラを呼び出し、
//! 返ってきたエンベロープを HTTP レスポンスに戻す。
//!
//! ## エンドポイント
//!
//! ```text
//! POST   /items                 → create_item
//! PUT    /items/{id}            → update_item
//! DELETE /items/{id}            → delete_item
//! POST   /invoke/{handler}      → エンベロープ JSON を直接受け取る
//! ```
//!
//! `/items` 系はエンベロープの `statusCode` を HTTP ステータスに、`body` を
//! そのままレスポンスボディにする。`/invoke` 系はエンベロープ自体を JSON で返す。

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use items_shared::{ErrorBody, ProxyRequest, ProxyResponse};

use super::item::{ID_PATH_PARAMETER, ItemState, create_item, delete_item, update_item};
use crate::error::HandlerError;

/// `/invoke/{handler}` で呼び出せるハンドラ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    Create,
    Update,
    Delete,
}

impl HandlerKind {
    /// ハンドラ名から種別を解決する
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "create" => Some(Self::Create),
            "update" => Some(Self::Update),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }

    /// エンベロープを対応するハンドラに渡す
    pub async fn dispatch(self, state: &ItemState, request: &ProxyRequest) -> ProxyResponse {
        let repository = state.repository.as_ref();
        match self {
            Self::Create => create_item(repository, request).await,
            Self::Update => update_item(repository, request).await,
            Self::Delete => delete_item(repository, request).await,
        }
    }
}

/// エンベロープを HTTP レスポンスに変換する
pub fn into_http_response(response: ProxyResponse) -> Response {
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        response.body,
    )
        .into_response()
}

/// ボディのバイト列をエンベロープ用の文字列にする
///
/// 空のボディは「ボディなし」として扱う。
fn body_from(bytes: Bytes) -> Result<Option<String>, HandlerError> {
    if bytes.is_empty() {
        return Ok(None);
    }
    Ok(Some(String::from_utf8(bytes.to_vec())?))
}

/// POST /items
pub async fn post_item(State(state): State<Arc<ItemState>>, bytes: Bytes) -> Response {
    let response = match body_from(bytes) {
        Ok(body) => HandlerKind::Create.dispatch(&state, &ProxyRequest::new(body)).await,
        Err(e) => e.into_proxy_response(),
    };

    into_http_response(response)
}

/// PUT /items/{id}
pub async fn put_item(
    State(state): State<Arc<ItemState>>,
    Path(id): Path<String>,
    bytes: Bytes,
) -> Response {
    let response = match body_from(bytes) {
        Ok(body) => {
            let request = ProxyRequest::new(body).with_path_parameter(ID_PATH_PARAMETER, id);
            HandlerKind::Update.dispatch(&state, &request).await
        }
        Err(e) => e.into_proxy_response(),
    };

    into_http_response(response)
}

/// DELETE /items/{id}
pub async fn remove_item(State(state): State<Arc<ItemState>>, Path(id): Path<String>) -> Response {
    let request = ProxyRequest::new(None).with_path_parameter(ID_PATH_PARAMETER, id);
    let response = HandlerKind::Delete.dispatch(&state, &request).await;

    into_http_response(response)
}

/// POST /invoke/{handler}
///
/// 未知のハンドラ名は 404、エンベロープとして解釈できないボディは 400 を返す。
/// それ以外はハンドラの結果に関わらず 200 でエンベロープを返す。
pub async fn invoke_handler(
    State(state): State<Arc<ItemState>>,
    Path(name): Path<String>,
    bytes: Bytes,
) -> Response {
    let Some(kind) = HandlerKind::from_name(&name) else {
        tracing::warn!(handler = %name, "未知のハンドラが指定されました");
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorBody {
                error: format!("ハンドラ '{name}' は存在しません"),
            }),
        )
            .into_response();
    };

    let request: ProxyRequest = match serde_json::from_slice(&bytes) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!(error = %e, "エンベロープの解析に失敗しました");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: format!("エンベロープの解析に失敗しました: {e}"),
                }),
            )
                .into_response();
        }
    };

    Json(kind.dispatch(&state, &request).await).into_response()
}
