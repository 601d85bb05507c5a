//! # プロキシ統合エンベロープ
//!
//! API ゲートウェイのプロキシ統合と同じ形のリクエスト/レスポンス型。
//! 各ハンドラはこのエンベロープを受け取り、エンベロープを返す。
//!
//! ```text
//! リクエスト:  { "body": "<JSON 文字列>", "pathParameters": { "id": "..." } }
//! レスポンス:  { "statusCode": 200, "body": "<JSON 文字列>" }
//! ```
//!
//! `body` はどちらも「JSON をエンコードした文字列」であり、オブジェクトではない。

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// ステータスコード: 成功
pub const STATUS_OK: u16 = 200;

/// ステータスコード: 失敗（エラー種別を問わない）
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// ハンドラへの入力エンベロープ
///
/// 未知のフィールド（`headers`, `requestContext` など）は無視する。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequest {
    /// リクエストボディ（JSON エンコード済み文字列）
    #[serde(default)]
    pub body:            Option<String>,
    /// パスパラメータ（`{id}` など）
    ///
    /// 値の型はエンベロープの段階では検証しない。文字列以外の値は
    /// [`path_parameter`](Self::path_parameter) で取得できない。
    #[serde(default)]
    pub path_parameters: Option<HashMap<String, serde_json::Value>>,
}

impl ProxyRequest {
    /// ボディを指定してリクエストを作成する
    pub fn new(body: Option<String>) -> Self {
        Self {
            body,
            path_parameters: None,
        }
    }

    /// パスパラメータを追加する
    pub fn with_path_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_parameters
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), serde_json::Value::String(value.into()));
        self
    }

    /// ボディ文字列への参照
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// 文字列のパスパラメータを取得する
    pub fn path_parameter(&self, name: &str) -> Option<&str> {
        self.path_parameters
            .as_ref()
            .and_then(|params| params.get(name))
            .and_then(serde_json::Value::as_str)
    }
}

/// ハンドラの出力エンベロープ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    /// レスポンスボディ（JSON エンコード済み文字列）
    pub body:        String,
}

impl ProxyResponse {
    /// 200 レスポンスを作成する
    ///
    /// シリアライズに失敗した場合は 500 のエラーレスポンスになる。
    pub fn ok<T: Serialize>(body: &T) -> Self {
        match serde_json::to_string(body) {
            Ok(body) => Self {
                status_code: STATUS_OK,
                body,
            },
            Err(e) => Self::error(e.to_string()),
        }
    }

    /// `{"message": ...}` 形式の 200 レスポンスを作成する
    pub fn message(message: impl Into<String>) -> Self {
        Self::ok(&MessageBody {
            message: message.into(),
        })
    }

    /// `{"error": ...}` 形式の 500 レスポンスを作成する
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status_code: STATUS_INTERNAL_ERROR,
            body:        serde_json::json!({ "error": message.into() }).to_string(),
        }
    }
}

/// 成功メッセージのボディ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

/// 失敗時のボディ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
