//! # ハンドラエラー定義
//!
//! ハンドラ内で発生するエラーと、失敗レスポンスへの変換を定義する。
//!
//! ## 設計方針
//!
//! 内部ではエラーを種別ごとに型付けするが、呼び出し元に見える形は
//! 種別を問わず `500 {"error": "<メッセージ>"}` の 1 種類だけである。
//! 「見つからない」「入力不正」「ストア障害」を区別しない。
//! メッセージは `Display` の出力をそのまま使う。

use items_domain::DomainError;
use items_infra::InfraError;
use items_shared::ProxyResponse;
use thiserror::Error;

/// ハンドラで発生するエラー
#[derive(Debug, Error)]
pub enum HandlerError {
    /// 必須のパスパラメータがない（空文字・文字列以外の値を含む）
    #[error("パスパラメータ '{0}' がありません")]
    MissingPathParameter(&'static str),

    /// リクエストボディが UTF-8 として不正
    #[error("リクエストボディが UTF-8 ではありません: {0}")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),

    /// リクエストボディの解釈に失敗
    #[error(transparent)]
    Payload(#[from] DomainError),

    /// ストア操作に失敗
    #[error(transparent)]
    Store(#[from] InfraError),
}

impl HandlerError {
    /// 失敗レスポンスに変換する
    ///
    /// 変換の前にエラーをログに出力する。ストアエラーは SpanTrace も出力する。
    pub fn into_proxy_response(self) -> ProxyResponse {
        match &self {
            HandlerError::Store(e) => {
                tracing::error!(
                    error = %e,
                    span_trace = %e.span_trace(),
                    "ストア操作に失敗しました"
                );
            }
            other => {
                tracing::error!(error = %other, "リクエストの処理に失敗しました");
            }
        }

        ProxyResponse::error(self.to_string())
    }
}
