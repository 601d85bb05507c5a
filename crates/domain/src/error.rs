//! # ドメイン層エラー定義
//!
//! リクエストペイロードの解釈で発生するエラーを表現する。
//!
//! ## 設計方針
//!
//! - **thiserror 活用**: `#[error(...)]` マクロでエラーメッセージを自動生成
//! - **HTTP ステータスとは独立**: ハンドラ層はすべてのエラーを 500 に集約するため、
//!   ドメイン層はステータスコードを意識しない

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// ペイロードが JSON オブジェクトでない場合に使用する。
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// JSON の構文エラー、またはフィールドの型不一致
    #[error("JSON の解析に失敗しました: {0}")]
    MalformedJson(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_validationのメッセージにプレフィックスが付く() {
        let err = DomainError::Validation("オブジェクトではありません".to_string());
        assert_eq!(
            err.to_string(),
            "バリデーションエラー: オブジェクトではありません"
        );
    }

    #[test]
    fn test_serde_json_errorから変換できる() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: DomainError = json_err.into();

        assert!(matches!(err, DomainError::MalformedJson(_)));
        assert!(err.to_string().starts_with("JSON の解析に失敗しました: "));
    }
}
