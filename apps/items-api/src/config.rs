//! # Items API 設定
//!
//! 環境変数から Items API サーバーの設定を読み込む。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `ITEMS_API_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `ITEMS_API_PORT` | **Yes** | - | ポート番号 |
//! | `DYNAMODB_ENDPOINT` | No | AWS デフォルト | DynamoDB エンドポイント（DynamoDB Local 使用時に設定） |
//! | `ITEMS_TABLE_NAME` | No | `ItemsTable` | アイテムテーブル名 |

use std::env;

use thiserror::Error;

/// アイテムテーブル名のデフォルト値
pub const DEFAULT_TABLE_NAME: &str = "ItemsTable";

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 必須の環境変数が未設定
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    /// 値の形式が不正
    #[error("{name} の値が不正です: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Items API サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemsApiConfig {
    /// バインドアドレス
    pub host:              String,
    /// ポート番号
    pub port:              u16,
    /// DynamoDB エンドポイント URL（未設定で AWS のデフォルト）
    pub dynamodb_endpoint: Option<String>,
    /// アイテムテーブル名
    pub table_name:        String,
}

impl ItemsApiConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の値取得関数から設定を読み込む
    ///
    /// 空文字の値は未設定として扱う。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let port_str = get("ITEMS_API_PORT").ok_or(ConfigError::Missing("ITEMS_API_PORT"))?;
        let port: u16 = port_str.parse().map_err(|_| ConfigError::Invalid {
            name:  "ITEMS_API_PORT",
            value: port_str,
        })?;

        Ok(Self {
            host: get("ITEMS_API_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            dynamodb_endpoint: get("DYNAMODB_ENDPOINT"),
            table_name: get("ITEMS_TABLE_NAME").unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_必須項目のみでデフォルト値が使われる() {
        let config = ItemsApiConfig::from_lookup(lookup_from(&[("ITEMS_API_PORT", "3000")])).unwrap();

        assert_eq!(
            config,
            ItemsApiConfig {
                host:              "0.0.0.0".to_string(),
                port:              3000,
                dynamodb_endpoint: None,
                table_name:        "ItemsTable".to_string(),
            }
        );
    }

    #[test]
    fn test_全項目を指定した値で読み込む() {
        let config = ItemsApiConfig::from_lookup(lookup_from(&[
            ("ITEMS_API_HOST", "127.0.0.1"),
            ("ITEMS_API_PORT", "8080"),
            ("DYNAMODB_ENDPOINT", "http://localhost:18000"),
            ("ITEMS_TABLE_NAME", "items_dev"),
        ]))
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.dynamodb_endpoint.as_deref(),
            Some("http://localhost:18000")
        );
        assert_eq!(config.table_name, "items_dev");
    }

    #[test]
    fn test_portが未設定ならmissingを返す() {
        let result = ItemsApiConfig::from_lookup(lookup_from(&[]));
        assert_eq!(result, Err(ConfigError::Missing("ITEMS_API_PORT")));
    }

    #[test]
    fn test_portが数値でなければinvalidを返す() {
        let result = ItemsApiConfig::from_lookup(lookup_from(&[("ITEMS_API_PORT", "abc")]));
        assert_eq!(
            result,
            Err(ConfigError::Invalid {
                name:  "ITEMS_API_PORT",
                value: "abc".to_string(),
            })
        );
    }

    #[test]
    fn test_空文字のエンドポイントは未設定として扱う() {
        let config = ItemsApiConfig::from_lookup(lookup_from(&[
            ("ITEMS_API_PORT", "3000"),
            ("DYNAMODB_ENDPOINT", ""),
        ]))
        .unwrap();

        assert_eq!(config.dynamodb_endpoint, None);
    }
}
