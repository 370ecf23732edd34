use crate::error::{Result, SeedError};

/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.is_empty())
    }

    /// 環境変数を取得し、未設定ならデフォルト値を返す
    pub fn get_or(key: &str, default: &str) -> String {
        Self::get(key).unwrap_or_else(|| default.to_string())
    }

    /// 必須の環境変数を取得
    pub fn require(key: &str) -> Result<String> {
        Self::get(key).ok_or_else(|| SeedError::Config(format!("{key} is not set")))
    }
}

#[cfg(test)]
#[path = "env_test.rs"]
mod tests;
