//! 実行設定
//!
//! 認証情報・接続先・サービスユーザー情報を環境変数から一度だけ読み込み、
//! オーケストレーター構築時に値として渡す。

use crate::env::EnvVar;
use crate::error::Result;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;

/// トップレベルのカタログ一覧
pub const DEFAULT_CATALOG_URL: &str =
    "https://api.github.com/repos/p5skia/p5.js/contents/examples/p5skia_examples?ref=p5skia";

/// 全プロジェクト共通のアセット一覧
pub const DEFAULT_ASSETS_URL: &str =
    "https://api.github.com/repos/P5Skia/p5.js/contents/examples/p5skia_examples/assets?ref=p5skia";

/// 外部参照アセットの配信元
pub const DEFAULT_ASSET_HOST: &str = "https://p5code.jb1.io/assets";

/// インスタンスモード用に差し替えるランタイムスクリプト
pub const DEFAULT_RUNTIME_SCRIPT_URL: &str = "https://p5code.jb1.io/p5skia/0.74/p5skia.js";

const DEFAULT_DB_PATH: &str = "./data/examples.sqlite";

/// HTTP設定
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// タイムアウト（秒）
    pub timeout: Option<Duration>,
    /// User-Agent
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            user_agent: "p5js-web-editor/0.0.1".to_string(),
        }
    }
}

impl HttpConfig {
    /// reqwest::Client を構築
    pub fn build_client(&self) -> Client {
        let mut builder = Client::builder().user_agent(&self.user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().unwrap_or_else(|_| Client::new())
    }
}

/// Basic認証の資格情報
#[derive(Clone)]
pub struct BasicCredentials {
    username: String,
    password: String,
}

impl BasicCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BasicCredentials({}:***)", self.username)
    }
}

/// サービスユーザーの作成情報
#[derive(Debug, Clone)]
pub struct ServiceAccount {
    pub username: String,
    pub email: String,
    pub credential_ref: String,
}

/// カタログの取得元
#[derive(Debug, Clone)]
pub struct CatalogLocation {
    pub catalog_url: String,
    pub assets_url: String,
    pub asset_host: String,
    pub runtime_script_url: String,
}

impl Default for CatalogLocation {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            assets_url: DEFAULT_ASSETS_URL.to_string(),
            asset_host: DEFAULT_ASSET_HOST.to_string(),
            runtime_script_url: DEFAULT_RUNTIME_SCRIPT_URL.to_string(),
        }
    }
}

/// シード実行の設定一式
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub credentials: BasicCredentials,
    pub account: ServiceAccount,
    pub location: CatalogLocation,
    pub http: HttpConfig,
    pub db_path: PathBuf,
    pub log_level: String,
}

impl SeedConfig {
    /// `.env` と環境変数から設定を読み込む
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let credentials = BasicCredentials::new(
            EnvVar::require("GITHUB_ID")?,
            EnvVar::require("GITHUB_SECRET")?,
        );

        let account = ServiceAccount {
            username: EnvVar::require("P5SKIA_USERNAME")?,
            email: EnvVar::require("P5SKIA_USER_EMAIL")?,
            credential_ref: EnvVar::require("P5SKIA_USER_PASSWORD")?,
        };

        let location = CatalogLocation {
            catalog_url: EnvVar::get_or("SKIA_SEED_CATALOG_URL", DEFAULT_CATALOG_URL),
            assets_url: EnvVar::get_or("SKIA_SEED_ASSETS_URL", DEFAULT_ASSETS_URL),
            ..CatalogLocation::default()
        };

        Ok(Self {
            credentials,
            account,
            location,
            http: HttpConfig::default(),
            db_path: EnvVar::get_or("SKIA_SEED_DB_PATH", DEFAULT_DB_PATH).into(),
            log_level: EnvVar::get_or("SKIA_SEED_LOG_LEVEL", "info"),
        })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
