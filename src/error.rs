use thiserror::Error;

/// シード処理の統一エラー型
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Catalog API error: {message} (status: {status})")]
    CatalogApi { status: u16, message: String },

    #[error("'{name}' not found in listing {listing}")]
    NotFoundWithinListing { listing: String, name: String },

    #[error("Persistence error: {0}")]
    Persistence(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Batch task failed: {0}")]
    Task(String),
}

pub type Result<T> = std::result::Result<T, SeedError>;

/// エラー分類
///
/// パイプラインの各ステージはこの分類だけを見て
/// 中断するか読み飛ばすかを決める。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// リモート取得の失敗（致命的）
    TransientNetwork,
    /// 一覧内に期待したスクリプト/アセットが無い（読み飛ばし）
    NotFoundWithinListing,
    /// ストア書き込みの失敗（致命的）
    Persistence,
    /// 起動時設定の不備（致命的）
    Configuration,
}

impl SeedError {
    /// エラー分類を返す
    pub fn kind(&self) -> ErrorKind {
        match self {
            SeedError::Network(_) | SeedError::CatalogApi { .. } => ErrorKind::TransientNetwork,
            SeedError::NotFoundWithinListing { .. } => ErrorKind::NotFoundWithinListing,
            SeedError::Persistence(_)
            | SeedError::Io(_)
            | SeedError::Json(_)
            | SeedError::Task(_) => ErrorKind::Persistence,
            SeedError::Config(_) => ErrorKind::Configuration,
        }
    }

    /// 実行全体を中断すべきエラーかどうか
    pub fn is_fatal(&self) -> bool {
        self.kind() != ErrorKind::NotFoundWithinListing
    }

    /// 一覧に見つからなかったことを表すエラーを作成
    pub fn not_found(listing: impl Into<String>, name: impl Into<String>) -> Self {
        SeedError::NotFoundWithinListing {
            listing: listing.into(),
            name: name.into(),
        }
    }
}

/// 読み飛ばし可能なエラーを `None` に変換する
///
/// 致命的なエラーはそのまま返す。
pub fn soften<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if !err.is_fatal() => {
            tracing::warn!("skipped: {err}");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
