//! リモートカタログ
//!
//! GitHub contents API のディレクトリ一覧とファイル本文の取得を抽象化する。

mod github;

#[cfg(test)]
pub mod mock;

pub use github::GitHubCatalog;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

/// 一覧エントリの種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    File,
    Dir,
    Symlink,
    Submodule,
}

/// ディレクトリ一覧の1エントリ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    /// ファイル本文の取得URL（ディレクトリではnull）
    pub download_url: Option<String>,
    /// エントリ自身のAPI URL
    #[serde(default)]
    pub url: String,
}

impl DirectoryEntry {
    /// 拡張子を除いた名前（最初の `.` より前）
    pub fn stem(&self) -> &str {
        self.name.split('.').next().unwrap_or(&self.name)
    }
}

#[cfg(test)]
impl DirectoryEntry {
    /// ファイルエントリを作成
    pub fn file(name: impl Into<String>, download_url: impl Into<String>) -> Self {
        let download_url = download_url.into();
        Self {
            name: name.into(),
            entry_type: EntryType::File,
            url: download_url.clone(),
            download_url: Some(download_url),
        }
    }

    /// ディレクトリエントリを作成
    pub fn dir(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entry_type: EntryType::Dir,
            download_url: None,
            url: url.into(),
        }
    }
}

/// カタログ取得元 trait
pub trait CatalogSource: Send + Sync {
    /// ディレクトリ一覧を上流の順序のまま取得
    fn list_directory<'a>(
        &'a self,
        url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<DirectoryEntry>>> + Send + 'a>>;

    /// ファイル本文をテキストで取得
    fn fetch_text<'a>(
        &'a self,
        url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>>;
}
