//! テスト用モックカタログ

use super::*;
use crate::error::SeedError;
use std::collections::HashMap;
use std::sync::RwLock;

/// テスト用モックカタログ
pub struct MockCatalog {
    listings: RwLock<HashMap<String, Vec<DirectoryEntry>>>,
    texts: RwLock<HashMap<String, String>>,
    requests: RwLock<Vec<String>>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self {
            listings: RwLock::new(HashMap::new()),
            texts: RwLock::new(HashMap::new()),
            requests: RwLock::new(Vec::new()),
        }
    }

    /// ディレクトリ一覧を登録
    pub fn add_listing(&self, url: &str, entries: Vec<DirectoryEntry>) {
        self.listings
            .write()
            .unwrap()
            .insert(url.to_string(), entries);
    }

    /// ファイル本文を登録
    pub fn add_text(&self, url: &str, text: &str) {
        self.texts
            .write()
            .unwrap()
            .insert(url.to_string(), text.to_string());
    }

    /// これまでに受けたリクエストURL（受信順）
    pub fn requests(&self) -> Vec<String> {
        self.requests.read().unwrap().clone()
    }

    fn record(&self, url: &str) {
        self.requests.write().unwrap().push(url.to_string());
    }

    fn missing(url: &str) -> SeedError {
        SeedError::CatalogApi {
            status: 404,
            message: format!("Not Found: {url}"),
        }
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSource for MockCatalog {
    fn list_directory<'a>(
        &'a self,
        url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<DirectoryEntry>>> + Send + 'a>> {
        Box::pin(async move {
            self.record(url);
            self.listings
                .read()
                .unwrap()
                .get(url)
                .cloned()
                .ok_or_else(|| Self::missing(url))
        })
    }

    fn fetch_text<'a>(
        &'a self,
        url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(async move {
            self.record(url);
            self.texts
                .read()
                .unwrap()
                .get(url)
                .cloned()
                .ok_or_else(|| Self::missing(url))
        })
    }
}
