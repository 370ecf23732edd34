//! GitHub カタログクライアント

use crate::catalog::{CatalogSource, DirectoryEntry};
use crate::config::{BasicCredentials, HttpConfig};
use crate::error::Result;
use crate::http;
use reqwest::Client;
use std::future::Future;
use std::pin::Pin;

/// GitHub contents API クライアント
pub struct GitHubCatalog {
    http: Client,
    credentials: BasicCredentials,
}

impl GitHubCatalog {
    /// 新しいGitHubCatalogを作成
    pub fn new(config: &HttpConfig, credentials: &BasicCredentials) -> Self {
        Self {
            http: config.build_client(),
            credentials: credentials.clone(),
        }
    }
}

impl CatalogSource for GitHubCatalog {
    fn list_directory<'a>(
        &'a self,
        url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<DirectoryEntry>>> + Send + 'a>> {
        Box::pin(async move {
            let response = http::get_checked(
                &self.http,
                url,
                &self.credentials,
                Some("application/vnd.github+json"),
            )
            .await?;

            let entries: Vec<DirectoryEntry> = response.json().await?;
            tracing::debug!(url, count = entries.len(), "listed directory");
            Ok(entries)
        })
    }

    fn fetch_text<'a>(
        &'a self,
        url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(async move {
            let response = http::get_checked(&self.http, url, &self.credentials, None).await?;
            Ok(response.text().await?)
        })
    }
}
