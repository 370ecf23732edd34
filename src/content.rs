//! スケッチ本文の取得

mod variant;

pub use variant::{remap_instance_container, SketchVariant};

use crate::catalog::CatalogSource;
use crate::error::Result;
use crate::sketch::SketchDescriptor;
use std::sync::Arc;

/// スケッチ本文の取得器
#[derive(Clone)]
pub struct ContentFetcher {
    catalog: Arc<dyn CatalogSource>,
    runtime_script_url: String,
}

impl ContentFetcher {
    pub fn new(catalog: Arc<dyn CatalogSource>, runtime_script_url: impl Into<String>) -> Self {
        Self {
            catalog,
            runtime_script_url: runtime_script_url.into(),
        }
    }

    /// 本文を取得して記述子に格納する
    ///
    /// スクリプトURLが未解決の記述子には何もせず `false` を返す。
    pub async fn fetch(&self, descriptor: &mut SketchDescriptor) -> Result<bool> {
        let Some(url) = descriptor.download_url.as_deref() else {
            return Ok(false);
        };

        let raw = self.catalog.fetch_text(url).await?;

        let content = match SketchVariant::of(&descriptor.project_name) {
            SketchVariant::InstanceContainer => {
                remap_instance_container(&raw, &self.runtime_script_url)
            }
            SketchVariant::Normal => raw,
        };

        descriptor.content = Some(content);
        Ok(true)
    }
}

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;
