//! カタログ一覧からスケッチ記述子を解決する

use crate::catalog::{CatalogSource, DirectoryEntry};
use crate::error::{Result, SeedError};
use crate::sketch::{Category, SketchDescriptor};
use std::sync::Arc;

/// スケッチ解決器
#[derive(Clone)]
pub struct SketchResolver {
    catalog: Arc<dyn CatalogSource>,
    catalog_url: String,
}

impl SketchResolver {
    pub fn new(catalog: Arc<dyn CatalogSource>, catalog_url: impl Into<String>) -> Self {
        Self {
            catalog,
            catalog_url: catalog_url.into(),
        }
    }

    /// トップレベル一覧からカテゴリを列挙
    ///
    /// 名前が空になるエントリ（`assets` など）は捨てる。重複排除はしない。
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        let entries = self.catalog.list_directory(&self.catalog_url).await?;

        Ok(entries
            .iter()
            .filter_map(|entry| Category::from_entry(&entry.name, &entry.url))
            .collect())
    }

    /// カテゴリ内のスケッチを上流の並び順で列挙
    pub async fn resolve_sketches(&self, category: &Category) -> Result<Vec<SketchDescriptor>> {
        let entries = self.catalog.list_directory(&category.url).await?;

        Ok(entries
            .iter()
            .map(|entry| SketchDescriptor::new(category, &entry.name, &entry.url))
            .collect())
    }

    /// スケッチのディレクトリからメインスクリプトのURLを探す
    ///
    /// 名前が `.js` で終わるエントリのうち最後のものを採用する。
    /// 見つからなければ `NotFoundWithinListing`。
    pub async fn find_script(&self, descriptor: &SketchDescriptor) -> Result<String> {
        let entries = self.catalog.list_directory(&descriptor.listing_url).await?;

        select_script(&entries).ok_or_else(|| {
            SeedError::not_found(&descriptor.listing_url, format!("{}/*.js", descriptor.project_name))
        })
    }
}

fn select_script(entries: &[DirectoryEntry]) -> Option<String> {
    entries
        .iter()
        .rev()
        .filter(|entry| entry.name.ends_with(".js"))
        .find_map(|entry| entry.download_url.clone())
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod tests;
