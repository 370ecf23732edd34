//! スケッチ本文中のアセット参照をプロジェクトに結び付ける

use crate::catalog::{CatalogSource, DirectoryEntry};
use crate::error::{soften, Result, SeedError};
use crate::project::document::{FileNode, ProjectDocument, ProjectHandles};
use regex::Regex;
use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

/// アセットフォルダ名
pub const ASSETS_FOLDER: &str = "assets";

static ASSETS_REF: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"assets/[\w-]+\.\w*").unwrap());
static ASSET_REF: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"asset/[\w-]*").unwrap());

/// 本文を取り込むシェーダー拡張子
const INLINE_EXTENSIONS: [&str; 2] = [".vert", ".frag"];

/// 本文からアセット参照名を抽出する
///
/// `assets/<name>.<ext>` を優先し、無ければ `asset/<name>` を探す。
/// 同じ参照は最初の1回だけ残す。
pub fn extract_asset_refs(content: &str) -> Vec<String> {
    let primary = collect_refs(&ASSETS_REF, content, "assets/");
    if !primary.is_empty() {
        return primary;
    }
    collect_refs(&ASSET_REF, content, "asset/")
}

fn collect_refs(pattern: &Regex, content: &str, prefix: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    pattern
        .find_iter(content)
        .map(|m| m.as_str().trim_start_matches(prefix).to_string())
        .filter(|name| !name.is_empty() && seen.insert(name.clone()))
        .collect()
}

/// アセットリンカー
///
/// アセット一覧は実行ごとに一度だけ取得し、全プロジェクトで読み取り専用に共有する。
#[derive(Clone)]
pub struct AssetLinker {
    catalog: Arc<dyn CatalogSource>,
    listing: Arc<[DirectoryEntry]>,
    asset_host: String,
}

impl AssetLinker {
    pub fn new(
        catalog: Arc<dyn CatalogSource>,
        listing: Arc<[DirectoryEntry]>,
        asset_host: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            listing,
            asset_host: asset_host.into(),
        }
    }

    /// 参照名に一致する一覧エントリを探す
    ///
    /// 名前そのもの、または拡張子を除いた名前が一致するもの。複数あれば最後のもの。
    pub fn resolve(&self, reference: &str) -> Result<&DirectoryEntry> {
        self.listing
            .iter()
            .rev()
            .find(|entry| entry.name == reference || entry.stem() == reference)
            .ok_or_else(|| SeedError::not_found(ASSETS_FOLDER, reference))
    }

    /// 本文中のアセットをプロジェクトに追加し、追加した件数を返す
    ///
    /// シェーダーは一件ずつ順番に本文を取得する。取得失敗は致命的。
    pub async fn link(
        &self,
        document: &mut ProjectDocument,
        handles: &mut ProjectHandles,
        content: &str,
    ) -> Result<usize> {
        let mut linked = HashSet::new();

        for reference in extract_asset_refs(content) {
            let Some(entry) = soften(self.resolve(&reference))? else {
                continue;
            };
            if linked.contains(&entry.name) {
                continue;
            }

            let Some(node) = soften(self.asset_node(entry).await)? else {
                continue;
            };
            let Some(folder) = ensure_assets_folder(document, handles) else {
                tracing::warn!(project = %document.name, "root folder missing, asset skipped");
                continue;
            };
            document.attach(&folder, node);
            linked.insert(entry.name.clone());
            tracing::info!(project = %document.name, asset = %entry.name, "create asset");
        }

        Ok(linked.len())
    }

    async fn asset_node(&self, entry: &DirectoryEntry) -> Result<FileNode> {
        if !is_inline_asset(&entry.name) {
            let url = format!("{}/{}", self.asset_host.trim_end_matches('/'), entry.name);
            return Ok(FileNode::linked(&entry.name, url));
        }

        let download_url = entry
            .download_url
            .as_deref()
            .ok_or_else(|| SeedError::not_found(ASSETS_FOLDER, &entry.name))?;
        let text = self.catalog.fetch_text(download_url).await?;
        Ok(FileNode::inline(&entry.name, text))
    }
}

fn is_inline_asset(name: &str) -> bool {
    INLINE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// assets フォルダを返す。無ければ作って root に登録する。
fn ensure_assets_folder(document: &mut ProjectDocument, handles: &mut ProjectHandles) -> Option<String> {
    if let Some(id) = &handles.assets {
        return Some(id.clone());
    }
    let id = document.attach(&handles.root, FileNode::folder(ASSETS_FOLDER))?;
    handles.assets = Some(id.clone());
    Some(id)
}

#[cfg(test)]
#[path = "assets_test.rs"]
mod tests;
