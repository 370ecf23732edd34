//! カテゴリとスケッチ記述子

mod resolver;

#[cfg(test)]
mod proptests;

pub use resolver::SketchResolver;

/// 例題のカテゴリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// カテゴリ一覧を取得するAPI URL
    pub url: String,
    pub name: String,
}

impl Category {
    /// ディレクトリ名からカテゴリを作成
    ///
    /// 先頭の序数セグメントを除いた名前が空になる場合は `None`。
    pub fn from_entry(name: &str, url: &str) -> Option<Self> {
        let name = category_name(name);
        if name.is_empty() {
            return None;
        }
        Some(Self {
            url: url.to_string(),
            name,
        })
    }
}

/// インポート前のスケッチ1件分の中間レコード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SketchDescriptor {
    pub category_name: String,
    pub project_name: String,
    /// スケッチ自身のディレクトリ一覧URL
    pub listing_url: String,
    /// メインスクリプトの取得URL（見つからなければ未設定）
    pub download_url: Option<String>,
    pub content: Option<String>,
}

impl SketchDescriptor {
    pub fn new(category: &Category, file_name: &str, listing_url: &str) -> Self {
        Self {
            category_name: category.name.clone(),
            project_name: project_name(&category.name, file_name),
            listing_url: listing_url.to_string(),
            download_url: None,
            content: None,
        }
    }
}

/// `03_Shaders_Basics` → `Shaders Basics`
pub fn category_name(source: &str) -> String {
    source
        .split('_')
        .skip(1)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// `<カテゴリ>: <ファイル名の末尾部分>`
///
/// ファイル名を `_` で分割して先頭の序数を除き、空白で連結して最初の `.js` を取り除く。
/// 分割できない名前はそのまま `.js` だけを取り除く。
pub fn project_name(category: &str, file_name: &str) -> String {
    let segments: Vec<&str> = file_name.split('_').collect();
    let tail = match segments.get(1) {
        Some(second) if !second.is_empty() => segments[1..].join(" "),
        _ => file_name.to_string(),
    };
    format!("{}: {}", category, tail.replacen(".js", "", 1))
}

#[cfg(test)]
#[path = "sketch_test.rs"]
mod tests;
