use serde::{Deserialize, Serialize};

/// ノード種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    File,
    Folder,
}

/// ファイルツリーの1ノード
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileNode {
    pub id: String,
    pub name: String,
    pub file_type: FileType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub children: Vec<String>,
    /// エディタで最初に開くファイル
    #[serde(default)]
    pub is_selected_file: bool,
}

impl FileNode {
    /// 空のフォルダ
    pub fn folder(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            file_type: FileType::Folder,
            content: None,
            url: None,
            children: Vec::new(),
            is_selected_file: false,
        }
    }

    /// 本文を持つファイル
    pub fn inline(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            file_type: FileType::File,
            ..Self::folder(name)
        }
    }

    /// 外部URLを参照するファイル
    pub fn linked(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            file_type: FileType::File,
            ..Self::folder(name)
        }
    }

    pub fn selected(mut self) -> Self {
        self.is_selected_file = true;
        self
    }

    pub fn with_children(mut self, children: Vec<String>) -> Self {
        self.children = children;
        self
    }
}

/// 組み立て直後のノードIDへの名前付き参照
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectHandles {
    pub root: String,
    pub sketch: String,
    pub html: String,
    pub css: String,
    /// assets フォルダ（最初のアセット解決時に作成）
    pub assets: Option<String>,
}

/// 永続化されるプロジェクト
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDocument {
    pub id: String,
    pub name: String,
    pub owner_user_id: String,
    pub files: Vec<FileNode>,
}

impl ProjectDocument {
    /// IDでノードを探す（可変）
    pub fn find_mut(&mut self, id: &str) -> Option<&mut FileNode> {
        self.files.iter_mut().find(|node| node.id == id)
    }

    /// ノードを追加し、親の子リストに登録する
    ///
    /// 親が見つからなければノードは追加されず `None`。
    pub fn attach(&mut self, parent_id: &str, node: FileNode) -> Option<String> {
        let id = node.id.clone();
        let parent = self.find_mut(parent_id)?;
        parent.children.push(id.clone());
        self.files.push(node);
        Some(id)
    }
}

#[cfg(test)]
impl ProjectDocument {
    /// IDでノードを探す
    pub fn find(&self, id: &str) -> Option<&FileNode> {
        self.files.iter().find(|node| node.id == id)
    }

    /// 名前でノードを探す
    pub fn find_by_name(&self, name: &str) -> Option<&FileNode> {
        self.files.iter().find(|node| node.name == name)
    }

    /// 親ノードの直下にある子ノードを子リストの順に返す
    pub fn children_of(&self, parent_id: &str) -> Vec<&FileNode> {
        self.find(parent_id)
            .map(|parent| {
                parent
                    .children
                    .iter()
                    .filter_map(|id| self.find(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// 選択中のファイル
    pub fn selected_file(&self) -> Option<&FileNode> {
        self.files.iter().find(|node| node.is_selected_file)
    }
}

/// ノード/プロジェクト用の一意なID
pub fn new_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
#[path = "document_test.rs"]
mod tests;
