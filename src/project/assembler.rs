//! 基本ファイルツリーの組み立て

use crate::content::SketchVariant;
use crate::project::document::{new_id, FileNode, ProjectDocument, ProjectHandles};
use crate::scaffold::{self, CSS_FILE, HTML_FILE, SKETCH_FILE};

/// インスタンスコンテナの sketch.js に置く案内文
pub const INSTANCE_CONTAINER_PLACEHOLDER: &str =
    "// Instance Mode: Instance Container, please check its index.html file";

/// プロジェクト組み立て器
#[derive(Debug, Clone)]
pub struct ProjectAssembler {
    owner_user_id: String,
}

impl ProjectAssembler {
    pub fn new(owner_user_id: impl Into<String>) -> Self {
        Self {
            owner_user_id: owner_user_id.into(),
        }
    }

    /// root / sketch.js / index.html / style.css の4ノードを組み立てる
    ///
    /// インスタンスコンテナでは本文を index.html に置き、そちらを選択状態にする。
    pub fn assemble(&self, project_name: &str, content: &str) -> (ProjectDocument, ProjectHandles) {
        let defaults = scaffold::default_files();
        let (sketch, html) = match SketchVariant::of(project_name) {
            SketchVariant::InstanceContainer => (
                FileNode::inline(SKETCH_FILE, INSTANCE_CONTAINER_PLACEHOLDER),
                FileNode::inline(HTML_FILE, content).selected(),
            ),
            SketchVariant::Normal => (
                FileNode::inline(SKETCH_FILE, content).selected(),
                FileNode::inline(HTML_FILE, defaults[HTML_FILE]),
            ),
        };
        let css = FileNode::inline(CSS_FILE, defaults[CSS_FILE]);

        let root = FileNode::folder("root").with_children(vec![
            sketch.id.clone(),
            html.id.clone(),
            css.id.clone(),
        ]);

        let handles = ProjectHandles {
            root: root.id.clone(),
            sketch: sketch.id.clone(),
            html: html.id.clone(),
            css: css.id.clone(),
            assets: None,
        };

        let document = ProjectDocument {
            id: new_id(),
            name: project_name.to_string(),
            owner_user_id: self.owner_user_id.clone(),
            files: vec![root, sketch, html, css],
        };

        (document, handles)
    }
}

#[cfg(test)]
#[path = "assembler_test.rs"]
mod tests;
