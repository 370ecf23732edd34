//! プロジェクト文書とファイルツリー

mod assembler;
mod assets;
mod document;

pub use assembler::ProjectAssembler;
pub use assets::AssetLinker;
pub use document::{new_id, FileNode, ProjectDocument};

#[cfg(test)]
pub use assembler::INSTANCE_CONTAINER_PLACEHOLDER;
#[cfg(test)]
pub use document::FileType;
