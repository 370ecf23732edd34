//! プロジェクトストア
//!
//! インポート処理が必要とする5操作だけを定義する。

mod sqlite;

#[cfg(test)]
pub mod memory;

pub use sqlite::SqliteStore;

use crate::error::Result;
use crate::project::ProjectDocument;
use std::future::Future;
use std::pin::Pin;

/// 例題プロジェクトを所有するサービスユーザー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceUser {
    pub id: String,
    pub username: String,
    pub email: String,
    pub credential_ref: String,
}

/// サービスユーザー作成要求
#[derive(Debug, Clone)]
pub struct NewServiceUser {
    pub username: String,
    pub email: String,
    pub credential_ref: String,
}

/// 永続化 trait
pub trait ProjectStore: Send + Sync {
    /// ユーザー名でユーザーを探す
    fn find_user_by_username<'a>(
        &'a self,
        username: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<ServiceUser>>> + Send + 'a>>;

    /// ユーザーを作成
    fn create_user<'a>(
        &'a self,
        user: &'a NewServiceUser,
    ) -> Pin<Box<dyn Future<Output = Result<ServiceUser>> + Send + 'a>>;

    /// 所有者のプロジェクト一覧
    fn find_projects_by_owner<'a>(
        &'a self,
        owner_user_id: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<ProjectDocument>>> + Send + 'a>>;

    /// プロジェクトを1件削除
    fn delete_project<'a>(
        &'a self,
        project_id: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;

    /// プロジェクトを1件作成
    fn create_project<'a>(
        &'a self,
        project: &'a ProjectDocument,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;
}
