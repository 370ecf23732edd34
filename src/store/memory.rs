//! テスト用インメモリストア

use super::*;
use crate::error::SeedError;
use crate::project::new_id;
use std::collections::HashMap;
use std::sync::RwLock;

/// テスト用インメモリストア
pub struct MemoryStore {
    users: RwLock<HashMap<String, ServiceUser>>,
    projects: RwLock<Vec<ProjectDocument>>,
    fail_creates: RwLock<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            projects: RwLock::new(Vec::new()),
            fail_creates: RwLock::new(false),
        }
    }

    /// 保存済みプロジェクト（保存順）
    pub fn projects(&self) -> Vec<ProjectDocument> {
        self.projects.read().unwrap().clone()
    }

    /// 登録済みユーザー数
    pub fn user_count(&self) -> usize {
        self.users.read().unwrap().len()
    }

    /// 以降の create_project を失敗させる
    pub fn fail_project_creates(&self) {
        *self.fail_creates.write().unwrap() = true;
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectStore for MemoryStore {
    fn find_user_by_username<'a>(
        &'a self,
        username: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<ServiceUser>>> + Send + 'a>> {
        Box::pin(async move { Ok(self.users.read().unwrap().get(username).cloned()) })
    }

    fn create_user<'a>(
        &'a self,
        user: &'a NewServiceUser,
    ) -> Pin<Box<dyn Future<Output = Result<ServiceUser>> + Send + 'a>> {
        Box::pin(async move {
            let created = ServiceUser {
                id: new_id(),
                username: user.username.clone(),
                email: user.email.clone(),
                credential_ref: user.credential_ref.clone(),
            };
            self.users
                .write()
                .unwrap()
                .insert(user.username.clone(), created.clone());
            Ok(created)
        })
    }

    fn find_projects_by_owner<'a>(
        &'a self,
        owner_user_id: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<ProjectDocument>>> + Send + 'a>> {
        Box::pin(async move {
            Ok(self
                .projects
                .read()
                .unwrap()
                .iter()
                .filter(|p| p.owner_user_id == owner_user_id)
                .cloned()
                .collect())
        })
    }

    fn delete_project<'a>(
        &'a self,
        project_id: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            self.projects.write().unwrap().retain(|p| p.id != project_id);
            Ok(())
        })
    }

    fn create_project<'a>(
        &'a self,
        project: &'a ProjectDocument,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            if *self.fail_creates.read().unwrap() {
                return Err(SeedError::Persistence(sqlx::Error::PoolClosed));
            }
            self.projects.write().unwrap().push(project.clone());
            Ok(())
        })
    }
}
