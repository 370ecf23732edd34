//! SQLite によるプロジェクトストア

use crate::error::Result;
use crate::project::{new_id, FileNode, ProjectDocument};
use crate::store::{NewServiceUser, ProjectStore, ServiceUser};
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use std::str::FromStr;

/// SQLite ストア
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// ファイルを開き（無ければ作成）、テーブルを用意する
    pub async fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let db_url = format!("sqlite:{}?mode=rwc", db_path.display());
        let options = SqliteConnectOptions::from_str(&db_url)?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .busy_timeout(std::time::Duration::from_secs(30));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                username TEXT NOT NULL UNIQUE,
                email TEXT NOT NULL,
                credential_ref TEXT NOT NULL,
                created_at TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS projects (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                owner_user_id TEXT NOT NULL REFERENCES users(id),
                files TEXT NOT NULL,
                created_at TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_projects_owner ON projects(owner_user_id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn user_from_row(row: &SqliteRow) -> ServiceUser {
    ServiceUser {
        id: row.get("id"),
        username: row.get("username"),
        email: row.get("email"),
        credential_ref: row.get("credential_ref"),
    }
}

fn project_from_row(row: &SqliteRow) -> Result<ProjectDocument> {
    let files: String = row.get("files");
    let files: Vec<FileNode> = serde_json::from_str(&files)?;

    Ok(ProjectDocument {
        id: row.get("id"),
        name: row.get("name"),
        owner_user_id: row.get("owner_user_id"),
        files,
    })
}

impl ProjectStore for SqliteStore {
    fn find_user_by_username<'a>(
        &'a self,
        username: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<ServiceUser>>> + Send + 'a>> {
        Box::pin(async move {
            let row = sqlx::query(
                "SELECT id, username, email, credential_ref FROM users WHERE username = ?",
            )
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

            Ok(row.as_ref().map(user_from_row))
        })
    }

    fn create_user<'a>(
        &'a self,
        user: &'a NewServiceUser,
    ) -> Pin<Box<dyn Future<Output = Result<ServiceUser>> + Send + 'a>> {
        Box::pin(async move {
            let id = new_id();
            let now = Utc::now().to_rfc3339();

            sqlx::query(
                "INSERT INTO users (id, username, email, credential_ref, created_at) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(&id)
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.credential_ref)
            .bind(&now)
            .execute(&self.pool)
            .await?;

            Ok(ServiceUser {
                id,
                username: user.username.clone(),
                email: user.email.clone(),
                credential_ref: user.credential_ref.clone(),
            })
        })
    }

    fn find_projects_by_owner<'a>(
        &'a self,
        owner_user_id: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<ProjectDocument>>> + Send + 'a>> {
        Box::pin(async move {
            let rows = sqlx::query(
                "SELECT id, name, owner_user_id, files FROM projects WHERE owner_user_id = ? ORDER BY created_at, rowid",
            )
            .bind(owner_user_id)
            .fetch_all(&self.pool)
            .await?;

            rows.iter().map(project_from_row).collect()
        })
    }

    fn delete_project<'a>(
        &'a self,
        project_id: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            sqlx::query("DELETE FROM projects WHERE id = ?")
                .bind(project_id)
                .execute(&self.pool)
                .await?;
            Ok(())
        })
    }

    fn create_project<'a>(
        &'a self,
        project: &'a ProjectDocument,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            let files = serde_json::to_string(&project.files)?;
            let now = Utc::now().to_rfc3339();

            sqlx::query(
                "INSERT INTO projects (id, name, owner_user_id, files, created_at) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(&project.id)
            .bind(&project.name)
            .bind(&project.owner_user_id)
            .bind(&files)
            .bind(&now)
            .execute(&self.pool)
            .await?;

            Ok(())
        })
    }
}

#[cfg(test)]
#[path = "sqlite_test.rs"]
mod tests;
