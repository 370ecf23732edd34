//! インポート全体の実行

use crate::catalog::{CatalogSource, DirectoryEntry};
use crate::config::{CatalogLocation, ServiceAccount};
use crate::content::ContentFetcher;
use crate::error::{soften, Result};
use crate::import::{fan_out, ImportState};
use crate::project::{AssetLinker, ProjectAssembler, ProjectDocument};
use crate::sketch::{SketchDescriptor, SketchResolver};
use crate::store::{NewServiceUser, ProjectStore, ServiceUser};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;

/// 実行結果の集計
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub categories: usize,
    pub sketches: usize,
    /// スクリプトが見つからず読み飛ばしたスケッチ
    pub skipped: usize,
    /// 削除した旧プロジェクト
    pub purged: usize,
    pub projects: usize,
    pub assets: usize,
}

/// インポートオーケストレーター
pub struct ImportOrchestrator {
    catalog: Arc<dyn CatalogSource>,
    store: Arc<dyn ProjectStore>,
    account: ServiceAccount,
    location: CatalogLocation,
    state: ImportState,
    show_progress: bool,
}

impl ImportOrchestrator {
    pub fn new(
        catalog: Arc<dyn CatalogSource>,
        store: Arc<dyn ProjectStore>,
        account: ServiceAccount,
        location: CatalogLocation,
    ) -> Self {
        Self {
            catalog,
            store,
            account,
            location,
            state: ImportState::Init,
            show_progress: false,
        }
    }

    /// 逐次ステージでプログレスバーを表示する
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn state(&self) -> ImportState {
        self.state
    }

    /// 全ステージを実行する
    ///
    /// 失敗時は `Failed` に遷移してエラーを返す。それまでに削除・作成した
    /// プロジェクトは元に戻さない。
    pub async fn run(&mut self) -> Result<RunReport> {
        match self.run_stages().await {
            Ok(report) => {
                self.transition(ImportState::Done);
                Ok(report)
            }
            Err(err) => {
                tracing::error!(
                    state = %self.state,
                    "import failed, store may hold a partial project set: {err}"
                );
                self.transition(ImportState::Failed);
                Err(err)
            }
        }
    }

    async fn run_stages(&mut self) -> Result<RunReport> {
        let mut report = RunReport::default();

        let user = self.ensure_user().await?;
        self.transition(ImportState::UserReady);

        report.purged = self.purge(&user).await?;
        self.transition(ImportState::Purged);

        let resolver = SketchResolver::new(self.catalog.clone(), &self.location.catalog_url);
        let categories = resolver.list_categories().await?;
        report.categories = categories.len();
        self.transition(ImportState::CategoriesListed);

        let per_category = fan_out(categories, |category| {
            let resolver = resolver.clone();
            async move { resolver.resolve_sketches(&category).await }
        })
        .await?;
        let mut sketches: Vec<SketchDescriptor> = per_category.into_iter().flatten().collect();
        report.sketches = sketches.len();
        self.transition(ImportState::SketchesResolved);

        self.resolve_scripts(&resolver, &mut sketches).await?;
        let (resolved, skipped): (Vec<_>, Vec<_>) = sketches
            .into_iter()
            .partition(|sketch| sketch.download_url.is_some());
        report.skipped = skipped.len();
        self.transition(ImportState::UrlsResolved);

        let fetcher = ContentFetcher::new(self.catalog.clone(), &self.location.runtime_script_url);
        let fetched = fan_out(resolved, |mut sketch| {
            let fetcher = fetcher.clone();
            async move {
                fetcher.fetch(&mut sketch).await?;
                Ok(sketch)
            }
        })
        .await?;
        self.transition(ImportState::ContentFetched);

        let listing: Arc<[DirectoryEntry]> = self
            .catalog
            .list_directory(&self.location.assets_url)
            .await?
            .into();
        let linker = AssetLinker::new(self.catalog.clone(), listing, &self.location.asset_host);
        let assembler = ProjectAssembler::new(&user.id);

        let assembled = fan_out(fetched, |sketch| {
            let linker = linker.clone();
            let assembler = assembler.clone();
            async move {
                let content = sketch.content.unwrap_or_default();
                let (mut document, mut handles) =
                    assembler.assemble(&sketch.project_name, &content);
                let assets = linker.link(&mut document, &mut handles, &content).await?;
                Ok((document, assets))
            }
        })
        .await?;
        report.assets = assembled.iter().map(|(_, assets)| assets).sum();
        self.transition(ImportState::ProjectsAssembled);

        let documents: Vec<ProjectDocument> =
            assembled.into_iter().map(|(document, _)| document).collect();
        let store = self.store.clone();
        let persisted = fan_out(documents, |document| {
            let store = store.clone();
            async move {
                store.create_project(&document).await?;
                tracing::info!("Created a new project in {}: {}", document.owner_user_id, document.name);
                Ok(())
            }
        })
        .await?;
        report.projects = persisted.len();
        self.transition(ImportState::Persisted);

        Ok(report)
    }

    /// サービスユーザーを探し、無ければ作る
    async fn ensure_user(&self) -> Result<ServiceUser> {
        if let Some(user) = self
            .store
            .find_user_by_username(&self.account.username)
            .await?
        {
            return Ok(user);
        }

        let user = self
            .store
            .create_user(&NewServiceUser {
                username: self.account.username.clone(),
                email: self.account.email.clone(),
                credential_ref: self.account.credential_ref.clone(),
            })
            .await?;
        tracing::info!(username = %user.username, "created service user");
        Ok(user)
    }

    /// サービスユーザーの旧プロジェクトをすべて削除する
    async fn purge(&self, user: &ServiceUser) -> Result<usize> {
        let projects = self.store.find_projects_by_owner(&user.id).await?;
        tracing::info!(count = projects.len(), "deleting old projects");

        for project in &projects {
            self.store.delete_project(&project.id).await?;
        }
        Ok(projects.len())
    }

    /// スクリプトURLを一覧の順に1件ずつ解決する（並列化しない）
    async fn resolve_scripts(
        &self,
        resolver: &SketchResolver,
        sketches: &mut [SketchDescriptor],
    ) -> Result<()> {
        let pb = if self.show_progress {
            let pb = ProgressBar::new(sketches.len() as u64);
            pb.set_style(
                ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
            );
            pb
        } else {
            ProgressBar::hidden()
        };

        for sketch in sketches.iter_mut() {
            pb.set_message(sketch.project_name.clone());
            sketch.download_url = soften(resolver.find_script(sketch).await)?;
            if sketch.download_url.is_none() {
                tracing::warn!(
                    category = %sketch.category_name,
                    project = %sketch.project_name,
                    "no script found, sketch skipped"
                );
            }
            pb.inc(1);
        }

        pb.finish_and_clear();
        Ok(())
    }

    fn transition(&mut self, next: ImportState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "invalid transition {} -> {}",
            self.state,
            next
        );
        tracing::info!(from = %self.state, to = %next, "import state");
        self.state = next;
    }
}

#[cfg(test)]
#[path = "orchestrator_test.rs"]
mod tests;
