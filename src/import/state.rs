/// インポート実行の状態
///
/// `Init` から順に進み `Done` で終わる。どの状態からでも `Failed` に遷移でき、
/// `Failed` からの再開はない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportState {
    Init,
    UserReady,
    Purged,
    CategoriesListed,
    SketchesResolved,
    UrlsResolved,
    ContentFetched,
    ProjectsAssembled,
    Persisted,
    Done,
    Failed,
}

impl ImportState {
    /// 正常系の次の状態
    pub fn next(&self) -> Option<Self> {
        use ImportState::*;
        match self {
            Init => Some(UserReady),
            UserReady => Some(Purged),
            Purged => Some(CategoriesListed),
            CategoriesListed => Some(SketchesResolved),
            SketchesResolved => Some(UrlsResolved),
            UrlsResolved => Some(ContentFetched),
            ContentFetched => Some(ProjectsAssembled),
            ProjectsAssembled => Some(Persisted),
            Persisted => Some(Done),
            Done | Failed => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ImportState::Done | ImportState::Failed)
    }

    /// 遷移できるかどうか
    pub fn can_transition_to(&self, target: ImportState) -> bool {
        if self.is_terminal() {
            return false;
        }
        target == ImportState::Failed || self.next() == Some(target)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImportState::Init => "init",
            ImportState::UserReady => "user-ready",
            ImportState::Purged => "purged",
            ImportState::CategoriesListed => "categories-listed",
            ImportState::SketchesResolved => "sketches-resolved",
            ImportState::UrlsResolved => "urls-resolved",
            ImportState::ContentFetched => "content-fetched",
            ImportState::ProjectsAssembled => "projects-assembled",
            ImportState::Persisted => "persisted",
            ImportState::Done => "done",
            ImportState::Failed => "failed",
        }
    }
}

impl std::fmt::Display for ImportState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
