//! インポート処理モジュール
//!
//! カタログの探索からプロジェクトの保存までを段階ごとに実行する。

mod batch;
mod orchestrator;
mod state;

pub use batch::fan_out;
pub use orchestrator::{ImportOrchestrator, RunReport};
pub use state::ImportState;
