use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "skia-seed")]
#[command(about = "Import the p5skia example sketches into the editor's project store", long_about = None)]
pub struct Cli {
    /// SQLiteデータベースのパス（SKIA_SEED_DB_PATH より優先）
    #[arg(long, value_name = "PATH")]
    pub db_path: Option<PathBuf>,

    /// ログレベル（SKIA_SEED_LOG_LEVEL より優先）
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// プログレスバーを表示しない
    #[arg(long)]
    pub quiet: bool,
}
