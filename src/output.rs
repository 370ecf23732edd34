use crate::import::RunReport;
use owo_colors::OwoColorize;

pub struct RunSummary {
    pub prefix: String,
    pub message: String,
}

impl RunSummary {
    pub fn format(report: &RunReport) -> Self {
        match report {
            r if r.projects > 0 => Self {
                prefix: "✓".green().to_string(),
                message: format!(
                    "{} project(s) imported from {} categories ({} asset(s), {} skipped, {} replaced)",
                    r.projects.green(),
                    r.categories,
                    r.assets,
                    r.skipped.yellow(),
                    r.purged
                ),
            },
            r => Self {
                prefix: "•".yellow().to_string(),
                message: format!("No example projects imported ({} replaced)", r.purged),
            },
        }
    }

    pub fn failure(message: &str) -> Self {
        Self {
            prefix: "✗".red().to_string(),
            message: message.to_string(),
        }
    }
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.prefix, self.message)
    }
}
