use crate::config::Settings;
use crate::report::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "synchro-cosmetics")]
#[command(about = "Profile a survey audience and recommend matching cosmetic products")]
pub struct Cli {
    /// Configuration file (defaults to config/default and config/local)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Audience survey CSV
    #[arg(short, long)]
    pub audience: Option<PathBuf>,
    /// Product catalog CSV
    #[arg(short = 'p', long)]
    pub catalog: Option<PathBuf>,
    /// Number of recommendations to list
    #[arg(short = 'n', long)]
    pub top_n: Option<usize>,
    /// Persist the rendered report
    #[arg(short, long)]
    pub save: bool,
    /// Where to persist the report
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl Cli {
    /// Command-line flags win over loaded settings
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(path) = &self.audience {
            settings.data.audience_path = path.display().to_string();
        }
        if let Some(path) = &self.catalog {
            settings.data.catalog_path = path.display().to_string();
        }
        if let Some(top_n) = self.top_n {
            settings.report.top_n = top_n;
        }
        if self.save {
            settings.report.save_to_file = true;
        }
        if let Some(path) = &self.output {
            settings.report.output_path = path.display().to_string();
        }
        if let Some(format) = self.format {
            settings.report.format = format;
        }
    }
}
