use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::data::writer::ExistingPolicy;
use crate::pipeline::RunOptions;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// RunReport serialised as JSON
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OnExisting {
    /// Report the conflict, then replace the file
    #[default]
    Overwrite,
    /// Report the conflict and write nothing
    Refuse,
}

impl From<OnExisting> for ExistingPolicy {
    fn from(value: OnExisting) -> Self {
        match value {
            OnExisting::Overwrite => ExistingPolicy::Overwrite,
            OnExisting::Refuse => ExistingPolicy::Refuse,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "natural-squares")]
#[command(about = "Writes the natural perfect squares found in a file of numbers", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Input file (opens a file dialog when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file base name, created next to the input (prompts when omitted)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Extension appended to the output base name
    #[arg(long, default_value = "txt")]
    pub extension: String,

    /// Behaviour when the output file already exists
    #[arg(long, value_enum, default_value_t = OnExisting::Overwrite)]
    pub on_existing: OnExisting,

    /// Summary format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub report: ReportFormat,
}

impl Cli {
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            extension: self.extension.clone(),
            on_existing: self.on_existing.into(),
        }
    }
}
