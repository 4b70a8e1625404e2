use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::data::filter::natural_squares;
use crate::data::loader::load_file;
use crate::data::model::SquareResult;
use crate::data::writer::{output_path, write_squares, CreateStatus, ExistingPolicy};
use crate::error::PipelineError;
use crate::select::{InputSelector, OutputNamer};

// ---------------------------------------------------------------------------
// Run options and report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Appended to the chosen base name, without the dot.
    pub extension: String,
    pub on_existing: ExistingPolicy,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            extension: "txt".to_string(),
            on_existing: ExistingPolicy::default(),
        }
    }
}

/// Summary of one successful invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub values_read: usize,
    pub lines_skipped: usize,
    pub squares: Vec<SquareResult>,
    pub create_status: CreateStatus,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Input:   {}", self.input.display())?;
        writeln!(
            f,
            "Read {} values ({} lines skipped)",
            self.values_read, self.lines_skipped
        )?;
        match self.create_status {
            CreateStatus::Created => writeln!(f, "Output file has been created successfully")?,
            CreateStatus::AlreadyExisted => {
                writeln!(f, "Output file already present at the specified location")?
            }
        }
        write!(
            f,
            "Wrote {} natural squares to {}",
            self.squares.len(),
            self.output.display()
        )
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Resolve the input, parse it fully, classify, then resolve the output name
/// and write.
pub fn run(
    selector: &mut dyn InputSelector,
    namer: &mut dyn OutputNamer,
    options: &RunOptions,
) -> Result<RunReport, PipelineError> {
    let input = selector
        .select_input()
        .ok_or(PipelineError::NoInputSelected)?;
    log::info!("Selected input {}", input.display());

    let numbers = load_file(&input)?;
    let squares = natural_squares(&numbers);

    let name = namer.output_name().ok_or(PipelineError::NoOutputName)?;
    let output = output_path(&input, &name, &options.extension)?;
    let outcome = write_squares(&output, &squares, options.on_existing)?;

    Ok(RunReport {
        input,
        output: outcome.path,
        values_read: numbers.len(),
        lines_skipped: numbers.skipped_lines,
        squares,
        create_status: outcome.status,
    })
}

/// Run with both locations already resolved.
pub fn process_file(
    input: &Path,
    output: &Path,
    on_existing: ExistingPolicy,
) -> Result<RunReport, PipelineError> {
    let numbers = load_file(input)?;
    let squares = natural_squares(&numbers);
    let outcome = write_squares(output, &squares, on_existing)?;

    Ok(RunReport {
        input: input.to_path_buf(),
        output: outcome.path,
        values_read: numbers.len(),
        lines_skipped: numbers.skipped_lines,
        squares,
        create_status: outcome.status,
    })
}
