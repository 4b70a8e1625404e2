use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every failure the pipeline surfaces to its caller.
///
/// Malformed input lines and end of input are not represented here: the
/// loader swallows the former and treats the latter as normal termination.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The input collaborator returned nothing (e.g. the dialog was cancelled).
    #[error("no input file was selected")]
    NoInputSelected,

    #[error("failed to read input file {}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output collaborator returned an empty name.
    #[error("no output file name was given")]
    NoOutputName,

    /// The chosen name would place the output outside the input's directory.
    #[error("output file name '{name}' must be a plain file name")]
    InvalidOutputName { name: String },

    /// Only raised under [`ExistingPolicy::Refuse`](crate::data::writer::ExistingPolicy).
    #[error("output file {} already exists", path.display())]
    OutputExists { path: PathBuf },

    #[error("output file {} cannot be created", path.display())]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output to {}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PipelineError {
    /// Process exit code for this failure kind; `0` is reserved for success.
    pub fn exit_code(&self) -> i32 {
        match self {
            PipelineError::NoInputSelected => 2,
            PipelineError::SourceUnavailable { .. } => 3,
            PipelineError::NoOutputName => 4,
            PipelineError::OutputExists { .. } => 5,
            PipelineError::OutputCreate { .. } => 6,
            PipelineError::OutputWrite { .. } => 7,
            PipelineError::InvalidOutputName { .. } => 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let errors = [
            PipelineError::NoInputSelected,
            PipelineError::SourceUnavailable {
                path: PathBuf::from("a"),
                source: io::Error::from(io::ErrorKind::NotFound),
            },
            PipelineError::NoOutputName,
            PipelineError::InvalidOutputName { name: "../x".into() },
            PipelineError::OutputExists { path: PathBuf::from("b") },
            PipelineError::OutputCreate {
                path: PathBuf::from("c"),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            },
            PipelineError::OutputWrite {
                path: PathBuf::from("d"),
                source: io::Error::from(io::ErrorKind::Other),
            },
        ];
        let mut codes: Vec<i32> = errors.iter().map(PipelineError::exit_code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
        assert!(!codes.contains(&0));
    }
}
