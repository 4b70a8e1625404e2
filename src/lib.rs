//! Finds the natural perfect squares in a text file of numbers and writes
//! them, one per line, to a new file beside the input.

pub mod cli;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod select;

pub use error::PipelineError;
pub use pipeline::{process_file, run, RunOptions, RunReport};
