use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::PipelineError;

use super::model::NumberList;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load every numeric value from a plain-text file.
///
/// Failing to open or read the file is [`PipelineError::SourceUnavailable`].
/// Malformed content never is: see [`parse_numbers`].
pub fn load_file(path: &Path) -> Result<NumberList, PipelineError> {
    let unavailable = |source: io::Error| PipelineError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unavailable)?;
    let numbers = parse_numbers(BufReader::new(file)).map_err(unavailable)?;

    log::info!(
        "Read {} values from {} ({} lines skipped)",
        numbers.len(),
        path.display(),
        numbers.skipped_lines
    );
    Ok(numbers)
}

// ---------------------------------------------------------------------------
// Text scanner
// ---------------------------------------------------------------------------

/// Scan whitespace-separated numeric tokens line by line.
///
/// Tokens on a line are accepted in order until the first one that is not a
/// finite number; that token and the rest of its line are dropped and
/// scanning resumes on the next line. Bytes that are not valid UTF-8 are
/// replaced, which makes the containing token non-numeric.
///
/// Only genuine read failures are returned as errors.
pub fn parse_numbers<R: BufRead>(mut reader: R) -> io::Result<NumberList> {
    let mut numbers = NumberList::default();
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let line = String::from_utf8_lossy(&buf);
        for token in line.split_whitespace() {
            match parse_token(token) {
                Some(value) => numbers.values.push(value),
                None => {
                    log::debug!("Skipping line {line_no}: '{token}' is not a number");
                    numbers.skipped_lines += 1;
                    break;
                }
            }
        }
    }

    Ok(numbers)
}

/// A token counts only if it is a finite floating-point number, so `inf` and
/// `NaN` are malformed like any other word.
fn parse_token(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}
