use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::error::PipelineError;

use super::model::SquareResult;

// ---------------------------------------------------------------------------
// Output location and policy
// ---------------------------------------------------------------------------

/// What to do when the output file is already present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExistingPolicy {
    /// Report the conflict and replace the file's content.
    #[default]
    Overwrite,
    /// Report the conflict as [`PipelineError::OutputExists`] and write nothing.
    Refuse,
}

/// Whether the writer made a fresh file or found one in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CreateStatus {
    Created,
    AlreadyExisted,
}

/// Result of a completed write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteOutcome {
    pub path: PathBuf,
    pub status: CreateStatus,
    pub records: usize,
}

/// `<dir of input>/<base_name>.<extension>`. An empty extension leaves the
/// base name untouched.
///
/// The resulting file name must be a single plain component, so a name that
/// is absolute or contains a separator or `..` cannot leave the input's
/// directory; such names are [`PipelineError::InvalidOutputName`].
pub fn output_path(
    input: &Path,
    base_name: &str,
    extension: &str,
) -> Result<PathBuf, PipelineError> {
    let file_name = if extension.is_empty() {
        base_name.to_string()
    } else {
        format!("{base_name}.{}", extension.trim_start_matches('.'))
    };

    let mut components = Path::new(&file_name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => {}
        _ => return Err(PipelineError::InvalidOutputName { name: file_name }),
    }

    Ok(input
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(file_name))
}

// ---------------------------------------------------------------------------
// Writer
// ---------------------------------------------------------------------------

/// Write one record per square, in order, each followed by `\n`.
///
/// Records flushed before an I/O failure stay on disk.
pub fn write_squares(
    path: &Path,
    squares: &[SquareResult],
    policy: ExistingPolicy,
) -> Result<WriteOutcome, PipelineError> {
    let (file, status) = create_output(path, policy)?;
    match status {
        CreateStatus::Created => log::info!("Output file {} created", path.display()),
        CreateStatus::AlreadyExisted => {
            log::warn!("Output file {} already present, overwriting", path.display())
        }
    }

    write_records(file, squares).map_err(|source| PipelineError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("Wrote {} squares to {}", squares.len(), path.display());
    Ok(WriteOutcome {
        path: path.to_path_buf(),
        status,
        records: squares.len(),
    })
}

fn create_output(
    path: &Path,
    policy: ExistingPolicy,
) -> Result<(File, CreateStatus), PipelineError> {
    let create_err = |source: io::Error| PipelineError::OutputCreate {
        path: path.to_path_buf(),
        source,
    };

    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => Ok((file, CreateStatus::Created)),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => match policy {
            ExistingPolicy::Refuse => Err(PipelineError::OutputExists {
                path: path.to_path_buf(),
            }),
            ExistingPolicy::Overwrite => {
                let file = File::create(path).map_err(create_err)?;
                Ok((file, CreateStatus::AlreadyExisted))
            }
        },
        Err(e) => Err(create_err(e)),
    }
}

fn write_records<W: Write>(sink: W, squares: &[SquareResult]) -> io::Result<()> {
    let mut out = BufWriter::new(sink);
    for square in squares {
        writeln!(out, "{square}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squares(values: &[i64]) -> Vec<SquareResult> {
        values.iter().copied().map(SquareResult).collect()
    }

    #[test]
    fn output_sits_next_to_input() {
        let path = output_path(Path::new("/data/in/numbers.txt"), "result", "txt").unwrap();
        assert_eq!(path, PathBuf::from("/data/in/result.txt"));
        let bare = output_path(Path::new("numbers.txt"), "result", ".csv").unwrap();
        assert_eq!(bare, PathBuf::from("result.csv"));
        let plain = output_path(Path::new("/a/b"), "out", "").unwrap();
        assert_eq!(plain, PathBuf::from("/a/out"));
    }

    #[test]
    fn names_cannot_leave_the_input_directory() {
        let input = Path::new("/data/in/numbers.txt");
        for name in ["/tmp/elsewhere", "../x", "sub/out"] {
            let err = output_path(input, name, "txt").unwrap_err();
            assert!(
                matches!(err, PipelineError::InvalidOutputName { .. }),
                "{name}"
            );
        }
        for name in [".", ".."] {
            let err = output_path(input, name, "").unwrap_err();
            assert!(matches!(err, PipelineError::InvalidOutputName { .. }), "{name}");
        }
        let err = output_path(input, "out", "txt/../../etc").unwrap_err();
        assert!(matches!(err, PipelineError::InvalidOutputName { .. }));
    }

    #[test]
    fn dotted_names_stay_in_place() {
        let input = Path::new("/data/in/numbers.txt");
        let path = output_path(input, "squares.v2", "txt").unwrap();
        assert!(path.starts_with("/data/in"));
        assert_eq!(path, PathBuf::from("/data/in/squares.v2.txt"));
    }

    /// Accepts `limit` bytes, then reports a full device.
    struct FullAfter {
        written: Vec<u8>,
        limit: usize,
    }

    impl Write for FullAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let room = self.limit - self.written.len();
            if room == 0 {
                return Err(io::Error::new(io::ErrorKind::Other, "no space left"));
            }
            let n = buf.len().min(room);
            self.written.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_write_keeps_what_was_already_written() {
        let mut sink = FullAfter {
            written: Vec::new(),
            limit: 5,
        };
        let err = write_records(&mut sink, &squares(&[4, 16, 0])).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert_eq!(sink.written, b"4\n16\n");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn full_device_is_a_write_failure() {
        let err = write_squares(
            Path::new("/dev/full"),
            &squares(&[4]),
            ExistingPolicy::Overwrite,
        )
        .unwrap_err();
        assert!(matches!(err, PipelineError::OutputWrite { .. }));
    }

    #[test]
    fn records_are_newline_terminated() {
        let mut buf = Vec::new();
        write_records(&mut buf, &squares(&[4, 16, 0])).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "4\n16\n0\n");
    }

    #[test]
    fn fresh_file_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let outcome = write_squares(&path, &squares(&[1, 9]), ExistingPolicy::Overwrite).unwrap();
        assert_eq!(outcome.status, CreateStatus::Created);
        assert_eq!(outcome.records, 2);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1\n9\n");
    }

    #[test]
    fn existing_file_is_reported_then_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "stale content that is longer\n").unwrap();

        let outcome = write_squares(&path, &squares(&[25]), ExistingPolicy::Overwrite).unwrap();
        assert_eq!(outcome.status, CreateStatus::AlreadyExisted);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "25\n");
    }

    #[test]
    fn refuse_policy_leaves_existing_file_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "keep\n").unwrap();

        let err = write_squares(&path, &squares(&[25]), ExistingPolicy::Refuse).unwrap_err();
        assert!(matches!(err, PipelineError::OutputExists { .. }));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep\n");
    }

    #[test]
    fn missing_directory_is_a_create_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.txt");
        let err = write_squares(&path, &[], ExistingPolicy::Overwrite).unwrap_err();
        assert!(matches!(err, PipelineError::OutputCreate { .. }));
    }
}
