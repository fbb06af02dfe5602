//! Output writing
//!
//! Results go to standard output by default, or to a file when `-o` was
//! given. Parent directories of the output file are created on demand.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Context;

/// Write `contents` to `path`, or to standard output when `path` is None.
///
/// The newline is only appended on the standard output branch; files get
/// the contents verbatim.
pub fn write_output(contents: &str, path: Option<&Path>, newline: bool) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("failed to create '{}'", parent.display()))?;
                }
            }
            fs::write(path, contents)
                .with_context(|| format!("failed to write to '{}'", path.display()))
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
            if newline {
                stdout.write_all(b"\n")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/out.json");
        write_output("{}", Some(&path), true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_file_contents_are_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.ttl");
        write_output("@prefix skos: <x> .", Some(&path), true).unwrap();
        // No trailing newline even when requested for the stream case.
        assert_eq!(fs::read_to_string(&path).unwrap(), "@prefix skos: <x> .");
    }
}
