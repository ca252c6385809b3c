//! Shared file access for the line-oriented utilities.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use annot_model::{AnnotError, Result};

/// Open an input file, mapping a missing path to [`AnnotError::FileNotFound`].
fn open_input(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AnnotError::file_not_found(path)
        } else {
            AnnotError::Io(e)
        }
    })
}

/// Read an input file as UTF-8 lines, line endings stripped.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let reader = BufReader::new(open_input(path)?);
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line?);
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        let err = read_lines(&path).unwrap_err();
        assert!(matches!(err, AnnotError::FileNotFound { .. }));
    }

    #[test]
    fn reads_lines_without_endings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "first\nsecond\r\n\nlast").unwrap();
        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, vec!["first", "second", "", "last"]);
    }
}
