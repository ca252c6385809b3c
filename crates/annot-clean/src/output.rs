//! Output conventions shared by the cleaners.

use std::path::{Path, PathBuf};

/// Where a cleaner wrote and how much survived.
#[derive(Debug, Clone)]
pub struct CleanOutcome {
    pub output: PathBuf,
    pub lines_read: usize,
    pub records: usize,
}

/// `<stem><suffix>`, beside the input unless an output directory is given.
pub fn suffixed_path(input: &Path, out_dir: Option<&Path>, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("output");
    let file_name = format!("{stem}{suffix}");
    match out_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}

/// One record per line. An empty record set renders as an empty file.
pub fn render_lines(records: &[String]) -> String {
    if records.is_empty() {
        return String::new();
    }
    let mut text = records.join("\n");
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lands_beside_input() {
        let path = suffixed_path(Path::new("/data/run1.txt"), None, "_cleaned.txt");
        assert_eq!(path, PathBuf::from("/data/run1_cleaned.txt"));
    }

    #[test]
    fn out_dir_overrides_directory_only() {
        let path = suffixed_path(
            Path::new("/data/run1.txt"),
            Some(Path::new("/out")),
            "_cleaned.txt",
        );
        assert_eq!(path, PathBuf::from("/out/run1_cleaned.txt"));
    }

    #[test]
    fn rendered_lines_end_with_newline() {
        assert_eq!(render_lines(&[]), "");
        assert_eq!(
            render_lines(&["a\tb".to_string(), "c\td".to_string()]),
            "a\tb\nc\td\n"
        );
    }
}
