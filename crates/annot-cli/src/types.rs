use std::path::PathBuf;

use serde::Serialize;

/// Accounting for one input file within a run.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub input: PathBuf,
    pub outputs: Vec<PathBuf>,
    pub rows_read: usize,
    pub rows_kept: usize,
    pub error: Option<String>,
}

impl FileReport {
    pub fn failed(input: impl Into<PathBuf>, error: impl Into<String>) -> Self {
        FileReport {
            input: input.into(),
            outputs: Vec::new(),
            rows_read: 0,
            rows_kept: 0,
            error: Some(error.into()),
        }
    }
}

/// Everything one command run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub command: String,
    /// Run-level outputs not tied to a single input (comparison reports).
    pub outputs: Vec<PathBuf>,
    pub files: Vec<FileReport>,
}

impl RunReport {
    pub fn new(command: impl Into<String>) -> Self {
        RunReport {
            command: command.into(),
            outputs: Vec::new(),
            files: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.files.iter().any(|file| file.error.is_some())
    }

    pub fn errors(&self) -> Vec<String> {
        self.files
            .iter()
            .filter_map(|file| {
                file.error
                    .as_ref()
                    .map(|error| format!("{}: {error}", file.input.display()))
            })
            .collect()
    }

    pub fn rows_read(&self) -> usize {
        self.files.iter().map(|file| file.rows_read).sum()
    }

    pub fn rows_kept(&self) -> usize {
        self.files.iter().map(|file| file.rows_kept).sum()
    }

    /// Flatten into the `--summary-json` payload.
    pub fn to_summary(&self) -> RunSummary {
        let mut outputs = self.outputs.clone();
        for file in &self.files {
            outputs.extend(file.outputs.iter().cloned());
        }
        RunSummary {
            command: self.command.clone(),
            inputs: self.files.iter().map(|file| file.input.clone()).collect(),
            outputs,
            rows_read: self.rows_read(),
            rows_kept: self.rows_kept(),
            errors: self.errors(),
        }
    }
}

/// Machine-readable run summary written by `--summary-json`.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub command: String,
    pub inputs: Vec<PathBuf>,
    pub outputs: Vec<PathBuf>,
    pub rows_read: usize,
    pub rows_kept: usize,
    pub errors: Vec<String>,
}
