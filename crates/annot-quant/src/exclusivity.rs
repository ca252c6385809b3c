//! Shared and exclusive protein sets across quantification tables.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use annot_ingest::{Delimiter, read_table, require_column, write_table};
use annot_model::{AnnotError, Result};
use tracing::debug;

use crate::summary::PROTEIN_COLUMN;

/// Default output name, placed in the first input's directory.
pub const DEFAULT_OUTPUT_NAME: &str = "protein_exclusivity.csv";

/// One input table reduced to its identifier set.
#[derive(Debug, Clone)]
pub struct SourceSet {
    pub name: String,
    pub proteins: BTreeSet<String>,
}

impl SourceSet {
    pub fn new(name: impl Into<String>, proteins: BTreeSet<String>) -> Self {
        SourceSet {
            name: name.into(),
            proteins,
        }
    }

    /// Load a source from a table file, named by the file stem. Empty
    /// identifier cells do not contribute.
    pub fn from_file(path: &Path, delimiter: Delimiter) -> Result<Self> {
        let table = read_table(path, delimiter)?;
        let column = require_column(path, &table.headers, &PROTEIN_COLUMN)?;
        let proteins = table
            .rows
            .iter()
            .filter_map(|row| row.get(column))
            .filter(|cell| !cell.is_empty())
            .cloned()
            .collect();
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("source")
            .to_string();
        Ok(SourceSet::new(name, proteins))
    }
}

/// Shared set plus the per-source unique sets, in input order.
#[derive(Debug, Clone)]
pub struct ExclusivityTable {
    pub shared: BTreeSet<String>,
    pub uniques: Vec<(String, BTreeSet<String>)>,
}

/// Compute shared = the intersection of all N sets and, per source,
/// unique = that source's set minus the union of every other set.
pub fn exclusivity(sources: &[SourceSet]) -> Result<ExclusivityTable> {
    if sources.len() < 2 {
        return Err(AnnotError::empty_input_set(2, sources.len()));
    }
    let mut shared = sources[0].proteins.clone();
    for source in &sources[1..] {
        shared = shared.intersection(&source.proteins).cloned().collect();
    }
    let mut uniques = Vec::with_capacity(sources.len());
    for (index, source) in sources.iter().enumerate() {
        let others: BTreeSet<&str> = sources
            .iter()
            .enumerate()
            .filter(|(other, _)| *other != index)
            .flat_map(|(_, other)| other.proteins.iter().map(String::as_str))
            .collect();
        let unique: BTreeSet<String> = source
            .proteins
            .iter()
            .filter(|protein| !others.contains(protein.as_str()))
            .cloned()
            .collect();
        uniques.push((source.name.clone(), unique));
    }
    Ok(ExclusivityTable { shared, uniques })
}

/// Lay the sets out as CSV columns: `Shared` first, then one column per
/// source. Values are the sorted members; rows are padded with empty
/// cells to the longest column.
pub fn render_columns(table: &ExclusivityTable) -> (Vec<String>, Vec<Vec<String>>) {
    let mut headers = Vec::with_capacity(table.uniques.len() + 1);
    let mut columns: Vec<Vec<String>> = Vec::with_capacity(table.uniques.len() + 1);
    headers.push("Shared".to_string());
    columns.push(table.shared.iter().cloned().collect());
    for (name, unique) in &table.uniques {
        headers.push(name.clone());
        columns.push(unique.iter().cloned().collect());
    }
    let depth = columns.iter().map(Vec::len).max().unwrap_or(0);
    let rows = (0..depth)
        .map(|row| {
            columns
                .iter()
                .map(|column| column.get(row).cloned().unwrap_or_default())
                .collect()
        })
        .collect();
    (headers, rows)
}

/// Per-source numbers for one exclusivity run.
#[derive(Debug, Clone)]
pub struct SourceOutcome {
    pub input: PathBuf,
    pub proteins: usize,
    pub unique: usize,
}

/// Outcome of one exclusivity run.
#[derive(Debug, Clone)]
pub struct ExclusivityOutcome {
    pub output: PathBuf,
    pub shared: usize,
    pub sources: Vec<SourceOutcome>,
}

/// Compare N >= 2 tables and write the exclusivity CSV. Every input is
/// read before anything is written, so a bad input aborts with no
/// output file.
pub fn exclusivity_file(
    inputs: &[PathBuf],
    delimiter: Delimiter,
    out: Option<&Path>,
) -> Result<ExclusivityOutcome> {
    if inputs.len() < 2 {
        return Err(AnnotError::empty_input_set(2, inputs.len()));
    }
    let mut sources = Vec::with_capacity(inputs.len());
    for path in inputs {
        sources.push(SourceSet::from_file(path, delimiter)?);
    }
    let table = exclusivity(&sources)?;
    let (headers, rows) = render_columns(&table);
    let output = match out {
        Some(path) => path.to_path_buf(),
        None => inputs[0].with_file_name(DEFAULT_OUTPUT_NAME),
    };
    write_table(&output, Delimiter::Comma, &headers, &rows)?;
    let source_outcomes = inputs
        .iter()
        .zip(&sources)
        .zip(&table.uniques)
        .map(|((input, source), (_, unique))| SourceOutcome {
            input: input.clone(),
            proteins: source.proteins.len(),
            unique: unique.len(),
        })
        .collect();
    debug!(
        output = %output.display(),
        sources = sources.len(),
        shared = table.shared.len(),
        "wrote exclusivity table"
    );
    Ok(ExclusivityOutcome {
        output,
        shared: table.shared.len(),
        sources: source_outcomes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(name: &str, proteins: &[&str]) -> SourceSet {
        SourceSet::new(
            name,
            proteins.iter().map(|protein| (*protein).to_string()).collect(),
        )
    }

    #[test]
    fn shared_is_the_full_intersection() {
        let sources = vec![
            source("a", &["P1", "P2", "P3"]),
            source("b", &["P1", "P3"]),
            source("c", &["P3", "P4"]),
        ];
        let table = exclusivity(&sources).unwrap();
        assert_eq!(
            table.shared.iter().collect::<Vec<_>>(),
            vec![&"P3".to_string()]
        );
    }

    #[test]
    fn unique_excludes_every_other_source() {
        let sources = vec![
            source("a", &["P1", "P2"]),
            source("b", &["P2", "P3"]),
            source("c", &["P3", "P4"]),
        ];
        let table = exclusivity(&sources).unwrap();
        let uniques: Vec<Vec<&str>> = table
            .uniques
            .iter()
            .map(|(_, set)| set.iter().map(String::as_str).collect())
            .collect();
        assert_eq!(uniques, vec![vec!["P1"], Vec::<&str>::new(), vec!["P4"]]);
    }

    #[test]
    fn one_source_is_an_empty_input_set() {
        let err = exclusivity(&[source("a", &["P1"])]).unwrap_err();
        assert!(matches!(err, AnnotError::EmptyInputSet { expected: 2, got: 1 }));
    }

    #[test]
    fn columns_are_padded_to_the_longest() {
        let table = ExclusivityTable {
            shared: ["P9".to_string()].into(),
            uniques: vec![
                ("a".to_string(), ["P1".to_string(), "P2".to_string()].into()),
                ("b".to_string(), BTreeSet::new()),
            ],
        };
        let (headers, rows) = render_columns(&table);
        assert_eq!(headers, vec!["Shared", "a", "b"]);
        assert_eq!(
            rows,
            vec![
                vec!["P9".to_string(), "P1".to_string(), String::new()],
                vec![String::new(), "P2".to_string(), String::new()],
            ]
        );
    }
}
