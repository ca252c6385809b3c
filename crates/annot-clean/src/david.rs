//! DAVID functional-enrichment chart cleaner.
//!
//! The chart export is tab-separated and its column names drift between
//! service versions; required columns are resolved by their accepted
//! spellings, everything else is carried past.

use std::path::{Path, PathBuf};

use annot_ingest::{ColumnSpec, Delimiter, read_table, require_column, write_table};
use annot_model::Result;
use tracing::{debug, trace};

use crate::output::suffixed_path;

/// Suffix for the all-kept-rows CSV.
pub const OVERVIEW_SUFFIX: &str = "_cleaned_overview.csv";
/// Suffix for the significant-rows CSV.
pub const SIGNIFICANT_SUFFIX: &str = "_cleaned_significant.csv";
/// Suffix for the per-term gene lists.
pub const GENES_SUFFIX: &str = "_genes_cleaned.txt";

/// FDR at or below which a row counts as significant.
pub const SIGNIFICANCE_CUTOFF: f64 = 0.05;

const TERM: ColumnSpec = ColumnSpec::new("Term", &["Term"]);
const COUNT: ColumnSpec = ColumnSpec::new("Count", &["Count"]);
const PVALUE: ColumnSpec = ColumnSpec::new("PValue", &["PValue", "P-Value", "p-value"]);
const FDR: ColumnSpec = ColumnSpec::new("FDR", &["FDR", "Benjamini"]);
const GENES: ColumnSpec = ColumnSpec::new("Genes", &["Genes"]);

/// Indices of the required chart columns.
#[derive(Debug, Clone, Copy)]
pub struct DavidColumns {
    pub term: usize,
    pub count: usize,
    pub pvalue: usize,
    pub fdr: usize,
    pub genes: usize,
}

/// Resolve the required columns, aborting with a format error naming the
/// first missing one.
pub fn resolve_columns(path: &Path, headers: &[String]) -> Result<DavidColumns> {
    Ok(DavidColumns {
        term: require_column(path, headers, &TERM)?,
        count: require_column(path, headers, &COUNT)?,
        pvalue: require_column(path, headers, &PVALUE)?,
        fdr: require_column(path, headers, &FDR)?,
        genes: require_column(path, headers, &GENES)?,
    })
}

/// One kept chart row.
#[derive(Debug, Clone, PartialEq)]
pub struct DavidRow {
    pub term: String,
    pub count: String,
    pub pvalue: f64,
    pub fdr: f64,
    pub genes: Vec<String>,
}

impl DavidRow {
    pub fn is_significant(&self) -> bool {
        self.fdr <= SIGNIFICANCE_CUTOFF
    }
}

/// Truncate a term at the first `~`, keeping the accession prefix.
pub fn strip_term(raw: &str) -> String {
    match raw.find('~') {
        Some(position) => raw[..position].trim().to_string(),
        None => raw.trim().to_string(),
    }
}

/// Apply the row rules: rows too short for a required column are
/// skipped, as are rows whose `PValue` or `FDR` fail to parse as floats.
/// `Count` is carried as text.
pub fn clean_rows(columns: &DavidColumns, rows: &[Vec<String>]) -> Vec<DavidRow> {
    let mut kept = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let fields = (
            row.get(columns.term),
            row.get(columns.count),
            row.get(columns.pvalue),
            row.get(columns.fdr),
            row.get(columns.genes),
        );
        let (Some(term), Some(count), Some(pvalue), Some(fdr), Some(genes)) = fields else {
            trace!(row = index, "skipped row missing required columns");
            continue;
        };
        let (Ok(pvalue), Ok(fdr)) = (pvalue.parse::<f64>(), fdr.parse::<f64>()) else {
            trace!(row = index, "skipped row with non-numeric statistics");
            continue;
        };
        kept.push(DavidRow {
            term: strip_term(term),
            count: count.clone(),
            pvalue,
            fdr,
            genes: split_genes(genes),
        });
    }
    kept
}

fn split_genes(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|gene| !gene.is_empty())
        .map(String::from)
        .collect()
}

/// Gene blocks for the significant rows: the term line, one gene per
/// line, then a blank line.
pub fn render_gene_blocks(rows: &[DavidRow]) -> String {
    let mut text = String::new();
    for row in rows.iter().filter(|row| row.is_significant()) {
        text.push_str(&row.term);
        text.push('\n');
        for gene in &row.genes {
            text.push_str(gene);
            text.push('\n');
        }
        text.push('\n');
    }
    text
}

fn csv_row(row: &DavidRow) -> Vec<String> {
    vec![
        row.term.clone(),
        row.count.clone(),
        row.pvalue.to_string(),
        row.fdr.to_string(),
    ]
}

/// Everything one DAVID cleaning run produced.
#[derive(Debug, Clone)]
pub struct DavidOutcome {
    pub overview: PathBuf,
    pub significant: PathBuf,
    pub genes: PathBuf,
    pub rows_read: usize,
    pub rows_kept: usize,
    pub significant_rows: usize,
}

/// Clean one DAVID chart export into the overview CSV, the
/// significant-rows CSV, and the gene lists for the significant rows.
pub fn clean_david_file(input: &Path, out_dir: Option<&Path>) -> Result<DavidOutcome> {
    let table = read_table(input, Delimiter::Tab)?;
    let columns = resolve_columns(input, &table.headers)?;
    let rows = clean_rows(&columns, &table.rows);

    let headers: Vec<String> = ["Term", "Count", "PValue", "FDR"]
        .iter()
        .map(|header| (*header).to_string())
        .collect();
    let overview_rows: Vec<Vec<String>> = rows.iter().map(csv_row).collect();
    let significant_rows: Vec<Vec<String>> = rows
        .iter()
        .filter(|row| row.is_significant())
        .map(csv_row)
        .collect();

    let overview = suffixed_path(input, out_dir, OVERVIEW_SUFFIX);
    let significant = suffixed_path(input, out_dir, SIGNIFICANT_SUFFIX);
    let genes = suffixed_path(input, out_dir, GENES_SUFFIX);
    write_table(&overview, Delimiter::Comma, &headers, &overview_rows)?;
    write_table(&significant, Delimiter::Comma, &headers, &significant_rows)?;
    std::fs::write(&genes, render_gene_blocks(&rows))?;
    debug!(
        path = %input.display(),
        rows = table.rows.len(),
        kept = rows.len(),
        significant = significant_rows.len(),
        "cleaned DAVID chart"
    );
    Ok(DavidOutcome {
        overview,
        significant,
        genes,
        rows_read: table.rows.len(),
        rows_kept: rows.len(),
        significant_rows: significant_rows.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use annot_model::AnnotError;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|cell| (*cell).to_string()).collect()
    }

    const CHART: &[&str] = &["Category", "Term", "Count", "p-value", "Benjamini", "Genes"];

    #[test]
    fn strips_term_at_first_tilde() {
        assert_eq!(strip_term("GO:0006810~transport"), "GO:0006810");
        assert_eq!(strip_term("GO:1~a~b"), "GO:1");
        assert_eq!(strip_term("KEGG_PATHWAY"), "KEGG_PATHWAY");
        assert_eq!(strip_term("  spaced ~tail"), "spaced");
        assert_eq!(strip_term("~all tail"), "");
    }

    #[test]
    fn resolves_alternate_spellings() {
        let columns = resolve_columns(Path::new("chart.tsv"), &headers(CHART)).unwrap();
        assert_eq!(columns.term, 1);
        assert_eq!(columns.pvalue, 3);
        assert_eq!(columns.fdr, 4);
    }

    #[test]
    fn missing_required_column_aborts() {
        let err = resolve_columns(
            Path::new("chart.tsv"),
            &headers(&["Term", "Count", "PValue", "FDR"]),
        )
        .unwrap_err();
        assert!(matches!(err, AnnotError::Format { .. }));
        assert!(format!("{err}").contains("Genes"));
    }

    #[test]
    fn short_and_non_numeric_rows_are_skipped() {
        let columns = resolve_columns(Path::new("chart.tsv"), &headers(CHART)).unwrap();
        let rows = vec![
            row(&["GO", "GO:1~t", "4"]),
            row(&["GO", "GO:2~t", "4", "oops", "0.01", "A, B"]),
            row(&["GO", "GO:3~t", "4", "0.001", "0.01", "A, B"]),
        ];
        let kept = clean_rows(&columns, &rows);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].term, "GO:3");
        assert_eq!(kept[0].count, "4");
        assert_eq!(kept[0].genes, vec!["A", "B"]);
    }

    #[test]
    fn gene_cells_drop_empty_entries() {
        let columns = resolve_columns(Path::new("chart.tsv"), &headers(CHART)).unwrap();
        let rows = vec![row(&["GO", "GO:1~t", "2", "0.1", "0.2", "A, , B,"])];
        let kept = clean_rows(&columns, &rows);
        assert_eq!(kept[0].genes, vec!["A", "B"]);
    }

    #[test]
    fn significance_cut_is_inclusive() {
        let significant = DavidRow {
            term: "GO:1".to_string(),
            count: "2".to_string(),
            pvalue: 0.001,
            fdr: 0.05,
            genes: vec![],
        };
        assert!(significant.is_significant());
        let borderline = DavidRow {
            fdr: 0.0501,
            ..significant.clone()
        };
        assert!(!borderline.is_significant());
    }

    #[test]
    fn gene_blocks_cover_significant_rows_only() {
        let rows = vec![
            DavidRow {
                term: "GO:1".to_string(),
                count: "2".to_string(),
                pvalue: 0.001,
                fdr: 0.01,
                genes: vec!["A".to_string(), "B".to_string()],
            },
            DavidRow {
                term: "GO:2".to_string(),
                count: "3".to_string(),
                pvalue: 0.2,
                fdr: 0.9,
                genes: vec!["C".to_string()],
            },
        ];
        assert_eq!(render_gene_blocks(&rows), "GO:1\nA\nB\n\n");
    }
}
