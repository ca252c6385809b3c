//! File-level tests for the delimited-table reader.

use std::path::PathBuf;

use annot_ingest::{Delimiter, read_raw_rows, read_table};
use annot_model::AnnotError;
use tempfile::TempDir;

fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn reads_header_and_rows_with_normalization() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "quant.csv",
        "\u{feff}Protein  AC,SpC_1,TIC_1\n P0001 ,3,10\nP0002,4,20\n",
    );

    let table = read_table(&path, Delimiter::Comma).unwrap();
    assert_eq!(table.headers, vec!["Protein AC", "SpC_1", "TIC_1"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0][0], "P0001");
}

#[test]
fn short_rows_keep_their_natural_length() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "ragged.csv", "a,b,c\n1,2,3\n1\n");

    let table = read_table(&path, Delimiter::Comma).unwrap();
    assert_eq!(table.rows[0].len(), 3);
    assert_eq!(table.rows[1].len(), 1);
    assert_eq!(table.rows[1].get(2), None);
}

#[test]
fn tab_delimited_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "chart.tsv", "Term\tCount\nGO:1~x\t4\n");

    let rows = read_raw_rows(&path, Delimiter::Tab).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1], vec!["GO:1~x", "4"]);
}

#[test]
fn missing_file_maps_to_file_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.csv");

    let err = read_raw_rows(&path, Delimiter::Comma).unwrap_err();
    assert!(matches!(err, AnnotError::FileNotFound { .. }));
}

#[test]
fn empty_file_has_no_header_row() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "empty.csv", "");

    let err = read_table(&path, Delimiter::Comma).unwrap_err();
    assert!(matches!(err, AnnotError::Format { .. }));
}
