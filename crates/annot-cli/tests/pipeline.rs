//! End-to-end COG workflow: extract listings from annotation tables,
//! compare them into one report, and abort cleanly on bad inputs.

use std::fs;
use std::path::{Path, PathBuf};

use annot_cli::pipeline::{
    DEFAULT_REPORT_NAME, compare_to_report, default_report_path, extract_to_listing, run_pipeline,
};
use annot_cog::ExtractOptions;
use annot_ingest::Delimiter;
use annot_model::AnnotError;

fn options() -> ExtractOptions {
    ExtractOptions {
        skip_rows: 1,
        protein_column: 0,
        category_column: 1,
    }
}

fn write(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

#[test]
fn extract_writes_the_default_listing_beside_the_input() {
    let dir = tempfile::tempdir().unwrap();
    let table = dir.path().join("membrane.csv");
    write(&table, "id,cog\nP1,C\nP2,CK\nP3,\n");

    let outcome = extract_to_listing(&table, Delimiter::Comma, &options(), None, None).unwrap();

    assert_eq!(
        outcome.listing,
        dir.path().join("membrane_proteins_per_COG.txt")
    );
    assert_eq!(outcome.rows_read, 4);
    assert_eq!(outcome.labels, 3);
    assert_eq!(outcome.assignments, 4);
    let text = fs::read_to_string(&outcome.listing).unwrap();
    assert!(text.contains("C \u{2013} Energy production and conversion (2)\nP1, P2\n"));
    assert!(text.contains("- \u{2013} Not assigned / No COG code (1)\nP3\n"));
}

#[test]
fn extract_honors_out_and_out_dir() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    let table = dir.path().join("a.csv");
    write(&table, "id,cog\nP1,C\n");

    let explicit = dir.path().join("custom_listing.txt");
    let outcome =
        extract_to_listing(&table, Delimiter::Comma, &options(), Some(&explicit), None).unwrap();
    assert_eq!(outcome.listing, explicit);
    assert!(explicit.exists());

    let outcome =
        extract_to_listing(&table, Delimiter::Comma, &options(), None, Some(out_dir.path()))
            .unwrap();
    assert_eq!(outcome.listing, out_dir.path().join("a_proteins_per_COG.txt"));
    assert!(outcome.listing.exists());
}

#[test]
fn pipeline_extracts_then_writes_one_report() {
    let dir = tempfile::tempdir().unwrap();
    let table_a = dir.path().join("a.csv");
    let table_b = dir.path().join("b.csv");
    write(&table_a, "id,cog\nP1,C\nP2,CK\nP3,\n");
    write(&table_b, "id,cog\nP1,C\nP4,K\n");

    let report_path = dir.path().join(DEFAULT_REPORT_NAME);
    let outcome = run_pipeline(
        &[table_a.clone(), table_b.clone()],
        Delimiter::Comma,
        &options(),
        None,
        &report_path,
    )
    .unwrap();

    assert_eq!(outcome.extracts.len(), 2);
    assert!(dir.path().join("a_proteins_per_COG.txt").exists());
    assert!(dir.path().join("b_proteins_per_COG.txt").exists());
    assert_eq!(outcome.compare.report, report_path);
    assert_eq!(outcome.compare.labels, 3);

    let report = fs::read_to_string(&report_path).unwrap();
    assert_eq!(
        report,
        "-: Not assigned / No COG code\n\
         Unique to a_proteins_per_COG.txt:\n\
         P3\n\
         Unique to b_proteins_per_COG.txt:\n\
         (none)\n\
         \n\
         C: Energy production and conversion\n\
         Unique to a_proteins_per_COG.txt:\n\
         P2\n\
         Unique to b_proteins_per_COG.txt:\n\
         (none)\n\
         \n\
         K: Transcription\n\
         Unique to a_proteins_per_COG.txt:\n\
         P2\n\
         Unique to b_proteins_per_COG.txt:\n\
         P4\n"
    );
}

#[test]
fn pipeline_rejects_a_single_table_before_writing_anything() {
    let dir = tempfile::tempdir().unwrap();
    let table = dir.path().join("only.csv");
    write(&table, "id,cog\nP1,C\n");

    let report_path = dir.path().join(DEFAULT_REPORT_NAME);
    let error = run_pipeline(
        &[table],
        Delimiter::Comma,
        &options(),
        None,
        &report_path,
    )
    .unwrap_err();

    assert!(matches!(
        error,
        AnnotError::EmptyInputSet {
            expected: 2,
            got: 1
        }
    ));
    assert!(!dir.path().join("only_proteins_per_COG.txt").exists());
    assert!(!report_path.exists());
}

#[test]
fn compare_aborts_without_a_report_when_an_input_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good_proteins_per_COG.txt");
    write(
        &good,
        "C \u{2013} Energy production and conversion (1)\nP1\n\n",
    );
    let missing = dir.path().join("absent_proteins_per_COG.txt");

    let report_path = dir.path().join(DEFAULT_REPORT_NAME);
    let error = compare_to_report(&[good, missing], &report_path).unwrap_err();

    assert!(matches!(error, AnnotError::FileNotFound { .. }));
    assert!(!report_path.exists());
}

#[test]
fn default_report_lands_beside_the_first_input() {
    assert_eq!(
        default_report_path(Path::new("/data/a_proteins_per_COG.txt")),
        PathBuf::from("/data/COG_comparison_results.txt")
    );
}
