use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::{error, info, info_span};

use annot_clean::{
    CleanOutcome, clean_cello_file, clean_david_file, clean_psortb_file, clean_uniprot_file,
};
use annot_cli::pipeline::{
    DEFAULT_REPORT_NAME, compare_to_report, default_report_path, extract_to_listing, run_pipeline,
};
use annot_cog::ExtractOptions;
use annot_ingest::Delimiter;
use annot_model::KNOWN_CATEGORIES;
use annot_quant::{QuantThresholds, exclusivity_file, summarize_file};

use crate::cli::{
    CleanArgs, CleanCommand, CogCommand, CompareArgs, DelimiterArg, ExclusivityArgs, ExtractArgs,
    PipelineArgs, QuantCommand, QuantSummaryArgs,
};
use crate::summary::apply_table_style;
use crate::types::{FileReport, RunReport};

pub fn run_categories() {
    let mut table = Table::new();
    table.set_header(vec!["Code", "Description"]);
    apply_table_style(&mut table);
    for (code, description) in KNOWN_CATEGORIES {
        table.add_row(vec![code.to_string(), description.to_string()]);
    }
    println!("{table}");
}

pub fn run_cog(command: &CogCommand) -> Result<RunReport> {
    match command {
        CogCommand::Extract(args) => run_cog_extract(args),
        CogCommand::Compare(args) => run_cog_compare(args),
        CogCommand::Pipeline(args) => run_cog_pipeline(args),
    }
}

pub fn run_clean(command: &CleanCommand) -> Result<RunReport> {
    match command {
        CleanCommand::Cello(args) => clean_files("clean cello", args, |input, out_dir| {
            Ok(clean_report(input, clean_cello_file(input, out_dir)?))
        }),
        CleanCommand::Psortb(args) => clean_files("clean psortb", args, |input, out_dir| {
            Ok(clean_report(input, clean_psortb_file(input, out_dir)?))
        }),
        CleanCommand::David(args) => clean_files("clean david", args, |input, out_dir| {
            let outcome = clean_david_file(input, out_dir)?;
            Ok(FileReport {
                input: input.to_path_buf(),
                outputs: vec![outcome.overview, outcome.significant, outcome.genes],
                rows_read: outcome.rows_read,
                rows_kept: outcome.rows_kept,
                error: None,
            })
        }),
        CleanCommand::Uniprot(args) => clean_files("clean uniprot", args, |input, out_dir| {
            Ok(clean_report(input, clean_uniprot_file(input, out_dir)?))
        }),
    }
}

pub fn run_quant(command: &QuantCommand) -> Result<RunReport> {
    match command {
        QuantCommand::Summary(args) => run_quant_summary(args),
        QuantCommand::Exclusivity(args) => run_quant_exclusivity(args),
    }
}

fn run_cog_extract(args: &ExtractArgs) -> Result<RunReport> {
    if args.out.is_some() && args.inputs.len() > 1 {
        bail!("--out goes with a single input table; use --out-dir for several");
    }
    ensure_out_dir(args.out_dir.as_deref())?;
    let options = extract_options(args.skip_rows, args.protein_column, args.category_column);
    let delimiter = table_delimiter(args.delimiter);

    let mut report = RunReport::new("cog extract");
    for input in &args.inputs {
        let outcome = extract_to_listing(
            input,
            delimiter,
            &options,
            args.out.as_deref(),
            args.out_dir.as_deref(),
        )
        .with_context(|| format!("extract listing from {}", input.display()))?;
        report.files.push(FileReport {
            input: input.clone(),
            outputs: vec![outcome.listing],
            rows_read: outcome.rows_read,
            rows_kept: outcome.assignments,
            error: None,
        });
    }
    Ok(report)
}

fn run_cog_compare(args: &CompareArgs) -> Result<RunReport> {
    let out = report_path(args.out.as_ref(), &args.inputs);
    let outcome = compare_to_report(&args.inputs, &out).context("compare listings")?;

    let mut report = RunReport::new("cog compare");
    report.outputs.push(outcome.report);
    for source in outcome.sources {
        report.files.push(FileReport {
            input: source.input,
            outputs: Vec::new(),
            rows_read: source.labels,
            rows_kept: source.assignments,
            error: None,
        });
    }
    Ok(report)
}

fn run_cog_pipeline(args: &PipelineArgs) -> Result<RunReport> {
    ensure_out_dir(args.listing_dir.as_deref())?;
    let options = extract_options(args.skip_rows, args.protein_column, args.category_column);
    let report_out = report_path(args.out.as_ref(), &args.inputs);
    let outcome = run_pipeline(
        &args.inputs,
        table_delimiter(args.delimiter),
        &options,
        args.listing_dir.as_deref(),
        &report_out,
    )
    .context("run COG pipeline")?;

    let mut report = RunReport::new("cog pipeline");
    report.outputs.push(outcome.compare.report);
    for extract in outcome.extracts {
        report.files.push(FileReport {
            input: extract.input,
            outputs: vec![extract.listing],
            rows_read: extract.rows_read,
            rows_kept: extract.assignments,
            error: None,
        });
    }
    Ok(report)
}

/// Run one cleaner over every input. A failed file is recorded in the
/// report and the remaining files still run.
fn clean_files<F>(command: &str, args: &CleanArgs, clean: F) -> Result<RunReport>
where
    F: Fn(&Path, Option<&Path>) -> annot_model::Result<FileReport>,
{
    ensure_out_dir(args.out_dir.as_deref())?;
    let mut report = RunReport::new(command);
    for input in &args.inputs {
        let clean_span = info_span!("clean_file", input = %input.display());
        let _clean_guard = clean_span.enter();
        let start = Instant::now();
        match clean(input, args.out_dir.as_deref()) {
            Ok(file) => {
                info!(
                    input = %input.display(),
                    rows_read = file.rows_read,
                    rows_kept = file.rows_kept,
                    duration_ms = start.elapsed().as_millis(),
                    "file cleaned"
                );
                report.files.push(file);
            }
            Err(error) => {
                error!(input = %input.display(), %error, "cleaning failed");
                report.files.push(FileReport::failed(input, error.to_string()));
            }
        }
    }
    Ok(report)
}

fn run_quant_summary(args: &QuantSummaryArgs) -> Result<RunReport> {
    ensure_out_dir(args.out_dir.as_deref())?;
    let thresholds = QuantThresholds {
        min_spc: args.min_spc,
        min_tic: args.min_tic,
    };
    let delimiter = table_delimiter(args.delimiter);

    let mut report = RunReport::new("quant summary");
    for input in &args.inputs {
        let summary_span = info_span!("quant_summary", input = %input.display());
        let _summary_guard = summary_span.enter();
        let start = Instant::now();
        match summarize_file(input, delimiter, &thresholds, args.out_dir.as_deref()) {
            Ok(outcome) => {
                info!(
                    input = %input.display(),
                    proteins = outcome.proteins,
                    changed = outcome.changed_count,
                    duration_ms = start.elapsed().as_millis(),
                    "table summarized"
                );
                report.files.push(FileReport {
                    input: input.clone(),
                    outputs: vec![outcome.summary, outcome.changed],
                    rows_read: outcome.rows_read,
                    rows_kept: outcome.proteins,
                    error: None,
                });
            }
            Err(error) => {
                error!(input = %input.display(), %error, "summary failed");
                report.files.push(FileReport::failed(input, error.to_string()));
            }
        }
    }
    Ok(report)
}

fn run_quant_exclusivity(args: &ExclusivityArgs) -> Result<RunReport> {
    let outcome = exclusivity_file(
        &args.inputs,
        table_delimiter(args.delimiter),
        args.out.as_deref(),
    )
    .context("compare protein sets")?;

    let mut report = RunReport::new("quant exclusivity");
    report.outputs.push(outcome.output);
    for source in outcome.sources {
        report.files.push(FileReport {
            input: source.input,
            outputs: Vec::new(),
            rows_read: source.proteins,
            rows_kept: source.unique,
            error: None,
        });
    }
    Ok(report)
}

fn clean_report(input: &Path, outcome: CleanOutcome) -> FileReport {
    FileReport {
        input: input.to_path_buf(),
        outputs: vec![outcome.output],
        rows_read: outcome.lines_read,
        rows_kept: outcome.records,
        error: None,
    }
}

fn extract_options(
    skip_rows: usize,
    protein_column: usize,
    category_column: usize,
) -> ExtractOptions {
    ExtractOptions {
        skip_rows,
        protein_column,
        category_column,
    }
}

fn report_path(out: Option<&PathBuf>, inputs: &[PathBuf]) -> PathBuf {
    match (out, inputs.first()) {
        (Some(path), _) => path.clone(),
        (None, Some(first)) => default_report_path(first),
        (None, None) => PathBuf::from(DEFAULT_REPORT_NAME),
    }
}

fn ensure_out_dir(dir: Option<&Path>) -> Result<()> {
    if let Some(dir) = dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create output directory {}", dir.display()))?;
    }
    Ok(())
}

fn table_delimiter(arg: DelimiterArg) -> Delimiter {
    match arg {
        DelimiterArg::Comma => Delimiter::Comma,
        DelimiterArg::Tab => Delimiter::Tab,
    }
}
