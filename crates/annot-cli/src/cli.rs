//! CLI argument definitions for the annotation workbench.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "annot-workbench",
    version,
    about = "Protein annotation workbench - COG listings, export cleaning, quantification",
    long_about = "Tools for protein annotation workflows.\n\n\
                  Extract COG category listings from annotation tables and compare them\n\
                  across samples, clean CELLO, pSORTb, DAVID, and UniProt exports into\n\
                  flat files, and summarize label-free quantification tables."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Write a machine-readable JSON summary of the run to a file.
    #[arg(long = "summary-json", value_name = "PATH", global = true)]
    pub summary_json: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the COG category codes and their descriptions.
    Categories,

    /// COG category listings: extract from tables, compare across samples.
    #[command(subcommand)]
    Cog(CogCommand),

    /// Clean predictor and enrichment exports into flat files.
    #[command(subcommand)]
    Clean(CleanCommand),

    /// Quantification tables: summarize means, compare protein sets.
    #[command(subcommand)]
    Quant(QuantCommand),
}

#[derive(Subcommand)]
pub enum CogCommand {
    /// Extract a per-category protein listing from each annotation table.
    Extract(ExtractArgs),

    /// Compare listing files and report per-category unique proteins.
    Compare(CompareArgs),

    /// Extract listings from tables, then compare them in one run.
    Pipeline(PipelineArgs),
}

#[derive(Subcommand)]
pub enum CleanCommand {
    /// Clean CELLO localization predictor output.
    Cello(CleanArgs),

    /// Clean pSORTb localization predictor output.
    Psortb(CleanArgs),

    /// Clean a DAVID functional annotation chart export.
    David(CleanArgs),

    /// Clean a UniProt flat-file download into FASTA.
    Uniprot(CleanArgs),
}

#[derive(Subcommand)]
pub enum QuantCommand {
    /// Summarize per-protein SpC/TIC means and flag changed proteins.
    Summary(QuantSummaryArgs),

    /// Report proteins shared by and exclusive to each input table.
    Exclusivity(ExclusivityArgs),
}

#[derive(Parser)]
pub struct ExtractArgs {
    /// Annotation tables to extract listings from.
    #[arg(value_name = "TABLE", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Listing output path (single input only; default: <stem>_proteins_per_COG.txt).
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Directory for listing outputs (default: beside each input).
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Field delimiter of the annotation tables.
    #[arg(long = "delimiter", value_enum, default_value = "comma")]
    pub delimiter: DelimiterArg,

    /// Leading metadata rows to skip before data starts.
    #[arg(long = "skip-rows", value_name = "N", default_value_t = 3)]
    pub skip_rows: usize,

    /// 0-based column holding the protein identifier.
    #[arg(long = "protein-column", value_name = "N", default_value_t = 0)]
    pub protein_column: usize,

    /// 0-based column holding the category codes.
    #[arg(long = "category-column", value_name = "N", default_value_t = 6)]
    pub category_column: usize,
}

#[derive(Parser)]
pub struct CompareArgs {
    /// Listing files to compare (at least two).
    #[arg(value_name = "LISTING", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Report output path (default: COG_comparison_results.txt beside the first input).
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,
}

#[derive(Parser)]
pub struct PipelineArgs {
    /// Annotation tables to extract and compare (at least two).
    #[arg(value_name = "TABLE", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Report output path (default: COG_comparison_results.txt beside the first input).
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Directory for the intermediate listings (default: beside each input).
    #[arg(long = "listing-dir", value_name = "DIR")]
    pub listing_dir: Option<PathBuf>,

    /// Field delimiter of the annotation tables.
    #[arg(long = "delimiter", value_enum, default_value = "comma")]
    pub delimiter: DelimiterArg,

    /// Leading metadata rows to skip before data starts.
    #[arg(long = "skip-rows", value_name = "N", default_value_t = 3)]
    pub skip_rows: usize,

    /// 0-based column holding the protein identifier.
    #[arg(long = "protein-column", value_name = "N", default_value_t = 0)]
    pub protein_column: usize,

    /// 0-based column holding the category codes.
    #[arg(long = "category-column", value_name = "N", default_value_t = 6)]
    pub category_column: usize,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Raw export files to clean.
    #[arg(value_name = "FILE", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Directory for cleaned outputs (default: beside each input).
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct QuantSummaryArgs {
    /// Quantification tables to summarize.
    #[arg(value_name = "TABLE", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Directory for summary outputs (default: beside each input).
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Minimum mean spectral count for a protein to count as changed.
    #[arg(long = "min-spc", value_name = "MEAN", default_value_t = 2.0)]
    pub min_spc: f64,

    /// Minimum mean total ion current for a protein to count as changed.
    #[arg(long = "min-tic", value_name = "MEAN", default_value_t = 2.0)]
    pub min_tic: f64,

    /// Field delimiter of the quantification tables.
    #[arg(long = "delimiter", value_enum, default_value = "comma")]
    pub delimiter: DelimiterArg,
}

#[derive(Parser)]
pub struct ExclusivityArgs {
    /// Protein tables to compare (at least two).
    #[arg(value_name = "TABLE", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output path (default: protein_exclusivity.csv beside the first input).
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Field delimiter of the protein tables.
    #[arg(long = "delimiter", value_enum, default_value = "comma")]
    pub delimiter: DelimiterArg,
}

/// CLI delimiter choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum DelimiterArg {
    Comma,
    Tab,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
