//! Protein annotation workbench CLI.

use annot_cli::logging::{LogConfig, LogFormat, init_logging};
use anyhow::Context;
use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use std::path::Path;
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;
mod types;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_categories, run_clean, run_cog, run_quant};
use crate::summary::print_run_summary;
use crate::types::RunReport;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match &cli.command {
        Command::Categories => {
            run_categories();
            0
        }
        Command::Cog(command) => finish_run(&cli, run_cog(command)),
        Command::Clean(command) => finish_run(&cli, run_clean(command)),
        Command::Quant(command) => finish_run(&cli, run_quant(command)),
    };
    std::process::exit(exit_code);
}

/// Print the run summary, write `--summary-json` when asked, and map
/// the outcome to the exit code. Per-file failures exit 1 like whole-run
/// failures; they just do not stop the other files first.
fn finish_run(cli: &Cli, result: anyhow::Result<RunReport>) -> i32 {
    let report = match result {
        Ok(report) => report,
        Err(error) => {
            eprintln!("error: {error:#}");
            return 1;
        }
    };
    print_run_summary(&report);
    if let Some(path) = &cli.summary_json
        && let Err(error) = write_summary_json(&report, path)
    {
        eprintln!("error: {error:#}");
        return 1;
    }
    if report.has_errors() { 1 } else { 0 }
}

fn write_summary_json(report: &RunReport, path: &Path) -> anyhow::Result<()> {
    let json =
        serde_json::to_string_pretty(&report.to_summary()).context("serialize run summary")?;
    std::fs::write(path, json)
        .with_context(|| format!("write run summary to {}", path.display()))?;
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
