use std::path::{Path, PathBuf};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::RunReport;

pub fn print_run_summary(report: &RunReport) {
    println!("Command: {}", report.command);
    for output in &report.outputs {
        println!("Output: {}", output.display());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Input"),
        header_cell("Outputs"),
        header_cell("Read"),
        header_cell("Kept"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    for file in &report.files {
        table.add_row(vec![
            Cell::new(file_name(&file.input)),
            outputs_cell(&file.outputs),
            Cell::new(file.rows_read),
            Cell::new(file.rows_kept),
            status_cell(file.error.is_none()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(report.rows_read()).add_attribute(Attribute::Bold),
        Cell::new(report.rows_kept()).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
    let errors = report.errors();
    if !errors.is_empty() {
        eprintln!("Errors:");
        for error in &errors {
            eprintln!("- {error}");
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// Inputs can live in different directories; the summary shows the file
/// name and leaves full paths to the logs and the JSON summary.
fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("-")
        .to_string()
}

fn outputs_cell(outputs: &[PathBuf]) -> Cell {
    if outputs.is_empty() {
        return dim_cell("-");
    }
    let names: Vec<String> = outputs.iter().map(|path| file_name(path)).collect();
    Cell::new(names.join("\n"))
}

fn status_cell(ok: bool) -> Cell {
    if ok {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("failed")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
