//! Input handling shared by the annotation utilities: delimited-table
//! reading, plain line sources, and header-based column resolution.

pub mod columns;
pub mod source;
pub mod table;

pub use columns::{ColumnSpec, prefixed_columns, require_column, resolve_column};
pub use source::read_lines;
pub use table::{
    CsvTable, Delimiter, normalize_cell, normalize_header, read_raw_rows, read_table, write_table,
};
