//! Delimited-table reading with light cell normalization.

use std::path::Path;

use annot_model::{AnnotError, Result};
use csv::ReaderBuilder;

/// Field delimiter for tabular inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
}

impl Delimiter {
    pub fn as_byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Tab => b'\t',
        }
    }
}

/// A fully-read table: one header row plus data rows.
///
/// Rows keep their natural field counts (the reader is flexible), so
/// consumers distinguish a short row (`row.get(idx)` is `None`) from an
/// empty cell.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Trim a header cell and collapse internal whitespace runs to single
/// spaces. Leading UTF-8 BOMs are dropped.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Trim a data cell, dropping a leading UTF-8 BOM.
pub fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn map_csv_error(path: &Path, error: csv::Error) -> AnnotError {
    let message = error.to_string();
    match error.into_kind() {
        csv::ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
            AnnotError::file_not_found(path)
        }
        csv::ErrorKind::Io(io) => AnnotError::Io(io),
        _ => AnnotError::format(path, message),
    }
}

/// Read every record of a delimited file as normalized cells, with no
/// header interpretation. Row indices match the file's record order.
pub fn read_raw_rows(path: &Path, delimiter: Delimiter) -> Result<Vec<Vec<String>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter.as_byte())
        .from_path(path)
        .map_err(|e| map_csv_error(path, e))?;
    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| map_csv_error(path, e))?;
        rows.push(record.iter().map(normalize_cell).collect());
    }
    Ok(rows)
}

/// Read a delimited file whose first record is the header row.
pub fn read_table(path: &Path, delimiter: Delimiter) -> Result<CsvTable> {
    let mut rows = read_raw_rows(path, delimiter)?;
    if rows.is_empty() {
        return Err(AnnotError::format(path, "empty table: no header row"));
    }
    let headers = rows.remove(0).iter().map(|cell| normalize_header(cell)).collect();
    Ok(CsvTable { headers, rows })
}

/// Write a delimited file, header record first. The whole table is
/// rendered in memory and written in one pass, so a failed run leaves
/// no partial output behind.
pub fn write_table(
    path: &Path,
    delimiter: Delimiter,
    headers: &[String],
    rows: &[Vec<String>],
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter.as_byte())
        .from_writer(Vec::new());
    writer
        .write_record(headers)
        .map_err(|e| map_csv_error(path, e))?;
    for row in rows {
        writer
            .write_record(row)
            .map_err(|e| map_csv_error(path, e))?;
    }
    let buffer = writer
        .into_inner()
        .map_err(|e| AnnotError::format(path, e.to_string()))?;
    std::fs::write(path, buffer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_headers_and_cells() {
        assert_eq!(normalize_header("\u{feff} Protein   AC "), "Protein AC");
        assert_eq!(normalize_cell("  P0001 "), "P0001");
    }

    #[test]
    fn delimiter_bytes() {
        assert_eq!(Delimiter::Comma.as_byte(), b',');
        assert_eq!(Delimiter::Tab.as_byte(), b'\t');
    }

    #[test]
    fn writes_header_then_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let headers = vec!["Term".to_string(), "Count".to_string()];
        let rows = vec![
            vec!["GO:0006810".to_string(), "12".to_string()],
            vec!["transport, vesicle".to_string(), "3".to_string()],
        ];
        write_table(&path, Delimiter::Comma, &headers, &rows).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "Term,Count\nGO:0006810,12\n\"transport, vesicle\",3\n");
    }

    #[test]
    fn written_table_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("round.csv");
        let headers = vec!["A".to_string(), "B".to_string()];
        let rows = vec![vec!["1".to_string(), "x,y".to_string()]];
        write_table(&path, Delimiter::Comma, &headers, &rows).unwrap();
        let table = read_table(&path, Delimiter::Comma).unwrap();
        assert_eq!(table.headers, headers);
        assert_eq!(table.rows, rows);
    }
}
