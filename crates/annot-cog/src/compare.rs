//! Category-set comparison across listings.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use annot_model::{AnnotError, CategoryLabel, Result};
use tracing::debug;

use crate::reader::{ParsedListing, load_listing};

/// A named listing participating in a comparison.
#[derive(Debug, Clone)]
pub struct ComparisonSource {
    pub name: String,
    pub listing: ParsedListing,
}

impl ComparisonSource {
    pub fn new(name: impl Into<String>, listing: ParsedListing) -> Self {
        ComparisonSource {
            name: name.into(),
            listing,
        }
    }

    /// Load a source from a listing file, named by the file name.
    pub fn from_file(path: &Path) -> Result<Self> {
        let listing = load_listing(path)?;
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("listing")
            .to_string();
        Ok(ComparisonSource::new(name, listing))
    }
}

/// One label's outcome: the unique member set per source, in input order.
/// A source lacking the label reports an empty unique set, not a missing
/// entry.
#[derive(Debug, Clone)]
pub struct ComparisonRow {
    pub label: CategoryLabel,
    pub title: String,
    pub uniques: Vec<(String, BTreeSet<String>)>,
}

/// Compare N sources (N >= 2) label by label.
///
/// For every label in the union of all inputs, unique-to-source-i is that
/// source's member set minus the union of every other source's set. The
/// title is the first non-empty one in source order; later sources never
/// override it.
pub fn compare_sources(sources: &[ComparisonSource]) -> Result<Vec<ComparisonRow>> {
    if sources.len() < 2 {
        return Err(AnnotError::empty_input_set(2, sources.len()));
    }
    let mut labels: BTreeSet<CategoryLabel> = BTreeSet::new();
    for source in sources {
        labels.extend(source.listing.labels());
    }
    let empty = BTreeSet::new();
    let mut rows = Vec::with_capacity(labels.len());
    for label in labels {
        let title = sources
            .iter()
            .filter_map(|source| source.listing.entry(label))
            .map(|entry| entry.title.as_str())
            .find(|title| !title.is_empty())
            .unwrap_or("")
            .to_string();
        let sets: Vec<&BTreeSet<String>> = sources
            .iter()
            .map(|source| {
                source
                    .listing
                    .entry(label)
                    .map_or(&empty, |entry| &entry.proteins)
            })
            .collect();
        let mut uniques = Vec::with_capacity(sources.len());
        for (index, source) in sources.iter().enumerate() {
            let others: BTreeSet<&str> = sets
                .iter()
                .enumerate()
                .filter(|(other, _)| *other != index)
                .flat_map(|(_, set)| set.iter().map(String::as_str))
                .collect();
            let unique: BTreeSet<String> = sets[index]
                .iter()
                .filter(|protein| !others.contains(protein.as_str()))
                .cloned()
                .collect();
            uniques.push((source.name.clone(), unique));
        }
        rows.push(ComparisonRow {
            label,
            title,
            uniques,
        });
    }
    Ok(rows)
}

/// Render comparison rows in the flat report format: per label a
/// `"<label>: <title>"` header, then a "Unique to" pair of lines per
/// source, then a blank line.
pub fn render_comparison(rows: &[ComparisonRow]) -> String {
    let mut lines: Vec<String> = Vec::new();
    for row in rows {
        lines.push(format!("{}: {}", row.label, row.title));
        for (name, unique) in &row.uniques {
            lines.push(format!("Unique to {name}:"));
            if unique.is_empty() {
                lines.push("(none)".to_string());
            } else {
                lines.push(
                    unique
                        .iter()
                        .map(String::as_str)
                        .collect::<Vec<_>>()
                        .join(", "),
                );
            }
        }
        lines.push(String::new());
    }
    lines.join("\n")
}

/// Load every listing, compare, and render the report text. Any
/// unreadable or non-listing input aborts before anything is produced.
pub fn compare_files(paths: &[PathBuf]) -> Result<String> {
    if paths.len() < 2 {
        return Err(AnnotError::empty_input_set(2, paths.len()));
    }
    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        sources.push(ComparisonSource::from_file(path)?);
    }
    let rows = compare_sources(&sources)?;
    debug!(sources = sources.len(), labels = rows.len(), "compared listings");
    Ok(render_comparison(&rows))
}
