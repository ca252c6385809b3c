//! Listing report re-parser.
//!
//! The comparator reads listings back from text rather than reusing the
//! extractor's in-memory structures; the flat-file format is the only
//! contract between the two stages.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use annot_model::{AnnotError, CategoryLabel, Result};
use tracing::debug;

use crate::writer::LABEL_SEPARATOR;

/// One re-parsed label block: title plus the member set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelEntry {
    pub title: String,
    pub proteins: BTreeSet<String>,
}

/// A listing as reconstructed from its flat text report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedListing {
    entries: BTreeMap<CategoryLabel, LabelEntry>,
}

impl ParsedListing {
    /// Labels present, ascending.
    pub fn labels(&self) -> impl Iterator<Item = CategoryLabel> + '_ {
        self.entries.keys().copied()
    }

    pub fn entry(&self, label: CategoryLabel) -> Option<&LabelEntry> {
        self.entries.get(&label)
    }

    pub fn label_count(&self) -> usize {
        self.entries.len()
    }

    /// Label memberships summed over all labels. Within a label the
    /// member set already collapsed duplicates; a protein under two
    /// labels counts twice.
    pub fn assignment_count(&self) -> usize {
        self.entries.values().map(|entry| entry.proteins.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Re-parse listing text.
///
/// A line containing the label separator starts a block when it splits
/// into exactly two parts and the left part is a single character;
/// otherwise the block is skipped (no current label until the next
/// well-formed header). Non-blank lines under a current label contribute
/// comma-separated members; a blank line ends attribution. A repeated
/// label header replaces the earlier block.
pub fn parse_listing_text(text: &str) -> ParsedListing {
    let mut entries: BTreeMap<CategoryLabel, LabelEntry> = BTreeMap::new();
    let mut current: Option<CategoryLabel> = None;
    for line in text.lines() {
        if line.contains(LABEL_SEPARATOR) {
            let parts: Vec<&str> = line.split(LABEL_SEPARATOR).collect();
            let [left, right] = parts.as_slice() else {
                current = None;
                continue;
            };
            let Ok(label) = left.parse::<CategoryLabel>() else {
                current = None;
                continue;
            };
            let title = right.split('(').next().unwrap_or("").trim().to_string();
            entries.insert(
                label,
                LabelEntry {
                    title,
                    proteins: BTreeSet::new(),
                },
            );
            current = Some(label);
        } else if line.trim().is_empty() {
            current = None;
        } else if let Some(label) = current {
            let entry = entries.entry(label).or_default();
            entry.proteins.extend(
                line.split(',')
                    .map(str::trim)
                    .filter(|protein| !protein.is_empty())
                    .map(String::from),
            );
        }
    }
    ParsedListing { entries }
}

/// Load and re-parse a listing file.
///
/// A file with content but no parseable label block is not in listing
/// format and aborts; a file with no content at all is an empty listing.
pub fn load_listing(path: &Path) -> Result<ParsedListing> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AnnotError::file_not_found(path)
        } else {
            AnnotError::Io(e)
        }
    })?;
    let parsed = parse_listing_text(&text);
    if parsed.is_empty() && text.lines().any(|line| !line.trim().is_empty()) {
        return Err(AnnotError::format(path, "no category blocks found"));
    }
    debug!(path = %path.display(), labels = parsed.label_count(), "parsed listing");
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(code: char) -> CategoryLabel {
        CategoryLabel::new(code)
    }

    #[test]
    fn parses_blocks_with_title_and_members() {
        let text = "C \u{2013} Energy production and conversion (2)\nP1, P2\n\n";
        let parsed = parse_listing_text(text);
        let entry = parsed.entry(label('C')).unwrap();
        assert_eq!(entry.title, "Energy production and conversion");
        assert_eq!(entry.proteins.len(), 2);
        assert!(entry.proteins.contains("P1"));
    }

    #[test]
    fn malformed_headers_skip_their_block() {
        // Two separators on one line, then a label that is not one character.
        let text = "C \u{2013} half \u{2013} half (1)\nP1\n\nCO \u{2013} multi (1)\nP2\n\nK \u{2013} Transcription (1)\nP3\n";
        let parsed = parse_listing_text(text);
        assert_eq!(parsed.label_count(), 1);
        let entry = parsed.entry(label('K')).unwrap();
        assert!(entry.proteins.contains("P3"));
    }

    #[test]
    fn blank_line_ends_attribution() {
        let text = "C \u{2013} Energy (1)\nP1\n\nP2, P3\n";
        let parsed = parse_listing_text(text);
        let entry = parsed.entry(label('C')).unwrap();
        assert_eq!(entry.proteins.len(), 1);
        assert!(!entry.proteins.contains("P2"));
    }

    #[test]
    fn consecutive_member_lines_accumulate() {
        let text = "C \u{2013} Energy (3)\nP1, P2\nP3\n";
        let parsed = parse_listing_text(text);
        assert_eq!(parsed.entry(label('C')).unwrap().proteins.len(), 3);
    }

    #[test]
    fn assignment_count_sums_label_members() {
        let text = "C \u{2013} Energy (2)\nP1, P2\n\nK \u{2013} Transcription (2)\nP2, P3\n";
        let parsed = parse_listing_text(text);
        assert_eq!(parsed.assignment_count(), 4);
    }

    #[test]
    fn repeated_label_replaces_earlier_block() {
        let text = "C \u{2013} first (1)\nP1\n\nC \u{2013} second (1)\nP2\n";
        let parsed = parse_listing_text(text);
        let entry = parsed.entry(label('C')).unwrap();
        assert_eq!(entry.title, "second");
        assert!(entry.proteins.contains("P2"));
        assert!(!entry.proteins.contains("P1"));
    }

    #[test]
    fn title_stops_at_parenthesis() {
        let text = "- \u{2013} Not assigned / No COG code (4)\nP1\n";
        let parsed = parse_listing_text(text);
        assert_eq!(
            parsed.entry(CategoryLabel::UNASSIGNED).unwrap().title,
            "Not assigned / No COG code"
        );
    }

    #[test]
    fn sentinel_title_without_count_survives() {
        let text = "- \u{2013} Not assigned\nP1\n";
        let parsed = parse_listing_text(text);
        assert_eq!(
            parsed.entry(CategoryLabel::UNASSIGNED).unwrap().title,
            "Not assigned"
        );
    }
}
