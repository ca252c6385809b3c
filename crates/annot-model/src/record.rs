//! One row of a protein-annotation table.

use crate::category::CategoryLabel;

/// A protein identifier paired with its raw category field, as read from
/// one input row. The raw field may be empty or hold several concatenated
/// single-letter codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationRecord {
    pub protein: String,
    pub categories: String,
}

impl AnnotationRecord {
    pub fn new(protein: impl Into<String>, categories: impl Into<String>) -> Self {
        AnnotationRecord {
            protein: protein.into(),
            categories: categories.into(),
        }
    }

    /// Split the raw category field into individual labels. An empty or
    /// whitespace-only field yields the `-` sentinel; otherwise every
    /// character of the trimmed field is its own label, so "CO" assigns
    /// the protein to both C and O. Repeats are preserved.
    pub fn labels(&self) -> Vec<CategoryLabel> {
        let trimmed = self.categories.trim();
        if trimmed.is_empty() {
            vec![CategoryLabel::UNASSIGNED]
        } else {
            trimmed.chars().map(CategoryLabel::new).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_letter_field_splits_per_character() {
        let record = AnnotationRecord::new("P0001", "CO");
        let labels = record.labels();
        assert_eq!(
            labels,
            vec![CategoryLabel::new('C'), CategoryLabel::new('O')]
        );
    }

    #[test]
    fn empty_field_maps_to_sentinel() {
        for raw in ["", "   ", "\t"] {
            let record = AnnotationRecord::new("P0002", raw);
            assert_eq!(record.labels(), vec![CategoryLabel::UNASSIGNED]);
        }
    }

    #[test]
    fn repeated_codes_are_preserved() {
        let record = AnnotationRecord::new("P0003", "CC");
        assert_eq!(
            record.labels(),
            vec![CategoryLabel::new('C'), CategoryLabel::new('C')]
        );
    }
}
