//! Category-indexed protein listings.

use std::collections::BTreeMap;

use crate::category::CategoryLabel;
use crate::record::AnnotationRecord;

/// Mapping from category label to the proteins assigned to it.
///
/// Labels iterate in ascending code order; the proteins under each label
/// keep input row order, and a protein annotated with the same code twice
/// appears twice. The listing is built fully in memory before anything is
/// written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryListing {
    entries: BTreeMap<CategoryLabel, Vec<String>>,
}

impl CategoryListing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign one protein to one label, appending to the label's members.
    pub fn assign(&mut self, label: CategoryLabel, protein: impl Into<String>) {
        self.entries.entry(label).or_default().push(protein.into());
    }

    /// Assign a record's protein to every label its raw field splits into.
    pub fn assign_record(&mut self, record: &AnnotationRecord) {
        for label in record.labels() {
            self.assign(label, record.protein.clone());
        }
    }

    /// Labels present in the listing, ascending.
    pub fn labels(&self) -> impl Iterator<Item = CategoryLabel> + '_ {
        self.entries.keys().copied()
    }

    /// Proteins under a label, in assignment order.
    pub fn proteins(&self, label: CategoryLabel) -> Option<&[String]> {
        self.entries.get(&label).map(Vec::as_slice)
    }

    /// (label, members) pairs in ascending label order.
    pub fn iter(&self) -> impl Iterator<Item = (CategoryLabel, &[String])> {
        self.entries
            .iter()
            .map(|(label, proteins)| (*label, proteins.as_slice()))
    }

    /// Number of distinct labels.
    pub fn label_count(&self) -> usize {
        self.entries.len()
    }

    /// Total label assignments (a protein under two labels counts twice).
    pub fn assignment_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(CategoryLabel, Vec<String>)> for CategoryListing {
    fn from_iter<I: IntoIterator<Item = (CategoryLabel, Vec<String>)>>(iter: I) -> Self {
        CategoryListing {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_keeps_row_order_and_duplicates() {
        let mut listing = CategoryListing::new();
        let c = CategoryLabel::new('C');
        listing.assign(c, "P2");
        listing.assign(c, "P1");
        listing.assign(c, "P2");
        assert_eq!(
            listing.proteins(c),
            Some(&["P2".to_string(), "P1".to_string(), "P2".to_string()][..])
        );
        assert_eq!(listing.assignment_count(), 3);
    }

    #[test]
    fn labels_iterate_ascending_with_sentinel_first() {
        let mut listing = CategoryListing::new();
        listing.assign(CategoryLabel::new('K'), "P1");
        listing.assign(CategoryLabel::UNASSIGNED, "P2");
        listing.assign(CategoryLabel::new('A'), "P3");
        let labels: Vec<char> = listing.labels().map(|l| l.as_char()).collect();
        assert_eq!(labels, vec!['-', 'A', 'K']);
    }

    #[test]
    fn record_assignment_fans_out_over_labels() {
        let mut listing = CategoryListing::new();
        listing.assign_record(&AnnotationRecord::new("P1", "CO"));
        listing.assign_record(&AnnotationRecord::new("P2", ""));
        assert_eq!(
            listing.proteins(CategoryLabel::new('C')),
            Some(&["P1".to_string()][..])
        );
        assert_eq!(
            listing.proteins(CategoryLabel::new('O')),
            Some(&["P1".to_string()][..])
        );
        assert_eq!(
            listing.proteins(CategoryLabel::UNASSIGNED),
            Some(&["P2".to_string()][..])
        );
    }
}
