//! Quantification-table tools: per-protein SpC/TIC means with the
//! changed-protein cut, and shared/unique identifier sets across tables.

pub mod exclusivity;
pub mod summary;

pub use exclusivity::{
    ExclusivityOutcome, ExclusivityTable, SourceOutcome, SourceSet, exclusivity,
    exclusivity_file,
};
pub use summary::{
    ProteinQuant, QuantThresholds, SummaryOutcome, summarize_file, summarize_rows,
};
