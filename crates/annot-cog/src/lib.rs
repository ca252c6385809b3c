//! COG category pipeline: extract a category listing from an annotation
//! table, serialize it, and compare the per-category protein sets of
//! several listings.
//!
//! The two stages only share the flat listing format: the extractor
//! writes it, the comparator re-parses it.

pub mod compare;
pub mod extract;
pub mod reader;
pub mod writer;

pub use compare::{
    ComparisonRow, ComparisonSource, compare_files, compare_sources, render_comparison,
};
pub use extract::{ExtractOptions, LISTING_SUFFIX, default_listing_path, extract_listing, listing_from_rows};
pub use reader::{LabelEntry, ParsedListing, load_listing, parse_listing_text};
pub use writer::{LABEL_SEPARATOR, render_listing, write_listing};
