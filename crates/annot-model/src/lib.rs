//! Data model for the protein annotation utilities: category labels,
//! annotation records, category listings, and the shared error type.

pub mod category;
pub mod error;
pub mod listing;
pub mod record;

pub use category::{CategoryLabel, KNOWN_CATEGORIES, UNKNOWN_DESCRIPTION};
pub use error::{AnnotError, Result};
pub use listing::CategoryListing;
pub use record::AnnotationRecord;
