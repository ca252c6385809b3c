//! Listing report writer.
//!
//! One block per label: a header line with code, description, and member
//! count, then the comma-joined members, then a blank line. The reader in
//! this crate re-parses exactly this shape, so changes here must stay
//! compatible with it.

use std::path::Path;

use annot_model::{CategoryListing, Result};

/// Separator between label and description in a header line (en dash).
pub const LABEL_SEPARATOR: char = '\u{2013}';

/// Render a listing in the flat block format.
pub fn render_listing(listing: &CategoryListing) -> String {
    let mut out = String::new();
    for (label, proteins) in listing.iter() {
        out.push_str(&format!(
            "{label} {LABEL_SEPARATOR} {} ({})\n",
            label.description(),
            proteins.len()
        ));
        out.push_str(&proteins.join(", "));
        out.push_str("\n\n");
    }
    out
}

/// Render and write a listing in one pass.
pub fn write_listing(listing: &CategoryListing, path: &Path) -> Result<()> {
    std::fs::write(path, render_listing(listing))?;
    Ok(())
}
