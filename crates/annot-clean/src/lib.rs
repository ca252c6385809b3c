//! Cleaners for third-party tool exports: CELLO and pSORTb localization
//! reports, DAVID enrichment charts, and UniProt flat files.
//!
//! Each cleaner is a pure line/row transform plus a thin file wrapper
//! that applies the shared `<stem><suffix>` output convention.

pub mod cello;
pub mod david;
pub mod output;
pub mod psortb;
pub mod uniprot;

pub use cello::clean_cello_file;
pub use david::{DavidOutcome, DavidRow, clean_david_file};
pub use output::{CleanOutcome, suffixed_path};
pub use psortb::clean_psortb_file;
pub use uniprot::{FastaRecord, clean_uniprot_file};
