//! Typed record producers for the skyatlas build.
//!
//! Each catalog file is read lazily, one record at a time, into the record
//! types of [`skyatlas_core::record`]. A source that cannot be opened fails
//! up front; a row that cannot be understood comes out as an `Err` item in its
//! position without stopping the rest of the stream.
//!
//! # Quick start
//!
//! ```no_run
//! let stars = skyatlas_sources::stars::open("data/hygdata.csv").unwrap();
//! for star in stars {
//!   match star {
//!     Ok(s) => println!("{} mag {}", s.id, s.magnitude),
//!     Err(e) => eprintln!("skipped: {e}"),
//!   }
//! }
//! ```

pub mod dso;
pub mod error;
pub mod names;
pub mod stars;
pub mod tap;
pub mod xrefs;

use std::{fs::File, io, path::Path};

pub use error::{Error, Result};

// ─── Shared plumbing ─────────────────────────────────────────────────────────

/// Open `path` for reading, tagging failure with the path.
pub(crate) fn open_file(path: &Path) -> Result<File> {
  File::open(path).map_err(|source| Error::Open { path: path.display().to_string(), source })
}

/// A header-driven CSV reader with the given delimiter. Tab-separated sources
/// carry free text, so quoting is only honoured for commas.
pub(crate) fn csv_reader<R: io::Read>(reader: R, delimiter: u8) -> csv::Reader<R> {
  csv::ReaderBuilder::new()
    .delimiter(delimiter)
    .quoting(delimiter == b',')
    .trim(csv::Trim::All)
    .flexible(true)
    .from_reader(reader)
}

/// Trimmed, non-empty text or `None`.
pub(crate) fn text(s: Option<String>) -> Option<String> {
  s.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}
