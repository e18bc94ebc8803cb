//! Error types for the skyatlas record producers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The source file could not be opened. Fatal for the run.
  #[error("cannot open {path}: {source}")]
  Open {
    path:   String,
    #[source]
    source: std::io::Error,
  },

  #[error("malformed row: {0}")]
  Csv(#[from] csv::Error),

  #[error("unrecognized record: {0}")]
  Core(#[from] skyatlas_core::Error),

  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("result table has no `{0}` column")]
  MissingColumn(&'static str),

  #[error("row {row}: `{column}` is not a {expected}")]
  BadCell {
    row:      usize,
    column:   &'static str,
    expected: &'static str,
  },
}

impl Error {
  /// Whether the error concerns one record rather than the source as a whole.
  pub fn is_record_error(&self) -> bool {
    match self {
      Self::Open { .. } | Self::MissingColumn(_) | Self::Json(_) => false,
      Self::Csv(e) => !matches!(e.kind(), csv::ErrorKind::Io(_)),
      Self::Core(_) | Self::BadCell { .. } => true,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
