//! Error types for the build pipeline.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A catalog source could not be read.
  #[error("source error: {0}")]
  Source(#[from] skyatlas_sources::Error),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("cluster query failed: {0}")]
  Query(#[from] reqwest::Error),

  #[error("cluster query returned {status}")]
  QueryStatus { status: reqwest::StatusCode },

  #[error("invalid configuration: {0}")]
  Config(String),
}

impl Error {
  pub(crate) fn store<E: std::error::Error + Send + Sync + 'static>(e: E) -> Self {
    Self::Store(Box::new(e))
  }

  /// Whether the error came from asking for or decoding remote data, as
  /// opposed to the local store.
  pub fn is_query_failure(&self) -> bool {
    matches!(self, Self::Query(_) | Self::QueryStatus { .. } | Self::Source(_))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
