//! Error types for `skyatlas-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown catalog prefix: {0:?}")]
  UnknownCatalog(String),

  #[error("unknown catalog code: {0}")]
  UnknownCatalogCode(i32),

  #[error("unknown object type code: {0:?}")]
  UnknownObjectType(String),

  #[error("unknown constellation: {0:?}")]
  UnknownConstellation(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
