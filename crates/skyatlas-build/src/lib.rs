//! The skyatlas build pipeline.
//!
//! Rebuilds the object database from scratch: stars, then deep-sky objects,
//! then clusters from SIMBAD, all written through any [`ObjectStore`]
//! (`skyatlas_core::store::ObjectStore`).

pub mod error;
pub mod merge;
pub mod phase;
pub mod pipeline;
pub mod simbad;

pub use error::{Error, Result};
pub use pipeline::{BuildReport, Pipeline};

use std::path::PathBuf;

use serde::Deserialize;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Build configuration, deserialised from `skyatlas.toml` and `SKYATLAS_*`
/// environment variables.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BuildConfig {
  /// The database file. Deleted and rebuilt on every run.
  pub output_path:          PathBuf,
  pub stars_path:           PathBuf,
  pub dso_path:             PathBuf,
  pub names_path:           PathBuf,
  /// Extra observing-list rows merged over the built-in tables.
  pub xref_path:            Option<PathBuf>,
  /// Faintest star kept.
  pub star_magnitude_limit: f64,
  pub cluster:              ClusterConfig,
}

impl Default for BuildConfig {
  fn default() -> Self {
    Self {
      output_path:          PathBuf::from("skyatlas.db"),
      stars_path:           PathBuf::from("data/hygdata.csv"),
      dso_path:             PathBuf::from("data/catalog.tsv"),
      names_path:           PathBuf::from("data/names.tsv"),
      xref_path:            None,
      star_magnitude_limit: 7.0,
      cluster:              ClusterConfig::default(),
    }
  }
}

impl BuildConfig {
  pub fn validate(&self) -> Result<()> {
    if !self.star_magnitude_limit.is_finite() {
      return Err(Error::Config("star_magnitude_limit must be a number".into()));
    }
    if self.cluster.enabled && self.cluster.endpoint.trim().is_empty() {
      return Err(Error::Config("cluster.endpoint is empty".into()));
    }
    Ok(())
  }
}

/// The remote cluster query.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ClusterConfig {
  pub enabled:      bool,
  /// Fail the run when the query fails instead of skipping the phase.
  pub required:     bool,
  /// SIMBAD TAP `sync` endpoint.
  pub endpoint:     String,
  pub timeout_secs: u64,
}

impl Default for ClusterConfig {
  fn default() -> Self {
    Self {
      enabled:      true,
      required:     false,
      endpoint:     "https://simbad.cds.unistra.fr/simbad/sim-tap/sync".into(),
      timeout_secs: 120,
    }
  }
}

#[cfg(test)]
mod tests;
