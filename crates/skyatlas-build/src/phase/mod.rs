//! The three build phases. Each consumes one source, record by record, and
//! reports what it did in a [`PhaseSummary`].

pub mod clusters;
pub mod dso;
pub mod stars;

use std::fmt;

/// Per-phase counters, logged when the phase ends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PhaseSummary {
  /// Records taken from the source, including unreadable ones.
  pub read:    usize,
  /// Records that produced a new object.
  pub kept:    usize,
  /// Records whose names went to an object that already existed.
  pub merged:  usize,
  /// Records filtered out or not understood.
  pub skipped: usize,
  /// Rows added to the `names` table.
  pub names:   usize,
}

impl fmt::Display for PhaseSummary {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "read {}, kept {}, merged {}, skipped {}, names attached {}",
      self.read, self.kept, self.merged, self.skipped, self.names
    )
  }
}

/// Decide what an unreadable record means for the phase: per-record problems
/// are logged and skipped, anything else ends the run.
pub(crate) fn triage(phase: &str, err: skyatlas_sources::Error) -> crate::Result<()> {
  if err.is_record_error() {
    tracing::warn!(phase, error = %err, "skipping unreadable record");
    Ok(())
  } else {
    Err(err.into())
  }
}
