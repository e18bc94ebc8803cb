//! The three-phase driver.
//!
//! Phases run strictly one after another against a single store: STAR, then
//! DSO, then CLUSTER. Once an object row exists nothing rewrites it; later
//! phases can only add names.

use chrono::Utc;
use skyatlas_core::{
  names::NameIndex,
  store::{BuildInfo, ObjectStore},
  xref::CrossReferences,
};
use skyatlas_sources::{dso, names, stars};

use crate::{
  BuildConfig, Error, Result,
  merge::MergeEngine,
  phase::{self, PhaseSummary, clusters::ClusterSource},
};

/// Counters for a finished build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
  pub stars:    PhaseSummary,
  pub dso:      PhaseSummary,
  /// `None` when the cluster phase was disabled or its query failed.
  pub clusters: Option<PhaseSummary>,
  pub objects:  u64,
  pub names:    u64,
}

/// The lookup tables every phase shares.
pub struct Pipeline {
  names: NameIndex,
  xrefs: CrossReferences,
}

impl Pipeline {
  pub fn new(names: NameIndex, xrefs: CrossReferences) -> Self { Self { names, xrefs } }

  /// Read the names-reference file and pair it with the built-in
  /// cross-reference lists, extended by `xref_path` when set.
  pub fn load(config: &BuildConfig) -> Result<Self> {
    let mut records = Vec::new();
    for record in names::open(&config.names_path)? {
      match record {
        Ok(r) => records.push(r),
        Err(e) => phase::triage("names", e)?,
      }
    }
    let names = NameIndex::from_records(records);

    let mut xrefs = CrossReferences::builtin();
    if let Some(path) = &config.xref_path {
      let mut extra = Vec::new();
      for record in skyatlas_sources::xrefs::open(path)? {
        match record {
          Ok(r) => extra.push(r),
          Err(e) => phase::triage("xrefs", e)?,
        }
      }
      let added = xrefs.extend(extra);
      tracing::info!("added {added} cross-references from {path:?}");
    }
    tracing::info!(
      "loaded {} names and {} cross-references",
      names.len(),
      xrefs.len()
    );
    Ok(Self::new(names, xrefs))
  }

  pub fn engine(&self) -> MergeEngine<'_> { MergeEngine::new(&self.names, &self.xrefs) }

  /// Run every phase into `store`, record the build metadata and compact.
  ///
  /// `clusters` is `None` when the cluster phase should not run.
  pub async fn run<S, C>(
    &self,
    config: &BuildConfig,
    store: &S,
    clusters: Option<&C>,
  ) -> Result<BuildReport>
  where
    S: ObjectStore,
    C: ClusterSource,
  {
    let engine = self.engine();

    let star_records = stars::open(&config.stars_path)?;
    let stars =
      phase::stars::run(engine, store, star_records, config.star_magnitude_limit).await?;

    let dso_records = dso::open(&config.dso_path)?;
    let dso = phase::dso::run(engine, store, dso_records).await?;

    let clusters = match clusters {
      None => {
        tracing::info!("cluster phase disabled");
        None
      }
      Some(source) => match phase::clusters::run(engine, store, source).await {
        Ok(summary) => Some(summary),
        Err(e) if e.is_query_failure() && !config.cluster.required => {
          tracing::warn!(error = %e, "cluster phase abandoned");
          None
        }
        Err(e) => return Err(e),
      },
    };

    let objects = store.count_objects().await.map_err(Error::store)?;
    let names = store.count_names().await.map_err(Error::store)?;

    let info = [
      ("version", env!("CARGO_PKG_VERSION").to_owned()),
      ("built_at", Utc::now().to_rfc3339()),
      ("objects", objects.to_string()),
      ("names", names.to_string()),
      ("clusters", clusters.is_some().to_string()),
    ];
    for (key, value) in info {
      store
        .put_build_info(BuildInfo { key: key.to_owned(), value })
        .await
        .map_err(Error::store)?;
    }

    tracing::info!("compacting store");
    store.finish().await.map_err(Error::store)?;
    tracing::info!("build complete: {objects} objects, {names} names");

    Ok(BuildReport { stars, dso, clusters, objects, names })
  }
}
