//! CLUSTER phase: star clusters and associations from the remote query.
//!
//! Each row is reduced to its discoverer designation (`Cl Berkeley 59`) and,
//! when it has them, its NGC and IC references. The first reference (NGC
//! before IC) that already names an object in the store absorbs the
//! discoverer designation; everything else becomes a new object in the
//! cluster id range.

use std::future::Future;

use skyatlas_core::{
  constellation::Constellation,
  identifiers::ClusterIdentifiers,
  object::{CLUSTER_ID_BASE, MAGNITUDE_UNKNOWN, ObjectType, SkyObject},
  record::ClusterRow,
  store::ObjectStore,
};

use super::{PhaseSummary, triage};
use crate::{
  Error, Result,
  merge::{Attachments, MergeEngine, commit},
};

/// Anything that can answer the cluster query.
pub trait ClusterSource {
  fn fetch_clusters(
    &self,
  ) -> impl Future<Output = Result<Vec<skyatlas_sources::Result<ClusterRow>>>> + Send + '_;
}

/// Fixed rows, for offline builds and tests.
impl ClusterSource for Vec<ClusterRow> {
  async fn fetch_clusters(&self) -> Result<Vec<skyatlas_sources::Result<ClusterRow>>> {
    Ok(self.iter().cloned().map(Ok).collect())
  }
}

/// `V` when measured, otherwise the brightest of `B`, `J`, `H`.
pub fn cluster_magnitude(row: &ClusterRow) -> f64 {
  if let Some(v) = row.v {
    return v;
  }
  [row.b, row.j, row.h]
    .into_iter()
    .flatten()
    .fold(MAGNITUDE_UNKNOWN, f64::min)
}

pub fn to_object(id: i64, object_type: ObjectType, row: &ClusterRow) -> SkyObject {
  let (ra, dec) = (row.ra.to_radians(), row.dec.to_radians());
  let cos_dec = dec.cos();
  // SIMBAD's pmra is μα·cos δ.
  let pm_ra = row
    .pm_ra
    .map_or(0.0, |pm| if cos_dec.abs() > f64::EPSILON { pm / cos_dec } else { pm });

  SkyObject {
    id,
    object_type,
    ra,
    dec,
    magnitude: cluster_magnitude(row),
    pm_ra,
    pm_dec: row.pm_dec.unwrap_or(0.0),
    distance: row.parallax.filter(|p| *p > 0.0).map_or(0.0, |mas| 1000.0 / mas),
    radial_velocity: row.radial_velocity.unwrap_or(0.0),
    constellation: Constellation::containing(ra, dec),
    spectral_type: None,
  }
}

/// Run the phase. A failed query ends the phase with an error; the caller
/// decides whether that ends the run.
pub async fn run<S, C>(engine: MergeEngine<'_>, store: &S, source: &C) -> Result<PhaseSummary>
where
  S: ObjectStore,
  C: ClusterSource,
{
  tracing::info!("cluster phase: querying");
  let rows = source.fetch_clusters().await?;
  tracing::info!("cluster phase: {} rows", rows.len());

  let mut summary = PhaseSummary::default();
  let mut next_id = CLUSTER_ID_BASE;

  for row in rows {
    summary.read += 1;
    let row = match row {
      Ok(row) => row,
      Err(e) => {
        triage("clusters", e)?;
        summary.skipped += 1;
        continue;
      }
    };

    let Some(object_type) = ObjectType::from_simbad_otype(&row.otype) else {
      tracing::warn!(oid = row.oid, otype = %row.otype, "unexpected object type, skipping");
      summary.skipped += 1;
      continue;
    };

    let ids = ClusterIdentifiers::parse(&row.ids);
    let Some((discoverer, number)) = ids.discoverer else {
      match ids.unknown_discoverer {
        Some(name) => tracing::info!(oid = row.oid, "unknown discoverer {name:?}, skipping"),
        None => tracing::debug!(oid = row.oid, "no discoverer designation, skipping"),
      }
      summary.skipped += 1;
      continue;
    };

    let mut existing = None;
    for (catalog, designation) in &ids.backing {
      existing = store
        .find_object_by_name(*catalog, designation)
        .await
        .map_err(Error::store)?;
      if existing.is_some() {
        break;
      }
    }

    if let Some(id) = existing {
      let mut names = Attachments::new(id);
      engine.attach_names_for_identifier(&mut names, discoverer, &number, true);
      let committed = commit(store, None, names).await?;
      tracing::debug!(oid = row.oid, id, "{discoverer} {number} joins an existing object");
      summary.merged += 1;
      summary.names += committed.names_added;
      continue;
    }

    let id = next_id;
    let mut names = Attachments::new(id);
    engine.attach_names_for_identifier(&mut names, discoverer, &number, true);
    for (catalog, designation) in &ids.backing {
      engine.attach_names_for_identifier(&mut names, *catalog, designation, true);
    }

    let committed = commit(store, Some(to_object(id, object_type, &row)), names).await?;
    next_id += 1;
    if committed.object_inserted {
      summary.kept += 1;
    } else {
      summary.merged += 1;
    }
    summary.names += committed.names_added;
  }

  tracing::info!("cluster phase done: {summary}");
  Ok(summary)
}
