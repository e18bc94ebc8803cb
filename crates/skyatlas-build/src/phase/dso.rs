//! DSO phase: deep-sky records, kept only when at least one name resolves.

use skyatlas_core::{
  catalog::CatalogType,
  constellation::Constellation,
  object::{DSO_ID_BASE, ObjectType, SkyObject, retained_spectral_type, stored_magnitude},
  record::DsoRecord,
  store::ObjectStore,
};

use super::{PhaseSummary, triage};
use crate::{
  Result,
  merge::{Attachments, MergeEngine, commit},
};

/// Store id for a deep-sky source id, if it fits the deep-sky id range.
pub fn object_id(source_id: i64) -> Option<i64> {
  (0..DSO_ID_BASE).contains(&source_id).then(|| DSO_ID_BASE + source_id)
}

pub fn to_object(id: i64, dso: &DsoRecord) -> SkyObject {
  SkyObject {
    id,
    object_type:     dso.object_type,
    ra:              dso.ra,
    dec:             dso.dec,
    magnitude:       stored_magnitude(dso.object_type, dso.visual_magnitude, dso.blue_magnitude),
    pm_ra:           0.0,
    pm_dec:          0.0,
    distance:        dso.distance,
    radial_velocity: 0.0,
    constellation:   dso
      .constellation
      .unwrap_or_else(|| Constellation::containing(dso.ra, dso.dec)),
    spectral_type:   retained_spectral_type(dso.object_type, dso.spectral_type.as_deref()),
  }
}

pub async fn run<S, I>(engine: MergeEngine<'_>, store: &S, records: I) -> Result<PhaseSummary>
where
  S: ObjectStore,
  I: IntoIterator<Item = skyatlas_sources::Result<DsoRecord>>,
{
  tracing::info!("deep-sky phase");
  let mut summary = PhaseSummary::default();

  for record in records {
    summary.read += 1;
    let dso = match record {
      Ok(dso) => dso,
      Err(e) => {
        triage("dso", e)?;
        summary.skipped += 1;
        continue;
      }
    };

    if dso.object_type == ObjectType::Unknown {
      tracing::warn!(source_id = dso.id, "deep-sky record of unknown type, skipping");
      summary.skipped += 1;
      continue;
    }
    let Some(id) = object_id(dso.id) else {
      tracing::warn!(source_id = dso.id, "deep-sky id out of range, skipping");
      summary.skipped += 1;
      continue;
    };

    let mut names = Attachments::new(id);
    let mut attached =
      engine.attach_names_for_identifier(&mut names, CatalogType::Internal, &dso.id.to_string(), true);
    for (catalog, designation) in &dso.designations {
      attached |= engine.attach_names_for_identifier(&mut names, *catalog, designation, true);
    }

    if !attached {
      tracing::debug!(source_id = dso.id, "no names resolved, dropping record");
      summary.skipped += 1;
      continue;
    }

    let committed = commit(store, Some(to_object(id, &dso)), names).await?;
    if committed.object_inserted {
      summary.kept += 1;
    } else {
      summary.merged += 1;
    }
    summary.names += committed.names_added;
  }

  tracing::info!("deep-sky phase done: {summary}");
  Ok(summary)
}
