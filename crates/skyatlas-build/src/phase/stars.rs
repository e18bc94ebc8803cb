//! STAR phase: bright stars with a common designation.

use skyatlas_core::{
  catalog::CatalogType,
  constellation::Constellation,
  object::{DSO_ID_BASE, ObjectType, SkyObject, retained_spectral_type, stored_magnitude},
  record::StarRecord,
  store::ObjectStore,
};

use super::{PhaseSummary, triage};
use crate::{
  Result,
  merge::{Attachments, MergeEngine, commit},
};

/// Whether a stellar row is worth a store entry at all.
pub fn is_candidate(star: &StarRecord, magnitude_limit: f64) -> bool {
  star.id > 0 && star.magnitude <= magnitude_limit && star.has_common_designation()
}

pub fn to_object(star: &StarRecord) -> SkyObject {
  SkyObject {
    id:              star.id,
    object_type:     ObjectType::Star,
    ra:              star.ra,
    dec:             star.dec,
    magnitude:       stored_magnitude(ObjectType::Star, star.magnitude, star.magnitude),
    pm_ra:           star.pm_ra,
    pm_dec:          star.pm_dec,
    distance:        star.distance,
    radial_velocity: star.radial_velocity,
    constellation:   star
      .constellation
      .unwrap_or_else(|| Constellation::containing(star.ra, star.dec)),
    spectral_type:   retained_spectral_type(ObjectType::Star, star.spectral_type.as_deref()),
  }
}

pub async fn run<S, I>(
  engine: MergeEngine<'_>,
  store: &S,
  records: I,
  magnitude_limit: f64,
) -> Result<PhaseSummary>
where
  S: ObjectStore,
  I: IntoIterator<Item = skyatlas_sources::Result<StarRecord>>,
{
  tracing::info!("star phase: magnitude limit {magnitude_limit}");
  let mut summary = PhaseSummary::default();

  for record in records {
    summary.read += 1;
    let star = match record {
      Ok(star) => star,
      Err(e) => {
        triage("stars", e)?;
        summary.skipped += 1;
        continue;
      }
    };

    if !is_candidate(&star, magnitude_limit) {
      summary.skipped += 1;
      continue;
    }
    if star.id >= DSO_ID_BASE {
      tracing::warn!(id = star.id, "star id outside the stellar id range, skipping");
      summary.skipped += 1;
      continue;
    }

    let mut names = Attachments::new(star.id);
    for (catalog, designation) in [
      (CatalogType::Hd, &star.hd),
      (CatalogType::Hip, &star.hip),
      (CatalogType::Hr, &star.hr),
    ] {
      if let Some(d) = designation {
        engine.attach_names_for_identifier(&mut names, catalog, d, true);
      }
    }
    for (catalog, designation) in [
      (CatalogType::Bayer, &star.bayer),
      (CatalogType::Flamsteed, &star.flamsteed),
      (CatalogType::Name, &star.proper_name),
    ] {
      if let Some(d) = designation {
        names.push(catalog, d);
      }
    }

    let committed = commit(store, Some(to_object(&star)), names).await?;
    if committed.object_inserted {
      summary.kept += 1;
    } else {
      summary.merged += 1;
    }
    summary.names += committed.names_added;
  }

  tracing::info!("star phase done: {summary}");
  Ok(summary)
}
