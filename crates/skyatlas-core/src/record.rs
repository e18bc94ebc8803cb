//! Typed records produced by the catalog sources.
//!
//! These are the hand-off format between `skyatlas-sources` (which owns the
//! file layouts) and the build pipeline. Angles are radians, magnitudes use
//! [`MAGNITUDE_UNKNOWN`](crate::object::MAGNITUDE_UNKNOWN) for missing values.

use crate::{catalog::CatalogType, constellation::Constellation, object::ObjectType};

/// One row of the stellar catalog.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StarRecord {
  pub id:              i64,
  pub ra:              f64,
  pub dec:             f64,
  pub magnitude:       f64,
  pub pm_ra:           f64,
  pub pm_dec:          f64,
  /// Parsecs; 0 when unknown.
  pub distance:        f64,
  pub radial_velocity: f64,
  pub constellation:   Option<Constellation>,
  pub spectral_type:   Option<String>,
  pub bayer:           Option<String>,
  pub flamsteed:       Option<String>,
  pub hd:              Option<String>,
  pub hip:             Option<String>,
  pub hr:              Option<String>,
  pub proper_name:     Option<String>,
}

impl StarRecord {
  /// Whether the star carries a designation people actually use.
  pub fn has_common_designation(&self) -> bool {
    [&self.bayer, &self.flamsteed, &self.proper_name]
      .iter()
      .any(|d| d.as_deref().is_some_and(|s| !s.trim().is_empty()))
  }
}

/// One row of the deep-sky catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct DsoRecord {
  pub id:               i64,
  pub object_type:      ObjectType,
  pub ra:               f64,
  pub dec:              f64,
  /// Parsecs; 0 when unknown.
  pub distance:         f64,
  pub blue_magnitude:   f64,
  pub visual_magnitude: f64,
  pub constellation:    Option<Constellation>,
  pub spectral_type:    Option<String>,
  /// Sub-catalog designations in source column order.
  pub designations:     Vec<(CatalogType, String)>,
}

/// One `(catalog, designation, display name)` triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRecord {
  pub catalog: CatalogType,
  pub id:      String,
  pub name:    String,
}

/// One observing-list entry and the base-catalog object it stands for,
/// e.g. Dunlop 265 for NGC 2808.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XrefRecord {
  pub list:                CatalogType,
  pub designation:         String,
  pub backing:             CatalogType,
  pub backing_designation: String,
}

/// One row of the remote cluster query. Angles in degrees as SIMBAD returns
/// them; `pm_ra` includes the cos δ factor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClusterRow {
  pub oid:             i64,
  pub ra:              f64,
  pub dec:             f64,
  pub otype:           String,
  pub pm_ra:           Option<f64>,
  pub pm_dec:          Option<f64>,
  /// Milliarcseconds.
  pub parallax:        Option<f64>,
  pub radial_velocity: Option<f64>,
  pub v:               Option<f64>,
  pub b:               Option<f64>,
  pub j:               Option<f64>,
  pub h:               Option<f64>,
  /// `|`-separated identifier list.
  pub ids:             String,
}
