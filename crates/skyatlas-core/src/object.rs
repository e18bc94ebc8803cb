//! Sky objects, their names, and the rules that derive stored attributes.
//!
//! An object row is written once and never updated. Everything learned about
//! an object afterwards arrives as an additional [`CatalogName`].

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

use crate::{Error, Result, catalog::CatalogType, constellation::Constellation};

/// Magnitude value meaning "not measured".
pub const MAGNITUDE_UNKNOWN: f64 = 99.0;

// ─── Id space ────────────────────────────────────────────────────────────────

/// First id synthesized for deep-sky records (`DSO_ID_BASE + source id`).
pub const DSO_ID_BASE: i64 = 1_000_000;

/// First id synthesized for clusters discovered by the remote query.
pub const CLUSTER_ID_BASE: i64 = 2_000_000;

/// The pipeline phase an id belongs to, derived purely from its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdSpace {
  Star,
  DeepSky,
  Cluster,
}

impl IdSpace {
  pub fn of(id: i64) -> Self {
    if id >= CLUSTER_ID_BASE {
      Self::Cluster
    } else if id >= DSO_ID_BASE {
      Self::DeepSky
    } else {
      Self::Star
    }
  }
}

// ─── Object type ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
#[repr(i32)]
pub enum ObjectType {
  Star = 0,
  Galaxy = 1,
  ActiveGalaxy = 2,
  RadioGalaxy = 3,
  InteractingGalaxy = 4,
  Quasar = 5,
  PossibleQuasar = 6,
  BlLacertae = 7,
  Blazar = 8,
  GalaxyCluster = 9,
  PartOfGalaxy = 10,
  OpenCluster = 11,
  GlobularCluster = 12,
  StarCluster = 13,
  StellarAssociation = 14,
  StarCloud = 15,
  ClusterWithNebulosity = 16,
  Nebula = 17,
  PlanetaryNebula = 18,
  PossiblePlanetaryNebula = 19,
  ProtoplanetaryNebula = 20,
  DarkNebula = 21,
  ReflectionNebula = 22,
  BipolarNebula = 23,
  EmissionNebula = 24,
  HiiRegion = 25,
  HAlphaRegion = 26,
  InterstellarMatter = 27,
  EmissionObject = 28,
  SupernovaRemnant = 29,
  SupernovaCandidate = 30,
  SupernovaRemnantCandidate = 31,
  MolecularCloud = 32,
  YoungStellarObject = 33,
  SymbioticStar = 34,
  EmissionLineStar = 35,
  Unknown = 36,
}

impl ObjectType {
  pub fn code(self) -> i32 { self as i32 }

  pub fn from_code(code: i32) -> Result<Self> {
    Self::iter()
      .find(|t| t.code() == code)
      .ok_or_else(|| Error::UnknownObjectType(code.to_string()))
  }

  /// Short code used by the deep-sky source's `type` column.
  pub fn source_code(self) -> &'static str {
    match self {
      Self::Star => "*",
      Self::Galaxy => "G",
      Self::ActiveGalaxy => "AGx",
      Self::RadioGalaxy => "RG",
      Self::InteractingGalaxy => "IG",
      Self::Quasar => "QSO",
      Self::PossibleQuasar => "PoQSO",
      Self::BlLacertae => "BLL",
      Self::Blazar => "BLA",
      Self::GalaxyCluster => "GxCl",
      Self::PartOfGalaxy => "PartOfG",
      Self::OpenCluster => "OC",
      Self::GlobularCluster => "GC",
      Self::StarCluster => "Cl",
      Self::StellarAssociation => "SA",
      Self::StarCloud => "SC",
      Self::ClusterWithNebulosity => "Cl+N",
      Self::Nebula => "N",
      Self::PlanetaryNebula => "PN",
      Self::PossiblePlanetaryNebula => "PoPN",
      Self::ProtoplanetaryNebula => "PPN",
      Self::DarkNebula => "DN",
      Self::ReflectionNebula => "RN",
      Self::BipolarNebula => "BN",
      Self::EmissionNebula => "EN",
      Self::HiiRegion => "HII",
      Self::HAlphaRegion => "HA",
      Self::InterstellarMatter => "ISM",
      Self::EmissionObject => "EMO",
      Self::SupernovaRemnant => "SNR",
      Self::SupernovaCandidate => "SNC",
      Self::SupernovaRemnantCandidate => "SNRC",
      Self::MolecularCloud => "MoC",
      Self::YoungStellarObject => "YSO",
      Self::SymbioticStar => "SyS",
      Self::EmissionLineStar => "ELS",
      Self::Unknown => "?",
    }
  }

  pub fn from_source_code(code: &str) -> Result<Self> {
    let code = code.trim();
    Self::iter()
      .find(|t| t.source_code().eq_ignore_ascii_case(code))
      .ok_or_else(|| Error::UnknownObjectType(code.to_owned()))
  }

  /// Map a SIMBAD `otype` to the cluster types the remote query asks for.
  pub fn from_simbad_otype(otype: &str) -> Option<Self> {
    match otype.trim() {
      "OpC" => Some(Self::OpenCluster),
      "GlC" => Some(Self::GlobularCluster),
      "Cl*" => Some(Self::StarCluster),
      "As*" => Some(Self::StellarAssociation),
      _ => None,
    }
  }

  /// Types whose records may carry a meaningful spectral classification.
  pub fn keeps_spectral_type(self) -> bool {
    matches!(
      self,
      Self::Star | Self::PlanetaryNebula | Self::SymbioticStar | Self::EmissionLineStar
    )
  }
}

// ─── Rows ────────────────────────────────────────────────────────────────────

/// One row of the `objects` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkyObject {
  pub id:              i64,
  pub object_type:     ObjectType,
  /// Right ascension, radians (J2000).
  pub ra:              f64,
  /// Declination, radians (J2000).
  pub dec:             f64,
  pub magnitude:       f64,
  /// Milliarcseconds per year.
  pub pm_ra:           f64,
  pub pm_dec:          f64,
  /// Parsecs; 0 when unknown.
  pub distance:        f64,
  /// Kilometres per second.
  pub radial_velocity: f64,
  pub constellation:   Constellation,
  pub spectral_type:   Option<String>,
}

/// One row of the `names` table. `name` compares case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogName {
  pub object_id: i64,
  pub catalog:   CatalogType,
  pub name:      String,
}

impl CatalogName {
  pub fn new(object_id: i64, catalog: CatalogType, name: impl Into<String>) -> Self {
    Self { object_id, catalog, name: name.into() }
  }
}

// ─── Derivations ─────────────────────────────────────────────────────────────

pub fn is_magnitude_known(m: f64) -> bool { m < MAGNITUDE_UNKNOWN }

/// Magnitude to store for an object of `object_type`.
///
/// Dark nebulae are catalogued by opacity, so their scale is flipped around
/// the sentinel. Everything else keeps the brighter of the two bands.
pub fn stored_magnitude(object_type: ObjectType, visual: f64, blue: f64) -> f64 {
  if object_type == ObjectType::DarkNebula {
    if is_magnitude_known(visual) {
      MAGNITUDE_UNKNOWN - visual
    } else {
      MAGNITUDE_UNKNOWN
    }
  } else {
    visual.min(blue).min(MAGNITUDE_UNKNOWN)
  }
}

/// Spectral classification to store, if any.
pub fn retained_spectral_type(object_type: ObjectType, spectral: Option<&str>) -> Option<String> {
  let s = spectral?.trim();
  let first = s.chars().next()?;
  if first == '-' || first.is_ascii_digit() || !object_type.keeps_spectral_type() {
    return None;
  }
  Some(s.to_owned())
}
