//! Conversions between domain types and the integer/real columns stored in
//! SQLite.
//!
//! Enums are stored by their stable integer codes, never by name, so readers in
//! other languages only need the code tables.

use skyatlas_core::{
  catalog::CatalogType,
  constellation::Constellation,
  object::{CatalogName, ObjectType, SkyObject},
};

use crate::Result;

// ─── Constellation ───────────────────────────────────────────────────────────

pub fn encode_constellation(c: Constellation) -> i64 { i64::from(c.index()) }

pub fn decode_constellation(index: i64) -> Result<Constellation> {
  u8::try_from(index)
    .ok()
    .and_then(Constellation::from_index)
    .ok_or_else(|| skyatlas_core::Error::UnknownConstellation(index.to_string()).into())
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from an `objects` row.
pub struct RawObject {
  pub id:              i64,
  pub object_type:     i32,
  pub ra:              f64,
  pub dec:             f64,
  pub magnitude:       f64,
  pub pm_ra:           f64,
  pub pm_dec:          f64,
  pub distance:        f64,
  pub radial_velocity: f64,
  pub constellation:   i64,
  pub spectral_type:   Option<String>,
}

impl RawObject {
  pub const COLUMNS: &'static str = "id, object_type, ra, dec, magnitude, pm_ra, pm_dec, \
                                     distance, radial_velocity, constellation, spectral_type";

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:              row.get(0)?,
      object_type:     row.get(1)?,
      ra:              row.get(2)?,
      dec:             row.get(3)?,
      magnitude:       row.get(4)?,
      pm_ra:           row.get(5)?,
      pm_dec:          row.get(6)?,
      distance:        row.get(7)?,
      radial_velocity: row.get(8)?,
      constellation:   row.get(9)?,
      spectral_type:   row.get(10)?,
    })
  }

  pub fn from_object(o: &SkyObject) -> Self {
    Self {
      id:              o.id,
      object_type:     o.object_type.code(),
      ra:              o.ra,
      dec:             o.dec,
      magnitude:       o.magnitude,
      pm_ra:           o.pm_ra,
      pm_dec:          o.pm_dec,
      distance:        o.distance,
      radial_velocity: o.radial_velocity,
      constellation:   encode_constellation(o.constellation),
      spectral_type:   o.spectral_type.clone(),
    }
  }

  pub fn into_object(self) -> Result<SkyObject> {
    Ok(SkyObject {
      id:              self.id,
      object_type:     ObjectType::from_code(self.object_type)?,
      ra:              self.ra,
      dec:             self.dec,
      magnitude:       self.magnitude,
      pm_ra:           self.pm_ra,
      pm_dec:          self.pm_dec,
      distance:        self.distance,
      radial_velocity: self.radial_velocity,
      constellation:   decode_constellation(self.constellation)?,
      spectral_type:   self.spectral_type,
    })
  }
}

/// Raw values read directly from a `names` row.
pub struct RawName {
  pub object_id: i64,
  pub catalog:   i32,
  pub name:      String,
}

impl RawName {
  pub fn into_name(self) -> Result<CatalogName> {
    Ok(CatalogName {
      object_id: self.object_id,
      catalog:   CatalogType::from_code(self.catalog)?,
      name:      self.name,
    })
  }
}
