//! The 88 IAU constellations and the boundary lookup that places a position
//! inside one of them.
//!
//! Boundaries are those of Delporte (1930) as tabulated by Roman (1987): every
//! region is a band of constant B1875 declination spanning a range of B1875
//! right ascension. A J2000 position is precessed to B1875 and the first row
//! whose lower declination and RA range contain it names the constellation.

mod bounds;

use std::{f64::consts::PI, fmt};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// IAU abbreviations, alphabetical by full name. The index is what gets
/// stored.
pub const ABBREVIATIONS: [&str; 88] = [
  "And", "Ant", "Aps", "Aqr", "Aql", "Ara", "Ari", "Aur", "Boo", "Cae", "Cam", "Cnc", "CVn", "CMa",
  "CMi", "Cap", "Car", "Cas", "Cen", "Cep", "Cet", "Cha", "Cir", "Col", "Com", "CrA", "CrB", "Crv",
  "Crt", "Cru", "Cyg", "Del", "Dor", "Dra", "Equ", "Eri", "For", "Gem", "Gru", "Her", "Hor", "Hya",
  "Hyi", "Ind", "Lac", "Leo", "LMi", "Lep", "Lib", "Lup", "Lyn", "Lyr", "Men", "Mic", "Mon", "Mus",
  "Nor", "Oct", "Oph", "Ori", "Pav", "Peg", "Per", "Phe", "Pic", "Psc", "PsA", "Pup", "Pyx", "Ret",
  "Sge", "Sgr", "Sco", "Scl", "Sct", "Ser", "Sex", "Tau", "Tel", "Tri", "TrA", "Tuc", "UMa", "UMi",
  "Vel", "Vir", "Vol", "Vul",
];

/// Index into [`ABBREVIATIONS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Constellation(u8);

impl Constellation {
  pub fn from_index(index: u8) -> Option<Self> {
    ((index as usize) < ABBREVIATIONS.len()).then_some(Self(index))
  }

  /// Case-sensitive first, then case-insensitive; `"CMA"` is accepted.
  pub fn from_abbrev(abbrev: &str) -> Result<Self> {
    let abbrev = abbrev.trim();
    ABBREVIATIONS
      .iter()
      .position(|a| *a == abbrev)
      .or_else(|| ABBREVIATIONS.iter().position(|a| a.eq_ignore_ascii_case(abbrev)))
      .map(|i| Self(i as u8))
      .ok_or_else(|| Error::UnknownConstellation(abbrev.to_owned()))
  }

  pub fn index(self) -> u8 { self.0 }

  pub fn abbrev(self) -> &'static str { ABBREVIATIONS[self.0 as usize] }

  /// Constellation containing the J2000 position (`ra`, `dec` in radians).
  pub fn containing(ra: f64, dec: f64) -> Self {
    let (ra_1875, dec_1875) = precess_j2000_to_b1875(ra, dec);
    let ra_h = ra_1875.rem_euclid(2.0 * PI) * 12.0 / PI;
    let dec_d = dec_1875.to_degrees();

    bounds::BOUNDARIES
      .iter()
      .find(|b| dec_d >= b.dec_low && ra_h >= b.ra_low && ra_h < b.ra_high)
      .map(|b| b.constellation)
      // The last band covers the whole south cap, so this is unreachable.
      .unwrap_or(Self::OCTANS)
  }

  const OCTANS: Self = Self(57);
}

impl fmt::Display for Constellation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.abbrev()) }
}

// ─── Precession ──────────────────────────────────────────────────────────────

const ARCSEC: f64 = PI / (180.0 * 3600.0);

/// Julian centuries from J2000.0 to B1875.0 (JD 2405889.25855).
const T_B1875: f64 = (2_405_889.258_55 - 2_451_545.0) / 36_525.0;

/// Rigorous IAU 1976 precession from J2000.0 to B1875.0.
fn precess_j2000_to_b1875(ra: f64, dec: f64) -> (f64, f64) {
  let t = T_B1875;
  let zeta = (2306.2181 * t + 0.30188 * t * t + 0.017998 * t * t * t) * ARCSEC;
  let z = (2306.2181 * t + 1.09468 * t * t + 0.018203 * t * t * t) * ARCSEC;
  let theta = (2004.3109 * t - 0.42665 * t * t - 0.041833 * t * t * t) * ARCSEC;

  let a = dec.cos() * (ra + zeta).sin();
  let b = theta.cos() * dec.cos() * (ra + zeta).cos() - theta.sin() * dec.sin();
  let c = theta.sin() * dec.cos() * (ra + zeta).cos() + theta.cos() * dec.sin();

  (a.atan2(b) + z, c.clamp(-1.0, 1.0).asin())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn at(ra_h: f64, dec_d: f64) -> &'static str {
    Constellation::containing(ra_h * PI / 12.0, dec_d.to_radians()).abbrev()
  }

  #[test]
  fn abbreviation_table() {
    assert_eq!(ABBREVIATIONS.len(), 88);
    assert_eq!(Constellation::OCTANS.abbrev(), "Oct");
    assert_eq!(Constellation::from_abbrev("CMa").unwrap().abbrev(), "CMa");
    assert_eq!(Constellation::from_abbrev("cma").unwrap().abbrev(), "CMa");
    assert!(Constellation::from_abbrev("Xyz").is_err());
    assert!(Constellation::from_index(88).is_none());
  }

  #[test]
  fn bright_stars_land_in_their_constellations() {
    assert_eq!(at(2.530, 89.264), "UMi"); // Polaris
    assert_eq!(at(6.752, -16.716), "CMa"); // Sirius
    assert_eq!(at(18.616, 38.784), "Lyr"); // Vega
    assert_eq!(at(5.919, 7.407), "Ori"); // Betelgeuse
    assert_eq!(at(12.443, -63.099), "Cru"); // Acrux
    assert_eq!(at(21.146, -88.956), "Oct"); // σ Oct
  }

  #[test]
  fn deep_sky_objects_land_in_their_constellations() {
    assert_eq!(at(0.712, 41.269), "And"); // M31
    assert_eq!(at(0.248, -39.197), "Scl"); // NGC 55
  }

  #[test]
  fn precession_moves_ra_backwards() {
    let (ra, dec) = precess_j2000_to_b1875(0.0, 0.0);
    // 125 years of general precession is about 1.74° in longitude.
    assert!(ra.to_degrees() < -1.5 && ra.to_degrees() > -1.7, "{}", ra.to_degrees());
    assert!(dec.to_degrees() < -0.6 && dec.to_degrees() > -0.8, "{}", dec.to_degrees());
  }
}
