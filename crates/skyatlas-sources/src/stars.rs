//! The stellar catalog: a HYG-style comma-separated file with a header row.
//!
//! Only the columns below are read; anything else in the file is ignored.
//!
//! | column   | meaning                                  |
//! |----------|------------------------------------------|
//! | `id`     | record number, becomes the object id     |
//! | `hip`    | Hipparcos number                         |
//! | `hd`     | Henry Draper number                      |
//! | `hr`     | Harvard Revised (Yale BSC) number        |
//! | `proper` | proper name                              |
//! | `rarad`  | J2000 right ascension, radians           |
//! | `decrad` | J2000 declination, radians               |
//! | `dist`   | parsecs; 100000 marks an unknown value   |
//! | `pmra`   | mas/yr                                   |
//! | `pmdec`  | mas/yr                                   |
//! | `rv`     | km/s                                     |
//! | `mag`    | apparent visual magnitude                |
//! | `spect`  | spectral type                            |
//! | `bayer`  | Bayer letter, e.g. `Alp`                 |
//! | `flam`   | Flamsteed number                         |
//! | `con`    | IAU constellation abbreviation           |

use std::{fs::File, io, path::Path};

use serde::Deserialize;
use skyatlas_core::{
  constellation::Constellation,
  object::MAGNITUDE_UNKNOWN,
  record::StarRecord,
};

use crate::{Error, Result, csv_reader, open_file, text};

/// Distances at or beyond this many parsecs are placeholders.
const DISTANCE_UNKNOWN: f64 = 100_000.0;

#[derive(Debug, Deserialize)]
struct RawStar {
  id:     i64,
  hip:    Option<String>,
  hd:     Option<String>,
  hr:     Option<String>,
  proper: Option<String>,
  rarad:  f64,
  decrad: f64,
  dist:   Option<f64>,
  pmra:   Option<f64>,
  pmdec:  Option<f64>,
  rv:     Option<f64>,
  mag:    Option<f64>,
  spect:  Option<String>,
  bayer:  Option<String>,
  flam:   Option<String>,
  con:    Option<String>,
}

impl RawStar {
  fn into_record(self) -> StarRecord {
    StarRecord {
      id:              self.id,
      ra:              self.rarad,
      dec:             self.decrad,
      magnitude:       self.mag.unwrap_or(MAGNITUDE_UNKNOWN),
      pm_ra:           self.pmra.unwrap_or(0.0),
      pm_dec:          self.pmdec.unwrap_or(0.0),
      distance:        self
        .dist
        .filter(|d| *d > 0.0 && *d < DISTANCE_UNKNOWN)
        .unwrap_or(0.0),
      radial_velocity: self.rv.unwrap_or(0.0),
      constellation:   text(self.con).and_then(|c| Constellation::from_abbrev(&c).ok()),
      spectral_type:   text(self.spect),
      bayer:           text(self.bayer),
      flamsteed:       text(self.flam),
      hd:              text(self.hd),
      hip:             text(self.hip),
      hr:              text(self.hr),
      proper_name:     text(self.proper),
    }
  }
}

/// Lazy sequence of [`StarRecord`]s.
pub struct StarReader<R> {
  rows: csv::DeserializeRecordsIntoIter<R, RawStar>,
}

/// Open the stellar catalog at `path`.
pub fn open(path: impl AsRef<Path>) -> Result<StarReader<File>> {
  Ok(from_reader(open_file(path.as_ref())?))
}

pub fn from_reader<R: io::Read>(reader: R) -> StarReader<R> {
  StarReader { rows: csv_reader(reader, b',').into_deserialize() }
}

impl<R: io::Read> Iterator for StarReader<R> {
  type Item = Result<StarRecord>;

  fn next(&mut self) -> Option<Self::Item> {
    let row = self.rows.next()?;
    Some(row.map(RawStar::into_record).map_err(Error::from))
  }
}
