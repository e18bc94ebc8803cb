//! The deep-sky catalog: a tab-separated file with a header row.
//!
//! Positions are J2000 degrees, distances kiloparsecs, magnitudes use 99 for
//! "not measured". Every sub-catalog column may be empty.

use std::{fs::File, io, path::Path};

use serde::Deserialize;
use skyatlas_core::{
  catalog::CatalogType,
  constellation::Constellation,
  object::{MAGNITUDE_UNKNOWN, ObjectType},
  record::DsoRecord,
};

use crate::{Result, csv_reader, open_file, text};

#[derive(Debug, Deserialize)]
struct RawDso {
  id:    i64,
  #[serde(rename = "type")]
  kind:  String,
  ra:    f64,
  dec:   f64,
  bmag:  Option<f64>,
  vmag:  Option<f64>,
  dist:  Option<f64>,
  con:   Option<String>,
  spect: Option<String>,

  ngc:  Option<String>,
  ic:   Option<String>,
  m:    Option<String>,
  c:    Option<String>,
  b:    Option<String>,
  sh2:  Option<String>,
  vdb:  Option<String>,
  rcw:  Option<String>,
  ldn:  Option<String>,
  lbn:  Option<String>,
  cr:   Option<String>,
  mel:  Option<String>,
  pgc:  Option<String>,
  ugc:  Option<String>,
  ced:  Option<String>,
  arp:  Option<String>,
  vv:   Option<String>,
  pk:   Option<String>,
  png:  Option<String>,
  snrg: Option<String>,
  aco:  Option<String>,
  eso:  Option<String>,
  dwb:  Option<String>,
  tr:   Option<String>,
  st:   Option<String>,
  ru:   Option<String>,
}

impl RawDso {
  fn into_record(self) -> Result<DsoRecord> {
    let object_type = ObjectType::from_source_code(&self.kind)?;

    let designations = [
      (CatalogType::Ngc, self.ngc),
      (CatalogType::Ic, self.ic),
      (CatalogType::Messier, self.m),
      (CatalogType::Caldwell, self.c),
      (CatalogType::Barnard, self.b),
      (CatalogType::Sharpless, self.sh2),
      (CatalogType::VanDenBergh, self.vdb),
      (CatalogType::Rcw, self.rcw),
      (CatalogType::Ldn, self.ldn),
      (CatalogType::Lbn, self.lbn),
      (CatalogType::Collinder, self.cr),
      (CatalogType::Melotte, self.mel),
      (CatalogType::Pgc, self.pgc),
      (CatalogType::Ugc, self.ugc),
      (CatalogType::Cederblad, self.ced),
      (CatalogType::Arp, self.arp),
      (CatalogType::Vv, self.vv),
      (CatalogType::Pk, self.pk),
      (CatalogType::Png, self.png),
      (CatalogType::Snrg, self.snrg),
      (CatalogType::Abell, self.aco),
      (CatalogType::Eso, self.eso),
      (CatalogType::Dwb, self.dwb),
      (CatalogType::Trumpler, self.tr),
      (CatalogType::Stock, self.st),
      (CatalogType::Ruprecht, self.ru),
    ]
    .into_iter()
    .filter_map(|(catalog, d)| text(d).map(|d| (catalog, d)))
    .collect();

    Ok(DsoRecord {
      id: self.id,
      object_type,
      ra: self.ra.to_radians(),
      dec: self.dec.to_radians(),
      distance: self.dist.filter(|d| *d > 0.0).map_or(0.0, |kpc| kpc * 1000.0),
      blue_magnitude: self.bmag.unwrap_or(MAGNITUDE_UNKNOWN),
      visual_magnitude: self.vmag.unwrap_or(MAGNITUDE_UNKNOWN),
      constellation: text(self.con).and_then(|c| Constellation::from_abbrev(&c).ok()),
      spectral_type: text(self.spect),
      designations,
    })
  }
}

/// Lazy sequence of [`DsoRecord`]s.
pub struct DsoReader<R> {
  rows: csv::DeserializeRecordsIntoIter<R, RawDso>,
}

/// Open the deep-sky catalog at `path`.
pub fn open(path: impl AsRef<Path>) -> Result<DsoReader<File>> {
  Ok(from_reader(open_file(path.as_ref())?))
}

pub fn from_reader<R: io::Read>(reader: R) -> DsoReader<R> {
  DsoReader { rows: csv_reader(reader, b'\t').into_deserialize() }
}

impl<R: io::Read> Iterator for DsoReader<R> {
  type Item = Result<DsoRecord>;

  fn next(&mut self) -> Option<Self::Item> {
    let row = self.rows.next()?;
    Some(row.map_err(Into::into).and_then(RawDso::into_record))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Error;

  const HEADER: &str = "id\ttype\tra\tdec\tbmag\tvmag\tdist\tcon\tspect\tngc\tic\tm\tc\tb\tsh2\tvdb\t\
                        rcw\tldn\tlbn\tcr\tmel\tpgc\tugc\tced\tarp\tvv\tpk\tpng\tsnrg\taco\teso\t\
                        dwb\ttr\tst\tru\n";

  /// A row with the given leading fields and sub-catalog columns set by name.
  fn row(lead: &str, set: &[(&str, &str)]) -> String {
    let cols = HEADER.trim_end().split('\t').skip(9);
    let tail: Vec<&str> = cols
      .map(|c| set.iter().find(|(k, _)| *k == c).map_or("", |(_, v)| *v))
      .collect();
    format!("{lead}\t{}\n", tail.join("\t"))
  }

  fn read(rows: &[String]) -> Vec<Result<DsoRecord>> {
    from_reader(format!("{HEADER}{}", rows.concat()).as_bytes()).collect()
  }

  #[test]
  fn reads_designations_in_column_order() {
    let rows = read(&[row(
      "40\tG\t10.684708\t41.26875\t4.36\t3.44\t0.78\tAnd\t",
      &[("ngc", "224"), ("m", "31"), ("pgc", "2557"), ("ugc", "454")],
    )]);
    let dso = rows.into_iter().next().unwrap().unwrap();

    assert_eq!(dso.id, 40);
    assert_eq!(dso.object_type, ObjectType::Galaxy);
    assert!((dso.ra - 10.684708_f64.to_radians()).abs() < 1e-12);
    assert_eq!(dso.distance, 780.0);
    assert_eq!(dso.blue_magnitude, 4.36);
    assert_eq!(dso.visual_magnitude, 3.44);
    assert_eq!(dso.constellation.map(|c| c.abbrev()), Some("And"));
    assert_eq!(dso.spectral_type, None);
    assert_eq!(dso.designations, vec![
      (CatalogType::Ngc, "224".to_owned()),
      (CatalogType::Messier, "31".to_owned()),
      (CatalogType::Pgc, "2557".to_owned()),
      (CatalogType::Ugc, "454".to_owned()),
    ]);
  }

  #[test]
  fn missing_magnitudes_and_distance() {
    let rows = read(&[row("7\tDN\t83.0\t-2.0\t\t\t\t\t", &[("b", "33")])]);
    let dso = rows.into_iter().next().unwrap().unwrap();

    assert_eq!(dso.object_type, ObjectType::DarkNebula);
    assert_eq!(dso.visual_magnitude, MAGNITUDE_UNKNOWN);
    assert_eq!(dso.blue_magnitude, MAGNITUDE_UNKNOWN);
    assert_eq!(dso.distance, 0.0);
    assert_eq!(dso.constellation, None);
  }

  #[test]
  fn unknown_type_code_is_a_record_error() {
    let rows = read(&[
      row("1\tWHAT\t0.0\t0.0\t\t\t\t\t", &[("ngc", "1")]),
      row("2\t?\t0.0\t0.0\t\t\t\t\t", &[("ngc", "2")]),
    ]);
    assert!(matches!(&rows[0], Err(Error::Core(_))));
    assert_eq!(rows[1].as_ref().unwrap().object_type, ObjectType::Unknown);
  }
}
