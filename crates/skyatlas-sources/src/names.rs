//! The names-reference file: tab-separated `catalog`, `id`, `name` with a
//! header row. `catalog` is a taxonomy prefix such as `NGC`, `HIP` or `M`.

use std::{fs::File, io, path::Path};

use serde::Deserialize;
use skyatlas_core::{catalog::CatalogType, record::NameRecord};

use crate::{Result, csv_reader, open_file};

#[derive(Debug, Deserialize)]
struct RawName {
  catalog: String,
  id:      String,
  name:    String,
}

/// Lazy sequence of [`NameRecord`]s.
pub struct NameReader<R> {
  rows: csv::DeserializeRecordsIntoIter<R, RawName>,
}

pub fn open(path: impl AsRef<Path>) -> Result<NameReader<File>> {
  Ok(from_reader(open_file(path.as_ref())?))
}

pub fn from_reader<R: io::Read>(reader: R) -> NameReader<R> {
  NameReader { rows: csv_reader(reader, b'\t').into_deserialize() }
}

impl<R: io::Read> Iterator for NameReader<R> {
  type Item = Result<NameRecord>;

  fn next(&mut self) -> Option<Self::Item> {
    let raw = match self.rows.next()? {
      Ok(raw) => raw,
      Err(e) => return Some(Err(e.into())),
    };
    Some(
      CatalogType::from_prefix(&raw.catalog)
        .map(|catalog| NameRecord { catalog, id: raw.id, name: raw.name })
        .map_err(Into::into),
    )
  }
}
