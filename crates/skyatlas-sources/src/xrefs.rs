//! Extra cross-reference rows: tab-separated `list`, `id`, `catalog`,
//! `backing` with a header row. A row `Dunlop, 265, NGC, 2808` says Dunlop 265
//! is NGC 2808. Both `list` and `catalog` are taxonomy prefixes.

use std::{fs::File, io, path::Path};

use serde::Deserialize;
use skyatlas_core::{catalog::CatalogType, record::XrefRecord};

use crate::{Result, csv_reader, open_file};

#[derive(Debug, Deserialize)]
struct RawXref {
  list:    String,
  id:      String,
  catalog: String,
  backing: String,
}

impl RawXref {
  fn into_record(self) -> Result<XrefRecord> {
    Ok(XrefRecord {
      list:                CatalogType::from_prefix(&self.list)?,
      designation:         self.id,
      backing:             CatalogType::from_prefix(&self.catalog)?,
      backing_designation: self.backing,
    })
  }
}

/// Lazy sequence of [`XrefRecord`]s.
pub struct XrefReader<R> {
  rows: csv::DeserializeRecordsIntoIter<R, RawXref>,
}

pub fn open(path: impl AsRef<Path>) -> Result<XrefReader<File>> {
  Ok(from_reader(open_file(path.as_ref())?))
}

pub fn from_reader<R: io::Read>(reader: R) -> XrefReader<R> {
  XrefReader { rows: csv_reader(reader, b'\t').into_deserialize() }
}

impl<R: io::Read> Iterator for XrefReader<R> {
  type Item = Result<XrefRecord>;

  fn next(&mut self) -> Option<Self::Item> {
    Some(self.rows.next()?.map_err(Into::into).and_then(RawXref::into_record))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Error;

  #[test]
  fn reads_rows_and_flags_unknown_prefixes() {
    let input = "list\tid\tcatalog\tbacking\n\
                 Dunlop\t265\tNGC\t2808\n\
                 h400\tI-55\tngc\t7479\n\
                 Gum\t56\tIC\t4628\n\
                 Gum\t1\tXYZ\t9\n";
    let rows: Vec<_> = from_reader(input.as_bytes()).collect();

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].as_ref().unwrap(), &XrefRecord {
      list:                CatalogType::Dunlop,
      designation:         "265".into(),
      backing:             CatalogType::Ngc,
      backing_designation: "2808".into(),
    });
    assert_eq!(rows[1].as_ref().unwrap().list, CatalogType::Herschel400);
    assert_eq!(rows[2].as_ref().unwrap().backing, CatalogType::Ic);
    assert!(matches!(&rows[3], Err(Error::Core(_))));
  }
}
