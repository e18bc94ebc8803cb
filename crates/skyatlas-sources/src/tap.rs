//! Decoding of TAP query results in the JSON serialization SIMBAD returns for
//! `FORMAT=json`:
//!
//! ```json
//! { "metadata": [{ "name": "oid", "datatype": "long" }, ...],
//!   "data":     [[ 1234, 10.5, ... ], ...] }
//! ```
//!
//! Columns are located by name, so their order in the query does not matter.

use serde::Deserialize;
use serde_json::Value;
use skyatlas_core::record::ClusterRow;

use crate::{Error, Result};

#[derive(Debug, Deserialize)]
struct Column {
  name: String,
}

/// A decoded TAP result table.
#[derive(Debug, Deserialize)]
pub struct TapTable {
  metadata: Vec<Column>,
  data:     Vec<Vec<Value>>,
}

impl TapTable {
  pub fn from_json(body: &str) -> Result<Self> { Ok(serde_json::from_str(body)?) }

  pub fn len(&self) -> usize { self.data.len() }

  pub fn is_empty(&self) -> bool { self.data.is_empty() }

  fn column(&self, name: &'static str) -> Result<usize> {
    self
      .metadata
      .iter()
      .position(|c| c.name.eq_ignore_ascii_case(name))
      .ok_or(Error::MissingColumn(name))
  }

  /// Interpret the table as cluster rows. Fails as a whole if a column is
  /// missing; a row with an unusable cell comes out as an `Err` in its place.
  pub fn into_cluster_rows(self) -> Result<impl Iterator<Item = Result<ClusterRow>>> {
    let layout = ClusterLayout {
      oid:    self.column("oid")?,
      ra:     self.column("ra")?,
      dec:    self.column("dec")?,
      otype:  self.column("otype")?,
      pmra:   self.column("pmra")?,
      pmdec:  self.column("pmdec")?,
      plx:    self.column("plx_value")?,
      rv:     self.column("rvz_radvel")?,
      v:      self.column("V")?,
      b:      self.column("B")?,
      j:      self.column("J")?,
      h:      self.column("H")?,
      ids:    self.column("ids")?,
    };
    Ok(
      self
        .data
        .into_iter()
        .enumerate()
        .map(move |(i, row)| layout.decode(i, &row)),
    )
  }
}

/// Column positions of the cluster query's fields.
struct ClusterLayout {
  oid:   usize,
  ra:    usize,
  dec:   usize,
  otype: usize,
  pmra:  usize,
  pmdec: usize,
  plx:   usize,
  rv:    usize,
  v:     usize,
  b:     usize,
  j:     usize,
  h:     usize,
  ids:   usize,
}

impl ClusterLayout {
  fn decode(&self, row_no: usize, row: &[Value]) -> Result<ClusterRow> {
    let number = |i: usize| row.get(i).and_then(Value::as_f64);
    let bad = |column: &'static str, expected: &'static str| Error::BadCell {
      row: row_no,
      column,
      expected,
    };
    let required = |i: usize, column: &'static str| number(i).ok_or(bad(column, "number"));
    let string = |i: usize, column: &'static str| {
      row
        .get(i)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(bad(column, "string"))
    };

    Ok(ClusterRow {
      oid:             row
        .get(self.oid)
        .and_then(Value::as_i64)
        .ok_or(bad("oid", "integer"))?,
      ra:              required(self.ra, "ra")?,
      dec:             required(self.dec, "dec")?,
      otype:           string(self.otype, "otype")?,
      pm_ra:           number(self.pmra),
      pm_dec:          number(self.pmdec),
      parallax:        number(self.plx),
      radial_velocity: number(self.rv),
      v:               number(self.v),
      b:               number(self.b),
      j:               number(self.j),
      h:               number(self.h),
      ids:             string(self.ids, "ids")?,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const METADATA: &str = r#"[
    {"name":"oid"},{"name":"ra"},{"name":"dec"},{"name":"otype"},{"name":"pmra"},
    {"name":"pmdec"},{"name":"plx_value"},{"name":"rvz_radvel"},{"name":"V"},
    {"name":"B"},{"name":"J"},{"name":"H"},{"name":"ids"}]"#;

  fn table(data: &str) -> TapTable {
    TapTable::from_json(&format!(r#"{{"metadata":{METADATA},"data":{data}}}"#)).unwrap()
  }

  #[test]
  fn decodes_rows_with_nulls() {
    let t = table(
      r#"[[3253614, 56.75, 24.1167, "OpC", 19.997, -45.548, 7.3, 5.7, 1.6, null, null, null,
           "Cl Melotte 22|M 45|C 0344+239"]]"#,
    );
    assert_eq!(t.len(), 1);
    let rows: Vec<_> = t.into_cluster_rows().unwrap().collect();
    let row = rows[0].as_ref().unwrap();

    assert_eq!(row.oid, 3253614);
    assert_eq!(row.ra, 56.75);
    assert_eq!(row.otype, "OpC");
    assert_eq!(row.parallax, Some(7.3));
    assert_eq!(row.v, Some(1.6));
    assert_eq!(row.b, None);
    assert_eq!(row.ids, "Cl Melotte 22|M 45|C 0344+239");
  }

  #[test]
  fn bad_cell_fails_only_its_row() {
    let t = table(
      r#"[[1, null, 0.0, "OpC", null, null, null, null, null, null, null, null, "Cl King 1"],
          [2, 1.0, 2.0, "GlC", null, null, null, null, null, null, null, null, "NGC 104"]]"#,
    );
    let rows: Vec<_> = t.into_cluster_rows().unwrap().collect();
    assert!(matches!(rows[0], Err(Error::BadCell { column: "ra", .. })));
    assert_eq!(rows[1].as_ref().unwrap().oid, 2);
  }

  #[test]
  fn missing_column_fails_the_table() {
    let t = TapTable::from_json(r#"{"metadata":[{"name":"oid"}],"data":[]}"#).unwrap();
    assert!(matches!(t.into_cluster_rows().err(), Some(Error::MissingColumn("ra"))));
  }
}
