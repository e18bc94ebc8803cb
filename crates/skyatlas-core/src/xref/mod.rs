//! Cross-reference tables: amateur observing-list designations keyed by the
//! base-catalog object they refer to.
//!
//! Built once and shared by reference. A lookup for `(NGC, "55")` yields every
//! list entry defined in terms of NGC 55, e.g. Bennett 1 and Dunlop 507.

mod tables;

use std::collections::HashMap;

pub use tables::XrefRow;

use crate::{catalog::CatalogType, record::XrefRecord};

/// Immutable index from backing designation to list designations.
#[derive(Debug, Default, Clone)]
pub struct CrossReferences {
  by_backing: HashMap<(CatalogType, String), Vec<(CatalogType, String)>>,
}

impl CrossReferences {
  /// The Bennett, Dunlop, Herschel 400 and Gum lists embedded in the crate.
  pub fn builtin() -> Self {
    Self::from_tables(&[
      (CatalogType::Bennett, tables::BENNETT),
      (CatalogType::Dunlop, tables::DUNLOP),
      (CatalogType::Herschel400, tables::HERSCHEL_400),
      (CatalogType::Gum, tables::GUM),
    ])
  }

  /// Build from arbitrary `(list catalog, rows)` pairs, in order.
  pub fn from_tables(lists: &[(CatalogType, &[XrefRow])]) -> Self {
    let mut out = Self::default();
    for (list, rows) in lists {
      for (designation, backing, backing_designation) in rows.iter() {
        out.add(*list, designation, *backing, backing_designation);
      }
    }
    out
  }

  /// Add entries read at run time. Entries already known are ignored.
  /// Returns how many were new.
  pub fn extend(&mut self, records: impl IntoIterator<Item = XrefRecord>) -> usize {
    records
      .into_iter()
      .filter(|r| self.add(r.list, &r.designation, r.backing, &r.backing_designation))
      .count()
  }

  fn add(
    &mut self,
    list: CatalogType,
    designation: &str,
    backing: CatalogType,
    backing_designation: &str,
  ) -> bool {
    let designation = designation.trim();
    if designation.is_empty() || backing_designation.trim().is_empty() {
      return false;
    }
    let entries = self.by_backing.entry((backing, normalize(backing_designation))).or_default();
    if entries.iter().any(|(l, d)| *l == list && d.eq_ignore_ascii_case(designation)) {
      return false;
    }
    entries.push((list, designation.to_owned()));
    true
  }

  /// Every `(list catalog, list designation)` backed by `(catalog, designation)`.
  pub fn lookup(&self, catalog: CatalogType, designation: &str) -> &[(CatalogType, String)] {
    self
      .by_backing
      .get(&(catalog, normalize(designation)))
      .map(Vec::as_slice)
      .unwrap_or(&[])
  }

  pub fn len(&self) -> usize { self.by_backing.values().map(Vec::len).sum() }

  pub fn is_empty(&self) -> bool { self.by_backing.is_empty() }
}

/// Key form of a designation: trimmed, upper-case.
pub(crate) fn normalize(designation: &str) -> String { designation.trim().to_uppercase() }

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ngc_55_is_bennett_1_and_dunlop_507() {
    let x = CrossReferences::builtin();
    let hits = x.lookup(CatalogType::Ngc, "55");
    assert!(hits.contains(&(CatalogType::Bennett, "1".to_owned())));
    assert!(hits.contains(&(CatalogType::Dunlop, "507".to_owned())));
    assert_eq!(hits.len(), 2);
  }

  #[test]
  fn lookup_is_keyed_by_backing_catalog() {
    let x = CrossReferences::builtin();
    assert!(x.lookup(CatalogType::Ic, "55").is_empty());
    assert_eq!(
      x.lookup(CatalogType::Ic, "1459"),
      &[(CatalogType::Bennett, "129b".to_owned())]
    );
    assert_eq!(
      x.lookup(CatalogType::Melotte, " 105 "),
      &[(CatalogType::Bennett, "47".to_owned())]
    );
  }

  #[test]
  fn object_on_several_lists() {
    let x = CrossReferences::builtin();
    let hits = x.lookup(CatalogType::Ngc, "253");
    assert!(hits.contains(&(CatalogType::Bennett, "4".to_owned())));
    assert!(hits.contains(&(CatalogType::Herschel400, "V-1".to_owned())));
  }

  #[test]
  fn fixture_tables() {
    static ROWS: &[XrefRow] = &[("A", CatalogType::Ngc, "1"), ("B", CatalogType::Ngc, "1")];
    let x = CrossReferences::from_tables(&[(CatalogType::Gum, ROWS)]);
    assert_eq!(x.len(), 2);
    assert_eq!(x.lookup(CatalogType::Ngc, "1").len(), 2);
    assert!(CrossReferences::default().is_empty());
  }

  #[test]
  fn herschel_entries() {
    let x = CrossReferences::builtin();
    assert_eq!(x.lookup(CatalogType::Ngc, "7479"), &[(CatalogType::Herschel400, "I-55".to_owned())]);
    let hits = x.lookup(CatalogType::Ngc, "2808");
    assert!(hits.contains(&(CatalogType::Bennett, "41".to_owned())));
    assert!(hits.contains(&(CatalogType::Dunlop, "265".to_owned())));
  }

  #[test]
  fn list_designations_are_unique() {
    for (name, rows) in [
      ("bennett", tables::BENNETT),
      ("dunlop", tables::DUNLOP),
      ("herschel", tables::HERSCHEL_400),
      ("gum", tables::GUM),
    ] {
      let mut seen = std::collections::HashSet::new();
      for (designation, ..) in rows.iter() {
        assert!(seen.insert(*designation), "{name} repeats {designation}");
      }
    }
    assert_eq!(tables::BENNETT.iter().filter(|r| !r.0.ends_with(char::is_alphabetic)).count(), 130);
  }

  #[test]
  fn extend_adds_only_new_entries() {
    let mut x = CrossReferences::builtin();
    let before = x.len();
    let rec = |list, designation: &str, backing, backing_designation: &str| XrefRecord {
      list,
      designation: designation.into(),
      backing,
      backing_designation: backing_designation.into(),
    };

    let added = x.extend([
      rec(CatalogType::Dunlop, "265", CatalogType::Ngc, "2808"),
      rec(CatalogType::Dunlop, "440", CatalogType::Ngc, "5139"),
      rec(CatalogType::Gum, "15", CatalogType::Ngc, " "),
    ]);

    assert_eq!(added, 1);
    assert_eq!(x.len(), before + 1);
    assert!(x.lookup(CatalogType::Ngc, "5139").contains(&(CatalogType::Dunlop, "440".to_owned())));
  }
}
