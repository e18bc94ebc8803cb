//! The merge engine: turns one catalog identifier into every name it implies.
//!
//! Names are collected into an [`Attachments`] buffer first and written with
//! [`commit`] once the caller has decided the record is worth keeping. The
//! object row always goes in before its names.

use std::collections::HashSet;

use skyatlas_core::{
  catalog::CatalogType,
  names::NameIndex,
  object::{CatalogName, SkyObject},
  store::ObjectStore,
  xref::CrossReferences,
};

use crate::{Error, Result};

/// Catalogs whose designations are cross-referenced but never stored as a
/// name of their own.
pub const NOISY_CATALOGS: [CatalogType; 7] = [
  CatalogType::Ugc,
  CatalogType::Vv,
  CatalogType::Pk,
  CatalogType::Png,
  CatalogType::Snrg,
  CatalogType::Eso,
  CatalogType::Dwb,
];

pub fn is_noisy(catalog: CatalogType) -> bool { NOISY_CATALOGS.contains(&catalog) }

// ─── Attachments ─────────────────────────────────────────────────────────────

/// Names gathered for one object, deduplicated the way the `names` key is
/// (catalog plus case-insensitive name).
#[derive(Debug)]
pub struct Attachments {
  object_id: i64,
  names:     Vec<CatalogName>,
  seen:      HashSet<(CatalogType, String)>,
}

impl Attachments {
  pub fn new(object_id: i64) -> Self {
    Self { object_id, names: Vec::new(), seen: HashSet::new() }
  }

  pub fn object_id(&self) -> i64 { self.object_id }

  /// Add one name. Blank names are ignored; returns whether it was new.
  pub fn push(&mut self, catalog: CatalogType, name: &str) -> bool {
    let name = name.trim();
    if name.is_empty() || !self.seen.insert((catalog, name.to_lowercase())) {
      return false;
    }
    self.names.push(CatalogName::new(self.object_id, catalog, name));
    true
  }

  pub fn names(&self) -> &[CatalogName] { &self.names }

  pub fn len(&self) -> usize { self.names.len() }

  pub fn is_empty(&self) -> bool { self.names.is_empty() }
}

// ─── Engine ──────────────────────────────────────────────────────────────────

/// Read-only lookup tables shared by every phase.
#[derive(Clone, Copy)]
pub struct MergeEngine<'a> {
  names: &'a NameIndex,
  xrefs: &'a CrossReferences,
}

impl<'a> MergeEngine<'a> {
  pub fn new(names: &'a NameIndex, xrefs: &'a CrossReferences) -> Self { Self { names, xrefs } }

  /// Attach everything `(catalog, designation)` implies:
  ///
  /// 1. each display name the name index has for it, under [`CatalogType::Name`];
  /// 2. each observing-list designation backed by it;
  /// 3. the designation itself, if `attach_self` and the catalog is real and
  ///    not one of the [`NOISY_CATALOGS`].
  ///
  /// Returns whether anything was attached.
  pub fn attach_names_for_identifier(
    &self,
    into: &mut Attachments,
    catalog: CatalogType,
    designation: &str,
    attach_self: bool,
  ) -> bool {
    let designation = designation.trim();
    if designation.is_empty() {
      return false;
    }

    let mut attached = false;
    for name in self.names.lookup(catalog, designation) {
      into.push(CatalogType::Name, name);
      attached = true;
    }
    for (list, list_designation) in self.xrefs.lookup(catalog, designation) {
      into.push(*list, list_designation);
      attached = true;
    }
    if attach_self && catalog.is_real() && !is_noisy(catalog) {
      into.push(catalog, designation);
      attached = true;
    }
    attached
  }
}

// ─── Writes ──────────────────────────────────────────────────────────────────

/// What [`commit`] changed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Committed {
  pub object_inserted: bool,
  pub names_added:     usize,
}

/// Write `object` (if any), then the gathered names.
pub async fn commit<S: ObjectStore>(
  store: &S,
  object: Option<SkyObject>,
  attachments: Attachments,
) -> Result<Committed> {
  let object_inserted = match object {
    Some(o) => store.insert_object(o).await.map_err(Error::store)?,
    None => false,
  };
  let names_added = store
    .insert_names(attachments.names)
    .await
    .map_err(Error::store)?;
  Ok(Committed { object_inserted, names_added })
}

#[cfg(test)]
mod tests {
  use skyatlas_core::{record::NameRecord, xref::XrefRow};

  use super::*;

  fn fixture_names() -> NameIndex {
    NameIndex::from_records([
      NameRecord {
        catalog: CatalogType::Ngc,
        id:      "224".into(),
        name:    "Andromeda Galaxy".into(),
      },
      NameRecord {
        catalog: CatalogType::Messier,
        id:      "31".into(),
        name:    "Andromeda Galaxy".into(),
      },
    ])
  }

  const BENNETT: &[XrefRow] = &[("1", CatalogType::Ngc, "55"), ("2", CatalogType::Ngc, "104")];
  const DUNLOP: &[XrefRow] = &[("507", CatalogType::Ngc, "55")];

  fn fixture_xrefs() -> CrossReferences {
    CrossReferences::from_tables(&[(CatalogType::Bennett, BENNETT), (CatalogType::Dunlop, DUNLOP)])
  }

  fn collect(a: &Attachments) -> Vec<(CatalogType, &str)> {
    a.names().iter().map(|n| (n.catalog, n.name.as_str())).collect()
  }

  #[test]
  fn cross_references_and_self() {
    let (names, xrefs) = (fixture_names(), fixture_xrefs());
    let engine = MergeEngine::new(&names, &xrefs);
    let mut a = Attachments::new(1_000_055);

    assert!(engine.attach_names_for_identifier(&mut a, CatalogType::Ngc, "55", true));
    assert_eq!(collect(&a), vec![
      (CatalogType::Bennett, "1"),
      (CatalogType::Dunlop, "507"),
      (CatalogType::Ngc, "55"),
    ]);
  }

  #[test]
  fn names_from_two_designations_are_deduplicated() {
    let (names, xrefs) = (fixture_names(), fixture_xrefs());
    let engine = MergeEngine::new(&names, &xrefs);
    let mut a = Attachments::new(1_000_040);

    engine.attach_names_for_identifier(&mut a, CatalogType::Ngc, "224", true);
    engine.attach_names_for_identifier(&mut a, CatalogType::Messier, "31", true);
    assert_eq!(collect(&a), vec![
      (CatalogType::Name, "Andromeda Galaxy"),
      (CatalogType::Ngc, "224"),
      (CatalogType::Messier, "31"),
    ]);
  }

  #[test]
  fn noisy_catalogs_never_attach_themselves() {
    let (names, xrefs) = (fixture_names(), fixture_xrefs());
    let engine = MergeEngine::new(&names, &xrefs);
    let mut a = Attachments::new(1);

    for catalog in NOISY_CATALOGS {
      assert!(!engine.attach_names_for_identifier(&mut a, catalog, "454", true));
    }
    assert!(a.is_empty());
  }

  #[test]
  fn placeholder_catalog_only_keys_lookups() {
    let names = NameIndex::from_records([NameRecord {
      catalog: CatalogType::Internal,
      id:      "40".into(),
      name:    "Andromeda Galaxy".into(),
    }]);
    let xrefs = fixture_xrefs();
    let engine = MergeEngine::new(&names, &xrefs);
    let mut a = Attachments::new(1_000_040);

    assert!(engine.attach_names_for_identifier(&mut a, CatalogType::Internal, "40", true));
    assert_eq!(collect(&a), vec![(CatalogType::Name, "Andromeda Galaxy")]);
    assert!(!engine.attach_names_for_identifier(&mut a, CatalogType::Internal, "41", true));
  }

  #[test]
  fn attach_self_false_still_follows_references() {
    let (names, xrefs) = (fixture_names(), fixture_xrefs());
    let engine = MergeEngine::new(&names, &xrefs);
    let mut a = Attachments::new(1);

    assert!(engine.attach_names_for_identifier(&mut a, CatalogType::Ngc, "104", false));
    assert_eq!(collect(&a), vec![(CatalogType::Bennett, "2")]);
    assert!(!engine.attach_names_for_identifier(&mut a, CatalogType::Ngc, "  ", true));
  }

  #[test]
  fn attachments_ignore_case_duplicates() {
    let mut a = Attachments::new(9);
    assert!(a.push(CatalogType::Name, "Pleiades"));
    assert!(!a.push(CatalogType::Name, "PLEIADES "));
    assert!(a.push(CatalogType::Melotte, "Pleiades"));
    assert!(!a.push(CatalogType::Name, ""));
    assert_eq!(a.len(), 2);
  }
}
