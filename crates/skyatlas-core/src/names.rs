//! Name index: display names keyed by catalog designation.
//!
//! Loaded once from the names-reference source, then read-only. Names that
//! begin with a Greek letter are transliterated so the store only holds ASCII
//! Bayer prefixes ("α Centauri" is stored as "Alp Centauri").

use std::collections::HashMap;

use crate::{catalog::CatalogType, record::NameRecord, xref::normalize};

/// Greek letters and the three-letter forms used for Bayer designations.
const GREEK: [(char, &str); 27] = [
  ('α', "Alp"),
  ('β', "Bet"),
  ('γ', "Gam"),
  ('δ', "Del"),
  ('ε', "Eps"),
  ('ζ', "Zet"),
  ('η', "Eta"),
  ('θ', "The"),
  ('ϑ', "The"),
  ('ι', "Iot"),
  ('κ', "Kap"),
  ('λ', "Lam"),
  ('μ', "Mu"),
  ('ν', "Nu"),
  ('ξ', "Xi"),
  ('ο', "Omi"),
  ('π', "Pi"),
  ('ρ', "Rho"),
  ('σ', "Sig"),
  ('ς', "Sig"),
  ('τ', "Tau"),
  ('υ', "Ups"),
  ('φ', "Phi"),
  ('ϕ', "Phi"),
  ('χ', "Chi"),
  ('ψ', "Psi"),
  ('ω', "Ome"),
];

/// Replace a leading Greek letter with its Latin abbreviation.
pub fn transliterate_greek(name: &str) -> String {
  let mut chars = name.chars();
  let Some(first) = chars.next() else {
    return String::new();
  };
  match GREEK.iter().find(|(g, _)| *g == first) {
    Some((_, latin)) => format!("{latin}{}", chars.as_str()),
    None => name.to_owned(),
  }
}

/// Aliases that no names-reference source carries but the store should.
const MANUAL_ALIASES: [(CatalogType, &str, &str); 2] = [
  (CatalogType::Ic, "342", "Hidden Galaxy"),
  (CatalogType::Ngc, "6752", "Great Peacock Globular"),
];

/// `CatalogType → designation → display names`.
#[derive(Debug, Default, Clone)]
pub struct NameIndex {
  by_catalog: HashMap<CatalogType, HashMap<String, Vec<String>>>,
}

impl NameIndex {
  /// Build from a names-reference sequence and add the manual aliases.
  pub fn from_records(records: impl IntoIterator<Item = NameRecord>) -> Self {
    let mut index = Self::default();
    for r in records {
      index.insert(r.catalog, &r.id, &r.name);
    }
    for (catalog, id, name) in MANUAL_ALIASES {
      index.insert(catalog, id, name);
    }
    index
  }

  /// Add one name; the same name twice for one designation is kept once.
  pub fn insert(&mut self, catalog: CatalogType, id: &str, display_name: &str) {
    let name = transliterate_greek(display_name.trim());
    if name.is_empty() {
      return;
    }
    let names = self
      .by_catalog
      .entry(catalog)
      .or_default()
      .entry(normalize(id))
      .or_default();
    if !names.contains(&name) {
      names.push(name);
    }
  }

  pub fn lookup(&self, catalog: CatalogType, designation: &str) -> &[String] {
    self
      .by_catalog
      .get(&catalog)
      .and_then(|m| m.get(&normalize(designation)))
      .map(Vec::as_slice)
      .unwrap_or(&[])
  }

  /// Number of `(catalog, designation, name)` entries.
  pub fn len(&self) -> usize {
    self.by_catalog.values().flat_map(HashMap::values).map(Vec::len).sum()
  }

  pub fn is_empty(&self) -> bool { self.len() == 0 }
}
