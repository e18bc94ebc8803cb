//! Parser for SIMBAD combined-identifier lists.
//!
//! A cluster's `ids` column is a `|`-separated list such as
//! `"Cl Berkeley 59|NGC 7822|C 0001+676"`. Each entry is classified on its own
//! into an [`IdentifierToken`]; [`ClusterIdentifiers::parse`] then picks the
//! first usable discoverer designation and the base-catalog references.

use crate::catalog::CatalogType;

/// Classification of a single identifier entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierToken<'a> {
  NoMatch,
  /// `Cl <discoverer> <number>`; the discoverer is not yet checked against the
  /// known catalogs.
  Discoverer { name: &'a str, number: &'a str },
  NgcRef(&'a str),
  IcRef(&'a str),
}

impl<'a> IdentifierToken<'a> {
  pub fn classify(entry: &'a str) -> Self {
    let words: Vec<&str> = entry.split_whitespace().collect();
    match words.as_slice() {
      // Discoverer names are single words; a hyphen joins compound names.
      ["Cl", name, number] if is_catalog_number(number) => {
        Self::Discoverer { name: *name, number: *number }
      }
      ["NGC", number] if is_catalog_number(number) => Self::NgcRef(*number),
      ["IC", number] if is_catalog_number(number) => Self::IcRef(*number),
      _ => Self::NoMatch,
    }
  }
}

/// Numbers may carry a trailing component letter (`"11A"`), nothing else.
fn is_catalog_number(s: &str) -> bool {
  let digits = s.trim_end_matches(|c: char| c.is_ascii_alphabetic());
  !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// The parts of an identifier list the cluster phase acts on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClusterIdentifiers {
  /// First `Cl <name> <n>` entry whose discoverer is a known catalog.
  pub discoverer:         Option<(CatalogType, String)>,
  /// The first NGC and the first IC reference, NGC first.
  pub backing:            Vec<(CatalogType, String)>,
  /// A `Cl` entry was present but named no known catalog.
  pub unknown_discoverer: Option<String>,
}

impl ClusterIdentifiers {
  pub fn parse(ids: &str) -> Self {
    let mut out = Self::default();
    let mut ngc: Option<String> = None;
    let mut ic: Option<String> = None;

    for entry in ids.split('|') {
      match IdentifierToken::classify(entry) {
        IdentifierToken::Discoverer { name, number } => {
          if out.discoverer.is_some() {
            continue;
          }
          match CatalogType::from_discoverer(name) {
            Some(catalog) => out.discoverer = Some((catalog, number.to_owned())),
            None => {
              out.unknown_discoverer.get_or_insert_with(|| name.to_owned());
            }
          }
        }
        IdentifierToken::NgcRef(n) if ngc.is_none() => ngc = Some(n.to_owned()),
        IdentifierToken::IcRef(n) if ic.is_none() => ic = Some(n.to_owned()),
        _ => {}
      }
    }

    out.backing.extend(ngc.map(|n| (CatalogType::Ngc, n)));
    out.backing.extend(ic.map(|n| (CatalogType::Ic, n)));
    out
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn classify_entries() {
    assert_eq!(
      IdentifierToken::classify("Cl Berkeley 59"),
      IdentifierToken::Discoverer { name: "Berkeley", number: "59" }
    );
    assert_eq!(IdentifierToken::classify("NGC 7822"), IdentifierToken::NgcRef("7822"));
    assert_eq!(IdentifierToken::classify("IC  4665"), IdentifierToken::IcRef("4665"));
    assert_eq!(
      IdentifierToken::classify("Cl Basel 11A"),
      IdentifierToken::Discoverer { name: "Basel", number: "11A" }
    );
  }

  #[test]
  fn non_matching_entries() {
    for e in ["C 0001+676", "Cl* NGC 2632 KW 1", "NGC 2632 123", "Cl Berkeley", "NGC", "", "M 44"] {
      assert_eq!(IdentifierToken::classify(e), IdentifierToken::NoMatch, "{e:?}");
    }
  }

  #[test]
  fn discoverer_and_ngc_backing() {
    let ids = ClusterIdentifiers::parse("C 0001+676|Cl Berkeley 59|NGC 7822|MWSC 1");
    assert_eq!(ids.discoverer, Some((CatalogType::Berkeley, "59".to_owned())));
    assert_eq!(ids.backing, vec![(CatalogType::Ngc, "7822".to_owned())]);
    assert_eq!(ids.unknown_discoverer, None);
  }

  #[test]
  fn ngc_is_tried_before_ic() {
    let ids = ClusterIdentifiers::parse("IC 2157|Cl Collinder 80|NGC 2174|IC 9");
    assert_eq!(ids.backing, vec![
      (CatalogType::Ngc, "2174".to_owned()),
      (CatalogType::Ic, "2157".to_owned()),
    ]);
    let ids = ClusterIdentifiers::parse("IC 4665|Cl Collinder 349");
    assert_eq!(ids.backing, vec![(CatalogType::Ic, "4665".to_owned())]);
  }

  #[test]
  fn first_known_discoverer_wins() {
    let ids = ClusterIdentifiers::parse("Cl Nobody 3|Cl Melotte 22|Cl Collinder 42");
    assert_eq!(ids.discoverer, Some((CatalogType::Melotte, "22".to_owned())));
    assert_eq!(ids.unknown_discoverer.as_deref(), Some("Nobody"));
  }

  #[test]
  fn no_discoverer() {
    let ids = ClusterIdentifiers::parse("NGC 104|GCl 1|C 0021-723");
    assert_eq!(ids.discoverer, None);
    assert_eq!(ids.backing, vec![(CatalogType::Ngc, "104".to_owned())]);
  }
}
