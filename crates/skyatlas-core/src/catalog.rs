//! Catalog taxonomy: every naming system an object designation can come from.
//!
//! Each variant carries a stable integer code (persisted in the `names` table)
//! and a short textual prefix used by the names-reference source. Codes below
//! zero are placeholders: they can key a name lookup but are never written as a
//! designation of their own.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

use crate::{Error, Result};

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Serialize, Deserialize,
)]
#[repr(i32)]
pub enum CatalogType {
  /// The source catalog's own record number.
  Internal = -1,

  // ── Proper names and base catalogs ────────────────────────────────────────
  Name = 0,
  Ngc = 1,
  Ic = 2,
  Messier = 3,
  Caldwell = 4,
  Barnard = 5,
  Sharpless = 6,
  VanDenBergh = 7,
  Rcw = 8,
  Ldn = 9,
  Lbn = 10,
  Collinder = 11,
  Melotte = 12,
  Pgc = 13,
  Ugc = 14,
  Cederblad = 15,
  Arp = 16,
  Vv = 17,
  Pk = 18,
  Png = 19,
  Snrg = 20,
  Abell = 21,
  Eso = 22,
  Dwb = 23,
  Trumpler = 24,
  Stock = 25,
  Ruprecht = 26,
  Hcg = 27,
  VdbHagen = 28,

  // ── Stellar designations ──────────────────────────────────────────────────
  Bayer = 29,
  Flamsteed = 30,
  Hd = 31,
  Hip = 32,
  Hr = 33,

  // ── Amateur observing lists ───────────────────────────────────────────────
  Bennett = 34,
  Dunlop = 35,
  Herschel400 = 36,
  Gum = 37,

  // ── Open-cluster discoverer catalogs ──────────────────────────────────────
  Alessi = 38,
  Antalova = 39,
  Ascc = 40,
  Aveni = 41,
  Barkhatova = 42,
  Basel = 43,
  Berkeley = 44,
  Bica = 45,
  Biurakan = 46,
  Blanco = 47,
  Bochum = 48,
  Chupina = 49,
  Czernik = 50,
  Dias = 51,
  Dolidze = 52,
  DolidzeDzimselejsvili = 53,
  Eggen = 54,
  Feinstein = 55,
  Fsr = 56,
  Frolov = 57,
  Graham = 58,
  Grasdalen = 59,
  Haffner = 60,
  Harvard = 61,
  Hogg = 62,
  Isserstedt = 63,
  Juchert = 64,
  King = 65,
  Koposov = 66,
  Kronberger = 67,
  Loden = 68,
  Lynga = 69,
  Mamajek = 70,
  Markarian = 71,
  Moffat = 72,
  Muzzio = 73,
  Pismis = 74,
  Platais = 75,
  Riddle = 76,
  Roslund = 77,
  Saurer = 78,
  Schuster = 79,
  Sher = 80,
  Skiff = 81,
  Stephenson = 82,
  Teutsch = 83,
  Tombaugh = 84,
  Turner = 85,
  Upgren = 86,
  Waterloo = 87,
  Westerlund = 88,
}

impl CatalogType {
  pub fn code(self) -> i32 { self as i32 }

  pub fn from_code(code: i32) -> Result<Self> {
    Self::iter()
      .find(|c| c.code() == code)
      .ok_or(Error::UnknownCatalogCode(code))
  }

  /// `true` for catalogs whose designations may be stored.
  pub fn is_real(self) -> bool { self.code() >= 0 }

  /// Short prefix used when a designation is written out, e.g. `"NGC"`.
  pub fn prefix(self) -> &'static str {
    match self {
      Self::Internal => "ID",
      Self::Name => "NAME",
      Self::Ngc => "NGC",
      Self::Ic => "IC",
      Self::Messier => "M",
      Self::Caldwell => "C",
      Self::Barnard => "B",
      Self::Sharpless => "Sh2",
      Self::VanDenBergh => "vdB",
      Self::Rcw => "RCW",
      Self::Ldn => "LDN",
      Self::Lbn => "LBN",
      Self::Collinder => "Cr",
      Self::Melotte => "Mel",
      Self::Pgc => "PGC",
      Self::Ugc => "UGC",
      Self::Cederblad => "Ced",
      Self::Arp => "Arp",
      Self::Vv => "VV",
      Self::Pk => "PK",
      Self::Png => "PNG",
      Self::Snrg => "SNRG",
      Self::Abell => "Abell",
      Self::Eso => "ESO",
      Self::Dwb => "DWB",
      Self::Trumpler => "Tr",
      Self::Stock => "St",
      Self::Ruprecht => "Ru",
      Self::Hcg => "HCG",
      Self::VdbHagen => "vdBH",
      Self::Bayer => "Bayer",
      Self::Flamsteed => "Flamsteed",
      Self::Hd => "HD",
      Self::Hip => "HIP",
      Self::Hr => "HR",
      Self::Bennett => "Bennett",
      Self::Dunlop => "Dunlop",
      Self::Herschel400 => "H400",
      Self::Gum => "Gum",
      Self::Alessi => "Alessi",
      Self::Antalova => "Antalova",
      Self::Ascc => "ASCC",
      Self::Aveni => "Aveni",
      Self::Barkhatova => "Barkhatova",
      Self::Basel => "Basel",
      Self::Berkeley => "Berkeley",
      Self::Bica => "Bica",
      Self::Biurakan => "Biurakan",
      Self::Blanco => "Blanco",
      Self::Bochum => "Bochum",
      Self::Chupina => "Chupina",
      Self::Czernik => "Czernik",
      Self::Dias => "Dias",
      Self::Dolidze => "Dolidze",
      Self::DolidzeDzimselejsvili => "DoDz",
      Self::Eggen => "Eggen",
      Self::Feinstein => "Feinstein",
      Self::Fsr => "FSR",
      Self::Frolov => "Frolov",
      Self::Graham => "Graham",
      Self::Grasdalen => "Grasdalen",
      Self::Haffner => "Haffner",
      Self::Harvard => "Harvard",
      Self::Hogg => "Hogg",
      Self::Isserstedt => "Isserstedt",
      Self::Juchert => "Juchert",
      Self::King => "King",
      Self::Koposov => "Koposov",
      Self::Kronberger => "Kronberger",
      Self::Loden => "Loden",
      Self::Lynga => "Lynga",
      Self::Mamajek => "Mamajek",
      Self::Markarian => "Markarian",
      Self::Moffat => "Moffat",
      Self::Muzzio => "Muzzio",
      Self::Pismis => "Pismis",
      Self::Platais => "Platais",
      Self::Riddle => "Riddle",
      Self::Roslund => "Roslund",
      Self::Saurer => "Saurer",
      Self::Schuster => "Schuster",
      Self::Sher => "Sher",
      Self::Skiff => "Skiff",
      Self::Stephenson => "Stephenson",
      Self::Teutsch => "Teutsch",
      Self::Tombaugh => "Tombaugh",
      Self::Turner => "Turner",
      Self::Upgren => "Upgren",
      Self::Waterloo => "Waterloo",
      Self::Westerlund => "Westerlund",
    }
  }

  /// Resolve a prefix case-insensitively; `"M"` and `"m"` both give Messier.
  pub fn from_prefix(prefix: &str) -> Result<Self> {
    let prefix = prefix.trim();
    Self::iter()
      .find(|c| c.prefix().eq_ignore_ascii_case(prefix))
      .ok_or_else(|| Error::UnknownCatalog(prefix.to_owned()))
  }

  /// Resolve the discoverer word of a SIMBAD `Cl <name> <id>` identifier.
  ///
  /// Only open-cluster catalogs are considered. Returns `None` for names that
  /// are not one of the known discoverer catalogs.
  pub fn from_discoverer(name: &str) -> Option<Self> {
    let name = name.trim();
    Self::iter()
      .filter(|c| c.is_cluster_discoverer())
      .find(|c| {
        c.prefix().eq_ignore_ascii_case(name)
          || c.discoverer_aliases().iter().any(|a| a.eq_ignore_ascii_case(name))
      })
  }

  /// Catalogs that SIMBAD writes as `Cl <discoverer> <number>`.
  pub fn is_cluster_discoverer(self) -> bool {
    matches!(
      self,
      Self::Collinder
        | Self::Melotte
        | Self::Trumpler
        | Self::Stock
        | Self::Ruprecht
        | Self::VdbHagen
    ) || (Self::Alessi.code()..=Self::Westerlund.code()).contains(&self.code())
  }

  /// Long forms of catalogs whose prefix is an abbreviation.
  fn discoverer_aliases(self) -> &'static [&'static str] {
    match self {
      Self::Collinder => &["Collinder"],
      Self::Melotte => &["Melotte"],
      Self::Trumpler => &["Trumpler"],
      Self::Stock => &["Stock"],
      Self::Ruprecht => &["Ruprecht"],
      Self::VdbHagen => &["vdBergh-Hagen", "VDBH"],
      Self::DolidzeDzimselejsvili => &["Dolidze-Dzimselejsvili"],
      Self::Lynga => &["Lyngå"],
      Self::Loden => &["Lodén"],
      _ => &[],
    }
  }
}

impl fmt::Display for CatalogType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.prefix()) }
}
