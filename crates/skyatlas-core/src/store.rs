//! The `ObjectStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `skyatlas-store-sqlite`).
//! The build pipeline depends on this abstraction, not on any concrete
//! backend.

use std::future::Future;

use crate::{
  catalog::CatalogType,
  object::{CatalogName, SkyObject},
};

/// Key/value facts about a finished build, written alongside the data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
  pub key:   String,
  pub value: String,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a skyatlas object store.
///
/// All writes are append-only and conflict-absorbing: inserting an object whose
/// id exists, or a name whose `(object, catalog, name)` key exists, is a silent
/// no-op. Nothing is ever updated or deleted.
pub trait ObjectStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Writes ────────────────────────────────────────────────────────────

  /// Insert an object row. Returns `false` if the id was already taken.
  fn insert_object(
    &self,
    object: SkyObject,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Insert a batch of names. Returns how many rows were new.
  fn insert_names(
    &self,
    names: Vec<CatalogName>,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  /// Record one build-metadata entry, replacing an earlier value for the key.
  fn put_build_info(
    &self,
    info: BuildInfo,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// Id of the object carrying `(catalog, name)`, if any. When several
  /// objects share the designation the lowest id is returned.
  fn find_object_by_name<'a>(
    &'a self,
    catalog: CatalogType,
    name: &'a str,
  ) -> impl Future<Output = Result<Option<i64>, Self::Error>> + Send + 'a;

  /// The build-metadata value stored under `key`, if any.
  fn build_info<'a>(
    &'a self,
    key: &'a str,
  ) -> impl Future<Output = Result<Option<String>, Self::Error>> + Send + 'a;

  fn get_object(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<SkyObject>, Self::Error>> + Send + '_;

  /// All names attached to `object_id`, ordered by catalog code then name.
  fn names_for(
    &self,
    object_id: i64,
  ) -> impl Future<Output = Result<Vec<CatalogName>, Self::Error>> + Send + '_;

  /// All object ids in ascending order.
  fn object_ids(&self) -> impl Future<Output = Result<Vec<i64>, Self::Error>> + Send + '_;

  fn count_objects(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  fn count_names(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  // ── Lifecycle ─────────────────────────────────────────────────────────

  /// Make the store self-contained for readers: fold the write-ahead log back
  /// into the main file and compact it.
  fn finish(&self) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
