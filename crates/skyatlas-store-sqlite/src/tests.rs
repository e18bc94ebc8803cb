//! Integration tests for `SqliteStore`.

use skyatlas_core::{
  catalog::CatalogType,
  constellation::Constellation,
  object::{CatalogName, ObjectType, SkyObject},
  store::{BuildInfo, ObjectStore},
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn object(id: i64, magnitude: f64) -> SkyObject {
  SkyObject {
    id,
    object_type: ObjectType::Star,
    ra: 1.767_791,
    dec: -0.291_751,
    magnitude,
    pm_ra: -546.01,
    pm_dec: -1223.07,
    distance: 2.637,
    radial_velocity: -5.5,
    constellation: Constellation::from_abbrev("CMa").unwrap(),
    spectral_type: Some("A0m...".into()),
  }
}

// ─── Objects ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_and_get_object() {
  let s = store().await;
  let sirius = object(1, -1.44);

  assert!(s.insert_object(sirius.clone()).await.unwrap());
  let fetched = s.get_object(1).await.unwrap().expect("object 1");
  assert_eq!(fetched, sirius);
}

#[tokio::test]
async fn get_object_missing_returns_none() {
  let s = store().await;
  assert!(s.get_object(42).await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_object_keeps_first_row() {
  let s = store().await;
  assert!(s.insert_object(object(7, 3.0)).await.unwrap());
  assert!(!s.insert_object(object(7, 11.0)).await.unwrap());

  assert_eq!(s.count_objects().await.unwrap(), 1);
  assert_eq!(s.get_object(7).await.unwrap().unwrap().magnitude, 3.0);
}

#[tokio::test]
async fn null_spectral_type_round_trips() {
  let s = store().await;
  let mut galaxy = object(1_000_224, 3.4);
  galaxy.object_type = ObjectType::Galaxy;
  galaxy.spectral_type = None;
  s.insert_object(galaxy.clone()).await.unwrap();

  assert_eq!(s.get_object(1_000_224).await.unwrap(), Some(galaxy));
}

#[tokio::test]
async fn object_ids_are_sorted() {
  let s = store().await;
  for id in [2_000_000, 5, 1_000_001] {
    s.insert_object(object(id, 5.0)).await.unwrap();
  }
  assert_eq!(s.object_ids().await.unwrap(), vec![5, 1_000_001, 2_000_000]);
}

// ─── Names ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn reinserting_a_name_is_a_no_op() {
  let s = store().await;
  s.insert_object(object(1, -1.44)).await.unwrap();

  let n = CatalogName::new(1, CatalogType::Name, "Sirius");
  assert_eq!(s.insert_names(vec![n.clone()]).await.unwrap(), 1);
  assert_eq!(s.insert_names(vec![n.clone(), n]).await.unwrap(), 0);
  assert_eq!(s.count_names().await.unwrap(), 1);
}

#[tokio::test]
async fn name_key_is_case_insensitive() {
  let s = store().await;
  s.insert_object(object(1, -1.44)).await.unwrap();

  let added = s
    .insert_names(vec![
      CatalogName::new(1, CatalogType::Name, "Sirius"),
      CatalogName::new(1, CatalogType::Name, "SIRIUS"),
      CatalogName::new(1, CatalogType::Bayer, "Alp"),
      CatalogName::new(1, CatalogType::Flamsteed, "9"),
    ])
    .await
    .unwrap();

  assert_eq!(added, 3);
  let names = s.names_for(1).await.unwrap();
  assert_eq!(names, vec![
    CatalogName::new(1, CatalogType::Name, "Sirius"),
    CatalogName::new(1, CatalogType::Bayer, "Alp"),
    CatalogName::new(1, CatalogType::Flamsteed, "9"),
  ]);
}

#[tokio::test]
async fn same_name_in_different_catalogs_is_kept() {
  let s = store().await;
  s.insert_object(object(1_000_055, 8.0)).await.unwrap();

  let added = s
    .insert_names(vec![
      CatalogName::new(1_000_055, CatalogType::Bennett, "1"),
      CatalogName::new(1_000_055, CatalogType::Dunlop, "1"),
    ])
    .await
    .unwrap();
  assert_eq!(added, 2);
}

#[tokio::test]
async fn name_for_missing_object_is_rejected() {
  let s = store().await;
  let result = s
    .insert_names(vec![CatalogName::new(99, CatalogType::Ngc, "1")])
    .await;
  assert!(result.is_err());
  assert_eq!(s.count_names().await.unwrap(), 0);
}

#[tokio::test]
async fn find_object_by_name_ignores_case_and_padding() {
  let s = store().await;
  s.insert_object(object(1_000_224, 3.4)).await.unwrap();
  s.insert_names(vec![CatalogName::new(1_000_224, CatalogType::Name, "Andromeda Galaxy")])
    .await
    .unwrap();

  assert_eq!(
    s.find_object_by_name(CatalogType::Name, " andromeda galaxy").await.unwrap(),
    Some(1_000_224)
  );
  assert_eq!(s.find_object_by_name(CatalogType::Ngc, "Andromeda Galaxy").await.unwrap(), None);
}

#[tokio::test]
async fn find_object_by_name_prefers_lowest_id() {
  let s = store().await;
  for id in [1_000_900, 1_000_100] {
    s.insert_object(object(id, 9.0)).await.unwrap();
    s.insert_names(vec![CatalogName::new(id, CatalogType::Ngc, "2264")]).await.unwrap();
  }
  assert_eq!(
    s.find_object_by_name(CatalogType::Ngc, "2264").await.unwrap(),
    Some(1_000_100)
  );
}

// ─── Lifecycle ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn build_info_replaces_by_key() {
  let s = store().await;
  for value in ["1", "2"] {
    s.put_build_info(BuildInfo { key: "objects".into(), value: value.into() })
      .await
      .unwrap();
  }

  assert_eq!(s.build_info("objects").await.unwrap().as_deref(), Some("2"));
  assert_eq!(s.build_info("missing").await.unwrap(), None);
}

#[tokio::test]
async fn create_discards_previous_file() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("sky.db");

  let first = SqliteStore::create(&path).await.unwrap();
  first.insert_object(object(1, 0.0)).await.unwrap();
  first.finish().await.unwrap();
  drop(first);

  let second = SqliteStore::create(&path).await.unwrap();
  assert_eq!(second.count_objects().await.unwrap(), 0);
}

#[tokio::test]
async fn finish_leaves_a_self_contained_file() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("sky.db");

  let s = SqliteStore::create(&path).await.unwrap();
  s.insert_object(object(1, -1.44)).await.unwrap();
  s.insert_names(vec![CatalogName::new(1, CatalogType::Name, "Sirius")])
    .await
    .unwrap();
  s.finish().await.unwrap();

  let mode: String = s
    .conn_for_tests()
    .call(|conn| Ok(conn.query_row("PRAGMA journal_mode", [], |r| r.get(0))?))
    .await
    .unwrap();
  assert_eq!(mode.to_lowercase(), "delete");

  let wal = dir.path().join("sky.db-wal");
  assert!(!wal.exists() || std::fs::metadata(&wal).unwrap().len() == 0);
  drop(s);

  let reopened = SqliteStore::open(&path).await.unwrap();
  assert_eq!(reopened.count_objects().await.unwrap(), 1);
  assert_eq!(reopened.count_names().await.unwrap(), 1);
}
