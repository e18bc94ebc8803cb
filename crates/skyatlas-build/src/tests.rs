//! End-to-end builds against small catalog files in a temporary directory.

use std::path::{Path, PathBuf};

use skyatlas_core::{
  catalog::CatalogType,
  object::{CLUSTER_ID_BASE, CatalogName, DSO_ID_BASE, IdSpace, MAGNITUDE_UNKNOWN, SkyObject},
  record::ClusterRow,
  store::ObjectStore,
};
use skyatlas_store_sqlite::SqliteStore;
use tempfile::TempDir;

use crate::{
  BuildConfig, BuildReport, ClusterConfig, Error, Pipeline, Result,
  phase::clusters::ClusterSource,
};

// ─── Fixtures ────────────────────────────────────────────────────────────────

const STAR_HEADER: &str = "id,hip,hd,hr,proper,rarad,decrad,dist,pmra,pmdec,rv,mag,spect,bayer,flam,con\n";

const STARS: &str = "\
32263,32349,48915,2491,Sirius,1.767791,-0.291751,2.6371,-546.01,-1223.07,-5.5,-1.44,A0m...,Alp,9,CMa
2,,,,,0.1,0.1,,,,,4.0,G2V,,,
3,,,,Faint,0.1,0.1,,,,,8.5,,,,
0,,,,Sol,0,0,0,,,,-26.7,G2V,,,
4,,,,Dashy,0.2,0.3,,,,,3.0,-,,,
";

const DSO_COLUMNS: [&str; 35] = [
  "id", "type", "ra", "dec", "bmag", "vmag", "dist", "con", "spect", "ngc", "ic", "m", "c", "b",
  "sh2", "vdb", "rcw", "ldn", "lbn", "cr", "mel", "pgc", "ugc", "ced", "arp", "vv", "pk", "png",
  "snrg", "aco", "eso", "dwb", "tr", "st", "ru",
];

const NAMES: &str = "catalog\tid\tname\n\
                     M\t44\tPraesepe\n\
                     HIP\t32349\tα Canis Majoris\n\
                     ID\t77\tLonely Galaxy\n\
                     XYZ\t1\tbad prefix\n";

/// One deep-sky line with the named columns set and the rest empty.
fn dso_line(fields: &[(&str, &str)]) -> String {
  let cells: Vec<&str> = DSO_COLUMNS
    .iter()
    .map(|c| fields.iter().find(|(k, _)| k == c).map_or("", |(_, v)| *v))
    .collect();
  format!("{}\n", cells.join("\t"))
}

fn dso_file(lines: &[String]) -> String {
  format!("{}\n{}", DSO_COLUMNS.join("\t"), lines.concat())
}

fn dso_fixture() -> String {
  dso_file(&[
    dso_line(&[("id", "100"), ("type", "OC"), ("ra", "130.1"), ("dec", "19.67"), ("vmag", "3.7"),
               ("ngc", "2632"), ("m", "44")]),
    dso_line(&[("id", "55"), ("type", "G"), ("ra", "3.72"), ("dec", "-39.2"), ("bmag", "8.4"),
               ("vmag", "7.9"), ("ngc", "55")]),
    dso_line(&[("id", "7"), ("type", "DN"), ("ra", "85.25"), ("dec", "-2.46"), ("vmag", "5"),
               ("b", "33")]),
    dso_line(&[("id", "8"), ("type", "G"), ("ra", "35.64"), ("dec", "42.35"), ("bmag", "10"),
               ("vmag", "9"), ("con", "And"), ("ngc", "891"), ("spect", "Sb")]),
    dso_line(&[("id", "9"), ("type", "G"), ("ra", "10.0"), ("dec", "10.0"), ("ugc", "454")]),
    dso_line(&[("id", "10"), ("type", "?"), ("ra", "10.0"), ("dec", "10.0"), ("ngc", "9000")]),
    dso_line(&[("id", "77"), ("type", "G"), ("ra", "200.0"), ("dec", "-20.0")]),
  ])
}

fn cluster_fixture() -> Vec<ClusterRow> {
  vec![
    ClusterRow {
      oid: 1,
      ra: 130.1,
      dec: 19.67,
      otype: "OpC".into(),
      v: Some(3.7),
      ids: "Cl Melotte 88|NGC 2632|M 44".into(),
      ..Default::default()
    },
    ClusterRow {
      oid: 2,
      ra: 0.575,
      dec: 67.42,
      otype: "OpC".into(),
      pm_ra: Some(-2.0),
      parallax: Some(1.0),
      b: Some(11.0),
      j: Some(8.5),
      ids: "C 0001+671|Cl Berkeley 59|NGC 7822".into(),
      ..Default::default()
    },
    ClusterRow {
      oid: 3,
      ra: 10.0,
      dec: 10.0,
      otype: "OpC".into(),
      ids: "Cl Nobody 3|NGC 9999".into(),
      ..Default::default()
    },
    ClusterRow {
      oid: 4,
      ra: 6.02,
      dec: -72.08,
      otype: "GlC".into(),
      ids: "NGC 104|GCl 1".into(),
      ..Default::default()
    },
  ]
}

struct Inputs {
  dir:    TempDir,
  config: BuildConfig,
}

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
  let path = dir.join(name);
  std::fs::write(&path, contents).unwrap();
  path
}

fn inputs(stars: &str, dso: &str, names: &str) -> Inputs {
  let dir = tempfile::tempdir().unwrap();
  let config = BuildConfig {
    output_path:          dir.path().join("sky.db"),
    stars_path:           write(dir.path(), "stars.csv", &format!("{STAR_HEADER}{stars}")),
    dso_path:             write(dir.path(), "dso.tsv", dso),
    names_path:           write(dir.path(), "names.tsv", names),
    xref_path:            None,
    star_magnitude_limit: 7.0,
    cluster:              ClusterConfig { enabled: false, ..Default::default() },
  };
  Inputs { dir, config }
}

fn full_inputs() -> Inputs { inputs(STARS, &dso_fixture(), NAMES) }

async fn build_at<C: ClusterSource>(
  config: &BuildConfig,
  output: &Path,
  clusters: Option<&C>,
) -> Result<(SqliteStore, BuildReport)> {
  let pipeline = Pipeline::load(config)?;
  let store = SqliteStore::create(output).await.unwrap();
  let report = pipeline.run(config, &store, clusters).await?;
  Ok((store, report))
}

async fn build<C: ClusterSource>(
  inputs: &Inputs,
  clusters: Option<&C>,
) -> Result<(SqliteStore, BuildReport)> {
  build_at(&inputs.config, &inputs.config.output_path, clusters).await
}

const NO_CLUSTERS: Option<&Vec<ClusterRow>> = None;

async fn names(store: &SqliteStore, id: i64) -> Vec<(CatalogType, String)> {
  store
    .names_for(id)
    .await
    .unwrap()
    .into_iter()
    .map(|n| (n.catalog, n.name))
    .collect()
}

fn has(names: &[(CatalogType, String)], catalog: CatalogType, name: &str) -> bool {
  names.iter().any(|(c, n)| *c == catalog && n == name)
}

/// Every object with its names, for comparing whole stores.
async fn snapshot(store: &SqliteStore) -> Vec<(SkyObject, Vec<CatalogName>)> {
  let mut out = Vec::new();
  for id in store.object_ids().await.unwrap() {
    let object = store.get_object(id).await.unwrap().unwrap();
    out.push((object, store.names_for(id).await.unwrap()));
  }
  out
}

// ─── Scenarios ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn single_star_end_to_end() {
  let inputs = inputs(
    "1,,,,Sirius,1.767791,-0.291751,2.64,-546.01,-1223.07,-5.5,5,A1V,Alp,,CMa\n",
    &dso_file(&[]),
    "catalog\tid\tname\n",
  );
  let (store, report) = build(&inputs, NO_CLUSTERS).await.unwrap();

  assert_eq!(store.object_ids().await.unwrap(), vec![1]);
  assert_eq!(store.names_for(1).await.unwrap(), vec![
    CatalogName::new(1, CatalogType::Name, "Sirius"),
    CatalogName::new(1, CatalogType::Bayer, "Alp"),
  ]);
  assert_eq!(report.objects, 1);
  assert_eq!(report.names, 2);
  assert_eq!(report.clusters, None);
}

#[tokio::test]
async fn star_phase_filters_and_attaches() {
  let inputs = full_inputs();
  let (store, report) = build(&inputs, NO_CLUSTERS).await.unwrap();

  assert_eq!(report.stars.read, 5);
  assert_eq!(report.stars.kept, 2);
  assert_eq!(report.stars.skipped, 3);

  let sirius = names(&store, 32263).await;
  for (catalog, name) in [
    (CatalogType::Hd, "48915"),
    (CatalogType::Hip, "32349"),
    (CatalogType::Hr, "2491"),
    (CatalogType::Bayer, "Alp"),
    (CatalogType::Flamsteed, "9"),
    (CatalogType::Name, "Sirius"),
    (CatalogType::Name, "Alp Canis Majoris"),
  ] {
    assert!(has(&sirius, catalog, name), "missing {catalog} {name}: {sirius:?}");
  }

  let object = store.get_object(32263).await.unwrap().unwrap();
  assert_eq!(object.magnitude, -1.44);
  assert_eq!(object.constellation.abbrev(), "CMa");
  assert_eq!(object.spectral_type.as_deref(), Some("A0m..."));
  assert_eq!(object.pm_ra, -546.01);

  let dashy = store.get_object(4).await.unwrap().unwrap();
  assert_eq!(dashy.spectral_type, None);

  for dropped in [0, 2, 3] {
    assert!(store.get_object(dropped).await.unwrap().is_none());
  }
}

#[tokio::test]
async fn cross_references_propagate_in_dso_phase() {
  let inputs = full_inputs();
  let (store, report) = build(&inputs, NO_CLUSTERS).await.unwrap();

  let ngc55 = names(&store, DSO_ID_BASE + 55).await;
  assert!(has(&ngc55, CatalogType::Ngc, "55"));
  assert!(has(&ngc55, CatalogType::Bennett, "1"));
  assert!(has(&ngc55, CatalogType::Dunlop, "507"));

  let praesepe = names(&store, DSO_ID_BASE + 100).await;
  assert!(has(&praesepe, CatalogType::Name, "Praesepe"));
  assert!(has(&praesepe, CatalogType::Messier, "44"));

  assert_eq!(names(&store, DSO_ID_BASE + 77).await, vec![(
    CatalogType::Name,
    "Lonely Galaxy".to_owned()
  )]);

  assert_eq!(report.dso.read, 7);
  assert_eq!(report.dso.kept, 5);
  assert_eq!(report.dso.skipped, 2);
}

#[tokio::test]
async fn extra_cross_references_are_merged() {
  let mut inputs = full_inputs();
  inputs.config.xref_path = Some(write(
    inputs.dir.path(),
    "xrefs.tsv",
    "list\tid\tcatalog\tbacking\n\
     Gum\t99\tNGC\t55\n\
     Dunlop\t507\tNGC\t55\n\
     Nope\t1\tNGC\t55\n",
  ));
  let (store, _) = build(&inputs, NO_CLUSTERS).await.unwrap();

  let ngc55 = names(&store, DSO_ID_BASE + 55).await;
  assert!(has(&ngc55, CatalogType::Gum, "99"));
  assert_eq!(ngc55.iter().filter(|(c, _)| *c == CatalogType::Dunlop).count(), 1);
}

#[tokio::test]
async fn dso_records_without_names_or_type_are_dropped() {
  let inputs = full_inputs();
  let (store, _) = build(&inputs, NO_CLUSTERS).await.unwrap();

  // UGC alone never names an object.
  assert!(store.get_object(DSO_ID_BASE + 9).await.unwrap().is_none());
  // Unknown type.
  assert!(store.get_object(DSO_ID_BASE + 10).await.unwrap().is_none());
}

#[tokio::test]
async fn magnitude_policy_on_insert() {
  let inputs = full_inputs();
  let (store, _) = build(&inputs, NO_CLUSTERS).await.unwrap();

  let dark = store.get_object(DSO_ID_BASE + 7).await.unwrap().unwrap();
  assert_eq!(dark.magnitude, 94.0);

  let galaxy = store.get_object(DSO_ID_BASE + 8).await.unwrap().unwrap();
  assert_eq!(galaxy.magnitude, 9.0);
  assert_eq!(galaxy.spectral_type, None);
  assert_eq!(galaxy.constellation.abbrev(), "And");
}

#[tokio::test]
async fn blue_magnitude_stands_in_for_missing_visual() {
  let inputs = inputs(
    "",
    &dso_file(&[
      dso_line(&[("id", "20"), ("type", "G"), ("ra", "1.0"), ("dec", "1.0"), ("bmag", "12.5"),
                 ("ngc", "20")]),
      dso_line(&[("id", "21"), ("type", "G"), ("ra", "2.0"), ("dec", "2.0"), ("ngc", "21")]),
    ]),
    "catalog\tid\tname\n",
  );
  let (store, _) = build(&inputs, NO_CLUSTERS).await.unwrap();

  let blue_only = store.get_object(DSO_ID_BASE + 20).await.unwrap().unwrap();
  assert_eq!(blue_only.magnitude, 12.5);
  let neither = store.get_object(DSO_ID_BASE + 21).await.unwrap().unwrap();
  assert_eq!(neither.magnitude, MAGNITUDE_UNKNOWN);
}

#[tokio::test]
async fn clusters_join_existing_objects_or_get_new_ids() {
  let inputs = full_inputs();
  let clusters = cluster_fixture();
  let (store, report) = build(&inputs, Some(&clusters)).await.unwrap();

  let summary = report.clusters.unwrap();
  assert_eq!(summary.read, 4);
  assert_eq!(summary.kept, 1);
  assert_eq!(summary.merged, 1);
  assert_eq!(summary.skipped, 2);

  // Praesepe already exists through NGC 2632.
  let praesepe = names(&store, DSO_ID_BASE + 100).await;
  assert!(has(&praesepe, CatalogType::Melotte, "88"));
  let praesepe_obj = store.get_object(DSO_ID_BASE + 100).await.unwrap().unwrap();
  assert_eq!(praesepe_obj.magnitude, 3.7);

  // Berkeley 59 is new.
  let b59 = store.get_object(CLUSTER_ID_BASE).await.unwrap().unwrap();
  assert_eq!(b59.magnitude, 8.5);
  assert_eq!(b59.distance, 1000.0);
  assert!(b59.pm_ra < -2.0);
  let b59_names = names(&store, CLUSTER_ID_BASE).await;
  assert!(has(&b59_names, CatalogType::Berkeley, "59"));
  assert!(has(&b59_names, CatalogType::Ngc, "7822"));

  assert!(store.get_object(CLUSTER_ID_BASE + 1).await.unwrap().is_none());
}

#[tokio::test]
async fn cluster_falls_back_to_ic_reference() {
  let inputs = inputs(
    "",
    &dso_file(&[dso_line(&[
      ("id", "300"),
      ("type", "OC"),
      ("ra", "266.6"),
      ("dec", "5.7"),
      ("vmag", "4.2"),
      ("ic", "4665"),
    ])]),
    "catalog\tid\tname\n",
  );
  let clusters = vec![ClusterRow {
    oid: 10,
    ra: 266.6,
    dec: 5.7,
    otype: "OpC".into(),
    ids: "NGC 9999|IC 4665|Cl Collinder 349".into(),
    ..Default::default()
  }];
  let (store, report) = build(&inputs, Some(&clusters)).await.unwrap();

  assert_eq!(store.object_ids().await.unwrap(), vec![DSO_ID_BASE + 300]);
  assert_eq!(names(&store, DSO_ID_BASE + 300).await, vec![
    (CatalogType::Ic, "4665".to_owned()),
    (CatalogType::Collinder, "349".to_owned()),
  ]);
  let summary = report.clusters.unwrap();
  assert_eq!(summary.merged, 1);
  assert_eq!(summary.kept, 0);
}

#[tokio::test]
async fn new_cluster_carries_every_reference() {
  let inputs = inputs("", &dso_file(&[]), "catalog\tid\tname\n");
  let clusters = vec![ClusterRow {
    oid: 11,
    ra: 10.0,
    dec: 10.0,
    otype: "OpC".into(),
    ids: "Cl Collinder 1|NGC 9998|IC 9997".into(),
    ..Default::default()
  }];
  let (store, _) = build(&inputs, Some(&clusters)).await.unwrap();

  let added = names(&store, CLUSTER_ID_BASE).await;
  assert!(has(&added, CatalogType::Collinder, "1"));
  assert!(has(&added, CatalogType::Ngc, "9998"));
  assert!(has(&added, CatalogType::Ic, "9997"));
}

#[tokio::test]
async fn id_spaces_follow_phases() {
  let inputs = full_inputs();
  let clusters = cluster_fixture();
  let (store, report) = build(&inputs, Some(&clusters)).await.unwrap();

  let ids = store.object_ids().await.unwrap();
  assert_eq!(ids.len() as u64, report.objects);
  let count = |space: IdSpace| ids.iter().filter(|id| IdSpace::of(**id) == space).count();
  assert_eq!(count(IdSpace::Star), report.stars.kept);
  assert_eq!(count(IdSpace::DeepSky), report.dso.kept);
  assert_eq!(count(IdSpace::Cluster), report.clusters.unwrap().kept);
}

#[tokio::test]
async fn rebuilding_gives_identical_rows() {
  let inputs = full_inputs();
  let clusters = cluster_fixture();

  let first = {
    let (store, _) = build(&inputs, Some(&clusters)).await.unwrap();
    snapshot(&store).await
  };

  let other = inputs.dir.path().join("other.db");
  let (second, _) = build_at(&inputs.config, &other, Some(&clusters)).await.unwrap();
  assert_eq!(snapshot(&second).await, first);

  // Same path again: the old file is discarded, not appended to.
  let (third, _) = build(&inputs, Some(&clusters)).await.unwrap();
  assert_eq!(snapshot(&third).await, first);
}

// ─── Failure handling ────────────────────────────────────────────────────────

struct Unreachable;

impl ClusterSource for Unreachable {
  async fn fetch_clusters(&self) -> Result<Vec<skyatlas_sources::Result<ClusterRow>>> {
    Err(Error::QueryStatus { status: reqwest::StatusCode::SERVICE_UNAVAILABLE })
  }
}

#[tokio::test]
async fn failed_query_skips_the_cluster_phase() {
  let inputs = full_inputs();
  let (store, report) = build(&inputs, Some(&Unreachable)).await.unwrap();

  assert_eq!(report.clusters, None);
  assert_eq!(report.stars.kept + report.dso.kept, store.count_objects().await.unwrap() as usize);
}

#[tokio::test]
async fn failed_query_is_fatal_when_required() {
  let mut inputs = full_inputs();
  inputs.config.cluster.required = true;

  let err = build(&inputs, Some(&Unreachable)).await.err().unwrap();
  assert!(matches!(err, Error::QueryStatus { .. }));
}

#[tokio::test]
async fn missing_source_is_fatal() {
  let mut inputs = full_inputs();
  inputs.config.dso_path = inputs.dir.path().join("absent.tsv");

  let err = build(&inputs, NO_CLUSTERS).await.err().unwrap();
  assert!(matches!(err, Error::Source(skyatlas_sources::Error::Open { .. })));
}

#[tokio::test]
async fn build_info_is_recorded() {
  let inputs = full_inputs();
  let clusters = cluster_fixture();
  let (store, report) = build(&inputs, Some(&clusters)).await.unwrap();
  drop(store);

  let reopened = SqliteStore::open(&inputs.config.output_path).await.unwrap();
  let info = async |key: &str| reopened.build_info(key).await.unwrap();

  assert_eq!(info("version").await.as_deref(), Some(env!("CARGO_PKG_VERSION")));
  let built_at = info("built_at").await.unwrap();
  assert!(chrono::DateTime::parse_from_rfc3339(&built_at).is_ok(), "{built_at}");
  assert_eq!(info("objects").await, Some(report.objects.to_string()));
  assert_eq!(info("names").await, Some(report.names.to_string()));
  assert_eq!(info("clusters").await.as_deref(), Some("true"));
  assert_eq!(reopened.count_objects().await.unwrap(), report.objects);
}

#[tokio::test]
async fn build_info_marks_skipped_cluster_phase() {
  let inputs = full_inputs();
  let (store, _) = build(&inputs, NO_CLUSTERS).await.unwrap();
  assert_eq!(store.build_info("clusters").await.unwrap().as_deref(), Some("false"));
}
