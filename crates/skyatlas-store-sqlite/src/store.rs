//! [`SqliteStore`], the SQLite implementation of [`ObjectStore`].

use std::path::{Path, PathBuf};

use rusqlite::OptionalExtension as _;

use skyatlas_core::{
  catalog::CatalogType,
  object::{CatalogName, SkyObject},
  store::{BuildInfo, ObjectStore},
};

use crate::{
  encode::{RawName, RawObject},
  schema::{FINISH, SCHEMA},
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A skyatlas object store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Delete whatever is at `path` (and its WAL side files), then create a
  /// fresh store there.
  pub async fn create(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    for victim in [path.to_path_buf(), sibling(path, "-wal"), sibling(path, "-shm")] {
      match tokio::fs::remove_file(&victim).await {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(source) => {
          return Err(Error::Remove { path: victim.display().to_string(), source });
        }
      }
    }
    Self::open(path).await
  }

  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store; useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  #[cfg(test)]
  pub(crate) fn conn_for_tests(&self) -> &tokio_rusqlite::Connection { &self.conn }

  async fn count(&self, sql: &'static str) -> Result<u64> {
    let n: i64 = self
      .conn
      .call(move |conn| Ok(conn.query_row(sql, [], |r| r.get(0))?))
      .await?;
    Ok(n.max(0) as u64)
  }
}

/// `path` with `suffix` appended to the file name, as SQLite names its WAL and
/// shared-memory files.
fn sibling(path: &Path, suffix: &str) -> PathBuf {
  let mut s = path.as_os_str().to_owned();
  s.push(suffix);
  PathBuf::from(s)
}

// ─── ObjectStore impl ────────────────────────────────────────────────────────

impl ObjectStore for SqliteStore {
  type Error = Error;

  // ── Writes ────────────────────────────────────────────────────────────────

  async fn insert_object(&self, object: SkyObject) -> Result<bool> {
    let raw = RawObject::from_object(&object);

    let inserted = self
      .conn
      .call(move |conn| {
        let n = conn.execute(
          &format!(
            "INSERT OR IGNORE INTO objects ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            RawObject::COLUMNS
          ),
          rusqlite::params![
            raw.id,
            raw.object_type,
            raw.ra,
            raw.dec,
            raw.magnitude,
            raw.pm_ra,
            raw.pm_dec,
            raw.distance,
            raw.radial_velocity,
            raw.constellation,
            raw.spectral_type,
          ],
        )?;
        Ok(n > 0)
      })
      .await?;

    Ok(inserted)
  }

  async fn insert_names(&self, names: Vec<CatalogName>) -> Result<usize> {
    if names.is_empty() {
      return Ok(0);
    }

    let added = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let mut added = 0;
        {
          let mut stmt = tx.prepare_cached(
            "INSERT OR IGNORE INTO names (object_id, catalog, name) VALUES (?1, ?2, ?3)",
          )?;
          for n in &names {
            added += stmt.execute(rusqlite::params![n.object_id, n.catalog.code(), n.name])?;
          }
        }
        tx.commit()?;
        Ok(added)
      })
      .await?;

    Ok(added)
  }

  async fn put_build_info(&self, info: BuildInfo) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT OR REPLACE INTO build_info (key, value) VALUES (?1, ?2)",
          rusqlite::params![info.key, info.value],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn find_object_by_name(&self, catalog: CatalogType, name: &str) -> Result<Option<i64>> {
    let code = catalog.code();
    let name = name.trim().to_owned();

    let id: Option<i64> = self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(
          "SELECT MIN(object_id) FROM names WHERE catalog = ?1 AND name = ?2",
          rusqlite::params![code, name],
          |r| r.get(0),
        )?)
      })
      .await?;

    Ok(id)
  }

  async fn build_info(&self, key: &str) -> Result<Option<String>> {
    let key = key.to_owned();
    let value: Option<String> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row("SELECT value FROM build_info WHERE key = ?1", rusqlite::params![key], |r| {
              r.get(0)
            })
            .optional()?,
        )
      })
      .await?;
    Ok(value)
  }

  async fn get_object(&self, id: i64) -> Result<Option<SkyObject>> {
    let raw: Option<RawObject> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {} FROM objects WHERE id = ?1", RawObject::COLUMNS),
              rusqlite::params![id],
              RawObject::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawObject::into_object).transpose()
  }

  async fn names_for(&self, object_id: i64) -> Result<Vec<CatalogName>> {
    let raws: Vec<RawName> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT object_id, catalog, name FROM names
           WHERE object_id = ?1
           ORDER BY catalog, name",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![object_id], |row| {
            Ok(RawName {
              object_id: row.get(0)?,
              catalog:   row.get(1)?,
              name:      row.get(2)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawName::into_name).collect()
  }

  async fn object_ids(&self) -> Result<Vec<i64>> {
    let ids = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare("SELECT id FROM objects ORDER BY id")?;
        let rows = stmt
          .query_map([], |r| r.get(0))?
          .collect::<rusqlite::Result<Vec<i64>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(ids)
  }

  async fn count_objects(&self) -> Result<u64> { self.count("SELECT COUNT(*) FROM objects").await }

  async fn count_names(&self) -> Result<u64> { self.count("SELECT COUNT(*) FROM names").await }

  // ── Lifecycle ─────────────────────────────────────────────────────────────

  async fn finish(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(FINISH)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}
