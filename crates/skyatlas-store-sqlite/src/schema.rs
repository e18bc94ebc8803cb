//! SQL schema for the skyatlas SQLite store.
//!
//! Executed once at connection startup. The output file is rebuilt from empty
//! on every run, so there are no migrations; `user_version` only tells readers
//! which layout they are looking at.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA synchronous = NORMAL;
PRAGMA foreign_keys = ON;

-- Written once per id, never updated.
CREATE TABLE IF NOT EXISTS objects (
    id              INTEGER PRIMARY KEY,
    object_type     INTEGER NOT NULL,
    ra              REAL    NOT NULL,   -- radians, J2000
    dec             REAL    NOT NULL,   -- radians, J2000
    magnitude       REAL    NOT NULL,   -- 99 = unknown
    pm_ra           REAL    NOT NULL,   -- mas/yr
    pm_dec          REAL    NOT NULL,   -- mas/yr
    distance        REAL    NOT NULL,   -- parsecs, 0 = unknown
    radial_velocity REAL    NOT NULL,   -- km/s
    constellation   INTEGER NOT NULL,   -- index into the IAU abbreviation list
    spectral_type   TEXT
);

-- Append-only. The key absorbs re-attaching the same designation.
CREATE TABLE IF NOT EXISTS names (
    object_id INTEGER NOT NULL REFERENCES objects(id),
    catalog   INTEGER NOT NULL,
    name      TEXT    NOT NULL COLLATE NOCASE,
    PRIMARY KEY (object_id, catalog, name)
);

CREATE INDEX IF NOT EXISTS names_lookup_idx ON names(catalog, name);

CREATE TABLE IF NOT EXISTS build_info (
    key   TEXT PRIMARY KEY,
    value TEXT NOT NULL
);

PRAGMA user_version = 1;
";

/// Fold the WAL back into the main file and compact it.
pub const FINISH: &str = "
PRAGMA wal_checkpoint(TRUNCATE);
PRAGMA journal_mode = DELETE;
VACUUM;
";
