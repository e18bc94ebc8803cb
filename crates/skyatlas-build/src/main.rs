//! skyatlas-build binary.
//!
//! Reads `skyatlas.toml` (or the path given with `--config`), deletes the
//! output database, and rebuilds it from the configured catalogs.
//!
//! ```text
//! cargo run -p skyatlas-build -- --output sky.db --skip-clusters
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;
use skyatlas_build::{BuildConfig, Pipeline, simbad::SimbadClient};
use skyatlas_store_sqlite::SqliteStore;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Build the skyatlas object database")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "skyatlas.toml")]
  config: PathBuf,

  /// Write the database here instead of the configured `output_path`.
  #[arg(short, long)]
  output: Option<PathBuf>,

  /// Do not query SIMBAD for clusters.
  #[arg(long)]
  skip_clusters: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(
      config::Environment::with_prefix("SKYATLAS")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true),
    )
    .build()
    .context("failed to read config file")?;

  let mut cfg: BuildConfig = settings
    .try_deserialize()
    .context("failed to deserialise BuildConfig")?;
  if let Some(output) = cli.output {
    cfg.output_path = output;
  }
  if cli.skip_clusters {
    cfg.cluster.enabled = false;
  }
  for path in [
    &mut cfg.output_path,
    &mut cfg.stars_path,
    &mut cfg.dso_path,
    &mut cfg.names_path,
  ] {
    *path = expand_tilde(path);
  }
  if let Some(path) = &mut cfg.xref_path {
    *path = expand_tilde(path);
  }
  cfg.validate()?;

  let pipeline = Pipeline::load(&cfg)
    .with_context(|| format!("failed to load names from {:?}", cfg.names_path))?;

  let store = SqliteStore::create(&cfg.output_path)
    .await
    .with_context(|| format!("failed to create store at {:?}", cfg.output_path))?;

  let simbad = if cfg.cluster.enabled {
    Some(SimbadClient::new(&cfg.cluster).context("failed to build HTTP client")?)
  } else {
    None
  };

  tracing::info!("Building {:?}", cfg.output_path);
  let report = pipeline
    .run(&cfg, &store, simbad.as_ref())
    .await
    .context("build failed")?;

  tracing::info!(
    "Wrote {} objects and {} names to {:?}",
    report.objects,
    report.names,
    cfg.output_path
  );
  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
