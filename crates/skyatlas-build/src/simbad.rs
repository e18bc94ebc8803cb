//! Client for the SIMBAD TAP service.
//!
//! One synchronous ADQL query, answered as a JSON table. There is no retry:
//! whatever the first attempt returns is final for the run.

use std::time::Duration;

use reqwest::Client;
use skyatlas_core::record::ClusterRow;
use skyatlas_sources::tap::TapTable;

use crate::{ClusterConfig, Error, Result, phase::clusters::ClusterSource};

/// Open clusters, globular clusters, generic clusters and associations with
/// their photometry and every identifier SIMBAD knows. Ordered by `oid` so
/// synthesized ids are stable between runs.
pub const CLUSTER_QUERY: &str = "\
SELECT basic.oid, basic.ra, basic.dec, basic.otype, basic.pmra, basic.pmdec, \
basic.plx_value, basic.rvz_radvel, allfluxes.V, allfluxes.B, allfluxes.J, allfluxes.H, ids.ids \
FROM basic \
JOIN ids ON ids.oidref = basic.oid \
LEFT JOIN allfluxes ON allfluxes.oidref = basic.oid \
WHERE basic.otype IN ('OpC', 'GlC', 'Cl*', 'As*') \
AND basic.ra IS NOT NULL AND basic.dec IS NOT NULL \
ORDER BY basic.oid";

/// SIMBAD TAP client.
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct SimbadClient {
  client:   Client,
  endpoint: String,
}

impl SimbadClient {
  pub fn new(config: &ClusterConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .user_agent(concat!("skyatlas-build/", env!("CARGO_PKG_VERSION")))
      .build()?;
    Ok(Self { client, endpoint: config.endpoint.clone() })
  }

  /// Run `query` and decode the result table.
  pub async fn query(&self, query: &str) -> Result<TapTable> {
    let resp = self
      .client
      .post(&self.endpoint)
      .form(&[
        ("REQUEST", "doQuery"),
        ("LANG", "ADQL"),
        ("FORMAT", "json"),
        ("QUERY", query),
      ])
      .send()
      .await?;

    if !resp.status().is_success() {
      return Err(Error::QueryStatus { status: resp.status() });
    }
    Ok(resp.json().await?)
  }
}

impl ClusterSource for SimbadClient {
  async fn fetch_clusters(&self) -> Result<Vec<skyatlas_sources::Result<ClusterRow>>> {
    let table = self.query(CLUSTER_QUERY).await?;
    Ok(table.into_cluster_rows()?.collect())
  }
}
