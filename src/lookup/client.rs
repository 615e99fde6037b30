//! Nearby enrichment lookup client
//!
//! Stateless: each call issues one GET against the configured endpoint
//! and decodes the whole response. Per-record gaps are tolerated during
//! decoding; an undecodable or failed response fails the whole call with
//! [`Error::Lookup`] and the caller decides whether to retry or suppress
//! enrichment.

use crate::config::LookupConfig;
use crate::error::{Error, Result};
use crate::lookup::types::{sorted_records, EnrichmentRecord, LookupResponse};
use std::time::Duration;

/// Stateless client for the nearby enrichment lookup service
pub struct NearbyInfoLookup {
    client: reqwest::Client,
    endpoint: String,
}

impl NearbyInfoLookup {
    /// Create a client from configuration
    pub fn new(config: &LookupConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self::with_client(client, config.endpoint.clone()))
    }

    /// Create a client around an existing `reqwest::Client`
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Fetch enrichment records for the given page ids, sorted by title.
    ///
    /// An empty id set short-circuits to an empty list without a network
    /// round-trip. Concurrent calls with different id sets are
    /// independent; no deduplication or caching happens here.
    pub async fn fetch(&self, page_ids: &[u64]) -> Result<Vec<EnrichmentRecord>> {
        if page_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids = page_ids
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join("|");

        tracing::debug!(ids = %ids, "fetching nearby enrichment");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("action", "query"),
                ("prop", "pageterms"),
                ("pageids", ids.as_str()),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|e| Error::Lookup(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Lookup(format!(
                "unexpected status {}",
                response.status()
            )));
        }

        let body: LookupResponse = response
            .json()
            .await
            .map_err(|e| Error::Lookup(format!("undecodable response: {}", e)))?;

        Ok(sorted_records(body))
    }
}
