//! SPDX license registry client

use super::LicenseLookup;
use crate::config::{KickoffConfig, NetworkConfig};
use crate::error::{Error, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// Entry in the SPDX license list
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseEntry {
    /// SPDX identifier (e.g., "MIT")
    pub license_id: String,
    /// URL of the JSON document holding the full text
    pub details_url: String,
}

/// License list as served by the registry
///
/// spdx.org wraps the list in an object; mirrors may serve the bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LicenseList {
    Wrapped { licenses: Vec<LicenseEntry> },
    Bare(Vec<LicenseEntry>),
}

impl LicenseList {
    fn into_entries(self) -> Vec<LicenseEntry> {
        match self {
            Self::Wrapped { licenses } => licenses,
            Self::Bare(licenses) => licenses,
        }
    }
}

/// Detail document for a single license
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LicenseDetails {
    license_text: String,
}

/// Looks licenses up in the SPDX license list over HTTP
pub struct SpdxRegistry {
    client: reqwest::Client,
    registry_url: String,
}

impl SpdxRegistry {
    /// Create a registry client for `registry_url`
    pub fn new(registry_url: impl Into<String>, network: &NetworkConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(&network.user_agent);
        if let Some(timeout) = network.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            registry_url: registry_url.into(),
        })
    }

    /// Create a registry client from runtime configuration
    pub fn from_config(config: &KickoffConfig) -> Result<Self> {
        Self::new(config.license.registry_url.clone(), &config.network)
    }

    /// Fetch the full license list
    pub async fn list(&self) -> Result<Vec<LicenseEntry>> {
        debug!("Fetching license list from: {}", self.registry_url);

        let response = self
            .client
            .get(&self.registry_url)
            .send()
            .await
            .map_err(|e| Error::registry_unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::registry_unavailable(format!(
                "{} returned HTTP {}",
                self.registry_url,
                response.status()
            )));
        }

        let list: LicenseList = response
            .json()
            .await
            .map_err(|e| Error::registry_unavailable(format!("malformed license list: {}", e)))?;

        Ok(list.into_entries())
    }

    /// Fetch the text of one license from its detail URL
    async fn fetch_text(&self, entry: &LicenseEntry) -> Result<String> {
        debug!("Fetching license text from: {}", entry.details_url);

        let response = self
            .client
            .get(&entry.details_url)
            .send()
            .await
            .map_err(|e| Error::registry_unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::registry_unavailable(format!(
                "{} returned HTTP {}",
                entry.details_url,
                response.status()
            )));
        }

        let details: LicenseDetails = response.json().await.map_err(|e| {
            Error::registry_unavailable(format!("malformed license details: {}", e))
        })?;

        Ok(details.license_text)
    }
}

#[async_trait]
impl LicenseLookup for SpdxRegistry {
    async fn lookup(&self, id: &str) -> Result<String> {
        let entries = self.list().await?;

        // Identifiers are matched exactly; "mit" is not "MIT"
        let entry = entries
            .iter()
            .find(|entry| entry.license_id == id)
            .ok_or_else(|| Error::license_not_found(id))?;

        self.fetch_text(entry).await
    }
}
