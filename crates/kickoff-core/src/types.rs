//! Core types for scaffolding

use serde::{Deserialize, Serialize};

/// Parameters collected once per run and used by every later step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaffoldParams {
    /// Human readable application name (HTML title, README heading)
    pub app_name: String,
    /// Package name; also the name of the output directory
    pub package_name: String,
    /// Package author and license copyright holder; may be empty
    pub author: String,
    /// One-line package description
    pub description: String,
    /// `MAJOR.MINOR.PATCH` version
    pub version: String,
    /// SPDX license identifier
    pub license: String,
    /// Repository URL for the manifest and the `origin` remote; may be empty
    pub repository_url: String,
}

impl ScaffoldParams {
    /// Labelled values in resolution order, for summaries
    pub fn summary(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("App name", &self.app_name),
            ("Package name", &self.package_name),
            ("Description", &self.description),
            ("Author", &self.author),
            ("Version", &self.version),
            ("License", &self.license),
            ("Repository", &self.repository_url),
        ]
    }

    /// Whether a repository URL was supplied
    pub fn has_repository(&self) -> bool {
        !self.repository_url.trim().is_empty()
    }
}
