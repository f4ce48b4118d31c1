//! # kickoff-core
//!
//! Library behind the `kickoff` CLI providing:
//! - Parameter collection with validation and interactive fallback
//! - Template acquisition (shallow clone, history removal)
//! - Deterministic rewriting of the template's manifest, HTML, home page and README
//! - License generation from the SPDX license list
//! - Repository initialization and dependency installation
//!
//! # Examples
//!
//! ## Scaffold a project from resolved parameters
//!
//! ```no_run
//! use kickoff_core::config::ConfigLoader;
//! use kickoff_core::license::SpdxRegistry;
//! use kickoff_core::pipeline::ScaffoldPipeline;
//! use kickoff_core::types::ScaffoldParams;
//! use camino::Utf8Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigLoader::new().load()?;
//! let registry = SpdxRegistry::from_config(&config)?;
//!
//! let params = ScaffoldParams {
//!     app_name: "Acme Dashboard".to_string(),
//!     package_name: "acme-dashboard".to_string(),
//!     author: "Jane Doe".to_string(),
//!     description: "Internal dashboard".to_string(),
//!     version: "0.1.0".to_string(),
//!     license: "MIT".to_string(),
//!     repository_url: String::new(),
//! };
//!
//! let report = ScaffoldPipeline::new(&config, &registry)
//!     .run(&params, Utf8Path::new("."))
//!     .await?;
//! println!("Created {}", report.project_dir);
//! # Ok(())
//! # }
//! ```
//!
//! ## Rewrite a manifest in memory
//!
//! ```
//! use kickoff_core::rewrite::rewrite_manifest;
//! use kickoff_core::types::ScaffoldParams;
//!
//! let params = ScaffoldParams {
//!     app_name: "Acme".to_string(),
//!     package_name: "acme".to_string(),
//!     author: String::new(),
//!     description: "Acme app".to_string(),
//!     version: "1.0.0".to_string(),
//!     license: "MIT".to_string(),
//!     repository_url: String::new(),
//! };
//!
//! let manifest = rewrite_manifest(r#"{ "name": "starter" }"#, &params);
//! assert_eq!(manifest, r#"{ "name": "acme" }"#);
//! ```

pub mod config;
pub mod error;
pub mod git;
pub mod license;
pub mod package;
pub mod params;
pub mod pipeline;
pub mod rewrite;
pub mod slug;
pub mod types;

// Re-export commonly used types
pub use config::{ConfigLoader, KickoffConfig};
pub use error::{Error, Result};
pub use params::{ParamOverrides, ParamResolver, PromptSpec, Prompter};
pub use pipeline::{PipelineOptions, ScaffoldPipeline, ScaffoldReport, Step, StepStatus};
pub use types::ScaffoldParams;
