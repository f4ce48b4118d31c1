//! Template rewriting
//!
//! Applies deterministic text substitutions to the handful of generated files
//! in a freshly cloned template:
//! - `manifest`: package name, version, description, author, license, repository URL
//! - `markup`: HTML `<title>` and the home page `<h1>`
//! - `readme`: title block, description, Installation/Usage sections, clone URL, license
//!
//! A file without the expected marker is left as it is. A file that is missing
//! altogether is an error.

pub mod manifest;
pub mod markup;
pub mod readme;

use crate::config::TemplateConfig;
use crate::error::Result;
use crate::types::ScaffoldParams;
use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

pub use manifest::rewrite_manifest;
pub use readme::rewrite_readme;

/// Kind of generated file and the edit it receives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateFile {
    Manifest,
    HtmlEntry,
    HomeComponent,
    Readme,
}

impl TemplateFile {
    /// Files in the order they are rewritten
    pub fn all() -> [Self; 4] {
        [
            Self::Manifest,
            Self::HtmlEntry,
            Self::HomeComponent,
            Self::Readme,
        ]
    }

    /// Path of this file relative to the scaffold root
    pub fn relative_path<'a>(&self, layout: &'a TemplateConfig) -> &'a str {
        match self {
            Self::Manifest => &layout.manifest_file,
            Self::HtmlEntry => &layout.html_file,
            Self::HomeComponent => &layout.home_component,
            Self::Readme => &layout.readme_file,
        }
    }

    /// Apply this file's substitutions to its content
    pub fn apply(&self, content: &str, params: &ScaffoldParams) -> String {
        match self {
            Self::Manifest => rewrite_manifest(content, params),
            Self::HtmlEntry => markup::rewrite_title(content, &params.app_name),
            Self::HomeComponent => markup::rewrite_heading(content, &params.app_name),
            Self::Readme => rewrite_readme(content, params),
        }
    }
}

/// Rewrites the generated files of a scaffold in place
#[derive(Debug)]
pub struct TemplateRewriter<'a> {
    root: &'a Utf8Path,
    layout: &'a TemplateConfig,
}

impl<'a> TemplateRewriter<'a> {
    /// Create a rewriter for the scaffold at `root`
    pub fn new(root: &'a Utf8Path, layout: &'a TemplateConfig) -> Self {
        Self { root, layout }
    }

    /// Rewrite every generated file
    ///
    /// # Returns
    /// Paths of the files whose content changed
    ///
    /// # Errors
    /// Returns error if a generated file cannot be read or written
    pub async fn rewrite_all(&self, params: &ScaffoldParams) -> Result<Vec<Utf8PathBuf>> {
        let mut changed = Vec::new();

        for file in TemplateFile::all() {
            if let Some(path) = self.rewrite_file(file, params).await? {
                changed.push(path);
            }
        }

        debug!("Rewrote {} template file(s)", changed.len());
        Ok(changed)
    }

    /// Rewrite a single file, returning its path when the content changed
    pub async fn rewrite_file(
        &self,
        file: TemplateFile,
        params: &ScaffoldParams,
    ) -> Result<Option<Utf8PathBuf>> {
        let path = self.root.join(file.relative_path(self.layout));
        let original = tokio::fs::read_to_string(&path).await?;
        let rewritten = file.apply(&original, params);

        if rewritten == original {
            debug!("No substitutions applied to {}", path);
            return Ok(None);
        }

        tokio::fs::write(&path, rewritten).await?;
        debug!("Rewrote {}", path);
        Ok(Some(path))
    }
}
