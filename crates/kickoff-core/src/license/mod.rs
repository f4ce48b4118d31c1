//! License resolution
//!
//! License text is looked up by SPDX identifier through the [`LicenseLookup`]
//! capability, then copyright placeholders are filled in with the author and
//! the current year. When anything in that chain fails, the scaffold is left
//! without a LICENSE file rather than with a stale or half-written one.

mod spdx;

pub use spdx::{LicenseEntry, SpdxRegistry};

use crate::error::Result;
use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use chrono::{Datelike, Local};
use tracing::debug;

/// Name of the generated license file
pub const LICENSE_FILE: &str = "LICENSE";

/// Placeholder spellings for the copyright year across SPDX license texts
const YEAR_PLACEHOLDERS: [&str; 4] = ["<year>", "[year]", "[yyyy]", "{yyyy}"];

/// Placeholder spellings for the copyright holder across SPDX license texts
const HOLDER_PLACEHOLDERS: [&str; 5] = [
    "<copyright holders>",
    "<owner>",
    "[fullname]",
    "[name of copyright owner]",
    "{name of copyright owner}",
];

/// Source of license texts keyed by SPDX identifier
#[async_trait]
pub trait LicenseLookup: Send + Sync {
    /// Raw license text for `id`
    ///
    /// # Errors
    /// `RegistryUnavailable` when the registry cannot be reached or answers
    /// with a failure status, `LicenseNotFound` when `id` is not listed.
    async fn lookup(&self, id: &str) -> Result<String>;
}

/// Fill in copyright year and holder placeholders
pub fn render_license_text(template: &str, holder: &str, year: i32) -> String {
    let year = year.to_string();
    let mut text = template.to_string();

    for placeholder in YEAR_PLACEHOLDERS {
        text = text.replace(placeholder, &year);
    }
    for placeholder in HOLDER_PLACEHOLDERS {
        text = text.replace(placeholder, holder);
    }

    text
}

/// Current calendar year in local time
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Look up a license and write it to `<dir>/LICENSE`
///
/// # Returns
/// Path of the written file
///
/// # Errors
/// Returns the lookup or write error. Before returning an error, any
/// existing LICENSE file in `dir` is removed.
pub async fn resolve_license(
    lookup: &dyn LicenseLookup,
    id: &str,
    holder: &str,
    dir: &Utf8Path,
) -> Result<Utf8PathBuf> {
    debug!("Resolving license: {}", id);

    match write_license(lookup, id, holder, dir).await {
        Ok(path) => Ok(path),
        Err(e) => {
            debug!("License generation failed: {}", e);
            remove_license(dir).await?;
            Err(e)
        }
    }
}

async fn write_license(
    lookup: &dyn LicenseLookup,
    id: &str,
    holder: &str,
    dir: &Utf8Path,
) -> Result<Utf8PathBuf> {
    let template = lookup.lookup(id).await?;
    let text = render_license_text(&template, holder, current_year());

    let path = dir.join(LICENSE_FILE);
    tokio::fs::write(&path, text).await?;

    debug!("Wrote {}", path);
    Ok(path)
}

/// Remove `<dir>/LICENSE` if present
///
/// # Returns
/// Whether a file was removed
pub async fn remove_license(dir: &Utf8Path) -> Result<bool> {
    let path = dir.join(LICENSE_FILE);
    match tokio::fs::remove_file(&path).await {
        Ok(()) => {
            debug!("Removed {}", path);
            Ok(true)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}
