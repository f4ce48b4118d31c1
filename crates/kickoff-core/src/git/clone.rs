//! Template acquisition: clone and detach from upstream history

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use tokio::process::Command;
use tracing::debug;

/// Options for cloning the template
#[derive(Debug, Clone, Default)]
pub struct CloneOptions {
    /// Shallow clone with specified depth
    pub depth: Option<u32>,
    /// Branch to checkout after clone
    pub branch: Option<String>,
}

/// Clone a repository
///
/// # Arguments
/// * `url` - Repository URL to clone
/// * `destination` - Destination directory path
/// * `options` - Clone options
///
/// # Returns
/// Path to the cloned repository
///
/// # Errors
/// Returns error if:
/// - Invalid repository URL
/// - Destination already exists
/// - Clone operation fails
pub async fn clone_repository(
    url: &str,
    destination: &Utf8Path,
    options: &CloneOptions,
) -> Result<Utf8PathBuf> {
    debug!("Cloning template: {} -> {}", url, destination);

    if !is_valid_repo_url(url) {
        return Err(Error::invalid_repo_url(url));
    }

    if destination.exists() {
        return Err(Error::repo_exists(destination.as_str()));
    }

    let mut cmd = Command::new("git");
    cmd.arg("clone").arg("--quiet");

    if let Some(depth) = options.depth {
        // Local paths ignore --depth unless cloned through the file transport
        cmd.arg("--depth").arg(depth.to_string());
    }

    if let Some(branch) = &options.branch {
        cmd.arg("--branch").arg(branch);
    }

    cmd.arg(clone_source(url)).arg(destination.as_str());

    debug!("Running: git clone");
    let output = cmd.output().await.map_err(|_| Error::GitNotFound)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::clone_failed(stderr.trim()));
    }

    debug!("Template cloned successfully");
    Ok(destination.to_path_buf())
}

/// Remove version-control metadata, CI configuration and the lockfile
///
/// Entries that are already absent are skipped. Returns the paths that
/// were actually removed.
pub async fn strip_repository_metadata(
    path: &Utf8Path,
    ci_paths: &[String],
    lockfile: &str,
) -> Result<Vec<Utf8PathBuf>> {
    debug!("Detaching {} from template history", path);

    let mut removed = Vec::new();
    let entries = std::iter::once(".git")
        .chain(ci_paths.iter().map(String::as_str))
        .chain(std::iter::once(lockfile));

    for entry in entries {
        if entry.is_empty() {
            continue;
        }

        let target = path.join(entry);
        let metadata = match tokio::fs::symlink_metadata(&target).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => return Err(e.into()),
        };

        if metadata.is_dir() {
            tokio::fs::remove_dir_all(&target).await?;
        } else {
            tokio::fs::remove_file(&target).await?;
        }

        debug!("Removed {}", target);
        removed.push(target);
    }

    Ok(removed)
}

/// Validate if a string is a valid repository URL
///
/// Remote URLs (`https://`, `http://`, `git@`, `file://`) and existing
/// local directories are accepted.
fn is_valid_repo_url(url: &str) -> bool {
    url.starts_with("https://")
        || url.starts_with("git@")
        || url.starts_with("http://")
        || url.starts_with("file://")
        || Utf8Path::new(url).is_dir()
}

/// Turn a bare local path into a `file://` URL so shallow clones work
fn clone_source(url: &str) -> String {
    let path = Utf8Path::new(url);
    if path.is_dir() && !url.contains("://") {
        let absolute = path
            .canonicalize_utf8()
            .unwrap_or_else(|_| path.to_path_buf());
        format!("file://{}", absolute)
    } else {
        url.to_string()
    }
}
