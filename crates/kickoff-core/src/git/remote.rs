//! Registering the project repository as a git remote

use crate::error::{Error, Result};
use camino::Utf8Path;
use std::process::Output;
use tokio::process::Command;
use tracing::debug;

/// Register `url` as remote `name` of the repository at `path`
///
/// Registering the URL a remote already points at is a no-op.
///
/// # Errors
/// `RemoteExists` when `name` is already bound to a different URL,
/// `GitOperation` when git rejects the remote.
pub async fn add_remote(path: &Utf8Path, name: &str, url: &str) -> Result<()> {
    match remote_url(path, name).await? {
        Some(existing) if existing == url => {
            debug!("Remote '{}' already points at {}", name, url);
            return Ok(());
        }
        Some(existing) => {
            debug!("Remote '{}' is bound to {}", name, existing);
            return Err(Error::remote_exists(name));
        }
        None => {}
    }

    let output = git_remote(path, &["add", name, url]).await?;
    if !output.status.success() {
        return Err(Error::git_operation(format!(
            "git remote add {} failed: {}",
            name,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    debug!("Remote '{}' -> {}", name, url);
    Ok(())
}

/// URL of remote `name`, or `None` when there is no such remote
pub async fn remote_url(path: &Utf8Path, name: &str) -> Result<Option<String>> {
    let output = git_remote(path, &["get-url", name]).await?;
    if !output.status.success() {
        return Ok(None);
    }

    let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
    Ok(Some(url).filter(|url| !url.is_empty()))
}

async fn git_remote(path: &Utf8Path, args: &[&str]) -> Result<Output> {
    Command::new("git")
        .current_dir(path)
        .arg("remote")
        .args(args)
        .output()
        .await
        .map_err(|_| Error::GitNotFound)
}
