//! Repository initialization operations

use crate::config::GitConfig;
use crate::error::{Error, Result};
use camino::Utf8Path;
use tokio::process::Command;
use tracing::debug;

/// Options for initializing a git repository
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Default branch name (e.g., "main")
    pub default_branch: String,
    /// Initial commit message, if an initial commit should be created
    pub initial_commit_message: Option<String>,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self::from_config(&GitConfig::default())
    }
}

impl InitOptions {
    /// Build options from the git section of the runtime config
    pub fn from_config(git_config: &GitConfig) -> Self {
        Self {
            default_branch: git_config.default_branch.clone(),
            initial_commit_message: git_config
                .initial_commit
                .then(|| git_config.initial_commit_message.clone()),
        }
    }
}

/// Initialize a new git repository
///
/// # Arguments
/// * `path` - Directory to initialize as a git repository
/// * `options` - Initialization options
///
/// # Errors
/// Returns error if:
/// - Directory doesn't exist
/// - Git is not installed
/// - Git init fails
/// - Initial commit creation fails
pub async fn init_repository(path: &Utf8Path, options: &InitOptions) -> Result<()> {
    debug!("Initializing git repository at: {}", path);

    check_git_available().await?;

    if !path.exists() {
        return Err(Error::git_operation(format!(
            "cannot initialize missing directory {}",
            path
        )));
    }

    if path.join(".git").exists() {
        debug!("Git repository already exists at: {}", path);
        return Ok(());
    }

    debug!("Running: git init with branch {}", options.default_branch);
    let output = Command::new("git")
        .current_dir(path)
        .args(["init", "--quiet", "--initial-branch", &options.default_branch])
        .output()
        .await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::git_operation(format!("git init failed: {}", stderr)));
    }

    debug!("Repository initialized successfully");

    if let Some(message) = &options.initial_commit_message {
        create_initial_commit(path, message).await?;
    }

    Ok(())
}

/// Stage everything in the scaffold and commit it
async fn create_initial_commit(path: &Utf8Path, message: &str) -> Result<()> {
    debug!("Creating initial commit");

    let output = Command::new("git")
        .current_dir(path)
        .args(["add", "--all"])
        .output()
        .await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::git_operation(format!("git add failed: {}", stderr)));
    }

    let output = Command::new("git")
        .current_dir(path)
        .args(["commit", "--quiet", "-m", message])
        .output()
        .await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::git_operation(format!(
            "git commit failed: {}",
            stderr
        )));
    }

    debug!("Initial commit created");
    Ok(())
}

/// Check if git is available in PATH
pub async fn check_git_available() -> Result<()> {
    let output = Command::new("git")
        .arg("--version")
        .output()
        .await
        .map_err(|_| Error::GitNotFound)?;

    if !output.status.success() {
        return Err(Error::GitNotFound);
    }

    Ok(())
}
