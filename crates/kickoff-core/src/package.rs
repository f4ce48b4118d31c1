//! Dependency installation through the project's package manager

use crate::config::PackageManagerConfig;
use crate::error::{Error, Result};
use camino::Utf8Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Run the package manager's install command inside `path`
///
/// Output is inherited so the user sees the installer's own progress.
///
/// # Errors
/// Returns error if the program cannot be started or exits unsuccessfully
pub async fn install_dependencies(
    path: &Utf8Path,
    package_manager: &PackageManagerConfig,
) -> Result<()> {
    let program = &package_manager.program;
    debug!(
        "Installing dependencies: {} {}",
        program,
        package_manager.install_args.join(" ")
    );

    let status = Command::new(program)
        .current_dir(path)
        .args(&package_manager.install_args)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .map_err(|e| Error::command_failed(program, format!("could not start: {}", e)))?;

    if !status.success() {
        let code = status
            .code()
            .map_or_else(|| "signal".to_string(), |c| c.to_string());
        return Err(Error::command_failed(
            program,
            format!("exited with status {}", code),
        ));
    }

    debug!("Dependency installation finished");
    Ok(())
}
