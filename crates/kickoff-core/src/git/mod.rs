//! Git operations module
//!
//! This module provides async Git operations used while scaffolding:
//! - Cloning the starter template and detaching it from upstream history
//! - Repository initialization
//! - Remote management
//!
//! # Examples
//!
//! ```no_run
//! use kickoff_core::git::{clone_repository, strip_repository_metadata, CloneOptions};
//! use camino::Utf8Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dest = Utf8Path::new("/tmp/my-app");
//! let options = CloneOptions {
//!     depth: Some(1),
//!     ..Default::default()
//! };
//! clone_repository("https://github.com/user/starter.git", dest, &options).await?;
//! strip_repository_metadata(dest, &[".github".to_string()], "package-lock.json").await?;
//! # Ok(())
//! # }
//! ```

mod clone;
mod init;
mod remote;

// Re-export public API
pub use clone::{clone_repository, strip_repository_metadata, CloneOptions};
pub use init::{check_git_available, init_repository, InitOptions};
pub use remote::{add_remote, remote_url};
