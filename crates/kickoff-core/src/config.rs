//! Runtime configuration with layered precedence
//!
//! Loads configuration from multiple sources with the following precedence (low to high):
//! 1. Built-in defaults
//! 2. Config file (~/.kickoff/config.yaml, or an explicit path)
//! 3. Environment variables (KICKOFF_* prefix)
//! 4. CLI flags (handled by caller)

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::time::Duration;
use tracing::debug;

/// Upstream starter template cloned for every scaffold
pub const DEFAULT_TEMPLATE_URL: &str = "https://github.com/foxxyz/front-end-starter.git";

/// Canonical SPDX license list
pub const DEFAULT_REGISTRY_URL: &str = "https://spdx.org/licenses/licenses.json";

/// Complete runtime configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct KickoffConfig {
    /// Template repository and the files rewritten inside it
    #[serde(default)]
    pub template: TemplateConfig,

    /// License registry settings
    #[serde(default)]
    pub license: LicenseConfig,

    /// Git workflow defaults
    #[serde(default)]
    pub git: GitConfig,

    /// Dependency installer
    #[serde(default)]
    pub package_manager: PackageManagerConfig,

    /// Network and HTTP configuration
    #[serde(default)]
    pub network: NetworkConfig,
}

/// Template repository configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TemplateConfig {
    /// Clone URL of the starter template
    #[serde(default = "default_template_url")]
    pub url: String,

    /// Branch to clone; remote HEAD when unset
    #[serde(default)]
    pub branch: Option<String>,

    /// Shallow clone depth; full history when unset
    #[serde(default = "default_clone_depth")]
    pub depth: Option<u32>,

    /// Package manifest, relative to the scaffold root
    #[serde(default = "default_manifest_file")]
    pub manifest_file: String,

    /// HTML entry point
    #[serde(default = "default_html_file")]
    pub html_file: String,

    /// Home page component
    #[serde(default = "default_home_component")]
    pub home_component: String,

    /// README
    #[serde(default = "default_readme_file")]
    pub readme_file: String,

    /// CI configuration entries removed after cloning
    #[serde(default = "default_ci_paths")]
    pub ci_paths: Vec<String>,

    /// Dependency lockfile removed after cloning
    #[serde(default = "default_lockfile")]
    pub lockfile: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            url: default_template_url(),
            branch: None,
            depth: default_clone_depth(),
            manifest_file: default_manifest_file(),
            html_file: default_html_file(),
            home_component: default_home_component(),
            readme_file: default_readme_file(),
            ci_paths: default_ci_paths(),
            lockfile: default_lockfile(),
        }
    }
}

fn default_template_url() -> String {
    DEFAULT_TEMPLATE_URL.to_string()
}
fn default_clone_depth() -> Option<u32> {
    Some(1)
}
fn default_manifest_file() -> String {
    "package.json".to_string()
}
fn default_html_file() -> String {
    "index.html".to_string()
}
fn default_home_component() -> String {
    "src/pages/Home.vue".to_string()
}
fn default_readme_file() -> String {
    "README.md".to_string()
}
fn default_ci_paths() -> Vec<String> {
    vec![
        ".github".to_string(),
        ".circleci".to_string(),
        ".gitlab-ci.yml".to_string(),
        ".travis.yml".to_string(),
    ]
}
fn default_lockfile() -> String {
    "package-lock.json".to_string()
}

/// License registry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LicenseConfig {
    /// URL of the SPDX license list
    #[serde(default = "default_registry_url")]
    pub registry_url: String,

    /// License identifier offered when prompting
    #[serde(default = "default_license")]
    pub default_license: String,
}

impl Default for LicenseConfig {
    fn default() -> Self {
        Self {
            registry_url: default_registry_url(),
            default_license: default_license(),
        }
    }
}

fn default_registry_url() -> String {
    DEFAULT_REGISTRY_URL.to_string()
}
fn default_license() -> String {
    "MIT".to_string()
}

/// Git workflow configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GitConfig {
    /// Branch name for the fresh repository
    #[serde(default = "default_git_branch")]
    pub default_branch: String,

    /// Remote name used for the repository URL
    #[serde(default = "default_origin_remote")]
    pub origin_remote: String,

    /// Commit the scaffold right after `git init`
    #[serde(default)]
    pub initial_commit: bool,

    /// Message for the optional initial commit
    #[serde(default = "default_initial_commit_message")]
    pub initial_commit_message: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            default_branch: default_git_branch(),
            origin_remote: default_origin_remote(),
            initial_commit: false,
            initial_commit_message: default_initial_commit_message(),
        }
    }
}

fn default_git_branch() -> String {
    "main".to_string()
}
fn default_origin_remote() -> String {
    "origin".to_string()
}
fn default_initial_commit_message() -> String {
    "chore: initial commit".to_string()
}

/// Package manager configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PackageManagerConfig {
    /// Executable name
    #[serde(default = "default_package_manager")]
    pub program: String,

    /// Arguments for the install invocation
    #[serde(default = "default_install_args")]
    pub install_args: Vec<String>,
}

impl Default for PackageManagerConfig {
    fn default() -> Self {
        Self {
            program: default_package_manager(),
            install_args: default_install_args(),
        }
    }
}

fn default_package_manager() -> String {
    "npm".to_string()
}
fn default_install_args() -> Vec<String> {
    vec!["install".to_string()]
}

/// Network and HTTP configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NetworkConfig {
    /// HTTP timeout in seconds; requests wait indefinitely when unset
    #[serde(default)]
    pub http_timeout_secs: Option<u64>,

    /// User agent string for HTTP requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            http_timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl NetworkConfig {
    /// Request timeout, if one is configured
    pub fn timeout(&self) -> Option<Duration> {
        self.http_timeout_secs.map(Duration::from_secs)
    }
}

fn default_user_agent() -> String {
    format!(
        "kickoff/{} ({}; {})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

/// Configuration loader
pub struct ConfigLoader {
    /// Config file consulted after the defaults
    config_file: Option<Utf8PathBuf>,
    /// Whether a missing config file is an error
    file_required: bool,
}

impl ConfigLoader {
    /// Loader reading `~/.kickoff/config.yaml` when it exists
    pub fn new() -> Self {
        Self {
            config_file: Self::default_config_file(),
            file_required: false,
        }
    }

    /// Loader reading an explicit config file, which must exist
    pub fn with_file(path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            config_file: Some(path.into()),
            file_required: true,
        }
    }

    /// Loader that only applies defaults and environment overrides
    pub fn defaults_only() -> Self {
        Self {
            config_file: None,
            file_required: false,
        }
    }

    /// `~/.kickoff/config.yaml`, honouring `HOME` before `USERPROFILE`
    fn default_config_file() -> Option<Utf8PathBuf> {
        let home = env::var("HOME").or_else(|_| env::var("USERPROFILE")).ok()?;
        Some(Utf8PathBuf::from(home).join(".kickoff").join("config.yaml"))
    }

    /// Load configuration with layered precedence
    pub fn load(&self) -> Result<KickoffConfig> {
        let mut config = KickoffConfig::default();

        if let Some(path) = &self.config_file {
            if path.exists() {
                debug!("Loading config file: {}", path);
                config = Self::load_yaml_file(path)?;
            } else if self.file_required {
                return Err(Error::invalid_config(format!(
                    "Config file not found: {}",
                    path
                )));
            } else {
                debug!("No config file at {}, using defaults", path);
            }
        }

        Self::apply_env_overrides(config)
    }

    /// Load a YAML file and parse it
    fn load_yaml_file(path: &Utf8Path) -> Result<KickoffConfig> {
        let content = fs::read_to_string(path)?;
        serde_yaml_ng::from_str(&content)
            .map_err(|e| Error::invalid_config(format!("Failed to parse {}: {}", path, e)))
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut config: KickoffConfig) -> Result<KickoffConfig> {
        if let Ok(val) = env::var("KICKOFF_TEMPLATE_URL") {
            config.template.url = val;
        }

        if let Ok(val) = env::var("KICKOFF_TEMPLATE_BRANCH") {
            config.template.branch = Some(val).filter(|b| !b.is_empty());
        }

        if let Ok(val) = env::var("KICKOFF_LICENSE_REGISTRY_URL") {
            config.license.registry_url = val;
        }

        if let Ok(val) = env::var("KICKOFF_PACKAGE_MANAGER") {
            if val.trim().is_empty() {
                return Err(Error::invalid_config(
                    "KICKOFF_PACKAGE_MANAGER must not be empty",
                ));
            }
            config.package_manager.program = val;
        }

        if let Ok(val) = env::var("KICKOFF_HTTP_TIMEOUT_SECS") {
            config.network.http_timeout_secs = Some(val.parse().map_err(|_| {
                Error::invalid_config("KICKOFF_HTTP_TIMEOUT_SECS must be a valid number")
            })?);
        }

        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn clear_env() {
        for key in [
            "KICKOFF_TEMPLATE_URL",
            "KICKOFF_TEMPLATE_BRANCH",
            "KICKOFF_LICENSE_REGISTRY_URL",
            "KICKOFF_PACKAGE_MANAGER",
            "KICKOFF_HTTP_TIMEOUT_SECS",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_load_defaults() {
        clear_env();
        let config = ConfigLoader::defaults_only().load().unwrap();
        assert_eq!(config.template.url, DEFAULT_TEMPLATE_URL);
        assert!(DEFAULT_TEMPLATE_URL.ends_with("/foxxyz/front-end-starter.git"));
        assert_eq!(config.license.registry_url, DEFAULT_REGISTRY_URL);
        assert_eq!(config.license.default_license, "MIT");
        assert_eq!(config.git.origin_remote, "origin");
        assert_eq!(config.package_manager.program, "npm");
        assert!(config.network.timeout().is_none());
        assert!(config.template.ci_paths.contains(&".github".to_string()));
        assert_eq!(config.template.manifest_file, "package.json");
        assert_eq!(config.template.html_file, "index.html");
        assert_eq!(config.template.home_component, "src/pages/Home.vue");
        assert_eq!(config.template.readme_file, "README.md");
        assert_eq!(config.template.lockfile, "package-lock.json");
    }

    #[test]
    #[serial]
    fn test_load_from_file() {
        clear_env();
        let temp = TempDir::new().unwrap();
        let path = Utf8PathBuf::from_path_buf(temp.path().join("config.yaml")).unwrap();
        fs::write(
            &path,
            r#"
template:
  url: "https://example.com/starter.git"
  home-component: "src/Home.jsx"
package-manager:
  program: "pnpm"
network:
  http-timeout-secs: 30
"#,
        )
        .unwrap();

        let config = ConfigLoader::with_file(path).load().unwrap();
        assert_eq!(config.template.url, "https://example.com/starter.git");
        assert_eq!(config.template.home_component, "src/Home.jsx");
        // Unspecified fields keep their defaults
        assert_eq!(config.template.manifest_file, "package.json");
        assert_eq!(config.package_manager.program, "pnpm");
        assert_eq!(config.package_manager.install_args, vec!["install"]);
        assert_eq!(config.network.timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    #[serial]
    fn test_missing_explicit_file_is_rejected() {
        clear_env();
        let result = ConfigLoader::with_file("/nonexistent/kickoff/config.yaml").load();
        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }

    #[test]
    #[serial]
    fn test_missing_home_config_falls_back_to_defaults() {
        clear_env();
        let temp = TempDir::new().unwrap();
        let previous_home = env::var("HOME").ok();
        env::set_var("HOME", temp.path());

        let result = ConfigLoader::new().load();

        match previous_home {
            Some(home) => env::set_var("HOME", home),
            None => env::remove_var("HOME"),
        }
        assert_eq!(result.unwrap().template.url, DEFAULT_TEMPLATE_URL);
    }

    #[test]
    #[serial]
    fn test_invalid_file_is_rejected() {
        clear_env();
        let temp = TempDir::new().unwrap();
        let path = Utf8PathBuf::from_path_buf(temp.path().join("config.yaml")).unwrap();
        fs::write(&path, "template: 42").unwrap();

        let result = ConfigLoader::with_file(path).load();
        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        env::set_var("KICKOFF_TEMPLATE_URL", "file:///tmp/starter");
        env::set_var("KICKOFF_LICENSE_REGISTRY_URL", "http://127.0.0.1:9/licenses.json");
        env::set_var("KICKOFF_PACKAGE_MANAGER", "yarn");
        env::set_var("KICKOFF_HTTP_TIMEOUT_SECS", "5");

        let config = ConfigLoader::defaults_only().load().unwrap();
        assert_eq!(config.template.url, "file:///tmp/starter");
        assert_eq!(config.license.registry_url, "http://127.0.0.1:9/licenses.json");
        assert_eq!(config.package_manager.program, "yarn");
        assert_eq!(config.network.http_timeout_secs, Some(5));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_timeout_env() {
        clear_env();
        env::set_var("KICKOFF_HTTP_TIMEOUT_SECS", "soon");
        let result = ConfigLoader::defaults_only().load();
        assert!(result.is_err());
        clear_env();
    }
}
