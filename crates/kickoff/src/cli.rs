//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::Parser;
use kickoff_core::params::ParamOverrides;

/// Kickoff - scaffold a new front-end project from the starter template
///
/// Every parameter flag is optional; missing values are asked for
/// interactively.
#[derive(Parser, Debug)]
#[command(name = "kickoff")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Human readable application name
    #[arg(long, value_name = "NAME")]
    pub app_name: Option<String>,

    /// Package name, also used as the project directory name
    #[arg(long, value_name = "NAME")]
    pub package_name: Option<String>,

    /// Package author and copyright holder
    #[arg(long, value_name = "AUTHOR")]
    pub package_author: Option<String>,

    /// Package version (MAJOR.MINOR.PATCH)
    #[arg(long, value_name = "VERSION")]
    pub package_version: Option<String>,

    /// One-line package description
    #[arg(long, value_name = "TEXT")]
    pub package_description: Option<String>,

    /// SPDX license identifier (e.g. MIT, Apache-2.0)
    #[arg(long, value_name = "SPDX_ID")]
    pub package_license: Option<String>,

    /// Repository URL; added as the origin remote
    #[arg(long, value_name = "URL")]
    pub package_url: Option<String>,

    /// Directory in which the project directory is created
    #[arg(short = 'd', long, value_name = "DIR")]
    pub directory: Option<Utf8PathBuf>,

    /// Accept defaults instead of prompting
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Do not run the package manager
    #[arg(long)]
    pub skip_install: bool,

    /// Do not initialize a git repository or add a remote
    #[arg(long)]
    pub skip_git: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only print warnings and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to a kickoff config file (defaults to ~/.kickoff/config.yaml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,
}

impl Cli {
    /// Parameter values given on the command line
    pub fn overrides(&self) -> ParamOverrides {
        ParamOverrides {
            app_name: self.app_name.clone(),
            package_name: self.package_name.clone(),
            author: self.package_author.clone(),
            description: self.package_description.clone(),
            version: self.package_version.clone(),
            license: self.package_license.clone(),
            repository_url: self.package_url.clone(),
        }
    }
}
