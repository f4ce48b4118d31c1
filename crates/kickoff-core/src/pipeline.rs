//! Scaffolding pipeline
//!
//! A scaffold is produced by an ordered list of fallible steps. Each step has
//! a [`Severity`]: a failing fatal step stops the run and its error is
//! returned, while a failing recoverable step is recorded in the report and
//! the run continues.
//!
//! ```text
//! Clone -> StripMetadata -> Rewrite -> License -> InitRepository -> AddRemote -> InstallDependencies
//! ```

use crate::config::KickoffConfig;
use crate::error::{Error, Result};
use crate::git::{self, CloneOptions, InitOptions};
use crate::license::{self, LicenseLookup};
use crate::package;
use crate::rewrite::TemplateRewriter;
use crate::types::ScaffoldParams;
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info, warn};

/// One stage of the scaffolding pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Clone the starter template
    Clone,
    /// Remove upstream history, CI configuration and the lockfile
    StripMetadata,
    /// Rewrite manifest, HTML entry, home page and README
    Rewrite,
    /// Generate the LICENSE file
    License,
    /// Initialize a fresh git repository
    InitRepository,
    /// Register the repository URL as a remote
    AddRemote,
    /// Install dependencies with the package manager
    InstallDependencies,
}

impl Step {
    /// All steps in execution order
    pub fn all() -> [Self; 7] {
        [
            Self::Clone,
            Self::StripMetadata,
            Self::Rewrite,
            Self::License,
            Self::InitRepository,
            Self::AddRemote,
            Self::InstallDependencies,
        ]
    }

    /// What happens to the run when this step fails
    pub fn severity(&self) -> Severity {
        match self {
            Self::License | Self::AddRemote => Severity::Recoverable,
            _ => Severity::Fatal,
        }
    }

    /// Short progress label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Clone => "Cloning template",
            Self::StripMetadata => "Removing template history",
            Self::Rewrite => "Rewriting template files",
            Self::License => "Generating license",
            Self::InitRepository => "Initializing git repository",
            Self::AddRemote => "Adding remote",
            Self::InstallDependencies => "Installing dependencies",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Failure handling class of a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Failure aborts the run
    Fatal,
    /// Failure is reported and the run continues
    Recoverable,
}

/// How a step ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    /// Ran to completion
    Completed,
    /// Not run, with the reason
    Skipped(String),
    /// Failed, but the run continued; holds the error message
    Recovered(String),
}

/// Outcome of one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub step: Step,
    pub status: StepStatus,
}

/// Result of a completed run
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    /// Root of the generated project
    pub project_dir: Utf8PathBuf,
    /// Outcome of every step that was reached, in order
    pub outcomes: Vec<StepOutcome>,
}

impl ScaffoldReport {
    /// Status of a given step, if it was reached
    pub fn status(&self, step: Step) -> Option<&StepStatus> {
        self.outcomes
            .iter()
            .find(|outcome| outcome.step == step)
            .map(|outcome| &outcome.status)
    }

    /// Messages of steps that were skipped or recovered
    pub fn warnings(&self) -> Vec<String> {
        self.outcomes
            .iter()
            .filter_map(|outcome| match &outcome.status {
                StepStatus::Completed => None,
                StepStatus::Skipped(reason) => {
                    Some(format!("{}: skipped ({})", outcome.step, reason))
                }
                StepStatus::Recovered(error) => Some(format!("{}: {}", outcome.step, error)),
            })
            .collect()
    }
}

/// Receives step lifecycle events, e.g. to drive a progress display
pub trait StepObserver: Send + Sync {
    /// Called before a step runs
    fn on_step_start(&self, step: Step);

    /// Called after a step ends without a fatal error
    fn on_step_finished(&self, step: Step, status: &StepStatus);

    /// Called when a fatal step fails, just before the run stops
    fn on_step_failed(&self, step: Step, error: &Error);
}

/// Observer that logs step events with `tracing`
#[derive(Debug, Default)]
pub struct TracingObserver;

impl StepObserver for TracingObserver {
    fn on_step_start(&self, step: Step) {
        info!("{}...", step);
    }

    fn on_step_finished(&self, step: Step, status: &StepStatus) {
        match status {
            StepStatus::Completed => info!("{}: done", step),
            StepStatus::Skipped(reason) => warn!("{}: skipped ({})", step, reason),
            StepStatus::Recovered(error) => warn!("{}: {}", step, error),
        }
    }

    fn on_step_failed(&self, step: Step, error: &Error) {
        tracing::error!("{} failed: {}", step, error);
    }
}

/// Switches for optional parts of the run
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    /// Skip git initialization and remote registration
    pub skip_git: bool,
    /// Skip dependency installation
    pub skip_install: bool,
}

/// Runs the scaffolding steps for one set of parameters
pub struct ScaffoldPipeline<'a> {
    config: &'a KickoffConfig,
    license_lookup: &'a dyn LicenseLookup,
    observer: &'a dyn StepObserver,
    options: PipelineOptions,
}

impl<'a> ScaffoldPipeline<'a> {
    /// Create a pipeline that logs progress through `tracing`
    pub fn new(config: &'a KickoffConfig, license_lookup: &'a dyn LicenseLookup) -> Self {
        static TRACING: TracingObserver = TracingObserver;
        Self {
            config,
            license_lookup,
            observer: &TRACING,
            options: PipelineOptions::default(),
        }
    }

    /// Report step events to `observer` instead of the log
    pub fn with_observer(mut self, observer: &'a dyn StepObserver) -> Self {
        self.observer = observer;
        self
    }

    /// Set optional-step switches
    pub fn with_options(mut self, options: PipelineOptions) -> Self {
        self.options = options;
        self
    }

    /// Scaffold `params.package_name` as a child of `base_dir`
    ///
    /// # Errors
    /// Returns the error of the first fatal step that fails. Earlier steps
    /// are not rolled back, so a partial scaffold may remain on disk.
    pub async fn run(
        &self,
        params: &ScaffoldParams,
        base_dir: &Utf8Path,
    ) -> Result<ScaffoldReport> {
        let project_dir = base_dir.join(&params.package_name);
        debug!("Scaffolding {} into {}", params.app_name, project_dir);

        let mut outcomes = Vec::new();

        for step in Step::all() {
            self.observer.on_step_start(step);

            let status = match self.run_step(step, params, &project_dir).await {
                Ok(status) => status,
                Err(e) => match step.severity() {
                    Severity::Recoverable => StepStatus::Recovered(e.to_string()),
                    Severity::Fatal => {
                        self.observer.on_step_failed(step, &e);
                        return Err(e);
                    }
                },
            };

            self.observer.on_step_finished(step, &status);
            outcomes.push(StepOutcome { step, status });
        }

        Ok(ScaffoldReport {
            project_dir,
            outcomes,
        })
    }

    async fn run_step(
        &self,
        step: Step,
        params: &ScaffoldParams,
        project_dir: &Utf8Path,
    ) -> Result<StepStatus> {
        let template = &self.config.template;

        match step {
            Step::Clone => {
                let options = CloneOptions {
                    depth: template.depth,
                    branch: template.branch.clone(),
                };
                git::clone_repository(&template.url, project_dir, &options).await?;
            }
            Step::StripMetadata => {
                git::strip_repository_metadata(project_dir, &template.ci_paths, &template.lockfile)
                    .await?;
            }
            Step::Rewrite => {
                TemplateRewriter::new(project_dir, template)
                    .rewrite_all(params)
                    .await?;
            }
            Step::License => {
                license::resolve_license(
                    self.license_lookup,
                    &params.license,
                    &params.author,
                    project_dir,
                )
                .await?;
            }
            Step::InitRepository => {
                if self.options.skip_git {
                    return Ok(StepStatus::Skipped("--skip-git".to_string()));
                }
                let options = InitOptions::from_config(&self.config.git);
                git::init_repository(project_dir, &options).await?;
            }
            Step::AddRemote => {
                if self.options.skip_git {
                    return Ok(StepStatus::Skipped("--skip-git".to_string()));
                }
                if !params.has_repository() {
                    return Ok(StepStatus::Skipped("no repository URL given".to_string()));
                }
                git::add_remote(
                    project_dir,
                    &self.config.git.origin_remote,
                    params.repository_url.trim(),
                )
                .await?;
            }
            Step::InstallDependencies => {
                if self.options.skip_install {
                    return Ok(StepStatus::Skipped("--skip-install".to_string()));
                }
                package::install_dependencies(project_dir, &self.config.package_manager).await?;
            }
        }

        Ok(StepStatus::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_order() {
        let steps = Step::all();
        assert_eq!(steps.first(), Some(&Step::Clone));
        assert_eq!(steps.last(), Some(&Step::InstallDependencies));
        let license = steps.iter().position(|s| *s == Step::License).unwrap();
        let rewrite = steps.iter().position(|s| *s == Step::Rewrite).unwrap();
        assert!(rewrite < license);
    }

    #[test]
    fn test_severity() {
        assert_eq!(Step::License.severity(), Severity::Recoverable);
        assert_eq!(Step::AddRemote.severity(), Severity::Recoverable);
        assert_eq!(Step::Clone.severity(), Severity::Fatal);
        assert_eq!(Step::Rewrite.severity(), Severity::Fatal);
        assert_eq!(Step::InstallDependencies.severity(), Severity::Fatal);
    }

    #[test]
    fn test_report_warnings() {
        let report = ScaffoldReport {
            project_dir: Utf8PathBuf::from("/tmp/acme"),
            outcomes: vec![
                StepOutcome {
                    step: Step::Clone,
                    status: StepStatus::Completed,
                },
                StepOutcome {
                    step: Step::License,
                    status: StepStatus::Recovered("License 'X' not found".to_string()),
                },
                StepOutcome {
                    step: Step::AddRemote,
                    status: StepStatus::Skipped("no repository URL given".to_string()),
                },
            ],
        };

        let warnings = report.warnings();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("Generating license"));
        assert_eq!(report.status(Step::Clone), Some(&StepStatus::Completed));
        assert_eq!(report.status(Step::InstallDependencies), None);
    }
}
