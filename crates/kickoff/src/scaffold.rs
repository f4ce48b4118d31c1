//! Project scaffolding flow

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use kickoff_core::config::{ConfigLoader, KickoffConfig};
use kickoff_core::license::SpdxRegistry;
use kickoff_core::params::ParamResolver;
use kickoff_core::pipeline::{PipelineOptions, ScaffoldPipeline, Step, StepStatus};
use tracing::debug;

use crate::cli::Cli;
use crate::output;
use crate::progress::SpinnerObserver;
use crate::prompt::TerminalPrompter;

/// Collect parameters, scaffold the project and print next steps
pub async fn run(cli: Cli) -> Result<()> {
    output::set_quiet(cli.quiet);

    let config = load_config(&cli)?;
    debug!(
        "Template: {} (branch: {})",
        config.template.url,
        config.template.branch.as_deref().unwrap_or("default")
    );

    output::header("Create New Project");

    let mut prompter = TerminalPrompter;
    let params = ParamResolver::new(&mut prompter)
        .accept_defaults(cli.yes)
        .default_license(config.license.default_license.clone())
        .resolve(cli.overrides())
        .context("Failed to collect project parameters")?;

    let base_dir = match &cli.directory {
        Some(dir) => dir.clone(),
        None => current_dir()?,
    };
    debug!("Base directory: {}", base_dir);

    output::summary(&params, &base_dir.join(&params.package_name));

    let registry =
        SpdxRegistry::from_config(&config).context("Failed to create license registry client")?;
    // Spinners would be drawn over by -v log lines
    let observer = SpinnerObserver::new(cli.verbose == 0);

    let report = ScaffoldPipeline::new(&config, &registry)
        .with_observer(&observer)
        .with_options(PipelineOptions {
            skip_git: cli.skip_git,
            skip_install: cli.skip_install,
        })
        .run(&params, &base_dir)
        .await
        .with_context(|| format!("Failed to scaffold {}", params.package_name))?;

    debug!("Finished with {} warning(s)", report.warnings().len());

    output::success(&format!(
        "Project '{}' created at {}",
        params.app_name, report.project_dir
    ));

    let package_manager = &config.package_manager;
    let mut commands = vec![format!("cd {}", params.package_name)];
    if matches!(
        report.status(Step::InstallDependencies),
        Some(StepStatus::Skipped(_))
    ) {
        commands.push(format!(
            "{} {}",
            package_manager.program,
            package_manager.install_args.join(" ")
        ));
    }
    commands.push(format!("{} run dev", package_manager.program));
    output::next_steps(&commands);

    Ok(())
}

fn load_config(cli: &Cli) -> Result<KickoffConfig> {
    let loader = match &cli.config {
        Some(path) => ConfigLoader::with_file(path.clone()),
        None => ConfigLoader::new(),
    };
    loader.load().context("Failed to load configuration")
}

fn current_dir() -> Result<Utf8PathBuf> {
    let dir = std::env::current_dir().context("Failed to read current directory")?;
    Utf8PathBuf::from_path_buf(dir)
        .map_err(|p| anyhow::anyhow!("Current directory is not valid UTF-8: {}", p.display()))
}
