//! Terminal output for a scaffolding run
//!
//! Status lines go to stdout and problems to stderr. In quiet mode only
//! warnings and errors are printed.

use camino::Utf8Path;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use kickoff_core::types::ScaffoldParams;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

static QUIET: AtomicBool = AtomicBool::new(false);

/// Suppress everything except warnings and errors
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

pub fn success(msg: &str) {
    if !is_quiet() {
        println!("{} {}", style("✓").green().bold(), msg);
    }
}

pub fn info(msg: &str) {
    if !is_quiet() {
        println!("{} {}", style("ℹ").blue().bold(), msg);
    }
}

pub fn warning(msg: &str) {
    eprintln!("{} {}", style("⚠").yellow().bold(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

pub fn header(msg: &str) {
    if !is_quiet() {
        println!("\n{}", style(msg).bold().underlined());
    }
}

/// Resolved parameters and the target directory, one per line
pub fn summary(params: &ScaffoldParams, project_dir: &Utf8Path) {
    if is_quiet() {
        return;
    }
    println!();
    for (label, value) in params.summary() {
        field(label, value);
    }
    field("Location", project_dir.as_str());
    println!();
}

fn field(label: &str, value: &str) {
    let value = if value.is_empty() {
        style("(none)").dim().to_string()
    } else {
        value.to_string()
    };
    println!("  {}: {}", style(label).dim(), value);
}

/// Commands to run next, indented under a heading
pub fn next_steps(commands: &[String]) {
    if is_quiet() {
        return;
    }
    println!();
    info("Next steps:");
    for command in commands {
        println!("  {}", style(command).cyan());
    }
}

/// Spinner for a running step; hidden in quiet mode
pub fn spinner(msg: &str) -> ProgressBar {
    if is_quiet() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_hides_spinner() {
        set_quiet(true);
        let hidden = spinner("Cloning template...");
        set_quiet(false);

        assert!(hidden.is_hidden());
        hidden.finish_and_clear();
    }
}
