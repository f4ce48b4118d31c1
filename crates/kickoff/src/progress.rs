//! Step progress display for the scaffolding pipeline

use crate::output;
use indicatif::ProgressBar;
use kickoff_core::pipeline::{Step, StepObserver, StepStatus};
use kickoff_core::Error;
use std::sync::Mutex;

/// Shows each step as it runs and a status line when it ends
///
/// Steps are animated with a spinner unless `animate` is off, in which case
/// a plain line is printed so log output is not drawn over. The install
/// step never gets a spinner because the package manager writes to the same
/// terminal.
pub struct SpinnerObserver {
    animate: bool,
    current: Mutex<Option<ProgressBar>>,
}

impl SpinnerObserver {
    pub fn new(animate: bool) -> Self {
        Self {
            animate,
            current: Mutex::new(None),
        }
    }

    fn clear(&self) {
        if let Ok(mut current) = self.current.lock() {
            if let Some(pb) = current.take() {
                pb.finish_and_clear();
            }
        }
    }
}

impl StepObserver for SpinnerObserver {
    fn on_step_start(&self, step: Step) {
        if !self.animate || step == Step::InstallDependencies {
            output::info(&format!("{}...", step));
            return;
        }
        if let Ok(mut current) = self.current.lock() {
            *current = Some(output::spinner(&format!("{}...", step)));
        }
    }

    fn on_step_finished(&self, step: Step, status: &StepStatus) {
        self.clear();
        match status {
            StepStatus::Completed => output::success(step.label()),
            StepStatus::Skipped(reason) => output::info(&format!("{} skipped ({})", step, reason)),
            StepStatus::Recovered(error) => output::warning(&format!("{}: {}", step, error)),
        }
    }

    fn on_step_failed(&self, step: Step, error: &Error) {
        self.clear();
        output::error(&format!("{} failed: {}", step, error));
    }
}
