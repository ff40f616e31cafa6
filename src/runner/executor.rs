//! Spawning check commands.

use std::process::Command;

use tracing::debug;

use super::CheckStep;

/// How a single step ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    /// The process ran and exited with this code.
    Exited(i32),
    /// The process ended without an exit code (killed by a signal).
    Signaled,
    /// The process could not be started at all.
    NotRunnable(String),
}

impl StepStatus {
    pub fn success(&self) -> bool {
        matches!(self, StepStatus::Exited(0))
    }
}

impl std::fmt::Display for StepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepStatus::Exited(code) => write!(f, "exited with code {}", code),
            StepStatus::Signaled => write!(f, "terminated by signal"),
            StepStatus::NotRunnable(reason) => write!(f, "could not be run: {}", reason),
        }
    }
}

/// Runs one step to completion.
pub trait StepExecutor {
    fn execute(&mut self, step: &CheckStep) -> StepStatus;
}

impl<T: StepExecutor + ?Sized> StepExecutor for &mut T {
    fn execute(&mut self, step: &CheckStep) -> StepStatus {
        (**self).execute(step)
    }
}

/// Spawns the step as a child process that inherits stdin, stdout and stderr.
#[derive(Debug, Default)]
pub struct SystemExecutor;

impl StepExecutor for SystemExecutor {
    fn execute(&mut self, step: &CheckStep) -> StepStatus {
        debug!(program = %step.program, args = ?step.args, "Spawning step");

        match Command::new(&step.program).args(&step.args).status() {
            Ok(status) => match status.code() {
                Some(code) => StepStatus::Exited(code),
                None => StepStatus::Signaled,
            },
            Err(e) => StepStatus::NotRunnable(e.to_string()),
        }
    }
}
