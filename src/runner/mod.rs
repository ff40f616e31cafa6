//! Fail-fast execution of check steps.
//!
//! Steps run one at a time in declaration order. The first step that does
//! not exit with code 0 stops the run; nothing after it is executed.

pub mod executor;
pub mod steps;

use tracing::{debug, info, warn};

use crate::config::ExitPolicy;
use crate::error::Error;

pub use executor::{StepExecutor, StepStatus, SystemExecutor};
pub use steps::default_steps;

/// Exit code for a failed run under [`ExitPolicy::Fixed`].
pub const FAILURE_EXIT_CODE: i32 = 1;

/// One named external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckStep {
    /// Text shown in the failure banner.
    pub name: String,
    pub program: String,
    pub args: Vec<String>,
}

impl CheckStep {
    pub fn new(name: &str, program: &str, args: &[&str]) -> Result<Self, Error> {
        if name.trim().is_empty() {
            return Err(Error::EmptyStepName);
        }
        if program.trim().is_empty() {
            return Err(Error::EmptyCommand);
        }
        Ok(Self {
            name: name.to_string(),
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        })
    }
}

/// Where a run is, or where it ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Pending,
    Running(usize),
    Succeeded,
    Failed(usize),
}

/// The step that stopped a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedStep {
    pub index: usize,
    pub name: String,
    pub status: StepStatus,
}

/// Outcome of a complete run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub state: RunState,
    pub failed: Option<FailedStep>,
}

impl RunReport {
    pub fn succeeded(&self) -> bool {
        self.state == RunState::Succeeded
    }

    /// Process exit code for this outcome.
    pub fn exit_code(&self, policy: ExitPolicy) -> i32 {
        let Some(failed) = &self.failed else {
            return 0;
        };
        match (policy, &failed.status) {
            (ExitPolicy::Propagate, StepStatus::Exited(code)) if (1..=255).contains(code) => {
                *code
            }
            _ => FAILURE_EXIT_CODE,
        }
    }
}

/// Runs an ordered list of steps, stopping at the first failure.
pub struct CheckRunner<E> {
    steps: Vec<CheckStep>,
    executor: E,
}

impl CheckRunner<SystemExecutor> {
    /// Runner over the default steps, spawning real processes.
    pub fn with_default_steps() -> Result<Self, Error> {
        Self::new(default_steps()?, SystemExecutor)
    }
}

impl<E: StepExecutor> CheckRunner<E> {
    pub fn new(steps: Vec<CheckStep>, executor: E) -> Result<Self, Error> {
        if steps.is_empty() {
            return Err(Error::NoSteps);
        }
        Ok(Self { steps, executor })
    }

    /// Execute every step in order. Consumes the runner: a run happens once.
    pub fn run(mut self) -> RunReport {
        let mut state = RunState::Pending;
        debug!(?state, steps = self.steps.len(), "Starting checks");

        for (index, step) in self.steps.iter().enumerate() {
            state = RunState::Running(index);
            debug!(?state, step = %step.name, "Running check step");

            let status = self.executor.execute(step);
            if !status.success() {
                warn!(index, step = %step.name, status = %status, "Check step failed");
                return RunReport {
                    state: RunState::Failed(index),
                    failed: Some(FailedStep {
                        index,
                        name: step.name.clone(),
                        status,
                    }),
                };
            }
            info!(index, step = %step.name, "Check step passed");
        }

        debug!(last = ?state, "All check steps passed");
        RunReport {
            state: RunState::Succeeded,
            failed: None,
        }
    }
}
