//! Run the pre-commit checks.

use std::io::{self, IsTerminal};

use tracing::{info, warn};

use crate::cli::output::Banner;
use crate::config::Config;
use crate::error::Error;
use crate::runner::{CheckRunner, StepExecutor};

/// Run the default checks with real processes and return the exit code.
pub fn run(config: &Config) -> Result<i32, Error> {
    let runner = CheckRunner::with_default_steps()?;
    let no_color = std::env::var_os("NO_COLOR");
    let color = config
        .output
        .color
        .enabled(no_color.as_deref(), io::stdout().is_terminal());

    Ok(run_with(runner, config, &mut io::stdout(), color))
}

/// Run `runner`, print its banner to `out`, and return the exit code.
///
/// The exit code reflects the checks only; a banner that cannot be written
/// is logged and otherwise ignored.
pub fn run_with<E: StepExecutor>(
    runner: CheckRunner<E>,
    config: &Config,
    out: &mut impl io::Write,
    color: bool,
) -> i32 {
    let report = runner.run();
    if let Err(e) = Banner::new(color).write_to(out, &report) {
        warn!(error = %e, "Failed to write banner");
    }

    let code = report.exit_code(config.exit.policy);
    info!(code, succeeded = report.succeeded(), "Checks finished");
    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::output::{FAILURE_BANNER, SUCCESS_BANNER};
    use crate::config::ExitPolicy;
    use crate::runner::{CheckStep, StepStatus};
    use crate::runner::steps::{default_steps, CLIPPY_STEP, FMT_STEP};

    /// Fails the steps listed in `failing`, passes the rest.
    struct FakeTools {
        failing: Vec<(&'static str, StepStatus)>,
        invoked: Vec<String>,
    }

    impl FakeTools {
        fn new(failing: Vec<(&'static str, StepStatus)>) -> Self {
            Self {
                failing,
                invoked: Vec::new(),
            }
        }
    }

    impl StepExecutor for FakeTools {
        fn execute(&mut self, step: &CheckStep) -> StepStatus {
            self.invoked.push(step.name.clone());
            self.failing
                .iter()
                .find(|(name, _)| *name == step.name)
                .map(|(_, status)| status.clone())
                .unwrap_or(StepStatus::Exited(0))
        }
    }

    fn run_scenario(tools: &mut FakeTools, config: &Config) -> (i32, String) {
        let runner = CheckRunner::new(default_steps().unwrap(), tools).unwrap();
        let mut out = Vec::new();
        let code = run_with(runner, config, &mut out, false);
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_formatter_fails() {
        let mut tools = FakeTools::new(vec![(FMT_STEP, StepStatus::Exited(1))]);
        let (code, out) = run_scenario(&mut tools, &Config::default());

        assert_ne!(code, 0);
        assert!(out.contains(FAILURE_BANNER));
        assert!(out.contains(FMT_STEP));
        assert!(!out.contains(CLIPPY_STEP));
        assert_eq!(tools.invoked, vec![FMT_STEP]);
    }

    #[test]
    fn test_lint_fails() {
        let mut tools = FakeTools::new(vec![(CLIPPY_STEP, StepStatus::Exited(101))]);
        let (code, out) = run_scenario(&mut tools, &Config::default());

        assert_eq!(code, 1);
        assert!(out.contains(CLIPPY_STEP));
        assert!(!out.contains(FMT_STEP));
        assert_eq!(tools.invoked, vec![FMT_STEP, CLIPPY_STEP]);
    }

    #[test]
    fn test_both_pass() {
        let mut tools = FakeTools::new(Vec::new());
        let (code, out) = run_scenario(&mut tools, &Config::default());

        assert_eq!(code, 0);
        assert_eq!(out, format!("\n{}\n", SUCCESS_BANNER));
        assert!(!out.contains(FAILURE_BANNER));
    }

    #[test]
    fn test_formatter_missing() {
        let mut tools = FakeTools::new(vec![(
            FMT_STEP,
            StepStatus::NotRunnable("No such file or directory".into()),
        )]);
        let (code, out) = run_scenario(&mut tools, &Config::default());

        assert_ne!(code, 0);
        assert!(out.contains(FMT_STEP));
        assert_eq!(tools.invoked, vec![FMT_STEP]);
    }

    #[test]
    fn test_propagate_policy() {
        let mut config = Config::default();
        config.exit.policy = ExitPolicy::Propagate;
        let mut tools = FakeTools::new(vec![(CLIPPY_STEP, StepStatus::Exited(101))]);
        let (code, _) = run_scenario(&mut tools, &config);

        assert_eq!(code, 101);
    }

    #[test]
    fn test_same_outcome_twice() {
        let config = Config::default();
        let mut tools = FakeTools::new(vec![(CLIPPY_STEP, StepStatus::Exited(1))]);
        let first = run_scenario(&mut tools, &config);
        let second = run_scenario(&mut tools, &config);

        assert_eq!(first, second);
    }

    /// Writer whose every write fails, like a closed pipe.
    struct ClosedPipe;

    impl io::Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_banner_write_failure_keeps_check_outcome() {
        let config = Config::default();

        let mut tools = FakeTools::new(Vec::new());
        let runner = CheckRunner::new(default_steps().unwrap(), &mut tools).unwrap();
        assert_eq!(run_with(runner, &config, &mut ClosedPipe, false), 0);

        let mut tools = FakeTools::new(vec![(FMT_STEP, StepStatus::Exited(1))]);
        let runner = CheckRunner::new(default_steps().unwrap(), &mut tools).unwrap();
        assert_eq!(run_with(runner, &config, &mut ClosedPipe, false), 1);
    }
}
