//! The fixed list of checks run before every commit.

use super::CheckStep;
use crate::error::Error;

/// Display name of the formatter check.
pub const FMT_STEP: &str = "cargo fmt -- --check";

/// Display name of the lint check.
pub const CLIPPY_STEP: &str = "clippy --locked -- -D warning";

/// Formatter check first, then clippy with warnings denied against the lockfile.
pub fn default_steps() -> Result<Vec<CheckStep>, Error> {
    Ok(vec![
        CheckStep::new(FMT_STEP, "cargo", &["fmt", "--", "--check"])?,
        CheckStep::new(
            CLIPPY_STEP,
            "cargo",
            &["clippy", "--locked", "--", "-D", "warnings"],
        )?,
    ])
}
