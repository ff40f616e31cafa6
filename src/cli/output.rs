//! Pass/fail banners printed after the checks.

use std::io::{self, Write};

use crate::runner::RunReport;

pub const FAILURE_BANNER: &str = "pre-commit hook failed during:";
pub const SUCCESS_BANNER: &str = "pre-commit hook succeeded";

const YELLOW: &str = "33";
const GREEN: &str = "32";

/// Renders banners, optionally with ANSI color.
pub struct Banner {
    color: bool,
}

impl Banner {
    pub fn new(color: bool) -> Self {
        Banner { color }
    }

    fn colorize(&self, text: &str, color_code: &str) -> String {
        if self.color {
            format!("\x1b[{}m{}\x1b[0m", color_code, text)
        } else {
            text.to_string()
        }
    }

    /// Banner text for a finished run.
    pub fn render(&self, report: &RunReport) -> String {
        match &report.failed {
            Some(failed) => format!(
                "\n{}\n{}\n",
                self.colorize(FAILURE_BANNER, YELLOW),
                self.colorize(&failed.name, YELLOW)
            ),
            None => format!("\n{}\n", self.colorize(SUCCESS_BANNER, GREEN)),
        }
    }

    pub fn write_to(&self, out: &mut impl Write, report: &RunReport) -> io::Result<()> {
        out.write_all(self.render(report).as_bytes())?;
        out.flush()
    }
}
