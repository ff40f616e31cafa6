//! precheck - fail-fast pre-commit gate for Rust projects.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use precheck::cli::{self, Cli, Commands};
use precheck::config::Config;
use precheck::Error;

fn main() {
    let cli = Cli::parse();

    std::process::exit(cli::exit_code(run(cli)));
}

fn run(cli: Cli) -> Result<i32, Error> {
    let config = Config::load();
    init_logging(
        config
            .as_ref()
            .map(|c| c.log.level.as_str())
            .unwrap_or("warn"),
    );
    let config = config?;

    match cli.command {
        None | Some(Commands::Run) => cli::check::run(&config),
        Some(Commands::Install { force }) => {
            cli::install::run(force)?;
            Ok(0)
        }
        Some(Commands::Uninstall) => {
            cli::install::uninstall()?;
            Ok(0)
        }
    }
}

/// Log to stderr so the hook's stdout only carries tool output and banners.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("precheck={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
