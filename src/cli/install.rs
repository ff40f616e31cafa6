//! Install or remove the git pre-commit hook.

use crate::cli::hooks::{self, InstallOutcome};
use crate::error::Error;

/// Run the install command.
pub fn run(force: bool) -> Result<(), Error> {
    let repo_root = hooks::find_repo_root(&std::env::current_dir()?)?;

    match hooks::install_hook(&repo_root, force)? {
        InstallOutcome::Created => println!("Installed pre-commit hook."),
        InstallOutcome::Inserted => {
            println!("Added precheck to the top of the existing pre-commit hook.")
        }
        InstallOutcome::Replaced => println!("Replaced the existing pre-commit hook."),
        InstallOutcome::AlreadyInstalled => println!("pre-commit hook already installed."),
    }

    Ok(())
}

/// Run the uninstall command.
pub fn uninstall() -> Result<(), Error> {
    let repo_root = hooks::find_repo_root(&std::env::current_dir()?)?;

    if hooks::uninstall_hook(&repo_root)? {
        println!("Removed precheck from the pre-commit hook.");
    } else {
        println!("No precheck pre-commit hook found.");
    }

    Ok(())
}
