//! Git pre-commit hook installation and management.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Error;

/// Identifies the lines precheck owns inside a hook script.
const HOOK_MARKER: &str = "# precheck pre-commit gate (auto-installed)";

/// Invocation written into the hook.
const HOOK_COMMAND: &str = "precheck run || exit $?";

const SHEBANG: &str = "#!/bin/sh";

/// Full hook script written when no hook exists yet.
fn hook_script() -> String {
    format!("{}\n{}\n", SHEBANG, hook_block())
}

fn hook_block() -> String {
    format!("{}\n{}\n", HOOK_MARKER, HOOK_COMMAND)
}

/// What `install_hook` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Created,
    Inserted,
    Replaced,
    AlreadyInstalled,
}

/// Walk up from `start` to the first directory containing `.git`.
pub fn find_repo_root(start: &Path) -> Result<PathBuf, Error> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
        .ok_or_else(|| Error::NotAGitRepo(start.to_path_buf()))
}

/// Path of the pre-commit hook for a repository root.
pub fn hook_path(repo_root: &Path) -> Result<PathBuf, Error> {
    let git_dir = repo_root.join(".git");
    if !git_dir.is_dir() {
        return Err(Error::other(format!(
            "{} is not a directory (worktrees and submodules are not supported)",
            git_dir.display()
        )));
    }
    Ok(git_dir.join("hooks").join("pre-commit"))
}

/// Shells our block can be inserted into.
const POSIX_SHELLS: &[&str] = &["sh", "bash", "dash"];

/// Interpreter named by a `#!` line, with `/usr/bin/env` resolved.
fn shebang_interpreter(line: &str) -> Option<&str> {
    let mut parts = line.strip_prefix("#!")?.split_whitespace();
    let program = parts.next()?;
    let program = if program.rsplit('/').next() == Some("env") {
        parts.find(|arg| !arg.starts_with('-'))?
    } else {
        program
    };
    program.rsplit('/').next()
}

/// Insert our block right after the shebang so it runs before anything
/// that could `exit` or `exec` first.
fn insert_block(existing: &str) -> Result<String, Error> {
    let Some(first_line) = existing.lines().next().filter(|l| l.starts_with("#!")) else {
        return Ok(format!("{}\n{}", hook_script(), existing));
    };

    match shebang_interpreter(first_line) {
        Some(shell) if POSIX_SHELLS.contains(&shell) => {}
        _ => {
            return Err(Error::other(format!(
                "existing pre-commit hook uses `{}`, not a POSIX shell; \
                 rerun with --force to replace it",
                first_line
            )))
        }
    }

    let rest = existing[first_line.len()..].trim_start_matches(['\r', '\n']);
    Ok(format!("{}\n{}\n{}", first_line, hook_block(), rest))
}

/// Install the pre-commit hook, preserving an existing foreign hook unless
/// `force` is set.
pub fn install_hook(repo_root: &Path, force: bool) -> Result<InstallOutcome, Error> {
    let path = hook_path(repo_root)?;
    if let Some(hooks_dir) = path.parent() {
        fs::create_dir_all(hooks_dir)?;
    }

    let (content, outcome) = if path.exists() {
        let existing = fs::read_to_string(&path)?;

        if existing.contains(HOOK_MARKER) {
            return Ok(InstallOutcome::AlreadyInstalled);
        }

        if force {
            (hook_script(), InstallOutcome::Replaced)
        } else {
            (insert_block(&existing)?, InstallOutcome::Inserted)
        }
    } else {
        (hook_script(), InstallOutcome::Created)
    };

    fs::write(&path, content)?;
    make_executable(&path)?;
    info!(path = %path.display(), ?outcome, "Installed pre-commit hook");

    Ok(outcome)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<(), Error> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<(), Error> {
    Ok(())
}

/// Uninstall the precheck hook. Returns whether anything was removed.
pub fn uninstall_hook(repo_root: &Path) -> Result<bool, Error> {
    let path = hook_path(repo_root)?;
    if !path.exists() {
        return Ok(false);
    }

    let content = fs::read_to_string(&path)?;
    if !content.contains(HOOK_MARKER) {
        return Ok(false);
    }

    let cleaned = remove_precheck_section(&content);
    let trimmed = cleaned.trim();
    if trimmed.is_empty() || trimmed == SHEBANG {
        fs::remove_file(&path)?;
    } else {
        fs::write(&path, format!("{}\n", trimmed))?;
    }
    info!(path = %path.display(), "Removed pre-commit hook");

    Ok(true)
}

/// Remove precheck lines from hook content.
fn remove_precheck_section(content: &str) -> String {
    content
        .lines()
        .filter(|line| line.trim() != HOOK_MARKER && line.trim() != HOOK_COMMAND)
        .collect::<Vec<_>>()
        .join("\n")
}
