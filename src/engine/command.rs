//! Blocking shell-command execution with an explicit working directory.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, bail};
use log::debug;

/// Runs `command_line` through the platform shell, blocking until it exits,
/// and returns its captured standard output.
///
/// The working directory is passed per invocation; the process-global
/// current directory is never mutated.
pub fn run(command_line: &str, cwd: &Path) -> Result<String> {
    debug!("running `{}` in {}", command_line, cwd.display());

    #[cfg(unix)]
    let mut cmd = {
        let mut c = Command::new("sh");
        c.args(["-c", command_line]);
        c
    };
    #[cfg(windows)]
    let mut cmd = {
        let mut c = Command::new("cmd");
        c.args(["/C", command_line]);
        c
    };

    let output = cmd
        .current_dir(cwd)
        .output()
        .with_context(|| format!("Failed to spawn command: {command_line}"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "Command failed ({}): {command_line}\n{}",
            output.status,
            stderr.trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
