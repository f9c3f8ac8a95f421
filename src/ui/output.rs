//! User-facing status lines.

use colored::Colorize;

pub fn banner(message: &str) {
    println!("{}", message.blue());
}

pub fn success(message: &str) {
    println!("{}", message.green());
}

/// One-line report for a name collision, before the process exits.
pub fn conflict(project_name: &str) {
    eprintln!(
        "{}",
        format!("Error: Directory {project_name} already exists.").red()
    );
}
