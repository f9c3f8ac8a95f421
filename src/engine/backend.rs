//! Backend project provisioning: directory, manifest, optional installs.

use std::fs;

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;

use crate::engine::{
    catalog::{self, CATALOG},
    command,
    config::ScaffoldConfig,
    scaffold,
};
use crate::ui::prompt::DependencySelector;

/// Creates the backend project directory, initializes a package manifest
/// in it, and installs whatever dependencies the selector returns.
///
/// Every subprocess receives the project directory explicitly; the
/// process-global working directory is never changed.
pub fn initialize_backend(
    project_name: &str,
    config: &ScaffoldConfig,
    selector: &dyn DependencySelector,
) -> Result<()> {
    let project_dir = config.base_dir.join(project_name);
    scaffold::ensure_vacant(&project_dir, project_name)?;

    fs::create_dir_all(&project_dir)
        .with_context(|| format!("Failed to create {}", project_dir.display()))?;

    let pm = config.package_manager;
    command::run(pm.manifest_init_command(), &project_dir)?;

    let chosen = selector.select(CATALOG)?;
    let selected = catalog::normalize_selection(&chosen);

    if selected.is_empty() {
        println!("{}", "No dependencies selected.".yellow());
    } else {
        println!(
            "{}",
            format!("Installing backend dependencies: {}", selected.join(", ")).blue()
        );
        command::run(&pm.install_command(&selected), &project_dir)?;
    }

    info!("backend scaffold complete: {}", project_dir.display());
    println!(
        "{}",
        format!("Backend project \"{project_name}\" initialized successfully.").green()
    );
    Ok(())
}
