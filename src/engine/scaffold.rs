//! Verbatim template copying into a new project directory.
//!
//! The "frontend" template ships inside the binary; `--templates-dir`
//! swaps in an on-disk template tree instead.

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use include_dir::{Dir, include_dir};
use log::info;

use crate::engine::config::ScaffoldConfig;

static FRONTEND_TEMPLATE: Dir = include_dir!("$CARGO_MANIFEST_DIR/templates/frontend");

/// The target directory is already present. The dispatcher reports this
/// with a one-line message and exits with status 1.
#[derive(Debug)]
pub struct DestinationExists {
    pub name: String,
}

impl fmt::Display for DestinationExists {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "directory '{}' already exists", self.name)
    }
}

impl std::error::Error for DestinationExists {}

/// Fails with [`DestinationExists`] if anything already sits at `dest`.
pub fn ensure_vacant(dest: &Path, name: &str) -> Result<()> {
    if dest.exists() {
        return Err(DestinationExists {
            name: name.to_string(),
        }
        .into());
    }
    Ok(())
}

/// Recursively copies the named template into a new directory
/// `project_name` under the config's base directory, preserving relative
/// structure and file contents byte-for-byte.
pub fn copy_template(
    template_key: &str,
    project_name: &str,
    config: &ScaffoldConfig,
) -> Result<()> {
    let target = config.base_dir.join(project_name);
    ensure_vacant(&target, project_name)?;

    match &config.templates_dir {
        Some(dir) => {
            let source = dir.join(template_key);
            if !source.is_dir() {
                bail!(
                    "template '{template_key}' not found under {}",
                    dir.display()
                );
            }
            copy_dir_recursive(&source, &target)?;
        }
        None => {
            let bundle = builtin_template(template_key)?;
            fs::create_dir_all(&target)
                .with_context(|| format!("Failed to create {}", target.display()))?;
            bundle
                .extract(&target)
                .with_context(|| format!("Failed to extract template '{template_key}'"))?;
        }
    }

    info!("template '{}' copied to {}", template_key, target.display());
    Ok(())
}

fn builtin_template(key: &str) -> Result<&'static Dir<'static>> {
    match key {
        "frontend" => Ok(&FRONTEND_TEMPLATE),
        other => bail!("no bundled template named '{other}'"),
    }
}

fn copy_dir_recursive(source: &Path, target: &Path) -> Result<()> {
    fs::create_dir_all(target)
        .with_context(|| format!("Failed to create {}", target.display()))?;

    for entry in fs::read_dir(source)
        .with_context(|| format!("Failed to read template directory {}", source.display()))?
    {
        let entry = entry?;
        let dest = target.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&entry.path(), &dest)?;
        } else {
            fs::copy(entry.path(), &dest)
                .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
        }
    }
    Ok(())
}
