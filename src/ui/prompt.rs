//! Interactive selection of backend dependencies.

use anyhow::{Context, Result};
use inquire::MultiSelect;

use crate::engine::catalog::DependencyEntry;

/// Seam between the backend initializer and the terminal prompt.
pub trait DependencySelector {
    /// Returns the chosen catalog names; may be empty.
    fn select(&self, catalog: &[DependencyEntry]) -> Result<Vec<String>>;
}

/// Checkbox prompt over the catalog, one line per entry rendered as
/// `name: description`. Nothing is pre-selected; an empty confirmation
/// is a valid answer.
pub struct InteractiveSelector;

impl DependencySelector for InteractiveSelector {
    fn select(&self, catalog: &[DependencyEntry]) -> Result<Vec<String>> {
        let options: Vec<String> = catalog
            .iter()
            .map(|dep| format!("{}: {}", dep.name, dep.description))
            .collect();

        let picked = MultiSelect::new("Select the dependencies you want to install:", options)
            .with_help_message("space to toggle, enter to confirm")
            .raw_prompt()
            .context("Dependency selection aborted")?;

        Ok(picked
            .into_iter()
            .map(|option| catalog[option.index].name.to_string())
            .collect())
    }
}

/// Used with `--no-interactive`; selects nothing.
pub struct NonInteractiveSelector;

impl DependencySelector for NonInteractiveSelector {
    fn select(&self, _catalog: &[DependencyEntry]) -> Result<Vec<String>> {
        Ok(Vec::new())
    }
}
