// src/engine/config.rs

use clap::ValueEnum;
use derive_builder::Builder;
use std::path::PathBuf;

/// Package manager driving backend initialization.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackageManager::Npm => write!(f, "npm"),
            PackageManager::Pnpm => write!(f, "pnpm"),
            PackageManager::Yarn => write!(f, "yarn"),
        }
    }
}

impl PackageManager {
    /// Command that creates a package manifest with default values.
    pub fn manifest_init_command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm init -y",
            PackageManager::Pnpm => "pnpm init",
            PackageManager::Yarn => "yarn init -y",
        }
    }

    /// Single install command listing every selected package, space-separated.
    pub fn install_command(&self, packages: &[&str]) -> String {
        let verb = match self {
            PackageManager::Npm => "npm install",
            PackageManager::Pnpm => "pnpm add",
            PackageManager::Yarn => "yarn add",
        };
        format!("{verb} {}", packages.join(" "))
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(name = "build_internal"))]
pub struct ScaffoldConfig {
    /// Directory new projects are created under.
    #[builder(default = "PathBuf::from(\".\")")]
    pub base_dir: PathBuf,

    /// Read templates from this directory instead of the embedded bundle.
    #[builder(default)]
    pub templates_dir: Option<PathBuf>,

    #[builder(default)]
    pub package_manager: PackageManager,

    /// When false the dependency prompt is skipped and nothing is installed.
    #[builder(default = "true")]
    pub interactive: bool,
}

impl ScaffoldConfigBuilder {
    pub fn build(&self) -> Result<ScaffoldConfig, ScaffoldConfigBuilderError> {
        self.build_internal()
    }
}
