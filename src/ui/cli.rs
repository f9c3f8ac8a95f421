// src/ui/cli.rs

use crate::engine::config::PackageManager;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

// ~~~ CLI Arguments ~~~
#[derive(Parser, Debug, Clone)]
#[clap(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION")
)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Read templates from this directory instead of the embedded bundle
    #[clap(long, value_name = "DIR", global = true)]
    pub templates_dir: Option<PathBuf>,

    /// Package manager used for backend initialization
    #[clap(long, value_name = "TOOL", default_value_t = PackageManager::Npm, global = true)]
    pub package_manager: PackageManager,

    /// Disable the dependency prompt (installs nothing)
    #[clap(long, global = true)]
    pub no_interactive: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize a React project with Vite
    #[command(name = "init:frontend")]
    InitFrontend { project_name: String },

    /// Initialize a Node.js backend with a package manifest
    #[command(name = "init:backend")]
    InitBackend { project_name: String },

    /// Initialize a full-stack project
    #[command(name = "init")]
    Init { project_name: String },
}
