use anyhow::Result;
use clap::Parser;

// ──────────────────────────────────────────────────────────────
//  Entry point
// ──────────────────────────────────────────────────────────────
fn main() -> Result<()> {
    env_logger::init();
    let args = stackforge::ui::cli::Cli::parse();
    stackforge::app_controller::run(args)
}
