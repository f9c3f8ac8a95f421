use anyhow::Result;

use crate::{
    engine::{
        backend,
        config::{ScaffoldConfig, ScaffoldConfigBuilder},
        scaffold::{self, DestinationExists},
    },
    ui::{
        cli::{Cli, Commands},
        output,
        prompt::{DependencySelector, InteractiveSelector, NonInteractiveSelector},
    },
};

/// The primary orchestration function for the application.
pub fn run(args: Cli) -> Result<()> {
    let config = ScaffoldConfigBuilder::default()
        .templates_dir(args.templates_dir.clone())
        .package_manager(args.package_manager)
        .interactive(!args.no_interactive)
        .build()?;

    let result = dispatch(&args, &config);

    // A name collision is user error, not a crash: one line, exit 1.
    if let Err(err) = &result {
        if let Some(conflict) = err.downcast_ref::<DestinationExists>() {
            output::conflict(&conflict.name);
            std::process::exit(1);
        }
    }
    result
}

fn dispatch(args: &Cli, config: &ScaffoldConfig) -> Result<()> {
    let selector: Box<dyn DependencySelector> = if config.interactive {
        Box::new(InteractiveSelector)
    } else {
        Box::new(NonInteractiveSelector)
    };

    match &args.command {
        Commands::InitFrontend { project_name } => {
            output::banner(&format!("Initializing frontend project: {project_name}"));
            init_frontend(project_name, config)
        }
        Commands::InitBackend { project_name } => {
            output::banner(&format!("Initializing backend project: {project_name}"));
            backend::initialize_backend(project_name, config, selector.as_ref())
        }
        Commands::Init { project_name } => {
            output::banner(&format!("Initializing full-stack project: {project_name}"));

            // Frontend copy fully completes before the backend directory
            // is created; the composite reports success only after both.
            let frontend_name = format!("{project_name}-frontend");
            init_frontend(&frontend_name, config)?;
            output::success(&format!("Frontend project {frontend_name} initialized."));

            backend::initialize_backend(
                &format!("{project_name}-backend"),
                config,
                selector.as_ref(),
            )?;

            output::success("Full-stack project initialized successfully.");
            Ok(())
        }
    }
}

fn init_frontend(project_name: &str, config: &ScaffoldConfig) -> Result<()> {
    scaffold::copy_template("frontend", project_name, config)?;
    output::success(&format!(
        "Project {project_name} initialized successfully."
    ));
    Ok(())
}
