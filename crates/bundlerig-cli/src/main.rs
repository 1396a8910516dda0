//! CLI entry point - the composition root.
//!
//! The active environment tag is resolved here (flag, then the
//! `BUNDLERIG_ENV` variable, then the development default) and injected
//! explicitly into every handler; nothing below this file reads ambient
//! process state.

use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bundlerig_cli::{Cli, CliError, Commands, handlers};
use bundlerig_core::EnvTag;

fn run(cli: Cli) -> anyhow::Result<()> {
    let tag = match cli.env.as_deref() {
        Some(raw) => raw.parse::<EnvTag>().map_err(CliError::from)?,
        None => EnvTag::default(),
    };
    let manifest_path = Path::new(&cli.manifest);

    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Emit {
            compact,
            output,
            port,
        } => {
            handlers::emit::execute(
                manifest_path,
                tag,
                port,
                compact,
                output.as_deref().map(Path::new),
            )?;
        }
        Commands::Resolve { package } => {
            handlers::resolve::execute(manifest_path, &package)?;
        }
        Commands::Addresses { port } => {
            handlers::addresses::execute(port)?;
        }
        Commands::Check => {
            handlers::check::execute(manifest_path, tag)?;
        }
    }

    Ok(())
}

fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging; --verbose forces debug-level output
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        let code = err
            .downcast_ref::<CliError>()
            .map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
}
