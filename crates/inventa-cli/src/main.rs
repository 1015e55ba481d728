//! inventa CLI
//!
//! Text-based inventory manager: query assets stored as YAML files in a
//! directory tree.

use std::io::Write;

use clap::Parser;
use color_eyre::Result;
use eyre::WrapErr;
use inventa_cli::cli::{Cli, Commands};
use inventa_cli::commands::get;
use inventa_cli::config::Config;
use inventa_cli::logging::{self, LogConfig};
use inventa_store::FsStore;
use tracing::debug;

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let cli = Cli::parse();

    let root = cli
        .inventory
        .canonicalize()
        .wrap_err_with(|| format!("inventory not found: {}", cli.inventory.display()))?;

    let config = Config::load_for(cli.config.as_deref(), &root)?;

    // Initialize logging
    logging::init(&LogConfig::new(&config.log, cli.debug))?;
    match &config.source {
        Some(path) => debug!(config = %path.display(), "loaded configuration"),
        None => debug!("no config file found, using defaults"),
    }

    let store = FsStore::open(&root)?;

    match cli.command {
        Commands::Get(args) => {
            let output = get::execute(&args, &store, &config.query)?;

            let mut stdout = std::io::stdout().lock();
            if args.machine_readable {
                inventa_cli::render::machine_readable(&mut stdout, &output.rows)?;
            } else {
                inventa_cli::render::table(&mut stdout, &output.keys, &output.rows)?;
            }
            stdout.flush()?;
        }
    }

    Ok(())
}
