//! Pelagos CLI - Ocean Soundscape Generator
//!
//! Command-line shell around the Pelagos synthesis engine.

use clap::Parser;
use env_logger::Env;
use log::info;

use pelagos::cli::{commands, Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    info!("Pelagos v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(Commands::Render {
            output,
            duration,
            sample_rate,
            seed,
            bit_depth,
            config,
        }) => {
            commands::render(
                &output,
                duration,
                sample_rate,
                seed,
                bit_depth,
                config.as_deref(),
            )?;
        }
        None => {
            println!("Pelagos v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
        }
    }

    Ok(())
}
