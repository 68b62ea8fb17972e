use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use groupmatch::{config, timegrid, web};

/// groupmatch — section rosters with schedule-overlap ranking.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print debug-level logs
    #[arg(short = 'v', long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the section-matching web server
    Serve {
        /// Path to config file
        #[arg(short = 'c', long, default_value = "config.toml")]
        config: PathBuf,

        /// Listen address (e.g. "0.0.0.0:3000")
        #[arg(short = 'a', long, default_value = "0.0.0.0:3009")]
        addr: String,
    },

    /// Print the weekly slot grid, one token per line
    Grid,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match &cli.command {
        Command::Serve { config, addr } => {
            let cfg = config::load_config(config)?;
            web::serve(cfg, addr).await?;
        }
        Command::Grid => {
            for slot in timegrid::Slot::all() {
                println!("{slot}");
            }
        }
    }

    Ok(())
}
