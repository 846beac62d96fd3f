//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "circ")]
#[command(version = "0.1")]
#[command(about = "Multi-connection IRC client engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Replay raw protocol lines through the engine
    Replay {
        /// File of protocol lines; stdin when omitted
        file: Option<PathBuf>,

        /// Connection id the lines belong to
        #[arg(long, default_value = "default")]
        connection: String,

        /// Print the final state as JSON after the events
        #[arg(long)]
        state: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Print the config file path
    Path,
    /// Create a default config file
    Init,
    /// Print the effective configuration
    Show,
}

pub fn run() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Commands::Replay {
            file,
            connection,
            state,
        } => commands::replay::run(file.as_deref(), &connection, state),
        Commands::Config { command } => commands::config::run(&command),
    }
}

fn init_tracing() {
    // Diagnostics go to stderr so replay output stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
