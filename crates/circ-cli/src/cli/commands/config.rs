//! Config subcommands.

use anyhow::{Context, Result};
use circ_core::config::{self, Config};

use crate::cli::ConfigCommands;

pub fn run(command: &ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Path => println!("{}", config::config_path().display()),
        ConfigCommands::Init => {
            let path = Config::init()?;
            println!("Created config at {}", path.display());
        }
        ConfigCommands::Show => {
            let config = Config::load()?;
            print!(
                "{}",
                toml::to_string_pretty(&config).context("rendering config")?
            );
        }
    }
    Ok(())
}
