//! CLI definitions and command routing.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::block::Entry;
use crate::config::Settings;

#[derive(Parser)]
#[command(name = "add-host")]
#[command(about = "Add a host entry to the hosts file")]
pub struct Cli {
    /// The hostname to add (e.g. myapp.local)
    pub hostname: String,

    /// The host address [default: 127.0.0.1, or host_address from config.toml]
    #[arg(long, visible_alias = "host_address")]
    pub host_address: Option<String>,

    /// Custom path to the hosts file
    #[arg(long, visible_alias = "custom_path")]
    pub custom_path: Option<PathBuf>,
}

/// Parse args and run. Handled failures are printed and still return `Ok`.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    println!("Starting add-host...");
    if let Err(e) = cmd_add(cli) {
        println!("{e}");
    }
    println!("Finished.");
    Ok(())
}

fn cmd_add(cli: Cli) -> Result<()> {
    let settings = Settings::load()?;
    let address = cli
        .host_address
        .unwrap_or_else(|| settings.host_address.clone());
    let entry = Entry::new(address, cli.hostname);
    let file = crate::platform::hosts_file(cli.custom_path)?;
    crate::hosts::add_host_entry(file.as_ref(), &settings.markers(), &entry)?;
    Ok(())
}
