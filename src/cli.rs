use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "sat", about = concat!("[>] satchel v", env!("CARGO_PKG_VERSION"), " - capture notes and links, ask questions"), version)]
pub struct Cli {
    /// Backend base address (overrides the config file)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Path to a satchel.toml config file (default: ./satchel.toml)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,
}
