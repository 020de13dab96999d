use std::path::PathBuf;

use clap::Parser;
use satchel::cli::Cli;
use satchel::io::config_io::load_config;
use satchel::io::log::EventLog;

fn main() {
    let cli = Cli::parse();

    let mut config = match load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    let log = EventLog::new(PathBuf::from(".satchel.log"));
    if let Err(e) = satchel::tui::run(config, log) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
