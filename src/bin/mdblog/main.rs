use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use spdlog::{info, warn};

use mdblog::logger::configure_logger;
use mdblog::server::server_run;

use crate::config::open_config;

mod config;

const CFG_FILE_NAME: &str = "mdblog.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config path
    #[arg(short, long)]
    config_path: Option<String>,
}

#[ntex::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config_path = args.config_path.map(PathBuf::from);

    let config = open_config(config_path)?;

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    info!("Starting mdblog =-=-=-=-=-=-=-=-=-=-=-=-=-=-=-");
    info!("Content from {}", config.paths.content_dir.display());

    server_run(config).await.context("Server stopped with an error")
}
