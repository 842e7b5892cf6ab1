use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use mdblog::config::{read_config, Config};
use mdblog::logger::default_log_location;

use crate::CFG_FILE_NAME;

fn get_config_path() -> Option<PathBuf> {
    let exe_dir = env::current_exe().ok()
        .and_then(|p| p.parent().map(|d| d.to_path_buf()));

    let candidates = [
        exe_dir,
        env::current_dir().ok(),
        dirs::config_dir().map(|d| d.join("mdblog")),
    ];

    candidates.into_iter()
        .flatten()
        .map(|dir| dir.join(CFG_FILE_NAME))
        .find(|path| path.exists())
}

/// Explicit path first, then the usual locations, then built-in defaults
pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> Result<Config> {
    let config_path = cfg_path.or_else(get_config_path);

    let mut config = match config_path {
        Some(path) => {
            println!("Reading config from {}", path.display());
            read_config(&path).with_context(|| format!("Could not load configuration {}", path.display()))?
        }
        None => {
            println!("No {} found, using defaults", CFG_FILE_NAME);
            Config::default()
        }
    };

    if let Some(mut log) = config.log {
        let location = log.location.unwrap_or_else(default_log_location);
        println!("Log enabled. Files will be written in {}", location.display());
        log.location = Some(location);
        config.log = Some(log);
    } else {
        println!("Log file disabled. Using stdout");
    }

    Ok(config)
}
