use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::ConfigArgs;

const CFG_FILE_NAME: &str = "mdblog.toml";

const CONFIG_SAMPLE: &str = r#"[site]
title = "My Blog"

# For the file locations, If you want it to be relative to the executable directory
# use ${exe_dir}/location
[paths]
content_dir = "content"
template_dir = "templates"
static_dir = "static"

# Posts in a directory are read from <index_base_name>.md
[defaults]
index_base_name = "index"
page_size = 10
summary_break_tag = "<!-- more -->"
summary_paragraphs = 1

[server]
address = "127.0.0.1"
port = 8080

# Remove this section to log only to the console
[log]
level = "Info"
log_to_console = true

# Remove this section to disable /rss
[rss_feed]
title = "My Blog"
site_url = "http://localhost:8080"
description = "Latest posts"
page_size = 20
"#;

fn default_config_path() -> Result<PathBuf> {
    match dirs::config_dir() {
        Some(dir) => Ok(dir.join("mdblog").join(CFG_FILE_NAME)),
        None => bail!("Could not find the user config directory. Use --path"),
    }
}

pub(crate) fn write_sample_cfg(file_path: &Path) -> Result<()> {
    if file_path.exists() {
        bail!("{} already exists", file_path.display());
    }
    if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Error creating directory {}", parent.display()))?;
    }
    fs::write(file_path, CONFIG_SAMPLE)
        .with_context(|| format!("Error writing {}", file_path.display()))
}

pub fn config_cmd(args: ConfigArgs) -> Result<()> {
    let file_path = match args.path {
        Some(path) => PathBuf::from(path),
        None => default_config_path()?,
    };

    write_sample_cfg(&file_path)?;
    println!("Sample configuration written to {}", file_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use mdblog::config::{parse_config, LogLevel};

    use super::*;

    #[test]
    fn test_sample_is_a_valid_config() {
        let cfg = parse_config(CONFIG_SAMPLE).unwrap();
        assert_eq!(cfg.site.title, "My Blog");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.defaults.page_size, 10);
        assert_eq!(cfg.log.unwrap().level, LogLevel::Info);
        assert_eq!(cfg.rss_feed.unwrap().page_size, 20);
    }

    #[test]
    fn test_write_sample_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CFG_FILE_NAME);

        write_sample_cfg(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), CONFIG_SAMPLE);
        assert!(write_sample_cfg(&path).is_err());
    }
}
