use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct Site {
    #[serde(default = "default_site_title")]
    pub title: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Paths {
    #[serde(default = "default_content_dir")]
    pub content_dir: PathBuf,
    #[serde(default = "default_template_dir")]
    pub template_dir: PathBuf,
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Defaults {
    #[serde(default = "default_index_base_name")]
    pub index_base_name: String,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_summary_break_tag")]
    pub summary_break_tag: String,
    #[serde(default = "default_summary_paragraphs")]
    pub summary_paragraphs: usize,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Server {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Log {
    #[serde(default = "default_log_level")]
    pub level: LogLevel,
    #[serde(default)]
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Clone, Debug)]
pub struct RssFeed {
    pub title: String,
    pub site_url: String,
    pub description: String,
    #[serde(default = "default_rss_page_size")]
    pub page_size: u32,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    #[serde(default)]
    pub site: Site,
    #[serde(default)]
    pub paths: Paths,
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub server: Server,
    pub log: Option<Log>,
    pub rss_feed: Option<RssFeed>,
}

fn default_site_title() -> String { "Blog Posts".to_string() }
fn default_content_dir() -> PathBuf { PathBuf::from("content") }
fn default_template_dir() -> PathBuf { PathBuf::from("templates") }
fn default_static_dir() -> PathBuf { PathBuf::from("static") }
fn default_index_base_name() -> String { "index".to_string() }
fn default_page_size() -> u32 { 10 }
fn default_summary_break_tag() -> String { "<!-- more -->".to_string() }
fn default_summary_paragraphs() -> usize { 1 }
fn default_address() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }
fn default_log_level() -> LogLevel { LogLevel::Info }
fn default_rss_page_size() -> u32 { 20 }

impl Default for Site {
    fn default() -> Self {
        Site { title: default_site_title() }
    }
}

impl Default for Paths {
    fn default() -> Self {
        Paths {
            content_dir: default_content_dir(),
            template_dir: default_template_dir(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            index_base_name: default_index_base_name(),
            page_size: default_page_size(),
            summary_break_tag: default_summary_break_tag(),
            summary_paragraphs: default_summary_paragraphs(),
        }
    }
}

impl Default for Server {
    fn default() -> Self {
        Server {
            address: default_address(),
            port: default_port(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            site: Site::default(),
            paths: Paths::default(),
            defaults: Defaults::default(),
            server: Server::default(),
            log: None,
            rss_feed: None,
        }
    }
}

impl Defaults {
    /// File name looked up inside directory posts, e.g. `index.md`
    pub fn index_file_name(&self) -> String {
        format!("{}.md", self.index_base_name)
    }
}

fn parse_path(path: PathBuf, exe_dir: Option<&Path>) -> PathBuf {
    match (path.to_str(), exe_dir.and_then(|d| d.to_str())) {
        (Some(str_path), Some(exe_dir)) if str_path.starts_with("${exe_dir}") => {
            PathBuf::from(str_path.replace("${exe_dir}", exe_dir))
        }
        _ => path,
    }
}

fn resolve_paths(paths: Paths) -> Paths {
    let cur_exe = env::current_exe().ok();
    let exe_dir = cur_exe.as_deref().and_then(|p| p.parent());

    Paths {
        content_dir: parse_path(paths.content_dir, exe_dir),
        template_dir: parse_path(paths.template_dir, exe_dir),
        static_dir: parse_path(paths.static_dir, exe_dir),
    }
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let mut cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    if cfg.defaults.page_size == 0 {
        return Err(io::Error::new(ErrorKind::InvalidData, "defaults.page_size must be greater than 0"));
    }

    cfg.paths = resolve_paths(cfg.paths);
    Ok(cfg)
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
        .map_err(|e| io::Error::new(e.kind(), format!("{} - file={}", e, cfg_path.display())))
}
