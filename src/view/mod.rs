use std::io::ErrorKind;
use std::path::Path;
use std::{fs, io};

use ramhorns::Template;
use spdlog::warn;

pub mod default_templates;
pub mod list_renderer;
pub mod post_renderer;
pub mod rss_renderer;

pub const HOME_TPL_FILE: &str = "home.tpl";
pub const TAG_TPL_FILE: &str = "tag.tpl";
pub const POST_TPL_FILE: &str = "post.tpl";
pub const NOT_FOUND_TPL_FILE: &str = "not_found.tpl";

#[derive(ramhorns::Content)]
pub(crate) struct ViewTag<'a> {
    tag: &'a str,
    // percent-encoded, for `/tags/{{url}}` links
    url: String,
    count: u32,
}

impl<'a> ViewTag<'a> {
    pub(crate) fn new(tag: &'a str, count: usize) -> Self {
        ViewTag {
            tag,
            url: encode_path_segment(tag),
            count: count as u32,
        }
    }
}

/// Percent-encodes `segment` so it stays a single path segment
pub fn encode_path_segment(segment: &str) -> String {
    // form encoding writes spaces as '+' and a literal '+' as %2B
    serde_urlencoded::to_string([("", segment)])
        .map(|encoded| encoded.trim_start_matches('=').replace('+', "%20"))
        .unwrap_or_else(|_| segment.to_string())
}

/// Parsed page templates, loaded once at startup
pub struct Templates {
    pub home: Template<'static>,
    pub tag: Template<'static>,
    pub post: Template<'static>,
    pub not_found: Template<'static>,
}

impl Templates {
    /// Loads templates from `tpl_dir`, using the built-in page for any missing file
    pub fn load(tpl_dir: &Path) -> io::Result<Templates> {
        Ok(Templates {
            home: load_template(tpl_dir, HOME_TPL_FILE, default_templates::HOME_TPL)?,
            tag: load_template(tpl_dir, TAG_TPL_FILE, default_templates::TAG_TPL)?,
            post: load_template(tpl_dir, POST_TPL_FILE, default_templates::POST_TPL)?,
            not_found: load_template(tpl_dir, NOT_FOUND_TPL_FILE, default_templates::NOT_FOUND_TPL)?,
        })
    }

    pub fn built_in() -> io::Result<Templates> {
        Ok(Templates {
            home: parse_template(HOME_TPL_FILE, default_templates::HOME_TPL.to_string())?,
            tag: parse_template(TAG_TPL_FILE, default_templates::TAG_TPL.to_string())?,
            post: parse_template(POST_TPL_FILE, default_templates::POST_TPL.to_string())?,
            not_found: parse_template(NOT_FOUND_TPL_FILE, default_templates::NOT_FOUND_TPL.to_string())?,
        })
    }
}

pub fn read_template(tpl_dir: &Path, file_name: &str) -> io::Result<String> {
    let full_path = tpl_dir.join(file_name);
    fs::read_to_string(full_path)
}

fn load_template(tpl_dir: &Path, file_name: &str, fallback: &str) -> io::Result<Template<'static>> {
    let source = match read_template(tpl_dir, file_name) {
        Ok(source) => source,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("Template {} not found in {}, using the built-in one", file_name, tpl_dir.display());
            fallback.to_string()
        }
        Err(e) => {
            return Err(io::Error::new(e.kind(), format!("Error loading template {}: {}", file_name, e)));
        }
    };

    parse_template(file_name, source)
}

fn parse_template(file_name: &str, source: String) -> io::Result<Template<'static>> {
    Template::new(source)
        .map_err(|e| io::Error::new(ErrorKind::InvalidData, format!("Error parsing template {}: {}", file_name, e)))
}
