//! YAML frontmatter at the top of a post.
//!
//! ```text
//! ---
//! title: "Building a blog in Rust"
//! date: "2024-01-15"
//! tags: ["rust", "web"]
//! ---
//!
//! Markdown body
//! ```

use std::io;
use std::io::ErrorKind;

use serde::{Deserialize, Deserializer, Serialize};

use crate::content::post_date::PostDate;

const DELIMITER: &str = "---";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FrontMatter {
    pub title: String,
    pub date: PostDate,
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
}

fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
{
    let tags: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(tags.unwrap_or_default()
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect())
}

impl FrontMatter {
    /// Splits a post into its raw YAML block and its trimmed markdown body.
    pub fn split(raw: &str) -> io::Result<(&str, &str)> {
        let mut offset = 0;
        let mut yaml_start = None;

        for line in raw.split_inclusive('\n') {
            let line_end = offset + line.len();
            let trimmed = line.trim();

            match yaml_start {
                None if trimmed.is_empty() => {}
                None if trimmed == DELIMITER => yaml_start = Some(line_end),
                None => {
                    return Err(io::Error::new(ErrorKind::InvalidData, "Frontmatter must start with a '---' line"));
                }
                Some(start) if trimmed == DELIMITER => {
                    let yaml = &raw[start..offset];
                    let body = raw[line_end..].trim();
                    return Ok((yaml, body));
                }
                Some(_) => {}
            }

            offset = line_end;
        }

        match yaml_start {
            None => Err(io::Error::new(ErrorKind::InvalidData, "Missing frontmatter")),
            Some(_) => Err(io::Error::new(ErrorKind::InvalidData, "End of frontmatter ('---') is missing")),
        }
    }

    pub fn parse(yaml: &str) -> io::Result<FrontMatter> {
        let front_matter: FrontMatter = serde_yaml::from_str(yaml)
            .map_err(|e| io::Error::new(ErrorKind::InvalidData, format!("Invalid frontmatter: {}", e)))?;

        if front_matter.title.trim().is_empty() {
            return Err(io::Error::new(ErrorKind::InvalidData, "Invalid frontmatter: title is empty"));
        }

        Ok(front_matter)
    }
}
