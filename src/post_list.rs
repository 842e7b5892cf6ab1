use std::{fs, io};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use spdlog::warn;

use crate::content::content_file::ContentFile;

#[derive(Debug, Clone, PartialEq)]
pub struct PostLink {
    pub slug: String,
    pub post_path: PathBuf,
}

/// Finds posts under `root_dir`: `<slug>.md` files and `<slug>/<index_file>` directories
pub struct PostList {
    pub root_dir: PathBuf,
    pub index_file: String,
}

impl PostList {
    pub fn new(root_dir: &Path, index_file: &str) -> Self {
        PostList {
            root_dir: root_dir.to_path_buf(),
            index_file: index_file.to_string(),
        }
    }

    /// Post files sorted by path. A missing root directory yields no posts.
    pub fn retrieve(&self) -> io::Result<Vec<PostLink>> {
        let entries = match fs::read_dir(&self.root_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("Content directory {} does not exist", self.root_dir.display());
                return Ok(vec![]);
            }
            Err(e) => return Err(io::Error::new(e.kind(), format!("Error listing {}: {}", self.root_dir.display(), e))),
        };

        let mut posts = vec![];
        for entry in entries {
            let entry = entry?;
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if name.starts_with('.') {
                continue;
            }

            let path = entry.path();
            let file_type = entry.file_type()?;
            if file_type.is_file() && ContentFile::is_markdown(&path) {
                if let Some(slug) = path.file_stem().and_then(|s| s.to_str()) {
                    posts.push(PostLink { slug: slug.to_string(), post_path: path.clone() });
                }
            } else if file_type.is_dir() {
                let index_path = path.join(&self.index_file);
                if index_path.is_file() {
                    posts.push(PostLink { slug: name, post_path: index_path });
                }
            }
        }

        posts.sort_by(|a, b| a.post_path.cmp(&b.post_path));
        Ok(posts)
    }
}
