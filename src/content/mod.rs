use std::io;
use std::path::PathBuf;

use crate::content::content_file::ContentFile;
use crate::content::front_matter::FrontMatter;
use crate::content::markdown_renderer::MarkdownRenderer;
use crate::content::post_date::PostDate;

pub mod content_file;
pub mod front_matter;
pub mod markdown_renderer;
pub mod parsing_utils;
pub mod post_date;

/// URL prefix every post is served under
pub const POSTS_PREFIX: &str = "/posts";

/// A parsed and rendered post
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub slug: String,
    pub source_path: PathBuf,
    pub front_matter: FrontMatter,
    /// Markdown body, frontmatter excluded
    pub content: String,
    pub html: String,
    pub summary: String,
}

impl Post {
    /// Reads, parses and renders the post at `file_path`
    pub fn from_file(slug: String, file_path: PathBuf, render_options: &RenderOptions) -> io::Result<Post> {
        let content_file = ContentFile::from_file(slug, file_path)?;
        MarkdownRenderer::render(&content_file, render_options)
    }

    pub fn title(&self) -> &str {
        &self.front_matter.title
    }

    pub fn date(&self) -> PostDate {
        self.front_matter.date
    }

    pub fn tags(&self) -> &[String] {
        &self.front_matter.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.front_matter.tags.iter().any(|t| t == tag)
    }

    pub fn link(&self) -> String {
        post_link(&self.slug)
    }
}

pub fn post_link(slug: &str) -> String {
    format!("{}/{}", POSTS_PREFIX, slug)
}

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub break_tag: String,
    pub summary_paragraphs: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            break_tag: "<!-- more -->".to_string(),
            summary_paragraphs: 1,
        }
    }
}
