use std::io;
use std::io::ErrorKind;

use markdown::Options;

use crate::content::content_file::ContentFile;
use crate::content::front_matter::FrontMatter;
use crate::content::parsing_utils::{change_images, extract_summary, remove_comments};
use crate::content::{post_link, Post, RenderOptions};

pub struct MarkdownRenderer {}

impl MarkdownRenderer {
    pub fn render(content_file: &ContentFile, render_options: &RenderOptions) -> io::Result<Post> {
        let with_file = |e: io::Error| {
            io::Error::new(e.kind(), format!("{} - file={}", e, content_file.file_path.display()))
        };

        let (yaml, body) = FrontMatter::split(&content_file.raw_content).map_err(with_file)?;
        let front_matter = FrontMatter::parse(yaml).map_err(with_file)?;

        let img_prefix = post_link(&content_file.slug);
        let html = Self::render_markdown(body, &img_prefix).map_err(with_file)?;
        let summary = extract_summary(body, &render_options.break_tag, render_options.summary_paragraphs);
        let summary = Self::render_markdown(summary, &img_prefix).map_err(with_file)?;

        Ok(Post {
            slug: content_file.slug.clone(),
            source_path: content_file.file_path.clone(),
            front_matter,
            content: body.to_string(),
            html,
            summary,
        })
    }

    pub fn render_markdown(md_text: &str, img_prefix: &str) -> io::Result<String> {
        let buf = remove_comments(md_text)?;
        let buf = change_images(img_prefix, &buf);
        markdown::to_html_with_options(&buf, &Options::gfm())
            .map_err(|e| io::Error::new(ErrorKind::InvalidData, e.to_string()))
    }
}
