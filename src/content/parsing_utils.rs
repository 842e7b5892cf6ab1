use std::io;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// Drops every `<!-- ... -->` block from the markdown source
pub fn remove_comments(md_post: &str) -> io::Result<String> {
    let start_comment = "<!--";
    let end_comment = "-->";

    let mut res = String::with_capacity(md_post.len());
    let mut block = md_post;

    while let Some(start) = block.find(start_comment) {
        res.push_str(&block[..start]);

        let next = &block[(start + start_comment.len())..];
        match next.find(end_comment) {
            Some(end) => block = &next[(end + end_comment.len())..],
            None => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "Error finding end of comment",
                ));
            }
        }
    }
    res.push_str(block);

    Ok(res)
}

/// Source of the preview shown in post lists.
///
/// Everything before the first line holding `break_tag`. Posts without the
/// tag fall back to their first `paragraphs` paragraphs.
pub fn extract_summary<'a>(body: &'a str, break_tag: &str, paragraphs: usize) -> &'a str {
    let mut offset = 0;
    for line in body.split_inclusive('\n') {
        if !break_tag.is_empty() && line.contains(break_tag) {
            return body[..offset].trim_end();
        }
        offset += line.len();
    }

    let paragraphs = paragraphs.max(1);
    let mut offset = 0;
    let mut seen = 0;
    let mut in_paragraph = false;
    for line in body.split_inclusive('\n') {
        if line.trim().is_empty() {
            if in_paragraph {
                seen += 1;
                in_paragraph = false;
                if seen == paragraphs {
                    return body[..offset].trim_end();
                }
            }
        } else {
            in_paragraph = true;
        }
        offset += line.len();
    }

    body.trim_end()
}

fn is_relative_url(url: &str) -> bool {
    !(url.is_empty()
        || url.contains("://")
        || url.starts_with('/')
        || url.starts_with('#')
        || url.starts_with("data:")
        || url.starts_with("mailto:"))
}

/// Points relative markdown images at `prefix`, so directory posts can ship their own files.
pub fn change_images(prefix: &str, md_post: &str) -> String {
    lazy_static! {
        static ref IMAGE_REGEX: Regex = Regex::new(
            r"!\[(?P<alt>[^\]]*)\]\((?P<url>[^)\s]+)(?P<rest>[^)]*)\)"
        ).unwrap();
    }

    let prefix = prefix.trim_end_matches('/');
    IMAGE_REGEX.replace_all(md_post, |caps: &Captures| {
        let url = &caps["url"];
        if is_relative_url(url) {
            let url = url.trim_start_matches("./");
            format!("![{}]({}/{}{})", &caps["alt"], prefix, url, &caps["rest"])
        } else {
            caps[0].to_string()
        }
    }).to_string()
}
