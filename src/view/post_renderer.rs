use ramhorns::Template;

use crate::content::Post;
use crate::text_utils::{format_date, format_long_date};
use crate::view::ViewTag;

#[derive(ramhorns::Content)]
struct ViewItem<'a> {
    site_title: &'a str,
    slug: &'a str,
    title: &'a str,
    date: &'a str,
    long_date: &'a str,
    tags: Vec<ViewTag<'a>>,
    content: &'a str,
}

#[derive(ramhorns::Content)]
struct NotFoundPage<'a> {
    site_title: &'a str,
    slug: &'a str,
}

pub struct PostRenderer<'a> {
    pub template: &'a Template<'static>,
    pub site_title: &'a str,
}

impl<'a> PostRenderer<'a> {
    pub fn new(template: &'a Template<'static>, site_title: &'a str) -> Self {
        PostRenderer {
            template,
            site_title,
        }
    }

    pub fn render(&self, post: &Post) -> String {
        let tags = post.tags().iter().map(|t| ViewTag::new(t, 0)).collect();
        let date = format_date(&post.date());
        let long_date = format_long_date(&post.date());

        self.template.render(&ViewItem {
            site_title: self.site_title,
            slug: post.slug.as_str(),
            title: post.title(),
            date: date.as_str(),
            long_date: long_date.as_str(),
            tags,
            content: post.html.as_str(),
        })
    }

    /// Same renderer, fed with the not found template
    pub fn render_not_found(&self, slug: &str) -> String {
        self.template.render(&NotFoundPage {
            site_title: self.site_title,
            slug,
        })
    }
}
