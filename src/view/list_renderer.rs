use ramhorns::Template;

use crate::content::Post;
use crate::text_utils::format_date;
use crate::view::ViewTag;

#[derive(ramhorns::Content)]
struct ListPage<'a> {
    site_title: &'a str,
    tag: &'a str,
    post_list: Vec<PostItem<'a>>,
    tags: Vec<ViewTag<'a>>,
    page_list: Vec<ViewPagination>,
    show_pagination: bool,
}

#[derive(ramhorns::Content)]
struct PostItem<'a> {
    date: String,
    link: String,
    title: &'a str,
    summary: &'a str,
    tags: Vec<ViewTag<'a>>,
}

#[derive(ramhorns::Content)]
struct ViewPagination {
    current: bool,
    number: u32,
    link: String,
}

/// Renders a page of posts, the home page and the per-tag pages alike
pub struct ListRenderer<'a> {
    pub template: &'a Template<'static>,
    pub site_title: &'a str,
}

impl<'a> ListRenderer<'a> {
    pub fn new(template: &'a Template<'static>, site_title: &'a str) -> Self {
        ListRenderer {
            template,
            site_title,
        }
    }

    pub fn render(&self, posts: &[&Post], cur_page: u32, page_count: u32, tag: Option<&str>, tags: &[(String, usize)]) -> String {
        let post_list = posts.iter()
            .map(|post| PostItem {
                date: format_date(&post.date()),
                link: post.link(),
                title: post.title(),
                summary: post.summary.as_str(),
                tags: post.tags().iter().map(|t| ViewTag::new(t, 0)).collect(),
            })
            .collect();

        let page_list = (1..=page_count)
            .map(|number| ViewPagination {
                current: number == cur_page,
                number,
                link: format!("?page={}", number),
            })
            .collect();

        let tags = tags.iter()
            .map(|(tag, count)| ViewTag::new(tag, *count))
            .collect();

        self.template.render(&ListPage {
            site_title: self.site_title,
            tag: tag.unwrap_or(""),
            post_list,
            tags,
            page_list,
            show_pagination: page_count > 1,
        })
    }
}
