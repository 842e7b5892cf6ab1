use std::collections::HashMap;
use std::io;

use spdlog::{info, warn};

use crate::content::{Post, RenderOptions};
use crate::post_list::PostLink;

/// Every post of the blog, parsed once at startup
#[derive(Default)]
pub struct PostCache {
    posts: HashMap<String, Post>,
    // slugs, newest first
    post_list: Vec<String>,
}

impl PostCache {
    pub fn new() -> PostCache {
        Default::default()
    }

    /// Loads every link, skipping posts that fail to parse
    pub fn load(links: &[PostLink], render_options: &RenderOptions) -> PostCache {
        let mut cache = PostCache::new();
        for link in links {
            match Post::from_file(link.slug.clone(), link.post_path.clone(), render_options) {
                Ok(post) => {
                    let title = post.title().to_string();
                    match cache.insert(post) {
                        Ok(()) => info!("Loaded post: {} ({})", title, link.slug),
                        Err(e) => warn!("Skipping {}: {}", link.post_path.display(), e),
                    }
                }
                Err(e) => warn!("Skipping post {}: {}", link.slug, e),
            }
        }
        cache.sort();
        cache
    }

    /// The first post registered under a slug wins
    pub fn add(&mut self, post: Post) -> io::Result<()> {
        self.insert(post)?;
        self.sort();
        Ok(())
    }

    // leaves post_list unsorted
    fn insert(&mut self, post: Post) -> io::Result<()> {
        if self.posts.contains_key(&post.slug) {
            return Err(io::Error::new(io::ErrorKind::AlreadyExists, format!("Duplicate post slug {}", post.slug)));
        }

        self.post_list.push(post.slug.clone());
        self.posts.insert(post.slug.clone(), post);
        Ok(())
    }

    fn sort(&mut self) {
        let posts = &self.posts;
        self.post_list.sort_by(|a, b| {
            let da = posts[a].date();
            let db = posts[b].date();
            db.cmp(&da).then_with(|| a.cmp(b))
        });
    }

    pub fn get(&self, slug: &str) -> Option<&Post> {
        self.posts.get(slug)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn newest_first(&self) -> Vec<&Post> {
        self.post_list.iter()
            .filter_map(|slug| self.posts.get(slug))
            .collect()
    }

    pub fn with_tag(&self, tag: &str) -> Vec<&Post> {
        self.newest_first().into_iter()
            .filter(|post| post.has_tag(tag))
            .collect()
    }

    /// Tags by number of posts, most used first
    pub fn tags(&self) -> Vec<(String, usize)> {
        let mut tag_map: HashMap<&str, usize> = HashMap::new();
        for post in self.posts.values() {
            for tag in post.tags() {
                *tag_map.entry(tag.as_str()).or_insert(0) += 1;
            }
        }

        let mut tag_list: Vec<(String, usize)> = tag_map.into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        tag_list.sort_by(|(ka, va), (kb, vb)| vb.cmp(va).then_with(|| ka.cmp(kb)));
        tag_list
    }
}
