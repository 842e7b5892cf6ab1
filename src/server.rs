use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use ntex::web;
use ntex::web::HttpRequest;
use ntex_files::{Files, NamedFile};
use spdlog::{error, info};

use crate::config::Config;
use crate::content::{Post, RenderOptions, POSTS_PREFIX};
use crate::paginator::Paginator;
use crate::post_cache::PostCache;
use crate::post_list::PostList;
use crate::query_string::QueryString;
use crate::view::list_renderer::ListRenderer;
use crate::view::post_renderer::PostRenderer;
use crate::view::rss_renderer::RssChannel;
use crate::view::Templates;

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

pub struct AppState {
    pub config: Config,
    pub posts: PostCache,
    pub templates: Templates,
}

impl AppState {
    /// Reads every post and template, the server never touches the content directory again
    pub fn load(config: Config) -> io::Result<AppState> {
        let post_list = PostList::new(&config.paths.content_dir, &config.defaults.index_file_name());
        let links = post_list.retrieve()?;

        let render_options = RenderOptions {
            break_tag: config.defaults.summary_break_tag.clone(),
            summary_paragraphs: config.defaults.summary_paragraphs,
        };
        let posts = PostCache::load(&links, &render_options);
        info!("{} posts loaded from {}", posts.len(), config.paths.content_dir.display());

        let templates = Templates::load(&config.paths.template_dir)?;

        Ok(AppState {
            config,
            posts,
            templates,
        })
    }
}

type State = web::types::State<Arc<AppState>>;

fn html(rendered: String) -> web::HttpResponse {
    web::HttpResponse::Ok()
        .content_type(HTML_CONTENT_TYPE)
        .body(rendered)
}

fn get_cur_page(req: &HttpRequest) -> u32 {
    match req.uri().query() {
        Some(query_str) => QueryString::from(query_str).get_page(),
        None => 1,
    }
}

fn render_list(state: &AppState, posts: &[&Post], cur_page: u32, tag: Option<&str>) -> String {
    let paginator = Paginator::from(posts, state.config.defaults.page_size);
    let (cur_page, page) = paginator.page_or_first(cur_page);

    let template = match tag {
        Some(_) => &state.templates.tag,
        None => &state.templates.home,
    };
    let renderer = ListRenderer::new(template, &state.config.site.title);
    renderer.render(page, cur_page, paginator.page_count(), tag, &state.posts.tags())
}

#[web::get("/")]
async fn index(req: HttpRequest, state: State) -> web::HttpResponse {
    let posts = state.posts.newest_first();
    html(render_list(&state, &posts, get_cur_page(&req), None))
}

#[web::get("/tags/{tag}")]
async fn tag_list(req: HttpRequest, tag: web::types::Path<String>, state: State) -> web::HttpResponse {
    let tag = tag.into_inner();
    let posts = state.posts.with_tag(&tag);
    html(render_list(&state, &posts, get_cur_page(&req), Some(&tag)))
}

#[web::get("/posts/{slug}")]
async fn post_view(slug: web::types::Path<String>, state: State) -> web::HttpResponse {
    let slug = slug.into_inner();
    let site_title = state.config.site.title.as_str();

    match state.posts.get(&slug) {
        Some(post) => html(PostRenderer::new(&state.templates.post, site_title).render(post)),
        None => web::HttpResponse::NotFound()
            .content_type(HTML_CONTENT_TYPE)
            .body(PostRenderer::new(&state.templates.not_found, site_title).render_not_found(&slug)),
    }
}

#[web::get("/posts/{slug}/")]
async fn post_wo_slash(slug: web::types::Path<String>) -> web::HttpResponse {
    web::HttpResponse::TemporaryRedirect()
        .header("Location", format!("{}/{}", POSTS_PREFIX, slug.into_inner()))
        .content_type(HTML_CONTENT_TYPE)
        .finish()
}

fn is_safe_segment(segment: &str) -> bool {
    let mut components = Path::new(segment).components();
    matches!((components.next(), components.next()), (Some(Component::Normal(_)), None))
}

/// Directory of a post stored as `<slug>/index.md`, None for single file posts
fn post_dir(post: &Post, index_file: &str) -> Option<PathBuf> {
    match post.source_path.file_name() {
        Some(name) if name == index_file => post.source_path.parent().map(Path::to_path_buf),
        _ => None,
    }
}

#[web::get("/posts/{slug}/{file}")]
async fn post_files(path: web::types::Path<(String, String)>, state: State) -> Result<NamedFile, web::Error> {
    let (slug, file) = path.into_inner();
    if !is_safe_segment(&slug) || !is_safe_segment(&file) {
        return Err(web::error::ErrorForbidden("Access forbidden").into());
    }

    let index_file = state.config.defaults.index_file_name();
    // the post source is served rendered only
    if file == index_file {
        return Err(web::error::ErrorNotFound("File not found").into());
    }
    let dir = state.posts.get(&slug)
        .and_then(|post| post_dir(post, &index_file))
        .ok_or_else(|| web::Error::from(web::error::ErrorNotFound("File not found")))?;

    Ok(NamedFile::open(dir.join(file))?)
}

#[web::get("/rss")]
async fn rss(state: State) -> web::HttpResponse {
    let Some(ref feed) = state.config.rss_feed else {
        return web::HttpResponse::NotFound()
            .content_type("text/plain; charset=utf-8")
            .body("RSS feed is not enabled");
    };

    let posts: Vec<&Post> = state.posts.newest_first()
        .into_iter()
        .take(feed.page_size as usize)
        .collect();

    let channel = RssChannel {
        ch_title: &feed.title,
        ch_link: &feed.site_url,
        ch_desc: &feed.description,
    };

    match channel.render(&posts) {
        Ok(xml) => web::HttpResponse::Ok()
            .content_type("application/rss+xml; charset=utf-8")
            .body(xml),
        Err(e) => {
            error!("Error rendering RSS feed: {}", e);
            web::HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body("Error rendering RSS feed")
        }
    }
}

/// Routes shared by the server and the handler tests
pub fn configure_routes(static_dir: PathBuf) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.service(index)
            .service(tag_list)
            .service(post_view)
            .service(post_wo_slash)
            .service(post_files)
            .service(rss)
            .service(Files::new("/static", static_dir));
    }
}

pub async fn server_run(config: Config) -> io::Result<()> {
    let bind_addr = config.server.address.clone();
    let bind_port = config.server.port;
    let static_dir = config.paths.static_dir.clone();

    let app_state = Arc::new(AppState::load(config)?);

    info!("Listening on {}:{}", bind_addr, bind_port);
    web::HttpServer::new(move || {
        web::App::new()
            .state(app_state.clone())
            .configure(configure_routes(static_dir.clone()))
    })
        .bind((bind_addr, bind_port))?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use ntex::http::StatusCode;
    use ntex::web::test;

    use crate::config::RssFeed;
    use crate::test_data::write_post;

    use super::*;

    struct TestBlog {
        _dir: tempfile::TempDir,
        state: Arc<AppState>,
        static_dir: PathBuf,
    }

    fn test_blog(rss_feed: Option<RssFeed>) -> TestBlog {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content");
        write_post(&content, "hello_world.md", "Hello World", "2024-01-15", &["rust", "web"]);
        write_post(&content, "older.md", "Older <Post>", "2023-06-01", &["life"]);
        write_post(&content, "gallery/index.md", "Gallery", "2022-03-03", &["photos"]);
        std::fs::write(content.join("gallery").join("cat.png"), b"not really a png").unwrap();

        let static_dir = dir.path().join("static");
        std::fs::create_dir_all(&static_dir).unwrap();
        std::fs::write(static_dir.join("style.css"), "body { margin: 0; }").unwrap();

        let mut config = Config::default();
        config.paths.content_dir = content;
        config.paths.template_dir = dir.path().join("templates");
        config.paths.static_dir = static_dir.clone();
        config.defaults.page_size = 2;
        config.rss_feed = rss_feed;

        let state = Arc::new(AppState::load(config).unwrap());
        TestBlog { _dir: dir, state, static_dir }
    }

    async fn get(blog: &TestBlog, uri: &str) -> (StatusCode, String) {
        let app = test::init_service(
            web::App::new()
                .state(blog.state.clone())
                .configure(configure_routes(blog.static_dir.clone()))
        ).await;
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        (status, String::from_utf8_lossy(&body).to_string())
    }

    #[ntex::test]
    async fn test_index_lists_newest_first() {
        let blog = test_blog(None);
        assert_eq!(blog.state.posts.len(), 3);

        let (status, body) = get(&blog, "/").await;
        assert_eq!(status, StatusCode::OK);
        let newest = body.find("/posts/hello_world").unwrap();
        let older = body.find("/posts/older").unwrap();
        assert!(newest < older);
        assert!(body.contains("Older &lt;Post&gt;"));
        assert!(!body.contains("/posts/gallery\""));
        assert!(body.contains("class=\"current\""));
    }

    #[ntex::test]
    async fn test_index_second_page() {
        let blog = test_blog(None);
        let (status, body) = get(&blog, "/?page=2").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("/posts/gallery"));
        assert!(!body.contains("/posts/hello_world\""));

        let (status, body) = get(&blog, "/?page=99").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("/posts/hello_world"));
    }

    #[ntex::test]
    async fn test_post_view() {
        let blog = test_blog(None);
        let (status, body) = get(&blog, "/posts/hello_world").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h1>Hello World</h1>"));
        assert!(body.contains("Date: 2024-01-15"));
        assert!(body.contains("<p>Rest of Hello World.</p>"));
        assert!(body.contains("href=\"/tags/rust\""));
    }

    #[ntex::test]
    async fn test_post_not_found() {
        let blog = test_blog(None);
        let (status, body) = get(&blog, "/posts/does_not_exist").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("404 - Post Not Found"));
    }

    #[ntex::test]
    async fn test_tag_list() {
        let blog = test_blog(None);
        let (status, body) = get(&blog, "/tags/life").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Posts tagged life"));
        assert!(body.contains("/posts/older"));
        assert!(!body.contains("/posts/hello_world"));

        let (status, body) = get(&blog, "/tags/unknown").await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body.contains("/posts/"));
    }

    #[ntex::test]
    async fn test_post_files() {
        let blog = test_blog(None);
        let (status, body) = get(&blog, "/posts/gallery/cat.png").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "not really a png");

        let (status, _) = get(&blog, "/posts/gallery/missing.png").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        // single file posts have no directory to serve from
        let (status, _) = get(&blog, "/posts/older/gallery").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = get(&blog, "/posts/gallery/index.md").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[ntex::test]
    async fn test_post_files_traversal() {
        let blog = test_blog(None);
        let (status, _) = get(&blog, "/posts/gallery/..%2F..%2Fetc%2Fpasswd").await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) = get(&blog, "/posts/gallery/..").await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[ntex::test]
    async fn test_tag_links_are_encoded() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content");
        write_post(&content, "odd_tags.md", "Odd Tags", "2024-05-05", &["c#", "a/b", "two words"]);

        let mut config = Config::default();
        config.paths.content_dir = content;
        config.paths.template_dir = dir.path().join("templates");
        let static_dir = dir.path().join("static");
        let blog = TestBlog { state: Arc::new(AppState::load(config).unwrap()), _dir: dir, static_dir };

        let (status, body) = get(&blog, "/posts/odd_tags").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("href=\"/tags/c%23\""));
        assert!(body.contains("href=\"/tags/a%2Fb\""));
        assert!(body.contains("href=\"/tags/two%20words\""));

        for link in ["/tags/c%23", "/tags/a%2Fb", "/tags/two%20words"] {
            let (status, body) = get(&blog, link).await;
            assert_eq!(status, StatusCode::OK);
            assert!(body.contains("/posts/odd_tags"), "{} should list the post", link);
        }
    }

    #[test]
    fn test_safe_segment() {
        assert!(is_safe_segment("cat.png"));
        assert!(!is_safe_segment(".."));
        assert!(!is_safe_segment("../secret"));
        assert!(!is_safe_segment("/etc/passwd"));
        assert!(!is_safe_segment(""));
    }

    #[ntex::test]
    async fn test_static_files() {
        let blog = test_blog(None);
        let (status, body) = get(&blog, "/static/style.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "body { margin: 0; }");
    }

    #[ntex::test]
    async fn test_rss_disabled() {
        let blog = test_blog(None);
        let (status, _) = get(&blog, "/rss").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[ntex::test]
    async fn test_rss_enabled() {
        let blog = test_blog(Some(RssFeed {
            title: "Feed".to_string(),
            site_url: "https://example.com".to_string(),
            description: "All posts".to_string(),
            page_size: 2,
        }));
        let (status, body) = get(&blog, "/rss").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("<?xml"));
        assert!(body.contains("<link>https://example.com/posts/hello_world</link>"));
        assert!(body.contains("<link>https://example.com/posts/older</link>"));
        assert!(!body.contains("gallery"));
    }
}
