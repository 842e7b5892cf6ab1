use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};

use mdblog::config::Defaults;
use mdblog::content::front_matter::FrontMatter;
use mdblog::content::post_date::PostDate;
use mdblog::text_utils::slug_from_title;

use crate::{PostArgs, PostOutput};

fn render_header(title: &str, date: NaiveDate, tags: &[String]) -> Result<String> {
    let front_matter = FrontMatter {
        title: title.to_string(),
        date: PostDate(date),
        tags: tags.iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect(),
    };
    let yaml = serde_yaml::to_string(&front_matter).context("Error writing frontmatter")?;
    Ok(format!("---\n{}---\n", yaml))
}

fn render_body() -> String {
    let mut buf = String::new();
    buf.push_str("This is a body example.\n");
    buf.push_str("Please remove it and replace with your content.\n\n");
    buf.push_str("<!-- more -->\n\n");
    buf.push_str("And this is the rest of your post.\n");
    buf
}

fn render_post(title: &str, date: NaiveDate, tags: &[String]) -> Result<String> {
    Ok(format!("{}\n{}", render_header(title, date, tags)?, render_body()))
}

/// Post file name inside a dir post, `index.md` unless the blog configures another base name
fn index_file_name(index_base_name: Option<&str>) -> String {
    let mut defaults = Defaults::default();
    if let Some(base_name) = index_base_name {
        defaults.index_base_name = base_name.to_string();
    }
    defaults.index_file_name()
}

fn write_new_file(path: &Path, post: &str) -> Result<()> {
    if path.exists() {
        bail!("{} already exists", path.display());
    }
    fs::write(path, post).with_context(|| format!("Error writing {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(())
}

pub fn post_cmd(args: PostArgs) -> Result<()> {
    if args.title.trim().is_empty() {
        bail!("The post title cannot be empty");
    }

    let today = Local::now().date_naive();
    let post = render_post(args.title.trim(), today, &args.tags)?;
    let base_dir = args.dir.map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
    let slug = slug_from_title(&args.title, &today);

    match args.output {
        PostOutput::Stdout => print!("{}", post),
        PostOutput::File => write_new_file(&base_dir.join(format!("{}.md", slug)), &post)?,
        PostOutput::Dir => {
            let post_dir = base_dir.join(&slug);
            fs::create_dir_all(&post_dir)
                .with_context(|| format!("Error creating directory {}", post_dir.display()))?;
            let index_file = index_file_name(args.index_base_name.as_deref());
            write_new_file(&post_dir.join(index_file), &post)?;
        }
    };

    Ok(())
}
