use std::fmt::{Display, Formatter};

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::config_data::config_cmd;
use crate::post::post_cmd;

mod config_data;
mod post;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
enum Args {
    /// Create a new post
    Post(PostArgs),
    /// Write a sample mdblog.toml
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct PostArgs {
    /// Title of the post
    #[arg(short, long)]
    title: String,

    /// Comma separated list of tags
    #[arg(long, value_delimiter = ',')]
    tags: Vec<String>,

    /// Post generation options
    #[arg(short, long, default_value_t = PostOutput::Stdout)]
    output: PostOutput,

    /// Directory where file and dir posts are created
    #[arg(short, long)]
    dir: Option<String>,

    /// Base name of the post file for dir posts. Must match `defaults.index_base_name`
    #[arg(long)]
    index_base_name: Option<String>,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ConfigArgs {
    /// Where to write the configuration. Defaults to the user config directory
    #[arg(short, long)]
    path: Option<String>,
}

#[derive(Clone, Debug, ValueEnum)]
enum PostOutput {
    /// Writes the new post content to the stdout
    Stdout,
    /// Writes the new post content to a file (posts without images)
    File,
    /// Writes the new post content to a directory (posts with images)
    Dir,
}

impl Display for PostOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PostOutput::Stdout => "stdout",
            PostOutput::File => "file",
            PostOutput::Dir => "dir",
        };
        write!(f, "{}", name)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args {
        Args::Post(args) => post_cmd(args),
        Args::Config(args) => config_cmd(args),
    }
}
