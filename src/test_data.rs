#[cfg(test)]
pub const POST_DATA: &str = r##"---
title: "Building a Blog with Rust"
date: "2024-01-15"
tags: ["rust", "web", "actix"]
---

# Building a Blog with Rust

Rust is a great fit for small web services. This post walks through a markdown blog server.

<!-- more -->

## Why Rust?

- Memory safety without a garbage collector
- Fearless concurrency
- A strong type system

```rust
fn main() {
    println!("Hello, blog!");
}
```

> Simplicity is prerequisite for reliability.

Happy coding!
"##;

#[cfg(test)]
pub const POST_DATA_NO_BREAK: &str = r##"---
title: "Getting Started with Markdown"
date: "2023-11-02"
tags: ["markdown", "writing"]
---

Markdown keeps writing simple.
It renders to clean HTML.

## Headings

Use `#` for headings.

![diagram](diagram.png)
"##;

/// Writes a minimal valid post into `dir` and returns its path
#[cfg(test)]
pub fn write_post(dir: &std::path::Path, file_name: &str, title: &str, date: &str, tags: &[&str]) -> std::path::PathBuf {
    let tags = tags.iter().map(|t| format!("\"{}\"", t)).collect::<Vec<_>>().join(", ");
    let raw = format!("---\ntitle: \"{}\"\ndate: \"{}\"\ntags: [{}]\n---\n\nSummary of {}.\n\n<!-- more -->\n\nRest of {}.\n",
                      title, date, tags, title, title);
    let path = dir.join(file_name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, raw).unwrap();
    path
}
