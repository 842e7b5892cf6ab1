use std::{fs, io};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Raw post file as found on disk, before parsing
#[derive(Debug)]
pub struct ContentFile {
    pub slug: String,
    pub file_path: PathBuf,
    pub raw_content: String,
}

impl ContentFile {
    pub fn from_file(slug: String, file_path: PathBuf) -> io::Result<ContentFile> {
        if !Self::is_markdown(&file_path) {
            return Err(io::Error::new(ErrorKind::Unsupported, format!("Not a markdown file: {}", file_path.display())));
        }

        let raw_content = fs::read_to_string(&file_path)
            .map_err(|e| io::Error::new(e.kind(), format!("Error reading post {}: {}", file_path.display(), e)))?;

        Ok(ContentFile {
            slug,
            file_path,
            raw_content,
        })
    }

    pub fn is_markdown(file_name: &Path) -> bool {
        file_name.extension().map(|e| e == "md").unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_markdown() {
        assert!(ContentFile::is_markdown(Path::new("content/post.md")));
        assert!(!ContentFile::is_markdown(Path::new("content/post.html")));
        assert!(!ContentFile::is_markdown(Path::new("content/md")));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hello.md");
        fs::write(&path, "---\ntitle: hi\ndate: 2024-01-01\n---\nbody").unwrap();

        let file = ContentFile::from_file("hello".to_string(), path.clone()).unwrap();
        assert_eq!(file.slug, "hello");
        assert_eq!(file.file_path, path);
        assert!(file.raw_content.ends_with("body"));
    }

    #[test]
    fn test_from_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = ContentFile::from_file("x".to_string(), dir.path().join("x.txt")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unsupported);

        let err = ContentFile::from_file("y".to_string(), dir.path().join("y.md")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("y.md"));
    }
}
