//! Locating the page file for a code and extension.
//!
//! Two tiers, tried once each: the exact code (`404.html`), then the code
//! class (`4xx.html`). Any failure to open a candidate, including it being a
//! directory, counts as the candidate not existing.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs::File;

/// Which tier produced the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Exact,
    Class,
}

/// An opened page file. The handle is closed when this is dropped.
#[derive(Debug)]
pub struct ErrorPage {
    pub file: File,
    pub path: PathBuf,
    pub tier: Tier,
}

/// Neither tier had a readable file.
#[derive(Debug, thiserror::Error)]
#[error("no error page at {} or {}", exact.display(), class.display())]
pub struct PageNotFound {
    pub exact: PathBuf,
    pub class: PathBuf,
}

/// `<root>/<code><ext>`
pub fn exact_path(root: &Path, code: i64, extension: &str) -> PathBuf {
    root.join(format!("{code}{extension}"))
}

/// `<root>/<first digit>xx<ext>`, from the decimal form of the code.
pub fn class_path(root: &Path, code: i64, extension: &str) -> PathBuf {
    root.join(format!("{}{extension}", class_of(code)))
}

/// `404` → `4xx`. Only the first character of the decimal form is kept.
pub fn class_of(code: i64) -> String {
    let lead = code.to_string().chars().next().unwrap_or('0');
    format!("{lead}xx")
}

/// Open the page for `code`, trying the exact file before the class file.
pub async fn open_page(
    root: &Path,
    code: i64,
    extension: &str,
) -> Result<ErrorPage, PageNotFound> {
    let exact = exact_path(root, code, extension);
    match open_regular(&exact).await {
        Ok(file) => {
            return Ok(ErrorPage {
                file,
                path: exact,
                tier: Tier::Exact,
            })
        }
        Err(err) => {
            tracing::debug!(path = %exact.display(), error = %err, "exact error page unavailable");
        }
    }

    let class = class_path(root, code, extension);
    match open_regular(&class).await {
        Ok(file) => Ok(ErrorPage {
            file,
            path: class,
            tier: Tier::Class,
        }),
        Err(err) => {
            tracing::warn!(path = %class.display(), error = %err, "class error page unavailable");
            Err(PageNotFound { exact, class })
        }
    }
}

async fn open_regular(path: &Path) -> io::Result<File> {
    let file = File::open(path).await?;
    if file.metadata().await?.is_file() {
        Ok(file)
    } else {
        Err(io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;

    async fn read_all(page: ErrorPage) -> String {
        let mut file = page.file;
        let mut body = String::new();
        file.read_to_string(&mut body).await.unwrap();
        body
    }

    #[test]
    fn test_paths() {
        let root = Path::new("/www");
        assert_eq!(exact_path(root, 404, ".html"), PathBuf::from("/www/404.html"));
        assert_eq!(class_path(root, 404, ".html"), PathBuf::from("/www/4xx.html"));
        assert_eq!(class_path(root, 503, ".json"), PathBuf::from("/www/5xx.json"));
    }

    #[test]
    fn test_class_of_uses_leading_character() {
        assert_eq!(class_of(404), "4xx");
        assert_eq!(class_of(42), "4xx");
        assert_eq!(class_of(-1), "-xx");
    }

    #[tokio::test]
    async fn test_exact_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("404.html"), "exact").unwrap();
        std::fs::write(dir.path().join("4xx.html"), "class").unwrap();

        let page = open_page(dir.path(), 404, ".html").await.unwrap();
        assert_eq!(page.tier, Tier::Exact);
        assert_eq!(page.path, dir.path().join("404.html"));
        assert_eq!(read_all(page).await, "exact");
    }

    #[tokio::test]
    async fn test_falls_back_to_class() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("5xx.json"), "{}").unwrap();

        let page = open_page(dir.path(), 503, ".json").await.unwrap();
        assert_eq!(page.tier, Tier::Class);
        assert_eq!(read_all(page).await, "{}");
    }

    #[tokio::test]
    async fn test_directory_is_not_a_page() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("404.html")).unwrap();
        std::fs::write(dir.path().join("4xx.html"), "class").unwrap();

        let page = open_page(dir.path(), 404, ".html").await.unwrap();
        assert_eq!(page.tier, Tier::Class);
    }

    #[tokio::test]
    async fn test_not_found_reports_both_paths() {
        let dir = tempfile::tempdir().unwrap();

        let err = open_page(dir.path(), 418, ".html").await.unwrap_err();
        assert_eq!(err.exact, dir.path().join("418.html"));
        assert_eq!(err.class, dir.path().join("4xx.html"));
    }
}
