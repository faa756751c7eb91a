// src/utils/mod.rs

//! Utility functions and helpers.

pub mod http;

use std::path::Path;

use url::Url;

use crate::error::{AppError, Result};

/// Resolve a potentially relative URL against a base URL.
pub fn resolve_url(base: &Url, href: &str) -> Result<Url> {
    Ok(base.join(href)?)
}

/// Turn a configured base location into a URL candidates can be joined to.
///
/// `http`, `https` and `file` URLs are used as-is. Anything else is taken
/// as a directory on disk, relative to the working directory.
pub fn base_url(base: &str) -> Result<Url> {
    if let Ok(url) = Url::parse(base) {
        if matches!(url.scheme(), "http" | "https" | "file") {
            return Ok(url);
        }
    }

    let path = Path::new(base);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    Url::from_directory_path(&absolute)
        .map_err(|()| AppError::config(format!("Invalid base directory: {}", absolute.display())))
}

/// Resolve every candidate against the base, keeping their order.
pub fn resolve_candidates(base: &Url, candidates: &[String]) -> Result<Vec<Url>> {
    candidates
        .iter()
        .map(|candidate| resolve_url(base, candidate))
        .collect()
}

/// Join an asset directory and a filename with exactly one separator.
pub fn asset_path(asset_base: &str, filename: &str) -> String {
    if asset_base.is_empty() {
        return filename.to_string();
    }
    format!(
        "{}/{}",
        asset_base.trim_end_matches('/'),
        filename.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_url() {
        let base = Url::parse("https://example.com/site/index.html").unwrap();
        assert_eq!(
            resolve_url(&base, "assets/js/contenido.json").unwrap().as_str(),
            "https://example.com/site/assets/js/contenido.json"
        );
        assert_eq!(
            resolve_url(&base, "/contenido.json").unwrap().as_str(),
            "https://example.com/contenido.json"
        );
        assert_eq!(
            resolve_url(&base, "../contenido.json").unwrap().as_str(),
            "https://example.com/contenido.json"
        );
    }

    #[test]
    fn test_base_url_directory() {
        let dir = tempfile::tempdir().unwrap();
        let base = base_url(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(base.scheme(), "file");
        assert!(base.as_str().ends_with('/'));

        let resolved = resolve_url(&base, "contenido.json").unwrap();
        assert_eq!(
            resolved.to_file_path().unwrap(),
            dir.path().join("contenido.json")
        );
    }

    #[test]
    fn test_base_url_keeps_http() {
        let base = base_url("http://localhost:8000/").unwrap();
        assert_eq!(base.as_str(), "http://localhost:8000/");
    }

    #[test]
    fn test_resolve_candidates_keeps_order() {
        let base = Url::parse("http://localhost/").unwrap();
        let urls =
            resolve_candidates(&base, &["b.json".to_string(), "a.json".to_string()]).unwrap();
        assert_eq!(urls[0].path(), "/b.json");
        assert_eq!(urls[1].path(), "/a.json");
    }

    #[test]
    fn test_asset_path() {
        assert_eq!(asset_path("assets/img/", "tapa.jpg"), "assets/img/tapa.jpg");
        assert_eq!(asset_path("assets/img", "/tapa.jpg"), "assets/img/tapa.jpg");
        assert_eq!(asset_path("", "tapa.jpg"), "tapa.jpg");
    }
}
