// src/services/fetch.rs

//! Transport for reading catalog documents.
//!
//! `http`/`https` locations go through reqwest, `file` locations through
//! tokio's filesystem API. A missing file is reported as HTTP 404 so both
//! transports look the same to the loader. Bodies are returned as raw
//! bytes; decoding them is the loader's job.

use std::io::ErrorKind;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::error::{AppError, Result};

/// A completed read: status code plus body.
///
/// The body is only read for successful statuses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Fetched {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Reads a document from a location.
///
/// An `Err` means the transport itself failed (no status was obtained).
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, location: &Url) -> Result<Fetched>;
}

/// Fetcher dispatching on the location's scheme.
#[derive(Clone)]
pub struct SourceFetcher {
    client: Client,
}

impl SourceFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    async fn fetch_http(&self, location: &Url) -> Result<Fetched> {
        let response = self.client.get(location.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Ok(Fetched::status(status.as_u16()));
        }
        let body = response.bytes().await?;
        Ok(Fetched {
            status: status.as_u16(),
            body: body.to_vec(),
        })
    }

    async fn fetch_file(location: &Url) -> Result<Fetched> {
        let path = location
            .to_file_path()
            .map_err(|()| AppError::config(format!("Not a local path: {location}")))?;
        match tokio::fs::read(&path).await {
            Ok(body) => Ok(Fetched::ok(body)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Fetched::status(404)),
            Err(e) if e.kind() == ErrorKind::PermissionDenied => Ok(Fetched::status(403)),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl Fetcher for SourceFetcher {
    async fn fetch(&self, location: &Url) -> Result<Fetched> {
        match location.scheme() {
            "http" | "https" => self.fetch_http(location).await,
            "file" => Self::fetch_file(location).await,
            other => Err(AppError::config(format!("Unsupported scheme: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetcher() -> SourceFetcher {
        SourceFetcher::new(Client::new())
    }

    #[tokio::test]
    async fn test_file_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contenido.json");
        std::fs::write(&path, "{}").unwrap();

        let url = Url::from_file_path(&path).unwrap();
        let fetched = fetcher().fetch(&url).await.unwrap();
        assert!(fetched.is_success());
        assert_eq!(fetched.body, b"{}");
    }

    #[tokio::test]
    async fn test_file_body_is_not_decoded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contenido.json");
        std::fs::write(&path, [0xFF, 0xFE, b'{', b'}']).unwrap();

        let url = Url::from_file_path(&path).unwrap();
        let fetched = fetcher().fetch(&url).await.unwrap();
        assert_eq!(fetched.status, 200);
        assert_eq!(fetched.body, vec![0xFF, 0xFE, b'{', b'}']);
    }

    #[tokio::test]
    async fn test_missing_file_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let url = Url::from_file_path(dir.path().join("nope.json")).unwrap();
        let fetched = fetcher().fetch(&url).await.unwrap();
        assert_eq!(fetched, Fetched::status(404));
        assert!(!fetched.is_success());
    }

    #[tokio::test]
    async fn test_unsupported_scheme() {
        let url = Url::parse("ftp://example.com/contenido.json").unwrap();
        assert!(fetcher().fetch(&url).await.is_err());
    }
}
