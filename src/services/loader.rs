// src/services/loader.rs

//! Candidate-location loader.
//!
//! Candidates are probed one after another, head to tail. The first
//! successful response wins; everything before it is kept as a diagnostic
//! trail. There is no retry beyond the candidate list.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::models::{Catalog, Course};
use crate::services::fetch::Fetcher;

/// What happened when one candidate was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// Successful status
    Ok(u16),
    /// Non-success status
    Http(u16),
    /// No response at all
    Transport(String),
}

/// One probed candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub location: String,
    pub outcome: AttemptOutcome,
}

impl fmt::Display for Attempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            AttemptOutcome::Ok(status) => write!(f, "{} -> OK ({status})", self.location),
            AttemptOutcome::Http(status) => write!(f, "{} -> HTTP {status}", self.location),
            AttemptOutcome::Transport(message) => {
                write!(f, "{} -> ERROR ({message})", self.location)
            }
        }
    }
}

/// Render the per-candidate trail, one line per attempt.
pub fn format_attempts(attempts: &[Attempt]) -> String {
    attempts
        .iter()
        .map(Attempt::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Terminal load failures.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Every candidate failed or answered with a non-success status
    #[error("No candidate location could be read. Locations tried:\n{}", format_attempts(.attempts))]
    SourceUnavailable { attempts: Vec<Attempt> },

    /// A candidate answered but the body is not the expected document
    #[error("Failed to parse {location}: {source}")]
    Parse {
        location: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A successfully loaded document and where it came from.
#[derive(Debug, Clone)]
pub struct Loaded<T> {
    pub value: T,
    pub location: Url,
    pub attempts: Vec<Attempt>,
}

/// Loads documents from an ordered candidate list.
#[derive(Clone)]
pub struct Loader {
    fetcher: Arc<dyn Fetcher>,
    candidates: Vec<Url>,
}

impl Loader {
    pub fn new(fetcher: Arc<dyn Fetcher>, candidates: Vec<Url>) -> Self {
        Self {
            fetcher,
            candidates,
        }
    }

    /// Probe candidates until one answers successfully.
    ///
    /// Returns the winning location, its raw body and the attempt trail.
    pub async fn probe(&self) -> Result<(Url, Vec<u8>, Vec<Attempt>), LoadError> {
        let mut attempts = Vec::with_capacity(self.candidates.len());

        for candidate in &self.candidates {
            let location = candidate.to_string();
            match self.fetcher.fetch(candidate).await {
                Ok(fetched) if fetched.is_success() => {
                    log::debug!("{location} -> OK ({})", fetched.status);
                    attempts.push(Attempt {
                        location,
                        outcome: AttemptOutcome::Ok(fetched.status),
                    });
                    return Ok((candidate.clone(), fetched.body, attempts));
                }
                Ok(fetched) => {
                    log::debug!("{location} -> HTTP {}", fetched.status);
                    attempts.push(Attempt {
                        location,
                        outcome: AttemptOutcome::Http(fetched.status),
                    });
                }
                Err(e) => {
                    log::debug!("{location} -> ERROR ({e})");
                    attempts.push(Attempt {
                        location,
                        outcome: AttemptOutcome::Transport(e.to_string()),
                    });
                }
            }
        }

        Err(LoadError::SourceUnavailable { attempts })
    }

    /// Probe candidates and parse the winning body as JSON.
    ///
    /// A body that is not valid UTF-8 JSON is a parse failure of that
    /// candidate; later candidates are not tried.
    pub async fn load_json<T: DeserializeOwned>(&self) -> Result<Loaded<T>, LoadError> {
        let (location, body, attempts) = self.probe().await?;
        let value = serde_json::from_slice(&body).map_err(|source| LoadError::Parse {
            location: location.to_string(),
            source,
        })?;
        Ok(Loaded {
            value,
            location,
            attempts,
        })
    }

    pub async fn load_catalog(&self) -> Result<Loaded<Catalog>, LoadError> {
        self.load_json().await
    }

    pub async fn load_courses(&self) -> Result<Loaded<Vec<Course>>, LoadError> {
        self.load_json().await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;
    use std::io;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::error::{AppError, Result};
    use crate::services::fetch::{Fetched, SourceFetcher};

    /// In-memory fetcher: unknown locations answer 404.
    #[derive(Default)]
    pub(crate) struct MockFetcher {
        responses: HashMap<String, std::result::Result<Fetched, String>>,
        pub(crate) calls: Mutex<Vec<String>>,
    }

    impl MockFetcher {
        pub(crate) fn respond(mut self, location: &str, fetched: Fetched) -> Self {
            self.responses.insert(location.to_string(), Ok(fetched));
            self
        }

        pub(crate) fn fail(mut self, location: &str, message: &str) -> Self {
            self.responses
                .insert(location.to_string(), Err(message.to_string()));
            self
        }
    }

    #[async_trait]
    impl Fetcher for MockFetcher {
        async fn fetch(&self, location: &Url) -> Result<Fetched> {
            self.calls.lock().unwrap().push(location.to_string());
            match self.responses.get(location.as_str()) {
                Some(Ok(fetched)) => Ok(fetched.clone()),
                Some(Err(message)) => Err(AppError::Io(io::Error::new(
                    io::ErrorKind::ConnectionRefused,
                    message.clone(),
                ))),
                None => Ok(Fetched::status(404)),
            }
        }
    }

    pub(crate) fn urls(locations: &[&str]) -> Vec<Url> {
        locations.iter().map(|l| Url::parse(l).unwrap()).collect()
    }

    const SIX: [&str; 6] = [
        "http://site/assets/js/contenido.json",
        "http://site/contenido.json",
        "http://site/data/contenido.json",
        "http://site/a/contenido.json",
        "http://site/b/contenido.json",
        "http://site/c/contenido.json",
    ];

    #[tokio::test]
    async fn test_all_404_is_source_unavailable() {
        let loader = Loader::new(Arc::new(MockFetcher::default()), urls(&SIX));
        let err = loader.load_catalog().await.unwrap_err();

        match err {
            LoadError::SourceUnavailable { attempts } => {
                assert_eq!(attempts.len(), 6);
                assert!(
                    attempts
                        .iter()
                        .all(|a| a.outcome == AttemptOutcome::Http(404))
                );
                assert_eq!(attempts[0].location, SIX[0]);
                assert_eq!(attempts[5].location, SIX[5]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_stops_at_first_success() {
        let fetcher = Arc::new(
            MockFetcher::default()
                .fail(SIX[0], "connection refused")
                .respond(SIX[1], Fetched::status(500))
                .respond(SIX[2], Fetched::ok(r#"{"videos": []}"#))
                .respond(SIX[3], Fetched::ok(r#"{"libros": []}"#)),
        );
        let loader = Loader::new(fetcher.clone(), urls(&SIX));
        let loaded = loader.load_catalog().await.unwrap();

        assert_eq!(loaded.value.section_names(), vec!["videos"]);
        assert_eq!(loaded.location.as_str(), SIX[2]);
        assert_eq!(loaded.attempts.len(), 3);
        assert_eq!(
            loaded.attempts[0].outcome,
            AttemptOutcome::Transport("I/O error: connection refused".into())
        );
        assert_eq!(loaded.attempts[1].outcome, AttemptOutcome::Http(500));
        assert_eq!(loaded.attempts[2].outcome, AttemptOutcome::Ok(200));
        assert_eq!(fetcher.calls.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_bad_body_is_parse_failure() {
        let fetcher = MockFetcher::default().respond(SIX[0], Fetched::ok("<html>not json</html>"));
        let loader = Loader::new(Arc::new(fetcher), urls(&SIX));
        let err = loader.load_catalog().await.unwrap_err();
        match err {
            LoadError::Parse { location, .. } => assert_eq!(location, SIX[0]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_parse_failure_does_not_try_next_candidate() {
        let fetcher = Arc::new(
            MockFetcher::default()
                .respond(SIX[0], Fetched::ok("[1, 2]"))
                .respond(SIX[1], Fetched::ok("{}")),
        );
        let loader = Loader::new(fetcher.clone(), urls(&SIX));
        assert!(matches!(
            loader.load_catalog().await,
            Err(LoadError::Parse { .. })
        ));
        assert_eq!(fetcher.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_undecodable_file_is_parse_failure() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.json");
        let second = dir.path().join("b.json");
        std::fs::write(&first, [0xFF, 0xFE, b'{', b'}']).unwrap();
        std::fs::write(&second, r#"{"videos": []}"#).unwrap();

        let candidates = vec![
            Url::from_file_path(&first).unwrap(),
            Url::from_file_path(&second).unwrap(),
        ];
        let fetcher = Arc::new(SourceFetcher::new(reqwest::Client::new()));
        let loader = Loader::new(fetcher, candidates.clone());

        match loader.load_catalog().await {
            Err(LoadError::Parse { location, .. }) => {
                assert_eq!(location, candidates[0].to_string())
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_candidate_list() {
        let loader = Loader::new(Arc::new(MockFetcher::default()), Vec::new());
        match loader.probe().await {
            Err(LoadError::SourceUnavailable { attempts }) => assert!(attempts.is_empty()),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_attempt_formatting() {
        let attempts = vec![
            Attempt {
                location: "a.json".into(),
                outcome: AttemptOutcome::Http(404),
            },
            Attempt {
                location: "b.json".into(),
                outcome: AttemptOutcome::Transport("timed out".into()),
            },
            Attempt {
                location: "c.json".into(),
                outcome: AttemptOutcome::Ok(200),
            },
        ];
        assert_eq!(
            format_attempts(&attempts),
            "a.json -> HTTP 404\nb.json -> ERROR (timed out)\nc.json -> OK (200)"
        );
    }
}
