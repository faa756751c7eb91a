// src/pipeline/browse.rs

use std::sync::Arc;

use crate::app::LibraryPage;
use crate::error::Result;
use crate::models::Config;
use crate::services::{Fetcher, SortOrder};

use super::{OutputFormat, PageOutput};

/// Inputs of one library page render.
#[derive(Debug, Clone, Default)]
pub struct BrowseOptions {
    /// Address fragment, e.g. `#/libros`
    pub fragment: String,
    pub order: SortOrder,
    pub query: String,
    /// Render the about page variant of the menu
    pub about_page: bool,
    pub format: OutputFormat,
}

/// Load the catalog and render the library page.
pub async fn run_browse(
    config: &Config,
    fetcher: Arc<dyn Fetcher>,
    options: &BrowseOptions,
) -> Result<PageOutput> {
    let mut page = LibraryPage::from_config(config, fetcher)?.about_page(options.about_page);
    page.set_order(options.order);
    page.search(&options.query);

    let failure = page.load(&options.fragment).await.err();
    let view = page.view();
    if let Some(fragment) = &view.fragment {
        if fragment != &options.fragment {
            log::info!("Address fragment set to {fragment}");
        }
    }
    log::debug!(
        "Section '{}' ({}, query '{}'): {}",
        page.state().section,
        options.order,
        options.query,
        view.counter.as_deref().unwrap_or("-")
    );

    Ok(PageOutput {
        body: options.format.presenter().library(&view)?,
        failure,
    })
}

/// Load the catalog and list its sections with item counts, in catalog order.
pub async fn run_sections(
    config: &Config,
    fetcher: Arc<dyn Fetcher>,
) -> Result<Vec<(String, usize)>> {
    let mut page = LibraryPage::from_config(config, fetcher)?;
    page.load("").await?;

    let catalog = &page.state().catalog;
    Ok(catalog
        .iter()
        .map(|(name, items)| (name.to_string(), items.len()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::SourceFetcher;

    fn fixture() -> (tempfile::TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("contenido.json"),
            r#"{"videos": [{"titulo": "Beta", "descripcion": "adv"}, {"titulo": "Alpha", "descripcion": "intro"}],
                "libros": []}"#,
        )
        .unwrap();
        let mut config = Config::default();
        config.loader.base = dir.path().to_string_lossy().into_owned();
        config.loader.candidates = vec!["assets/js/contenido.json".into(), "contenido.json".into()];
        (dir, config)
    }

    fn fetcher() -> Arc<dyn Fetcher> {
        Arc::new(SourceFetcher::new(reqwest::Client::new()))
    }

    #[tokio::test]
    async fn test_browse_from_directory_falls_through_candidates() {
        let (_dir, config) = fixture();
        let options = BrowseOptions {
            fragment: "#/videos".into(),
            order: SortOrder::Descending,
            ..BrowseOptions::default()
        };
        let output = run_browse(&config, fetcher(), &options).await.unwrap();
        let body = output.into_result().unwrap();
        assert!(body.contains("*Videos*"));
        let beta = body.find("Beta").unwrap();
        let alpha = body.find("Alpha").unwrap();
        assert!(beta < alpha);
    }

    #[tokio::test]
    async fn test_browse_missing_catalog_renders_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.loader.base = dir.path().join("site").to_string_lossy().into_owned();
        config.loader.candidates = vec!["contenido.json".into(), "data/contenido.json".into()];

        let options = BrowseOptions {
            format: OutputFormat::Html,
            ..BrowseOptions::default()
        };
        let output = run_browse(&config, fetcher(), &options).await.unwrap();
        let (body, failure) = output.into_result().unwrap_err();
        assert_eq!(body.matches("class=\"message error\"").count(), 1);
        assert!(matches!(
            failure,
            crate::services::LoadError::SourceUnavailable { ref attempts } if attempts.len() == 2
        ));
    }

    #[tokio::test]
    async fn test_sections_in_catalog_order() {
        let (_dir, config) = fixture();
        let sections = run_sections(&config, fetcher()).await.unwrap();
        assert_eq!(
            sections,
            vec![("videos".to_string(), 2), ("libros".to_string(), 0)]
        );
    }
}
