// src/app.rs

//! Page controllers.
//!
//! Each controller owns its page state explicitly and re-runs only the
//! part of the pipeline an event invalidates:
//!
//! | event          | re-sort | re-filter | re-render |
//! |----------------|---------|-----------|-----------|
//! | load / reload  | yes     | yes       | yes       |
//! | section change | yes     | yes       | yes       |
//! | order change   | yes     | yes       | yes       |
//! | query change   | no      | yes       | yes       |

use std::sync::Arc;

use crate::error::Result;
use crate::models::{CarouselConfig, Catalog, Config, Course, Item, Messages};
use crate::render::{CardRenderer, CoursesView, LibraryView, Rendered};
use crate::services::loader::format_attempts;
use crate::services::{
    Carousel, Direction, Fetcher, LoadError, Loader, ScrollState, SortOrder, router, view,
};
use crate::utils::{base_url, resolve_candidates, resolve_url};

/// Library page state.
#[derive(Debug, Clone, Default)]
pub struct LibraryState {
    pub catalog: Catalog,
    /// Selected section; empty before load
    pub section: String,
    pub order: SortOrder,
    pub query: String,
    /// Current section sorted by `order`
    sorted: Vec<Item>,
    /// `sorted` narrowed by `query`
    view: Vec<Item>,
}

impl LibraryState {
    pub fn view(&self) -> &[Item] {
        &self.view
    }

    fn resort(&mut self) {
        self.sorted = view::sort_items(self.catalog.items(&self.section), self.order);
        self.refilter();
    }

    fn refilter(&mut self) {
        self.view = view::filter_items(&self.sorted, &self.query);
    }
}

/// Controller for the sectioned library page.
pub struct LibraryPage {
    loader: Loader,
    renderer: CardRenderer,
    messages: Messages,
    about_page: bool,
    state: LibraryState,
    fragment: Option<String>,
    content: Rendered,
    loaded: bool,
}

impl LibraryPage {
    pub fn new(loader: Loader, config: &Config) -> Self {
        let renderer = CardRenderer::new(config.render.clone());
        Self {
            loader,
            content: renderer.render(&[]),
            renderer,
            messages: config.render.messages.clone(),
            about_page: false,
            state: LibraryState::default(),
            fragment: None,
            loaded: false,
        }
    }

    /// Build a page whose catalog candidates come from the configuration.
    pub fn from_config(config: &Config, fetcher: Arc<dyn Fetcher>) -> Result<Self> {
        let base = base_url(&config.loader.base)?;
        let candidates = resolve_candidates(&base, &config.loader.candidates)?;
        Ok(Self::new(Loader::new(fetcher, candidates), config))
    }

    /// Render as the about page: menu links point back to the index and
    /// fragments are not routed.
    pub fn about_page(mut self, about_page: bool) -> Self {
        self.about_page = about_page;
        self
    }

    pub fn state(&self) -> &LibraryState {
        &self.state
    }

    /// Load (or reload) the catalog and route to `fragment`.
    ///
    /// On failure the content region shows the generic error notice, the
    /// detailed diagnostic goes to the log, and the error is returned.
    pub async fn load(&mut self, fragment: &str) -> std::result::Result<(), LoadError> {
        match self.loader.load_catalog().await {
            Ok(loaded) => {
                log::info!(
                    "Loaded {} sections ({} items) from {}",
                    loaded.value.len(),
                    loaded.value.item_count(),
                    loaded.location
                );
                self.state.catalog = loaded.value;
                self.state.section.clear();
                self.loaded = true;
                self.navigate(fragment);
                Ok(())
            }
            Err(e) => {
                self.fail(&e);
                Err(e)
            }
        }
    }

    fn fail(&mut self, error: &LoadError) {
        let message = match error {
            LoadError::SourceUnavailable { attempts } => {
                log::error!(
                    "Error loading catalog. Locations tried:\n{}",
                    format_attempts(attempts)
                );
                &self.messages.source_unavailable
            }
            LoadError::Parse { location, source } => {
                log::error!("Error parsing catalog from {location}: {source}");
                &self.messages.parse_failure
            }
        };
        self.content = Rendered::error(message.clone());
        self.state = LibraryState::default();
        self.fragment = None;
        self.loaded = false;
    }

    /// Handle a fragment change.
    pub fn navigate(&mut self, fragment: &str) {
        if !self.loaded || self.about_page {
            return;
        }
        let sections = self.state.catalog.section_names();
        let Some(resolution) = router::resolve(fragment, &sections) else {
            log::debug!("Catalog has no sections; nothing to select");
            self.fragment = None;
            self.render();
            return;
        };

        if let Some(rewrite) = &resolution.rewrite {
            log::debug!("Fragment '{fragment}' is not a section, switching to {rewrite}");
        }
        self.fragment = Some(router::fragment_for(&resolution.section));
        self.state.section = resolution.section;
        self.state.resort();
        self.render();
    }

    /// Handle a sort order change.
    pub fn set_order(&mut self, order: SortOrder) {
        self.state.order = order;
        if self.loaded {
            self.state.resort();
            self.render();
        }
    }

    /// Handle a search text change. The sorted base is reused.
    pub fn search(&mut self, query: &str) {
        self.state.query = query.to_string();
        if self.loaded {
            self.state.refilter();
            self.render();
        }
    }

    fn render(&mut self) {
        self.content = self.renderer.render(&self.state.view);
    }

    /// Current page contents.
    pub fn view(&self) -> LibraryView {
        let sections = self.state.catalog.section_names();
        LibraryView {
            menu: router::menu(&sections, self.about_page, &self.state.section),
            fragment: self.fragment.clone(),
            counter: self
                .loaded
                .then(|| self.renderer.counter(self.state.view.len())),
            content: self.content.clone(),
        }
    }
}

/// Controller for the course carousel page.
pub struct CoursesPage {
    loader: Loader,
    renderer: CardRenderer,
    carousel: Carousel,
    card_width: f64,
}

impl CoursesPage {
    pub fn new(loader: Loader, config: &Config) -> Self {
        Self {
            loader,
            renderer: CardRenderer::new(config.render.clone()),
            carousel: Self::carousel(Vec::new(), &config.carousel),
            card_width: config.carousel.card_width,
        }
    }

    /// Build a page reading the course list named in the configuration.
    pub fn from_config(config: &Config, fetcher: Arc<dyn Fetcher>) -> Result<Self> {
        let base = base_url(&config.loader.base)?;
        let location = resolve_url(&base, &config.loader.courses)?;
        Ok(Self::new(Loader::new(fetcher, vec![location]), config))
    }

    fn carousel(items: Vec<Course>, config: &CarouselConfig) -> Carousel {
        let carousel = Carousel::new(items, config.clone());
        if config.viewport_width > 0.0 {
            carousel.with_container(ScrollState::new(0.0, config.viewport_width))
        } else {
            carousel
        }
    }

    pub fn carousel_state(&self) -> &Carousel {
        &self.carousel
    }

    /// Load the course list. A failure is logged and leaves the strip empty.
    pub async fn load(&mut self) -> std::result::Result<(), LoadError> {
        match self.loader.load_courses().await {
            Ok(loaded) => {
                log::info!(
                    "Loaded {} courses from {}",
                    loaded.value.len(),
                    loaded.location
                );
                self.carousel.set_items(loaded.value);
                self.relayout();
                Ok(())
            }
            Err(e) => {
                log::error!("Error loading courses: {e}");
                Err(e)
            }
        }
    }

    pub fn filter(&mut self, query: &str) {
        self.carousel.filter(query);
        self.relayout();
    }

    pub fn clear(&mut self) {
        self.carousel.clear();
        self.relayout();
    }

    pub fn navigate(&mut self, direction: Direction) -> Option<f64> {
        self.carousel.navigate(direction)
    }

    pub fn scroll_to(&mut self, offset: f64) -> Option<f64> {
        self.carousel.scroll_to(offset)
    }

    fn relayout(&mut self) {
        let width = self.carousel.filtered().len() as f64 * self.card_width;
        self.carousel.relayout(width);
    }

    pub fn view(&self) -> CoursesView {
        CoursesView {
            query: self.carousel.query().to_string(),
            cards: self.renderer.render_courses(self.carousel.filtered()),
            buttons: self.carousel.buttons(),
            offset: self.carousel.container().map(|c| c.offset),
        }
    }
}
