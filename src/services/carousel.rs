// src/services/carousel.rs

//! Course carousel state.
//!
//! Keeps the full course list, the filtered strip and the horizontal
//! scroll position. Button enablement is derived from the scroll position
//! and must be recomputed after every scroll and every re-render.

use crate::models::{CarouselConfig, Course};

/// Scroll direction for the prev/next buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Horizontal scroll geometry of the strip container.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    /// Current left offset
    pub offset: f64,
    /// Total scrollable content width
    pub scroll_width: f64,
    /// Visible width
    pub client_width: f64,
}

impl ScrollState {
    pub fn new(scroll_width: f64, client_width: f64) -> Self {
        Self {
            offset: 0.0,
            scroll_width,
            client_width,
        }
    }

    /// Largest reachable offset.
    pub fn max_offset(&self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }

    fn clamp(&mut self) {
        self.offset = self.offset.clamp(0.0, self.max_offset());
    }
}

/// Enabled state of the prev/next buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Buttons {
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

/// Carousel over a flat course list.
#[derive(Debug, Clone)]
pub struct Carousel {
    items: Vec<Course>,
    filtered: Vec<Course>,
    query: String,
    container: Option<ScrollState>,
    config: CarouselConfig,
}

impl Carousel {
    /// Create a carousel without a scroll container.
    pub fn new(items: Vec<Course>, config: CarouselConfig) -> Self {
        Self {
            filtered: items.clone(),
            items,
            query: String::new(),
            container: None,
            config,
        }
    }

    /// Attach a scroll container with the given geometry.
    pub fn with_container(mut self, container: ScrollState) -> Self {
        self.container = Some(container);
        self
    }

    /// Replace the course list and reset the filter.
    pub fn set_items(&mut self, items: Vec<Course>) {
        self.filtered = items.clone();
        self.items = items;
        self.query.clear();
    }

    pub fn items(&self) -> &[Course] {
        &self.items
    }

    /// Courses currently on the strip.
    pub fn filtered(&self) -> &[Course] {
        &self.filtered
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn container(&self) -> Option<&ScrollState> {
        self.container.as_ref()
    }

    /// Filter by title or keyword. A blank query shows everything.
    pub fn filter(&mut self, query: &str) {
        self.query = query.to_string();
        if query.trim().is_empty() {
            self.filtered = self.items.clone();
        } else {
            let needle = query.to_lowercase();
            self.filtered = self
                .items
                .iter()
                .filter(|course| course.matches(&needle))
                .cloned()
                .collect();
        }
        log::debug!(
            "Carousel filter '{}' kept {}/{} courses",
            query,
            self.filtered.len(),
            self.items.len()
        );
    }

    /// Clear the search box and show every course again.
    pub fn clear(&mut self) {
        self.filter("");
    }

    /// Scroll one step in `direction`.
    ///
    /// Returns the new offset, or `None` without a container.
    pub fn navigate(&mut self, direction: Direction) -> Option<f64> {
        let step = self.config.scroll_step;
        let container = self.container.as_mut()?;
        container.offset += match direction {
            Direction::Next => step,
            Direction::Prev => -step,
        };
        container.clamp();
        Some(container.offset)
    }

    /// Manual scroll to an absolute offset.
    pub fn scroll_to(&mut self, offset: f64) -> Option<f64> {
        let container = self.container.as_mut()?;
        container.offset = offset;
        container.clamp();
        Some(container.offset)
    }

    /// Update the content width after a re-render.
    pub fn relayout(&mut self, scroll_width: f64) {
        if let Some(container) = self.container.as_mut() {
            container.scroll_width = scroll_width;
            container.clamp();
        }
    }

    /// Current button state, or `None` without a container.
    pub fn buttons(&self) -> Option<Buttons> {
        let container = self.container.as_ref()?;
        Some(Buttons {
            prev_disabled: container.offset <= 0.0,
            next_disabled: container.offset >= container.max_offset() - self.config.edge_epsilon,
        })
    }
}
