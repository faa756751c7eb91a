// src/pipeline/courses.rs

use std::sync::Arc;

use crate::app::CoursesPage;
use crate::error::Result;
use crate::models::Config;
use crate::services::{Direction, Fetcher};

use super::{OutputFormat, PageOutput};

/// Inputs of one carousel page render.
#[derive(Debug, Clone, Default)]
pub struct CoursesOptions {
    pub query: String,
    /// Next (positive) or previous (negative) clicks to replay
    pub steps: i32,
    pub format: OutputFormat,
}

/// Load the course list and render the carousel page.
pub async fn run_courses(
    config: &Config,
    fetcher: Arc<dyn Fetcher>,
    options: &CoursesOptions,
) -> Result<PageOutput> {
    let mut page = CoursesPage::from_config(config, fetcher)?;
    let failure = page.load().await.err();

    page.filter(&options.query);
    let direction = if options.steps >= 0 {
        Direction::Next
    } else {
        Direction::Prev
    };
    for _ in 0..options.steps.unsigned_abs() {
        if page.navigate(direction).is_none() {
            break;
        }
    }

    let view = page.view();
    log::debug!(
        "Carousel shows {}/{} courses",
        view.cards.len(),
        page.carousel_state().items().len()
    );

    Ok(PageOutput {
        body: options.format.presenter().courses(&view)?,
        failure,
    })
}
