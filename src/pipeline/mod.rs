// src/pipeline/mod.rs

//! Pipeline entry points for CLI operations.
//!
//! - `run_browse`: Load the catalog, route, sort/filter and render a section
//! - `run_courses`: Load the course list and render the carousel
//! - `run_sections`: Summarize the catalog's sections
//! - `run_validate`: Check configuration and catalog
//! - `run_edit`: Apply one content editor action to a catalog file

mod browse;
mod courses;
mod edit;
mod validate;

use std::fmt;
use std::str::FromStr;

pub use browse::{BrowseOptions, run_browse, run_sections};
pub use courses::{CoursesOptions, run_courses};
pub use edit::{EditAction, run_edit};
pub use validate::run_validate;

use crate::error::AppError;
use crate::render::{HtmlPresenter, Presenter, TextPresenter};
use crate::services::LoadError;

/// Presenter selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
}

impl OutputFormat {
    pub fn presenter(&self) -> Box<dyn Presenter> {
        match self {
            OutputFormat::Text => Box::new(TextPresenter::new()),
            OutputFormat::Html => Box::new(HtmlPresenter::new()),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Text => "text",
            OutputFormat::Html => "html",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "html" => Ok(OutputFormat::Html),
            other => Err(AppError::validation(format!(
                "Unknown format '{other}' (expected text or html)"
            ))),
        }
    }
}

/// A rendered page plus the load failure it shows, if any.
///
/// The page is produced even on failure so the error notice can be
/// displayed before the failure is reported.
#[derive(Debug)]
pub struct PageOutput {
    pub body: String,
    pub failure: Option<LoadError>,
}

impl PageOutput {
    pub fn into_result(self) -> Result<String, (String, LoadError)> {
        match self.failure {
            None => Ok(self.body),
            Some(e) => Err((self.body, e)),
        }
    }
}
