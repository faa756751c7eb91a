// src/services/mod.rs

//! Service layer for the catalog application.
//!
//! This module contains the business logic for:
//! - Reading documents from candidate locations (`Loader`, `Fetcher`)
//! - Fragment routing and the navigation menu (`router`)
//! - Sorting and filtering section views (`view`)
//! - The course carousel (`Carousel`)
//! - Editing the catalog file (`CatalogEditor`)

pub mod carousel;
pub mod editor;
pub mod fetch;
pub mod loader;
pub mod router;
pub mod view;

pub use carousel::{Buttons, Carousel, Direction, ScrollState};
pub use editor::{CatalogEditor, ItemDraft};
pub use fetch::{Fetched, Fetcher, SourceFetcher};
pub use loader::{Attempt, AttemptOutcome, LoadError, Loaded, Loader};
pub use router::{MenuEntry, Resolution};
pub use view::SortOrder;
