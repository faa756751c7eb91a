// src/models/mod.rs

//! Domain models for the catalog application.
//!
//! This module contains the data structures shared by the loader, the
//! view engine and the renderers.

mod config;
mod course;
mod item;

// Re-export all public types
pub use config::{CarouselConfig, Config, LoaderConfig, LoggingConfig, Messages, RenderConfig};
pub use course::Course;
pub use item::{Catalog, Item};
