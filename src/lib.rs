// src/lib.rs

//! Biblioteca sin Censura catalog library
//!
//! Loads the site's catalog and course list from an ordered list of
//! candidate locations, routes fragments to sections, sorts and filters
//! section views, and renders them through a swappable presenter.

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod render;
pub mod services;
pub mod utils;
