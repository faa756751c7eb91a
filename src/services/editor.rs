// src/services/editor.rs

//! File-backed catalog editor.
//!
//! Loads the catalog document, applies section and item edits in memory,
//! and writes it back as pretty-printed JSON.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::{AppError, Result};
use crate::models::{Catalog, Item};

/// Sections a fresh catalog starts with.
pub const DEFAULT_SECTIONS: [&str; 4] = ["cursos", "comics", "libros", "software"];

/// Raw item fields as typed by the editor user.
#[derive(Debug, Clone, Default)]
pub struct ItemDraft {
    pub title: String,
    pub description: String,
    pub link: String,
    pub cover_image: Option<String>,
}

impl ItemDraft {
    /// Trim fields and check the required ones.
    ///
    /// Title, description and link are required; a blank cover is absent.
    pub fn validate(self) -> Result<Item> {
        let title = self.title.trim();
        let description = self.description.trim();
        let link = self.link.trim();
        if title.is_empty() || description.is_empty() || link.is_empty() {
            return Err(AppError::validation(
                "title, description and link are required",
            ));
        }

        let item = Item::new(title, description).with_link(link);
        Ok(match self.cover_image.as_deref().map(str::trim) {
            Some(cover) if !cover.is_empty() => item.with_cover(cover),
            _ => item,
        })
    }
}

/// Editor over a catalog file.
#[derive(Debug)]
pub struct CatalogEditor {
    path: PathBuf,
    catalog: Catalog,
}

impl CatalogEditor {
    /// Open a catalog file.
    ///
    /// A missing file, or one that is not JSON at all, starts from the
    /// default sections; the next save replaces it. A JSON document that
    /// is not a catalog is refused so its contents are never overwritten.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            log::info!(
                "Catalog file {} not found. Starting from default sections.",
                path.display()
            );
            return Ok(Self {
                path,
                catalog: Self::default_catalog(),
            });
        }

        let text = fs::read_to_string(&path)?;
        let catalog = match serde_json::from_str::<serde_json::Value>(&text) {
            Ok(document) => serde_json::from_value(document).map_err(|e| {
                AppError::editor(format!(
                    "{} is not a catalog document ({e}); refusing to edit it",
                    path.display()
                ))
            })?,
            Err(e) => {
                log::warn!(
                    "Catalog file {} is corrupt ({e}). Starting from default sections.",
                    path.display()
                );
                Self::default_catalog()
            }
        };
        Ok(Self { path, catalog })
    }

    fn default_catalog() -> Catalog {
        DEFAULT_SECTIONS
            .iter()
            .map(|s| (s.to_string(), Vec::new()))
            .collect()
    }

    /// Write the catalog back with four-space indentation.
    pub fn save(&self) -> Result<()> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.catalog.serialize(&mut serializer)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, buffer)?;
        log::info!("Saved catalog to {}", self.path.display());
        Ok(())
    }

    /// Section names, sorted.
    pub fn sections(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .catalog
            .section_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        names.sort();
        names
    }

    /// Add a section. Names are trimmed and lowercased.
    ///
    /// Returns the normalized name.
    pub fn add_section(&mut self, name: &str) -> Result<String> {
        let name = name.trim().to_lowercase();
        if name.is_empty() {
            return Err(AppError::validation("section name is empty"));
        }
        if !self.catalog.insert_section(name.clone()) {
            return Err(AppError::editor(format!("section '{name}' already exists")));
        }
        Ok(name)
    }

    pub fn items(&self, section: &str) -> Result<&[Item]> {
        if !self.catalog.contains(section) {
            return Err(AppError::not_found("section", section));
        }
        Ok(self.catalog.items(section))
    }

    pub fn add_item(&mut self, section: &str, draft: ItemDraft) -> Result<()> {
        let item = draft.validate()?;
        self.section_mut(section)?.push(item);
        Ok(())
    }

    pub fn edit_item(&mut self, section: &str, index: usize, draft: ItemDraft) -> Result<()> {
        let item = draft.validate()?;
        let slot = self
            .section_mut(section)?
            .get_mut(index)
            .ok_or_else(|| AppError::not_found("item", format!("{section}[{index}]")))?;
        *slot = item;
        Ok(())
    }

    pub fn remove_item(&mut self, section: &str, index: usize) -> Result<Item> {
        let items = self.section_mut(section)?;
        if index >= items.len() {
            return Err(AppError::not_found("item", format!("{section}[{index}]")));
        }
        Ok(items.remove(index))
    }

    fn section_mut(&mut self, section: &str) -> Result<&mut Vec<Item>> {
        self.catalog
            .items_mut(section)
            .ok_or_else(|| AppError::not_found("section", section))
    }
}
