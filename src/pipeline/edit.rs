// src/pipeline/edit.rs

use std::fmt::Write;
use std::path::Path;

use crate::error::Result;
use crate::services::{CatalogEditor, ItemDraft};

/// One content editor action.
#[derive(Debug, Clone)]
pub enum EditAction {
    ListSections,
    AddSection { name: String },
    ListItems { section: String },
    AddItem { section: String, draft: ItemDraft },
    EditItem { section: String, index: usize, draft: ItemDraft },
    RemoveItem { section: String, index: usize },
}

impl EditAction {
    fn mutates(&self) -> bool {
        !matches!(self, EditAction::ListSections | EditAction::ListItems { .. })
    }
}

/// Apply an action to the catalog file and return a listing to show.
///
/// Mutating actions save the file.
pub fn run_edit(path: &Path, action: EditAction) -> Result<String> {
    let mut editor = CatalogEditor::open(path)?;
    let mutates = action.mutates();
    let mut out = String::new();

    match action {
        EditAction::ListSections => {
            for section in editor.sections() {
                let count = editor.items(&section)?.len();
                let _ = writeln!(out, "{section} ({count})");
            }
        }
        EditAction::AddSection { name } => {
            let name = editor.add_section(&name)?;
            log::info!("Added section '{name}'");
        }
        EditAction::ListItems { section } => {
            for (index, item) in editor.items(&section)?.iter().enumerate() {
                let _ = writeln!(
                    out,
                    "{index}\t{}\t{}\t{}\t{}",
                    item.title,
                    item.description,
                    item.link.as_deref().unwrap_or(""),
                    item.cover_image.as_deref().unwrap_or("")
                );
            }
        }
        EditAction::AddItem { section, draft } => {
            editor.add_item(&section, draft)?;
            log::info!("Added item to '{section}'");
        }
        EditAction::EditItem {
            section,
            index,
            draft,
        } => {
            editor.edit_item(&section, index, draft)?;
            log::info!("Updated item {index} in '{section}'");
        }
        EditAction::RemoveItem { section, index } => {
            let removed = editor.remove_item(&section, index)?;
            log::info!("Removed '{}' from '{section}'", removed.title);
        }
    }

    if mutates {
        editor.save()?;
    }
    Ok(out)
}
