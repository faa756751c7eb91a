// src/render/text.rs

//! Plain-text presenter for terminals.

use std::fmt::Write;

use super::{Card, CoursesView, LibraryView, Presenter, Rendered};
use crate::error::Result;

const RULE_WIDTH: usize = 60;

/// Renders pages as plain text.
#[derive(Debug, Clone, Default)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    fn card(out: &mut String, card: &Card) -> std::fmt::Result {
        writeln!(out, "{}", card.title)?;
        if !card.description.is_empty() {
            writeln!(out, "    {}", card.description)?;
        }
        if let Some(image) = &card.image {
            writeln!(out, "    [img] {}", image.src)?;
        }
        if let Some(link) = &card.link {
            writeln!(out, "    {}: {}", link.label, link.href)?;
        }
        writeln!(out)
    }
}

impl Presenter for TextPresenter {
    fn library(&self, view: &LibraryView) -> Result<String> {
        let mut out = String::new();

        let menu: Vec<String> = view
            .menu
            .iter()
            .map(|entry| {
                if entry.active {
                    format!("*{}*", entry.label)
                } else {
                    entry.label.clone()
                }
            })
            .collect();
        if !menu.is_empty() {
            writeln!(out, "{}", menu.join(" | "))?;
        }

        let status: Vec<&str> = [view.fragment.as_deref(), view.counter.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if !status.is_empty() {
            writeln!(out, "{}", status.join("  "))?;
        }
        writeln!(out, "{}", "─".repeat(RULE_WIDTH))?;

        match &view.content {
            Rendered::Cards(cards) => {
                for card in cards {
                    Self::card(&mut out, card)?;
                }
            }
            Rendered::Notice(notice) => {
                writeln!(out, "[{}] {}", notice.kind.class(), notice.text)?;
            }
        }
        Ok(out)
    }

    fn courses(&self, view: &CoursesView) -> Result<String> {
        let mut out = String::new();
        if !view.query.trim().is_empty() {
            writeln!(out, "Búsqueda: {}", view.query)?;
        }
        writeln!(out, "Cursos: {}", view.cards.len())?;
        if let Some(buttons) = view.buttons {
            writeln!(
                out,
                "[{}] anterior  [{}] siguiente",
                if buttons.prev_disabled { " " } else { "<" },
                if buttons.next_disabled { " " } else { ">" }
            )?;
        }
        writeln!(out, "{}", "─".repeat(RULE_WIDTH))?;
        for card in &view.cards {
            Self::card(&mut out, card)?;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Item, RenderConfig};
    use crate::render::CardRenderer;
    use crate::services::router;

    #[test]
    fn test_library_text() {
        let renderer = CardRenderer::new(RenderConfig::default());
        let view = LibraryView {
            menu: router::menu(&["videos", "libros"], false, "videos"),
            fragment: Some("#/videos".into()),
            counter: Some("Elementos: 1".into()),
            content: renderer.render(&[Item::new("Alpha", "intro").with_link("https://a")]),
        };
        let text = TextPresenter::new().library(&view).unwrap();
        assert!(text.starts_with("Libros | *Videos*\n"));
        assert!(text.contains("#/videos  Elementos: 1"));
        assert!(text.contains("Alpha\n    intro\n    Ver recurso: https://a\n"));
    }

    #[test]
    fn test_empty_notice_text() {
        let renderer = CardRenderer::new(RenderConfig::default());
        let view = LibraryView {
            menu: Vec::new(),
            fragment: None,
            counter: Some("Elementos: 0".into()),
            content: renderer.render(&[]),
        };
        let text = TextPresenter::new().library(&view).unwrap();
        assert!(text.contains("[message empty] No hay elementos en esta sección."));
    }
}
