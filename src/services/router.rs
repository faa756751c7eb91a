// src/services/router.rs

//! Fragment-based section routing and the navigation menu.

use unicode_segmentation::UnicodeSegmentation;

/// Prefix every section fragment starts with.
pub const FRAGMENT_PREFIX: &str = "#/";

/// Section that links to the standalone about page instead of a fragment.
pub const ABOUT_SECTION: &str = "sobre_nosotros";
const ABOUT_LABEL: &str = "Sobre nosotros";
const ABOUT_PAGE: &str = "sobre-nosotros.html";
const INDEX_PAGE: &str = "index.html";

/// Outcome of resolving a fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Selected section
    pub section: String,
    /// New fragment to publish when the requested one was not usable
    pub rewrite: Option<String>,
}

/// The canonical fragment for a section.
pub fn fragment_for(section: &str) -> String {
    format!("{FRAGMENT_PREFIX}{section}")
}

/// Candidate section name carried by a fragment.
///
/// Accepts `#/name`, `/name` and a bare `name`.
pub fn section_from_fragment(fragment: &str) -> &str {
    let rest = fragment.strip_prefix('#').unwrap_or(fragment);
    rest.strip_prefix('/').unwrap_or(rest)
}

/// Map a fragment to a section.
///
/// Unknown or missing fragments fall back to the first section in catalog
/// order (not sorted) and ask for the fragment to be rewritten. With no
/// sections there is nothing to select.
pub fn resolve<S: AsRef<str>>(fragment: &str, sections: &[S]) -> Option<Resolution> {
    let candidate = section_from_fragment(fragment);
    if sections.iter().any(|s| s.as_ref() == candidate) {
        return Some(Resolution {
            section: candidate.to_string(),
            rewrite: None,
        });
    }

    let first = sections.first()?.as_ref();
    Some(Resolution {
        section: first.to_string(),
        rewrite: Some(fragment_for(first)),
    })
}

/// A navigation menu link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub section: String,
    pub label: String,
    pub href: String,
    pub active: bool,
}

/// Build the navigation menu.
///
/// Sections are listed alphabetically with the about section moved to
/// the front. Links point at `index.html` when rendered from the about
/// page. `current` marks the entry whose href equals its fragment.
pub fn menu<S: AsRef<str>>(sections: &[S], on_about_page: bool, current: &str) -> Vec<MenuEntry> {
    let mut names: Vec<&str> = sections.iter().map(|s| s.as_ref()).collect();
    names.sort_unstable();
    if let Some(index) = names.iter().position(|&s| s == ABOUT_SECTION) {
        let about = names.remove(index);
        names.insert(0, about);
    }

    let current_href = fragment_for(current);
    names
        .into_iter()
        .map(|section| {
            let (label, href) = if section == ABOUT_SECTION {
                (ABOUT_LABEL.to_string(), ABOUT_PAGE.to_string())
            } else if on_about_page {
                (capitalize(section), format!("{INDEX_PAGE}{}", fragment_for(section)))
            } else {
                (capitalize(section), fragment_for(section))
            };
            let active = !current.is_empty() && href == current_href;
            MenuEntry {
                section: section.to_string(),
                label,
                href,
                active,
            }
        })
        .collect()
}

/// Uppercase the first grapheme, leave the rest alone.
fn capitalize(s: &str) -> String {
    let mut graphemes = s.graphemes(true);
    match graphemes.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), graphemes.as_str()),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_fragment_selects_section() {
        let resolved = resolve("#/libros", &["videos", "libros"]).unwrap();
        assert_eq!(resolved.section, "libros");
        assert_eq!(resolved.rewrite, None);
    }

    #[test]
    fn test_unknown_fragment_falls_back_to_first() {
        let resolved = resolve("#/unknown", &["videos", "libros"]).unwrap();
        assert_eq!(resolved.section, "videos");
        assert_eq!(resolved.rewrite.as_deref(), Some("#/videos"));
    }

    #[test]
    fn test_fallback_uses_catalog_order_not_sorted() {
        let resolved = resolve("", &["zines", "audio"]).unwrap();
        assert_eq!(resolved.section, "zines");
    }

    #[test]
    fn test_empty_sections_resolve_to_nothing() {
        let none: [&str; 0] = [];
        assert_eq!(resolve("#/videos", &none), None);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let sections = ["videos", "libros"];
        let first = resolve("#/nada", &sections).unwrap();
        let second = resolve(first.rewrite.as_deref().unwrap(), &sections).unwrap();
        assert_eq!(second.section, first.section);
        assert_eq!(second.rewrite, None);
    }

    #[test]
    fn test_round_trip_valid_fragment() {
        let sections = ["videos", "libros", "sobre_nosotros"];
        for fragment in ["#/videos", "#/libros", "#/sobre_nosotros"] {
            let resolved = resolve(fragment, &sections).unwrap();
            assert_eq!(fragment_for(&resolved.section), fragment);
        }
    }

    #[test]
    fn test_section_from_fragment_variants() {
        assert_eq!(section_from_fragment("#/videos"), "videos");
        assert_eq!(section_from_fragment("/videos"), "videos");
        assert_eq!(section_from_fragment("videos"), "videos");
        assert_eq!(section_from_fragment("#"), "");
    }

    #[test]
    fn test_menu_order_and_labels() {
        let entries = menu(&["videos", "sobre_nosotros", "libros"], false, "libros");
        let labels: Vec<_> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Sobre nosotros", "Libros", "Videos"]);
        assert_eq!(entries[0].href, "sobre-nosotros.html");
        assert_eq!(entries[1].href, "#/libros");
        assert!(entries[1].active);
        assert!(!entries[2].active);
    }

    #[test]
    fn test_menu_from_about_page() {
        let entries = menu(&["videos"], true, "");
        assert_eq!(entries[0].href, "index.html#/videos");
        assert!(!entries[0].active);
    }

    #[test]
    fn test_capitalize_graphemes() {
        assert_eq!(capitalize("ética"), "Ética");
        assert_eq!(capitalize(""), "");
    }
}
