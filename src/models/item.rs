// src/models/item.rs

//! Catalog data structures.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// A single catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Display title
    #[serde(rename = "titulo")]
    pub title: String,

    /// Free-form description
    #[serde(rename = "descripcion")]
    pub description: String,

    /// Cover image filename, resolved under the asset base path.
    /// Written as `null` when absent.
    #[serde(rename = "portada", default, deserialize_with = "blank_as_none")]
    pub cover_image: Option<String>,

    /// Outbound link to the resource
    #[serde(
        rename = "enlace",
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub link: Option<String>,
}

impl Item {
    /// Create an item with only the mandatory fields.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            cover_image: None,
            link: None,
        }
    }

    pub fn with_cover(mut self, cover: impl Into<String>) -> Self {
        self.cover_image = Some(cover.into());
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }
}

/// Treat `null`, a missing key and `""` alike.
pub(crate) fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// The whole catalog: section name to its items, in document order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Catalog {
    sections: IndexMap<String, Vec<Item>>,
}

impl Catalog {
    /// Section names in the catalog's own key order.
    pub fn section_names(&self) -> Vec<&str> {
        self.sections.keys().map(String::as_str).collect()
    }

    /// Items of a section, or an empty slice when the section is unknown.
    pub fn items(&self, section: &str) -> &[Item] {
        self.sections.get(section).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn items_mut(&mut self, section: &str) -> Option<&mut Vec<Item>> {
        self.sections.get_mut(section)
    }

    pub fn contains(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    /// Insert a section, keeping existing items if it is already present.
    ///
    /// Returns `true` if the section was newly created.
    pub fn insert_section(&mut self, section: impl Into<String>) -> bool {
        let section = section.into();
        if self.sections.contains_key(&section) {
            return false;
        }
        self.sections.insert(section, Vec::new());
        true
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total number of items across all sections.
    pub fn item_count(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Item])> {
        self.sections
            .iter()
            .map(|(name, items)| (name.as_str(), items.as_slice()))
    }
}

impl FromIterator<(String, Vec<Item>)> for Catalog {
    fn from_iter<T: IntoIterator<Item = (String, Vec<Item>)>>(iter: T) -> Self {
        Self {
            sections: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> serde_json::Result<Catalog> {
        serde_json::from_str(text)
    }

    #[test]
    fn test_parse_keeps_document_order() {
        let catalog =
            parse(r#"{"videos": [], "libros": [], "comics": []}"#).unwrap();
        assert_eq!(catalog.section_names(), vec!["videos", "libros", "comics"]);
    }

    #[test]
    fn test_optional_fields() {
        let catalog = parse(
            r#"{"libros": [
                {"titulo": "A", "descripcion": "a", "portada": null, "enlace": "https://x"},
                {"titulo": "B", "descripcion": "b", "portada": "", "enlace": ""},
                {"titulo": "C", "descripcion": "c", "portada": "c.png"}
            ]}"#,
        )
        .unwrap();
        let items = catalog.items("libros");
        assert_eq!(items[0].cover_image, None);
        assert_eq!(items[0].link.as_deref(), Some("https://x"));
        assert_eq!(items[1].cover_image, None);
        assert_eq!(items[1].link, None);
        assert_eq!(items[2].cover_image.as_deref(), Some("c.png"));
    }

    #[test]
    fn test_rejects_wrong_shape() {
        assert!(parse(r#"[{"titulo": "A"}]"#).is_err());
        assert!(parse(r#"{"libros": [{"titulo": "A"}]}"#).is_err());
    }

    #[test]
    fn test_unknown_section_is_empty() {
        let catalog = Catalog::default();
        assert!(catalog.items("nada").is_empty());
    }

    #[test]
    fn test_serialize_absent_cover_as_null() {
        let json = serde_json::to_string(&Item::new("A", "a")).unwrap();
        assert_eq!(json, r#"{"titulo":"A","descripcion":"a","portada":null}"#);
    }
}
