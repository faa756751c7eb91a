// src/models/course.rs

//! Course data structure for the carousel page.

use serde::{Deserialize, Serialize};

/// A course shown in the carousel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Course {
    #[serde(rename = "titulo", default)]
    pub title: String,

    #[serde(rename = "descripcion", default)]
    pub description: String,

    /// Image URL, used as-is
    #[serde(rename = "imagen", default)]
    pub image: String,

    #[serde(rename = "enlace", default)]
    pub link: String,

    /// Extra search terms
    #[serde(default, deserialize_with = "null_as_empty")]
    pub keywords: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Course {
    /// Case-insensitive match against the title or any keyword.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self
                .keywords
                .iter()
                .any(|k| k.to_lowercase().contains(needle))
    }
}
