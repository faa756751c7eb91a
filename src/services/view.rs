// src/services/view.rs

//! Sort and filter engine for section views.
//!
//! A view is built in two strict steps: sort a copy of the section by
//! case-folded title, then narrow the sorted sequence with the query.
//! Callers that keep the sorted base around can re-run only the filter
//! when nothing but the query changed.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;
use crate::models::Item;

/// Title sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            other => Err(AppError::validation(format!(
                "Unknown sort order '{other}' (expected asc or desc)"
            ))),
        }
    }
}

/// Compare two strings the way a reader expects titles to be ordered.
///
/// Case is ignored. Accented Latin letters sort with their base letter;
/// only when the folded forms are equal does the accent decide.
pub fn collate(a: &str, b: &str) -> Ordering {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.chars()
        .map(fold_accent)
        .cmp(b.chars().map(fold_accent))
        .then_with(|| a.cmp(&b))
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' | 'ā' => 'a',
        'é' | 'è' | 'ê' | 'ë' | 'ē' => 'e',
        'í' | 'ì' | 'î' | 'ï' | 'ī' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' | 'ō' => 'o',
        'ú' | 'ù' | 'û' | 'ü' | 'ū' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        'ý' | 'ÿ' => 'y',
        _ => c,
    }
}

/// Sort a copy of `items` by title. Equal titles keep their relative order.
pub fn sort_items(items: &[Item], order: SortOrder) -> Vec<Item> {
    let mut sorted = items.to_vec();
    match order {
        SortOrder::Ascending => sorted.sort_by(|a, b| collate(&a.title, &b.title)),
        SortOrder::Descending => sorted.sort_by(|a, b| collate(&b.title, &a.title)),
    }
    sorted
}

/// Whether an item matches an already lowercased query.
fn matches(item: &Item, needle: &str) -> bool {
    item.title.to_lowercase().contains(needle) || item.description.to_lowercase().contains(needle)
}

/// Keep the items whose title or description contains `query`.
///
/// Matching is case-insensitive and an empty query keeps everything.
pub fn filter_items(sorted: &[Item], query: &str) -> Vec<Item> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return sorted.to_vec();
    }
    sorted
        .iter()
        .filter(|item| matches(item, &needle))
        .cloned()
        .collect()
}

/// Sort then filter.
pub fn view(items: &[Item], order: SortOrder, query: &str) -> Vec<Item> {
    filter_items(&sort_items(items, order), query)
}
