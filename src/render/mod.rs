// src/render/mod.rs

//! View-model for rendered pages and the presenters that draw it.
//!
//! The pipeline produces plain data (`Rendered`, `LibraryView`,
//! `CoursesView`); a `Presenter` turns that data into output. Rendering is
//! always a full replacement of the previous content.

mod html;
mod text;

pub use html::HtmlPresenter;
pub use text::TextPresenter;

use crate::error::Result;
use crate::models::{Course, Item, RenderConfig};
use crate::services::{Buttons, MenuEntry};
use crate::utils::asset_path;

/// Image block of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub src: String,
    pub alt: String,
    pub lazy: bool,
}

/// Outbound link. Always opens in a new browsing context without a
/// back-reference to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub label: String,
    pub aria_label: Option<String>,
}

impl Link {
    pub const TARGET: &'static str = "_blank";
    pub const REL: &'static str = "noopener noreferrer";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    /// Catalog item card
    Resource,
    /// Carousel course card, with a report button
    Course,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub kind: CardKind,
    pub image: Option<Image>,
    pub title: String,
    pub description: String,
    pub link: Option<Link>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Empty,
    Error,
}

impl NoticeKind {
    /// Style class of the notice; empty and error states never share one.
    pub fn class(&self) -> &'static str {
        match self {
            NoticeKind::Empty => "message empty",
            NoticeKind::Error => "message error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// Content region: cards, or a single notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Cards(Vec<Card>),
    Notice(Notice),
}

impl Rendered {
    /// Replace the content region with an error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Rendered::Notice(Notice {
            kind: NoticeKind::Error,
            text: message.into(),
        })
    }

    pub fn cards(&self) -> &[Card] {
        match self {
            Rendered::Cards(cards) => cards,
            Rendered::Notice(_) => &[],
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        match self {
            Rendered::Notice(notice) => Some(notice),
            Rendered::Cards(_) => None,
        }
    }
}

/// Builds cards from items and courses.
#[derive(Debug, Clone)]
pub struct CardRenderer {
    config: RenderConfig,
}

impl CardRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a section view. An empty view becomes the empty-state notice.
    pub fn render(&self, view: &[Item]) -> Rendered {
        if view.is_empty() {
            return Rendered::Notice(Notice {
                kind: NoticeKind::Empty,
                text: self.config.empty_message.clone(),
            });
        }
        Rendered::Cards(view.iter().map(|item| self.item_card(item)).collect())
    }

    fn item_card(&self, item: &Item) -> Card {
        Card {
            kind: CardKind::Resource,
            image: item.cover_image.as_ref().map(|cover| Image {
                src: asset_path(&self.config.asset_base, cover),
                alt: format!("Portada de {}", item.title),
                lazy: false,
            }),
            title: item.title.clone(),
            description: item.description.clone(),
            link: item.link.as_ref().map(|href| Link {
                href: href.clone(),
                label: self.config.link_label.clone(),
                aria_label: None,
            }),
        }
    }

    /// Render the carousel strip. An empty strip stays empty.
    pub fn render_courses(&self, courses: &[Course]) -> Vec<Card> {
        courses
            .iter()
            .map(|course| Card {
                kind: CardKind::Course,
                image: Some(Image {
                    src: course.image.clone(),
                    alt: course.title.clone(),
                    lazy: true,
                }),
                title: course.title.clone(),
                description: course.description.clone(),
                link: Some(Link {
                    href: course.link.clone(),
                    label: "Acceder".to_string(),
                    aria_label: Some(format!("Acceder al curso {}", course.title)),
                }),
            })
            .collect()
    }

    pub fn counter(&self, count: usize) -> String {
        self.config.counter(count)
    }
}

/// Everything the library page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryView {
    pub menu: Vec<MenuEntry>,
    /// Fragment the address bar should show
    pub fragment: Option<String>,
    /// Item counter; absent when the page failed to load
    pub counter: Option<String>,
    pub content: Rendered,
}

/// Everything the course carousel page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct CoursesView {
    pub query: String,
    pub cards: Vec<Card>,
    pub buttons: Option<Buttons>,
    pub offset: Option<f64>,
}

/// Turns page view-models into output.
pub trait Presenter {
    fn library(&self, view: &LibraryView) -> Result<String>;
    fn courses(&self, view: &CoursesView) -> Result<String>;
}
