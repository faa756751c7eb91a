// src/render/html.rs

//! HTML presenter.
//!
//! Pages are askama templates under `templates/`; every value is escaped
//! by the template engine.

use askama::Template;

use super::{Card, CardKind, CoursesView, LibraryView, Link, Presenter};
use crate::error::Result;
use crate::services::MenuEntry;

const TITLE: &str = "Biblioteca sin Censura";

/// Card fields flattened for the templates.
struct CardRow<'a> {
    course: bool,
    has_image: bool,
    image_src: &'a str,
    image_alt: &'a str,
    lazy: bool,
    title: &'a str,
    description: &'a str,
    has_link: bool,
    href: &'a str,
    link_label: &'a str,
    has_aria_label: bool,
    aria_label: &'a str,
}

impl<'a> From<&'a Card> for CardRow<'a> {
    fn from(card: &'a Card) -> Self {
        let image = card.image.as_ref();
        let link = card.link.as_ref();
        let aria_label = link.and_then(|l| l.aria_label.as_deref());
        Self {
            course: card.kind == CardKind::Course,
            has_image: image.is_some(),
            image_src: image.map_or("", |i| i.src.as_str()),
            image_alt: image.map_or("", |i| i.alt.as_str()),
            lazy: image.is_some_and(|i| i.lazy),
            title: &card.title,
            description: &card.description,
            has_link: link.is_some(),
            href: link.map_or("", |l| l.href.as_str()),
            link_label: link.map_or("", |l| l.label.as_str()),
            has_aria_label: aria_label.is_some(),
            aria_label: aria_label.unwrap_or(""),
        }
    }
}

/// Library page.
#[derive(Template)]
#[template(path = "library.html")]
struct LibraryTemplate<'a> {
    title: &'a str,
    target: &'a str,
    rel: &'a str,
    menu: &'a [MenuEntry],
    has_counter: bool,
    counter: &'a str,
    cards: Vec<CardRow<'a>>,
    has_notice: bool,
    notice_class: &'a str,
    notice_text: &'a str,
}

/// Course carousel page.
#[derive(Template)]
#[template(path = "courses.html")]
struct CoursesTemplate<'a> {
    title: &'a str,
    target: &'a str,
    rel: &'a str,
    query: &'a str,
    offset: f64,
    prev_disabled: bool,
    next_disabled: bool,
    cards: Vec<CardRow<'a>>,
}

/// Renders pages as standalone HTML documents.
#[derive(Debug, Clone, Default)]
pub struct HtmlPresenter;

impl HtmlPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Presenter for HtmlPresenter {
    fn library(&self, view: &LibraryView) -> Result<String> {
        let notice = view.content.notice();
        let template = LibraryTemplate {
            title: TITLE,
            target: Link::TARGET,
            rel: Link::REL,
            menu: &view.menu,
            has_counter: view.counter.is_some(),
            counter: view.counter.as_deref().unwrap_or(""),
            cards: view.content.cards().iter().map(CardRow::from).collect(),
            has_notice: notice.is_some(),
            notice_class: notice.map_or("", |n| n.kind.class()),
            notice_text: notice.map_or("", |n| n.text.as_str()),
        };
        Ok(template.render()?)
    }

    fn courses(&self, view: &CoursesView) -> Result<String> {
        let template = CoursesTemplate {
            title: TITLE,
            target: Link::TARGET,
            rel: Link::REL,
            query: &view.query,
            offset: view.offset.unwrap_or(0.0),
            prev_disabled: view.buttons.is_some_and(|b| b.prev_disabled),
            next_disabled: view.buttons.is_some_and(|b| b.next_disabled),
            cards: view.cards.iter().map(CardRow::from).collect(),
        };
        Ok(template.render()?)
    }
}
