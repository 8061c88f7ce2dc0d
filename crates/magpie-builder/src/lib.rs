//! Fluent HTML element builders over interchangeable backends.
//!
//! A [`Builder`] session hands out per-tag facades whose methods chain:
//! attributes first, then content, with the ordering enforced so that both
//! backends can stream. [`HtmlBuilder`] concatenates markup directly into a
//! string; [`DomBuilder`] assembles a [`magpie_dom::DomTree`]. The same
//! call sequence produces character-identical markup on either backend.
//!
//! ```
//! use magpie_builder::{ContainerElement, HtmlBuilder};
//!
//! let mut builder = HtmlBuilder::new();
//! let div = builder.start_div().id("greeting");
//! let _ = div.start_span().text("Hello").end().end();
//! let html = builder.finish().expect("element left open");
//! assert_eq!(html, "<div id=\"greeting\"><span>Hello</span></div>");
//! ```
//!
//! Text and attribute values are escaped on the way in; only
//! [`SafeHtml`] and [`SafeStyles`] payloads pass through verbatim, and
//! [`SafeUri`] sanitizes URI schemes at construction.

pub mod backend;
pub mod builder;
pub mod cursor;
pub mod element;
pub mod error;
pub mod safe;
pub mod sink;
pub mod styles;
pub mod tag;

pub use backend::{BuiltElement, StringBackend, TreeBackend};
pub use builder::{Builder, DomBuilder, HtmlBuilder};
pub use cursor::BuilderCore;
pub use element::{AnyElementBuilder, ContainerElement};
pub use error::BuilderError;
pub use safe::{SafeHtml, SafeStyles, SafeUri};
pub use sink::{AttributeSink, BuilderBackend, ContentSink, StyleSink};
pub use styles::{StyleTarget, StylesBuilder, Unit};
pub use tag::{ContentModel, TagKind};
