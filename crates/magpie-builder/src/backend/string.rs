//! The string backend: builds the HTML serialization directly.
//!
//! Usable anywhere, including servers with no DOM at all. The buffer always
//! holds a prefix of the final markup; an element's opening tag stays open
//! (`<div id="x"` with no `>`) until the cursor locks the element, which is
//! why attributes cannot follow content.

use magpie_common::escape::{push_escaped_attribute, push_escaped_text};

use crate::safe::SafeHtml;
use crate::sink::{AttributeSink, BuilderBackend, ContentSink, StyleSink};
use crate::tag::TagKind;

/// Backend that accumulates an escaped HTML string.
#[derive(Debug, Default)]
pub struct StringBackend {
    out: String,
    /// Whether a ` style="` fragment is open and awaiting its closing quote.
    style_open: bool,
}

impl StringBackend {
    /// Create an empty string backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn close_style_if_open(&mut self) {
        if self.style_open {
            self.out.push('"');
            self.style_open = false;
        }
    }

    fn open_style_if_closed(&mut self) {
        if !self.style_open {
            self.out.push_str(" style=\"");
            self.style_open = true;
        }
    }
}

impl AttributeSink for StringBackend {
    fn set_attribute(&mut self, name: &str, value: &str) {
        self.close_style_if_open();
        self.out.push(' ');
        self.out.push_str(name);
        self.out.push_str("=\"");
        push_escaped_attribute(&mut self.out, value);
        self.out.push('"');
    }
}

impl StyleSink for StringBackend {
    fn set_style_property(&mut self, name: &str, value: &str) {
        self.open_style_if_closed();
        self.out.push_str(name);
        self.out.push(':');
        push_escaped_attribute(&mut self.out, value);
        self.out.push(';');
    }

    fn append_trusted_styles(&mut self, css: &str) {
        self.open_style_if_closed();
        // Trusted as CSS, but the attribute context still needs encoding.
        push_escaped_attribute(&mut self.out, css);
    }
}

impl ContentSink for StringBackend {
    fn append_text(&mut self, text: &str) {
        push_escaped_text(&mut self.out, text);
    }

    fn append_trusted_html(&mut self, html: &SafeHtml) {
        self.out.push_str(html.as_str());
    }
}

impl BuilderBackend for StringBackend {
    type Output = String;

    fn open_element(&mut self, tag: TagKind) {
        self.out.push('<');
        self.out.push_str(tag.tag_name());
    }

    fn seal_open_tag(&mut self) {
        self.close_style_if_open();
        self.out.push('>');
    }

    fn close_element(&mut self, tag: TagKind) {
        // Void elements serialize as a bare start tag.
        if !tag.is_void() {
            self.out.push_str("</");
            self.out.push_str(tag.tag_name());
            self.out.push('>');
        }
    }

    fn take_output(&mut self) -> String {
        self.style_open = false;
        std::mem::take(&mut self.out)
    }
}
