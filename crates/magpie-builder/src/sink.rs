//! The sink traits: the only places the two backends diverge.
//!
//! [`crate::cursor::BuilderCore`] owns all ordering and content-model logic;
//! by the time a sink method runs, the call is known to be valid. Keeping
//! the traits this narrow is what lets a single cursor implementation drive
//! both a real DOM tree and a string buffer.

use crate::safe::SafeHtml;
use crate::tag::TagKind;

/// Write an attribute on the element currently being built.
///
/// The cursor guarantees the element's opening tag is still open
/// (no content has been appended) when this is called.
pub trait AttributeSink {
    /// Set `name` to `value` on the current element. The tree backend
    /// replaces a replayed name in place; the string backend has already
    /// streamed the earlier fragment and appends a second one, a known
    /// serialization quirk between the strategies.
    fn set_attribute(&mut self, name: &str, value: &str);
}

/// Write CSS declarations on the element currently being built.
///
/// Both implementations flatten declarations into the element's `style`
/// attribute as `name:value;` fragments so serialized output is identical
/// across backends.
pub trait StyleSink {
    /// Append one declaration; `name` is already in hyphenated CSS form.
    fn set_style_property(&mut self, name: &str, value: &str);

    /// Append pre-validated declarations. The CSS is trusted as CSS, but it
    /// still receives attribute-context encoding where the backend needs it.
    fn append_trusted_styles(&mut self, css: &str);
}

/// Append child content to the element currently being built.
pub trait ContentSink {
    /// Append plain text. Escaped by the string backend; stored as a text
    /// node (and escaped at serialization) by the tree backend.
    fn append_text(&mut self, text: &str);

    /// Append trusted markup verbatim. Never re-escaped; the trust boundary
    /// is [`SafeHtml`]'s constructors.
    fn append_trusted_html(&mut self, html: &SafeHtml);
}

/// A complete backend: the sinks plus the structural element operations.
pub trait BuilderBackend: AttributeSink + StyleSink + ContentSink {
    /// What `finish` materializes: a string, or a built tree.
    type Output;

    /// Begin a new element as a child of the current one (or as the root).
    fn open_element(&mut self, tag: TagKind);

    /// Seal the current element's opening tag: the string backend emits `>`
    /// here; the tree backend has nothing to do. Called exactly once per
    /// element, when it locks or closes.
    fn seal_open_tag(&mut self);

    /// Close the current element and return to its parent.
    fn close_element(&mut self, tag: TagKind);

    /// Take the finished artifact, resetting the backend for reuse.
    fn take_output(&mut self) -> Self::Output;
}
