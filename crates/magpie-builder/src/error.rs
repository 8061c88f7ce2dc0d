//! Builder misuse errors.
//!
//! Every variant here is a programmer error: markup was built in an invalid
//! order. Nothing is recoverable or retryable; the fluent facades turn these
//! into panics at the violating call site, while [`crate::cursor::BuilderCore`]
//! surfaces them as `Result`s for callers who prefer explicit handling.

use thiserror::Error;

use crate::tag::TagKind;

/// An invalid builder call sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuilderError {
    /// An attribute or style write arrived after content was appended.
    ///
    /// The string backend has already emitted `>` for this element, so the
    /// attribute can no longer be injected into the opening tag. Attributes
    /// must always precede content.
    #[error("attribute written after content on <{tag}>; attributes must precede content")]
    AttributeAfterContent {
        /// The element kind that was already locked.
        tag: TagKind,
    },

    /// Content was appended to an element kind that cannot hold it
    /// (a void element, or a second payload on a text-only element).
    #[error("<{tag}> does not support this content")]
    ContentNotSupported {
        /// The element kind that rejected the content.
        tag: TagKind,
    },

    /// A style write arrived after a plain attribute had already ended the
    /// element's style run.
    ///
    /// The string backend streams style declarations into a single
    /// ` style="…"` fragment and closes it when a non-style attribute
    /// follows; reopening it would emit a second `style` attribute that the
    /// live backend cannot mirror. Style writes must be contiguous.
    #[error("style written after another attribute on <{tag}>; style writes must be contiguous")]
    StyleAfterAttribute {
        /// The element kind whose style run was already closed.
        tag: TagKind,
    },

    /// An attribute, style, or content call arrived with no element open.
    #[error("no element is open")]
    NoElementOpen,

    /// `end` was called with no unterminated start call to match it.
    #[error("end called with no open element")]
    UnbalancedEnd,

    /// `finish` was called while elements were still open.
    #[error("finish called with {open} element(s) still open")]
    UnfinishedBuild {
        /// How many elements were still open.
        open: usize,
    },

    /// An empty or whitespace-only class name was passed to a class mutator.
    #[error("class names must be non-empty and non-whitespace")]
    EmptyClassName,
}
