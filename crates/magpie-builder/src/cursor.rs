//! The builder cursor: the single source of truth for "what element are we
//! building right now".
//!
//! [`BuilderCore`] owns the stack of open elements and the per-element lock.
//! An element is *locked* the moment content (text, trusted markup, or a
//! child element) is appended to it; from then on attribute and style writes
//! fail, because the string backend has already emitted the closing `>` of
//! the opening tag and cannot retroactively inject an attribute. The tree
//! backend could, but enforcing the same rule on both is what keeps a call
//! sequence portable across them.
//!
//! Per-element state machine:
//!
//! ```text
//! Unopened --start--> Open-Unlocked --content/lock--> Open-Locked --end--> Closed
//!                        |    ^                          |
//!                        +----+ attribute/style          +--> further content ok
//! ```
//!
//! All operations return `Result`; violations are programmer errors reported
//! synchronously at the misordered call, never deferred to `finish`.

use crate::error::BuilderError;
use crate::safe::SafeHtml;
use crate::sink::BuilderBackend;
use crate::tag::{ContentModel, TagKind};

/// Where an open element stands with its `style` attribute.
///
/// The string backend streams style declarations into one ` style="…"`
/// fragment and closes it when a plain attribute follows; a later style
/// write would have to open a second `style` attribute, which the tree
/// backend cannot mirror. The cursor therefore requires style writes to be
/// contiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StylePhase {
    /// No style declaration written yet.
    Untouched,
    /// Style declarations are being written; nothing has closed the run.
    Writing,
    /// A plain attribute ended the style run; further style writes fail.
    Done,
}

/// One open element on the cursor's stack.
#[derive(Debug, Clone, Copy)]
struct OpenElement {
    tag: TagKind,
    locked: bool,
    style: StylePhase,
}

/// The backend-agnostic builder state machine.
///
/// Strictly single-threaded and synchronous: one tree is built at a time,
/// and the core resets itself when [`BuilderCore::finish`] succeeds, so a
/// session can be reused for the next top-level build.
#[derive(Debug)]
pub struct BuilderCore<B: BuilderBackend> {
    backend: B,
    stack: Vec<OpenElement>,
}

impl<B: BuilderBackend> BuilderCore<B> {
    /// Create a cursor over the given backend.
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            stack: Vec::new(),
        }
    }

    /// How many elements are currently open.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Whether no element is open (a `finish` would succeed).
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.stack.is_empty()
    }

    /// The kind of the element currently being built, if any.
    #[must_use]
    pub fn current_tag(&self) -> Option<TagKind> {
        self.stack.last().map(|open| open.tag)
    }

    /// Lock the current element, sealing its opening tag in string mode.
    fn lock_and_seal(&mut self) {
        if let Some(current) = self.stack.last_mut()
            && !current.locked
        {
            current.locked = true;
            self.backend.seal_open_tag();
        }
    }

    /// Open a new element, making it current. Appending a child element is
    /// content for the enclosing element, so the parent locks here.
    ///
    /// # Errors
    /// [`BuilderError::ContentNotSupported`] if the current element's kind
    /// cannot contain child elements.
    pub fn start_element(&mut self, tag: TagKind) -> Result<(), BuilderError> {
        if let Some(parent) = self.stack.last()
            && !parent.tag.supports_children()
        {
            return Err(BuilderError::ContentNotSupported { tag: parent.tag });
        }
        self.lock_and_seal();
        self.backend.open_element(tag);
        self.stack.push(OpenElement {
            tag,
            locked: false,
            style: StylePhase::Untouched,
        });
        Ok(())
    }

    /// Set an attribute on the current element.
    ///
    /// # Errors
    /// [`BuilderError::NoElementOpen`] if nothing is open;
    /// [`BuilderError::AttributeAfterContent`] if content was already
    /// appended to the current element.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), BuilderError> {
        let _ = self.unlocked_current()?;
        if let Some(current) = self.stack.last_mut()
            && current.style == StylePhase::Writing
        {
            // The string backend closes the style fragment here.
            current.style = StylePhase::Done;
        }
        self.backend.set_attribute(name, value);
        Ok(())
    }

    /// Set the current element's `class` attribute.
    ///
    /// # Errors
    /// [`BuilderError::EmptyClassName`] for empty or whitespace-only input,
    /// plus the errors of [`BuilderCore::set_attribute`].
    pub fn set_class_name(&mut self, value: &str) -> Result<(), BuilderError> {
        if value.trim().is_empty() {
            return Err(BuilderError::EmptyClassName);
        }
        self.set_attribute("class", value)
    }

    /// Write one CSS declaration on the current element; `name` must already
    /// be in hyphenated CSS form.
    ///
    /// # Errors
    /// The conditions of [`BuilderCore::set_attribute`] (style writes are
    /// attribute-phase writes), plus [`BuilderError::StyleAfterAttribute`]
    /// if a plain attribute already ended this element's style run.
    pub fn set_style_property(&mut self, name: &str, value: &str) -> Result<(), BuilderError> {
        self.begin_style_write()?;
        self.backend.set_style_property(name, value);
        Ok(())
    }

    /// Append pre-validated CSS declarations to the current element.
    ///
    /// # Errors
    /// Same conditions as [`BuilderCore::set_style_property`].
    pub fn append_trusted_styles(&mut self, css: &str) -> Result<(), BuilderError> {
        self.begin_style_write()?;
        self.backend.append_trusted_styles(css);
        Ok(())
    }

    fn begin_style_write(&mut self) -> Result<(), BuilderError> {
        let current = self.unlocked_current()?;
        if current.style == StylePhase::Done {
            return Err(BuilderError::StyleAfterAttribute { tag: current.tag });
        }
        if let Some(current) = self.stack.last_mut() {
            current.style = StylePhase::Writing;
        }
        Ok(())
    }

    /// Append escaped text content, locking the current element.
    ///
    /// # Errors
    /// [`BuilderError::NoElementOpen`] if nothing is open;
    /// [`BuilderError::ContentNotSupported`] for void element kinds, and for
    /// text-only kinds that already received their single payload.
    pub fn append_text(&mut self, text: &str) -> Result<(), BuilderError> {
        let current = *self.stack.last().ok_or(BuilderError::NoElementOpen)?;
        match current.tag.content_model() {
            ContentModel::Void => Err(BuilderError::ContentNotSupported { tag: current.tag }),
            ContentModel::TextOnly if current.locked => {
                Err(BuilderError::ContentNotSupported { tag: current.tag })
            }
            ContentModel::TextOnly | ContentModel::Container => {
                self.lock_and_seal();
                self.backend.append_text(text);
                Ok(())
            }
        }
    }

    /// Append trusted markup verbatim, locking the current element.
    ///
    /// # Errors
    /// [`BuilderError::NoElementOpen`] if nothing is open;
    /// [`BuilderError::ContentNotSupported`] for void and text-only kinds
    /// (text-only elements accept plain text, never markup).
    pub fn append_trusted_html(&mut self, html: &SafeHtml) -> Result<(), BuilderError> {
        let current = *self.stack.last().ok_or(BuilderError::NoElementOpen)?;
        match current.tag.content_model() {
            ContentModel::Void | ContentModel::TextOnly => {
                Err(BuilderError::ContentNotSupported { tag: current.tag })
            }
            ContentModel::Container => {
                self.lock_and_seal();
                self.backend.append_trusted_html(html);
                Ok(())
            }
        }
    }

    /// Explicitly lock the current element without appending content.
    ///
    /// # Errors
    /// [`BuilderError::NoElementOpen`] if nothing is open.
    pub fn lock_current(&mut self) -> Result<(), BuilderError> {
        if self.stack.is_empty() {
            return Err(BuilderError::NoElementOpen);
        }
        self.lock_and_seal();
        Ok(())
    }

    /// Close the current element, returning the cursor to its parent.
    ///
    /// # Errors
    /// [`BuilderError::UnbalancedEnd`] if no element is open.
    pub fn end_element(&mut self) -> Result<(), BuilderError> {
        let closed = self.stack.pop().ok_or(BuilderError::UnbalancedEnd)?;
        if !closed.locked {
            // Empty element: the opening tag was never sealed.
            self.backend.seal_open_tag();
        }
        self.backend.close_element(closed.tag);
        Ok(())
    }

    /// Materialize the finished artifact and reset the session for reuse.
    ///
    /// # Errors
    /// [`BuilderError::UnfinishedBuild`] if any element is still open.
    pub fn finish(&mut self) -> Result<B::Output, BuilderError> {
        if !self.stack.is_empty() {
            return Err(BuilderError::UnfinishedBuild {
                open: self.stack.len(),
            });
        }
        Ok(self.backend.take_output())
    }

    fn unlocked_current(&self) -> Result<OpenElement, BuilderError> {
        let current = *self.stack.last().ok_or(BuilderError::NoElementOpen)?;
        if current.locked {
            return Err(BuilderError::AttributeAfterContent { tag: current.tag });
        }
        Ok(current)
    }
}

/// Unwrap a cursor result inside a fluent facade, panicking on misuse.
pub(crate) fn checked<T>(result: Result<T, BuilderError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("element builder misuse: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::StringBackend;

    fn core() -> BuilderCore<StringBackend> {
        BuilderCore::new(StringBackend::new())
    }

    #[test]
    fn attributes_then_content_then_close() {
        let mut core = core();
        core.start_element(TagKind::Div).unwrap();
        core.set_attribute("id", "x").unwrap();
        core.append_text("hi").unwrap();
        core.end_element().unwrap();
        assert_eq!(core.finish().unwrap(), r#"<div id="x">hi</div>"#);
    }

    #[test]
    fn attribute_after_content_is_rejected() {
        let mut core = core();
        core.start_element(TagKind::Div).unwrap();
        core.append_text("hello").unwrap();
        assert_eq!(
            core.set_attribute("id", "x"),
            Err(BuilderError::AttributeAfterContent { tag: TagKind::Div })
        );
        assert_eq!(
            core.set_style_property("color", "red"),
            Err(BuilderError::AttributeAfterContent { tag: TagKind::Div })
        );
    }

    #[test]
    fn content_after_lock_is_still_allowed_for_containers() {
        let mut core = core();
        core.start_element(TagKind::Div).unwrap();
        core.append_text("a").unwrap();
        core.append_text("b").unwrap();
        core.start_element(TagKind::Span).unwrap();
        core.end_element().unwrap();
        core.end_element().unwrap();
        assert_eq!(core.finish().unwrap(), "<div>ab<span></span></div>");
    }

    #[test]
    fn void_elements_reject_all_content() {
        let mut core = core();
        core.start_element(TagKind::Br).unwrap();
        assert_eq!(
            core.append_text("x"),
            Err(BuilderError::ContentNotSupported { tag: TagKind::Br })
        );
        assert_eq!(
            core.start_element(TagKind::Span),
            Err(BuilderError::ContentNotSupported { tag: TagKind::Br })
        );
        core.end_element().unwrap();
        assert_eq!(core.finish().unwrap(), "<br>");
    }

    #[test]
    fn text_only_elements_lock_on_their_payload() {
        let mut core = core();
        core.start_element(TagKind::Script).unwrap();
        core.set_attribute("type", "text/javascript").unwrap();
        core.append_text("var x = 1;").unwrap();
        assert_eq!(
            core.append_text("var y = 2;"),
            Err(BuilderError::ContentNotSupported { tag: TagKind::Script })
        );
        assert_eq!(
            core.set_attribute("defer", "defer"),
            Err(BuilderError::AttributeAfterContent { tag: TagKind::Script })
        );
        core.end_element().unwrap();
        assert_eq!(
            core.finish().unwrap(),
            r#"<script type="text/javascript">var x = 1;</script>"#
        );
    }

    #[test]
    fn text_only_elements_reject_markup() {
        let mut core = core();
        core.start_element(TagKind::Textarea).unwrap();
        assert_eq!(
            core.append_trusted_html(&SafeHtml::from_trusted_string("<b>no</b>".into())),
            Err(BuilderError::ContentNotSupported { tag: TagKind::Textarea })
        );
    }

    #[test]
    fn explicit_lock_blocks_attributes() {
        let mut core = core();
        core.start_element(TagKind::Span).unwrap();
        core.lock_current().unwrap();
        assert_eq!(
            core.set_attribute("id", "x"),
            Err(BuilderError::AttributeAfterContent { tag: TagKind::Span })
        );
        core.end_element().unwrap();
        assert_eq!(core.finish().unwrap(), "<span></span>");
    }

    #[test]
    fn stack_imbalance_is_detected() {
        let mut core = core();
        assert_eq!(core.end_element(), Err(BuilderError::UnbalancedEnd));

        core.start_element(TagKind::Div).unwrap();
        core.start_element(TagKind::Span).unwrap();
        assert_eq!(core.finish(), Err(BuilderError::UnfinishedBuild { open: 2 }));
        core.end_element().unwrap();
        core.end_element().unwrap();
        assert_eq!(core.end_element(), Err(BuilderError::UnbalancedEnd));
    }

    #[test]
    fn calls_with_nothing_open_are_rejected() {
        let mut core = core();
        assert_eq!(
            core.set_attribute("id", "x"),
            Err(BuilderError::NoElementOpen)
        );
        assert_eq!(core.append_text("x"), Err(BuilderError::NoElementOpen));
        assert_eq!(core.lock_current(), Err(BuilderError::NoElementOpen));
    }

    #[test]
    fn style_writes_must_be_contiguous() {
        let mut core = core();
        core.start_element(TagKind::Div).unwrap();
        core.set_style_property("color", "red").unwrap();
        core.set_attribute("id", "x").unwrap();
        assert_eq!(
            core.set_style_property("display", "block"),
            Err(BuilderError::StyleAfterAttribute { tag: TagKind::Div })
        );
        assert_eq!(
            core.append_trusted_styles("margin:0;"),
            Err(BuilderError::StyleAfterAttribute { tag: TagKind::Div })
        );
        core.end_element().unwrap();
        assert_eq!(
            core.finish().unwrap(),
            r#"<div style="color:red;" id="x"></div>"#
        );
    }

    #[test]
    fn attributes_before_styles_do_not_close_the_run() {
        let mut core = core();
        core.start_element(TagKind::Div).unwrap();
        core.set_attribute("id", "x").unwrap();
        core.set_style_property("color", "red").unwrap();
        core.set_style_property("display", "block").unwrap();
        core.end_element().unwrap();
        assert_eq!(
            core.finish().unwrap(),
            r#"<div id="x" style="color:red;display:block;"></div>"#
        );
    }

    #[test]
    fn empty_class_names_are_rejected() {
        let mut core = core();
        core.start_element(TagKind::Div).unwrap();
        assert_eq!(core.set_class_name(""), Err(BuilderError::EmptyClassName));
        assert_eq!(
            core.set_class_name("   "),
            Err(BuilderError::EmptyClassName)
        );
        core.set_class_name("wide").unwrap();
    }

    #[test]
    fn session_resets_after_finish() {
        let mut core = core();
        core.start_element(TagKind::Paragraph).unwrap();
        core.end_element().unwrap();
        assert_eq!(core.finish().unwrap(), "<p></p>");
        assert!(core.is_idle());

        core.start_element(TagKind::Span).unwrap();
        assert_eq!(core.current_tag(), Some(TagKind::Span));
        assert_eq!(core.depth(), 1);
        core.end_element().unwrap();
        assert_eq!(core.finish().unwrap(), "<span></span>");
    }
}
