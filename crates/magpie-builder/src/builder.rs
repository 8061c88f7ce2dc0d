//! Builder sessions.
//!
//! A [`Builder`] owns one backend and one cursor, and is reusable: after
//! [`Builder::finish`] drains the output, the same session starts the next
//! top-level element from a clean stack.

use crate::backend::{StringBackend, TreeBackend};
use crate::cursor::BuilderCore;
use crate::error::BuilderError;
use crate::sink::BuilderBackend;

/// A builder session producing markup as a string.
pub type HtmlBuilder = Builder<StringBackend>;

/// A builder session producing a document tree.
pub type DomBuilder = Builder<TreeBackend>;

/// A reusable element-building session over one backend.
#[derive(Debug)]
pub struct Builder<B: BuilderBackend> {
    core: BuilderCore<B>,
}

impl<B: BuilderBackend + Default> Default for Builder<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: BuilderBackend> Builder<B> {
    /// Create a session with a default backend.
    #[must_use]
    pub fn new() -> Self
    where
        B: Default,
    {
        Self::with_backend(B::default())
    }

    /// Create a session over an existing backend.
    #[must_use]
    pub fn with_backend(backend: B) -> Self {
        Self {
            core: BuilderCore::new(backend),
        }
    }

    /// Access the shared cursor. The `start_*` facade methods go through
    /// here.
    pub fn core_mut(&mut self) -> &mut BuilderCore<B> {
        &mut self.core
    }

    /// Number of elements currently open.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.core.depth()
    }

    /// Whether no element is currently open.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.core.is_idle()
    }

    /// Drain the finished output, leaving the session ready for reuse.
    ///
    /// # Errors
    /// Returns [`BuilderError::UnfinishedBuild`] if any element is still
    /// open.
    pub fn finish(&mut self) -> Result<B::Output, BuilderError> {
        self.core.finish()
    }
}
