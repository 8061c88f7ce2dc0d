//! Shared utilities for the Magpie workspace.
//!
//! Provides the HTML escaping primitives used by both the string-rendering
//! builder backend and the DOM serializer, plus deduplicated diagnostic
//! warnings for misuse that is tolerated in optimized builds.

pub mod escape;
pub mod warning;
