//! Trusted-content wrapper types.
//!
//! These newtypes mark a string as already validated for a given sink
//! context. The builder emits their contents verbatim, with no further
//! escaping: whoever constructs one from a trusted string is vouching for
//! its safety. The escaping constructors ([`SafeHtml::from_text`]) are the
//! safe way in when the content is not already markup.

use magpie_common::escape::escape_text;

/// Markup that is safe to emit into element content without escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeHtml(String);

impl SafeHtml {
    /// Wrap markup the caller vouches for. Emitted verbatim.
    #[must_use]
    pub const fn from_trusted_string(html: String) -> Self {
        Self(html)
    }

    /// Build trusted markup from plain text by escaping it.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self(escape_text(text))
    }

    /// The wrapped markup.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Schemes allowed through [`SafeUri::sanitize`].
const SAFE_SCHEMES: [&str; 4] = ["http", "https", "ftp", "mailto"];

/// A URI that is safe to emit as an attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeUri(String);

impl SafeUri {
    /// Wrap a URI the caller vouches for.
    #[must_use]
    pub const fn from_trusted_string(uri: String) -> Self {
        Self(uri)
    }

    /// Validate a URI's scheme, replacing anything suspect with `#`.
    ///
    /// Relative URIs and the schemes in [`SAFE_SCHEMES`] pass through;
    /// everything else (`javascript:`, `data:`, ...) is neutralized.
    #[must_use]
    pub fn sanitize(uri: &str) -> Self {
        // Only a colon before the first `/`, `?`, or `#` introduces a scheme.
        let prefix = uri.split(['/', '?', '#']).next().unwrap_or("");
        let safe = match prefix.split_once(':') {
            None => true,
            Some((scheme, _)) => SAFE_SCHEMES.contains(&scheme.to_ascii_lowercase().as_str()),
        };
        if safe {
            Self(uri.to_string())
        } else {
            Self("#".to_string())
        }
    }

    /// The wrapped URI.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SafeUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// CSS declarations (`name:value;` pairs) safe to emit into a style
/// attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeStyles(String);

impl SafeStyles {
    /// Wrap declarations the caller vouches for.
    ///
    /// # Panics
    /// In debug builds, panics if the declarations do not end with `;`,
    /// since later properties would otherwise merge into the last value.
    #[must_use]
    pub fn from_trusted_string(styles: String) -> Self {
        debug_assert!(
            styles.is_empty() || styles.ends_with(';'),
            "trusted styles must end with ';': {styles}"
        );
        Self(styles)
    }

    /// The wrapped declarations.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_text_escapes_markup() {
        assert_eq!(SafeHtml::from_text("1 < 2 & 3").as_str(), "1 &lt; 2 &amp; 3");
    }

    #[test]
    fn from_trusted_string_is_verbatim() {
        let html = SafeHtml::from_trusted_string("<b>&</b>".to_string());
        assert_eq!(html.as_str(), "<b>&</b>");
    }

    #[test]
    fn sanitize_allows_safe_schemes_and_relative_uris() {
        assert_eq!(SafeUri::sanitize("https://example.com").as_str(), "https://example.com");
        assert_eq!(SafeUri::sanitize("HTTP://example.com").as_str(), "HTTP://example.com");
        assert_eq!(SafeUri::sanitize("mailto:a@b.c").as_str(), "mailto:a@b.c");
        assert_eq!(SafeUri::sanitize("/docs/index.html").as_str(), "/docs/index.html");
        assert_eq!(SafeUri::sanitize("docs/a:b.html").as_str(), "docs/a:b.html");
    }

    #[test]
    fn sanitize_neutralizes_unsafe_schemes() {
        assert_eq!(SafeUri::sanitize("javascript:alert(1)").as_str(), "#");
        assert_eq!(SafeUri::sanitize("data:text/html,x").as_str(), "#");
    }
}
