//! The tag registry: supported element kinds and their content models.
//!
//! [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#elements-2)
//! classifies elements by the kinds of content they may contain. The builder
//! only needs a coarse split: void elements take no content at all, raw-text
//! elements take a single text payload, and everything else is an ordinary
//! container.

use strum_macros::{Display, EnumIter, IntoStaticStr};

/// The coarse content classification of an element kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentModel {
    /// Accepts attributes, text, trusted markup, and child elements.
    Container,
    /// [§ 13.1.2 Void elements](https://html.spec.whatwg.org/multipage/syntax.html#void-elements)
    /// Accepts only attributes; no content of any kind, no end tag.
    Void,
    /// Accepts a single text payload which locks the element
    /// (script, style, textarea, title, option).
    TextOnly,
}

/// Every element kind the builder can construct.
///
/// The `Display`/`IntoStaticStr` derivations yield the lowercase tag name,
/// so `TagKind::Div.to_string() == "div"` and
/// `TagKind::Anchor.tag_name() == "a"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum TagKind {
    /// The `a` element.
    #[strum(serialize = "a")]
    Anchor,
    /// The `abbr` element.
    Abbr,
    /// The `area` element.
    Area,
    /// The `audio` element.
    Audio,
    /// The `b` element.
    #[strum(serialize = "b")]
    Bold,
    /// The `base` element.
    Base,
    /// The `blockquote` element.
    Blockquote,
    /// The `body` element.
    Body,
    /// The `br` element.
    Br,
    /// The `button` element.
    Button,
    /// The `canvas` element.
    Canvas,
    /// The `caption` element.
    Caption,
    /// The `cite` element.
    Cite,
    /// The `code` element.
    Code,
    /// The `col` element.
    Col,
    /// The `colgroup` element.
    Colgroup,
    /// The `dd` element.
    Dd,
    /// The `div` element.
    Div,
    /// The `dl` element.
    Dl,
    /// The `dt` element.
    Dt,
    /// The `em` element.
    Em,
    /// The `fieldset` element.
    Fieldset,
    /// The `footer` element.
    Footer,
    /// The `form` element.
    Form,
    /// The `h1` element.
    H1,
    /// The `h2` element.
    H2,
    /// The `h3` element.
    H3,
    /// The `h4` element.
    H4,
    /// The `h5` element.
    H5,
    /// The `h6` element.
    H6,
    /// The `head` element.
    Head,
    /// The `header` element.
    Header,
    /// The `hr` element.
    Hr,
    /// The `iframe` element.
    Iframe,
    /// The `img` element.
    #[strum(serialize = "img")]
    Image,
    /// The `input` element.
    Input,
    /// The `i` element.
    #[strum(serialize = "i")]
    Italic,
    /// The `label` element.
    Label,
    /// The `legend` element.
    Legend,
    /// The `li` element.
    Li,
    /// The `link` element.
    Link,
    /// The `map` element.
    Map,
    /// The `meta` element.
    Meta,
    /// The `nav` element.
    Nav,
    /// The `ol` element.
    Ol,
    /// The `optgroup` element.
    Optgroup,
    /// The `option` element.
    Option,
    /// The `p` element.
    #[strum(serialize = "p")]
    Paragraph,
    /// The `param` element.
    Param,
    /// The `pre` element.
    Pre,
    /// The `script` element.
    Script,
    /// The `section` element.
    Section,
    /// The `select` element.
    Select,
    /// The `small` element.
    Small,
    /// The `source` element.
    Source,
    /// The `span` element.
    Span,
    /// The `strong` element.
    Strong,
    /// The `style` element.
    Style,
    /// The `sub` element.
    Sub,
    /// The `sup` element.
    Sup,
    /// The `table` element.
    Table,
    /// The `tbody` element.
    Tbody,
    /// The `td` element.
    Td,
    /// The `textarea` element.
    Textarea,
    /// The `tfoot` element.
    Tfoot,
    /// The `th` element.
    Th,
    /// The `thead` element.
    Thead,
    /// The `title` element.
    Title,
    /// The `tr` element.
    Tr,
    /// The `u` element.
    #[strum(serialize = "u")]
    Underline,
    /// The `ul` element.
    Ul,
    /// The `video` element.
    Video,
}

impl TagKind {
    /// The lowercase tag name, as emitted in markup.
    #[must_use]
    pub fn tag_name(self) -> &'static str {
        self.into()
    }

    /// The content model of this element kind.
    #[must_use]
    pub fn content_model(self) -> ContentModel {
        match self {
            Self::Area
            | Self::Base
            | Self::Br
            | Self::Col
            | Self::Hr
            | Self::Image
            | Self::Input
            | Self::Link
            | Self::Meta
            | Self::Param
            | Self::Source => ContentModel::Void,
            Self::Script | Self::Style | Self::Textarea | Self::Title | Self::Option => {
                ContentModel::TextOnly
            }
            _ => ContentModel::Container,
        }
    }

    /// Whether this element kind may contain child elements.
    #[must_use]
    pub fn supports_children(self) -> bool {
        self.content_model() == ContentModel::Container
    }

    /// Whether this element kind is a void element (start tag only).
    #[must_use]
    pub fn is_void(self) -> bool {
        self.content_model() == ContentModel::Void
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn tag_names_are_lowercase() {
        for kind in TagKind::iter() {
            let name = kind.tag_name();
            assert!(!name.is_empty());
            assert_eq!(name, name.to_lowercase(), "{kind:?}");
        }
    }

    #[test]
    fn abbreviated_tag_names() {
        assert_eq!(TagKind::Anchor.tag_name(), "a");
        assert_eq!(TagKind::Bold.tag_name(), "b");
        assert_eq!(TagKind::Italic.tag_name(), "i");
        assert_eq!(TagKind::Image.tag_name(), "img");
        assert_eq!(TagKind::Paragraph.tag_name(), "p");
        assert_eq!(TagKind::Underline.tag_name(), "u");
        assert_eq!(TagKind::H2.tag_name(), "h2");
    }

    #[test]
    fn content_models() {
        assert_eq!(TagKind::Div.content_model(), ContentModel::Container);
        assert_eq!(TagKind::Br.content_model(), ContentModel::Void);
        assert_eq!(TagKind::Input.content_model(), ContentModel::Void);
        assert_eq!(TagKind::Script.content_model(), ContentModel::TextOnly);
        assert_eq!(TagKind::Textarea.content_model(), ContentModel::TextOnly);
        assert!(TagKind::Table.supports_children());
        assert!(!TagKind::Script.supports_children());
        assert!(TagKind::Image.is_void());
        assert!(!TagKind::Span.is_void());
    }

    #[test]
    fn display_matches_tag_name() {
        for kind in TagKind::iter() {
            assert_eq!(kind.to_string(), kind.tag_name());
        }
    }
}
