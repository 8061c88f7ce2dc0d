//! Per-tag fluent builder facades.
//!
//! Each facade is a thin struct holding the shared cursor; every method
//! forwards into [`BuilderCore`] and returns a facade so calls chain. The
//! facades differ only in which attribute and content methods they expose:
//! void elements (`br`, `img`, ...) expose no content methods at all, and
//! text-only elements (`script`, `textarea`, ...) expose `text` but never
//! `html` or child starts — invalid content operations on those kinds are
//! ruled out at compile time. [`AnyElementBuilder`], returned by `end`, has
//! lost the tag's static type, so the same rules are enforced at runtime by
//! the cursor instead.
//!
//! The facades panic on misuse (see [`crate::error::BuilderError`] for the
//! taxonomy); callers who prefer explicit `Result`s can drive
//! [`BuilderCore`] directly.

use crate::cursor::{checked, BuilderCore};
use crate::safe::{SafeHtml, SafeUri};
use crate::sink::BuilderBackend;
use crate::styles::{StyleTarget, StylesBuilder};
use crate::tag::TagKind;

/// Generate the attribute methods shared by every facade.
macro_rules! common_attribute_methods {
    () => {
        /// Set an attribute on this element by name.
        ///
        /// # Panics
        /// Panics if content has already been appended to this element.
        pub fn attribute(self, name: &str, value: &str) -> Self {
            checked(self.core.set_attribute(name, value));
            self
        }

        /// Set the `id` attribute.
        ///
        /// # Panics
        /// Panics if content has already been appended to this element.
        pub fn id(self, value: &str) -> Self {
            self.attribute("id", value)
        }

        /// Set the `class` attribute.
        ///
        /// # Panics
        /// Panics on an empty or whitespace-only class name, or if content
        /// has already been appended to this element.
        pub fn class_name(self, value: &str) -> Self {
            checked(self.core.set_class_name(value));
            self
        }

        /// Set the `title` attribute.
        ///
        /// # Panics
        /// Panics if content has already been appended to this element.
        pub fn title(self, value: &str) -> Self {
            self.attribute("title", value)
        }

        /// Set the `lang` attribute.
        ///
        /// # Panics
        /// Panics if content has already been appended to this element.
        pub fn lang(self, value: &str) -> Self {
            self.attribute("lang", value)
        }

        /// Set the `dir` attribute (`ltr` or `rtl`).
        ///
        /// # Panics
        /// Panics if content has already been appended to this element.
        pub fn dir(self, value: &str) -> Self {
            self.attribute("dir", value)
        }

        /// Set the `tabindex` attribute.
        ///
        /// # Panics
        /// Panics if content has already been appended to this element.
        pub fn tab_index(self, value: i32) -> Self {
            self.attribute("tabindex", &value.to_string())
        }

        /// Enter the style sub-phase for this element.
        ///
        /// Style writes obey the same attribute-before-content lock as any
        /// attribute; leave the sub-phase with [`StylesBuilder::end_style`].
        pub fn style(self) -> StylesBuilder<Self> {
            StylesBuilder::new(self)
        }
    };
}

/// Generate the content methods allowed by a content model.
macro_rules! model_content_methods {
    (Container) => {
        /// Append escaped text content, locking this element's attributes.
        ///
        /// Further content (text, markup, or child elements) may still
        /// follow.
        ///
        /// # Panics
        /// Panics if this element cannot accept text content.
        pub fn text(self, value: &str) -> Self {
            checked(self.core.append_text(value));
            self
        }

        /// Append trusted markup verbatim, locking this element's
        /// attributes.
        ///
        /// # Panics
        /// Panics if this element cannot accept markup content.
        pub fn html(self, value: &SafeHtml) -> Self {
            checked(self.core.append_trusted_html(value));
            self
        }
    };
    (TextOnly) => {
        /// Set this element's single text payload.
        ///
        /// Locks the element immediately: no attribute, style, or further
        /// content call may follow.
        ///
        /// # Panics
        /// Panics if this element already received its text payload.
        pub fn text(self, value: &str) -> Self {
            checked(self.core.append_text(value));
            self
        }
    };
    (Void) => {};
}

/// Generate one typed attribute setter.
macro_rules! attribute_method {
    ($fn:ident, str, $name:literal) => {
        #[doc = concat!("Set the `", $name, "` attribute.")]
        ///
        /// # Panics
        /// Panics if content has already been appended to this element.
        pub fn $fn(self, value: &str) -> Self {
            self.attribute($name, value)
        }
    };
    ($fn:ident, int, $name:literal) => {
        #[doc = concat!("Set the `", $name, "` attribute.")]
        ///
        /// # Panics
        /// Panics if content has already been appended to this element.
        pub fn $fn(self, value: i32) -> Self {
            self.attribute($name, &value.to_string())
        }
    };
    ($fn:ident, flag, $name:literal) => {
        #[doc = concat!("Set the boolean `", $name, "` attribute.")]
        ///
        /// Emitted as `name="name"` so both backends serialize identically.
        ///
        /// # Panics
        /// Panics if content has already been appended to this element.
        pub fn $fn(self) -> Self {
            self.attribute($name, $name)
        }
    };
    ($fn:ident, uri, $name:literal) => {
        #[doc = concat!("Set the `", $name, "` attribute to a validated URI.")]
        ///
        /// # Panics
        /// Panics if content has already been appended to this element.
        pub fn $fn(self, value: &SafeUri) -> Self {
            self.attribute($name, value.as_str())
        }
    };
}

/// Generate the [`ContainerElement`] impl for container facades only.
macro_rules! container_impl {
    (Container, $builder:ident) => {
        impl<'s, B: BuilderBackend> ContainerElement<'s, B> for $builder<'s, B> {
            fn into_core(self) -> &'s mut BuilderCore<B> {
                self.core
            }
        }
    };
    (TextOnly, $builder:ident) => {};
    (Void, $builder:ident) => {};
}

/// Generate the facade structs, their impls, and the start methods.
macro_rules! element_builders {
    ($(
        $kind:ident / $tag:literal => $builder:ident / $start_fn:ident ($model:ident) {
            $( $attr_fn:ident($attr_kind:ident $attr_name:literal) ),* $(,)?
        }
    ),+ $(,)?) => {
        /// Chaining surface for elements that can contain child elements.
        ///
        /// Implemented by every container facade and by
        /// [`AnyElementBuilder`]. A `start_*` call appends a child element
        /// (locking the current element's attributes) and moves the cursor
        /// into the child; the matching `end` pops back out.
        pub trait ContainerElement<'s, B: BuilderBackend>: Sized {
            /// Release the cursor borrow held by this facade.
            fn into_core(self) -> &'s mut BuilderCore<B>;

            $(
                #[doc = concat!("Open a child `", $tag, "` element.")]
                ///
                /// # Panics
                /// Panics if the current element cannot contain child
                /// elements.
                fn $start_fn(self) -> $builder<'s, B> {
                    let core = self.into_core();
                    checked(core.start_element(TagKind::$kind));
                    $builder { core }
                }
            )+
        }

        $(
            #[doc = concat!("Fluent builder facade for a `", $tag, "` element.")]
            #[must_use]
            pub struct $builder<'s, B: BuilderBackend> {
                core: &'s mut BuilderCore<B>,
            }

            impl<'s, B: BuilderBackend> $builder<'s, B> {
                common_attribute_methods!();
                model_content_methods!($model);
                $( attribute_method!($attr_fn, $attr_kind, $attr_name); )*

                /// Close this element and return a builder positioned at
                /// the enclosing element.
                ///
                /// # Panics
                /// Panics if no element is open.
                pub fn end(self) -> AnyElementBuilder<'s, B> {
                    checked(self.core.end_element());
                    AnyElementBuilder { core: self.core }
                }
            }

            impl<B: BuilderBackend> StyleTarget for $builder<'_, B> {
                fn set_style_property(&mut self, name: &str, value: &str) {
                    checked(self.core.set_style_property(name, value));
                }

                fn append_trusted_styles(&mut self, css: &str) {
                    checked(self.core.append_trusted_styles(css));
                }
            }

            container_impl!($model, $builder);

            impl<B: BuilderBackend> crate::builder::Builder<B> {
                #[doc = concat!("Start building a top-level `", $tag, "` element.")]
                ///
                /// # Panics
                /// Panics if the element currently being built cannot
                /// contain child elements.
                pub fn $start_fn(&mut self) -> $builder<'_, B> {
                    let core = self.core_mut();
                    checked(core.start_element(TagKind::$kind));
                    $builder { core }
                }
            }
        )+
    };
}

element_builders! {
    Anchor / "a" => AnchorBuilder / start_anchor (Container) {
        href(uri "href"), target(str "target"), rel(str "rel"), name(str "name"),
    },
    Abbr / "abbr" => AbbrBuilder / start_abbr (Container) {},
    Area / "area" => AreaBuilder / start_area (Void) {
        href(uri "href"), alt(str "alt"), coords(str "coords"),
        shape(str "shape"), target(str "target"),
    },
    Audio / "audio" => AudioBuilder / start_audio (Container) {
        src(uri "src"), controls(flag "controls"), autoplay(flag "autoplay"),
        muted(flag "muted"), preload(str "preload"),
    },
    Bold / "b" => BoldBuilder / start_bold (Container) {},
    Base / "base" => BaseBuilder / start_base (Void) {
        href(uri "href"), target(str "target"),
    },
    Blockquote / "blockquote" => BlockquoteBuilder / start_blockquote (Container) {
        cite(uri "cite"),
    },
    Body / "body" => BodyBuilder / start_body (Container) {},
    Br / "br" => BrBuilder / start_br (Void) {},
    Button / "button" => ButtonBuilder / start_button (Container) {
        name(str "name"), value(str "value"), button_type(str "type"),
        disabled(flag "disabled"),
    },
    Canvas / "canvas" => CanvasBuilder / start_canvas (Container) {
        width(int "width"), height(int "height"),
    },
    Caption / "caption" => CaptionBuilder / start_caption (Container) {},
    Cite / "cite" => CiteBuilder / start_cite (Container) {},
    Code / "code" => CodeBuilder / start_code (Container) {},
    Col / "col" => ColBuilder / start_col (Void) {
        span(int "span"), width(str "width"),
    },
    Colgroup / "colgroup" => ColgroupBuilder / start_colgroup (Container) {
        span(int "span"), width(str "width"),
    },
    Dd / "dd" => DdBuilder / start_dd (Container) {},
    Div / "div" => DivBuilder / start_div (Container) {},
    Dl / "dl" => DlBuilder / start_dl (Container) {},
    Dt / "dt" => DtBuilder / start_dt (Container) {},
    Em / "em" => EmBuilder / start_em (Container) {},
    Fieldset / "fieldset" => FieldsetBuilder / start_fieldset (Container) {
        disabled(flag "disabled"),
    },
    Footer / "footer" => FooterBuilder / start_footer (Container) {},
    Form / "form" => FormBuilder / start_form (Container) {
        action(uri "action"), method(str "method"), name(str "name"),
        enctype(str "enctype"), target(str "target"),
        accept_charset(str "accept-charset"),
    },
    H1 / "h1" => H1Builder / start_h1 (Container) {},
    H2 / "h2" => H2Builder / start_h2 (Container) {},
    H3 / "h3" => H3Builder / start_h3 (Container) {},
    H4 / "h4" => H4Builder / start_h4 (Container) {},
    H5 / "h5" => H5Builder / start_h5 (Container) {},
    H6 / "h6" => H6Builder / start_h6 (Container) {},
    Head / "head" => HeadBuilder / start_head (Container) {},
    Header / "header" => HeaderBuilder / start_header (Container) {},
    Hr / "hr" => HrBuilder / start_hr (Void) {},
    Iframe / "iframe" => IframeBuilder / start_iframe (Container) {
        src(uri "src"), name(str "name"), width(str "width"),
        height(str "height"),
    },
    Image / "img" => ImageBuilder / start_image (Void) {
        src(uri "src"), alt(str "alt"), width(int "width"),
        height(int "height"),
    },
    Input / "input" => InputBuilder / start_input (Void) {
        name(str "name"), value(str "value"), input_type(str "type"),
        checked(flag "checked"), disabled(flag "disabled"),
        readonly(flag "readonly"), placeholder(str "placeholder"),
        size(int "size"), max_length(int "maxlength"), accept(str "accept"),
        alt(str "alt"), src(uri "src"),
    },
    Italic / "i" => ItalicBuilder / start_italic (Container) {},
    Label / "label" => LabelBuilder / start_label (Container) {
        html_for(str "for"),
    },
    Legend / "legend" => LegendBuilder / start_legend (Container) {},
    Li / "li" => LiBuilder / start_li (Container) {
        value(int "value"),
    },
    Link / "link" => LinkBuilder / start_link (Void) {
        href(uri "href"), rel(str "rel"), media(str "media"),
        link_type(str "type"),
    },
    Map / "map" => MapBuilder / start_map (Container) {
        name(str "name"),
    },
    Meta / "meta" => MetaBuilder / start_meta (Void) {
        name(str "name"), content(str "content"),
        http_equiv(str "http-equiv"),
    },
    Nav / "nav" => NavBuilder / start_nav (Container) {},
    Ol / "ol" => OlBuilder / start_ol (Container) {
        start(int "start"), list_type(str "type"),
    },
    Optgroup / "optgroup" => OptgroupBuilder / start_optgroup (Container) {
        label(str "label"), disabled(flag "disabled"),
    },
    Option / "option" => OptionBuilder / start_option (TextOnly) {
        value(str "value"), label(str "label"), selected(flag "selected"),
        disabled(flag "disabled"),
    },
    Paragraph / "p" => ParagraphBuilder / start_paragraph (Container) {},
    Param / "param" => ParamBuilder / start_param (Void) {
        name(str "name"), value(str "value"),
    },
    Pre / "pre" => PreBuilder / start_pre (Container) {},
    Script / "script" => ScriptBuilder / start_script (TextOnly) {
        src(uri "src"), script_type(str "type"), defer(flag "defer"),
    },
    Section / "section" => SectionBuilder / start_section (Container) {},
    Select / "select" => SelectBuilder / start_select (Container) {
        name(str "name"), size(int "size"), multiple(flag "multiple"),
        disabled(flag "disabled"),
    },
    Small / "small" => SmallBuilder / start_small (Container) {},
    Source / "source" => SourceBuilder / start_source (Void) {
        src(uri "src"), source_type(str "type"), media(str "media"),
    },
    Span / "span" => SpanBuilder / start_span (Container) {},
    Strong / "strong" => StrongBuilder / start_strong (Container) {},
    Style / "style" => StyleBuilder / start_style_element (TextOnly) {
        media(str "media"), style_type(str "type"),
    },
    Sub / "sub" => SubBuilder / start_sub (Container) {},
    Sup / "sup" => SupBuilder / start_sup (Container) {},
    Table / "table" => TableBuilder / start_table (Container) {
        border(int "border"), cellpadding(int "cellpadding"),
        cellspacing(int "cellspacing"), width(str "width"),
    },
    Tbody / "tbody" => TbodyBuilder / start_tbody (Container) {},
    Td / "td" => TdBuilder / start_td (Container) {
        colspan(int "colspan"), rowspan(int "rowspan"), headers(str "headers"),
    },
    Textarea / "textarea" => TextareaBuilder / start_textarea (TextOnly) {
        name(str "name"), rows(int "rows"), cols(int "cols"),
        readonly(flag "readonly"), disabled(flag "disabled"),
        placeholder(str "placeholder"),
    },
    Tfoot / "tfoot" => TfootBuilder / start_tfoot (Container) {},
    Th / "th" => ThBuilder / start_th (Container) {
        colspan(int "colspan"), rowspan(int "rowspan"),
        headers(str "headers"), scope(str "scope"),
    },
    Thead / "thead" => TheadBuilder / start_thead (Container) {},
    Title / "title" => TitleBuilder / start_title (TextOnly) {},
    Tr / "tr" => TrBuilder / start_tr (Container) {},
    Underline / "u" => UnderlineBuilder / start_underline (Container) {},
    Ul / "ul" => UlBuilder / start_ul (Container) {},
    Video / "video" => VideoBuilder / start_video (Container) {
        src(uri "src"), controls(flag "controls"), autoplay(flag "autoplay"),
        muted(flag "muted"), poster(uri "poster"), width(int "width"),
        height(int "height"),
    },
}

/// Untyped builder facade positioned at the element currently being built.
///
/// Returned by every typed facade's `end`: once a child element is closed,
/// the parent's static type is gone, so content-model rules that the typed
/// facades enforce at compile time are enforced here at runtime by the
/// cursor.
#[must_use]
pub struct AnyElementBuilder<'s, B: BuilderBackend> {
    core: &'s mut BuilderCore<B>,
}

impl<'s, B: BuilderBackend> AnyElementBuilder<'s, B> {
    common_attribute_methods!();
    model_content_methods!(Container);

    /// Explicitly lock the current element without appending content.
    ///
    /// # Panics
    /// Panics if no element is open.
    pub fn lock(self) -> Self {
        checked(self.core.lock_current());
        self
    }

    /// Close the current element and stay positioned at its parent.
    ///
    /// # Panics
    /// Panics if no element is open.
    pub fn end(self) -> Self {
        checked(self.core.end_element());
        self
    }
}

impl<B: BuilderBackend> StyleTarget for AnyElementBuilder<'_, B> {
    fn set_style_property(&mut self, name: &str, value: &str) {
        checked(self.core.set_style_property(name, value));
    }

    fn append_trusted_styles(&mut self, css: &str) {
        checked(self.core.append_trusted_styles(css));
    }
}

impl<'s, B: BuilderBackend> ContainerElement<'s, B> for AnyElementBuilder<'s, B> {
    fn into_core(self) -> &'s mut BuilderCore<B> {
        self.core
    }
}
