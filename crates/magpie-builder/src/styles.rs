//! The styles builder: CSS property assignment during element construction.
//!
//! Entered through a facade's `style()` and left through
//! [`StylesBuilder::end_style`], symmetric with element start/end. Property
//! names are taken in camelCase (the style-object convention) and converted
//! to their hyphenated CSS wire form; the conversion is cached globally
//! because the same small set of property names recurs constantly.

use std::collections::HashMap;
use std::sync::Mutex;

use strum_macros::Display;

use magpie_common::warning::warn_once;

use crate::safe::SafeStyles;

/// Cache of camelCase property name to hyphenated CSS form.
static HYPHENATED: Mutex<Option<HashMap<String, String>>> = Mutex::new(None);

/// Convert a camelCase style property name to its hyphenated CSS form.
///
/// `backgroundColor` becomes `background-color`, `zIndex` becomes `z-index`.
/// Names that already contain a hyphen pass through unchanged. Results are
/// cached by the camelCase input.
///
/// # Panics
/// Panics if the global cache mutex is poisoned.
#[must_use]
pub fn hyphenated_name(name: &str) -> String {
    if name.contains('-') {
        return name.to_string();
    }
    let mut guard = HYPHENATED.lock().unwrap();
    let cache = guard.get_or_insert_with(HashMap::new);
    if let Some(cached) = cache.get(name) {
        return cached.clone();
    }
    let mut hyphenated = String::with_capacity(name.len() + 2);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            hyphenated.push('-');
            hyphenated.push(ch.to_ascii_lowercase());
        } else {
            hyphenated.push(ch);
        }
    }
    let _ = cache.insert(name.to_string(), hyphenated.clone());
    hyphenated
}

/// CSS length units, displayed as their wire suffix (`10px`, `50%`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Unit {
    /// Pixels.
    Px,
    /// Percent.
    #[strum(serialize = "%")]
    Pct,
    /// Font-size-relative em units.
    Em,
    /// x-height-relative ex units.
    Ex,
    /// Points.
    Pt,
    /// Picas.
    Pc,
    /// Inches.
    In,
    /// Centimeters.
    Cm,
    /// Millimeters.
    Mm,
}

/// Seam between the styles builder and the element facade that owns it.
///
/// Implemented by every element facade; writes go through the shared cursor
/// and obey the same attribute-before-content lock as any attribute write.
pub trait StyleTarget {
    /// Write one CSS declaration; `name` is already hyphenated.
    ///
    /// # Panics
    /// Panics if the owning element can no longer accept attributes.
    fn set_style_property(&mut self, name: &str, value: &str);

    /// Append pre-validated CSS declarations.
    ///
    /// # Panics
    /// Panics if the owning element can no longer accept attributes.
    fn append_trusted_styles(&mut self, css: &str);
}

/// Fluent sink for CSS declarations on the element currently being built.
#[must_use]
pub struct StylesBuilder<F: StyleTarget> {
    owner: F,
}

/// Generate string-valued convenience property setters.
macro_rules! style_string_properties {
    ($( $fn:ident => $name:literal ),+ $(,)?) => { $(
        #[doc = concat!("Set the `", $name, "` property.")]
        pub fn $fn(self, value: &str) -> Self {
            self.property($name, value)
        }
    )+ };
}

/// Generate length-valued convenience property setters.
macro_rules! style_length_properties {
    ($( $fn:ident => $name:literal ),+ $(,)?) => { $(
        #[doc = concat!("Set the `", $name, "` property to a length value.")]
        pub fn $fn(self, value: f64, unit: Unit) -> Self {
            self.property_unit($name, value, unit)
        }
    )+ };
}

impl<F: StyleTarget> StylesBuilder<F> {
    pub(crate) fn new(owner: F) -> Self {
        Self { owner }
    }

    /// Set a property by camelCase name.
    ///
    /// # Panics
    /// In debug builds, panics if `name` contains a hyphen (hyphenated CSS
    /// names must be given in camelCase at this boundary); optimized builds
    /// warn once and accept the name as-is. Also panics if the owning
    /// element can no longer accept attributes.
    pub fn property(mut self, name: &str, value: &str) -> Self {
        if name.contains('-') {
            if cfg!(debug_assertions) {
                panic!("style property name `{name}` must be camelCase, e.g. `backgroundColor`");
            }
            warn_once(
                "styles",
                &format!("hyphenated style property name `{name}`; expected camelCase"),
            );
        }
        let hyphenated = hyphenated_name(name);
        self.owner.set_style_property(&hyphenated, value);
        self
    }

    /// Set a property to a numeric value with a unit suffix.
    ///
    /// # Panics
    /// Same conditions as [`StylesBuilder::property`].
    pub fn property_unit(self, name: &str, value: f64, unit: Unit) -> Self {
        self.property(name, &format!("{value}{unit}"))
    }

    /// Append pre-validated declarations verbatim.
    ///
    /// # Panics
    /// Panics if the owning element can no longer accept attributes.
    pub fn trusted(mut self, styles: &SafeStyles) -> Self {
        self.owner.append_trusted_styles(styles.as_str());
        self
    }

    /// Set the `zIndex` property.
    pub fn z_index(self, value: i32) -> Self {
        self.property("zIndex", &value.to_string())
    }

    style_string_properties! {
        background_color => "backgroundColor",
        background_image => "backgroundImage",
        color => "color",
        cursor => "cursor",
        display => "display",
        font_family => "fontFamily",
        font_style => "fontStyle",
        font_weight => "fontWeight",
        overflow => "overflow",
        position => "position",
        text_align => "textAlign",
        text_decoration => "textDecoration",
        vertical_align => "verticalAlign",
        visibility => "visibility",
    }

    style_length_properties! {
        bottom => "bottom",
        font_size => "fontSize",
        height => "height",
        left => "left",
        line_height => "lineHeight",
        margin => "margin",
        margin_bottom => "marginBottom",
        margin_left => "marginLeft",
        margin_right => "marginRight",
        margin_top => "marginTop",
        padding => "padding",
        padding_bottom => "paddingBottom",
        padding_left => "paddingLeft",
        padding_right => "paddingRight",
        padding_top => "paddingTop",
        right => "right",
        top => "top",
        width => "width",
    }

    /// Leave the style sub-phase, returning to the owning element builder.
    #[must_use]
    pub fn end_style(self) -> F {
        self.owner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_is_hyphenated() {
        assert_eq!(hyphenated_name("backgroundColor"), "background-color");
        assert_eq!(hyphenated_name("zIndex"), "z-index");
        assert_eq!(hyphenated_name("borderTopLeftRadius"), "border-top-left-radius");
        assert_eq!(hyphenated_name("color"), "color");
    }

    #[test]
    fn hyphenated_input_passes_through() {
        assert_eq!(hyphenated_name("background-color"), "background-color");
        assert_eq!(hyphenated_name("z-index"), "z-index");
    }

    #[test]
    fn cache_returns_consistent_results() {
        // Same input twice: second call is served from the cache.
        assert_eq!(hyphenated_name("marginTop"), "margin-top");
        assert_eq!(hyphenated_name("marginTop"), "margin-top");
    }

    #[test]
    fn unit_suffixes() {
        assert_eq!(Unit::Px.to_string(), "px");
        assert_eq!(Unit::Pct.to_string(), "%");
        assert_eq!(Unit::Em.to_string(), "em");
        assert_eq!(format!("{}{}", 10.0, Unit::Px), "10px");
        assert_eq!(format!("{}{}", 1.5, Unit::Em), "1.5em");
    }
}
