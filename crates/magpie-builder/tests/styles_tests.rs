//! Style sub-phase behavior over both backends.

use magpie_builder::{DomBuilder, HtmlBuilder, SafeStyles, Unit};

#[test]
fn style_properties_flatten_into_one_attribute() {
    let mut builder = HtmlBuilder::new();
    let div = builder
        .start_div()
        .style()
        .width(100.0, Unit::Px)
        .color("red")
        .end_style();
    let _ = div.text("x").end();
    let html = builder.finish().expect("unbalanced build");
    assert_eq!(html, "<div style=\"width:100px;color:red;\">x</div>");
}

#[test]
fn style_output_matches_between_backends() {
    let mut string_builder = HtmlBuilder::new();
    let div = string_builder
        .start_div()
        .style()
        .position("absolute")
        .top(1.5, Unit::Em)
        .z_index(3)
        .end_style();
    let _ = div.end();
    let html = string_builder.finish().expect("unbalanced build");

    let mut dom_builder = DomBuilder::new();
    let div = dom_builder
        .start_div()
        .style()
        .position("absolute")
        .top(1.5, Unit::Em)
        .z_index(3)
        .end_style();
    let _ = div.end();
    let built = dom_builder.finish().expect("unbalanced build");

    assert_eq!(html, built.outer_html());
    assert_eq!(
        html,
        "<div style=\"position:absolute;top:1.5em;z-index:3;\"></div>"
    );
}

#[test]
fn camel_case_property_names_are_hyphenated() {
    let mut builder = HtmlBuilder::new();
    let div = builder
        .start_div()
        .style()
        .property("backgroundColor", "blue")
        .end_style();
    let _ = div.end();
    let html = builder.finish().expect("unbalanced build");
    assert_eq!(html, "<div style=\"background-color:blue;\"></div>");
}

#[test]
fn trusted_styles_append_after_properties() {
    let borders = SafeStyles::from_trusted_string("border:1px solid black;".to_string());
    let mut builder = HtmlBuilder::new();
    let div = builder
        .start_div()
        .style()
        .width(10.0, Unit::Px)
        .trusted(&borders)
        .end_style();
    let _ = div.end();
    let html = builder.finish().expect("unbalanced build");
    assert_eq!(
        html,
        "<div style=\"width:10px;border:1px solid black;\"></div>"
    );
}

#[test]
fn empty_style_phase_emits_no_attribute() {
    let mut builder = HtmlBuilder::new();
    let div = builder.start_div().style().end_style();
    let _ = div.text("plain").end();
    let html = builder.finish().expect("unbalanced build");
    assert_eq!(html, "<div>plain</div>");
}

#[test]
fn style_then_plain_attribute_keeps_working() {
    let mut builder = HtmlBuilder::new();
    let div = builder
        .start_div()
        .style()
        .color("red")
        .end_style()
        .id("styled");
    let _ = div.end();
    let html = builder.finish().expect("unbalanced build");
    assert_eq!(html, "<div style=\"color:red;\" id=\"styled\"></div>");
}

#[test]
#[should_panic(expected = "element builder misuse")]
fn second_style_phase_after_plain_attribute_panics() {
    let mut builder = HtmlBuilder::new();
    let div = builder
        .start_div()
        .style()
        .color("red")
        .end_style()
        .id("x");
    // A second style phase would need a second style attribute in string
    // mode, so the cursor rejects it on both backends.
    let _ = div.style().display("block").end_style().end();
}

#[test]
fn percent_unit_formats_as_percent_sign() {
    let mut builder = HtmlBuilder::new();
    let div = builder
        .start_div()
        .style()
        .width(50.0, Unit::Pct)
        .end_style();
    let _ = div.end();
    let html = builder.finish().expect("unbalanced build");
    assert_eq!(html, "<div style=\"width:50%;\"></div>");
}

#[test]
#[cfg_attr(debug_assertions, should_panic(expected = "camelCase"))]
fn hyphenated_property_name_is_rejected_in_debug() {
    let mut builder = HtmlBuilder::new();
    let div = builder
        .start_div()
        .style()
        .property("background-color", "blue")
        .end_style();
    let _ = div.end();
    let _ = builder.finish().expect("unbalanced build");
}
