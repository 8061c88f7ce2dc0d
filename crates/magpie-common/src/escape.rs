//! HTML escaping for text and attribute contexts.
//!
//! [§ 13.1.2.6 Restrictions on the contents of raw text and escapable raw text elements](https://html.spec.whatwg.org/multipage/syntax.html#cdata-rcdata-restrictions)
//! and [§ 13.3 Serializing HTML fragments](https://html.spec.whatwg.org/multipage/parsing.html#serialising-html-fragments)
//! define the characters that must be replaced when emitting markup.
//!
//! Text content escapes exactly `&`, `<`, `>`. Double-quoted attribute values
//! additionally escape `"`. No other characters are touched, so output stays
//! byte-comparable across the two builder backends.

/// Append `text` to `out`, escaping it for element content.
///
/// Replaces `&` with `&amp;`, `<` with `&lt;`, and `>` with `&gt;`.
pub fn push_escaped_text(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

/// Append `value` to `out`, escaping it for a double-quoted attribute value.
///
/// Replaces `&`, `<`, `>` as in text content, plus `"` with `&quot;`.
/// Single quotes pass through: the serialized form always uses double quotes.
pub fn push_escaped_attribute(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

/// Escape `text` for element content, returning a new string.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped_text(&mut out, text);
    out
}

/// Escape `value` for a double-quoted attribute value, returning a new string.
#[must_use]
pub fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    push_escaped_attribute(&mut out, value);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_escapes_amp_lt_gt_only() {
        assert_eq!(escape_text("a & b < c > d"), "a &amp; b &lt; c &gt; d");
        assert_eq!(escape_text(r#"say "hi" 'there'"#), r#"say "hi" 'there'"#);
    }

    #[test]
    fn attribute_escapes_double_quote_too() {
        assert_eq!(
            escape_attribute(r#"a "quoted" & <tag>"#),
            "a &quot;quoted&quot; &amp; &lt;tag&gt;"
        );
        // Single quotes are left alone.
        assert_eq!(escape_attribute("it's"), "it's");
    }

    #[test]
    fn clean_input_is_unchanged() {
        assert_eq!(escape_text("plain text 123"), "plain text 123");
        assert_eq!(escape_attribute("plain value"), "plain value");
    }

    #[test]
    fn push_variants_append_in_place() {
        let mut out = String::from("<span title=\"");
        push_escaped_attribute(&mut out, "x & y");
        out.push_str("\">");
        push_escaped_text(&mut out, "1 < 2");
        assert_eq!(out, "<span title=\"x &amp; y\">1 &lt; 2");
    }
}
