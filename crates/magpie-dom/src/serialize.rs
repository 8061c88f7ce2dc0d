//! HTML serialization of a DOM tree.
//!
//! [§ 13.3 Serializing HTML fragments](https://html.spec.whatwg.org/multipage/parsing.html#serialising-html-fragments)
//!
//! Attributes are emitted in stored (insertion) order, double-quoted, with
//! attribute escaping; text nodes get text escaping; [`NodeType::RawHtml`]
//! nodes are emitted verbatim. Void elements get no end tag.

use magpie_common::escape::{push_escaped_attribute, push_escaped_text};

use crate::{DomTree, NodeId, NodeType};

/// [§ 13.1.2 Elements — void elements](https://html.spec.whatwg.org/multipage/syntax.html#void-elements)
///
/// "Void elements only have a start tag; end tags must not be specified."
const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Whether `tag_name` names a void element (no end tag when serialized).
#[must_use]
pub fn is_void_element(tag_name: &str) -> bool {
    VOID_ELEMENTS.contains(&tag_name)
}

/// Serialize a node and its subtree to HTML.
///
/// For the document node this serializes all children (a document has no
/// tag of its own). Returns an empty string for an ID not in the tree.
#[must_use]
pub fn outer_html(tree: &DomTree, id: NodeId) -> String {
    let mut out = String::new();
    write_node(tree, id, &mut out);
    out
}

/// Serialize only the children of a node to HTML.
#[must_use]
pub fn inner_html(tree: &DomTree, id: NodeId) -> String {
    let mut out = String::new();
    for &child in tree.children(id) {
        write_node(tree, child, &mut out);
    }
    out
}

fn write_node(tree: &DomTree, id: NodeId, out: &mut String) {
    let Some(node) = tree.get(id) else {
        return;
    };
    match &node.node_type {
        NodeType::Document => {
            for &child in &node.children {
                write_node(tree, child, out);
            }
        }
        NodeType::Element(data) => {
            out.push('<');
            out.push_str(&data.tag_name);
            for attr in &data.attrs {
                out.push(' ');
                out.push_str(&attr.name);
                out.push_str("=\"");
                push_escaped_attribute(out, &attr.value);
                out.push('"');
            }
            out.push('>');
            if is_void_element(&data.tag_name) {
                return;
            }
            for &child in &node.children {
                write_node(tree, child, out);
            }
            out.push_str("</");
            out.push_str(&data.tag_name);
            out.push('>');
        }
        NodeType::Text(text) => push_escaped_text(out, text),
        NodeType::Comment(comment) => {
            out.push_str("<!--");
            out.push_str(comment);
            out.push_str("-->");
        }
        NodeType::RawHtml(markup) => out.push_str(markup),
    }
}
