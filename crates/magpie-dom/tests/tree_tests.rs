//! Integration tests for the arena DOM tree.

use magpie_dom::{DomTree, NodeId, NodeType};

/// Helper to build a tree with a single element under the document.
fn tree_with_element(tag: &str) -> (DomTree, NodeId) {
    let mut tree = DomTree::new();
    let id = tree.create_element(tag);
    tree.append_child(tree.root(), id);
    (tree, id)
}

#[test]
fn new_tree_has_only_the_document() {
    let tree = DomTree::new();
    assert_eq!(tree.len(), 1);
    assert!(!tree.is_empty());
    assert!(matches!(
        tree.get(NodeId::ROOT).unwrap().node_type,
        NodeType::Document
    ));
    assert!(tree.first_child(tree.root()).is_none());
}

#[test]
fn append_child_links_parent_and_siblings() {
    let mut tree = DomTree::new();
    let parent = tree.create_element("ul");
    tree.append_child(tree.root(), parent);
    let first = tree.create_element("li");
    let second = tree.create_element("li");
    tree.append_child(parent, first);
    tree.append_child(parent, second);

    assert_eq!(tree.parent(first), Some(parent));
    assert_eq!(tree.parent(second), Some(parent));
    assert_eq!(tree.children(parent), &[first, second]);
    assert_eq!(tree.first_child(parent), Some(first));
    assert_eq!(tree.last_child(parent), Some(second));
    assert_eq!(tree.next_sibling(first), Some(second));
    assert_eq!(tree.prev_sibling(second), Some(first));
    assert!(tree.next_sibling(second).is_none());
    assert!(tree.prev_sibling(first).is_none());
}

#[test]
fn attributes_keep_insertion_order() {
    let (mut tree, id) = tree_with_element("div");
    tree.set_attribute(id, "id", "main");
    tree.set_attribute(id, "title", "first");
    tree.set_attribute(id, "class", "wide");

    let data = tree.element(id).unwrap();
    let names: Vec<&str> = data.attrs.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["id", "title", "class"]);
}

#[test]
fn replacing_an_attribute_keeps_its_position() {
    let (mut tree, id) = tree_with_element("div");
    tree.set_attribute(id, "id", "main");
    tree.set_attribute(id, "title", "first");
    tree.set_attribute(id, "id", "replaced");

    let data = tree.element(id).unwrap();
    let names: Vec<&str> = data.attrs.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["id", "title"]);
    assert_eq!(data.attribute("id"), Some("replaced"));
}

#[test]
fn append_to_attribute_accumulates() {
    let (mut tree, id) = tree_with_element("div");
    tree.append_to_attribute(id, "style", "color:red;");
    tree.append_to_attribute(id, "style", "width:10px;");

    let data = tree.element(id).unwrap();
    assert_eq!(data.attribute("style"), Some("color:red;width:10px;"));
}

#[test]
fn id_and_classes_helpers() {
    let (mut tree, id) = tree_with_element("p");
    tree.set_attribute(id, "id", "intro");
    tree.set_attribute(id, "class", "lead  highlight");

    let data = tree.element(id).unwrap();
    assert_eq!(data.id(), Some("intro"));
    let classes: Vec<&str> = data.classes().collect();
    assert_eq!(classes, ["lead", "highlight"]);
}

#[test]
fn element_accessor_is_none_for_text_nodes() {
    let mut tree = DomTree::new();
    let text = tree.create_text("hello");
    tree.append_child(tree.root(), text);
    assert!(tree.element(text).is_none());
}
