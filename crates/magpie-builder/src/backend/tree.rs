//! The live backend: builds real nodes in an arena DOM tree.
//!
//! Attribute and style writes land on the node immediately, so unlike the
//! string backend nothing here is order-sensitive; the shared cursor still
//! enforces the ordering invariant so the two backends stay interchangeable.

use magpie_dom::{serialize, DomTree, NodeId, NodeType};

use crate::safe::SafeHtml;
use crate::sink::{AttributeSink, BuilderBackend, ContentSink, StyleSink};
use crate::tag::TagKind;

/// Backend that builds an arena DOM tree node-by-node.
#[derive(Debug, Default)]
pub struct TreeBackend {
    tree: DomTree,
    /// Stack of open element nodes; the last entry is the current element.
    open: Vec<NodeId>,
}

impl TreeBackend {
    /// Create a tree backend over a fresh document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn current(&self) -> NodeId {
        self.open.last().copied().unwrap_or(NodeId::ROOT)
    }
}

impl AttributeSink for TreeBackend {
    fn set_attribute(&mut self, name: &str, value: &str) {
        let id = self.current();
        self.tree.set_attribute(id, name, value);
    }
}

impl StyleSink for TreeBackend {
    fn set_style_property(&mut self, name: &str, value: &str) {
        let id = self.current();
        self.tree
            .append_to_attribute(id, "style", &format!("{name}:{value};"));
    }

    fn append_trusted_styles(&mut self, css: &str) {
        let id = self.current();
        self.tree.append_to_attribute(id, "style", css);
    }
}

impl ContentSink for TreeBackend {
    fn append_text(&mut self, text: &str) {
        let parent = self.current();
        let node = self.tree.create_text(text);
        self.tree.append_child(parent, node);
    }

    fn append_trusted_html(&mut self, html: &SafeHtml) {
        let parent = self.current();
        let node = self.tree.alloc(NodeType::RawHtml(html.as_str().to_string()));
        self.tree.append_child(parent, node);
    }
}

impl BuilderBackend for TreeBackend {
    type Output = BuiltElement;

    fn open_element(&mut self, tag: TagKind) {
        let parent = self.current();
        let node = self.tree.create_element(tag.tag_name());
        self.tree.append_child(parent, node);
        self.open.push(node);
    }

    fn seal_open_tag(&mut self) {
        // Nothing to do: tree nodes have no textual opening tag.
    }

    fn close_element(&mut self, _tag: TagKind) {
        let _ = self.open.pop();
    }

    fn take_output(&mut self) -> BuiltElement {
        let tree = std::mem::take(&mut self.tree);
        self.open.clear();
        let root = tree.first_child(tree.root()).unwrap_or(NodeId::ROOT);
        BuiltElement { tree, root }
    }
}

/// The artifact of a finished tree build: the arena plus the root element.
#[derive(Debug, Clone)]
pub struct BuiltElement {
    /// The tree holding the built subtree under its document node.
    pub tree: DomTree,
    /// The first root element that was built (the document node if nothing
    /// was). A session may build several top-level elements before
    /// finishing; they all sit under the document node.
    pub root: NodeId,
}

impl BuiltElement {
    /// Serialize everything built in the session to HTML.
    ///
    /// Serializes every top-level element under the document node, so a
    /// session that built two roots yields both, matching the string
    /// backend's buffer. For the usual single-root build this is the root's
    /// `outerHTML`.
    #[must_use]
    pub fn outer_html(&self) -> String {
        serialize::inner_html(&self.tree, self.tree.root())
    }
}
