//! Minimal element tree hosting the content pane.
//!
//! Just enough of a document for height control: elements with a tag, an
//! attribute list, and an editable inline `style` attribute. Nodes live in
//! an arena and are addressed by `NodeId`; a synthetic document node sits at
//! the root, as in a real DOM.

#![forbid(unsafe_code)]

pub mod style_attr;

pub use indextree::NodeId;

use indextree::Arena;
use smallvec::SmallVec;

/// Kind of node stored in the arena.
#[derive(Debug, Clone, Default)]
pub enum NodeKind {
    #[default]
    Document,
    Element {
        tag: String,
    },
}

/// A node: its kind plus attribute pairs in source order.
#[derive(Debug, Clone, Default)]
pub struct DomNode {
    pub kind: NodeKind,
    pub attrs: SmallVec<(String, String), 4>,
}

/// Arena-backed document with a synthetic root node.
#[derive(Debug)]
pub struct Document {
    arena: Arena<DomNode>,
    root: NodeId,
}

impl Default for Document {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = arena.new_node(DomNode::default());
        Self { arena, root }
    }

    /// The synthetic document node; elements hang below it.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Append a child element under `parent` and return its id.
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let node = self.arena.new_node(DomNode {
            kind: NodeKind::Element { tag: tag.to_owned() },
            attrs: SmallVec::new(),
        });
        parent.append(node, &mut self.arena);
        node
    }

    /// Set an attribute on a node, replacing any existing value.
    pub fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
        let Some(entry) = self.arena.get_mut(node) else {
            return;
        };
        let data = entry.get_mut();
        if let Some(existing) = data.attrs.iter_mut().find(|(attr_name, _)| attr_name == name) {
            existing.1 = value.to_owned();
        } else {
            data.attrs.push((name.to_owned(), value.to_owned()));
        }
    }

    /// Attribute value on a node, if present.
    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.arena
            .get(node)?
            .get()
            .attrs
            .iter()
            .find(|(attr_name, _)| attr_name == name)
            .map(|(_, value)| value.as_str())
    }

    /// First element in document order carrying `id="<id>"`.
    ///
    /// Mirrors `getElementById`: ids are assumed unique, and duplicates
    /// resolve to the earliest match.
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.root
            .descendants(&self.arena)
            .find(|&node| self.attr(node, "id") == Some(id))
    }

    /// Overwrite one declaration in the node's inline style, preserving the
    /// rest of the attribute.
    pub fn set_style_property(&mut self, node: NodeId, property: &str, value: &str) {
        let current = self.attr(node, "style").unwrap_or_default().to_owned();
        let updated = style_attr::set_declaration(&current, property, value);
        self.set_attr(node, "style", &updated);
    }

    /// Value of one declaration in the node's inline style.
    pub fn style_property(&self, node: NodeId, property: &str) -> Option<String> {
        style_attr::declaration_value(self.attr(node, "style")?, property)
    }
}
