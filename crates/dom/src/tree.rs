//! The document tree.
//!
//! [`Document`] owns the node arena and keeps the intrusive
//! parent/child/sibling links consistent across mutations. Handles returned
//! from the factory methods stay valid for the document's lifetime; lookups
//! with a foreign or out-of-range handle return `None` rather than panicking.

use crate::builder::build_fragment;
use crate::tokenizer::tokenize;
use crate::types::{ElementData, Node, NodeData, NodeId};

pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document containing only its root node.
    pub fn new() -> Self {
        let root_node = Node::new(NodeData::Document { doctype: None });
        Self {
            nodes: vec![root_node],
            root: NodeId(0),
        }
    }

    /// Parse `input` into a fresh document.
    ///
    /// The parse is tolerant: malformed markup takes the tokenizer's recovery
    /// path (implied end tags, dropped stray close tags) and never fails.
    pub fn from_markup(input: &str) -> Self {
        let mut doc = Self::new();
        let root = doc.root;
        build_fragment(&mut doc, root, tokenize(input));
        doc
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    // =======================================================================
    // Node creation
    // =======================================================================

    fn alloc(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(data));
        id
    }

    /// Create a detached element. Attachment is the caller's business via
    /// [`append_child`](Self::append_child) and friends.
    pub fn create_element(&mut self, tag_name: &str) -> NodeId {
        self.alloc(NodeData::Element(ElementData {
            tag_name: tag_name.to_ascii_lowercase(),
            attrs: Vec::new(),
        }))
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.alloc(NodeData::Text {
            text: text.to_string(),
        })
    }

    pub fn create_comment(&mut self, text: &str) -> NodeId {
        self.alloc(NodeData::Comment {
            text: text.to_string(),
        })
    }

    pub fn set_doctype(&mut self, doctype: Option<String>) {
        let root = self.root;
        if let Some(node) = self.get_mut(root)
            && let NodeData::Document { doctype: dt } = &mut node.data
        {
            *dt = doctype;
        }
    }

    pub fn doctype(&self) -> Option<&str> {
        match &self.get(self.root)?.data {
            NodeData::Document { doctype } => doctype.as_deref(),
            _ => None,
        }
    }

    // =======================================================================
    // Tree mutation
    // =======================================================================

    /// Append `child` as the last child of `parent`, detaching it from its
    /// current parent first if needed.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if self.get(parent).is_none() || self.get(child).is_none() || parent == child {
            return;
        }
        if self.get(child).and_then(|n| n.parent).is_some() {
            self.detach(child);
        }

        let old_last = self.get(parent).and_then(|n| n.last_child);
        if let Some(old_last_id) = old_last
            && let Some(old_last_node) = self.get_mut(old_last_id)
        {
            old_last_node.next_sibling = Some(child);
        }

        if let Some(child_node) = self.get_mut(child) {
            child_node.parent = Some(parent);
            child_node.prev_sibling = old_last;
            child_node.next_sibling = None;
        }

        if let Some(parent_node) = self.get_mut(parent) {
            if parent_node.first_child.is_none() {
                parent_node.first_child = Some(child);
            }
            parent_node.last_child = Some(child);
        }
    }

    /// Insert `child` immediately before `reference` in `parent`'s child
    /// list. `None` for `reference` appends.
    pub fn insert_before(&mut self, parent: NodeId, child: NodeId, reference: Option<NodeId>) {
        let Some(reference) = reference else {
            self.append_child(parent, child);
            return;
        };
        if self.get(reference).and_then(|n| n.parent) != Some(parent) {
            return;
        }
        if self.get(child).is_none() || parent == child {
            return;
        }
        if self.get(child).and_then(|n| n.parent).is_some() {
            self.detach(child);
        }

        let prev_of_ref = self.get(reference).and_then(|n| n.prev_sibling);

        if let Some(child_node) = self.get_mut(child) {
            child_node.parent = Some(parent);
            child_node.prev_sibling = prev_of_ref;
            child_node.next_sibling = Some(reference);
        }
        if let Some(ref_node) = self.get_mut(reference) {
            ref_node.prev_sibling = Some(child);
        }
        match prev_of_ref {
            Some(prev_id) => {
                if let Some(prev_node) = self.get_mut(prev_id) {
                    prev_node.next_sibling = Some(child);
                }
            }
            None => {
                if let Some(parent_node) = self.get_mut(parent) {
                    parent_node.first_child = Some(child);
                }
            }
        }
    }

    /// Remove `child` from `parent`'s child list. No-op when the child does
    /// not actually belong to that parent.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) {
        let belongs = self
            .get(child)
            .map(|n| n.parent == Some(parent))
            .unwrap_or(false);
        if belongs {
            self.detach(child);
        }
    }

    /// Unlink a node from its parent without deallocating it. The node (and
    /// its subtree) stays addressable and can be re-attached.
    pub fn detach(&mut self, id: NodeId) {
        let (parent, prev, next) = match self.get(id) {
            Some(n) => (n.parent, n.prev_sibling, n.next_sibling),
            None => return,
        };

        if let Some(prev_id) = prev
            && let Some(prev_node) = self.get_mut(prev_id)
        {
            prev_node.next_sibling = next;
        }
        if let Some(next_id) = next
            && let Some(next_node) = self.get_mut(next_id)
        {
            next_node.prev_sibling = prev;
        }
        if let Some(parent_id) = parent
            && let Some(parent_node) = self.get_mut(parent_id)
        {
            if parent_node.first_child == Some(id) {
                parent_node.first_child = next;
            }
            if parent_node.last_child == Some(id) {
                parent_node.last_child = prev;
            }
        }
        if let Some(node) = self.get_mut(id) {
            node.parent = None;
            node.prev_sibling = None;
            node.next_sibling = None;
        }
    }

    /// Detach every child of `parent`.
    pub fn remove_children(&mut self, parent: NodeId) {
        while let Some(first) = self.get(parent).and_then(|n| n.first_child) {
            self.detach(first);
        }
    }

    // =======================================================================
    // Traversal
    // =======================================================================

    /// Immediate children of `parent` in document order, as a snapshot.
    pub fn children(&self, parent: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut cursor = self.get(parent).and_then(|n| n.first_child);
        while let Some(id) = cursor {
            out.push(id);
            cursor = self.get(id).and_then(|n| n.next_sibling);
        }
        out
    }

    /// Immediate element children of `parent`, skipping text and comments.
    pub fn element_children(&self, parent: NodeId) -> Vec<NodeId> {
        self.children(parent)
            .into_iter()
            .filter(|&id| self.is_element(id))
            .collect()
    }

    /// All descendants of `id` in pre-order, not including `id` itself.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = Vec::new();
        for &child in self.children(id).iter().rev() {
            stack.push(child);
        }
        while let Some(current) = stack.pop() {
            out.push(current);
            for &child in self.children(current).iter().rev() {
                stack.push(child);
            }
        }
        out
    }

    /// Ancestor chain from the direct parent up to the root.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut cursor = self.get(id).and_then(|n| n.parent);
        while let Some(current) = cursor {
            out.push(current);
            cursor = self.get(current).and_then(|n| n.parent);
        }
        out
    }

    // =======================================================================
    // Element accessors
    // =======================================================================

    pub fn is_element(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(|n| n.is_element())
    }

    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.get(id)?.as_element().map(|e| e.tag_name.as_str())
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id)?.as_element()?.attr(name)
    }

    pub fn has_attr(&self, id: NodeId, name: &str) -> bool {
        self.attr(id, name).is_some()
    }

    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(el) = self.get_mut(id).and_then(|n| n.as_element_mut()) {
            el.set_attr(name, value);
        }
    }

    pub fn remove_attr(&mut self, id: NodeId, name: &str) {
        if let Some(el) = self.get_mut(id).and_then(|n| n.as_element_mut()) {
            el.remove_attr(name);
        }
    }

    // =======================================================================
    // Text content
    // =======================================================================

    /// Concatenated text of `id` and all its descendants, in document order.
    /// Empty string for missing handles.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        if let Some(NodeData::Text { text }) = self.get(id).map(|n| &n.data) {
            out.push_str(text);
        }
        for descendant in self.descendants(id) {
            if let Some(NodeData::Text { text }) = self.get(descendant).map(|n| &n.data) {
                out.push_str(text);
            }
        }
        out
    }

    /// Replace all children of `id` with a single text node holding `text`.
    /// An empty string leaves the node childless.
    pub fn set_text_content(&mut self, id: NodeId, text: &str) {
        if self.get(id).is_none() {
            return;
        }
        self.remove_children(id);
        if !text.is_empty() {
            let text_node = self.create_text(text);
            self.append_child(id, text_node);
        }
    }

    // =======================================================================
    // Markup
    // =======================================================================

    /// Parse `markup` and append the resulting nodes as the last children of
    /// `parent`, keeping existing children. Equivalent to an insert-adjacent
    /// "beforeend". Malformed markup takes the tokenizer's recovery path.
    pub fn append_markup(&mut self, parent: NodeId, markup: &str) {
        if self.get(parent).is_none() {
            return;
        }
        build_fragment(self, parent, tokenize(markup));
    }
}
