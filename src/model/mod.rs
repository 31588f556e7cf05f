//! Mutable document tree.
//!
//! The tree is arena-allocated: all nodes live in a contiguous vector and
//! parent/child/sibling links are indices into it. Detaching or reparenting
//! a node rewires links without moving the node, so [`NodeId`]s stay valid
//! (and stable) across every mutation the engine performs.
//!
//! The tree also maintains an index from the `Id` attribute to [`NodeId`],
//! which is how reference targets are recognized as internal. `Id` values
//! are a caller contract: they must be unique per document. On duplicate
//! ids the index is last-write-wins and resolution behavior is unspecified.

mod node;

pub use node::{Attr, Node, NodeId, NodeKind};

use std::collections::HashMap;

/// An ordered, mutable tree of typed document nodes.
#[derive(Debug, Clone, Default)]
pub struct DocTree {
    /// All nodes in the arena (index 0 is always the root).
    nodes: Vec<Node>,
    /// Map from `Id` attribute to node for fast target lookup.
    id_map: HashMap<String, NodeId>,
}

impl DocTree {
    /// Create a new empty tree with a root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::Root)],
            id_map: HashMap::new(),
        }
    }

    /// Get the root node ID.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a new element node of the given kind (unattached).
    pub fn create_element(&mut self, kind: NodeKind) -> NodeId {
        self.alloc(Node::new(kind))
    }

    /// Create a new leaf text node (unattached).
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.alloc(Node::text(text))
    }

    /// Get a node by ID.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        if id.is_none() {
            return None;
        }
        self.nodes.get(id.0 as usize)
    }

    /// Get a mutable node by ID.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if id.is_none() {
            return None;
        }
        self.nodes.get_mut(id.0 as usize)
    }

    /// Get the kind of a node.
    pub fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.node(id).map(|n| n.kind)
    }

    /// Retag a node with a new kind, preserving identity and children.
    pub fn set_kind(&mut self, id: NodeId, kind: NodeKind) {
        if let Some(node) = self.node_mut(id) {
            node.kind = kind;
        }
    }

    /// Get the parent of a node.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).map(|n| n.parent).filter(NodeId::is_some)
    }

    /// Get the first child of a node.
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).map(|n| n.first_child).filter(NodeId::is_some)
    }

    /// Get the next sibling of a node.
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.node(id)
            .map(|n| n.next_sibling)
            .filter(NodeId::is_some)
    }

    /// Get the number of nodes in the arena (detached nodes included).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // --- attributes ---

    /// Get a string attribute of a node.
    pub fn attr(&self, id: NodeId, attr: Attr) -> Option<&str> {
        self.node(id)?
            .attrs
            .iter()
            .find(|(a, _)| *a == attr)
            .map(|(_, v)| v.as_str())
    }

    /// Set a string attribute on a node, replacing any previous value.
    ///
    /// Setting [`Attr::Id`] also registers the node in the id index.
    pub fn set_attr(&mut self, id: NodeId, attr: Attr, value: impl Into<String>) {
        let value = value.into();
        if attr == Attr::Id {
            self.id_map.insert(value.clone(), id);
        }
        let Some(node) = self.node_mut(id) else {
            return;
        };
        if let Some(slot) = node.attrs.iter_mut().find(|(a, _)| *a == attr) {
            slot.1 = value;
        } else {
            node.attrs.push((attr, value));
        }
    }

    /// Remove an attribute from a node, returning its previous value.
    pub fn remove_attr(&mut self, id: NodeId, attr: Attr) -> Option<String> {
        let node = self.node_mut(id)?;
        let pos = node.attrs.iter().position(|(a, _)| *a == attr)?;
        let (_, value) = node.attrs.remove(pos);
        if attr == Attr::Id && self.id_map.get(&value) == Some(&id) {
            self.id_map.remove(&value);
        }
        Some(value)
    }

    /// Look up a node by its `Id` attribute.
    pub fn node_by_id(&self, id: &str) -> Option<NodeId> {
        self.id_map.get(id).copied()
    }

    // --- structure mutation ---

    /// Append a child as the last child of a parent.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        let last_child = self
            .node(parent)
            .map(|n| n.last_child)
            .unwrap_or(NodeId::NONE);

        if let Some(child_node) = self.node_mut(child) {
            child_node.parent = parent;
            child_node.prev_sibling = last_child;
            child_node.next_sibling = NodeId::NONE;
        }

        if last_child.is_some() {
            if let Some(last_node) = self.node_mut(last_child) {
                last_node.next_sibling = child;
            }
        }

        if let Some(parent_node) = self.node_mut(parent) {
            if parent_node.first_child.is_none() {
                parent_node.first_child = child;
            }
            parent_node.last_child = child;
        }
    }

    /// Insert a node immediately before a sibling.
    pub fn insert_before(&mut self, sibling: NodeId, new_node: NodeId) {
        let parent = self.node(sibling).map(|n| n.parent).unwrap_or(NodeId::NONE);
        let prev = self
            .node(sibling)
            .map(|n| n.prev_sibling)
            .unwrap_or(NodeId::NONE);

        if let Some(new) = self.node_mut(new_node) {
            new.parent = parent;
            new.prev_sibling = prev;
            new.next_sibling = sibling;
        }

        if let Some(sib) = self.node_mut(sibling) {
            sib.prev_sibling = new_node;
        }

        if prev.is_some() {
            if let Some(p) = self.node_mut(prev) {
                p.next_sibling = new_node;
            }
        } else if let Some(par) = self.node_mut(parent) {
            par.first_child = new_node;
        }
    }

    /// Detach a node from its parent, keeping the node (and its subtree)
    /// alive in the arena so it can be reparented.
    pub fn detach(&mut self, id: NodeId) {
        let Some(node) = self.node(id) else {
            return;
        };
        let (parent, prev, next) = (node.parent, node.prev_sibling, node.next_sibling);

        if prev.is_some() {
            if let Some(p) = self.node_mut(prev) {
                p.next_sibling = next;
            }
        } else if let Some(par) = self.node_mut(parent) {
            par.first_child = next;
        }

        if next.is_some() {
            if let Some(n) = self.node_mut(next) {
                n.prev_sibling = prev;
            }
        } else if let Some(par) = self.node_mut(parent) {
            par.last_child = prev;
        }

        if let Some(node) = self.node_mut(id) {
            node.parent = NodeId::NONE;
            node.prev_sibling = NodeId::NONE;
            node.next_sibling = NodeId::NONE;
        }
    }

    /// Detach all children of a node and return them in order.
    pub fn take_children(&mut self, parent: NodeId) -> Vec<NodeId> {
        let children: Vec<NodeId> = self.children(parent).collect();
        for &child in &children {
            self.detach(child);
        }
        children
    }

    // --- traversal ---

    /// Iterate over the children of a node.
    pub fn children(&self, parent: NodeId) -> ChildIter<'_> {
        let first = self
            .node(parent)
            .map(|n| n.first_child)
            .unwrap_or(NodeId::NONE);
        ChildIter {
            tree: self,
            current: first,
        }
    }

    /// Iterate over the element children of a node (text leaves skipped).
    pub fn element_children(&self, parent: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(parent)
            .filter(|&c| self.kind(c) != Some(NodeKind::Text))
    }

    /// Iterate over a subtree in depth-first pre-order (document order),
    /// starting with `start` itself.
    pub fn descendants(&self, start: NodeId) -> DfsIter<'_> {
        DfsIter {
            tree: self,
            stack: vec![start],
        }
    }

    /// Collect all nodes of one kind within a subtree, in document order.
    pub fn descendants_of_kind(&self, start: NodeId, kind: NodeKind) -> Vec<NodeId> {
        self.descendants(start)
            .filter(|&n| self.kind(n) == Some(kind))
            .collect()
    }

    /// Concatenate the text content of a subtree.
    pub fn collect_text(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text_into(id, &mut out);
        out
    }

    fn collect_text_into(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.node(id) else {
            return;
        };
        if node.kind == NodeKind::Text {
            out.push_str(&node.text);
        }
        for child in self.children(id) {
            self.collect_text_into(child, out);
        }
    }

    /// Get the text of a node's first [`NodeKind::Title`] child, if any.
    pub fn title_text(&self, id: NodeId) -> Option<String> {
        self.children(id)
            .find(|&c| self.kind(c) == Some(NodeKind::Title))
            .map(|t| self.collect_text(t))
    }
}

/// Iterator over children of a node.
pub struct ChildIter<'a> {
    tree: &'a DocTree,
    current: NodeId,
}

impl Iterator for ChildIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_none() {
            return None;
        }
        let current = self.current;
        self.current = self
            .tree
            .node(current)
            .map(|n| n.next_sibling)
            .unwrap_or(NodeId::NONE);
        Some(current)
    }
}

/// Depth-first pre-order iterator over a subtree.
pub struct DfsIter<'a> {
    tree: &'a DocTree,
    stack: Vec<NodeId>,
}

impl Iterator for DfsIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;

        // Push children in reverse order so they're visited left-to-right
        let mut children: Vec<NodeId> = self.tree.children(current).collect();
        children.reverse();
        self.stack.extend(children);

        Some(current)
    }
}
