//! Selection forest - arena of area nodes
//!
//! Nodes live in a single `Vec` and reference each other by [`NodeId`].
//! Children are owned through the child index list, parents are a plain
//! back-index, so there are no reference cycles and walking to the root is
//! O(depth).
//!
//! The shape is fixed once the builder hands the forest out; afterwards only
//! `checked` values change (see `propagation`).

use std::collections::HashMap;

use super::node::{NodeId, SelectionNode};
use super::state::CheckState;

/// An ordered collection of independent area trees
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionForest {
    nodes: Vec<SelectionNode>,
    roots: Vec<NodeId>,
    index: HashMap<String, NodeId>,
}

impl SelectionForest {
    /// Create an empty forest
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of nodes across all trees
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level areas in input order
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Borrow a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this forest.
    pub fn node(&self, id: NodeId) -> &SelectionNode {
        match self.nodes.get(id.0) {
            Some(node) => node,
            None => panic!(
                "node handle {} does not belong to this forest ({} nodes)",
                id.0,
                self.nodes.len()
            ),
        }
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut SelectionNode {
        let len = self.nodes.len();
        match self.nodes.get_mut(id.0) {
            Some(node) => node,
            None => panic!(
                "node handle {} does not belong to this forest ({} nodes)",
                id.0, len
            ),
        }
    }

    /// Look up a node by area id
    pub fn find(&self, area_id: &str) -> Option<NodeId> {
        self.index.get(area_id).copied()
    }

    pub fn contains(&self, area_id: &str) -> bool {
        self.index.contains_key(area_id)
    }

    /// Current state of a node
    pub fn state(&self, id: NodeId) -> CheckState {
        self.node(id).checked
    }

    /// Current state of the node with the given area id, if present
    pub fn state_of(&self, area_id: &str) -> Option<CheckState> {
        self.find(area_id).map(|id| self.state(id))
    }

    /// Ancestors of `id`, nearest first, ending at the root
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            forest: self,
            next: self.node(id).parent,
        }
    }

    /// Depth of a node (roots are 0)
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count()
    }

    /// Pre-order walk of the subtree rooted at `id`
    pub fn subtree(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            out.push(current);
            // Reverse so the first child is visited first.
            stack.extend(self.node(current).children.iter().rev().copied());
        }
        out
    }

    /// Pre-order walk of every tree, roots in order
    pub fn depth_first(&self) -> Vec<NodeId> {
        self.roots
            .iter()
            .flat_map(|&root| self.subtree(root))
            .collect()
    }

    /// Nodes whose state disagrees with the tri-state rule.
    ///
    /// A leaf may not be `Indeterminate`; a parent must equal the state
    /// derived from its children. An empty result means the forest is
    /// consistent.
    pub fn inconsistencies(&self) -> Vec<NodeId> {
        self.depth_first()
            .into_iter()
            .filter(|&id| {
                let node = self.node(id);
                match self.derived_state(id) {
                    Some(expected) => node.checked != expected,
                    None => node.checked == CheckState::Indeterminate,
                }
            })
            .collect()
    }

    /// State implied by the node's children (`None` for leaves)
    pub(crate) fn derived_state(&self, id: NodeId) -> Option<CheckState> {
        CheckState::from_children(
            self.node(id)
                .children
                .iter()
                .map(|&child| self.node(child).checked),
        )
    }

    /// Append a node and link it under `parent` (or as a new root).
    ///
    /// Callers must check `contains` first; ids stay unique.
    pub(crate) fn push_node(
        &mut self,
        area_id: impl Into<String>,
        name: impl Into<String>,
        checked: CheckState,
        parent: Option<NodeId>,
    ) -> NodeId {
        let area_id = area_id.into();
        debug_assert!(
            !self.index.contains_key(&area_id),
            "duplicate area id '{area_id}'"
        );

        let id = NodeId(self.nodes.len());
        self.index.insert(area_id.clone(), id);
        self.nodes
            .push(SelectionNode::new(area_id, name, checked, parent));

        match parent {
            Some(parent) => self.node_mut(parent).children.push(id),
            None => self.roots.push(id),
        }

        id
    }
}

/// Iterator over a node's ancestors, nearest first
pub struct Ancestors<'a> {
    forest: &'a SelectionForest,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.forest.node(current).parent;
        Some(current)
    }
}
