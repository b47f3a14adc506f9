//! Selection extraction
//!
//! `selected_ids` returns every individually checked node, descendants of a
//! checked region included. Callers that want "just send the region id"
//! use [`SelectionForest::minimal_covering_ids`] instead.

use super::forest::SelectionForest;
use super::node::NodeId;

impl SelectionForest {
    /// Ids of every checked node under `node` (inclusive), in pre-order
    pub fn selected_ids(&self, node: NodeId) -> Vec<String> {
        self.subtree(node)
            .into_iter()
            .map(|id| self.node(id))
            .filter(|n| n.checked.is_checked())
            .map(|n| n.id.clone())
            .collect()
    }

    /// Ids of every checked node in the forest, in pre-order
    pub fn all_selected_ids(&self) -> Vec<String> {
        self.roots()
            .iter()
            .flat_map(|&root| self.selected_ids(root))
            .collect()
    }

    /// Topmost checked nodes only.
    ///
    /// Descendants of a checked node are implied and left out. Expanding
    /// each returned id downward reproduces the full checked set.
    pub fn minimal_covering_ids(&self) -> Vec<String> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.roots().iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            let node = self.node(current);
            if node.checked.is_checked() {
                out.push(node.id.clone());
            } else {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        out
    }

    /// Number of checked leaves under `node`
    pub fn selected_count(&self, node: NodeId) -> usize {
        self.subtree(node)
            .into_iter()
            .map(|id| self.node(id))
            .filter(|n| n.is_leaf() && n.checked.is_checked())
            .count()
    }

    /// Number of leaves under `node` (a leaf counts itself)
    pub fn total_count(&self, node: NodeId) -> usize {
        self.subtree(node)
            .into_iter()
            .filter(|&id| self.node(id).is_leaf())
            .count()
    }
}
