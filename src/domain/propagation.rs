//! Selection propagation
//!
//! Two passes keep the tri-state rule intact after a click:
//!
//! - downward: force a whole subtree to `Checked` or `Unchecked`
//! - upward: re-derive every ancestor from its children
//!
//! [`SelectionForest::toggle`] is the single entry point for a checkbox
//! click and always runs both.

use tracing::{debug, trace};

use crate::error::{AreaTreeError, AreaTreeResult};

use super::forest::SelectionForest;
use super::node::NodeId;
use super::state::CheckState;

impl SelectionForest {
    /// Set `node` and every descendant to `state`.
    ///
    /// # Panics
    ///
    /// Panics if `state` is `Indeterminate`; a subtree can only be forced to
    /// a definite state.
    pub fn set_checked_downward(&mut self, node: NodeId, state: CheckState) {
        assert!(
            state != CheckState::Indeterminate,
            "cannot force a subtree to the indeterminate state"
        );

        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            let entry = self.node_mut(current);
            entry.checked = state;
            stack.extend(entry.children.iter().copied());
        }
        trace!(node = node.index(), ?state, "set subtree");
    }

    /// Re-derive every ancestor of `node` from its children, up to the root.
    ///
    /// # Panics
    ///
    /// Panics if a parent link disagrees with the parent's child list.
    pub fn recompute_upward(&mut self, node: NodeId) {
        let mut child = node;
        while let Some(parent) = self.node(child).parent {
            assert!(
                self.node(parent).children.contains(&child),
                "node {} names {} as parent but is not among its children",
                child.index(),
                parent.index()
            );

            if let Some(derived) = self.derived_state(parent) {
                trace!(node = parent.index(), state = ?derived, "recomputed");
                self.node_mut(parent).checked = derived;
            }
            child = parent;
        }
    }

    /// Handle a checkbox click on `node` and return its new state.
    ///
    /// An indeterminate node becomes checked together with its whole
    /// subtree; otherwise the node is inverted. Ancestors are recomputed
    /// afterwards.
    pub fn toggle(&mut self, node: NodeId) -> CheckState {
        let next = match self.state(node) {
            CheckState::Indeterminate | CheckState::Unchecked => CheckState::Checked,
            CheckState::Checked => CheckState::Unchecked,
        };

        self.set_checked_downward(node, next);
        self.recompute_upward(node);

        debug!(area = self.node(node).id(), state = ?next, "toggled");
        debug_assert!(
            self.ancestors(node)
                .all(|ancestor| Some(self.state(ancestor)) == self.derived_state(ancestor)),
            "ancestors inconsistent after toggle"
        );
        next
    }

    /// Toggle the node with the given area id.
    pub fn toggle_by_id(&mut self, area_id: &str) -> AreaTreeResult<CheckState> {
        let node = self.find(area_id).ok_or_else(|| AreaTreeError::UnknownArea {
            id: area_id.to_string(),
        })?;
        Ok(self.toggle(node))
    }

    /// Uncheck every node under `node` (inclusive).
    ///
    /// Ancestors are left untouched; apply to each root to reset a forest.
    pub fn clear_all(&mut self, node: NodeId) {
        self.set_checked_downward(node, CheckState::Unchecked);
    }

    /// Uncheck every node in every tree
    pub fn clear_forest(&mut self) {
        for root in self.roots().to_vec() {
            self.clear_all(root);
        }
        debug!(nodes = self.len(), "cleared forest");
    }

    /// Check every node in every tree
    pub fn select_forest(&mut self) {
        for root in self.roots().to_vec() {
            self.set_checked_downward(root, CheckState::Checked);
        }
        debug!(nodes = self.len(), "selected forest");
    }

    /// Re-derive every interior node under `root` from the leaves up.
    ///
    /// Used once per root after construction, when leaf states are known
    /// but intermediate states have not been derived yet.
    pub(crate) fn settle_subtree(&mut self, root: NodeId) {
        // Reverse pre-order visits every child before its parent.
        for id in self.subtree(root).into_iter().rev() {
            if let Some(derived) = self.derived_state(id) {
                self.node_mut(id).checked = derived;
            }
        }
    }
}
