//! Area node stored in a [`SelectionForest`](super::SelectionForest) arena.

use super::state::CheckState;

/// Handle to a node inside one forest.
///
/// Handles are plain indices: they are only meaningful for the forest that
/// issued them. Using a handle on another forest is a programming error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the forest arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// One administrative area in the selection tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionNode {
    /// Area identifier, unique within the forest
    pub(crate) id: String,
    /// Display label
    pub(crate) name: String,
    /// Current selection state
    pub(crate) checked: CheckState,
    /// Child handles in display order
    pub(crate) children: Vec<NodeId>,
    /// Parent handle (`None` for roots)
    pub(crate) parent: Option<NodeId>,
}

impl SelectionNode {
    pub(crate) fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        checked: CheckState,
        parent: Option<NodeId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            checked,
            children: Vec::new(),
            parent,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn checked(&self) -> CheckState {
        self.checked
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
