//! Tri-state checkbox value.

use serde::{Deserialize, Serialize};

/// Selection state for a node in the area tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CheckState {
    /// Nothing in the subtree is selected
    #[default]
    Unchecked,
    /// The node and every descendant are selected
    Checked,
    /// Some but not all descendants are selected
    Indeterminate,
}

impl CheckState {
    /// `Checked` for true, `Unchecked` for false.
    pub fn from_bool(checked: bool) -> Self {
        if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }

    pub fn is_checked(self) -> bool {
        self == CheckState::Checked
    }

    /// Derive a parent's state from its children's states.
    ///
    /// `Checked` when every child is checked, `Unchecked` when every child is
    /// unchecked, `Indeterminate` otherwise. An empty iterator yields `None`:
    /// a leaf keeps its own state.
    pub fn from_children<I>(children: I) -> Option<Self>
    where
        I: IntoIterator<Item = CheckState>,
    {
        let mut any = false;
        let mut all_checked = true;
        let mut all_unchecked = true;

        for state in children {
            any = true;
            all_checked &= state == CheckState::Checked;
            all_unchecked &= state == CheckState::Unchecked;
            if !all_checked && !all_unchecked {
                return Some(CheckState::Indeterminate);
            }
        }

        if !any {
            None
        } else if all_checked {
            Some(CheckState::Checked)
        } else {
            Some(CheckState::Unchecked)
        }
    }
}
