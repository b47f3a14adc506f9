//! Forest construction from raw area records.
//!
//! Builds depth-first, marking each node from the previously selected ids,
//! then settles each root once its whole subtree exists so partially
//! selected regions surface as indeterminate at every level.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::domain::{CheckState, NodeId, SelectionForest};

use super::raw::RawArea;

/// Build a forest from raw records and a set of previously selected ids.
///
/// Ids in `selected_ids` that match no record are ignored. Interior states
/// are derived from the children once the root is built, so a selected
/// region id with no selected districts settles as unchecked. Records whose
/// id already appeared earlier are skipped together with their children.
pub fn build_forest<A, S>(raw_areas: A, selected_ids: S) -> SelectionForest
where
    A: IntoIterator<Item = RawArea>,
    S: IntoIterator,
    S::Item: AsRef<str>,
{
    let selected: HashSet<String> = selected_ids
        .into_iter()
        .map(|id| id.as_ref().to_string())
        .collect();

    let mut forest = SelectionForest::new();
    for raw in raw_areas {
        if let Some(root) = attach(&mut forest, raw, None, &selected) {
            forest.settle_subtree(root);
        }
    }

    let unknown = selected.iter().filter(|id| !forest.contains(id)).count();
    if unknown > 0 {
        debug!(unknown, "ignored selected ids missing from the hierarchy");
    }
    debug!(
        nodes = forest.len(),
        roots = forest.roots().len(),
        selected = selected.len() - unknown,
        "built selection forest"
    );

    forest
}

fn attach(
    forest: &mut SelectionForest,
    raw: RawArea,
    parent: Option<NodeId>,
    selected: &HashSet<String>,
) -> Option<NodeId> {
    if forest.contains(&raw.id) {
        warn!(area = %raw.id, "skipping duplicate area id");
        return None;
    }

    let checked = CheckState::from_bool(selected.contains(&raw.id));
    let node = forest.push_node(raw.id, raw.name, checked, parent);

    for child in raw.children.into_sequence() {
        attach(forest, child, Some(node), selected);
    }

    Some(node)
}
