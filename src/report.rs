//! Plain-text output for the CLI

use crate::config::OutputFormat;
use crate::domain::{CheckState, SelectionForest};

/// Format a list of area ids for stdout, trailing newline included.
///
/// `Lines` output for an empty list is empty.
pub fn format_ids(ids: &[String], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            // A Vec<String> always serializes.
            let array = serde_json::to_string(ids).unwrap_or_else(|_| "[]".to_string());
            format!("{array}\n")
        }
        OutputFormat::Lines => ids.iter().map(|id| format!("{id}\n")).collect(),
    }
}

/// Per-root selection summary, one line per top-level area
pub fn summary(forest: &SelectionForest) -> String {
    let mut out = String::new();
    for &root in forest.roots() {
        let node = forest.node(root);
        let marker = match node.checked() {
            CheckState::Checked => "[x]",
            CheckState::Unchecked => "[ ]",
            CheckState::Indeterminate => "[-]",
        };
        out.push_str(&format!(
            "{} {} ({}): {}/{} areas\n",
            marker,
            node.name(),
            node.id(),
            forest.selected_count(root),
            forest.total_count(root)
        ));
    }
    out
}
