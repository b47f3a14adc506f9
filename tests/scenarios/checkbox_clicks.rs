//! Scenario: Operator clicks through the area tree
//!
//! Journey: Operator builds a partner's area access by clicking checkboxes.
//!
//! Success Criteria:
//! - Parents follow their children (checked, unchecked, indeterminate)
//! - Clicking a parent forces its whole subtree
//! - Clicking a partially selected parent selects everything under it

use areatree::{build_forest, CheckState};

use crate::common::*;

/// SCENARIO: Ticking one district marks the region as partial
#[test]
fn scenario_tick_one_district() {
    let mut forest = build_forest(two_leaves(), Vec::<String>::new());

    forest.toggle_by_id("B").unwrap();

    assert_eq!(state(&forest, "B"), CheckState::Checked);
    assert_eq!(state(&forest, "A"), CheckState::Indeterminate);
    assert_eq!(state(&forest, "C"), CheckState::Unchecked);
}

/// SCENARIO: Ticking the remaining district completes the region
#[test]
fn scenario_tick_every_district() {
    let mut forest = build_forest(two_leaves(), Vec::<String>::new());
    forest.toggle_by_id("B").unwrap();

    forest.toggle_by_id("C").unwrap();

    assert_eq!(state(&forest, "B"), CheckState::Checked);
    assert_eq!(state(&forest, "C"), CheckState::Checked);
    assert_eq!(state(&forest, "A"), CheckState::Checked);
}

/// SCENARIO: Unticking a fully selected region clears its districts
#[test]
fn scenario_untick_full_region() {
    let mut forest = build_forest(two_leaves(), Vec::<String>::new());
    forest.toggle_by_id("B").unwrap();
    forest.toggle_by_id("C").unwrap();

    forest.toggle_by_id("A").unwrap();

    assert_eq!(state(&forest, "A"), CheckState::Unchecked);
    assert_eq!(state(&forest, "B"), CheckState::Unchecked);
    assert_eq!(state(&forest, "C"), CheckState::Unchecked);
}

/// SCENARIO: A saved district restores partial ancestors
#[test]
fn scenario_restore_saved_district() {
    let forest = build_forest(nested(), ["D"]);

    assert_eq!(state(&forest, "D"), CheckState::Checked);
    assert_eq!(state(&forest, "E"), CheckState::Unchecked);
    assert_eq!(state(&forest, "B"), CheckState::Indeterminate);
    assert_eq!(state(&forest, "A"), CheckState::Indeterminate);
}

/// SCENARIO: Submitting lists only the explicitly checked district
#[test]
fn scenario_submit_saved_district() {
    let forest = build_forest(nested(), ["D"]);

    assert_eq!(forest.all_selected_ids(), vec!["D".to_string()]);
}

/// SCENARIO: Clicking a partial region selects everything under it
#[test]
fn scenario_click_partial_region() {
    let mut forest = build_forest(nested(), ["D"]);

    let new_state = forest.toggle_by_id("B").unwrap();

    assert_eq!(new_state, CheckState::Checked);
    assert_eq!(state(&forest, "B"), CheckState::Checked);
    assert_eq!(state(&forest, "D"), CheckState::Checked);
    assert_eq!(state(&forest, "E"), CheckState::Checked);
    assert_eq!(state(&forest, "A"), CheckState::Checked);
    assert_eq!(forest.all_selected_ids(), vec!["A", "B", "D", "E"]);
}
