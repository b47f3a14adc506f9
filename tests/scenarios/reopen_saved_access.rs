//! Scenario: Reopen a partner's saved area access
//!
//! Journey: Operator opens an existing partner, adjusts areas, saves.
//!
//! Steps:
//! 1. Area hierarchy arrives from the API in mixed shapes
//! 2. Saved access is restored into the tree
//! 3. Operator adjusts the selection or switches to whole-hierarchy mode
//! 4. Form submits the new access payload
//!
//! Success Criteria:
//! - Mixed child shapes and corrupt records do not break the tree
//! - Restored selection shows partial countries
//! - Submission round-trips into the same tree on the next edit

use areatree::input::parse_areas;
use areatree::{AccessSession, AreaAccess, CheckState, SelectionMode};

use crate::common::*;

fn saved(ids: &[&str]) -> AreaAccess {
    AreaAccess::Specific {
        area_ids: ids.iter().map(|id| id.to_string()).collect(),
    }
}

/// SCENARIO: Mixed array/object children load in document order
#[test]
fn scenario_mixed_shapes_load() {
    let session = AccessSession::new(parse_areas(AREAS_JSON).unwrap(), &AreaAccess::All);
    let forest = session.forest();

    assert_eq!(forest.len(), 8);
    let ukraine = forest.find("UA").unwrap();
    let regions: Vec<&str> = forest
        .node(ukraine)
        .children()
        .iter()
        .map(|&id| forest.node(id).id())
        .collect();
    assert_eq!(regions, vec!["UA05", "UA07"]);
    assert!(forest.node(forest.find("UA07").unwrap()).is_leaf());
}

/// SCENARIO: Saved districts restore as partial countries
#[test]
fn scenario_restore_and_adjust() {
    let mut session = AccessSession::new(
        parse_areas(AREAS_JSON).unwrap(),
        &saved(&["AF0101", "UA05", "REMOVED01"]),
    );

    assert_eq!(session.mode(), SelectionMode::SpecificAreas);
    assert_eq!(state(session.forest(), "AF01"), CheckState::Indeterminate);
    assert_eq!(state(session.forest(), "AF"), CheckState::Indeterminate);
    assert_eq!(state(session.forest(), "UA"), CheckState::Indeterminate);

    // Complete Ukraine, drop Kabul City.
    session.toggle("UA07").unwrap();
    session.toggle("AF0101").unwrap();

    assert_eq!(state(session.forest(), "UA"), CheckState::Checked);
    assert_eq!(state(session.forest(), "AF"), CheckState::Unchecked);
    assert_eq!(session.submission(), saved(&["UA", "UA05", "UA07"]));
    assert_eq!(session.covering_submission(), saved(&["UA"]));
}

/// SCENARIO: Submission reopens to the same tree
#[test]
fn scenario_submission_round_trips() {
    let mut session = AccessSession::new(parse_areas(AREAS_JSON).unwrap(), &AreaAccess::All);
    session.toggle("AF01").unwrap();
    session.toggle("UA05").unwrap();
    let submitted = session.submission();

    let reopened = AccessSession::new(parse_areas(AREAS_JSON).unwrap(), &submitted);

    assert_eq!(reopened.forest(), session.forest());
    assert_eq!(reopened.submission(), submitted);
}

/// SCENARIO: Switching to whole hierarchy discards ticks
#[test]
fn scenario_switch_to_whole_hierarchy() {
    let mut session =
        AccessSession::new(parse_areas(AREAS_JSON).unwrap(), &saved(&["AF02", "UA05"]));

    session.set_mode(SelectionMode::WholeHierarchy);

    assert_eq!(session.submission(), AreaAccess::All);
    assert!(session.forest().all_selected_ids().is_empty());
    assert!(session.forest().inconsistencies().is_empty());
}
