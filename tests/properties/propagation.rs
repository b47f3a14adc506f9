//! Property tests for toggle and propagation.

use proptest::prelude::*;

use areatree::CheckState;

use crate::strategies::{build_with_picks, click_all, forest_shape, picks, states};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every node matches the state derived from its children after
    /// building and after any sequence of clicks.
    #[test]
    fn property_tri_state_consistent_after_clicks(
        shapes in forest_shape(),
        selected in picks(),
        clicks in picks(),
    ) {
        let mut forest = build_with_picks(&shapes, &selected);
        prop_assert!(forest.inconsistencies().is_empty());

        click_all(&mut forest, &clicks);
        prop_assert!(forest.inconsistencies().is_empty());
    }

    /// PROPERTY: Forcing a subtree reaches every descendant.
    #[test]
    fn property_downward_pass_is_complete(
        shapes in forest_shape(),
        selected in picks(),
        target in any::<usize>(),
        check in any::<bool>(),
    ) {
        let mut forest = build_with_picks(&shapes, &selected);
        let order = forest.depth_first();
        prop_assume!(!order.is_empty());

        let node = order[target % order.len()];
        let state = if check { CheckState::Checked } else { CheckState::Unchecked };
        forest.set_checked_downward(node, state);

        for id in forest.subtree(node) {
            prop_assert_eq!(forest.state(id), state);
        }
    }

    /// PROPERTY: After an upward pass every ancestor agrees with its children.
    #[test]
    fn property_upward_pass_fixes_ancestors(
        shapes in forest_shape(),
        selected in picks(),
        target in any::<usize>(),
    ) {
        let mut forest = build_with_picks(&shapes, &selected);
        let order = forest.depth_first();
        prop_assume!(!order.is_empty());

        let node = order[target % order.len()];
        forest.set_checked_downward(node, CheckState::Checked);
        forest.recompute_upward(node);

        let stale = forest.inconsistencies();
        for ancestor in forest.ancestors(node) {
            prop_assert!(!stale.contains(&ancestor));
        }
    }

    /// PROPERTY: Clicking an indeterminate node always checks it.
    #[test]
    fn property_indeterminate_click_checks(
        shapes in forest_shape(),
        selected in picks(),
    ) {
        let mut forest = build_with_picks(&shapes, &selected);
        let partial: Vec<_> = forest
            .depth_first()
            .into_iter()
            .filter(|&id| forest.state(id) == CheckState::Indeterminate)
            .collect();

        for id in partial {
            if forest.state(id) == CheckState::Indeterminate {
                prop_assert_eq!(forest.toggle(id), CheckState::Checked);
                prop_assert_eq!(forest.state(id), CheckState::Checked);
            }
        }
    }

    /// PROPERTY: Clearing twice leaves everything unchecked both times.
    #[test]
    fn property_clear_is_idempotent(
        shapes in forest_shape(),
        selected in picks(),
    ) {
        let mut forest = build_with_picks(&shapes, &selected);

        forest.clear_forest();
        let first = states(&forest);
        forest.clear_forest();
        let second = states(&forest);

        prop_assert!(first.iter().all(|&s| s == CheckState::Unchecked));
        prop_assert_eq!(first, second);
    }
}
