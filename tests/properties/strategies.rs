//! Shared generators for property tests.

use proptest::prelude::*;

use areatree::{build_forest, CheckState, RawArea, SelectionForest};

/// Tree shape without ids; ids are assigned in pre-order afterwards.
#[derive(Debug, Clone)]
pub struct Shape(pub Vec<Shape>);

fn shape() -> impl Strategy<Value = Shape> {
    Just(Shape(Vec::new())).prop_recursive(4, 48, 4, |inner| {
        proptest::collection::vec(inner, 0..4).prop_map(Shape)
    })
}

/// A forest of up to four trees
pub fn forest_shape() -> impl Strategy<Value = Vec<Shape>> {
    proptest::collection::vec(shape(), 0..4)
}

/// Raw records with ids `n0`, `n1`, ... in pre-order
pub fn to_raw(shapes: &[Shape]) -> Vec<RawArea> {
    fn convert(shape: &Shape, counter: &mut usize) -> RawArea {
        let id = format!("n{}", *counter);
        *counter += 1;
        let children = shape.0.iter().map(|child| convert(child, counter)).collect();
        RawArea::new(id.clone(), format!("Area {id}")).with_children(children)
    }

    let mut counter = 0;
    shapes
        .iter()
        .map(|shape| convert(shape, &mut counter))
        .collect()
}

/// Picks used to choose selected ids and click targets
pub fn picks() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(any::<usize>(), 0..12)
}

/// Build a forest, choosing selected ids from `picks`
pub fn build_with_picks(shapes: &[Shape], picks: &[usize]) -> SelectionForest {
    let raw = to_raw(shapes);
    let total = count(shapes);
    let selected: Vec<String> = if total == 0 {
        Vec::new()
    } else {
        picks.iter().map(|p| format!("n{}", p % total)).collect()
    };
    build_forest(raw, selected)
}

/// Apply one click per pick, targeting nodes in pre-order
pub fn click_all(forest: &mut SelectionForest, picks: &[usize]) {
    let order = forest.depth_first();
    if order.is_empty() {
        return;
    }
    for pick in picks {
        forest.toggle(order[pick % order.len()]);
    }
}

/// States of every node in pre-order
pub fn states(forest: &SelectionForest) -> Vec<CheckState> {
    forest
        .depth_first()
        .into_iter()
        .map(|id| forest.state(id))
        .collect()
}

fn count(shapes: &[Shape]) -> usize {
    shapes.iter().map(|s| 1 + count(&s.0)).sum()
}
