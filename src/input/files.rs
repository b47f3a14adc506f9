//! Loading area hierarchies and saved selections from JSON files

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::AreaTreeResult;
use crate::session::AreaAccess;

use super::raw::{RawArea, RawChildren};

/// Parse an area hierarchy document.
///
/// The top level accepts the same shapes as a child collection: a list of
/// records or a keyed mapping. Anything else yields no areas.
pub fn parse_areas(content: &str) -> AreaTreeResult<Vec<RawArea>> {
    let value: Value = serde_json::from_str(content)?;
    Ok(RawChildren::from_value(value).into_sequence())
}

/// Read an area hierarchy from a JSON file
pub fn load_areas(path: &Path) -> AreaTreeResult<Vec<RawArea>> {
    let content = fs::read_to_string(path)?;
    parse_areas(&content)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SelectionDe {
    Ids(Vec<Value>),
    Access(AreaAccess),
}

/// Parse a saved selection.
///
/// Accepts a bare id list (`["UA01", 7]`) or a submitted [`AreaAccess`]
/// payload. Whole-hierarchy access carries no ids.
pub fn parse_selected_ids(content: &str) -> AreaTreeResult<Vec<String>> {
    Ok(match serde_json::from_str::<SelectionDe>(content)? {
        SelectionDe::Ids(values) => values
            .into_iter()
            .filter_map(|value| match value {
                Value::String(id) => Some(id),
                Value::Number(id) => Some(id.to_string()),
                _ => None,
            })
            .collect(),
        SelectionDe::Access(access) => access.area_ids().to_vec(),
    })
}

/// Read a saved selection from a JSON file
pub fn load_selected_ids(path: &Path) -> AreaTreeResult<Vec<String>> {
    let content = fs::read_to_string(path)?;
    parse_selected_ids(&content)
}
