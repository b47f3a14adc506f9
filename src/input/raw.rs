//! Raw area records as supplied by the area-hierarchy data source
//!
//! The child collection of a record arrives in more than one shape: usually
//! an ordered list, sometimes an object keyed by area id. [`RawChildren`]
//! captures those shapes and [`RawChildren::into_sequence`] turns each into
//! one ordered list before the builder walks it.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tracing::warn;

use crate::domain::SelectionForest;

/// One area record with its nested children
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawArea {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,

    #[serde(default, deserialize_with = "name_lenient")]
    pub name: String,

    #[serde(default, alias = "areas")]
    pub children: RawChildren,
}

impl RawArea {
    /// Create a leaf record
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            children: RawChildren::Absent,
        }
    }

    /// Replace the children with an ordered list
    pub fn with_children(mut self, children: Vec<RawArea>) -> Self {
        self.children = RawChildren::Sequence(children);
        self
    }

    /// Export the shape of a forest (selection state is not included).
    pub fn from_forest(forest: &SelectionForest) -> Vec<RawArea> {
        fn export(forest: &SelectionForest, id: crate::domain::NodeId) -> RawArea {
            let node = forest.node(id);
            let children = node
                .children()
                .iter()
                .map(|&child| export(forest, child))
                .collect();
            RawArea::new(node.id(), node.name()).with_children(children)
        }

        forest
            .roots()
            .iter()
            .map(|&root| export(forest, root))
            .collect()
    }
}

/// Child collection of a raw record, in whichever shape the source sent
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawChildren {
    /// Field missing or `null`
    #[default]
    Absent,
    /// Ordered list of records
    Sequence(Vec<RawArea>),
    /// Mapping of key to record, in document order
    Keyed(Vec<(String, RawArea)>),
    /// Anything else (a string, a number, ...)
    Malformed,
}

impl RawChildren {
    /// Interpret an arbitrary JSON value as a child collection.
    ///
    /// Records inside a list or mapping that do not parse are dropped; the
    /// rest of the collection survives.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => RawChildren::Absent,
            Value::Array(items) => {
                RawChildren::Sequence(items.into_iter().filter_map(parse_record).collect())
            }
            Value::Object(entries) => RawChildren::Keyed(
                entries
                    .into_iter()
                    .filter_map(|(key, item)| parse_record(item).map(|area| (key, area)))
                    .collect(),
            ),
            other => {
                warn!(kind = value_kind(&other), "ignoring malformed child collection");
                RawChildren::Malformed
            }
        }
    }

    /// Normalize to an ordered list of records
    pub fn into_sequence(self) -> Vec<RawArea> {
        match self {
            RawChildren::Absent | RawChildren::Malformed => Vec::new(),
            RawChildren::Sequence(items) => items,
            RawChildren::Keyed(entries) => entries.into_iter().map(|(_, area)| area).collect(),
        }
    }

    /// Borrowing view of the normalized records
    pub fn iter(&self) -> Box<dyn Iterator<Item = &RawArea> + '_> {
        match self {
            RawChildren::Absent | RawChildren::Malformed => Box::new(std::iter::empty()),
            RawChildren::Sequence(items) => Box::new(items.iter()),
            RawChildren::Keyed(entries) => Box::new(entries.iter().map(|(_, area)| area)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

impl<'de> Deserialize<'de> for RawChildren {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(RawChildren::from_value)
    }
}

impl Serialize for RawChildren {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

fn parse_record(value: Value) -> Option<RawArea> {
    match serde_json::from_value::<RawArea>(value) {
        Ok(area) => Some(area),
        Err(err) => {
            warn!(error = %err, "dropping malformed area record");
            None
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdDe {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match IdDe::deserialize(deserializer)? {
        IdDe::Text(id) => id,
        IdDe::Number(id) => id.to_string(),
    })
}

/// Display label only: `null` or an odd type must not cost the record.
fn name_lenient<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(name) => name,
        Value::Number(name) => name.to_string(),
        Value::Bool(name) => name.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}
