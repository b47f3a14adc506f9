//! areatree - tri-state administrative area selection
//!
//! Models the checkbox tree an operator uses to grant a partner access to
//! part of a nested area hierarchy (country → region → district). Checking
//! a node checks its whole subtree; every ancestor is re-derived as checked,
//! unchecked or indeterminate. Trees are rebuilt from a saved flat id list
//! and serialized back to one.

pub mod config;
pub mod domain;
pub mod error;
pub mod input;
pub mod report;
pub mod session;

// Re-exports for convenience
pub use domain::{CheckState, NodeId, SelectionForest, SelectionNode};
pub use error::{AreaTreeError, AreaTreeResult};
pub use input::{build_forest, load_areas, load_selected_ids, RawArea, RawChildren};
pub use session::{AccessSession, AreaAccess, SelectionMode};
