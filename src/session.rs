//! Access editing session
//!
//! Owns one selection forest for the lifetime of a form edit. The form
//! offers two modes: the partner gets the whole hierarchy, or only the
//! areas ticked in the tree. Switching back to the whole hierarchy clears
//! every tick so a later switch starts fresh.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{CheckState, SelectionForest};
use crate::error::AreaTreeResult;
use crate::input::{build_forest, RawArea};

/// Submitted area access for a partner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum AreaAccess {
    /// Every area in the hierarchy
    All,
    /// Only the listed areas
    Specific {
        #[serde(default)]
        area_ids: Vec<String>,
    },
}

impl AreaAccess {
    /// Explicit area ids (empty for whole-hierarchy access)
    pub fn area_ids(&self) -> &[String] {
        match self {
            AreaAccess::All => &[],
            AreaAccess::Specific { area_ids } => area_ids,
        }
    }
}

/// How the operator is granting access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    WholeHierarchy,
    SpecificAreas,
}

/// Form-editing session over one area forest
#[derive(Debug, Clone)]
pub struct AccessSession {
    forest: SelectionForest,
    mode: SelectionMode,
}

impl AccessSession {
    /// Start a session from the hierarchy and the previously saved access
    pub fn new<A>(raw_areas: A, saved: &AreaAccess) -> Self
    where
        A: IntoIterator<Item = RawArea>,
    {
        let mode = match saved {
            AreaAccess::All => SelectionMode::WholeHierarchy,
            AreaAccess::Specific { .. } => SelectionMode::SpecificAreas,
        };
        Self {
            forest: build_forest(raw_areas, saved.area_ids()),
            mode,
        }
    }

    pub fn forest(&self) -> &SelectionForest {
        &self.forest
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Switch mode; leaving for the whole hierarchy clears the tree.
    pub fn set_mode(&mut self, mode: SelectionMode) {
        if mode == SelectionMode::WholeHierarchy && self.mode != mode {
            self.forest.clear_forest();
        }
        debug!(from = ?self.mode, to = ?mode, "selection mode changed");
        self.mode = mode;
    }

    /// Click an area checkbox. Ticking an area implies specific-area mode.
    pub fn toggle(&mut self, area_id: &str) -> AreaTreeResult<CheckState> {
        let state = self.forest.toggle_by_id(area_id)?;
        self.mode = SelectionMode::SpecificAreas;
        Ok(state)
    }

    /// Payload for the form submission, listing every checked area
    pub fn submission(&self) -> AreaAccess {
        match self.mode {
            SelectionMode::WholeHierarchy => AreaAccess::All,
            SelectionMode::SpecificAreas => AreaAccess::Specific {
                area_ids: self.forest.all_selected_ids(),
            },
        }
    }

    /// Payload listing only the topmost checked areas
    pub fn covering_submission(&self) -> AreaAccess {
        match self.mode {
            SelectionMode::WholeHierarchy => AreaAccess::All,
            SelectionMode::SpecificAreas => AreaAccess::Specific {
                area_ids: self.forest.minimal_covering_ids(),
            },
        }
    }

    /// End the session and hand back the forest
    pub fn into_forest(self) -> SelectionForest {
        self.forest
    }
}
