//! Input boundary: raw area records, shape normalization and forest
//! construction.

mod builder;
mod files;
mod raw;

pub use builder::build_forest;
pub use files::{load_areas, load_selected_ids, parse_areas, parse_selected_ids};
pub use raw::{RawArea, RawChildren};
