//! Domain Layer
//!
//! The tri-state selection model, with no I/O.
//!
//! ## Structure
//!
//! - `state` - `CheckState` and the rule deriving a parent from its children
//! - `node` - `SelectionNode` and `NodeId` handles
//! - `forest` - the arena holding every node of every tree
//! - `propagation` - toggle, downward and upward passes, clearing
//! - `extract` - selected id lists and leaf counts

mod extract;
mod forest;
mod node;
mod propagation;
mod state;

pub use forest::{Ancestors, SelectionForest};
pub use node::{NodeId, SelectionNode};
pub use state::CheckState;
