//! Entrant data structure: the engine's view of a team or player.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an entrant (used in fixtures and lookups).
pub type EntrantId = Uuid;

/// A tournament entrant. The engine reads the id, name and optional group
/// label and never mutates any other field the application may attach.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Entrant {
    pub id: EntrantId,
    pub name: String,
    /// Pre-seeded group label (e.g. "Group A"). When every entrant carries
    /// one, the partitioner groups by label instead of shuffling.
    pub group: Option<String>,
}

impl Entrant {
    /// Create a new entrant with the given name and no group label.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            group: None,
        }
    }

    /// Create a new entrant already assigned to a group.
    pub fn with_group(name: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            group: Some(group.into()),
            ..Self::new(name)
        }
    }
}
