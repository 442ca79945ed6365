//! Fixture: the engine's sole output unit.

use crate::models::entrant::EntrantId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a fixture.
pub type FixtureId = Uuid;

/// Lifecycle status of a fixture. The engine only ever emits `Scheduled`;
/// the match-tracking side of the application moves fixtures onward.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixtureStatus {
    #[default]
    Scheduled,
    Played,
    Cancelled,
}

/// A single scheduled fixture: two entrants, a kickoff slot and a venue.
///
/// `round` is a display label such as "Matchday 3" or "Semifinal (Leg 1)";
/// `group` is set for group-phase fixtures (e.g. "Group A").
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: FixtureId,
    pub home: EntrantId,
    pub away: EntrantId,
    pub kickoff: NaiveDateTime,
    pub venue: String,
    pub round: String,
    pub group: Option<String>,
    pub status: FixtureStatus,
}

impl Fixture {
    pub fn new(
        home: EntrantId,
        away: EntrantId,
        kickoff: NaiveDateTime,
        venue: impl Into<String>,
        round: impl Into<String>,
        group: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            home,
            away,
            kickoff,
            venue: venue.into(),
            round: round.into(),
            group,
            status: FixtureStatus::Scheduled,
        }
    }
}
