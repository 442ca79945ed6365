//! GenerationConfig and TournamentFormat: per-run settings for the engine.

use crate::models::error::GenerationError;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Tournament format the orchestrator generates fixtures for.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentFormat {
    /// Single round-robin league (1 or 2 legs per `legs_for_league`).
    #[default]
    League,
    /// Group stage followed by single-elimination knockout rounds.
    GroupKnockout,
    /// Group stage (two legs) followed by two-legged knockout rounds.
    GroupKnockoutTwoLegged,
}

impl TournamentFormat {
    /// Minimum entrant count for this format; below it generation is a
    /// configuration error, never a partial result.
    pub fn min_entrants(&self) -> usize {
        match self {
            TournamentFormat::League => 2,
            TournamentFormat::GroupKnockout | TournamentFormat::GroupKnockoutTwoLegged => 8,
        }
    }

    /// Whether knockout pairings in this format are played over two legs.
    pub fn two_legged_knockout(&self) -> bool {
        matches!(self, TournamentFormat::GroupKnockoutTwoLegged)
    }
}

/// Immutable per-run configuration for fixture generation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub format: TournamentFormat,
    /// First day fixtures may be scheduled on.
    pub start_date: NaiveDate,
    /// Last day fixtures may be scheduled on (inclusive).
    pub end_date: NaiveDate,
    /// When true, scheduling past `end_date` is a capacity error instead of
    /// a silently out-of-window fixture.
    pub respect_period: bool,
    /// Maximum fixtures per calendar day.
    pub matches_per_day: u32,
    /// Allowed kickoff times, cycled in declared order within a day.
    pub kickoff_times: Vec<NaiveTime>,
    /// Venue catalogue; one is drawn per fixture via the run's RNG.
    pub venues: Vec<String>,
    /// 1 (single round) or 2 (home-and-away); only meaningful for `League`.
    pub legs_for_league: u8,
    /// Minimum gap in days before the next round of a phase starts.
    pub rest_days_between_rounds: u32,
    /// Group count for group formats; derived from entrant count when None.
    pub groups_count: Option<usize>,
    /// How many entrants per group the application expects to advance.
    /// Advisory only: the engine never computes standings.
    pub advancing_per_group: usize,
    /// Seed for the run's random source; unseeded runs use entropy.
    pub seed: Option<u64>,
}

impl GenerationConfig {
    /// Create a config with the given format and date window, everything
    /// else at its defaults (one kickoff at 18:00, one venue, 2 matches per
    /// day, single leg, one rest day between rounds).
    pub fn new(format: TournamentFormat, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            format,
            start_date,
            end_date,
            respect_period: true,
            matches_per_day: 2,
            kickoff_times: vec![NaiveTime::from_hms_opt(18, 0, 0).unwrap_or_default()],
            venues: vec!["Main Venue".to_string()],
            legs_for_league: 1,
            rest_days_between_rounds: 1,
            groups_count: None,
            advancing_per_group: 2,
            seed: None,
        }
    }

    /// Check the scheduling parts of the config (venues, kickoff times, day
    /// cap, leg count). Knockout-round generation uses this directly since
    /// the format's entrant minimum does not apply to advancing entrants.
    pub fn validate_scheduling(&self) -> Result<(), GenerationError> {
        if self.venues.is_empty() {
            return Err(GenerationError::NoVenues);
        }
        if self.kickoff_times.is_empty() {
            return Err(GenerationError::NoKickoffTimes);
        }
        if self.matches_per_day == 0 {
            return Err(GenerationError::ZeroMatchesPerDay);
        }
        if !(1..=2).contains(&self.legs_for_league) {
            return Err(GenerationError::InvalidLegCount(self.legs_for_league));
        }
        Ok(())
    }

    /// Check the whole config against an entrant count. Runs before any
    /// fixture is produced; generation never emits partial output on a bad
    /// config.
    pub fn validate(&self, entrant_count: usize) -> Result<(), GenerationError> {
        self.validate_scheduling()?;
        let required = self.format.min_entrants();
        if entrant_count < required {
            return Err(GenerationError::NotEnoughEntrants {
                required,
                actual: entrant_count,
            });
        }
        Ok(())
    }

    /// Group count for `entrant_count` entrants: the explicit setting if
    /// given, otherwise the recommended split towards groups of 4.
    pub fn effective_groups(&self, entrant_count: usize) -> usize {
        self.groups_count
            .unwrap_or_else(|| recommended_group_count(entrant_count))
    }
}

/// Recommended group count by entrant count (target group size 4).
pub fn recommended_group_count(entrant_count: usize) -> usize {
    match entrant_count {
        0..=8 => 2,
        9..=12 => 3,
        13..=16 => 4,
        17..=24 => 6,
        _ => 8,
    }
}
