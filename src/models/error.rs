//! Errors that can occur during fixture generation.

use crate::models::entrant::EntrantId;
use chrono::NaiveDate;

/// Errors returned by the generation operations. Configuration errors are
/// caught before any fixture is produced; capacity errors mean the date
/// window cannot hold the required fixtures.
#[derive(Clone, Debug, PartialEq)]
pub enum GenerationError {
    /// The venue catalogue is empty.
    NoVenues,
    /// The kickoff-time catalogue is empty.
    NoKickoffTimes,
    /// `matches_per_day` must be at least 1.
    ZeroMatchesPerDay,
    /// `legs_for_league` must be 1 or 2.
    InvalidLegCount(u8),
    /// Too few entrants for the requested format.
    NotEnoughEntrants { required: usize, actual: usize },
    /// Two entrants share the same id.
    DuplicateEntrantId(EntrantId),
    /// Group count is zero or exceeds the entrant count.
    InvalidGroupCount { groups: usize, entrants: usize },
    /// Knockout rounds need a power-of-two entrant count (at least 2).
    BracketNotPowerOfTwo { entrants: usize },
    /// The date window ends before all fixtures could be placed.
    WindowExceeded { end: NaiveDate },
    /// Slot search gave up after the bounded number of day advances.
    SlotSearchExhausted { attempts: u32 },
    /// Internal consistency check: a pair of entrants met more than once
    /// in a single round robin. Never expected in production use.
    DuplicatePairing { a: EntrantId, b: EntrantId },
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationError::NoVenues => write!(f, "No venues configured; add at least one venue"),
            GenerationError::NoKickoffTimes => {
                write!(f, "No kickoff times configured; add at least one kickoff time")
            }
            GenerationError::ZeroMatchesPerDay => {
                write!(f, "Matches per day must be at least 1")
            }
            GenerationError::InvalidLegCount(legs) => {
                write!(f, "League legs must be 1 or 2 (got {})", legs)
            }
            GenerationError::NotEnoughEntrants { required, actual } => {
                write!(f, "Need at least {} entrants for this format (have {})", required, actual)
            }
            GenerationError::DuplicateEntrantId(id) => {
                write!(f, "Duplicate entrant id {}", id)
            }
            GenerationError::InvalidGroupCount { groups, entrants } => {
                write!(f, "Cannot split {} entrants into {} groups", entrants, groups)
            }
            GenerationError::BracketNotPowerOfTwo { entrants } => {
                write!(f, "Knockout rounds need a power-of-two entrant count (got {})", entrants)
            }
            GenerationError::WindowExceeded { end } => {
                write!(f, "Date window ends {} before all fixtures fit; widen the window or raise the daily match cap", end)
            }
            GenerationError::SlotSearchExhausted { attempts } => {
                write!(f, "No free slot found after {} day advances; check venues and kickoff times", attempts)
            }
            GenerationError::DuplicatePairing { a, b } => {
                write!(f, "Internal error: entrants {} and {} were paired twice", a, b)
            }
        }
    }
}

impl std::error::Error for GenerationError {}
