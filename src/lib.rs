//! Tournament fixture generation engine: library with models and scheduling logic.
//!
//! Given a set of entrants, a tournament format and scheduling constraints,
//! [`generate`] produces a complete, conflict-free fixture list with assigned
//! opponents, dates, kickoff times and venues. Knockout rounds for group
//! formats are generated on demand via [`generate_knockout_round`] once the
//! application knows which entrants advanced.

pub mod logic;
pub mod models;

pub use logic::{
    generate, generate_knockout_round, knockout_pairings, partition_into_groups,
    round_robin_rounds, Group, KnockoutTie, Pairing, Round,
};
pub use models::{
    recommended_group_count, Entrant, EntrantId, Fixture, FixtureId, FixtureStatus,
    GenerationConfig, GenerationError, TournamentFormat,
};
