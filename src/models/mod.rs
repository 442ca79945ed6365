//! Data structures for fixture generation: entrants, config, fixtures, errors.

mod config;
mod entrant;
mod error;
mod fixture;

pub use config::{recommended_group_count, GenerationConfig, TournamentFormat};
pub use entrant::{Entrant, EntrantId};
pub use error::GenerationError;
pub use fixture::{Fixture, FixtureId, FixtureStatus};
