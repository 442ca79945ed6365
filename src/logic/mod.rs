//! Fixture generation logic: partitioning, round robin, slot allocation, knockout.

mod generate;
mod knockout;
mod partition;
mod round_robin;
mod slots;

pub use generate::{generate, generate_knockout_round};
pub use knockout::{knockout_pairings, KnockoutTie};
pub use partition::{partition_into_groups, Group};
pub use round_robin::{round_robin_rounds, Pairing, Round};
