//! Format orchestration: the engine's public entry points.

use crate::logic::knockout::knockout_pairings;
use crate::logic::partition::partition_into_groups;
use crate::logic::round_robin::{round_robin_rounds, Round};
use crate::logic::slots::SlotPlanner;
use crate::models::{
    Entrant, EntrantId, Fixture, GenerationConfig, GenerationError, TournamentFormat,
};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

/// Generate the full fixture list for `entrants` under `config`.
///
/// `League` produces the complete schedule. Group formats produce the group
/// phase only: knockout rounds depend on played results, so the application
/// requests them later via [`generate_knockout_round`] with the entrants
/// that actually advanced.
pub fn generate(
    entrants: &[Entrant],
    config: &GenerationConfig,
) -> Result<Vec<Fixture>, GenerationError> {
    config.validate(entrants.len())?;
    check_unique_ids(entrants)?;
    let mut rng = run_rng(config);

    info!(
        "generating {:?} fixtures for {} entrants ({} to {})",
        config.format,
        entrants.len(),
        config.start_date,
        config.end_date
    );

    match config.format {
        TournamentFormat::League => generate_league(entrants, config, &mut rng),
        TournamentFormat::GroupKnockout => generate_group_phase(entrants, config, 1, &mut rng),
        TournamentFormat::GroupKnockoutTwoLegged => {
            generate_group_phase(entrants, config, 2, &mut rng)
        }
    }
}

/// Generate one knockout round for the `advancing` entrants the caller has
/// determined (index 0 plays 1, 2 plays 3, ...). Leg mode follows
/// `config.format`; slots are allocated over `config`'s date window, so the
/// caller narrows the window to the knockout phase.
pub fn generate_knockout_round(
    advancing: &[Entrant],
    config: &GenerationConfig,
) -> Result<Vec<Fixture>, GenerationError> {
    config.validate_scheduling()?;
    check_unique_ids(advancing)?;
    let mut rng = run_rng(config);

    let waves = knockout_pairings(advancing, config.format.two_legged_knockout())?;
    let total: usize = waves.iter().map(Vec::len).sum();
    info!(
        "generating knockout round for {} advancing entrants ({} fixtures)",
        advancing.len(),
        total
    );

    let mut planner = SlotPlanner::new(config, total);
    let mut fixtures = Vec::with_capacity(total);
    for (i, wave) in waves.iter().enumerate() {
        if i > 0 {
            planner.advance_round();
        }
        for tie in wave {
            let (date, time, venue) = planner.next_slot(&mut rng)?;
            fixtures.push(Fixture::new(
                tie.pairing.home,
                tie.pairing.away,
                date.and_time(time),
                venue,
                tie.label.clone(),
                None,
            ));
        }
    }
    Ok(fixtures)
}

/// League: one round robin over the whole pool, 1 or 2 legs.
fn generate_league(
    entrants: &[Entrant],
    config: &GenerationConfig,
    rng: &mut StdRng,
) -> Result<Vec<Fixture>, GenerationError> {
    let rounds = round_robin_rounds(entrants, config.legs_for_league)?;
    let total: usize = rounds.iter().map(|r| r.pairings.len()).sum();
    debug!("league schedule: {} matchdays, {} fixtures", rounds.len(), total);

    let mut planner = SlotPlanner::new(config, total);
    let mut fixtures = Vec::with_capacity(total);
    for (i, round) in rounds.iter().enumerate() {
        if i > 0 {
            planner.advance_round();
        }
        for p in &round.pairings {
            let (date, time, venue) = planner.next_slot(rng)?;
            fixtures.push(Fixture::new(
                p.home,
                p.away,
                date.and_time(time),
                venue,
                format!("Matchday {}", round.number),
                None,
            ));
        }
    }
    Ok(fixtures)
}

/// Group phase: partition, run a round robin per group, and schedule the
/// r-th round of every group as one matchday (rest days once per matchday).
fn generate_group_phase(
    entrants: &[Entrant],
    config: &GenerationConfig,
    legs: u8,
    rng: &mut StdRng,
) -> Result<Vec<Fixture>, GenerationError> {
    let group_count = config.effective_groups(entrants.len());
    let groups = partition_into_groups(entrants, group_count, rng)?;
    if groups.iter().any(|g| g.members.len() < 2) {
        return Err(GenerationError::InvalidGroupCount {
            groups: group_count,
            entrants: entrants.len(),
        });
    }

    let mut per_group: Vec<(String, Vec<Round>)> = Vec::with_capacity(groups.len());
    for group in &groups {
        let rounds = round_robin_rounds(&group.members, legs)?;
        per_group.push((group.label.clone(), rounds));
    }

    let total: usize = per_group
        .iter()
        .flat_map(|(_, rounds)| rounds.iter())
        .map(|r| r.pairings.len())
        .sum();
    let matchdays = per_group.iter().map(|(_, r)| r.len()).max().unwrap_or(0);
    debug!(
        "group phase: {} groups, {} matchdays, {} fixtures",
        per_group.len(),
        matchdays,
        total
    );

    let mut planner = SlotPlanner::new(config, total);
    let mut fixtures = Vec::with_capacity(total);
    for r in 0..matchdays {
        if r > 0 {
            planner.advance_round();
        }
        for (label, rounds) in &per_group {
            let Some(round) = rounds.get(r) else { continue };
            for p in &round.pairings {
                let (date, time, venue) = planner.next_slot(rng)?;
                fixtures.push(Fixture::new(
                    p.home,
                    p.away,
                    date.and_time(time),
                    venue,
                    format!("Matchday {}", round.number),
                    Some(label.clone()),
                ));
            }
        }
    }
    Ok(fixtures)
}

/// The run's random source: seeded when the config carries a seed, entropy
/// otherwise. One RNG per generation call; nothing is shared across calls.
fn run_rng(config: &GenerationConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Entrant ids must be unique within a generation run.
fn check_unique_ids(entrants: &[Entrant]) -> Result<(), GenerationError> {
    let mut seen: HashSet<EntrantId> = HashSet::with_capacity(entrants.len());
    for e in entrants {
        if !seen.insert(e.id) {
            return Err(GenerationError::DuplicateEntrantId(e.id));
        }
    }
    Ok(())
}
