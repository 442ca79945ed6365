//! Round-robin scheduling via the circle method.

use crate::models::{Entrant, EntrantId, GenerationError};
use std::collections::HashSet;

/// One pairing within a round. `home` hosts `away`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Pairing {
    pub home: EntrantId,
    pub away: EntrantId,
}

impl Pairing {
    fn reversed(&self) -> Self {
        Self {
            home: self.away,
            away: self.home,
        }
    }
}

/// A round (matchday) of disjoint pairings. `number` counts from 1 and
/// continues across legs; `leg` is 1 for the first pass, 2 for the mirror.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Round {
    pub number: usize,
    pub leg: u8,
    pub pairings: Vec<Pairing>,
}

/// Generate a single or double round robin for `entrants` with the circle
/// method: the first entrant stays fixed while the rest rotate one position
/// per round; round `r` pairs position `i` with position `n-1-i`.
///
/// Odd entrant counts get a bye placeholder; pairings involving the bye are
/// dropped, so one entrant sits out each round. Home/away orientation flips
/// with round and position parity to spread home fixtures. With `legs == 2`
/// a mirrored second pass is appended with every pairing reversed.
pub fn round_robin_rounds(
    entrants: &[Entrant],
    legs: u8,
) -> Result<Vec<Round>, GenerationError> {
    if entrants.len() < 2 {
        return Err(GenerationError::NotEnoughEntrants {
            required: 2,
            actual: entrants.len(),
        });
    }

    // Ring of positions; None is the bye slot for odd entrant counts.
    let mut ring: Vec<Option<EntrantId>> = entrants.iter().map(|e| Some(e.id)).collect();
    if ring.len() % 2 != 0 {
        ring.push(None);
    }
    let n = ring.len();

    let mut rounds: Vec<Round> = Vec::with_capacity(n - 1);
    for r in 0..n - 1 {
        let mut pairings = Vec::with_capacity(n / 2);
        for i in 0..n / 2 {
            if let (Some(a), Some(b)) = (ring[i], ring[n - 1 - i]) {
                let pairing = if (r + i) % 2 == 0 {
                    Pairing { home: a, away: b }
                } else {
                    Pairing { home: b, away: a }
                };
                pairings.push(pairing);
            }
        }
        rounds.push(Round {
            number: r + 1,
            leg: 1,
            pairings,
        });
        // Rotate everything but the fixed first position.
        if let Some(last) = ring.pop() {
            ring.insert(1, last);
        }
    }

    if legs == 2 {
        let mirrored: Vec<Round> = rounds
            .iter()
            .map(|round| Round {
                number: round.number + (n - 1),
                leg: 2,
                pairings: round.pairings.iter().map(Pairing::reversed).collect(),
            })
            .collect();
        rounds.extend(mirrored);
    }

    check_each_pair_meets_once(&rounds)?;
    Ok(rounds)
}

/// Consistency check: within each leg, every unordered pair appears at most
/// once. A violation means the rotation is broken, not a user error.
fn check_each_pair_meets_once(rounds: &[Round]) -> Result<(), GenerationError> {
    let mut seen: HashSet<(u8, EntrantId, EntrantId)> = HashSet::new();
    for round in rounds {
        for p in &round.pairings {
            let (lo, hi) = if p.home <= p.away {
                (p.home, p.away)
            } else {
                (p.away, p.home)
            };
            if !seen.insert((round.leg, lo, hi)) {
                return Err(GenerationError::DuplicatePairing { a: lo, b: hi });
            }
        }
    }
    Ok(())
}
