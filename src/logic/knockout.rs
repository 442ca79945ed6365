//! Knockout bracket building: pair advancing entrants into one elimination round.

use crate::logic::round_robin::Pairing;
use crate::models::{Entrant, GenerationError};

/// A knockout pairing together with its display label, e.g.
/// ("Semifinal", pairing) or ("Quarterfinal (Leg 2)", pairing).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KnockoutTie {
    pub label: String,
    pub pairing: Pairing,
}

/// Pair `advancing` entrants (index 0 vs 1, 2 vs 3, ...) into one
/// elimination round. The entrant count must be a power of two, at least 2.
///
/// The result is grouped into scheduling waves: single-leg mode yields one
/// wave; two-legged mode yields a first-leg wave and a mirrored second-leg
/// wave (home/away reversed), so the allocator can rest between legs.
///
/// Only one round is built: which entrants reach the next round depends on
/// played results, so the caller requests each round as they become known.
pub fn knockout_pairings(
    advancing: &[Entrant],
    two_legged: bool,
) -> Result<Vec<Vec<KnockoutTie>>, GenerationError> {
    let n = advancing.len();
    if n < 2 || !n.is_power_of_two() {
        return Err(GenerationError::BracketNotPowerOfTwo { entrants: n });
    }

    let round_name = round_name_for(n);
    let pairings: Vec<Pairing> = advancing
        .chunks_exact(2)
        .map(|pair| Pairing {
            home: pair[0].id,
            away: pair[1].id,
        })
        .collect();

    if !two_legged {
        let wave = pairings
            .into_iter()
            .map(|pairing| KnockoutTie {
                label: round_name.clone(),
                pairing,
            })
            .collect();
        return Ok(vec![wave]);
    }

    let first_leg = pairings
        .iter()
        .map(|p| KnockoutTie {
            label: format!("{} (Leg 1)", round_name),
            pairing: *p,
        })
        .collect();
    let second_leg = pairings
        .iter()
        .map(|p| KnockoutTie {
            label: format!("{} (Leg 2)", round_name),
            pairing: Pairing {
                home: p.away,
                away: p.home,
            },
        })
        .collect();
    Ok(vec![first_leg, second_leg])
}

/// Round name for a bracket of `entrants` entrants.
fn round_name_for(entrants: usize) -> String {
    match entrants {
        2 => "Final".to_string(),
        4 => "Semifinal".to_string(),
        8 => "Quarterfinal".to_string(),
        16 => "Round of 16".to_string(),
        n => format!("Round of {}", n),
    }
}
