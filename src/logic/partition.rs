//! Balanced group partitioning for group-phase formats.

use crate::models::{Entrant, GenerationError};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// One group of entrants, labelled for display ("Group A", "Group B", ...).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Group {
    pub label: String,
    pub members: Vec<Entrant>,
}

/// Split `entrants` into `groups` groups whose sizes differ by at most 1.
///
/// When every entrant carries a pre-seeded group label, the split is a plain
/// grouping by label (no shuffle; label order follows first appearance).
/// Otherwise the entrants are shuffled through `rng` and sliced.
pub fn partition_into_groups(
    entrants: &[Entrant],
    groups: usize,
    rng: &mut StdRng,
) -> Result<Vec<Group>, GenerationError> {
    if groups == 0 || groups > entrants.len() {
        return Err(GenerationError::InvalidGroupCount {
            groups,
            entrants: entrants.len(),
        });
    }

    if entrants.iter().all(|e| e.group.is_some()) {
        return Ok(group_by_label(entrants));
    }

    let mut pool: Vec<Entrant> = entrants.to_vec();
    pool.shuffle(rng);

    let base = pool.len() / groups;
    let extra = pool.len() % groups;

    let mut out = Vec::with_capacity(groups);
    let mut rest = pool.as_slice();
    for i in 0..groups {
        let size = base + usize::from(i < extra);
        let (members, tail) = rest.split_at(size);
        rest = tail;
        out.push(Group {
            label: group_label(i),
            members: members.to_vec(),
        });
    }
    Ok(out)
}

/// Group entrants by their existing labels, preserving first-appearance order.
fn group_by_label(entrants: &[Entrant]) -> Vec<Group> {
    let mut out: Vec<Group> = Vec::new();
    for e in entrants {
        let label = e.group.clone().unwrap_or_default();
        match out.iter_mut().find(|g| g.label == label) {
            Some(group) => group.members.push(e.clone()),
            None => out.push(Group {
                label,
                members: vec![e.clone()],
            }),
        }
    }
    out
}

/// Display label for the i-th group: letters first, numbers past "Group Z".
fn group_label(index: usize) -> String {
    if index < 26 {
        format!("Group {}", (b'A' + index as u8) as char)
    } else {
        format!("Group {}", index + 1)
    }
}
