//! Integration tests for round-robin generation: completeness, byes, legs.

use std::collections::{HashMap, HashSet};
use tournament_fixtures::{
    generate, round_robin_rounds, Entrant, EntrantId, Fixture, GenerationConfig, TournamentFormat,
};

fn entrants(n: usize) -> Vec<Entrant> {
    (0..n).map(|i| Entrant::new(format!("Team {i}"))).collect()
}

fn league_config() -> GenerationConfig {
    let mut config = GenerationConfig::new(
        TournamentFormat::League,
        chrono::NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        chrono::NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
    );
    config.matches_per_day = 4;
    config.kickoff_times = vec![
        chrono::NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
        chrono::NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
    ];
    config.venues = vec!["North Park".to_string(), "South Arena".to_string()];
    config.rest_days_between_rounds = 1;
    config.seed = Some(42);
    config
}

/// Count how often each unordered pair of entrants meets.
fn pair_counts(fixtures: &[Fixture]) -> HashMap<(EntrantId, EntrantId), usize> {
    let mut counts = HashMap::new();
    for f in fixtures {
        let key = if f.home <= f.away {
            (f.home, f.away)
        } else {
            (f.away, f.home)
        };
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

#[test]
fn league_of_4_has_3_matchdays_of_2() {
    let teams = entrants(4);
    let fixtures = generate(&teams, &league_config()).unwrap();

    assert_eq!(fixtures.len(), 6);
    let mut by_round: HashMap<&str, usize> = HashMap::new();
    for f in &fixtures {
        *by_round.entry(f.round.as_str()).or_insert(0) += 1;
    }
    assert_eq!(by_round.len(), 3);
    for (round, count) in by_round {
        assert_eq!(count, 2, "matchday {round} should have 2 fixtures");
    }

    // Every unordered pair meets exactly once.
    let counts = pair_counts(&fixtures);
    assert_eq!(counts.len(), 6);
    assert!(counts.values().all(|&c| c == 1));
}

#[test]
fn league_of_5_gives_each_entrant_a_bye() {
    let teams = entrants(5);
    let fixtures = generate(&teams, &league_config()).unwrap();

    // Bye-adjusted: 5 rounds of 2 pairings, one entrant resting per round.
    assert_eq!(fixtures.len(), 10);
    let counts = pair_counts(&fixtures);
    assert_eq!(counts.len(), 10);
    assert!(counts.values().all(|&c| c == 1));

    // Each entrant plays 4 matches and sits out exactly one round.
    for t in &teams {
        let played = fixtures
            .iter()
            .filter(|f| f.home == t.id || f.away == t.id)
            .count();
        assert_eq!(played, 4);
    }
}

#[test]
fn no_entrant_plays_twice_in_one_matchday() {
    let teams = entrants(8);
    let fixtures = generate(&teams, &league_config()).unwrap();

    let mut per_round: HashMap<&str, Vec<EntrantId>> = HashMap::new();
    for f in &fixtures {
        let ids = per_round.entry(f.round.as_str()).or_default();
        ids.push(f.home);
        ids.push(f.away);
    }
    for (round, ids) in per_round {
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len(), "entrant repeated in {round}");
    }
}

#[test]
fn no_self_pairing() {
    let fixtures = generate(&entrants(7), &league_config()).unwrap();
    assert!(fixtures.iter().all(|f| f.home != f.away));
}

#[test]
fn two_leg_league_reverses_every_pairing() {
    let teams = entrants(4);
    let mut config = league_config();
    config.legs_for_league = 2;
    let fixtures = generate(&teams, &config).unwrap();

    assert_eq!(fixtures.len(), 12);
    // Every ordered (home, away) pair appears exactly once across both legs.
    let mut ordered: HashMap<(EntrantId, EntrantId), usize> = HashMap::new();
    for f in &fixtures {
        *ordered.entry((f.home, f.away)).or_insert(0) += 1;
    }
    assert_eq!(ordered.len(), 12);
    assert!(ordered.values().all(|&c| c == 1));

    // Matchday numbering continues across legs: 1..=6.
    let rounds: HashSet<&str> = fixtures.iter().map(|f| f.round.as_str()).collect();
    for n in 1..=6 {
        assert!(rounds.contains(format!("Matchday {n}").as_str()));
    }
}

#[test]
fn rounds_carry_leg_and_continuous_numbers() {
    let teams = entrants(4);
    let rounds = round_robin_rounds(&teams, 2).unwrap();

    assert_eq!(rounds.len(), 6);
    assert!(rounds[..3].iter().all(|r| r.leg == 1));
    assert!(rounds[3..].iter().all(|r| r.leg == 2));
    let numbers: Vec<usize> = rounds.iter().map(|r| r.number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);

    // The mirror pass reverses home and away of its source round.
    for (first, second) in rounds[..3].iter().zip(&rounds[3..]) {
        for (p, q) in first.pairings.iter().zip(&second.pairings) {
            assert_eq!(p.home, q.away);
            assert_eq!(p.away, q.home);
        }
    }
}

#[test]
fn repeated_runs_keep_the_same_shape() {
    let teams = entrants(6);
    let mut config = league_config();
    config.seed = None;

    let first = generate(&teams, &config).unwrap();
    let second = generate(&teams, &config).unwrap();
    assert_eq!(first.len(), second.len());

    let rounds = |fs: &[Fixture]| -> HashSet<String> {
        fs.iter().map(|f| f.round.clone()).collect()
    };
    assert_eq!(rounds(&first), rounds(&second));
    assert_eq!(pair_counts(&first).len(), pair_counts(&second).len());
}
