//! Time-slot allocation: walks the date window assigning (date, time, venue).

use crate::models::{GenerationConfig, GenerationError};
use chrono::{Duration, NaiveDate, NaiveTime};
use log::debug;
use rand::rngs::StdRng;
use rand::Rng;
use std::collections::HashMap;

/// Per-run slot bookkeeping, scoped to one generation call and discarded on
/// return. Holds the cursor date and the slots already handed out.
pub struct SlotPlanner<'c> {
    config: &'c GenerationConfig,
    cursor: NaiveDate,
    /// Slots used per day, in assignment order: (kickoff time, venue).
    day_slots: HashMap<NaiveDate, Vec<(NaiveTime, String)>>,
    /// Remaining day advances before the search gives up.
    advances_left: u32,
    advances_budget: u32,
}

impl<'c> SlotPlanner<'c> {
    /// Create a planner for roughly `fixture_count` fixtures. The day-advance
    /// budget is 10x the fixture count, so a too-sparse config fails instead
    /// of looping forever.
    pub fn new(config: &'c GenerationConfig, fixture_count: usize) -> Self {
        let budget = 10 * (fixture_count.max(1) as u32);
        Self {
            config,
            cursor: config.start_date,
            day_slots: HashMap::new(),
            advances_left: budget,
            advances_budget: budget,
        }
    }

    /// Reserve the next free slot: the cursor day's next kickoff time (cycling
    /// the catalogue in declared order) and a venue drawn from those still
    /// free at that exact date and time. Advances the cursor day by day when
    /// the current one is full.
    pub fn next_slot(
        &mut self,
        rng: &mut StdRng,
    ) -> Result<(NaiveDate, NaiveTime, String), GenerationError> {
        loop {
            if self.config.respect_period && self.cursor > self.config.end_date {
                return Err(GenerationError::WindowExceeded {
                    end: self.config.end_date,
                });
            }

            let used = self
                .day_slots
                .get(&self.cursor)
                .map(Vec::len)
                .unwrap_or(0);
            if used < self.day_capacity() {
                let time = self.config.kickoff_times[used % self.config.kickoff_times.len()];
                let venue = self.pick_venue(self.cursor, time, rng);
                self.day_slots
                    .entry(self.cursor)
                    .or_default()
                    .push((time, venue.clone()));
                return Ok((self.cursor, time, venue));
            }

            self.advance_day()?;
        }
    }

    /// Move the cursor past the configured rest gap. Called by the
    /// orchestrator at each round boundary.
    pub fn advance_round(&mut self) {
        if self.config.rest_days_between_rounds > 0 {
            debug!(
                "round boundary: advancing cursor {} day(s) from {}",
                self.config.rest_days_between_rounds, self.cursor
            );
            self.cursor += Duration::days(i64::from(self.config.rest_days_between_rounds));
        }
    }

    /// How many fixtures fit on one day: the configured cap, bounded by the
    /// number of distinct (time, venue) combinations.
    fn day_capacity(&self) -> usize {
        let combinations = self.config.kickoff_times.len() * self.config.venues.len();
        (self.config.matches_per_day as usize).min(combinations)
    }

    /// Draw a venue free at (date, time). The kickoff catalogue cycles
    /// uniformly, so while the day is under capacity at least one venue is
    /// always free for the chosen time.
    fn pick_venue(&self, date: NaiveDate, time: NaiveTime, rng: &mut StdRng) -> String {
        let taken: Vec<&String> = self
            .day_slots
            .get(&date)
            .map(|slots| {
                slots
                    .iter()
                    .filter(|(t, _)| *t == time)
                    .map(|(_, v)| v)
                    .collect()
            })
            .unwrap_or_default();
        let free: Vec<&String> = self
            .config
            .venues
            .iter()
            .filter(|v| !taken.contains(v))
            .collect();
        if free.is_empty() {
            // Unreachable while day_capacity() is respected; fall back to the
            // catalogue rather than panic.
            return self.config.venues[rng.gen_range(0..self.config.venues.len())].clone();
        }
        free[rng.gen_range(0..free.len())].clone()
    }

    fn advance_day(&mut self) -> Result<(), GenerationError> {
        if self.advances_left == 0 {
            return Err(GenerationError::SlotSearchExhausted {
                attempts: self.advances_budget,
            });
        }
        self.advances_left -= 1;
        self.cursor += Duration::days(1);
        Ok(())
    }
}
