//! Weighted discrete sampling over signal outcome tables.
//!
//! Every simulated dimension is an explicit table of `{outcome, weight}`
//! rows kept as data rather than inline control flow, so the distributions
//! are independently testable and tunable.

use crate::core::{Severity, SignalOutcome};
use rand::Rng;

/// One row of a weighted outcome table.
#[derive(Clone, Copy, Debug)]
pub struct WeightedOutcome {
    pub description: &'static str,
    pub delta: i32,
    pub severity: Option<Severity>,
    pub weight: u32,
}

/// A weighted discrete distribution over signal outcomes.
#[derive(Clone, Copy, Debug)]
pub struct OutcomeTable(pub &'static [WeightedOutcome]);

impl OutcomeTable {
    pub fn total_weight(&self) -> u32 {
        self.0.iter().map(|entry| entry.weight).sum()
    }

    /// Draw one row proportionally to its weight.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static WeightedOutcome {
        debug_assert!(!self.0.is_empty() && self.total_weight() > 0);
        let mut roll = rng.gen_range(0..self.total_weight());
        for entry in self.0 {
            if roll < entry.weight {
                return entry;
            }
            roll -= entry.weight;
        }
        // Unreachable for well-formed tables; keep the last row as fallback.
        &self.0[self.0.len() - 1]
    }

    /// Draw one row and convert it into a `SignalOutcome`.
    pub fn outcome<R: Rng + ?Sized>(&self, rng: &mut R) -> SignalOutcome {
        let drawn = self.sample(rng);
        SignalOutcome::new(drawn.description, drawn.delta, drawn.severity)
    }
}

/// One row of an account-age table. Age dimensions are uniform draws; the
/// severity of a penalizing draw is derived from its delta.
#[derive(Clone, Copy, Debug)]
pub struct AgeOutcome {
    pub days: i64,
    pub description: &'static str,
    pub delta: i32,
}

/// A uniform distribution over account-age outcomes.
#[derive(Clone, Copy, Debug)]
pub struct AgeTable(pub &'static [AgeOutcome]);

impl AgeTable {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static AgeOutcome {
        debug_assert!(!self.0.is_empty());
        &self.0[rng.gen_range(0..self.0.len())]
    }
}

pub(crate) const fn row(
    description: &'static str,
    delta: i32,
    severity: Option<Severity>,
    weight: u32,
) -> WeightedOutcome {
    WeightedOutcome {
        description,
        delta,
        severity,
        weight,
    }
}

pub(crate) const fn age(days: i64, description: &'static str, delta: i32) -> AgeOutcome {
    AgeOutcome {
        days,
        description,
        delta,
    }
}
