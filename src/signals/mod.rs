//! Per-dimension signal evaluators.
//!
//! Two evaluation paths share the same report shape: `observed` derives
//! outcomes from attributes fetched by a data source, `simulate` samples
//! them from weighted distributions keyed off a synthetic ground truth.

pub mod observed;
pub mod sampler;
pub mod simulate;
pub mod tables;

pub use sampler::{AgeOutcome, AgeTable, OutcomeTable, WeightedOutcome};
