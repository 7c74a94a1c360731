//! Score accumulation and verdict classification.

pub mod accumulator;
pub mod verdict;

pub use accumulator::finalize_score;
pub use verdict::{classify, confidence, select_key_indicators, tier_for_score};
