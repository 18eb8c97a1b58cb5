//! FSRS-inspired scheduling.
//!
//! A trimmed-down difficulty/stability model: difficulty starts at 5.0 and
//! is nudged by overall accuracy, stability is seeded per tier and grows
//! geometrically with the streak, and the interval follows a power-law decay
//! of difficulty.

use super::{ReviewSnapshot, SchedulingAlgorithm};
use crate::types::Familiarity;
use chrono::{DateTime, Duration, Utc};

/// FSRS-inspired scheduler with configurable parameters.
#[derive(Debug, Clone)]
pub struct FsrsLike {
    pub initial_difficulty: f64,
    pub min_difficulty: f64,
    pub max_difficulty: f64,
    /// Per-streak-step stability growth factor.
    pub stability_growth: f64,
    /// Streak steps beyond this contribute no further growth.
    pub max_growth_steps: u32,
    /// Exponent applied to difficulty when deriving the interval.
    pub difficulty_decay: f64,
    pub maximum_interval_days: f64,
}

impl Default for FsrsLike {
    fn default() -> Self {
        Self {
            initial_difficulty: 5.0,
            min_difficulty: 1.0,
            max_difficulty: 10.0,
            stability_growth: 1.3,
            max_growth_steps: 10,
            difficulty_decay: 0.8,
            maximum_interval_days: 36_500.0,
        }
    }
}

impl FsrsLike {
    /// Stability seed in days per tier.
    fn seed_stability(familiarity: Familiarity) -> f64 {
        match familiarity {
            Familiarity::Unfamiliar => 0.1,
            Familiarity::Unanswered => 0.5,
            Familiarity::SomewhatFamiliar => 2.0,
            Familiarity::Familiar => 5.0,
            Familiarity::Mastered => 10.0,
        }
    }

    fn difficulty(&self, snapshot: &ReviewSnapshot) -> f64 {
        match snapshot.accuracy() {
            Some(accuracy) if accuracy >= 0.9 => {
                (self.initial_difficulty - 0.2).max(self.min_difficulty)
            }
            Some(accuracy) if accuracy >= 0.7 => {
                (self.initial_difficulty + 0.1).min(self.max_difficulty)
            }
            Some(_) => (self.initial_difficulty + 0.3).min(self.max_difficulty),
            None => self.initial_difficulty,
        }
    }

    fn stability(&self, snapshot: &ReviewSnapshot) -> f64 {
        let steps = snapshot.streak.min(self.max_growth_steps);
        Self::seed_stability(snapshot.familiarity) * self.stability_growth.powi(steps as i32)
    }
}

impl SchedulingAlgorithm for FsrsLike {
    fn name(&self) -> &'static str {
        "fsrs"
    }

    fn next_review(&self, snapshot: &ReviewSnapshot, now: DateTime<Utc>) -> DateTime<Utc> {
        let difficulty = self.difficulty(snapshot);
        let stability = self.stability(snapshot);

        let interval_days = (stability * difficulty.powf(-self.difficulty_decay))
            .round()
            .min(self.maximum_interval_days);

        now + Duration::days(interval_days as i64)
    }
}
