//! Simple interval scheduling (default algorithm).
//!
//! A per-tier base interval in days, scaled by overall accuracy and the
//! current streak. Intervals are fractional: the lowest tier comes back
//! after roughly 2.4 hours, not a whole day.

use super::{ReviewSnapshot, SchedulingAlgorithm};
use crate::types::Familiarity;
use chrono::{DateTime, Duration, Utc};

const SECS_PER_DAY: f64 = 86_400.0;

/// Simple accuracy/streak-scaled scheduler.
#[derive(Debug, Clone)]
pub struct Simple {
    pub high_accuracy_threshold: f64,
    pub high_accuracy_bonus: f64,
    pub low_accuracy_threshold: f64,
    pub low_accuracy_penalty: f64,
    pub streak_step: f64,
    pub max_streak_multiplier: f64,
}

impl Default for Simple {
    fn default() -> Self {
        Self {
            high_accuracy_threshold: 0.9,
            high_accuracy_bonus: 1.5,
            low_accuracy_threshold: 0.6,
            low_accuracy_penalty: 0.5,
            streak_step: 0.2,
            max_streak_multiplier: 3.0,
        }
    }
}

impl Simple {
    /// Base interval in days per tier.
    fn base_days(familiarity: Familiarity) -> f64 {
        match familiarity {
            Familiarity::Unfamiliar => 0.1,
            Familiarity::Unanswered => 0.5,
            Familiarity::SomewhatFamiliar => 1.0,
            Familiarity::Familiar => 3.0,
            Familiarity::Mastered => 7.0,
        }
    }
}

impl SchedulingAlgorithm for Simple {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn next_review(&self, snapshot: &ReviewSnapshot, now: DateTime<Utc>) -> DateTime<Utc> {
        let mut interval_days = Self::base_days(snapshot.familiarity);

        if let Some(accuracy) = snapshot.accuracy() {
            if accuracy >= self.high_accuracy_threshold {
                interval_days *= self.high_accuracy_bonus;
            } else if accuracy < self.low_accuracy_threshold {
                interval_days *= self.low_accuracy_penalty;
            }
        }

        if snapshot.streak > 0 {
            let multiplier =
                (1.0 + snapshot.streak as f64 * self.streak_step).min(self.max_streak_multiplier);
            interval_days *= multiplier;
        }

        now + Duration::seconds((interval_days * SECS_PER_DAY).round() as i64)
    }
}
