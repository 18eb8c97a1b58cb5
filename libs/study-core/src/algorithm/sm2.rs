//! SM-2 style scheduling.
//!
//! The two lowest tiers bypass day-based scheduling entirely and come back
//! within minutes. The remaining tiers use a per-tier base interval scaled
//! by an accuracy-adjusted ease factor and a streak multiplier, rounded to
//! whole days.

use super::{ReviewSnapshot, SchedulingAlgorithm};
use crate::types::Familiarity;
use chrono::{DateTime, Duration, Utc};

/// SM-2 style scheduler with configurable parameters.
#[derive(Debug, Clone)]
pub struct Sm2Like {
    pub initial_ease: f64,
    pub minimum_ease: f64,
    pub maximum_ease: f64,
    pub streak_step: f64,
    pub max_streak_multiplier: f64,
    /// Minutes until re-review for the `Unfamiliar` tier.
    pub unfamiliar_minutes: i64,
    /// Minutes until re-review for the `Unanswered` tier.
    pub unanswered_minutes: i64,
}

impl Default for Sm2Like {
    fn default() -> Self {
        Self {
            initial_ease: 2.5,
            minimum_ease: 1.3,
            maximum_ease: 3.0,
            streak_step: 0.1,
            max_streak_multiplier: 2.0,
            unfamiliar_minutes: 1,
            unanswered_minutes: 5,
        }
    }
}

impl Sm2Like {
    fn base_days(familiarity: Familiarity) -> f64 {
        match familiarity {
            // Handled by the minute bypass before this is consulted.
            Familiarity::Unfamiliar | Familiarity::Unanswered => 0.0,
            Familiarity::SomewhatFamiliar => 1.0,
            Familiarity::Familiar => 3.0,
            Familiarity::Mastered => 7.0,
        }
    }

    /// Ease factor after the accuracy adjustment.
    fn ease_factor(&self, snapshot: &ReviewSnapshot) -> f64 {
        match snapshot.accuracy() {
            Some(accuracy) if accuracy >= 0.9 => {
                (self.initial_ease + 0.1).min(self.maximum_ease)
            }
            Some(accuracy) if accuracy >= 0.7 => {
                (self.initial_ease - 0.1).max(self.minimum_ease)
            }
            Some(_) => (self.initial_ease - 0.2).max(self.minimum_ease),
            None => self.initial_ease,
        }
    }
}

impl SchedulingAlgorithm for Sm2Like {
    fn name(&self) -> &'static str {
        "sm2"
    }

    fn next_review(&self, snapshot: &ReviewSnapshot, now: DateTime<Utc>) -> DateTime<Utc> {
        match snapshot.familiarity {
            Familiarity::Unfamiliar => return now + Duration::minutes(self.unfamiliar_minutes),
            Familiarity::Unanswered => return now + Duration::minutes(self.unanswered_minutes),
            _ => {}
        }

        let ease = self.ease_factor(snapshot);
        let streak_multiplier =
            (1.0 + snapshot.streak as f64 * self.streak_step).min(self.max_streak_multiplier);

        let days = (Self::base_days(snapshot.familiarity) * ease * streak_multiplier).round();
        now + Duration::days(days as i64)
    }
}
