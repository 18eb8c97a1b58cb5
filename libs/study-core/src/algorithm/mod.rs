//! Review scheduling algorithm implementations.

pub mod fsrs;
pub mod simple;
pub mod sm2;

use crate::types::{AlgorithmKind, Familiarity, LearningRecord};
use chrono::{DateTime, Utc};

/// Inputs to a scheduling decision, snapshotted from a learning record
/// after the current answer has been applied to it.
#[derive(Debug, Clone, Copy)]
pub struct ReviewSnapshot {
    pub familiarity: Familiarity,
    pub correct_count: u32,
    pub incorrect_count: u32,
    pub streak: u32,
    pub last_reviewed: DateTime<Utc>,
}

impl ReviewSnapshot {
    pub fn from_record(record: &LearningRecord) -> Self {
        Self {
            familiarity: record.familiarity,
            correct_count: record.correct_count,
            incorrect_count: record.incorrect_count,
            streak: record.streak,
            last_reviewed: record.last_reviewed,
        }
    }

    pub fn attempts(&self) -> u32 {
        self.correct_count + self.incorrect_count
    }

    /// Fraction of correct answers, or `None` before the first attempt.
    pub fn accuracy(&self) -> Option<f64> {
        let attempts = self.attempts();
        if attempts == 0 {
            None
        } else {
            Some(self.correct_count as f64 / attempts as f64)
        }
    }
}

/// Trait for review scheduling algorithms.
///
/// Implementations are pure given the injected `now` and keep no state
/// between calls, so the same snapshot and clock always produce the same
/// due time.
pub trait SchedulingAlgorithm: Send + Sync {
    /// Algorithm identifier.
    fn name(&self) -> &'static str;

    /// Timestamp at which the record next becomes due.
    fn next_review(&self, snapshot: &ReviewSnapshot, now: DateTime<Utc>) -> DateTime<Utc>;
}

/// Get algorithm by kind.
pub fn get_algorithm(kind: AlgorithmKind) -> Box<dyn SchedulingAlgorithm> {
    match kind {
        AlgorithmKind::Simple => Box::new(simple::Simple::default()),
        AlgorithmKind::Sm2 => Box::new(sm2::Sm2Like::default()),
        AlgorithmKind::Fsrs => Box::new(fsrs::FsrsLike::default()),
    }
}
