//! Review application: grade an answer, advance familiarity, reschedule.

use crate::algorithm::{ReviewSnapshot, SchedulingAlgorithm};
use crate::clock::Clock;
use crate::evaluator::is_correct;
use crate::familiarity::next_familiarity;
use crate::repository::{LearningRecordRepository, RepoResult};
use crate::types::{AnswerPayload, LearningRecord, Question, UserAnswer};
use chrono::{DateTime, Utc};

/// Result of applying one answer to a learning record.
#[derive(Debug, Clone)]
pub struct ReviewOutcome {
    /// The record with all review fields advanced, ready to persist.
    pub record: LearningRecord,
    /// The graded answer, for session history.
    pub user_answer: UserAnswer,
}

/// Apply one submitted answer to a learning record.
///
/// Grades the answer, advances the familiarity tier, bumps the counters
/// (streak resets on a wrong answer), accumulates time spent and computes
/// the next due time with `algorithm`. All fields change together; the
/// caller persists the returned record atomically.
pub fn apply_review(
    record: &LearningRecord,
    question: &Question,
    answer: &AnswerPayload,
    time_spent_secs: f64,
    algorithm: &dyn SchedulingAlgorithm,
    now: DateTime<Utc>,
) -> ReviewOutcome {
    let correct = is_correct(&question.kind, answer);
    let familiarity = next_familiarity(record.familiarity, correct, time_spent_secs);

    let correct_count = record.correct_count + u32::from(correct);
    let incorrect_count = record.incorrect_count + u32::from(!correct);
    let streak = if correct { record.streak + 1 } else { 0 };

    let snapshot = ReviewSnapshot {
        familiarity,
        correct_count,
        incorrect_count,
        streak,
        last_reviewed: now,
    };
    let next_review = algorithm.next_review(&snapshot, now);

    ReviewOutcome {
        record: LearningRecord {
            familiarity,
            correct_count,
            incorrect_count,
            streak,
            last_reviewed: now,
            next_review,
            total_time_spent: record.total_time_spent + time_spent_secs,
            ..record.clone()
        },
        user_answer: UserAnswer {
            question_id: question.id.clone(),
            answer: answer.clone(),
            is_correct: correct,
            time_spent: time_spent_secs,
        },
    }
}

/// Load-modify-store convenience around [`apply_review`].
///
/// Creates the learning record lazily on the first answer to a question,
/// the way the surrounding application submits reviews.
pub async fn submit_review<R>(
    records: &R,
    question: &Question,
    answer: &AnswerPayload,
    time_spent_secs: f64,
    algorithm: &dyn SchedulingAlgorithm,
    clock: &dyn Clock,
) -> RepoResult<ReviewOutcome>
where
    R: LearningRecordRepository + ?Sized,
{
    let now = clock.now();
    let record = records
        .get_by_question(&question.id)
        .await?
        .unwrap_or_else(|| LearningRecord::new_for_question(question.id.clone(), now));

    let mut outcome = apply_review(&record, question, answer, time_spent_secs, algorithm, now);

    match &outcome.record.id {
        Some(id) => records.update(id, &outcome.record).await?,
        None => {
            let id = records.create(&outcome.record).await?;
            outcome.record.id = Some(id);
        }
    }

    Ok(outcome)
}
