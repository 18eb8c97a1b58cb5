//! Core types for the study engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Qualitative familiarity tier for one learner/question pair.
///
/// `Unanswered` is the initial never-scored state; it is "low" like
/// `Unfamiliar` but reached differently, so the two are distinct tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Familiarity {
    Unfamiliar,
    Unanswered,
    SomewhatFamiliar,
    Familiar,
    Mastered,
}

impl Default for Familiarity {
    fn default() -> Self {
        Self::Unanswered
    }
}

impl Familiarity {
    /// Get the tier name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unfamiliar => "unfamiliar",
            Self::Unanswered => "unanswered",
            Self::SomewhatFamiliar => "somewhat-familiar",
            Self::Familiar => "familiar",
            Self::Mastered => "mastered",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "unfamiliar" => Some(Self::Unfamiliar),
            "unanswered" => Some(Self::Unanswered),
            "somewhat-familiar" => Some(Self::SomewhatFamiliar),
            "familiar" => Some(Self::Familiar),
            "mastered" => Some(Self::Mastered),
            _ => None,
        }
    }
}

/// One selectable option of a multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceOption {
    pub id: String,
    pub text: String,
    pub is_correct: bool,
}

/// One orderable item of a sort question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortItem {
    pub id: String,
    pub text: String,
    pub correct_order: i32,
}

/// The six question shapes, tagged by type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum QuestionKind {
    MultipleChoice {
        options: Vec<ChoiceOption>,
        allow_multiple: bool,
    },
    TrueFalse {
        correct_answer: bool,
    },
    FillBlank {
        correct_answers: Vec<String>,
        case_sensitive: bool,
    },
    Sort {
        items: Vec<SortItem>,
    },
    BopomofoToChar {
        bopomofo: String,
        correct_char: String,
    },
    CharToBopomofo {
        character: String,
        correct_bopomofo: String,
    },
}

/// An authored question. Immutable once created except through the
/// question manager owned by the surrounding application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub subject_id: String,
    pub prompt: String,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

/// Shape-polymorphic answer value submitted by the learner.
///
/// Which variant is meaningful depends on the question's declared type;
/// the evaluator treats a mismatched shape as a wrong answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerPayload {
    Bool(bool),
    Text(String),
    Ids(Vec<String>),
    Order(Vec<usize>),
}

/// Per-question learning state for one learner.
///
/// `next_review` is always a deterministic function of the other fields at
/// the moment of the most recent review and never precedes `last_reviewed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningRecord {
    /// Document id assigned by the store; `None` until first persisted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub question_id: String,
    pub familiarity: Familiarity,
    pub correct_count: u32,
    pub incorrect_count: u32,
    /// Consecutive-correct counter, reset to 0 by a wrong answer.
    pub streak: u32,
    pub last_reviewed: DateTime<Utc>,
    pub next_review: DateTime<Utc>,
    /// Accumulated answer time in seconds.
    pub total_time_spent: f64,
}

impl LearningRecord {
    /// Fresh record for a question answered for the first time.
    pub fn new_for_question(question_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            question_id: question_id.into(),
            familiarity: Familiarity::Unanswered,
            correct_count: 0,
            incorrect_count: 0,
            streak: 0,
            last_reviewed: now,
            next_review: now,
            total_time_spent: 0.0,
        }
    }

    /// Total attempts recorded on this question.
    pub fn attempts(&self) -> u32 {
        self.correct_count + self.incorrect_count
    }
}

/// One submitted answer. Ephemeral: held by a study session, never
/// persisted by the engine itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAnswer {
    pub question_id: String,
    pub answer: AnswerPayload,
    pub is_correct: bool,
    /// Seconds spent answering.
    pub time_spent: f64,
}

/// A study subject (grouping of questions).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A completed or in-progress study session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySession {
    pub id: String,
    pub subject_id: String,
    pub started_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
    pub answers: Vec<UserAnswer>,
}

/// Scheduling algorithm options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmKind {
    Simple,
    Sm2,
    Fsrs,
}

impl Default for AlgorithmKind {
    fn default() -> Self {
        Self::Simple
    }
}

impl AlgorithmKind {
    /// Get the algorithm name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Sm2 => "sm2",
            Self::Fsrs => "fsrs",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "simple" => Some(Self::Simple),
            "sm2" => Some(Self::Sm2),
            "fsrs" => Some(Self::Fsrs),
            _ => None,
        }
    }
}

/// Learner-facing study settings, stored in the external settings store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySettings {
    pub algorithm: AlgorithmKind,
    pub daily_goal: u32,
}

impl Default for StudySettings {
    fn default() -> Self {
        Self {
            algorithm: AlgorithmKind::default(),
            daily_goal: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn familiarity_round_trips_through_strings() {
        for tier in [
            Familiarity::Unfamiliar,
            Familiarity::Unanswered,
            Familiarity::SomewhatFamiliar,
            Familiarity::Familiar,
            Familiarity::Mastered,
        ] {
            assert_eq!(Familiarity::from_str(tier.as_str()), Some(tier));
        }
        assert_eq!(Familiarity::from_str("bogus"), None);
    }

    #[test]
    fn question_kind_serializes_with_type_tag() {
        let question = Question {
            id: "q1".into(),
            subject_id: "s1".into(),
            prompt: "馬".into(),
            kind: QuestionKind::CharToBopomofo {
                character: "馬".into(),
                correct_bopomofo: "ㄇㄚˇ".into(),
            },
        };

        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["type"], "char-to-bopomofo");
        assert_eq!(json["correctBopomofo"], "ㄇㄚˇ");

        let back: Question = serde_json::from_value(json).unwrap();
        assert_eq!(back, question);
    }

    #[test]
    fn answer_payload_deserializes_by_shape() {
        let text: AnswerPayload = serde_json::from_str(r#""ㄇㄚˇ""#).unwrap();
        assert_eq!(text, AnswerPayload::Text("ㄇㄚˇ".into()));

        let ids: AnswerPayload = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        assert_eq!(ids, AnswerPayload::Ids(vec!["a".into(), "b".into()]));

        let order: AnswerPayload = serde_json::from_str("[2, 0, 1]").unwrap();
        assert_eq!(order, AnswerPayload::Order(vec![2, 0, 1]));

        let flag: AnswerPayload = serde_json::from_str("true").unwrap();
        assert_eq!(flag, AnswerPayload::Bool(true));
    }

    #[test]
    fn new_record_starts_unanswered_and_due() {
        let now = Utc::now();
        let record = LearningRecord::new_for_question("q1", now);
        assert_eq!(record.familiarity, Familiarity::Unanswered);
        assert_eq!(record.attempts(), 0);
        assert_eq!(record.next_review, now);
        assert_eq!(record.last_reviewed, now);
    }
}
