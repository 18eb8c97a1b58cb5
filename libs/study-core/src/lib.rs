//! Core study engine for the zhuyin-cards application.
//!
//! Provides:
//! - Familiarity tier state machine
//! - Review scheduling strategies (Simple, SM-2 style, FSRS style)
//! - Answer grading for the six question shapes
//! - Phonetic (zhuyin) normalization and fuzzy validation against a
//!   dictionary lookup collaborator
//! - Due-queue selection and the review-application glue
//!
//! Persistence, UI and transport live in the surrounding application; this
//! crate only consumes their interfaces (see [`repository`]).

pub mod algorithm;
pub mod clock;
pub mod error;
pub mod evaluator;
pub mod familiarity;
pub mod phonetics;
pub mod queue;
pub mod repository;
pub mod review;
pub mod types;

pub use algorithm::{get_algorithm, ReviewSnapshot, SchedulingAlgorithm};
pub use clock::{Clock, SystemClock};
pub use error::LookupError;
pub use evaluator::is_correct;
pub use familiarity::next_familiarity;
pub use phonetics::lookup::{CharacterEntry, MoedictClient, Reading, ReadingLookup};
pub use phonetics::validator::{PhoneticValidator, ReadingCache, Validation};
pub use phonetics::{levenshtein, similarity, strip_tones};
pub use queue::due_records;
pub use review::{apply_review, submit_review, ReviewOutcome};
pub use types::{
    AlgorithmKind, AnswerPayload, Familiarity, LearningRecord, Question, QuestionKind,
    StudySession, StudySettings, Subject, UserAnswer,
};
