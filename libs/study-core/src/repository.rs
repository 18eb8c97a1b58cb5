//! Consumed interfaces to the external collaborators: the hosted document
//! store (one trait per entity collection), the key-value settings store
//! and the authentication provider.
//!
//! The engine never performs persistence itself; it receives loaded
//! records and returns updated values for the caller to store.

use crate::types::{LearningRecord, Question, StudySession, Subject};
use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by the external document store.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("permission denied: {0}")]
    PermissionDenied(String),
}

pub type RepoResult<T> = Result<T, RepositoryError>;

/// Repository for subject documents.
#[async_trait]
pub trait SubjectRepository: Send + Sync {
    async fn create(&self, subject: &Subject) -> RepoResult<String>;
    async fn get_by_id(&self, id: &str) -> RepoResult<Option<Subject>>;
    async fn get_all(&self) -> RepoResult<Vec<Subject>>;
    async fn update(&self, id: &str, subject: &Subject) -> RepoResult<()>;
    async fn delete(&self, id: &str) -> RepoResult<()>;
}

/// Repository for question documents.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn create(&self, question: &Question) -> RepoResult<String>;
    async fn get_by_id(&self, id: &str) -> RepoResult<Option<Question>>;
    async fn get_all(&self) -> RepoResult<Vec<Question>>;
    async fn get_by_subject(&self, subject_id: &str) -> RepoResult<Vec<Question>>;
    async fn update(&self, id: &str, question: &Question) -> RepoResult<()>;
    async fn delete(&self, id: &str) -> RepoResult<()>;
}

/// Repository for learning records.
#[async_trait]
pub trait LearningRecordRepository: Send + Sync {
    async fn create(&self, record: &LearningRecord) -> RepoResult<String>;
    async fn get_by_id(&self, id: &str) -> RepoResult<Option<LearningRecord>>;
    async fn get_all(&self) -> RepoResult<Vec<LearningRecord>>;
    async fn get_by_question(&self, question_id: &str) -> RepoResult<Option<LearningRecord>>;
    async fn update(&self, id: &str, record: &LearningRecord) -> RepoResult<()>;
    async fn delete(&self, id: &str) -> RepoResult<()>;
}

/// Repository for study sessions.
#[async_trait]
pub trait StudySessionRepository: Send + Sync {
    async fn create(&self, session: &StudySession) -> RepoResult<String>;
    async fn get_by_id(&self, id: &str) -> RepoResult<Option<StudySession>>;
    async fn get_all(&self) -> RepoResult<Vec<StudySession>>;
    async fn get_by_subject(&self, subject_id: &str) -> RepoResult<Vec<StudySession>>;
    async fn update(&self, id: &str, session: &StudySession) -> RepoResult<()>;
    async fn delete(&self, id: &str) -> RepoResult<()>;
}

/// Key-value settings store.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn get(&self, key: &str) -> RepoResult<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> RepoResult<()>;
    async fn delete(&self, key: &str) -> RepoResult<()>;
}

/// Opaque user identity from the authentication provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserId(pub String);

/// Authentication collaborator.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Identity of the signed-in user, if any.
    async fn current_user(&self) -> RepoResult<Option<UserId>>;
}
