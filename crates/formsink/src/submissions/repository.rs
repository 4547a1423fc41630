use super::domain::{NewSubmission, Submission, SubmissionId};

/// Storage abstraction so the service module can be exercised in isolation.
pub trait SubmissionStore: Send + Sync {
    /// Persist a validated submission, returning the stored record with its
    /// assigned id and timestamp.
    fn insert(&self, submission: NewSubmission) -> Result<Submission, StoreError>;
    /// All submissions, newest first.
    fn list(&self) -> Result<Vec<Submission>, StoreError>;
    /// Remove a submission by id. `NotFound` when no such row exists.
    fn delete(&self, id: SubmissionId) -> Result<(), StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("submission not found")]
    NotFound,
    #[error("record store unavailable: {0}")]
    Unavailable(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        StoreError::Unavailable(value.to_string())
    }
}
