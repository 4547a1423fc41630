//! Form submission intake: validation, persistence, and the HTTP surface.

pub mod domain;
pub(crate) mod pages;
pub mod repository;
pub mod router;
pub mod service;
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use domain::{
    parse_age, NewSubmission, Submission, SubmissionForm, SubmissionId, ValidationError, AGE_MAX,
    AGE_MIN,
};
pub use repository::{StoreError, SubmissionStore};
pub use router::submission_router;
pub use service::{SubmissionService, SubmissionServiceError};
pub use sqlite::SqliteSubmissionStore;
