use std::sync::Arc;

use tracing::info;

use super::domain::{Submission, SubmissionForm, SubmissionId, ValidationError};
use super::repository::{StoreError, SubmissionStore};

/// Service composing validation and persistence for form submissions.
pub struct SubmissionService<S> {
    store: Arc<S>,
}

impl<S> SubmissionService<S>
where
    S: SubmissionStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Validate the raw form and persist the accepted submission.
    pub fn submit(&self, form: SubmissionForm) -> Result<Submission, SubmissionServiceError> {
        let validated = form.validate()?;
        let stored = self.store.insert(validated)?;
        info!(id = %stored.id, "submission stored");
        Ok(stored)
    }

    /// All stored submissions, newest first.
    pub fn list(&self) -> Result<Vec<Submission>, SubmissionServiceError> {
        Ok(self.store.list()?)
    }

    /// Delete one submission. `Store(NotFound)` when the id does not exist.
    pub fn delete(&self, id: SubmissionId) -> Result<(), SubmissionServiceError> {
        self.store.delete(id)?;
        info!(%id, "submission deleted");
        Ok(())
    }
}

/// Error raised by the submission service.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
