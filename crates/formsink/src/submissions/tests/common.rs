use std::sync::{Arc, Mutex};

use chrono::Utc;

use crate::submissions::domain::{NewSubmission, Submission, SubmissionForm, SubmissionId};
use crate::submissions::repository::{StoreError, SubmissionStore};

/// In-memory store double. Mirrors the SQLite store's id discipline: ids are
/// monotonic and never handed out twice, even after deletion.
#[derive(Default)]
pub(super) struct MemoryStore {
    inner: Arc<Mutex<MemoryStoreInner>>,
}

#[derive(Default)]
struct MemoryStoreInner {
    next_id: i64,
    records: Vec<Submission>,
}

impl MemoryStore {
    pub(super) fn len(&self) -> usize {
        self.inner.lock().expect("store mutex poisoned").records.len()
    }
}

impl SubmissionStore for MemoryStore {
    fn insert(&self, submission: NewSubmission) -> Result<Submission, StoreError> {
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        inner.next_id += 1;
        let stored = Submission {
            id: SubmissionId(inner.next_id),
            name: submission.name,
            email: submission.email,
            age: submission.age,
            submitted_at: Utc::now(),
        };
        inner.records.push(stored.clone());
        Ok(stored)
    }

    fn list(&self) -> Result<Vec<Submission>, StoreError> {
        let inner = self.inner.lock().expect("store mutex poisoned");
        let mut records = inner.records.clone();
        records.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at).then(b.id.cmp(&a.id)));
        Ok(records)
    }

    fn delete(&self, id: SubmissionId) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        let before = inner.records.len();
        inner.records.retain(|record| record.id != id);
        if inner.records.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

/// A failing store for exercising the storage-failure paths.
#[derive(Default)]
pub(super) struct UnavailableStore;

impl SubmissionStore for UnavailableStore {
    fn insert(&self, _submission: NewSubmission) -> Result<Submission, StoreError> {
        Err(StoreError::Unavailable("disk on fire".to_string()))
    }

    fn list(&self) -> Result<Vec<Submission>, StoreError> {
        Err(StoreError::Unavailable("disk on fire".to_string()))
    }

    fn delete(&self, _id: SubmissionId) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("disk on fire".to_string()))
    }
}

pub(super) fn valid_form() -> SubmissionForm {
    SubmissionForm {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        age: Some("36".to_string()),
    }
}
