use std::sync::Arc;

use super::common::{valid_form, MemoryStore, UnavailableStore};
use crate::submissions::domain::{SubmissionForm, SubmissionId, ValidationError};
use crate::submissions::repository::StoreError;
use crate::submissions::service::{SubmissionService, SubmissionServiceError};

#[test]
fn submit_persists_validated_input() {
    let store = Arc::new(MemoryStore::default());
    let service = SubmissionService::new(store.clone());

    let stored = service.submit(valid_form()).expect("submit succeeds");

    assert_eq!(stored.name, "Ada Lovelace");
    assert_eq!(stored.email, "ada@example.com");
    assert_eq!(stored.age, Some(36));
    assert_eq!(store.len(), 1);
}

#[test]
fn submit_rejects_empty_name_without_persisting() {
    let store = Arc::new(MemoryStore::default());
    let service = SubmissionService::new(store.clone());

    let form = SubmissionForm {
        name: "   ".to_string(),
        ..valid_form()
    };

    match service.submit(form) {
        Err(SubmissionServiceError::Validation(ValidationError::NameRequired)) => {}
        other => panic!("expected name validation error, got {other:?}"),
    }
    assert_eq!(store.len(), 0);
}

#[test]
fn submit_rejects_email_without_at_sign() {
    let store = Arc::new(MemoryStore::default());
    let service = SubmissionService::new(store.clone());

    let form = SubmissionForm {
        email: "nope".to_string(),
        ..valid_form()
    };

    match service.submit(form) {
        Err(SubmissionServiceError::Validation(ValidationError::EmailInvalid)) => {}
        other => panic!("expected email validation error, got {other:?}"),
    }
    assert_eq!(store.len(), 0);
}

#[test]
fn submit_rejects_non_numeric_and_out_of_range_ages() {
    let store = Arc::new(MemoryStore::default());
    let service = SubmissionService::new(store.clone());

    let non_numeric = SubmissionForm {
        age: Some("abc".to_string()),
        ..valid_form()
    };
    match service.submit(non_numeric) {
        Err(SubmissionServiceError::Validation(ValidationError::AgeNotANumber)) => {}
        other => panic!("expected non-numeric age error, got {other:?}"),
    }

    let out_of_range = SubmissionForm {
        age: Some("150".to_string()),
        ..valid_form()
    };
    match service.submit(out_of_range) {
        Err(SubmissionServiceError::Validation(ValidationError::AgeOutOfRange)) => {}
        other => panic!("expected out-of-range age error, got {other:?}"),
    }

    assert_eq!(store.len(), 0);
}

#[test]
fn submit_accepts_blank_age_as_absent() {
    let store = Arc::new(MemoryStore::default());
    let service = SubmissionService::new(store.clone());

    let form = SubmissionForm {
        age: Some(String::new()),
        ..valid_form()
    };

    let stored = service.submit(form).expect("submit succeeds");
    assert_eq!(stored.age, None);
}

#[test]
fn delete_propagates_not_found() {
    let store = Arc::new(MemoryStore::default());
    let service = SubmissionService::new(store.clone());

    match service.delete(SubmissionId(99999)) {
        Err(SubmissionServiceError::Store(StoreError::NotFound)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
    assert_eq!(store.len(), 0);
}

#[test]
fn delete_removes_exactly_the_requested_record() {
    let store = Arc::new(MemoryStore::default());
    let service = SubmissionService::new(store.clone());

    let first = service.submit(valid_form()).expect("submit succeeds");
    let second = service
        .submit(SubmissionForm {
            name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
            age: None,
        })
        .expect("submit succeeds");

    service.delete(first.id).expect("delete succeeds");

    let remaining = service.list().expect("list succeeds");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, second.id);
}

#[test]
fn list_orders_newest_first() {
    let store = Arc::new(MemoryStore::default());
    let service = SubmissionService::new(store.clone());

    let ids: Vec<_> = (0..3)
        .map(|index| {
            service
                .submit(SubmissionForm {
                    name: format!("Person {index}"),
                    email: format!("person{index}@example.com"),
                    age: None,
                })
                .expect("submit succeeds")
                .id
        })
        .collect();

    let listed: Vec<_> = service
        .list()
        .expect("list succeeds")
        .into_iter()
        .map(|submission| submission.id)
        .collect();
    assert_eq!(listed, vec![ids[2], ids[1], ids[0]]);
}

#[test]
fn storage_failures_surface_as_store_errors() {
    let service = SubmissionService::new(Arc::new(UnavailableStore));

    match service.submit(valid_form()) {
        Err(SubmissionServiceError::Store(StoreError::Unavailable(_))) => {}
        other => panic!("expected store failure, got {other:?}"),
    }
    match service.list() {
        Err(SubmissionServiceError::Store(StoreError::Unavailable(_))) => {}
        other => panic!("expected store failure, got {other:?}"),
    }
}
