use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use tracing::error;

use super::domain::{SubmissionForm, SubmissionId};
use super::pages;
use super::repository::{StoreError, SubmissionStore};
use super::service::{SubmissionService, SubmissionServiceError};

/// Router builder exposing the form-facing HTTP endpoints.
pub fn submission_router<S>(service: Arc<SubmissionService<S>>) -> Router
where
    S: SubmissionStore + 'static,
{
    Router::new()
        .route("/", get(index_handler))
        .route("/submit", post(submit_handler::<S>))
        .route("/success", get(success_handler))
        .route("/view-data", get(view_data_handler::<S>))
        .route("/delete/:id", post(delete_handler::<S>))
        .with_state(service)
}

pub(crate) async fn index_handler() -> Html<String> {
    Html(pages::render_form(None))
}

pub(crate) async fn success_handler() -> Html<String> {
    Html(pages::render_success())
}

pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<SubmissionService<S>>>,
    Form(form): Form<SubmissionForm>,
) -> Response
where
    S: SubmissionStore + 'static,
{
    match service.submit(form) {
        Ok(_) => Redirect::to("/success").into_response(),
        Err(SubmissionServiceError::Validation(violation)) => {
            Html(pages::render_form(Some(&violation.to_string()))).into_response()
        }
        Err(SubmissionServiceError::Store(err)) => {
            error!(%err, "submission insert failed");
            Html(pages::render_form(Some("Error submitting data"))).into_response()
        }
    }
}

pub(crate) async fn view_data_handler<S>(
    State(service): State<Arc<SubmissionService<S>>>,
) -> Response
where
    S: SubmissionStore + 'static,
{
    match service.list() {
        Ok(submissions) => Html(pages::render_submissions(&submissions)).into_response(),
        Err(err) => {
            error!(%err, "submission list failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error retrieving data".to_string(),
            )
                .into_response()
        }
    }
}

pub(crate) async fn delete_handler<S>(
    State(service): State<Arc<SubmissionService<S>>>,
    Path(id): Path<String>,
) -> Response
where
    S: SubmissionStore + 'static,
{
    // A malformed id is indistinguishable from an absent one to the caller.
    let Ok(id) = id.parse::<i64>() else {
        return (StatusCode::NOT_FOUND, "Submission not found".to_string()).into_response();
    };

    match service.delete(SubmissionId(id)) {
        Ok(()) => Redirect::to("/view-data").into_response(),
        Err(SubmissionServiceError::Store(StoreError::NotFound)) => {
            (StatusCode::NOT_FOUND, "Submission not found".to_string()).into_response()
        }
        Err(err) => {
            error!(%err, "submission delete failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error deleting submission".to_string(),
            )
                .into_response()
        }
    }
}
