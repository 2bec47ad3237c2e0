use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, FormError};
use crate::forms::{lock, run_submission, ContactFlow, ContactSnapshot};
use crate::models::{ContactDraft, ContactField};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct FormResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub snapshot: ContactSnapshot,
}

fn find_form(state: &AppState, id: &Uuid) -> Result<Arc<std::sync::Mutex<ContactFlow>>, AppError> {
    state
        .contacts
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("contact form {id}")))
}

// POST /api/contact/forms
pub async fn create_form(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<FormResponse>) {
    let (id, form) = state.contacts.create(state.new_contact_form());
    tracing::debug!(form = %id, "contact form created");
    let snapshot = lock(&form).snapshot();
    (StatusCode::CREATED, Json(FormResponse { id, snapshot }))
}

// GET /api/contact/forms/:id
pub async fn get_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<FormResponse>, AppError> {
    let form = find_form(&state, &id)?;
    let snapshot = lock(&form).snapshot();
    Ok(Json(FormResponse { id, snapshot }))
}

// DELETE /api/contact/forms/:id
pub async fn delete_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.contacts.remove(&id) {
        return Err(AppError::NotFound(format!("contact form {id}")));
    }
    Ok(StatusCode::NO_CONTENT)
}

// POST /api/contact/forms/:id/field
#[derive(Debug, Deserialize)]
pub struct FieldUpdate {
    pub name: String,
    pub value: String,
}

pub async fn update_field(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(update): Json<FieldUpdate>,
) -> Result<Json<FormResponse>, AppError> {
    let field = ContactField::parse(&update.name)
        .ok_or_else(|| FormError::UnknownField(update.name.clone()))?;
    let form = find_form(&state, &id)?;
    let snapshot = {
        let mut form = lock(&form);
        form.update_field(field, &update.value);
        form.snapshot()
    };
    Ok(Json(FormResponse { id, snapshot }))
}

// POST /api/contact/forms/:id/submit
// An optional JSON body replaces the whole draft before validation.
pub async fn submit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    body: Bytes,
) -> Result<Json<FormResponse>, AppError> {
    let form = find_form(&state, &id)?;

    let draft: Option<ContactDraft> = if body.is_empty() {
        None
    } else {
        let draft =
            serde_json::from_slice(&body).map_err(|e| AppError::BadRequest(e.to_string()))?;
        Some(draft)
    };

    let status = run_submission(
        Arc::clone(&form),
        draft,
        Arc::clone(&state.sink),
        state.config.status_reset(),
    )
    .await?;
    tracing::info!(form = %id, status = status.as_str(), "contact submission finished");

    let snapshot = lock(&form).snapshot();
    Ok(Json(FormResponse { id, snapshot }))
}
