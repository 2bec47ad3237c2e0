use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, FormError};
use crate::forms::{lock, run_submission, BookingFlow, BookingSnapshot};
use crate::models::{BookingDraft, BookingField};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct FormResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub snapshot: BookingSnapshot,
}

fn find_form(state: &AppState, id: &Uuid) -> Result<Arc<std::sync::Mutex<BookingFlow>>, AppError> {
    state
        .bookings
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("booking form {id}")))
}

// POST /api/booking/forms
pub async fn create_form(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<FormResponse>) {
    let (id, form) = state.bookings.create(state.new_booking_form());
    tracing::debug!(form = %id, "booking form created");
    let snapshot = lock(&form).snapshot();
    (StatusCode::CREATED, Json(FormResponse { id, snapshot }))
}

// GET /api/booking/forms/:id
pub async fn get_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<FormResponse>, AppError> {
    let form = find_form(&state, &id)?;
    let snapshot = lock(&form).snapshot();
    Ok(Json(FormResponse { id, snapshot }))
}

// DELETE /api/booking/forms/:id
pub async fn delete_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.bookings.remove(&id) {
        return Err(AppError::NotFound(format!("booking form {id}")));
    }
    Ok(StatusCode::NO_CONTENT)
}

// POST /api/booking/forms/:id/service
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectServiceRequest {
    pub service_id: String,
}

pub async fn select_service(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<SelectServiceRequest>,
) -> Result<Json<FormResponse>, AppError> {
    let form = find_form(&state, &id)?;
    let snapshot = {
        let mut form = lock(&form);
        form.select_service(&req.service_id);
        form.snapshot()
    };
    Ok(Json(FormResponse { id, snapshot }))
}

// POST /api/booking/forms/:id/field
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
    let field = BookingField::parse(&update.name)
        .ok_or_else(|| FormError::UnknownField(update.name.clone()))?;
    let form = find_form(&state, &id)?;
    let snapshot = {
        let mut form = lock(&form);
        form.update_field(field, &update.value)?;
        form.snapshot()
    };
    Ok(Json(FormResponse { id, snapshot }))
}

// POST /api/booking/forms/:id/submit
// An optional JSON body replaces the whole draft before validation.
pub async fn submit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    body: Bytes,
) -> Result<Json<FormResponse>, AppError> {
    let form = find_form(&state, &id)?;

    let draft: Option<BookingDraft> = if body.is_empty() {
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
    tracing::info!(form = %id, status = status.as_str(), "booking submission finished");

    let snapshot = lock(&form).snapshot();
    Ok(Json(FormResponse { id, snapshot }))
}
