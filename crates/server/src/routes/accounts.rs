use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use service::account_service;
use tracing::{error, info};

use crate::errors::ApiError;
use crate::routes::AppState;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Request body for create and update. `id` is never part of the payload:
/// ignored on create, rejected on update. Unknown keys are otherwise
/// ignored. A missing required key fails deserialization with a message
/// naming it.
#[derive(Debug, Deserialize, Serialize)]
pub struct AccountPayload {
    pub name: String,
    pub email: String,
    pub address: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub date_joined: Option<NaiveDate>,
}

/// Checks that the declared media type matches; parameters after ';' are
/// ignored. Logs the observed value on mismatch.
fn check_content_type(headers: &HeaderMap, media_type: &'static str) -> Result<(), ApiError> {
    let observed = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());
    let essence = observed.and_then(|ct| ct.split(';').next()).map(str::trim);
    if essence == Some(media_type) {
        return Ok(());
    }
    error!(content_type = ?observed, "invalid Content-Type");
    Err(ApiError::UnsupportedMediaType(media_type))
}

pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    info!("request to create an account");
    check_content_type(&headers, JSON_CONTENT_TYPE)?;
    let payload: AccountPayload =
        serde_json::from_slice(&body).map_err(|e| ApiError::Validation(e.to_string()))?;
    let m = account_service::create_account(
        &state.db,
        &payload.name,
        &payload.email,
        &payload.address,
        payload.phone_number.as_deref(),
        payload.date_joined,
    )
    .await?;
    info!(id = m.id, "created account");
    let location = format!("/accounts/{}", m.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(m)))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<models::account::Model>>, ApiError> {
    info!("request for listing all accounts");
    let rows = account_service::list_accounts(&state.db).await?;
    info!(count = rows.len(), "returning accounts");
    Ok(Json(rows))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<models::account::Model>, ApiError> {
    info!(id, "request for getting an account");
    match account_service::get_account(&state.db, id).await? {
        Some(m) => Ok(Json(m)),
        None => Err(ApiError::NotFound(format!("account with id={id} not found"))),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<models::account::Model>, ApiError> {
    info!(id, "request for updating an account");
    check_content_type(&headers, JSON_CONTENT_TYPE)?;
    let value: serde_json::Value =
        serde_json::from_slice(&body).map_err(|e| ApiError::Validation(e.to_string()))?;
    // id is assigned by storage on create and immutable thereafter
    if value.get("id").is_some() {
        return Err(ApiError::Validation("id cannot be changed".into()));
    }
    let payload: AccountPayload =
        serde_json::from_value(value).map_err(|e| ApiError::Validation(e.to_string()))?;
    let m = account_service::update_account(
        &state.db,
        id,
        &payload.name,
        &payload.email,
        &payload.address,
        payload.phone_number.as_deref(),
        payload.date_joined,
    )
    .await?;
    info!(id = m.id, "updated account");
    Ok(Json(m))
}

/// Deletes are idempotent: a missing record still yields 204.
pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> StatusCode {
    match account_service::delete_account(&state.db, id).await {
        Ok(true) => {
            info!(id, "deleted account");
            StatusCode::NO_CONTENT
        }
        Ok(false) => StatusCode::NO_CONTENT,
        Err(e) => {
            error!(err = %e, "delete account failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
