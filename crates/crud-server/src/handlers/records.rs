//! Record handlers, shared by every table
//!
//! `{table}` is passed through to the service as-is; unknown tags surface
//! as a 500 like any other failure.

use crate::error::{noun, ApiError};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use crud_core::Record;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    success: bool,
}

pub async fn list(
    State(state): State<AppState>,
    Path(table): Path<String>,
) -> Result<Json<Vec<Record>>, ApiError> {
    state
        .service
        .list(&table)
        .await
        .map(Json)
        .map_err(|e| ApiError::failed("fetch", &noun(&table, true), e))
}

pub async fn get(
    State(state): State<AppState>,
    Path((table, id)): Path<(String, String)>,
) -> Result<Json<Record>, ApiError> {
    match state.service.get(&table, &id).await {
        Ok(Some(record)) => Ok(Json(record)),
        Ok(None) => Err(ApiError::not_found(&table)),
        Err(e) => Err(ApiError::failed("fetch", &noun(&table, false), e)),
    }
}

pub async fn create(
    State(state): State<AppState>,
    Path(table): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Record>, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::bad_body(&table, e))?;
    state
        .service
        .create(&table, body)
        .await
        .map(Json)
        .map_err(|e| ApiError::failed("create", &noun(&table, false), e))
}

pub async fn update(
    State(state): State<AppState>,
    Path((table, id)): Path<(String, String)>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Record>, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::bad_body(&table, e))?;
    match state.service.update(&table, &id, body).await {
        Ok(Some(record)) => Ok(Json(record)),
        Ok(None) => Err(ApiError::not_found(&table)),
        Err(e) => Err(ApiError::failed("update", &noun(&table, false), e)),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path((table, id)): Path<(String, String)>,
) -> Result<Json<DeleteResponse>, ApiError> {
    match state.service.delete(&table, &id).await {
        Ok(success) => Ok(Json(DeleteResponse { success })),
        Err(e) => Err(ApiError::failed("delete", &noun(&table, false), e).with_success(false)),
    }
}
