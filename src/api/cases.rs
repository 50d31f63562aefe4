use axum::{Json, extract::State};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;
use tower_sessions::Session;

use super::{ApiError, ApiResponse, AppState, CaseDto, auth::session_username};
use crate::models::{CaseStatus, CaseType};

#[derive(Debug, Deserialize)]
pub struct AddCaseRequest {
    pub client: String,
    pub case_type: CaseType,
    pub start_date: NaiveDate,
    pub status: CaseStatus,
}

/// POST /cases
/// One submission means exactly one store write; the handler owns the
/// whole interaction.
pub async fn add_case(
    State(state): State<Arc<AppState>>,
    session: Session,
    Json(payload): Json<AddCaseRequest>,
) -> Result<Json<ApiResponse<CaseDto>>, ApiError> {
    if payload.client.trim().is_empty() {
        return Err(ApiError::validation("Client name is required"));
    }

    let owner = if state.config().server.scope_cases_to_owner {
        Some(session_username(&session).await?)
    } else {
        None
    };

    let id = state
        .store()
        .add_case(
            payload.client.trim(),
            payload.case_type,
            payload.start_date,
            payload.status,
            owner.as_deref(),
        )
        .await?;

    Ok(Json(ApiResponse::success(CaseDto {
        id,
        client: payload.client.trim().to_string(),
        case_type: payload.case_type.to_string(),
        start_date: payload.start_date.format("%Y-%m-%d").to_string(),
        status: payload.status.to_string(),
    })))
}

/// GET /cases
/// Insertion-ordered; restricted to the session's cases when owner
/// scoping is enabled.
pub async fn list_cases(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Json<ApiResponse<Vec<CaseDto>>>, ApiError> {
    let owner = if state.config().server.scope_cases_to_owner {
        Some(session_username(&session).await?)
    } else {
        None
    };

    let cases = state.store().list_cases(owner.as_deref()).await?;
    let dtos: Vec<CaseDto> = cases.into_iter().map(CaseDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}
