use axum::{
    Json,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, DocumentKindDto};
use crate::documents::{DocumentFields, DocumentKind};

/// GET /documents/kinds
/// The closed menu of document kinds with their form fields.
pub async fn list_kinds() -> Json<ApiResponse<Vec<DocumentKindDto>>> {
    let kinds = DocumentKind::ALL
        .into_iter()
        .map(|kind| DocumentKindDto {
            kind: kind.tag(),
            title: kind.template().title,
            fields: kind.field_names(),
            generated: !kind.bypasses_generation(),
        })
        .collect();
    Json(ApiResponse::success(kinds))
}

#[derive(Debug, Deserialize)]
pub struct GenerateDocumentRequest {
    pub kind: DocumentKind,
    pub fields: DocumentFields,
}

/// POST /documents
/// One submission triggers exactly one generation; the PDF comes back as
/// an attachment. An endpoint failure downgrades to the placeholder body,
/// it never aborts the download.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<GenerateDocumentRequest>,
) -> Result<Response, ApiError> {
    if payload.fields.party_one.trim().is_empty() {
        return Err(ApiError::validation("party_one is required"));
    }
    if payload.kind.bypasses_generation() && payload.fields.amount.is_none() {
        return Err(ApiError::validation("amount is required for receipts"));
    }

    let today = chrono::Local::now().date_naive();
    let document = state
        .documents()
        .generate(payload.kind, &payload.fields, today)
        .await
        .map_err(|e| ApiError::internal(format!("Document rendering failed: {e}")))?;

    let disposition = format!("attachment; filename=\"{}\"", document.file_name);
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document.bytes,
    )
        .into_response())
}
