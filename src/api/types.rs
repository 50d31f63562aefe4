use serde::Serialize;

use crate::models::Case;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CaseDto {
    pub id: i32,
    pub client: String,
    pub case_type: String,
    pub start_date: String,
    pub status: String,
}

impl From<Case> for CaseDto {
    fn from(case: Case) -> Self {
        Self {
            id: case.id,
            client: case.client,
            case_type: case.case_type.to_string(),
            start_date: case.start_date.format("%Y-%m-%d").to_string(),
            status: case.status.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FeeQuoteDto {
    pub subtotal: f64,
    pub iva: f64,
    pub total: f64,
    pub subtotal_display: String,
    pub iva_display: String,
    pub total_display: String,
}

#[derive(Debug, Serialize)]
pub struct DocumentKindDto {
    pub kind: &'static str,
    pub title: &'static str,
    pub fields: &'static [&'static str],
    pub generated: bool,
}

#[derive(Debug, Serialize)]
pub struct StatusDto {
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub database: &'static str,
}
