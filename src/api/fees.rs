use axum::Json;
use serde::Deserialize;

use super::{ApiError, ApiResponse, FeeQuoteDto};
use crate::fees::{FeeQuote, format_quetzales};

#[derive(Debug, Deserialize)]
pub struct FeeQuoteRequest {
    pub hours: f64,
    pub hourly_rate: f64,
    #[serde(default)]
    pub include_iva: bool,
}

/// POST /fees/quote
/// Bounds (hours >= 1, rate >= Q50) are enforced here; the calculator
/// itself is total.
pub async fn quote(
    Json(payload): Json<FeeQuoteRequest>,
) -> Result<Json<ApiResponse<FeeQuoteDto>>, ApiError> {
    if !payload.hours.is_finite() || payload.hours < 1.0 {
        return Err(ApiError::validation("Hours must be at least 1"));
    }
    if !payload.hourly_rate.is_finite() || payload.hourly_rate < 50.0 {
        return Err(ApiError::validation("Hourly rate must be at least Q50"));
    }

    let quote = FeeQuote::compute(payload.hours, payload.hourly_rate, payload.include_iva);

    Ok(Json(ApiResponse::success(FeeQuoteDto {
        subtotal: quote.subtotal,
        iva: quote.iva,
        total: quote.total,
        subtotal_display: format_quetzales(quote.subtotal),
        iva_display: format_quetzales(quote.iva),
        total_display: format_quetzales(quote.total),
    })))
}
