//! Fee quote arithmetic.
//!
//! Pure and total: input bounds (hours >= 1, rate >= 50) are enforced by
//! the API layer, not here.

use serde::Serialize;

/// Guatemalan VAT rate applied to professional fees.
pub const IVA_RATE: f64 = 0.12;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeeQuote {
    pub subtotal: f64,
    pub iva: f64,
    pub total: f64,
}

impl FeeQuote {
    #[must_use]
    pub fn compute(hours: f64, hourly_rate: f64, include_iva: bool) -> Self {
        let subtotal = hours * hourly_rate;
        let iva = if include_iva { subtotal * IVA_RATE } else { 0.0 };
        Self {
            subtotal,
            iva,
            total: subtotal + iva,
        }
    }
}

/// Format an amount the way the practice displays quetzales: `Q1500.00`.
#[must_use]
pub fn format_quetzales(amount: f64) -> String {
    format!("Q{amount:.2}")
}
