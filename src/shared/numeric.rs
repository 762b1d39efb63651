use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::core::error::{AppError, Result};

/// Convert a validated float into a NUMERIC column value with `scale` decimals
pub fn to_decimal(field: &str, value: f64, scale: u32) -> Result<Decimal> {
    Decimal::try_from(value)
        .map(|d| d.round_dp(scale))
        .map_err(|_| AppError::Validation(format!("{}: not a representable number", field)))
}

pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}
