//! Shape checks shared by the request types.

use crate::error::{AppError, Result};

/// Require a non-blank string.
pub fn require_non_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} cannot be empty", field)));
    }
    Ok(())
}

/// Require a plain decimal string (digits, at most one `.`) greater than zero.
///
/// Only the shape is checked, so amounts of any size pass, including
/// uint256 values in a token's smallest unit.
pub fn require_positive_decimal(field: &str, value: &str) -> Result<()> {
    require_non_blank(field, value)?;

    let trimmed = value.trim();
    let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));
    let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());

    if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction) {
        return Err(AppError::Validation(format!(
            "{} must be a decimal number, got '{}'",
            field, value
        )));
    }

    if !trimmed.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        return Err(AppError::Validation(format!(
            "{} must be greater than zero, got '{}'",
            field, value
        )));
    }
    Ok(())
}

/// Require `BUY` or `SELL` (any case).
pub fn require_side(value: &str) -> Result<()> {
    match value.trim().to_uppercase().as_str() {
        "BUY" | "SELL" => Ok(()),
        _ => Err(AppError::Validation(format!("side must be BUY or SELL, got '{}'", value))),
    }
}

/// Require a 1-based page number or page size.
pub fn require_at_least_one(field: &str, value: Option<u32>) -> Result<()> {
    match value {
        Some(0) => Err(AppError::Validation(format!("{} must be at least 1", field))),
        _ => Ok(()),
    }
}

/// Check that a numeric time range is not inverted.
///
/// Non-numeric bounds are forwarded untouched; the exchange decides how to
/// read them.
pub fn require_time_range(begin: Option<&str>, end: Option<&str>) -> Result<()> {
    if let Some(begin) = begin {
        require_non_blank("beginTime", begin)?;
    }
    if let Some(end) = end {
        require_non_blank("endTime", end)?;
    }

    if let (Some(begin), Some(end)) = (begin, end) {
        if let (Ok(b), Ok(e)) = (begin.trim().parse::<u64>(), end.trim().parse::<u64>()) {
            if b > e {
                return Err(AppError::Validation(format!(
                    "beginTime ({}) must not be after endTime ({})",
                    begin, end
                )));
            }
        }
    }
    Ok(())
}
