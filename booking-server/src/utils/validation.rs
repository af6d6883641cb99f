//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! Limits are chosen based on reasonable UX limits for names and notes;
//! the embedded database does not enforce text lengths itself.

use chrono::{NaiveDate, NaiveTime};

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: menu item, category, full name, etc.
pub const MAX_NAME_LEN: usize = 200;

/// Menu item descriptions
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Minimal email shape check; full verification belongs to a mail flow
pub fn validate_email(value: &str) -> Result<(), AppError> {
    validate_required_text(value, "email", MAX_EMAIL_LEN)?;
    let (local, domain) = value
        .split_once('@')
        .ok_or_else(|| AppError::validation("email must contain '@'"))?;
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(AppError::validation("email is malformed"));
    }
    Ok(())
}

// ── Booking field parsing ───────────────────────────────────────────

/// Parse a booking date string ("2025-03-01")
///
/// 空串和格式错误都在写库之前拒绝
pub fn parse_booking_date(value: &str) -> Result<NaiveDate, AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation("booking_date must not be empty"));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("invalid booking_date: {value}")))
}

/// Parse a booking time string ("19:00" or "19:00:30")
pub fn parse_booking_time(value: &str) -> Result<NaiveTime, AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation("booking_time must not be empty"));
    }
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| AppError::validation(format!("invalid booking_time: {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_rejects_empty() {
        assert!(validate_required_text("", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("   ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("Table 5", "name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn test_required_text_rejects_overlong() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(validate_required_text(&long, "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_email_shape() {
        assert!(validate_email("diner@example.com").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("diner@nodot").is_err());
    }

    #[test]
    fn test_booking_date_parsing() {
        assert_eq!(
            parse_booking_date("2025-03-01").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
        assert!(parse_booking_date("").is_err());
        assert!(parse_booking_date("01/03/2025").is_err());
    }

    #[test]
    fn test_booking_time_parsing() {
        assert_eq!(
            parse_booking_time("19:00").unwrap(),
            NaiveTime::from_hms_opt(19, 0, 0).unwrap()
        );
        assert!(parse_booking_time("19:00:30").is_ok());
        assert!(parse_booking_time("").is_err());
        assert!(parse_booking_time("7pm").is_err());
    }
}
