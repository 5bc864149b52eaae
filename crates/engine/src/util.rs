//! Internal helpers for input validation.
//!
//! These utilities centralize validation so every write path enforces the
//! same invariants before touching the database.

use chrono::NaiveDate;

use crate::{EngineError, MoneyCents, ResultEngine};

/// Trim a required text field and reject it when empty.
pub(crate) fn normalize_required_text(value: &str, label: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidInput(format!("{label} must not be empty")));
    }
    Ok(trimmed.to_string())
}

/// Accept amounts in `(0, MoneyCents::MAX_ENTRY]`.
pub(crate) fn ensure_amount(amount: MoneyCents, label: &str) -> ResultEngine<()> {
    if !amount.is_positive() {
        return Err(EngineError::InvalidInput(format!("{label} must be > 0")));
    }
    if amount > MoneyCents::MAX_ENTRY {
        return Err(EngineError::InvalidInput(format!(
            "{label} must not exceed {}",
            MoneyCents::MAX_ENTRY
        )));
    }
    Ok(())
}

/// Parses an ISO calendar date (`YYYY-MM-DD`).
///
/// ```rust
/// use engine::parse_date;
///
/// assert!(parse_date("2024-10-11").is_ok());
/// assert!(parse_date("2024-02-30").is_err());
/// ```
pub fn parse_date(value: &str) -> ResultEngine<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| EngineError::InvalidInput(format!("invalid date: {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_is_trimmed() {
        assert_eq!(normalize_required_text("  Food ", "category").unwrap(), "Food");
        assert_eq!(
            normalize_required_text("   ", "category"),
            Err(EngineError::InvalidInput(
                "category must not be empty".to_string()
            ))
        );
    }

    #[test]
    fn amounts_must_be_positive_and_bounded() {
        assert!(ensure_amount(MoneyCents::new(1), "amount").is_ok());
        assert!(ensure_amount(MoneyCents::MAX_ENTRY, "amount").is_ok());
        assert!(ensure_amount(MoneyCents::ZERO, "amount").is_err());
        assert!(ensure_amount(MoneyCents::new(-5), "amount").is_err());
        assert_eq!(
            ensure_amount(MoneyCents::new(MoneyCents::MAX_ENTRY.cents() + 1), "amount"),
            Err(EngineError::InvalidInput(
                "amount must not exceed 100000000000.00".to_string()
            ))
        );
    }

    #[test]
    fn dates_must_be_iso_calendar_dates() {
        assert_eq!(
            parse_date("2024-10-11").unwrap(),
            NaiveDate::from_ymd_opt(2024, 10, 11).unwrap()
        );
        assert!(parse_date("11/10/2024").is_err());
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("").is_err());
    }
}
