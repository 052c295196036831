//! Deadline parsing.

use crate::validation::ValidationError;
use chrono::NaiveDate;

const DEADLINE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` deadline.
///
/// Blank input means "no deadline" and yields `Ok(None)`.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDeadline`] when the input is not a valid
/// calendar date in `YYYY-MM-DD` form.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use todolist::task::domain::parse_deadline;
///
/// assert_eq!(parse_deadline(" ").ok(), Some(None));
/// assert_eq!(
///     parse_deadline("2025-02-28").ok().flatten(),
///     NaiveDate::from_ymd_opt(2025, 2, 28),
/// );
/// assert!(parse_deadline("2025-02-30").is_err());
/// ```
pub fn parse_deadline(raw: &str) -> Result<Option<NaiveDate>, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, DEADLINE_FORMAT)
        .map(Some)
        .map_err(|_| ValidationError::InvalidDeadline(trimmed.to_owned()))
}
