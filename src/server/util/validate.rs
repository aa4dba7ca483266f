//! Field-level validation rules shared by the service layer.
//!
//! Every function returns `AppError::Validation` with a client-facing message
//! on failure, so services can bubble them straight through with `?`.

use chrono::{DateTime, NaiveDate, Utc};

use crate::server::error::AppError;

/// Validates a record or reminder title (2 to 100 characters).
///
/// # Returns
/// - `Ok(())` - Title length is within bounds
/// - `Err(AppError::Validation)` - Title too short or too long
pub fn title(value: &str) -> Result<(), AppError> {
    let len = value.trim().chars().count();

    if !(2..=100).contains(&len) {
        return Err(AppError::Validation(
            "Title must be between 2 and 100 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validates a record description (10 to 1000 characters).
pub fn description(value: &str) -> Result<(), AppError> {
    let len = value.trim().chars().count();

    if !(10..=1000).contains(&len) {
        return Err(AppError::Validation(
            "Description must be between 10 and 1000 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validates a user's display name (2 to 50 characters).
pub fn name(value: &str) -> Result<(), AppError> {
    let len = value.trim().chars().count();

    if !(2..=50).contains(&len) {
        return Err(AppError::Validation(
            "Name must be between 2 and 50 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validates an email address shape.
///
/// Intentionally loose: one `@` with a dot somewhere after it. Deliverability
/// is proven by the verification email flow, not by the regex arms race.
pub fn email(value: &str) -> Result<(), AppError> {
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    };

    if !valid {
        return Err(AppError::Validation(
            "Please provide a valid email address".to_string(),
        ));
    }

    Ok(())
}

/// Validates password complexity.
///
/// At least 6 characters with one uppercase letter, one lowercase letter, and
/// one digit.
pub fn password(value: &str) -> Result<(), AppError> {
    let long_enough = value.chars().count() >= 6;
    let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = value.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());

    if !(long_enough && has_upper && has_lower && has_digit) {
        return Err(AppError::Validation(
            "Password must be at least 6 characters and contain an uppercase letter, a lowercase letter, and a number".to_string(),
        ));
    }

    Ok(())
}

/// Validates a gender value against the accepted set.
pub fn gender(value: &str) -> Result<(), AppError> {
    match value {
        "male" | "female" | "other" => Ok(()),
        _ => Err(AppError::Validation(format!("Invalid gender '{value}'"))),
    }
}

/// Validates that a date of birth is not in the future.
pub fn date_of_birth(value: NaiveDate) -> Result<(), AppError> {
    if value > Utc::now().date_naive() {
        return Err(AppError::Validation(
            "Date of birth cannot be in the future".to_string(),
        ));
    }

    Ok(())
}

/// Validates that a record is not dated in the future.
pub fn record_date(value: DateTime<Utc>) -> Result<(), AppError> {
    if value > Utc::now() {
        return Err(AppError::Validation(
            "Date of record cannot be in the future".to_string(),
        ));
    }

    Ok(())
}

/// Validates that a next-visit date does not precede the record date.
pub fn visit_after_record(
    date_of_record: DateTime<Utc>,
    date_of_next_visit: DateTime<Utc>,
) -> Result<(), AppError> {
    if date_of_next_visit < date_of_record {
        return Err(AppError::Validation(
            "Next visit date cannot be before the record date".to_string(),
        ));
    }

    Ok(())
}

/// Checks that a numeric reading falls inside a plausible clinical range.
fn in_range<T: PartialOrd + std::fmt::Display>(
    value: T,
    min: T,
    max: T,
    label: &str,
) -> Result<(), AppError> {
    if value < min || value > max {
        return Err(AppError::Validation(format!(
            "{label} must be between {min} and {max}"
        )));
    }

    Ok(())
}

/// Validates a set of optional vital sign readings.
///
/// Ranges follow plausible clinical bounds rather than strict medical limits,
/// catching unit mistakes (grams instead of kilograms) and typos.
pub fn vitals(
    systolic: Option<i32>,
    diastolic: Option<i32>,
    heart_rate: Option<i32>,
    temperature: Option<f64>,
    weight: Option<f64>,
    height: Option<f64>,
) -> Result<(), AppError> {
    if let Some(v) = systolic {
        in_range(v, 50, 250, "Systolic blood pressure")?;
    }
    if let Some(v) = diastolic {
        in_range(v, 30, 150, "Diastolic blood pressure")?;
    }
    if let Some(v) = heart_rate {
        in_range(v, 30, 200, "Heart rate")?;
    }
    if let Some(v) = temperature {
        in_range(v, 35.0, 42.0, "Temperature")?;
    }
    if let Some(v) = weight {
        in_range(v, 1.0, 500.0, "Weight")?;
    }
    if let Some(v) = height {
        in_range(v, 50.0, 250.0, "Height")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    /// Tests title and description length boundaries.
    #[test]
    fn length_bounds() {
        assert!(title("Checkup").is_ok());
        assert!(title("x").is_err());
        assert!(title(&"x".repeat(101)).is_err());

        assert!(description("Annual physical examination").is_ok());
        assert!(description("too short").is_err());
        assert!(description(&"x".repeat(1001)).is_err());
    }

    /// Tests accepted and rejected email shapes.
    #[test]
    fn email_shapes() {
        assert!(email("jane@example.com").is_ok());
        assert!(email("jane.doe@sub.example.co").is_ok());
        assert!(email("not-an-email").is_err());
        assert!(email("@example.com").is_err());
        assert!(email("jane@nodot").is_err());
        assert!(email("jane@.com").is_err());
    }

    /// Tests each password complexity requirement in isolation.
    #[test]
    fn password_complexity() {
        assert!(password("Abc123").is_ok());
        assert!(password("Ab1").is_err()); // too short
        assert!(password("abcdef1").is_err()); // no uppercase
        assert!(password("ABCDEF1").is_err()); // no lowercase
        assert!(password("Abcdefg").is_err()); // no digit
    }

    /// Tests the accepted gender values.
    #[test]
    fn gender_values() {
        assert!(gender("male").is_ok());
        assert!(gender("female").is_ok());
        assert!(gender("other").is_ok());
        assert!(gender("prefer-not-to-say").is_err());
        assert!(gender("unknown").is_err());
    }

    /// Tests that future birth dates are rejected.
    #[test]
    fn birth_date_not_in_future() {
        let today = Utc::now().date_naive();

        assert!(date_of_birth(today).is_ok());
        assert!(date_of_birth(today + Duration::days(1)).is_err());
    }

    /// Tests that future record dates are rejected.
    #[test]
    fn record_date_not_in_future() {
        let now = Utc::now();

        assert!(record_date(now - Duration::days(30)).is_ok());
        assert!(record_date(now + Duration::days(30)).is_err());
    }

    /// Tests the record date / next visit ordering rule.
    #[test]
    fn visit_ordering() {
        let record = Utc::now();
        let visit = record + Duration::days(14);

        assert!(visit_after_record(record, visit).is_ok());
        assert!(visit_after_record(visit, record).is_err());
    }

    /// Tests vital sign range boundaries.
    #[test]
    fn vital_ranges() {
        assert!(vitals(Some(120), Some(80), Some(72), Some(36.6), Some(70.0), Some(175.0)).is_ok());
        assert!(vitals(None, None, None, None, None, None).is_ok());

        assert!(vitals(Some(300), None, None, None, None, None).is_err());
        assert!(vitals(None, Some(10), None, None, None, None).is_err());
        assert!(vitals(None, None, Some(250), None, None, None).is_err());
        assert!(vitals(None, None, None, Some(45.0), None, None).is_err());
        assert!(vitals(None, None, None, None, Some(7000.0), None).is_err());
        assert!(vitals(None, None, None, None, None, Some(20.0)).is_err());
    }
}
