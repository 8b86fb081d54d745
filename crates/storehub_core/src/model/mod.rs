//! Domain model for tenants (companies) and their stores.
//!
//! # Responsibility
//! - Define canonical records used by repository and service layers.
//! - Own field normalization and length rules shared by both entities.
//!
//! # Invariants
//! - Every entity is identified by a server-generated UUID.
//! - A store's `company_id` is fixed at construction and never reassigned.

pub mod company;
pub mod store;

/// Maximum length (in characters) of company and store names.
pub const NAME_MAX_CHARS: usize = 255;
/// Maximum length (in characters) of a store address.
pub const ADDRESS_MAX_CHARS: usize = 500;

/// Field-level validation failure, raised before any storage access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must not be blank")]
    Blank { field: &'static str },
    #[error("{field} must be at most {max} characters, got {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

/// Trims a required text field and enforces the length bound.
pub fn normalize_required(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Blank { field });
    }
    check_length(field, trimmed, max)?;
    Ok(trimmed.to_string())
}

/// Trims an optional text field. Blank input collapses to `None`.
pub fn normalize_optional(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<Option<String>, ValidationError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(trimmed) => {
            check_length(field, trimmed, max)?;
            Ok(Some(trimmed.to_string()))
        }
    }
}

fn check_length(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{normalize_optional, normalize_required, ValidationError};

    #[test]
    fn required_field_is_trimmed() {
        assert_eq!(normalize_required("name", "  Acme  ", 10).unwrap(), "Acme");
    }

    #[test]
    fn required_field_rejects_whitespace_only() {
        let err = normalize_required("name", " \t ", 10).unwrap_err();
        assert_eq!(err, ValidationError::Blank { field: "name" });
    }

    #[test]
    fn length_is_counted_in_chars_not_bytes() {
        assert!(normalize_required("name", "ééééé", 5).is_ok());
        let err = normalize_required("name", "éééééé", 5).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { actual: 6, .. }));
    }

    #[test]
    fn optional_blank_collapses_to_none() {
        assert_eq!(normalize_optional("address", Some("   "), 5).unwrap(), None);
        assert_eq!(normalize_optional("address", None, 5).unwrap(), None);
    }
}
