//! Error types for the entry form and checkout submission.

use crate::form::FieldName;
use std::fmt;

/// A locally detected problem with the entered card details.
///
/// Always recoverable: the user edits the field and submits again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The card number failed the Luhn check (or had no digits).
    Checksum,
}

impl ValidationError {
    /// Short machine-readable reason, e.g. `"checksum"`.
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::Checksum => "checksum",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checksum => write!(f, "invalid checksum (Luhn check failed)"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A field event the form cannot apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// No field has this key.
    UnknownField(String),

    /// The field is not part of this form's schema.
    FieldNotInSchema(FieldName),

    /// A checkbox value was sent for a text field, or text for a checkbox.
    KindMismatch {
        /// The field that received the value.
        field: FieldName,
        /// Whether the field expects a checkbox value.
        expects_checkbox: bool,
    },
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownField(key) => write!(f, "unknown field '{}'", key.escape_default()),
            Self::FieldNotInSchema(field) => {
                write!(f, "field '{}' is not enabled in this form", field.key())
            }
            Self::KindMismatch {
                field,
                expects_checkbox: true,
            } => write!(f, "field '{}' expects a checkbox value", field.key()),
            Self::KindMismatch { field, .. } => {
                write!(f, "field '{}' expects a text value", field.key())
            }
        }
    }
}

impl std::error::Error for FormError {}

/// The card processor call did not settle successfully.
///
/// The cause is kept for logging only. Users always see the same
/// generic failure notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    /// The request never completed (connection, DNS, timeout in transport).
    Transport(String),

    /// The processor answered but refused the request.
    Rejected {
        /// Status code reported by the processor.
        status: u16,
    },
}

impl fmt::Display for DeliveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(cause) => write!(f, "transport failure: {}", cause),
            Self::Rejected { status } => write!(f, "processor rejected request with status {}", status),
        }
    }
}

impl std::error::Error for DeliveryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(ValidationError::Checksum.reason(), "checksum");
        assert_eq!(
            FormError::FieldNotInSchema(FieldName::Email).to_string(),
            "field 'email' is not enabled in this form"
        );
        assert_eq!(
            FormError::KindMismatch {
                field: FieldName::SaveInfo,
                expects_checkbox: true
            }
            .to_string(),
            "field 'saveInfo' expects a checkbox value"
        );
        assert_eq!(
            DeliveryError::Rejected { status: 502 }.to_string(),
            "processor rejected request with status 502"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValidationError>();
        assert_send_sync::<FormError>();
        assert_send_sync::<DeliveryError>();
    }
}
