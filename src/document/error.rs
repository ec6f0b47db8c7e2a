//! Document validation errors and their stable codes

use serde::Serialize;
use thiserror::Error;

use super::{CheckDetails, DocumentType};

/// Stable, machine-readable code for every way a document can be rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Nothing but whitespace was supplied
    EmptyInput,
    /// The text does not match the accepted CPF/CNPJ layout
    FormatMismatch,
    /// Wrong number of digits after cleaning
    WrongLength,
    /// Every digit is the same (`111.111.111-11`)
    RepeatedDigitSequence,
    /// Supplied check digits differ from the computed ones
    ChecksumMismatch,
    /// Unexpected fault inside the validator
    Internal,
}

impl ErrorCode {
    /// Get the error code string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyInput => "EMPTY_INPUT",
            Self::FormatMismatch => "FORMAT_MISMATCH",
            Self::WrongLength => "WRONG_LENGTH",
            Self::RepeatedDigitSequence => "REPEATED_DIGIT_SEQUENCE",
            Self::ChecksumMismatch => "CHECKSUM_MISMATCH",
            Self::Internal => "INTERNAL",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons a CPF or CNPJ is rejected
///
/// The `Display` text of each variant is the user-facing message carried by
/// [`ValidationResult`](super::ValidationResult).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Input was empty or whitespace only
    #[error("{} must not be empty", .0.label())]
    Empty(DocumentType),

    /// Input does not match the textual layout of the document
    #[error("invalid {} format", .0.label())]
    FormatMismatch(DocumentType),

    /// Digit count does not match the document type
    #[error("{} must have {} digits", .0.label(), .0.digit_count())]
    WrongLength(DocumentType),

    /// Digit count matches neither CPF nor CNPJ
    #[error("document must have 11 digits (CPF) or 14 digits (CNPJ)")]
    UnknownLength,

    /// All digits identical
    #[error("invalid {} (all digits are the same)", .0.label())]
    RepeatedDigits(DocumentType),

    /// Check digits do not match the base digits
    #[error("invalid {}: check digits do not match", .kind.label())]
    ChecksumMismatch {
        /// Document being validated
        kind: DocumentType,
        /// What was computed versus what was supplied
        details: CheckDetails,
    },

    /// Fault inside the checksum code (non-digit or wrong-sized base)
    #[error("validation error: {0}")]
    Internal(String),
}

impl ValidationError {
    /// Get the stable code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Empty(_) => ErrorCode::EmptyInput,
            Self::FormatMismatch(_) => ErrorCode::FormatMismatch,
            Self::WrongLength(_) | Self::UnknownLength => ErrorCode::WrongLength,
            Self::RepeatedDigits(_) => ErrorCode::RepeatedDigitSequence,
            Self::ChecksumMismatch { .. } => ErrorCode::ChecksumMismatch,
            Self::Internal(_) => ErrorCode::Internal,
        }
    }
}
