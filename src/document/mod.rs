//! CPF and CNPJ validation
//!
//! Brazilian taxpayer numbers carry two modulo-11 check digits. This module
//! normalizes user input, classifies it by digit count, verifies the check
//! digits and produces the canonical punctuation:
//!
//! - CPF (individuals): 11 digits, `XXX.XXX.XXX-XX`
//! - CNPJ (companies): 14 digits, `XX.XXX.XXX/XXXX-XX`
//!
//! Rejections are values, never panics: every public entry point returns a
//! [`ValidationResult`] whose `message` is ready to show in a form.
//!
//! # Examples
//!
//! ```
//! use easycut::document::{validate_document, DocumentType};
//!
//! let result = validate_document("111.444.777-35");
//! assert!(result.is_valid);
//! assert_eq!(result.document_type, DocumentType::Cpf);
//! assert_eq!(result.formatted.as_deref(), Some("111.444.777-35"));
//!
//! let result = validate_document("documento-invalido");
//! assert!(!result.is_valid);
//! assert_eq!(result.document_type, DocumentType::Unknown);
//! ```

mod checksum;
mod error;

use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use serde::Serialize;

pub use checksum::{CNPJ_BASE_LEN, CPF_BASE_LEN, check_digits_cnpj, check_digits_cpf};
pub use error::{ErrorCode, ValidationError};

/// Digits in a CPF
pub const CPF_LEN: usize = 11;

/// Digits in a CNPJ
pub const CNPJ_LEN: usize = 14;

static CPF_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{3}\.?[0-9]{3}\.?[0-9]{3}-?[0-9]{2}$").expect("CPF pattern must be a valid regex")
});

static CNPJ_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}\.?[0-9]{3}\.?[0-9]{3}/?[0-9]{4}-?[0-9]{2}$")
        .expect("CNPJ pattern must be a valid regex")
});

/// Kind of taxpayer document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentType {
    /// Individual taxpayer number (11 digits)
    Cpf,
    /// Company taxpayer number (14 digits)
    Cnpj,
    /// Neither 11 nor 14 digits
    Unknown,
}

impl DocumentType {
    /// Expected digit count, 0 for `Unknown`
    #[must_use]
    pub const fn digit_count(self) -> usize {
        match self {
            Self::Cpf => CPF_LEN,
            Self::Cnpj => CNPJ_LEN,
            Self::Unknown => 0,
        }
    }

    /// Name used in messages ("CPF", "CNPJ", "document")
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
            Self::Unknown => "document",
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cpf => write!(f, "CPF"),
            Self::Cnpj => write!(f, "CNPJ"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Digits involved in a checksum comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckDetails {
    /// Digits preceding the check pair
    pub base_digits: String,
    /// Check pair computed from the base digits
    pub calculated_digits: String,
    /// Check pair found in the input
    pub provided_digits: String,
}

impl CheckDetails {
    /// The full digit string as supplied
    #[must_use]
    pub fn digits(&self) -> String {
        format!("{}{}", self.base_digits, self.provided_digits)
    }
}

/// Outcome of validating one CPF/CNPJ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Whether the document passed every check
    pub is_valid: bool,
    /// Type the input was validated as
    pub document_type: DocumentType,
    /// Canonical punctuation, only for valid documents
    pub formatted: Option<String>,
    /// Human-readable outcome
    pub message: String,
    /// Why the document was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ErrorCode>,
    /// Check digit comparison, present whenever the checksum was computed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<CheckDetails>,
}

impl ValidationResult {
    fn valid(kind: DocumentType, details: CheckDetails) -> Self {
        Self {
            is_valid: true,
            document_type: kind,
            formatted: Some(format_document(&details.digits())),
            message: format!("valid {}", kind.label()),
            error_code: None,
            details: Some(details),
        }
    }

    fn rejected(kind: DocumentType, error: ValidationError) -> Self {
        let code = error.code();
        let message = error.to_string();
        let details = match error {
            ValidationError::ChecksumMismatch { details, .. } => Some(details),
            _ => None,
        };

        Self {
            is_valid: false,
            document_type: kind,
            formatted: None,
            message,
            error_code: Some(code),
            details,
        }
    }
}

/// Strip every character that is not an ASCII digit
///
/// ```
/// assert_eq!(easycut::document::clean("11.222.333/0001-81"), "11222333000181");
/// assert_eq!(easycut::document::clean(""), "");
/// ```
#[must_use]
pub fn clean(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Classify already-cleaned digits by length
#[must_use]
pub const fn classify(digits: &str) -> DocumentType {
    match digits.len() {
        CPF_LEN => DocumentType::Cpf,
        CNPJ_LEN => DocumentType::Cnpj,
        _ => DocumentType::Unknown,
    }
}

/// Classify raw input by its digit count
#[must_use]
pub fn document_type(raw: &str) -> DocumentType {
    classify(&clean(raw))
}

/// Format as `XXX.XXX.XXX-XX`; anything that is not 11 digits is returned unchanged
#[must_use]
pub fn format_cpf(input: &str) -> String {
    let digits = clean(input);
    if digits.len() == CPF_LEN {
        format!("{}.{}.{}-{}", &digits[..3], &digits[3..6], &digits[6..9], &digits[9..])
    } else {
        input.to_string()
    }
}

/// Format as `XX.XXX.XXX/XXXX-XX`; anything that is not 14 digits is returned unchanged
#[must_use]
pub fn format_cnpj(input: &str) -> String {
    let digits = clean(input);
    if digits.len() == CNPJ_LEN {
        format!(
            "{}.{}.{}/{}-{}",
            &digits[..2],
            &digits[2..5],
            &digits[5..8],
            &digits[8..12],
            &digits[12..]
        )
    } else {
        input.to_string()
    }
}

/// Format by digit count, leaving other inputs unchanged
///
/// ```
/// use easycut::document::format_document;
///
/// assert_eq!(format_document("11144477735"), "111.444.777-35");
/// assert_eq!(format_document("11222333000181"), "11.222.333/0001-81");
/// assert_eq!(format_document("123"), "123");
/// ```
#[must_use]
pub fn format_document(input: &str) -> String {
    match document_type(input) {
        DocumentType::Cpf => format_cpf(input),
        DocumentType::Cnpj => format_cnpj(input),
        DocumentType::Unknown => input.to_string(),
    }
}

/// Validate a CPF in any common punctuation
#[must_use]
pub fn validate_cpf(raw: &str) -> ValidationResult {
    finish(DocumentType::Cpf, check(raw, DocumentType::Cpf))
}

/// Validate a CNPJ in any common punctuation
#[must_use]
pub fn validate_cnpj(raw: &str) -> ValidationResult {
    finish(DocumentType::Cnpj, check(raw, DocumentType::Cnpj))
}

/// Validate a CPF or CNPJ, chosen by digit count alone
#[must_use]
pub fn validate_document(raw: &str) -> ValidationResult {
    if raw.trim().is_empty() {
        return ValidationResult::rejected(
            DocumentType::Unknown,
            ValidationError::Empty(DocumentType::Unknown),
        );
    }

    match document_type(raw) {
        DocumentType::Cpf => validate_cpf(raw),
        DocumentType::Cnpj => validate_cnpj(raw),
        DocumentType::Unknown => {
            debug!("document {raw:?} has neither 11 nor 14 digits");
            ValidationResult::rejected(DocumentType::Unknown, ValidationError::UnknownLength)
        },
    }
}

/// Validate a batch, skipping empty entries and keeping input order
#[must_use]
pub fn validate_many<I, S>(inputs: I) -> Vec<(String, ValidationResult)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    inputs
        .into_iter()
        .filter(|input| !input.as_ref().is_empty())
        .map(|input| {
            let input = input.as_ref();
            (input.to_string(), validate_document(input))
        })
        .collect()
}

fn finish(kind: DocumentType, outcome: Result<CheckDetails, ValidationError>) -> ValidationResult {
    match outcome {
        Ok(details) => ValidationResult::valid(kind, details),
        Err(error) => {
            debug!("{kind} rejected: {error}");
            ValidationResult::rejected(kind, error)
        },
    }
}

fn check(raw: &str, kind: DocumentType) -> Result<CheckDetails, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty(kind));
    }

    let pattern = match kind {
        DocumentType::Cpf => &CPF_PATTERN,
        DocumentType::Cnpj => &CNPJ_PATTERN,
        DocumentType::Unknown => return Err(ValidationError::UnknownLength),
    };
    if !pattern.is_match(trimmed) {
        return Err(ValidationError::FormatMismatch(kind));
    }

    let digits = clean(trimmed);
    if digits.len() != kind.digit_count() {
        return Err(ValidationError::WrongLength(kind));
    }

    if is_repeated_sequence(&digits) {
        return Err(ValidationError::RepeatedDigits(kind));
    }

    let (base, provided) = digits.split_at(digits.len() - 2);
    let (first, second) = match kind {
        DocumentType::Cpf => check_digits_cpf(base)?,
        _ => check_digits_cnpj(base)?,
    };

    let details = CheckDetails {
        base_digits: base.to_string(),
        calculated_digits: format!("{first}{second}"),
        provided_digits: provided.to_string(),
    };

    if details.calculated_digits == details.provided_digits {
        Ok(details)
    } else {
        debug!(
            "{kind} check digits: expected {}, got {}",
            details.calculated_digits, details.provided_digits
        );
        Err(ValidationError::ChecksumMismatch { kind, details })
    }
}

fn is_repeated_sequence(digits: &str) -> bool {
    let mut bytes = digits.bytes();
    bytes.next().is_some_and(|first| bytes.all(|b| b == first))
}
