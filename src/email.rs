//! E-mail address validation
//!
//! Syntax only: no DNS or deliverability lookups.

use std::str::FromStr;
use std::sync::LazyLock;

use email_address::EmailAddress;
use log::debug;
use regex::Regex;
use serde::Serialize;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern must be a valid regex")
});

/// Outcome of validating one address
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailResult {
    /// Whether the address is well formed
    pub is_valid: bool,
    /// Input as supplied
    pub email: String,
    /// Trimmed address with a lowercased domain, only when valid
    pub normalized: Option<String>,
    /// Human-readable outcome
    pub message: String,
}

/// Validate an e-mail address
///
/// ```
/// use easycut::email::validate_email;
///
/// let result = validate_email(" Cliente@Barbearia.COM ");
/// assert!(result.is_valid);
/// assert_eq!(result.normalized.as_deref(), Some("Cliente@barbearia.com"));
///
/// assert!(!validate_email("user@domain..com").is_valid);
/// ```
#[must_use]
pub fn validate_email(raw: &str) -> EmailResult {
    match normalize(raw) {
        Ok(normalized) => EmailResult {
            is_valid: true,
            email: raw.to_string(),
            normalized: Some(normalized),
            message: "valid email".to_string(),
        },
        Err(message) => {
            debug!("email {raw:?} rejected: {message}");
            EmailResult {
                is_valid: false,
                email: raw.to_string(),
                normalized: None,
                message: message.to_string(),
            }
        },
    }
}

/// Shorthand for `validate_email(raw).is_valid`
#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    normalize(raw).is_ok()
}

fn normalize(raw: &str) -> Result<String, &'static str> {
    let email = raw.trim();
    if email.is_empty() {
        return Err("email must not be empty");
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err("invalid email format");
    }

    // dot placement and domain labels
    let address = EmailAddress::from_str(email).map_err(|err| {
        debug!("email {email:?} failed structural check: {err}");
        "invalid email format"
    })?;

    Ok(format!("{}@{}", address.local_part(), address.domain().to_ascii_lowercase()))
}
