//! Brazilian phone number validation
//!
//! Numbers are accepted in the usual national layouts (`(11) 99999-9999`,
//! `11999999999`, `+55 11 99999-9999`). The area code (DDD) must be one in
//! use by Anatel; the table can be replaced through configuration.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use serde::Serialize;

/// Country calling code for Brazil
pub const COUNTRY_CODE: &str = "55";

const MIN_DIGITS: usize = 10;
const MAX_DIGITS: usize = 13;

/// Area codes in use, grouped by state
pub const DEFAULT_DDDS: &[&str] = &[
    "11", "12", "13", "14", "15", "16", "17", "18", "19", // SP
    "21", "22", "24", // RJ
    "27", "28", // ES
    "31", "32", "33", "34", "35", "37", "38", // MG
    "41", "42", "43", "44", "45", "46", // PR
    "47", "48", "49", // SC
    "51", "53", "54", "55", // RS
    "61", // DF
    "62", "64", // GO
    "63", // TO
    "65", "66", // MT
    "67", // MS
    "68", // AC
    "69", // RO
    "71", "73", "74", "75", "77", // BA
    "79", // SE
    "81", "87", // PE
    "82", // AL
    "83", // PB
    "84", // RN
    "85", "88", // CE
    "86", "89", // PI
    "91", "93", "94", // PA
    "92", "97", // AM
    "95", // RR
    "96", // AP
    "98", "99", // MA
];

static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+55\s?)?(\(?[1-9]{2}\)?)\s?([0-9]{4,5})-?([0-9]{4})$")
        .expect("phone pattern must be a valid regex")
});

/// Line type inferred from the national number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PhoneType {
    /// 11-digit number with the mobile `9` prefix
    Mobile,
    /// 10-digit fixed line
    Landline,
    /// Anything else
    Unknown,
}

impl std::fmt::Display for PhoneType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mobile => write!(f, "mobile"),
            Self::Landline => write!(f, "landline"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Outcome of validating one phone number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneResult {
    /// Whether the number passed every check
    pub is_valid: bool,
    /// Input as supplied
    pub phone: String,
    /// National formatting for valid numbers, the input otherwise
    pub formatted: String,
    /// Line type, `Unknown` for invalid numbers
    pub phone_type: PhoneType,
    /// `+55...` form for WhatsApp links, only for valid numbers
    pub whatsapp: Option<String>,
    /// Human-readable outcome
    pub message: String,
}

/// Phone validator with a configurable DDD table
#[derive(Debug, Clone)]
pub struct PhoneValidator {
    ddds: BTreeSet<String>,
}

impl Default for PhoneValidator {
    fn default() -> Self {
        Self::with_ddds(DEFAULT_DDDS.iter().copied())
    }
}

impl PhoneValidator {
    /// Validator using the built-in DDD table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validator accepting only the given area codes
    #[must_use]
    pub fn with_ddds<I, S>(ddds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ddds: ddds.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether an area code is accepted
    #[must_use]
    pub fn is_valid_ddd(&self, ddd: &str) -> bool {
        self.ddds.contains(ddd)
    }

    /// Check the layout, length and area code of a number
    ///
    /// Returns the rejection message on failure.
    pub fn validate_format(&self, raw: &str) -> Result<(), String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err("phone must not be empty".to_string());
        }

        let digits = clean(trimmed);
        if digits.len() < MIN_DIGITS {
            return Err(format!("phone must have at least {MIN_DIGITS} digits"));
        }
        if digits.len() > MAX_DIGITS {
            return Err("phone has too many digits".to_string());
        }

        if !PHONE_PATTERN.is_match(trimmed) && !trimmed.starts_with("+55") {
            return Err("invalid phone format for Brazil".to_string());
        }

        let ddd = if digits.starts_with(COUNTRY_CODE) && digits.len() > 11 {
            &digits[2..4]
        } else {
            &digits[..2]
        };
        if !self.is_valid_ddd(ddd) {
            return Err(format!("DDD {ddd} is not valid in Brazil"));
        }

        Ok(())
    }

    /// Validate a number and derive its display forms
    #[must_use]
    pub fn validate(&self, raw: &str) -> PhoneResult {
        match self.validate_format(raw) {
            Ok(()) => PhoneResult {
                is_valid: true,
                phone: raw.to_string(),
                formatted: format(raw),
                phone_type: phone_type(raw),
                whatsapp: Some(whatsapp(raw)),
                message: "valid phone".to_string(),
            },
            Err(message) => {
                debug!("phone {raw:?} rejected: {message}");
                PhoneResult {
                    is_valid: false,
                    phone: raw.to_string(),
                    formatted: raw.to_string(),
                    phone_type: PhoneType::Unknown,
                    whatsapp: None,
                    message,
                }
            },
        }
    }
}

/// Validate with the built-in DDD table
#[must_use]
pub fn validate_phone(raw: &str) -> PhoneResult {
    PhoneValidator::new().validate(raw)
}

/// Strip every character that is not an ASCII digit
#[must_use]
pub fn clean(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Digits without the leading `55` country code
///
/// The code is only stripped when more than 11 digits remain, so numbers in
/// DDD 55 are not mangled.
#[must_use]
pub fn national_number(raw: &str) -> String {
    let digits = clean(raw);
    match digits.strip_prefix(COUNTRY_CODE) {
        Some(rest) if digits.len() > 11 => rest.to_string(),
        _ => digits,
    }
}

/// National formatting: `(XX) XXXXX-XXXX` or `(XX) XXXX-XXXX`
///
/// ```
/// use easycut::phone::format;
///
/// assert_eq!(format("+55 11 99999-9999"), "(11) 99999-9999");
/// assert_eq!(format("1133334444"), "(11) 3333-4444");
/// assert_eq!(format("123"), "123");
/// ```
#[must_use]
pub fn format(raw: &str) -> String {
    let number = national_number(raw);
    match number.len() {
        0 => String::new(),
        11 => format!("({}) {}-{}", &number[..2], &number[2..7], &number[7..]),
        10 => format!("({}) {}-{}", &number[..2], &number[2..6], &number[6..]),
        _ => raw.to_string(),
    }
}

/// Infer the line type from the national number
#[must_use]
pub fn phone_type(raw: &str) -> PhoneType {
    let number = national_number(raw);
    match number.len() {
        11 if number.as_bytes()[2] == b'9' => PhoneType::Mobile,
        10 => PhoneType::Landline,
        _ => PhoneType::Unknown,
    }
}

/// E.164 form used in WhatsApp links (`+5511999999999`)
#[must_use]
pub fn whatsapp(raw: &str) -> String {
    let digits = clean(raw);
    if digits.is_empty() {
        return String::new();
    }
    if digits.starts_with(COUNTRY_CODE) && digits.len() > 11 {
        format!("+{digits}")
    } else {
        format!("+{COUNTRY_CODE}{digits}")
    }
}
