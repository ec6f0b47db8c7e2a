//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use easycut::document::{DocumentType, ErrorCode, validate_document};
use easycut::email::is_valid_email;
use easycut::phone::{PhoneType, format, phone_type, validate_phone};
use test_case::test_case;

// =============================================================================
// Document Tests
// =============================================================================

#[test_case("11144477735", true, DocumentType::Cpf ; "bare cpf")]
#[test_case("111.444.777-35", true, DocumentType::Cpf ; "punctuated cpf")]
#[test_case("123.456.789-09", true, DocumentType::Cpf ; "sequential cpf")]
#[test_case("987.654.321-00", true, DocumentType::Cpf ; "cpf with zero check digits")]
#[test_case("123.456.789-10", false, DocumentType::Cpf ; "cpf wrong check digits")]
#[test_case("11222333000181", true, DocumentType::Cnpj ; "bare cnpj")]
#[test_case("12.345.678/0001-95", true, DocumentType::Cnpj ; "punctuated cnpj")]
#[test_case("12.345.678/0001-90", false, DocumentType::Cnpj ; "cnpj wrong check digits")]
#[test_case("documento-invalido", false, DocumentType::Unknown ; "no digits")]
#[test_case("1234567890", false, DocumentType::Unknown ; "ten digits")]
fn test_validate_document(input: &str, valid: bool, kind: DocumentType) {
    let result = validate_document(input);
    assert_eq!(result.is_valid, valid, "input={input:?} message={}", result.message);
    assert_eq!(result.document_type, kind);
}

#[test_case("", ErrorCode::EmptyInput ; "empty")]
#[test_case("111.444.777-3x", ErrorCode::WrongLength ; "ten digits and a letter")]
#[test_case("111.444.777-3 5", ErrorCode::FormatMismatch ; "inner space")]
#[test_case("22222222222", ErrorCode::RepeatedDigitSequence ; "repeated")]
#[test_case("11144477736", ErrorCode::ChecksumMismatch ; "checksum")]
fn test_document_error_codes(input: &str, code: ErrorCode) {
    assert_eq!(validate_document(input).error_code, Some(code));
}

#[test_case(ErrorCode::EmptyInput, "EMPTY_INPUT")]
#[test_case(ErrorCode::FormatMismatch, "FORMAT_MISMATCH")]
#[test_case(ErrorCode::WrongLength, "WRONG_LENGTH")]
#[test_case(ErrorCode::RepeatedDigitSequence, "REPEATED_DIGIT_SEQUENCE")]
#[test_case(ErrorCode::ChecksumMismatch, "CHECKSUM_MISMATCH")]
#[test_case(ErrorCode::Internal, "INTERNAL")]
fn test_error_code_strings(code: ErrorCode, expected: &str) {
    assert_eq!(code.as_str(), expected);
    assert_eq!(serde_json::to_value(code).unwrap(), expected);
}

// =============================================================================
// Phone Tests
// =============================================================================

#[test_case("(11) 99999-9999", true ; "mobile with punctuation")]
#[test_case("11999999999", true ; "mobile bare")]
#[test_case("+55 11 99999-9999", true ; "international")]
#[test_case("(21) 98765-4321", true ; "rio")]
#[test_case("(85) 99999-8888", true ; "fortaleza")]
#[test_case("1133334444", true ; "landline bare")]
#[test_case("(20) 99999-9999", false ; "unused ddd")]
#[test_case("119999999", false ; "too short")]
#[test_case("119999999999999", false ; "too long")]
#[test_case("abc-def-ghij", false ; "letters")]
#[test_case("11 9999 99999 9", false ; "odd grouping")]
fn test_validate_phone(input: &str, valid: bool) {
    let result = validate_phone(input);
    assert_eq!(result.is_valid, valid, "input={input:?} message={}", result.message);
}

#[test_case("(11) 99999-9999", PhoneType::Mobile ; "mobile")]
#[test_case("+55 (11) 3333-4444", PhoneType::Landline ; "landline")]
#[test_case("(11) 89999-9999", PhoneType::Unknown ; "eleven digits without mobile prefix")]
#[test_case("123", PhoneType::Unknown ; "too short")]
fn test_phone_type(input: &str, expected: PhoneType) {
    assert_eq!(phone_type(input), expected);
}

#[test_case("11999999999", "(11) 99999-9999" ; "mobile")]
#[test_case("5511999999999", "(11) 99999-9999" ; "with country code")]
#[test_case("1133334444", "(11) 3333-4444" ; "landline")]
#[test_case("", "" ; "empty")]
#[test_case("12345", "12345" ; "unformattable")]
fn test_phone_format(input: &str, expected: &str) {
    assert_eq!(format(input), expected);
}

// =============================================================================
// Email Tests
// =============================================================================

#[test_case("usuario@exemplo.com", true ; "simple")]
#[test_case("teste@domain.co.uk", true ; "multi label tld")]
#[test_case("email+tag@example.org", true ; "plus tag")]
#[test_case("invalid-email", false ; "no at")]
#[test_case("@domain.com", false ; "no local part")]
#[test_case("user@", false ; "no domain")]
#[test_case("user@domain", false ; "no tld")]
#[test_case("user@domain.", false ; "trailing dot")]
#[test_case("user@.domain.com", false ; "leading dot in domain")]
#[test_case("user@domain..com", false ; "double dot in domain")]
#[test_case("user name@domain.com", false ; "space in local part")]
#[test_case("user@domain name.com", false ; "space in domain")]
#[test_case("", false ; "empty")]
fn test_is_valid_email(input: &str, expected: bool) {
    assert_eq!(is_valid_email(input), expected, "input={input:?}");
}
