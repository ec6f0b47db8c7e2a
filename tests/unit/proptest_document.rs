//! Property-based tests for the validators
//!
//! Uses proptest to verify properties that should hold for all inputs.

use easycut::document::{
    DocumentType, clean, format_document, validate_cnpj, validate_cpf, validate_document,
};
use easycut::email::validate_email;
use easycut::phone::validate_phone;
use proptest::prelude::*;

use crate::common::{cnpj_with_check_digits, cpf_with_check_digits};

fn is_repeated(digits: &str) -> bool {
    let bytes = digits.as_bytes();
    bytes.iter().all(|&b| b == bytes[0])
}

proptest! {
    /// Validators never panic, whatever the input
    #[test]
    fn never_panics(s in "\\PC*") {
        let _ = validate_cpf(&s);
        let _ = validate_cnpj(&s);
        let _ = validate_document(&s);
        let _ = validate_phone(&s);
        let _ = validate_email(&s);
    }

    /// Any CPF built with its own check digits validates
    #[test]
    fn generated_cpf_is_valid(base in "[0-9]{9}") {
        let cpf = cpf_with_check_digits(&base);
        prop_assume!(!is_repeated(&cpf));
        let result = validate_cpf(&cpf);
        prop_assert!(result.is_valid, "{} should be valid: {}", cpf, result.message);
        let expected = format_document(&cpf);
        prop_assert_eq!(result.formatted.as_deref(), Some(expected.as_str()));
    }

    /// Any CNPJ built with its own check digits validates through auto-detection
    #[test]
    fn generated_cnpj_is_valid(base in "[0-9]{12}") {
        let cnpj = cnpj_with_check_digits(&base);
        prop_assume!(!is_repeated(&cnpj));
        let result = validate_document(&cnpj);
        prop_assert!(result.is_valid, "{} should be valid: {}", cnpj, result.message);
        prop_assert_eq!(result.document_type, DocumentType::Cnpj);
    }

    /// Changing the last check digit always invalidates
    #[test]
    fn wrong_last_check_digit_is_invalid(base in "[0-9]{9}", bump in 1u32..10) {
        let cpf = cpf_with_check_digits(&base);
        let last = cpf.chars().last().and_then(|c| c.to_digit(10)).unwrap();
        let mutated = format!("{}{}", &cpf[..10], (last + bump) % 10);
        prop_assert!(!validate_cpf(&mutated).is_valid);
    }

    /// Every repeated-digit sequence is rejected
    #[test]
    fn repeated_digits_rejected(d in 0u8..10) {
        let digit = char::from(b'0' + d);
        let cpf: String = std::iter::repeat_n(digit, 11).collect();
        let cnpj: String = std::iter::repeat_n(digit, 14).collect();
        prop_assert!(!validate_cpf(&cpf).is_valid);
        prop_assert!(!validate_cnpj(&cnpj).is_valid);
    }

    /// Formatting twice equals formatting once
    #[test]
    fn format_is_idempotent(digits in "[0-9]{11}|[0-9]{14}") {
        let once = format_document(&clean(&digits));
        prop_assert_eq!(format_document(&clean(&once)), once);
    }

    /// Inputs with a digit count other than 11 or 14 are never valid
    #[test]
    fn other_lengths_are_unknown(digits in "[0-9]{0,10}|[0-9]{12,13}|[0-9]{15,20}") {
        let result = validate_document(&digits);
        prop_assert!(!result.is_valid);
        prop_assert_eq!(result.document_type, DocumentType::Unknown);
    }
}
