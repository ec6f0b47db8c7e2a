//! Modulo-11 check digit computation for CPF and CNPJ

use super::ValidationError;

/// Number of base digits in a CPF (before the two check digits)
pub const CPF_BASE_LEN: usize = 9;

/// Number of base digits in a CNPJ (before the two check digits)
pub const CNPJ_BASE_LEN: usize = 12;

const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Compute the two CPF check digits for 9 base digits
///
/// Weights run 10..2 for the first digit and 11..2 for the second, the
/// second pass including the first check digit.
///
/// # Examples
///
/// ```
/// use easycut::document::check_digits_cpf;
///
/// assert_eq!(check_digits_cpf("111444777").unwrap(), (3, 5));
/// assert!(check_digits_cpf("11144477").is_err());
/// ```
pub fn check_digits_cpf(base: &str) -> Result<(u32, u32), ValidationError> {
    let mut digits = parse_digits(base, CPF_BASE_LEN)?;

    let first = weighted_check_digit(&digits, (2..=10).rev());
    digits.push(first);
    let second = weighted_check_digit(&digits, (2..=11).rev());

    Ok((first, second))
}

/// Compute the two CNPJ check digits for 12 base digits
///
/// # Examples
///
/// ```
/// use easycut::document::check_digits_cnpj;
///
/// assert_eq!(check_digits_cnpj("112223330001").unwrap(), (8, 1));
/// ```
pub fn check_digits_cnpj(base: &str) -> Result<(u32, u32), ValidationError> {
    let mut digits = parse_digits(base, CNPJ_BASE_LEN)?;

    let first = weighted_check_digit(&digits, CNPJ_FIRST_WEIGHTS);
    digits.push(first);
    let second = weighted_check_digit(&digits, CNPJ_SECOND_WEIGHTS);

    Ok((first, second))
}

/// Weighted sum modulo 11; remainders 0 and 1 map to 0
fn weighted_check_digit(digits: &[u32], weights: impl IntoIterator<Item = u32>) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    let remainder = sum % 11;
    if remainder < 2 { 0 } else { 11 - remainder }
}

fn parse_digits(base: &str, expected: usize) -> Result<Vec<u32>, ValidationError> {
    let digits = base
        .chars()
        .map(|c| {
            c.to_digit(10)
                .ok_or_else(|| ValidationError::Internal(format!("non-digit character {c:?}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if digits.len() != expected {
        return Err(ValidationError::Internal(format!(
            "expected {expected} base digits, got {}",
            digits.len()
        )));
    }

    Ok(digits)
}
