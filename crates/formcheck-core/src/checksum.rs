//! Check-digit validation for 11-digit identification numbers.
//!
//! The last two digits are check digits derived from weighted sums of the
//! digits before them, modulo 11.

const ID_LEN: usize = 11;
const BASE_LEN: usize = 9;

/// Keep only ASCII digits; masks like `111.444.777-35` are accepted.
fn digits_of(input: &str) -> Vec<u32> {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .filter_map(|c| c.to_digit(10))
        .collect()
}

/// Weights run from `digits.len() + 1` down to 2.
fn check_digit(digits: &[u32]) -> u32 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| d * (top - i as u32))
        .sum();

    let digit = 11 - (sum % 11);
    if digit >= 10 {
        0
    } else {
        digit
    }
}

/// Returns true when `input` holds exactly 11 digits (separators are ignored)
/// whose two trailing check digits match the preceding nine.
///
/// Numbers made of a single repeated digit are always rejected.
pub fn is_valid_identification_number(input: &str) -> bool {
    let digits = digits_of(input);

    if digits.len() != ID_LEN || digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    if digits[9] != check_digit(&digits[..9]) {
        return false;
    }

    digits[10] == check_digit(&digits[..10])
}

/// Compute both check digits for a 9-digit base.
///
/// Returns `None` unless `base` contains exactly nine digits.
pub fn compute_check_digits(base: &str) -> Option<(u8, u8)> {
    let mut digits = digits_of(base);
    if digits.len() != BASE_LEN {
        return None;
    }

    let first = check_digit(&digits);
    digits.push(first);
    let second = check_digit(&digits);

    Some((first as u8, second as u8))
}
