use crate::rules::FieldRule;

pub struct PriceRule;

impl FieldRule for PriceRule {
    fn rule_id(&self) -> &'static str {
        "price"
    }

    fn field_names(&self) -> &'static [&'static str] {
        &["price"]
    }

    fn description(&self) -> &'static str {
        "Number greater than zero, comma or period as decimal separator"
    }

    fn check(&self, _field: &str, value: &str) -> Result<(), String> {
        // Only the first comma is taken as the decimal separator
        let normalized = value.replacen(',', ".", 1);
        match parse_leading_float(&normalized) {
            Some(price) if price > 0.0 => Ok(()),
            _ => Err("Invalid price. Must be a number greater than zero.".to_string()),
        }
    }
}

/// Parse the longest prefix of `s` that forms a decimal number.
///
/// Trailing text is ignored (`"12abc"` reads as 12). Returns `None` when no
/// digits lead the string.
fn parse_leading_float(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut end = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            end = 1;
            true
        }
        Some(b'+') => {
            end = 1;
            false
        }
        _ => false,
    };

    if s[end..].starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let mut j = end + 1;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        let frac_digits = j - (end + 1);
        if mantissa_digits + frac_digits > 0 {
            end = j;
            mantissa_digits += frac_digits;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    // An exponent only counts when digits follow it
    if end < len && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut j = end + 1;
        if j < len && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }

    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_prices() {
        for ok in ["10,50", "99,90", "10.50", "1", ",5", ".5", "1e3", "Infinity"] {
            assert!(PriceRule.check("price", ok).is_ok(), "{} should pass", ok);
        }
    }

    #[test]
    fn rejects_zero_negative_and_non_numeric() {
        for bad in ["0", "0,00", "-5", "abc", "-", ".", "e5", "-Infinity"] {
            assert_eq!(
                PriceRule.check("price", bad),
                Err("Invalid price. Must be a number greater than zero.".to_string()),
                "{} should fail",
                bad
            );
        }
    }

    #[test]
    fn trailing_text_is_ignored() {
        assert_eq!(parse_leading_float("12abc"), Some(12.0));
        assert_eq!(parse_leading_float("1.5,3"), Some(1.5));
        assert_eq!(parse_leading_float("2e"), Some(2.0));
        assert_eq!(parse_leading_float("2e-1x"), Some(0.2));
    }

    #[test]
    fn only_first_comma_is_converted() {
        // "1,5,3" reads as 1.5
        assert!(PriceRule.check("price", "1,5,3").is_ok());
        assert!(PriceRule.check("price", "0,0,5").is_err());
    }
}
