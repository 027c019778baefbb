use crate::rules::FieldRule;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BANKING_DIGITS_REGEX: Regex = Regex::new(r"^[0-9]{3,}$").unwrap();
}

/// Bank code, branch and account number share one rule.
///
/// Any length of three or more digits passes; the exact branch or account
/// layout is not checked.
pub struct BankingRule;

impl FieldRule for BankingRule {
    fn rule_id(&self) -> &'static str {
        "banking"
    }

    fn field_names(&self) -> &'static [&'static str] {
        &["bank", "branch", "account"]
    }

    fn description(&self) -> &'static str {
        "3 or more digits"
    }

    fn check(&self, field: &str, value: &str) -> Result<(), String> {
        if !BANKING_DIGITS_REGEX.is_match(value) {
            return Err(format!(
                "The field \"{}\" must contain at least 3 numeric digits.",
                field
            ));
        }
        Ok(())
    }
}
