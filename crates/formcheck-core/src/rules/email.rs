use crate::rules::FieldRule;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// local@domain.tld, no whitespace or extra `@` in any part
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

pub struct EmailRule;

impl FieldRule for EmailRule {
    fn rule_id(&self) -> &'static str {
        "email"
    }

    fn field_names(&self) -> &'static [&'static str] {
        &["email"]
    }

    fn description(&self) -> &'static str {
        "local@domain.tld shape"
    }

    fn check(&self, _field: &str, value: &str) -> Result<(), String> {
        if !EMAIL_REGEX.is_match(value) {
            return Err("Invalid email.".to_string());
        }
        Ok(())
    }
}
