use crate::rules::FieldRule;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Latin letters, including the accented Latin-1 range, and whitespace
    static ref NAME_REGEX: Regex = Regex::new(r"^[A-Za-zÀ-ÿ\s]+$").unwrap();
}

pub struct NameRule;

impl FieldRule for NameRule {
    fn rule_id(&self) -> &'static str {
        "name"
    }

    fn field_names(&self) -> &'static [&'static str] {
        &["name"]
    }

    fn description(&self) -> &'static str {
        "Letters and spaces only"
    }

    fn check(&self, _field: &str, value: &str) -> Result<(), String> {
        if !NAME_REGEX.is_match(value) {
            return Err("Invalid name. Use only letters and spaces.".to_string());
        }
        Ok(())
    }
}
