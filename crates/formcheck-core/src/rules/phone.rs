use crate::rules::FieldRule;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Area code plus number, digits only
    static ref PHONE_REGEX: Regex = Regex::new(r"^[0-9]{10,11}$").unwrap();
}

pub struct PhoneRule;

impl FieldRule for PhoneRule {
    fn rule_id(&self) -> &'static str {
        "phone"
    }

    fn field_names(&self) -> &'static [&'static str] {
        &["phone"]
    }

    fn description(&self) -> &'static str {
        "10 or 11 digits including area code"
    }

    fn check(&self, _field: &str, value: &str) -> Result<(), String> {
        if !PHONE_REGEX.is_match(value) {
            return Err("Invalid phone number. Use digits only, including area code.".to_string());
        }
        Ok(())
    }
}
