use crate::rules::{utf16_len, FieldRule};

const MIN_PASSWORD_LEN: usize = 6;

pub struct PasswordRule;

impl FieldRule for PasswordRule {
    fn rule_id(&self) -> &'static str {
        "password"
    }

    fn field_names(&self) -> &'static [&'static str] {
        &["password"]
    }

    fn description(&self) -> &'static str {
        "At least 6 characters"
    }

    fn check(&self, _field: &str, value: &str) -> Result<(), String> {
        if utf16_len(value) < MIN_PASSWORD_LEN {
            return Err(format!(
                "Password must contain at least {} characters.",
                MIN_PASSWORD_LEN
            ));
        }
        Ok(())
    }
}
