use crate::checksum::is_valid_identification_number;
use crate::rules::FieldRule;

pub struct IdentificationNumberRule;

impl FieldRule for IdentificationNumberRule {
    fn rule_id(&self) -> &'static str {
        "identification_number"
    }

    fn field_names(&self) -> &'static [&'static str] {
        &["identification_number"]
    }

    fn description(&self) -> &'static str {
        "11 digits with two valid check digits"
    }

    fn check(&self, _field: &str, value: &str) -> Result<(), String> {
        if !is_valid_identification_number(value) {
            return Err(
                "Invalid identification number. Enter a numeric and valid one.".to_string(),
            );
        }
        Ok(())
    }
}
