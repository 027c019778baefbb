use crate::rules::{utf16_len, FieldRule};

const MIN_ADDRESS_LEN: usize = 5;

pub struct AddressRule;

impl FieldRule for AddressRule {
    fn rule_id(&self) -> &'static str {
        "address"
    }

    fn field_names(&self) -> &'static [&'static str] {
        &["address"]
    }

    fn description(&self) -> &'static str {
        "At least 5 characters"
    }

    fn check(&self, _field: &str, value: &str) -> Result<(), String> {
        if utf16_len(value) < MIN_ADDRESS_LEN {
            return Err("Address too short.".to_string());
        }
        Ok(())
    }
}
