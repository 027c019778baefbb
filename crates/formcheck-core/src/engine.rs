use crate::config::{ConfigError, FormCheckConfig};
use crate::diagnostic::{FieldInvalid, ValidationOutcome};
use crate::field::FieldValue;
use crate::rules::FieldRule;
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::{debug, info};

/// Runs the field rules over a submitted form
pub struct FieldValidator {
    rules: Vec<Box<dyn FieldRule>>,
    /// Field name -> index into `rules`
    dispatch: HashMap<&'static str, usize>,
    config: FormCheckConfig,
}

impl FieldValidator {
    /// Create a validator with the full rule set and default config
    pub fn new() -> Self {
        Self::with_default_rules(FormCheckConfig::default())
    }

    /// Create a validator honoring the aliases and ignored fields in `config`
    pub fn from_config(config: FormCheckConfig) -> Result<Self, ConfigError> {
        let validator = Self::with_default_rules(config);
        validator.config.validate(&validator.known_fields())?;
        Ok(validator)
    }

    fn with_default_rules(config: FormCheckConfig) -> Self {
        let rules: Vec<Box<dyn FieldRule>> = vec![
            Box::new(crate::rules::name::NameRule),
            Box::new(crate::rules::identification_number::IdentificationNumberRule),
            Box::new(crate::rules::phone::PhoneRule),
            Box::new(crate::rules::address::AddressRule),
            Box::new(crate::rules::email::EmailRule),
            Box::new(crate::rules::password::PasswordRule),
            Box::new(crate::rules::banking::BankingRule),
            Box::new(crate::rules::price::PriceRule),
        ];

        let mut dispatch = HashMap::new();
        for (index, rule) in rules.iter().enumerate() {
            for name in rule.field_names() {
                dispatch.insert(*name, index);
            }
        }

        Self {
            rules,
            dispatch,
            config,
        }
    }

    /// Validate every field, in the order given
    pub fn validate(&self, fields: &[FieldValue]) -> ValidationOutcome {
        self.run(fields, None)
    }

    /// Validate with only the listed rules enabled.
    ///
    /// Blank values are still reported for every field.
    pub fn validate_with_rules(
        &self,
        fields: &[FieldValue],
        rule_ids: &[&str],
    ) -> ValidationOutcome {
        self.run(fields, Some(rule_ids))
    }

    /// Validate independent submissions in parallel; outcomes keep input order
    pub fn validate_batch(
        &self,
        submissions: &[Vec<FieldValue>],
        rule_ids: Option<&[&str]>,
    ) -> Vec<ValidationOutcome> {
        let outcomes: Vec<ValidationOutcome> = submissions
            .par_iter()
            .map(|fields| self.run(fields, rule_ids))
            .collect();

        let invalid = outcomes.iter().filter(|o| !o.is_valid()).count();
        info!("Validated {} submissions: {} invalid", outcomes.len(), invalid);
        outcomes
    }

    /// Rule dispatched for a submitted field name, after alias resolution
    pub fn rule_for(&self, field: &str) -> Option<&dyn FieldRule> {
        let name = self.config.resolve_field(field);
        self.dispatch.get(name).map(|&index| self.rules[index].as_ref())
    }

    /// Get list of all available rules
    pub fn list_rules(&self) -> Vec<(&'static str, &'static [&'static str], &'static str)> {
        self.rules
            .iter()
            .map(|rule| (rule.rule_id(), rule.field_names(), rule.description()))
            .collect()
    }

    fn known_fields(&self) -> Vec<&'static str> {
        self.rules
            .iter()
            .flat_map(|rule| rule.field_names().iter().copied())
            .collect()
    }

    fn run(&self, fields: &[FieldValue], rule_ids: Option<&[&str]>) -> ValidationOutcome {
        let mut errors = Vec::new();

        for field in fields {
            if self.config.should_ignore(&field.name) {
                debug!("Skipping ignored field '{}'", field.name);
                continue;
            }

            let value = field.value.trim();
            if value.is_empty() {
                debug!("Field '{}' is blank", field.name);
                errors.push(FieldInvalid::required(&field.name));
                continue;
            }

            let rule = match self.rule_for(&field.name) {
                Some(rule) => rule,
                None => continue,
            };

            if let Some(ids) = rule_ids {
                if !ids.contains(&rule.rule_id()) {
                    continue;
                }
            }

            if let Err(message) = rule.check(&field.name, value) {
                debug!("Field '{}' rejected by rule {}", field.name, rule.rule_id());
                errors.push(FieldInvalid::new(&field.name, rule.rule_id(), message));
            }
        }

        debug!(
            "Validation pass complete: {} fields, {} errors",
            fields.len(),
            errors.len()
        );
        ValidationOutcome::from_errors(errors)
    }
}

impl Default for FieldValidator {
    fn default() -> Self {
        Self::new()
    }
}
