pub mod address;
pub mod banking;
pub mod email;
pub mod identification_number;
pub mod name;
pub mod password;
pub mod phone;
pub mod price;

/// Trait that all field rules must implement
pub trait FieldRule: Send + Sync {
    /// Unique identifier for this rule
    fn rule_id(&self) -> &'static str;

    /// Field names this rule is dispatched for
    fn field_names(&self) -> &'static [&'static str];

    /// One-line description for rule listings
    fn description(&self) -> &'static str;

    /// Check a trimmed, non-empty value submitted under `field`.
    ///
    /// On failure returns the message shown to the user.
    fn check(&self, field: &str, value: &str) -> Result<(), String>;
}

/// Length in UTF-16 code units, the unit browsers count form input in.
///
/// Characters outside the Basic Multilingual Plane count twice.
pub(crate) fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}
