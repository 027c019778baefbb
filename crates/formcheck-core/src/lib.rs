pub mod checksum;
pub mod config;
pub mod diagnostic;
pub mod engine;
pub mod field;
pub mod rules;

pub use checksum::{compute_check_digits, is_valid_identification_number};
pub use config::{check_format, ConfigError, FormCheckConfig};
pub use diagnostic::{FieldInvalid, ValidationOutcome};
pub use engine::FieldValidator;
pub use field::FieldValue;
pub use rules::FieldRule;
