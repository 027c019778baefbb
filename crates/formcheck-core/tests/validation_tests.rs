// Integration tests for formcheck-core

use formcheck_core::{FieldValidator, FieldValue};

fn fields(pairs: &[(&str, &str)]) -> Vec<FieldValue> {
    pairs
        .iter()
        .map(|(name, value)| FieldValue::new(*name, *value))
        .collect()
}

#[test]
fn test_complete_valid_submission() {
    let validator = FieldValidator::new();
    let outcome = validator.validate(&fields(&[
        ("name", "João Silva"),
        ("identification_number", "11144477735"),
        ("phone", "11987654321"),
        ("address", "Rua A, 123"),
        ("email", "joao@x.com"),
        ("password", "abcdef"),
        ("bank", "001"),
        ("agencia", "1234"),
        ("conta", "56789"),
        ("price", "99,90"),
    ]));

    assert!(outcome.is_valid());
    assert!(outcome.messages().is_empty());
}

#[test]
fn test_every_invalid_field_reported_in_order() {
    let validator = FieldValidator::new();
    let outcome = validator.validate(&fields(&[
        ("name", "João1"),
        ("identification_number", "12345678900"),
        ("phone", "123"),
        ("address", "Rua"),
        ("email", "bad"),
        ("password", "12"),
        ("bank", "1"),
        ("price", "-5"),
    ]));

    assert!(!outcome.is_valid());
    assert_eq!(
        outcome.messages(),
        [
            "Invalid name. Use only letters and spaces.",
            "Invalid identification number. Enter a numeric and valid one.",
            "Invalid phone number. Use digits only, including area code.",
            "Address too short.",
            "Invalid email.",
            "Password must contain at least 6 characters.",
            "The field \"bank\" must contain at least 3 numeric digits.",
            "Invalid price. Must be a number greater than zero.",
        ]
    );

    let fields_in_error: Vec<_> = outcome.errors().iter().map(|e| e.field.as_str()).collect();
    assert_eq!(
        fields_in_error,
        [
            "name",
            "identification_number",
            "phone",
            "address",
            "email",
            "password",
            "bank",
            "price"
        ]
    );
}

#[test]
fn test_order_follows_input_not_rule_table() {
    let validator = FieldValidator::new();
    let outcome = validator.validate(&fields(&[("price", "0"), ("name", "Ana-Maria")]));
    assert_eq!(
        outcome.messages(),
        [
            "Invalid price. Must be a number greater than zero.",
            "Invalid name. Use only letters and spaces."
        ]
    );
}

#[test]
fn test_blank_fields_only_report_required() {
    let validator = FieldValidator::new();
    let names = [
        "name",
        "identification_number",
        "phone",
        "address",
        "email",
        "password",
        "bank",
        "branch",
        "account",
        "price",
        "comments",
    ];

    for name in names {
        for blank in ["", "   ", "\n\t"] {
            let outcome = validator.validate(&fields(&[(name, blank)]));
            assert_eq!(
                outcome.messages(),
                [format!("The field \"{}\" is required.", name)],
                "field {}",
                name
            );
        }
    }
}

#[test]
fn test_unknown_fields_pass_when_not_blank() {
    let validator = FieldValidator::new();
    let outcome = validator.validate(&fields(&[("comments", "anything at all"), ("x", "1")]));
    assert!(outcome.is_valid());
}

#[test]
fn test_validity_matches_message_count() {
    let validator = FieldValidator::new();
    let samples = [
        fields(&[]),
        fields(&[("email", "a@b.c")]),
        fields(&[("email", "a@b")]),
        fields(&[("bank", "12"), ("branch", "001")]),
        fields(&[("price", "10,50"), ("price_note", "")]),
        fields(&[("phone", "11987654321"), ("name", "Ana Maria")]),
    ];

    for sample in &samples {
        let outcome = validator.validate(sample);
        assert_eq!(outcome.is_valid(), outcome.messages().is_empty());
        assert_eq!(outcome.messages().len(), outcome.errors().len());
    }
}

#[test]
fn test_lengths_count_utf16_code_units() {
    let validator = FieldValidator::new();
    let outcome = validator.validate(&fields(&[("password", "🔒🔒🔒"), ("address", "😀😀😀")]));
    assert!(outcome.is_valid(), "{:?}", outcome.messages());

    let outcome = validator.validate(&fields(&[("password", "🔒🔒"), ("address", "😀😀")]));
    assert_eq!(
        outcome.messages(),
        [
            "Password must contain at least 6 characters.",
            "Address too short."
        ]
    );
}

#[test]
fn test_property_examples() {
    let validator = FieldValidator::new();
    let cases = [
        ("name", "Ana-Maria", false),
        ("name", "Ana Maria", true),
        ("phone", "11987654321", true),
        ("phone", "123", false),
        ("email", "a@b.c", true),
        ("email", "a@b", false),
        ("price", "10,50", true),
        ("price", "0", false),
        ("price", "abc", false),
        ("bank", "12", false),
        ("bank", "001", true),
    ];

    for (name, value, expected) in cases {
        let outcome = validator.validate(&fields(&[(name, value)]));
        assert_eq!(outcome.is_valid(), expected, "{}={}", name, value);
    }
}
