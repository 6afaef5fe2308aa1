//! Integration test: the `check` flow over the JSON/YAML fixtures in
//! `tests/fixtures/`.

use std::path::PathBuf;

use jsv_cli::check::{check_document, load_config, load_node, render, OutputFormat};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_dynamic_limit_violation_from_json() {
    let schema = load_node(&fixture("order.schema.json")).unwrap();
    let document = load_node(&fixture("order.json")).unwrap();
    let config = load_config(None, false).unwrap();

    let messages = check_document(&schema, &document, "$.total", "#/exclusiveMaximum", config).unwrap();
    assert_eq!(messages.len(), 1);
    let msg = messages.iter().next().unwrap();
    assert_eq!(msg.code(), "ORDER-LIMIT");
    assert_eq!(msg.threshold(), Some("250.00"));
    assert_eq!(
        render(&messages, OutputFormat::Text).unwrap(),
        "[ORDER-LIMIT] $.total: must have an exclusive maximum value of 250.00"
    );
}

#[test]
fn test_dynamic_limit_satisfied_from_yaml() {
    let schema = load_node(&fixture("order.schema.json")).unwrap();
    let document = load_node(&fixture("order-under.yaml")).unwrap();
    let messages = check_document(
        &schema,
        &document,
        "$.total",
        "#/exclusiveMaximum",
        load_config(None, false).unwrap(),
    )
    .unwrap();
    assert!(messages.is_empty());
}

#[test]
fn test_numeric_string_needs_loose_config() {
    let schema = load_node(&fixture("quantity.schema.yaml")).unwrap();
    let document = load_node(&fixture("quantity.json")).unwrap();

    let strict = load_config(None, false).unwrap();
    let messages = check_document(&schema, &document, "$.quantity", "#/exclusiveMaximum", strict).unwrap();
    assert!(messages.is_empty());

    let loose = load_config(Some(&fixture("loose.yaml")), false).unwrap();
    assert!(loose.type_loose);
    let messages = check_document(&schema, &document, "$.quantity", "#/exclusiveMaximum", loose).unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages.iter().next().unwrap().threshold(), Some("10"));
}

#[test]
fn test_absent_value_is_not_checked() {
    let schema = load_node(&fixture("quantity.schema.yaml")).unwrap();
    let document = load_node(&fixture("order.json")).unwrap();
    let messages = check_document(
        &schema,
        &document,
        "$.quantity",
        "#/exclusiveMaximum",
        load_config(None, false).unwrap(),
    )
    .unwrap();
    assert!(messages.is_empty());
}

#[test]
fn test_missing_file_is_an_error() {
    let err = load_node(&fixture("does-not-exist.json")).unwrap_err();
    assert!(err.to_string().starts_with("cannot read"), "got: {err}");
}
