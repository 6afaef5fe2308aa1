//! Integration tests: `exclusiveMaximum` bounds read from the document
//! being validated.
//!
//! Documents and schemas are parsed from JSON/YAML text the way a schema
//! compiler would hand them over.

use std::sync::Arc;

use jsv_core::{resolve, Node};
use jsv_schema::{
    ExclusiveMaximumValidator, ParentSchema, ValidationConfig, ValidationContext,
};
use proptest::prelude::*;

fn validator_for(schema_json: &str) -> ExclusiveMaximumValidator {
    let parent = ParentSchema::new(Node::from_json_str(schema_json).unwrap());
    ExclusiveMaximumValidator::from_parent(
        "#/properties/value/exclusiveMaximum",
        &parent,
        ValidationContext::shared(ValidationConfig::default()),
    )
    .unwrap()
}

#[test]
fn test_limits_scenario() {
    let validator = validator_for(r#"{"exclusiveMaximum": "$.limits.max"}"#);
    let root = Node::from_json_str(r#"{"limits": {"max": 100}, "value": 100}"#).unwrap();

    let messages = validator.validate(root.get("value"), &root, "/value");
    assert_eq!(messages.len(), 1);
    let msg = messages.iter().next().unwrap();
    assert_eq!(msg.at(), "/value");
    assert_eq!(msg.threshold(), Some("100"));
    assert_eq!(msg.keyword(), "exclusiveMaximum");

    let under = Node::from_json_str("99").unwrap();
    assert!(validator.validate(&under, &root, "/value").is_empty());
}

#[test]
fn test_absent_target_is_not_a_violation() {
    let validator = validator_for(r#"{"exclusiveMaximum": "$.limits.max"}"#);
    let root = Node::from_json_str(r#"{"limits": {}}"#).unwrap();
    let candidate = Node::from_json_str("1e400").unwrap();
    assert!(validator.validate(&candidate, &root, "/value").is_empty());
}

#[test]
fn test_non_numeric_target_is_not_a_violation() {
    let validator = validator_for(r#"{"exclusiveMaximum": "$.limits.max"}"#);
    for limits in [r#"{"max": "100"}"#, r#"{"max": null}"#, r#"{"max": [1]}"#, r#"{"max": {"v": 1}}"#] {
        let root = Node::from_json_str(&format!(r#"{{"limits": {limits}}}"#)).unwrap();
        assert!(
            validator.validate(&Node::Int(1_000), &root, "/value").is_empty(),
            "limits = {limits}"
        );
    }
}

#[test]
fn test_resolved_bound_uses_declared_integer_type() {
    let validator = validator_for(r#"{"type": "integer", "exclusiveMaximum": "$.cap"}"#);
    let root = Node::from_json_str(r#"{"cap": 10}"#).unwrap();
    // Textual numerals are compared exactly under the fixed-integer rule.
    let loose = ParentSchema::new(Node::from_json_str(r#"{"type": "integer", "exclusiveMaximum": "$.cap"}"#).unwrap());
    let loose = ExclusiveMaximumValidator::from_parent(
        "#/exclusiveMaximum",
        &loose,
        ValidationContext::shared(ValidationConfig { type_loose: true }),
    )
    .unwrap();

    assert_eq!(validator.validate(&Node::Int(10), &root, "/n").len(), 1);
    assert_eq!(loose.validate(&Node::from("10.00"), &root, "/n").len(), 1);
    assert!(loose.validate(&Node::from("9.99"), &root, "/n").is_empty());
}

#[test]
fn test_resolved_decimal_keeps_literal_text() {
    let validator = validator_for(r#"{"exclusiveMaximum": "$.cap"}"#);
    let root = Node::from_json_str(r#"{"cap": 12.50}"#).unwrap();
    let messages = validator.validate(&Node::from_json_str("12.5").unwrap(), &root, "/n");
    assert_eq!(messages.iter().next().and_then(|m| m.threshold()), Some("12.50"));
}

#[test]
fn test_yaml_infinite_targets() {
    let validator = validator_for(r#"{"exclusiveMaximum": "$.cap"}"#);
    let open = Node::from_yaml_str("cap: .inf\n").unwrap();
    let closed = Node::from_yaml_str("cap: -.inf\n").unwrap();
    let candidate = Node::from_yaml_str("-.inf").unwrap();

    assert!(validator.validate(&Node::Int(i64::MAX), &open, "/n").is_empty());
    assert!(validator.validate(&Node::Float(f64::INFINITY), &open, "/n").is_empty());
    // Equality applies once both sides are negative infinity.
    let messages = validator.validate(&candidate, &closed, "/n");
    assert_eq!(messages.iter().next().and_then(|m| m.threshold()), Some("-Infinity"));
}

#[test]
fn test_bare_sentinel_resolves_to_root() {
    let validator = validator_for(r#"{"exclusiveMaximum": "$"}"#);
    let root = Node::from_json_str("7").unwrap();
    assert_eq!(validator.validate(&Node::Int(7), &root, "$").len(), 1);
    assert!(validator.validate(&Node::Int(6), &root, "$").is_empty());
}

#[test]
fn test_shared_validator_across_threads() {
    let validator = Arc::new(validator_for(r#"{"exclusiveMaximum": "$.cap"}"#));
    let handles: Vec<_> = (0..8i64)
        .map(|cap| {
            let validator = Arc::clone(&validator);
            std::thread::spawn(move || {
                let root = Node::object([("cap", Node::Int(cap)), ("v", Node::Int(4))]);
                validator.validate(root.get("v"), &root, "$.v").len()
            })
        })
        .collect();
    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(counts, vec![1, 1, 1, 1, 1, 0, 0, 0]);
}

proptest! {
    /// Same path, same document: same result, every time.
    #[test]
    fn dynamic_validation_is_idempotent(cap in any::<i64>(), v in any::<i64>()) {
        let validator = validator_for(r#"{"exclusiveMaximum": "$.limits.max"}"#);
        let root = Node::object([("limits", Node::object([("max", Node::Int(cap))]))]);
        let first = validator.validate(&Node::Int(v), &root, "/value");
        let second = validator.validate(&Node::Int(v), &root, "/value");
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), usize::from(v >= cap));
    }

    /// A dynamic bound behaves exactly like the literal it resolves to.
    #[test]
    fn dynamic_matches_literal(cap in any::<i64>(), v in any::<i64>()) {
        let dynamic = validator_for(r#"{"exclusiveMaximum": "$.cap"}"#);
        let literal = validator_for(&format!(r#"{{"exclusiveMaximum": {cap}}}"#));
        let root = Node::object([("cap", Node::Int(cap))]);
        prop_assert_eq!(resolve(&root, "$.cap"), &Node::Int(cap));
        prop_assert_eq!(
            dynamic.validate(&Node::Int(v), &root, "/v"),
            literal.validate(&Node::Int(v), &root, "/v")
        );
    }
}
