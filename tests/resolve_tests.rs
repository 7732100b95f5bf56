//! Integration tests for resolving property paths against value trees.

use proppath::path::ast::PropertyPath;
use proppath::path::error::PathError;
use proppath::path::evaluator::{self, Evaluator};
use serde_json::{json, Value};

fn make_store() -> Value {
    json!({
        "user": {
            "name": "Alice",
            "emails": [
                {"address": "alice@example.com", "verified": true},
                {"address": "a.smith@example.com", "verified": false}
            ]
        },
        "limits": {"daily": 100, "monthly": 2000}
    })
}

/// Test resolving the canonical nested path end to end.
#[test]
fn test_resolve_nested_path() {
    let root = make_store();
    let path = PropertyPath::parse("user.emails[0].address").unwrap();
    let found = Evaluator::new(&root).get(&path);
    assert_eq!(found, Some(&json!("alice@example.com")));
}

/// Test that a negative index counts back from the end of the array.
#[test]
fn test_resolve_negative_index() {
    let root = make_store();
    let found = evaluator::get(&root, "user.emails[-1].verified").unwrap();
    assert_eq!(found, Some(&json!(false)));
}

/// Test that a bracketed key indexes into an object.
#[test]
fn test_resolve_map_key() {
    let root = make_store();
    let found = evaluator::get(&root, "limits[monthly]").unwrap();
    assert_eq!(found, Some(&json!(2000)));
}

/// Test that misses resolve to None rather than an error.
#[test]
fn test_resolve_misses_are_none() {
    let root = make_store();
    assert_eq!(evaluator::get(&root, "user.phone").unwrap(), None);
    assert_eq!(evaluator::get(&root, "user.emails[9]").unwrap(), None);
    assert_eq!(evaluator::get(&root, "user.name.first").unwrap(), None);
}

/// Test that malformed paths surface as parse errors, not misses.
#[test]
fn test_resolve_reports_parse_error() {
    let root = make_store();
    assert_eq!(
        evaluator::get(&root, "user.emails[0"),
        Err(PathError::UnmatchedBracket { position: 6 })
    );
}

/// Test updating a nested value in place through get_mut.
#[test]
fn test_resolve_mut_updates_value() {
    let mut root = make_store();
    let slot = evaluator::get_mut(&mut root, "user.emails[1].verified")
        .unwrap()
        .unwrap();
    *slot = json!(true);
    assert_eq!(root["user"]["emails"][1]["verified"], json!(true));
}

/// Test that a leading bracket addresses a top-level array directly.
#[test]
fn test_resolve_array_root() {
    let root = json!(["zero", "one", "two"]);
    let found = evaluator::get(&root, "[1]").unwrap();
    assert_eq!(found, Some(&json!("one")));
}

/// Test resolving paths over a YAML-authored fixture.
#[test]
fn test_resolve_yaml_fixture() {
    let yaml = r#"
server:
  hosts:
    - name: alpha
      port: 8080
    - name: beta
      port: 8081
  timeouts:
    read: 30
"#;
    let root: Value = serde_yaml::from_str(yaml).unwrap();

    let found = evaluator::get(&root, "server.hosts[1].port").unwrap();
    assert_eq!(found, Some(&json!(8081)));

    let found = evaluator::get(&root, "server.timeouts[read]").unwrap();
    assert_eq!(found, Some(&json!(30)));
}
