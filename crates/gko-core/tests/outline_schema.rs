//! Nested-form output validated against the exported JSON Schema.

use gko_core::{NodeKind, Outline, SpecNode};

fn validate(instance: &serde_json::Value) -> Vec<String> {
    let schema = serde_json::to_value(Outline::json_schema()).expect("schema serializes");
    let validator = jsonschema::validator_for(&schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn node(name: &str, kind: NodeKind, text: Option<&str>) -> SpecNode {
    SpecNode {
        name: name.to_string(),
        location: "suite_test.go:1:1".to_string(),
        text: text.map(str::to_string),
        kind,
        focused: false,
        pending: false,
        nodes: Vec::new(),
    }
}

#[test]
fn nested_outline_matches_schema() {
    let mut context = node("PContext", NodeKind::Container, Some("B"));
    context.pending = true;
    let mut inner = node("It", NodeKind::Spec, Some("b"));
    inner.pending = true;
    context.nodes.push(inner);

    let mut describe = node("Describe", NodeKind::Container, Some("A"));
    describe.nodes.push(node("JustBeforeEach", NodeKind::Hook, None));
    describe.nodes.push(node("It", NodeKind::Spec, Some("a")));
    describe.nodes.push(context);

    let outline = Outline::new(vec![describe]);
    let instance: serde_json::Value =
        serde_json::from_str(&outline.to_json().expect("json")).expect("parse");

    let errors = validate(&instance);
    assert!(errors.is_empty(), "schema violations: {errors:?}");
}

#[test]
fn empty_outline_matches_schema() {
    let instance = serde_json::to_value(Outline::default()).expect("json");
    assert!(validate(&instance).is_empty());
}

#[test]
fn identical_outlines_serialize_identically() {
    let build = || {
        let mut describe = node("Describe", NodeKind::Container, Some("A"));
        describe.nodes.push(node("It", NodeKind::Spec, Some("a")));
        Outline::new(vec![describe])
    };
    assert_eq!(
        build().to_json_pretty().expect("json"),
        build().to_json_pretty().expect("json")
    );
}
