use pretty_assertions::assert_eq;
use serde_json::json;

use super::*;

#[test]
fn normal_fixture_lines() {
    let source = include_str!("../../../../tests/fixtures/normal_test.go");
    let outline = parse_named("normal_test.go", source);
    assert_eq!(
        lines(&outline),
        vec![
            "Describe,NormalFixture,normal_test.go:8:9",
            "Describe,normal,normal_test.go:9:2",
            "It,normal,normal_test.go:10:3",
            "By,,normal_test.go:11:4",
            "By,,normal_test.go:12:4",
            "Context,normal,normal_test.go:16:2",
            "It,normal,normal_test.go:17:3",
            "When,normal,normal_test.go:22:2",
            "It,normal,normal_test.go:23:3",
            "It,normal,normal_test.go:28:2",
            "Specify,normal,normal_test.go:32:2",
            "Measure,normal,normal_test.go:36:2",
        ]
    );
}

#[test]
fn normal_fixture_shape() {
    let source = include_str!("../../../../tests/fixtures/normal_test.go");
    let outline = parse_named("normal_test.go", source);
    assert_eq!(outline.nodes().len(), 1);

    let root = &outline.nodes()[0];
    let children: Vec<_> = root.nodes.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(
        children,
        vec!["Describe", "Context", "When", "It", "Specify", "Measure"]
    );
    assert_eq!(root.nodes[0].nodes[0].nodes.len(), 2, "two By hooks");
    assert!(root.nodes[0].nodes[0].nodes.iter().all(|n| n.kind == NodeKind::Hook));
}

#[test]
fn focused_fixture_flags() {
    let source = include_str!("../../../../tests/fixtures/focused_test.go");
    let outline = parse_named("focused_test.go", source);
    let root = &outline.nodes()[0];
    assert!(!root.focused);

    let mut focused = Vec::new();
    outline.walk(|n| {
        if n.focused {
            focused.push(n.name.clone());
        }
    });
    assert_eq!(
        focused,
        vec!["FDescribe", "FContext", "FWhen", "FIt", "FSpecify", "FMeasure"]
    );

    // Leaves under a focused container keep their own flag.
    assert!(!root.nodes[0].nodes[0].focused);
    assert!(!outline.nodes().iter().any(|n| n.pending));
}

#[test]
fn pending_fixture_json() {
    let source = include_str!("../../../../tests/fixtures/pending_test.go");
    let outline = parse_named("pending_test.go", source);
    let value = serde_json::to_value(&outline).expect("serialize outline");
    let f = "pending_test.go";
    assert_eq!(
        value,
        json!([{
            "name": "Describe",
            "location": format!("{f}:7:9"),
            "text": "PendingFixture",
            "spec": false,
            "focused": false,
            "pending": false,
            "nodes": [
                {
                    "name": "PDescribe",
                    "location": format!("{f}:8:2"),
                    "text": "pending",
                    "spec": false,
                    "focused": false,
                    "pending": true,
                    "nodes": [{
                        "name": "It",
                        "location": format!("{f}:9:3"),
                        "text": "pending",
                        "spec": true,
                        "focused": false,
                        "pending": true,
                    }],
                },
                {
                    "name": "XContext",
                    "location": format!("{f}:14:2"),
                    "text": "pending",
                    "spec": false,
                    "focused": false,
                    "pending": true,
                    "nodes": [{
                        "name": "Context",
                        "location": format!("{f}:15:3"),
                        "text": "nested",
                        "spec": false,
                        "focused": false,
                        "pending": true,
                        "nodes": [{
                            "name": "It",
                            "location": format!("{f}:16:4"),
                            "text": "pending",
                            "spec": true,
                            "focused": false,
                            "pending": true,
                        }],
                    }],
                },
                {
                    "name": "PWhen",
                    "location": format!("{f}:22:2"),
                    "text": "pending",
                    "spec": false,
                    "focused": false,
                    "pending": true,
                    "nodes": [{
                        "name": "BeforeEach",
                        "location": format!("{f}:23:3"),
                        "text": "",
                        "spec": false,
                        "focused": false,
                        "pending": true,
                    }],
                },
                {
                    "name": "PIt",
                    "location": format!("{f}:28:2"),
                    "text": "pending",
                    "spec": true,
                    "focused": false,
                    "pending": true,
                },
                {
                    "name": "XSpecify",
                    "location": format!("{f}:32:2"),
                    "text": "pending",
                    "spec": true,
                    "focused": false,
                    "pending": true,
                },
                {
                    "name": "PMeasure",
                    "location": format!("{f}:36:2"),
                    "text": "pending",
                    "spec": true,
                    "focused": false,
                    "pending": true,
                },
                {
                    "name": "It",
                    "location": format!("{f}:40:2"),
                    "text": "not pending",
                    "spec": true,
                    "focused": false,
                    "pending": false,
                },
            ],
        }])
    );
}

#[test]
fn suite_fixture_only_has_hooks() {
    let source = include_str!("../../../../tests/fixtures/suite_test.go");
    let outline = parse_named("suite_test.go", source);
    assert_eq!(
        lines(&outline),
        vec![
            "BeforeSuite,,suite_test.go:15:9",
            "AfterSuite,,suite_test.go:19:9",
        ]
    );
}

#[test]
fn nodot_fixture_is_not_recognized() {
    let source = include_str!("../../../../tests/fixtures/nodot_test.go");
    let outline = parse_named("nodot_test.go", source);
    assert!(outline.is_empty());
    assert_eq!(outline.to_json().expect("json"), "[]");
}
