//! Tests for content integrity validation.

use omni_topics::{
    DiagnosticKind, TopicMetadataOverrides, ValidationConfig, build_index, create_category,
    create_topic, run_validation, validate,
};

const LONG_BODY: &str =
    "This body is deliberately written to be well over the sixty character mark.";

fn body(len: usize) -> String {
    "a".repeat(len)
}

/// Two topics sharing a key yield one duplicate diagnostic, for the second.
#[test]
fn test_duplicate_reported_once() {
    let index = build_index(vec![create_category(
        "A",
        vec![
            create_topic("Closures", LONG_BODY, TopicMetadataOverrides::new()),
            create_topic("closures", LONG_BODY, TopicMetadataOverrides::new()),
        ],
    )]);
    let diagnostics = validate(&index);

    let duplicates: Vec<_> = diagnostics
        .iter()
        .filter(|d| d.kind == DiagnosticKind::DuplicateKey)
        .collect();
    assert_eq!(duplicates.len(), 1);
    assert_eq!(duplicates[0].location.topic, 1);
    assert_eq!(duplicates[0].topic_key.as_deref(), Some("closures"));
}

/// Three occurrences yield two duplicate diagnostics.
#[test]
fn test_every_later_occurrence_reported() {
    let index = build_index(vec![
        create_category(
            "A",
            vec![create_topic("X", LONG_BODY, TopicMetadataOverrides::new())],
        ),
        create_category(
            "B",
            vec![
                create_topic("X", LONG_BODY, TopicMetadataOverrides::new()),
                create_topic("x", LONG_BODY, TopicMetadataOverrides::new()),
            ],
        ),
    ]);
    let report = run_validation(&index, &ValidationConfig::default());

    assert_eq!(report.count(DiagnosticKind::DuplicateKey), 2);
    assert_eq!(report.topic_count, 3);
}

/// Empty or 49-character content is thin; exactly 50 is enough.
#[test]
fn test_content_threshold() {
    let index = build_index(vec![create_category(
        "A",
        vec![
            create_topic("Empty", "", TopicMetadataOverrides::new()),
            create_topic("Short", body(49), TopicMetadataOverrides::new()),
            create_topic("Exact", body(50), TopicMetadataOverrides::new()),
        ],
    )]);
    let diagnostics = validate(&index);

    let thin: Vec<Option<&str>> = diagnostics
        .iter()
        .filter(|d| d.kind == DiagnosticKind::EmptyContent)
        .map(|d| d.topic_key.as_deref())
        .collect();
    assert_eq!(thin, vec![Some("empty"), Some("short")]);
}

/// The threshold comes from config.
#[test]
fn test_content_threshold_configurable() {
    let short = create_topic("Short", body(20), TopicMetadataOverrides::new());
    let index = build_index(vec![create_category("A", vec![short])]);

    let strict = run_validation(&index, &ValidationConfig::default());
    assert_eq!(strict.count(DiagnosticKind::EmptyContent), 1);

    let relaxed = run_validation(
        &index,
        &ValidationConfig::default().with_min_content_chars(10),
    );
    assert!(relaxed.is_clean());
}

/// Blank titles are reported as missing.
#[test]
fn test_missing_title() {
    let index = build_index(vec![create_category(
        "A",
        vec![
            create_topic("", LONG_BODY, TopicMetadataOverrides::new()),
            create_topic(" \t ", LONG_BODY, TopicMetadataOverrides::new()),
        ],
    )]);
    let report = run_validation(&index, &ValidationConfig::default());

    assert_eq!(report.count(DiagnosticKind::MissingTitle), 2);
    // Both derive the empty key, so the second is also a duplicate.
    assert_eq!(report.count(DiagnosticKind::DuplicateKey), 1);
}

/// A dangling prerequisite is reported once; a resolvable one is not.
#[test]
fn test_prerequisites() {
    let index = build_index(vec![
        create_category(
            "A",
            vec![create_topic(
                "useEffect",
                LONG_BODY,
                TopicMetadataOverrides::new().with_prerequisites(["nonexistent-key"]),
            )],
        ),
        create_category(
            "B",
            vec![
                create_topic("useState", LONG_BODY, TopicMetadataOverrides::new()),
                create_topic(
                    "useReducer",
                    LONG_BODY,
                    TopicMetadataOverrides::new().with_prerequisites(["usestate"]),
                ),
            ],
        ),
    ]);
    let diagnostics = validate(&index);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::InvalidPrerequisite);
    assert_eq!(diagnostics[0].topic_key.as_deref(), Some("useeffect"));
    assert!(diagnostics[0].message.contains("nonexistent-key"));
}

/// A topic with several defects reports each of them.
#[test]
fn test_checks_are_independent() {
    let index = build_index(vec![create_category(
        "A",
        vec![
            create_topic("Hooks", LONG_BODY, TopicMetadataOverrides::new()),
            create_topic(
                "Hooks",
                "tiny",
                TopicMetadataOverrides::new().with_prerequisites(["a", "b"]),
            ),
        ],
    )]);
    let report = run_validation(&index, &ValidationConfig::default());

    assert_eq!(report.count(DiagnosticKind::DuplicateKey), 1);
    assert_eq!(report.count(DiagnosticKind::EmptyContent), 1);
    assert_eq!(report.count(DiagnosticKind::InvalidPrerequisite), 2);
    assert_eq!(report.diagnostics.len(), 4);
    assert!(report.diagnostics.iter().all(|d| d.location.topic == 1));
}

/// Validation leaves the index untouched and can be repeated.
#[test]
fn test_validation_is_repeatable() {
    let index = build_index(vec![create_category(
        "A",
        vec![create_topic("X", "", TopicMetadataOverrides::new())],
    )]);
    assert_eq!(validate(&index), validate(&index));
    assert_eq!(index.topic_count(), 1);
}

/// Disabled validation reports nothing even for defective content.
#[test]
fn test_disabled_validation() {
    let index = build_index(vec![create_category(
        "A",
        vec![create_topic("", "", TopicMetadataOverrides::new())],
    )]);
    let report = run_validation(&index, &ValidationConfig::disabled());

    assert!(report.skipped);
    assert!(report.is_clean());
}

/// Two "X" topics: lookup keeps the second, one duplicate, no thin content.
#[test]
fn test_end_to_end_duplicate_scenario() {
    let first = create_topic("X", body(50), TopicMetadataOverrides::new());
    let second = create_topic("X", body(64), TopicMetadataOverrides::new());
    let index = build_index(vec![create_category("A", vec![first, second.clone()])]);

    assert_eq!(index.get_topic("x"), Some(&second));

    let diagnostics = validate(&index);
    assert_eq!(
        diagnostics
            .iter()
            .filter(|d| d.kind == DiagnosticKind::DuplicateKey)
            .count(),
        1
    );
    assert_eq!(
        diagnostics
            .iter()
            .filter(|d| d.kind == DiagnosticKind::EmptyContent)
            .count(),
        0
    );
}

/// Reports serialize with snake_case kind codes.
#[test]
fn test_report_json_shape() {
    let index = build_index(vec![create_category(
        "A",
        vec![create_topic("X", "", TopicMetadataOverrides::new())],
    )]);
    let report = run_validation(&index, &ValidationConfig::default());
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["diagnostics"][0]["kind"], "empty_content");
    assert_eq!(value["diagnostics"][0]["topic_key"], "x");
    assert_eq!(value["skipped"], false);
}
