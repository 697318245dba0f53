//! Scenario: Reviewing an entity document
//!
//! Journey: A site owner publishes an AIML entity and fixes it finding by
//! finding until it scores full marks.

use serde_json::json;

use aiml_validator::{FindingCategory, Severity, Validator};

use crate::common::*;

/// SCENARIO: A wrong JSON-LD context is the only structural problem.
#[test]
fn scenario_wrong_context_is_single_error() {
    let doc = restaurant_with("@context", json!("https://wrong"));
    let result = Validator::default().validate(&doc);

    assert!(!result.is_valid);
    assert_eq!(result.errors.len(), 1, "errors: {:?}", result.errors);
    assert_eq!(result.errors[0].field, "@context");
    assert_eq!(result.errors[0].severity, Severity::Error);
    assert_eq!(
        result
            .findings()
            .filter(|f| f.category == FindingCategory::Structure)
            .count(),
        1
    );
}

/// SCENARIO: A restaurant without modules is told to add `location`.
#[test]
fn scenario_restaurant_missing_required_module() {
    let doc = restaurant_without(&["modules"]);
    let result = Validator::default().validate(&doc);

    assert!(result.is_valid, "errors: {:?}", result.errors);
    let warning = result
        .warnings
        .iter()
        .find(|w| w.field == "modules")
        .expect("expected a warning on modules");
    assert!(warning.message.contains("location"), "{}", warning.message);
    assert!(result.score < 100);
}

/// SCENARIO: A short English description is advisory only.
#[test]
fn scenario_short_description_is_advisory() {
    let forty = "A cozy trattoria in the heart of Verona.";
    assert_eq!(forty.chars().count(), 40);

    let doc = restaurant_with("description", json!({ "en": forty }));
    let result = Validator::default().validate(&doc);

    assert!(result.is_valid, "errors: {:?}", result.errors);
    let best_practice: Vec<_> = result
        .warnings
        .iter()
        .filter(|w| w.field == "description" && w.category == FindingCategory::BestPractice)
        .collect();
    assert_eq!(best_practice.len(), 1, "warnings: {:?}", result.warnings);
}

/// SCENARIO: From an empty draft to full marks.
///
/// Each step fixes one class of findings; the score never goes down.
#[test]
fn scenario_draft_to_full_marks() {
    let validator = Validator::default();

    // Step 1: a bare draft names only its type
    let draft = json!({"entityType": "restaurant", "name": "Luigi's"});
    let first = validator.validate(&draft);
    assert!(!first.is_valid);
    assert!(first.errors.iter().any(|e| e.field == "name"));

    // Step 2: identity and taxonomy fields, still with plain-string text
    let mut doc = restaurant();
    doc["name"] = json!("Luigi's Trattoria");
    let second = validator.validate(&doc);
    assert!(!second.is_valid);
    assert!(second.score >= first.score);

    // Step 3: every field in place
    let last = validator.validate(&restaurant());
    assert!(last.is_valid);
    assert_eq!(last.score, 100);
    assert_eq!(last.completeness, 100);
    let info = last.entity_info.expect("entity info for a valid entity");
    assert_eq!(info.entity_category.as_deref(), Some("organization"));
    assert_eq!(info.subcategory.as_deref(), Some("hospitality"));
}

/// SCENARIO: JSON text and YAML-decoded values grade identically.
#[test]
fn scenario_yaml_and_json_agree() {
    let yaml = serde_yaml_ng::to_string(&restaurant()).unwrap();
    let from_yaml: serde_json::Value = serde_yaml_ng::from_str(&yaml).unwrap();

    let validator = Validator::default();
    assert_eq!(
        validator.validate(&from_yaml),
        validator.validate_str(&restaurant().to_string())
    );
}
