use super::*;
use crate::domain::entities::Complexity;
use serde_json::json;

fn restaurant() -> Value {
    json!({
        "@context": "https://schemas.meta-aiml.org/v2.0.1/context.jsonld",
        "@id": "https://luigis.example.com/#entity",
        "@type": "Restaurant",
        "schemaVersion": "2.0.1",
        "entityType": "restaurant",
        "entityCategory": "organization",
        "subcategory": "hospitality",
        "name": {"en": "Luigi's Trattoria"},
        "description": {
            "en": "Family-run trattoria serving handmade pasta and wood-fired pizza since 2010."
        },
        "shortDescription": "Handmade pasta in the old town",
        "url": "https://luigis.example.com",
        "logo": "https://luigis.example.com/logo.png",
        "foundingDate": "2010-05-01",
        "lastModified": "2024-01-15",
        "properties": {"cuisine": "italian"},
        "modules": {"location": {"version": "2.0.1", "enabled": true}},
        "entityCapabilities": {
            "functionalFeatures": {
                "acceptsReservations": true,
                "hasDelivery": false,
                "hasTakeaway": true
            },
            "contentTypes": ["menu"],
            "businessModel": "restaurant"
        },
        "siteCapabilities": {
            "availableActions": ["view_menu"],
            "interactionMethods": ["online_form"],
            "contentAccess": ["public"],
            "supportedDevices": ["mobile"],
            "languages": ["en"],
            "realTimeFeatures": ["real_time_availability"]
        }
    })
}

fn only_error(result: &ValidationResult) -> &Finding {
    assert_eq!(result.errors.len(), 1, "errors: {:?}", result.errors);
    &result.errors[0]
}

fn assert_short_circuit(result: &ValidationResult, field: &str, message: &str) {
    assert!(!result.is_valid);
    assert_eq!(result.score, 0);
    assert_eq!(result.completeness, 0);
    assert!(result.entity_info.is_none());
    assert!(result.warnings.is_empty());
    assert!(result.suggestions.is_empty());

    let error = only_error(result);
    assert_eq!(error.field, field);
    assert_eq!(error.message, message);
    assert_eq!(error.category, FindingCategory::Structure);
}

#[test]
fn complete_entity_scores_full_marks() {
    let result = Validator::default().validate(&restaurant());

    assert!(result.is_valid);
    assert!(result.warnings.is_empty(), "{:?}", result.warnings);
    assert!(result.suggestions.is_empty(), "{:?}", result.suggestions);
    assert_eq!(result.completeness, 100);
    assert_eq!(result.score, 100);

    let info = result.entity_info.unwrap();
    assert_eq!(info.entity_type, "restaurant");
    assert_eq!(info.modules, vec!["location"]);
    assert_eq!(result.performance.module_count, 1);
    assert_eq!(result.performance.complexity, Complexity::Low);
}

#[test]
fn text_and_value_agree() {
    let validator = Validator::default();
    let doc = restaurant();
    assert_eq!(
        validator.validate_str(&doc.to_string()),
        validator.validate(&doc)
    );
}

#[test]
fn null_input() {
    let result = Validator::default().validate(&Value::Null);
    assert_short_circuit(&result, "input", "Input data is null");
    assert_eq!(
        only_error(&result).suggestion.as_deref(),
        Some(PROVIDE_INPUT_HINT)
    );

    let result = Validator::default().validate_str("null");
    assert_short_circuit(&result, "input", "Input data is null");
}

#[test]
fn missing_input() {
    let result = Validator::default().validate_value(None);
    assert_short_circuit(&result, "input", "Input data is undefined");
}

#[test]
fn empty_input() {
    for input in ["", "   ", "\n\t"] {
        let result = Validator::default().validate_str(input);
        assert_short_circuit(&result, "input", "Input data is empty");
    }
    let result = Validator::default().validate(&json!(""));
    assert_short_circuit(&result, "input", "Input data is empty");
}

#[test]
fn invalid_json() {
    let result = Validator::default().validate_str("{\"entityType\": \"hotel\",");
    assert_short_circuit(&result, "JSON", "Invalid JSON syntax");
    assert_eq!(
        only_error(&result).suggestion.as_deref(),
        Some(JSON_SYNTAX_HINT)
    );
}

#[test]
fn invalid_yaml() {
    let result = Validator::default().validate_yaml_str("name: [unclosed\nentityType: hotel\n");
    assert_short_circuit(&result, "YAML", "Invalid YAML syntax");
    assert_eq!(
        only_error(&result).suggestion.as_deref(),
        Some(YAML_SYNTAX_HINT)
    );

    let result = Validator::default().validate_yaml_str("  \n");
    assert_short_circuit(&result, "input", "Input data is empty");
}

#[test]
fn yaml_text_validates_like_the_value() {
    let validator = Validator::default();
    let doc = restaurant();
    let yaml = serde_yaml_ng::to_string(&doc).unwrap();
    assert_eq!(validator.validate_yaml_str(&yaml), validator.validate(&doc));
}

#[test]
fn non_object_document() {
    let result = Validator::default().validate(&json!([1, 2, 3]));
    assert_short_circuit(&result, "input", "Input must be a JSON object, found array");

    let result = Validator::default().validate_str("42");
    assert_eq!(only_error(&result).field, "input");
}

#[test]
fn string_value_is_parsed_as_document() {
    let validator = Validator::default();
    let text = restaurant().to_string();
    assert!(validator.validate(&Value::String(text)).is_valid);
}

#[test]
fn empty_object_reports_every_critical_field() {
    let result = Validator::default().validate(&json!({}));

    assert!(!result.is_valid);
    for field in Taxonomy::v2_0_1().critical_fields() {
        assert!(
            result.errors.iter().any(|e| &e.field == field),
            "no error for {field}"
        );
    }
    assert!(result.entity_info.is_none());
    assert_eq!(result.completeness, 0);
    assert_eq!(result.score, 25);
}

#[test]
fn is_valid_and_entity_info() {
    let validator = Validator::default();
    let text = restaurant().to_string();

    assert!(validator.is_valid(&text));
    assert!(!validator.is_valid("{}"));
    assert_eq!(
        validator.entity_info(&text).map(|info| info.entity_type),
        Some("restaurant".to_string())
    );
    assert!(validator.entity_info("not json").is_none());
}

#[test]
fn strict_mode_adds_findings_without_new_errors() {
    let mut doc = restaurant();
    doc.as_object_mut().unwrap().remove("foundingDate");
    doc.as_object_mut().unwrap().remove("shortDescription");

    let relaxed = Validator::default().validate(&doc);
    let strict = Validator::default().with_strict(true).validate(&doc);

    assert_eq!(relaxed.errors, strict.errors);
    assert!(strict.warnings.len() > relaxed.warnings.len());
    assert!(strict.warnings.iter().any(|w| w.field == "foundingDate"));
    assert!(strict.warnings.iter().any(|w| w.field == "shortDescription"));
}

#[test]
fn from_config_reads_strictness() {
    let mut config = Config::default();
    config.taxonomy.strict = true;
    let validator = Validator::from_config(&config).unwrap();
    assert!(validator.is_strict());
    assert_eq!(validator.taxonomy().version(), "2.0.1");

    config.taxonomy.version = "9.9.9".to_string();
    assert!(Validator::from_config(&config).is_err());
}

#[test]
fn calls_do_not_share_findings() {
    let validator = Validator::default();
    let bad = validator.validate(&json!({}));
    let good = validator.validate(&restaurant());
    assert!(!bad.is_valid);
    assert!(good.errors.is_empty());
}

#[test]
fn panic_payloads_become_messages() {
    let payload: Box<dyn Any + Send> = Box::new("boom");
    assert_eq!(panic_message(payload.as_ref()), "boom");

    let payload: Box<dyn Any + Send> = Box::new(String::from("bad shape"));
    assert_eq!(panic_message(payload.as_ref()), "bad shape");

    let payload: Box<dyn Any + Send> = Box::new(7_u8);
    assert_eq!(panic_message(payload.as_ref()), "Unknown error");
}
