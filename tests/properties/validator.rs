//! Property tests for the validator orchestrator.

use proptest::prelude::*;
use serde_json::{json, Value};

use aiml_validator::{Taxonomy, Validator};

use crate::common::{restaurant, restaurant_with, restaurant_without};

fn critical_field() -> impl Strategy<Value = String> {
    proptest::sample::select(Taxonomy::v2_0_1().critical_fields().to_vec())
}

fn long_text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z ,.]{49,120}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The validator never panics and always reports a score in
    /// bounds for arbitrary text.
    #[test]
    fn property_validate_str_never_panics(input in "(?s).{0,512}") {
        let result = Validator::default().validate_str(&input);
        prop_assert!(result.score <= 100);
        prop_assert!(result.completeness <= 100);
        prop_assert_eq!(result.is_valid, result.errors.is_empty());
    }

    /// PROPERTY: Arbitrary JSON objects never panic the pipeline.
    #[test]
    fn property_arbitrary_objects_never_panic(
        entries in proptest::collection::btree_map(
            proptest::sample::select(vec![
                "@context", "@id", "name", "description", "entityType",
                "entityCategory", "subcategory", "modules", "url",
                "entityCapabilities", "siteCapabilities", "other",
            ]),
            prop_oneof![
                Just(Value::Null),
                any::<bool>().prop_map(Value::from),
                any::<i64>().prop_map(Value::from),
                "[a-z]{0,10}".prop_map(Value::from),
                Just(json!([])),
                Just(json!({})),
                Just(json!({"en": ""})),
            ],
            0..10,
        ),
    ) {
        let document: serde_json::Map<String, Value> = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        let result = Validator::default().validate(&Value::Object(document));
        prop_assert!(result.score <= 100);
    }

    /// PROPERTY: A complete entity with any long English description is valid
    /// and scores at least 90.
    #[test]
    fn property_complete_entity_is_valid(description in long_text()) {
        let doc = restaurant_with("description", json!({"en": description}));
        let result = Validator::default().validate(&doc);
        prop_assert!(result.is_valid, "{:?}", result.errors);
        prop_assert!(result.score >= 90);
    }

    /// PROPERTY: Removing any one critical field makes the entity invalid with
    /// an error naming that field.
    #[test]
    fn property_missing_critical_field_is_error(field in critical_field()) {
        let doc = restaurant_without(&[field.as_str()]);
        let result = Validator::default().validate(&doc);
        prop_assert!(!result.is_valid);
        prop_assert!(result.errors.iter().any(|e| e.field == field));
    }

    /// PROPERTY: A plain-string name or description is always an error on
    /// that field.
    #[test]
    fn property_plain_string_multilingual_is_error(
        field in proptest::sample::select(vec!["name", "description"]),
        text in "[A-Za-z ]{1,80}",
    ) {
        let doc = restaurant_with(field, Value::String(text));
        let result = Validator::default().validate(&doc);
        prop_assert!(result.errors.iter().any(|e| e.field == field));
    }

    /// PROPERTY: A type outside its category's type list is an error on
    /// `entityType`.
    #[test]
    fn property_type_outside_category(
        entity_type in proptest::sample::select(vec![
            "marketplace", "web_app", "blog", "social_network", "online_banking",
        ]),
    ) {
        let mut doc = restaurant();
        doc["entityType"] = json!(entity_type);
        let result = Validator::default().validate(&doc);
        prop_assert!(result.errors.iter().any(|e| e.field == "entityType"));
    }
}
