//! Scenario: Resolving an entity's capability modules
//!
//! Journey: An entity declares modules by reference; the tool resolves them
//! against a schema mirror on disk, pulls in their dependencies and reports
//! conflicts.

use serde_json::json;
use std::fs;

use aiml_validator::domain::ports::ModuleSchema;
use aiml_validator::{
    DirectorySchemaSource, InMemorySchemaSource, ModuleReference, ModuleResolver, ModuleService,
    Taxonomy,
};

fn mirror(root: &std::path::Path, relative: &str, document: serde_json::Value) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, document.to_string()).unwrap();
}

/// SCENARIO: `auth` depends on `security`; closing `{auth}` adds it.
#[test]
fn scenario_auth_pulls_in_security() {
    let source = InMemorySchemaSource::new()
        .with_module(
            "auth",
            ModuleSchema {
                version: Some("2.1.0".to_string()),
                dependencies: vec!["security".to_string()],
                ..ModuleSchema::default()
            },
        )
        .with_module("security", ModuleSchema::default());
    let resolver = ModuleResolver::new(source, Taxonomy::v2_0_1());

    let records = resolver.resolve(&[ModuleReference::by_ref(
        "https://schemas.meta-aiml.org/v2.0.1/templates/module/auth.json",
    )]);
    let closure = resolver.close_dependencies(records.modules.iter().map(|m| &m.module_type));

    assert_eq!(
        closure.modules.into_iter().collect::<Vec<_>>(),
        vec!["auth", "security"]
    );
}

/// SCENARIO: `A` declares a conflict with `B`.
#[test]
fn scenario_declared_conflict() {
    let source = InMemorySchemaSource::new()
        .with_module(
            "A",
            ModuleSchema {
                conflicts: vec!["B".to_string()],
                ..ModuleSchema::default()
            },
        )
        .with_module("B", ModuleSchema::default());
    let resolver = ModuleResolver::new(source, Taxonomy::v2_0_1());

    for order in [["A", "B"], ["B", "A"]] {
        let report = resolver.check_compatibility(order);
        assert!(!report.compatible);
        assert_eq!(report.conflicts.len(), 1);
        assert!(report.conflicts[0].contains('A') && report.conflicts[0].contains('B'));
    }
}

/// SCENARIO: Full analysis of an entity against a schema mirror on disk.
#[test]
fn scenario_analyze_entity_from_mirror() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    mirror(
        root,
        "templates/module/payments.json",
        json!({"version": "2.1.0", "dependencies": ["security"], "properties": {"currency": "EUR"}}),
    );
    mirror(root, "templates/module/security.json", json!({"version": "2.0.1"}));
    mirror(root, "templates/module/location.json", json!({"conflicts": ["streaming"]}));
    mirror(
        root,
        "entity/hotel.json",
        json!({"title": "Hotel", "recommendedModules": ["location", "payments"]}),
    );

    let service = ModuleService::new(DirectorySchemaSource::new(root), Taxonomy::v2_0_1());
    let entity = json!({
        "entityType": "hotel",
        "modules": [
            {"$ref": "/schemas/templates/module/payments.json"},
            {"moduleType": "location", "version": "2.0.1"},
            {"$ref": "/schemas/templates/module/booking.json"}
        ]
    });

    let report = service.analyze(&entity);

    let types: Vec<_> = report
        .resolution
        .modules
        .iter()
        .map(|m| m.module_type.as_str())
        .collect();
    assert_eq!(types, vec!["payments", "location", "booking"]);
    assert_eq!(report.resolution.modules[0].version, "2.1.0");
    assert_eq!(
        report.resolution.modules[0].properties.get("currency"),
        Some(&json!("EUR"))
    );

    // `booking` has no schema: one warning from resolution, one from closure
    assert!(report
        .resolution
        .warnings
        .iter()
        .any(|w| w.contains("booking")));
    assert!(report.closure.modules.contains("security"));
    assert!(report.closure.modules.contains("booking"));
    assert!(report.compatibility.compatible);

    let recommendations = report.recommendations.expect("entity type is declared");
    assert_eq!(recommendations.modules, vec!["location", "payments"]);
    assert!(recommendations.warnings.is_empty());
}

/// SCENARIO: Without a mirror entry, recommendations fall back.
#[test]
fn scenario_recommendations_fall_back() {
    let dir = tempfile::tempdir().unwrap();
    let service = ModuleService::new(DirectorySchemaSource::new(dir.path()), Taxonomy::v2_0_1());

    let recommendations = service.recommended_modules("restaurant");
    assert_eq!(recommendations.modules, vec!["auth", "security"]);
    assert_eq!(recommendations.warnings.len(), 1);
}
