#![no_main]

use libfuzzer_sys::fuzz_target;

use aiml_validator::domain::ports::ModuleSchema;
use aiml_validator::{InMemorySchemaSource, ModuleService, Taxonomy};

fuzz_target!(|data: &[u8]| {
    let Ok(document) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    let source = InMemorySchemaSource::new()
        .with_module(
            "auth",
            ModuleSchema {
                dependencies: vec!["security".to_string()],
                ..ModuleSchema::default()
            },
        )
        .with_module(
            "security",
            ModuleSchema {
                dependencies: vec!["auth".to_string()],
                ..ModuleSchema::default()
            },
        );
    let report = ModuleService::new(source, Taxonomy::v2_0_1()).analyze(&document);
    assert_eq!(report.compatibility.compatible, report.compatibility.conflicts.is_empty());
});
