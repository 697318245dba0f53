//! Test fixtures - reusable entity documents.

use serde_json::{json, Value};

pub const CONTEXT: &str = "https://schemas.meta-aiml.org/v2.0.1/context.jsonld";

/// A restaurant entity that passes every check.
pub fn restaurant() -> Value {
    json!({
        "@context": CONTEXT,
        "@id": "https://luigis.example.com/#entity",
        "@type": "Restaurant",
        "schemaVersion": "2.0.1",
        "entityType": "restaurant",
        "entityCategory": "organization",
        "subcategory": "hospitality",
        "name": {"en": "Luigi's Trattoria", "it": "Trattoria da Luigi"},
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

/// `restaurant()` with one top-level field replaced.
pub fn restaurant_with(field: &str, value: Value) -> Value {
    let mut doc = restaurant();
    doc[field] = value;
    doc
}

/// `restaurant()` with the given top-level fields removed.
pub fn restaurant_without(fields: &[&str]) -> Value {
    let mut doc = restaurant();
    if let Some(map) = doc.as_object_mut() {
        for field in fields {
            map.remove(*field);
        }
    }
    doc
}
