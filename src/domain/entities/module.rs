//! Capability module entities
//!
//! A `ModuleReference` is what a document says about a module (inline data or
//! a `$ref` path); a `ModuleRecord` is the canonical form after resolution.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_MODULE_VERSION: &str = "1.0.0";

/// Module declaration as written in a document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModuleReference {
    /// `$ref` path or URL of an external module document
    pub reference: Option<String>,
    pub module_type: Option<String>,
    pub version: Option<String>,
    pub required: bool,
    pub properties: Map<String, Value>,
    /// The declaration exactly as written
    pub raw: Map<String, Value>,
}

impl ModuleReference {
    pub fn inline(module_type: &str) -> Self {
        let mut raw = Map::new();
        raw.insert("moduleType".into(), Value::String(module_type.to_string()));
        Self {
            module_type: Some(module_type.to_string()),
            raw,
            ..Self::default()
        }
    }

    pub fn by_ref(reference: &str) -> Self {
        let mut raw = Map::new();
        raw.insert("$ref".into(), Value::String(reference.to_string()));
        Self {
            reference: Some(reference.to_string()),
            raw,
            ..Self::default()
        }
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self.raw
            .insert("version".into(), Value::String(version.to_string()));
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self.raw.insert("required".into(), Value::Bool(required));
        self
    }

    pub fn with_properties(mut self, properties: Map<String, Value>) -> Self {
        self.raw
            .insert("properties".into(), Value::Object(properties.clone()));
        self.properties = properties;
        self
    }

    /// Reads a declaration leniently: fields of the wrong type are ignored and
    /// a non-object declaration yields a reference with neither path nor type.
    pub fn from_value(value: &Value) -> Self {
        let Some(raw) = value.as_object() else {
            let mut raw = Map::new();
            raw.insert("value".into(), value.clone());
            return Self {
                raw,
                ..Self::default()
            };
        };

        let text = |key: &str| {
            raw.get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        Self {
            reference: text("$ref"),
            module_type: text("moduleType"),
            version: text("version"),
            required: raw.get("required").and_then(Value::as_bool).unwrap_or(false),
            properties: raw
                .get("properties")
                .and_then(Value::as_object)
                .cloned()
                .unwrap_or_default(),
            raw: raw.clone(),
        }
    }

    /// Reads a list of declarations: a JSON array, or an entity whose
    /// `modules` field is an array or a mapping keyed by module type.
    pub fn list_from_value(value: &Value) -> Vec<Self> {
        let modules = match value {
            Value::Object(map) => map.get("modules"),
            other => Some(other),
        };
        match modules {
            Some(Value::Array(items)) => items.iter().map(Self::from_value).collect(),
            Some(Value::Object(entries)) => entries
                .iter()
                .map(|(key, entry)| {
                    let mut reference = Self::from_value(entry);
                    if reference.reference.is_none() && reference.module_type.is_none() {
                        reference.module_type = Some(key.clone());
                    }
                    reference
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Canonical module after resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleRecord {
    pub module_type: String,
    pub version: String,
    pub required: bool,
    pub properties: Map<String, Value>,
    /// Set when the declaration could not be resolved at all
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ModuleRecord {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Module configuration checked against its schema's `required` list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleConfiguration {
    pub module_type: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub config: Map<String, Value>,
    #[serde(default)]
    pub dependencies: Vec<String>,
}
