//! SchemaSource port
//!
//! Resolves module and entity type names (or raw references) to their
//! declarative schema documents. Implementations may hit the network, the file
//! system or memory; callers in the domain treat every failure as recoverable.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub trait SchemaSource: Send + Sync {
    fn fetch_module_schema(&self, module_type: &str) -> Result<ModuleSchema, SchemaSourceError>;

    fn fetch_entity_schema(&self, entity_type: &str) -> Result<EntitySchema, SchemaSourceError>;

    /// Raw document behind a `$ref` path or URL.
    fn fetch_by_reference(&self, reference: &str) -> Result<Value, SchemaSourceError>;
}

impl<S: SchemaSource + ?Sized> SchemaSource for &S {
    fn fetch_module_schema(&self, module_type: &str) -> Result<ModuleSchema, SchemaSourceError> {
        (**self).fetch_module_schema(module_type)
    }

    fn fetch_entity_schema(&self, entity_type: &str) -> Result<EntitySchema, SchemaSourceError> {
        (**self).fetch_entity_schema(entity_type)
    }

    fn fetch_by_reference(&self, reference: &str) -> Result<Value, SchemaSourceError> {
        (**self).fetch_by_reference(reference)
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SchemaSourceError {
    #[error("schema not found: {reference}")]
    NotFound { reference: String },

    #[error("failed to retrieve schema {reference}: {message}")]
    Network { reference: String, message: String },

    #[error("malformed schema document {reference}: {message}")]
    MalformedDocument { reference: String, message: String },
}

impl SchemaSourceError {
    pub fn reference(&self) -> &str {
        match self {
            SchemaSourceError::NotFound { reference }
            | SchemaSourceError::Network { reference, .. }
            | SchemaSourceError::MalformedDocument { reference, .. } => reference,
        }
    }
}

/// Declarative schema of a capability module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub properties: Map<String, Value>,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub conflicts: Vec<String>,
    /// Configuration keys a module instance must provide
    #[serde(default)]
    pub required: Vec<String>,
}

impl ModuleSchema {
    pub fn from_document(reference: &str, document: Value) -> Result<Self, SchemaSourceError> {
        if !document.is_object() {
            return Err(SchemaSourceError::MalformedDocument {
                reference: reference.to_string(),
                message: "schema document is not a JSON object".to_string(),
            });
        }
        serde_json::from_value(document).map_err(|e| SchemaSourceError::MalformedDocument {
            reference: reference.to_string(),
            message: e.to_string(),
        })
    }

    pub fn conflicts_with(&self, module_type: &str) -> bool {
        self.conflicts.iter().any(|c| c == module_type)
    }
}

/// Declarative schema of an entity type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub properties: Map<String, Value>,
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default)]
    pub recommended_modules: Vec<String>,
}

impl EntitySchema {
    pub fn from_document(reference: &str, document: Value) -> Result<Self, SchemaSourceError> {
        if !document.is_object() {
            return Err(SchemaSourceError::MalformedDocument {
                reference: reference.to_string(),
                message: "schema document is not a JSON object".to_string(),
            });
        }
        serde_json::from_value(document).map_err(|e| SchemaSourceError::MalformedDocument {
            reference: reference.to_string(),
            message: e.to_string(),
        })
    }
}
