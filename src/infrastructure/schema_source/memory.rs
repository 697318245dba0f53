//! In-memory schema source

use std::collections::HashMap;

use serde_json::Value;

use crate::domain::ports::{EntitySchema, ModuleSchema, SchemaSource, SchemaSourceError};

/// Schema source backed by maps filled through builder methods.
#[derive(Debug, Clone, Default)]
pub struct InMemorySchemaSource {
    modules: HashMap<String, ModuleSchema>,
    entities: HashMap<String, EntitySchema>,
    documents: HashMap<String, Value>,
    unavailable: HashMap<String, String>,
}

impl InMemorySchemaSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_module(mut self, module_type: &str, schema: ModuleSchema) -> Self {
        self.modules.insert(module_type.to_string(), schema);
        self
    }

    pub fn with_entity(mut self, entity_type: &str, schema: EntitySchema) -> Self {
        self.entities.insert(entity_type.to_string(), schema);
        self
    }

    /// Registers the raw document returned for `reference`.
    pub fn with_document(mut self, reference: &str, document: Value) -> Self {
        self.documents.insert(reference.to_string(), document);
        self
    }

    /// Makes every lookup of `name` fail as a retrieval error.
    pub fn with_unavailable(mut self, name: &str, message: &str) -> Self {
        self.unavailable
            .insert(name.to_string(), message.to_string());
        self
    }

    fn check_available(&self, name: &str) -> Result<(), SchemaSourceError> {
        match self.unavailable.get(name) {
            Some(message) => Err(SchemaSourceError::Network {
                reference: name.to_string(),
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

fn not_found(reference: &str) -> SchemaSourceError {
    SchemaSourceError::NotFound {
        reference: reference.to_string(),
    }
}

impl SchemaSource for InMemorySchemaSource {
    fn fetch_module_schema(&self, module_type: &str) -> Result<ModuleSchema, SchemaSourceError> {
        self.check_available(module_type)?;
        self.modules
            .get(module_type)
            .cloned()
            .ok_or_else(|| not_found(module_type))
    }

    fn fetch_entity_schema(&self, entity_type: &str) -> Result<EntitySchema, SchemaSourceError> {
        self.check_available(entity_type)?;
        self.entities
            .get(entity_type)
            .cloned()
            .ok_or_else(|| not_found(entity_type))
    }

    fn fetch_by_reference(&self, reference: &str) -> Result<Value, SchemaSourceError> {
        self.check_available(reference)?;
        self.documents
            .get(reference)
            .cloned()
            .ok_or_else(|| not_found(reference))
    }
}
