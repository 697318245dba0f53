//! Module resolver
//!
//! Treats declared capability modules as a graph: resolves references to
//! canonical records, closes a module set over its declared dependencies and
//! detects pairwise conflicts. Schema lookups go through a `SchemaSource` and
//! are best-effort: a failed lookup becomes a warning, never an abort.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::entities::{
    ModuleConfiguration, ModuleRecord, ModuleReference, DEFAULT_MODULE_VERSION,
};
use crate::domain::ports::{ModuleSchema, SchemaSource, SchemaSourceError};
use crate::domain::value_objects::Taxonomy;

use super::schema_cache::SchemaCache;

/// Modules suggested when an entity schema cannot be loaded.
pub const FALLBACK_RECOMMENDED_MODULES: &[&str] = &["auth", "security"];

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModuleResolution {
    pub modules: Vec<ModuleRecord>,
    pub warnings: Vec<String>,
}

impl ModuleResolution {
    pub fn errors(&self) -> impl Iterator<Item = &ModuleRecord> {
        self.modules.iter().filter(|m| m.is_error())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencyClosure {
    pub modules: BTreeSet<String>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityReport {
    pub compatible: bool,
    pub conflicts: Vec<String>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModuleRecommendations {
    pub modules: Vec<String>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ModuleConfigError {
    #[error("module '{module_type}' is not a standard module")]
    UnknownModule { module_type: String },

    #[error("module '{module_type}' is missing required field '{field}'")]
    MissingField { module_type: String, field: String },

    #[error(transparent)]
    SchemaUnavailable(#[from] SchemaSourceError),
}

const MISSING_TYPE: &str = "Module must have either $ref or moduleType property";

pub struct ModuleResolver<S> {
    source: S,
    taxonomy: Taxonomy,
    cache: SchemaCache,
}

impl<S: SchemaSource> ModuleResolver<S> {
    pub fn new(source: S, taxonomy: Taxonomy) -> Self {
        Self {
            source,
            taxonomy,
            cache: SchemaCache::new(),
        }
    }

    pub fn cache(&self) -> &SchemaCache {
        &self.cache
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Resolves every reference; one bad reference never stops the rest.
    pub fn resolve(&self, references: &[ModuleReference]) -> ModuleResolution {
        let mut resolution = ModuleResolution::default();
        for reference in references {
            let record = self.resolve_one(reference, &mut resolution.warnings);
            resolution.modules.push(record);
        }
        debug!(
            modules = resolution.modules.len(),
            warnings = resolution.warnings.len(),
            "resolved module references"
        );
        resolution
    }

    fn resolve_one(&self, reference: &ModuleReference, warnings: &mut Vec<String>) -> ModuleRecord {
        let version = |schema_version: Option<&str>| {
            reference
                .version
                .as_deref()
                .or(schema_version)
                .unwrap_or(DEFAULT_MODULE_VERSION)
                .to_string()
        };

        if let Some(path) = reference.reference.as_deref() {
            let mut properties = serde_json::Map::new();
            let schema = match self.schema_for_reference(path) {
                Ok(schema) => Some(schema),
                Err(e) => {
                    warn!(reference = %path, error = %e, "module schema unavailable");
                    warnings.push(format!("Could not load schema for module reference {path}: {e}"));
                    None
                }
            };
            if let Some(schema) = &schema {
                properties.extend(schema.properties.clone());
            }
            properties.extend(reference.properties.clone());
            properties.insert("$ref".to_string(), Value::String(path.to_string()));

            return ModuleRecord {
                module_type: module_type_from_ref(path).to_string(),
                version: version(schema.as_ref().and_then(|s| s.version.as_deref())),
                required: reference.required,
                properties,
                error: None,
            };
        }

        if let Some(module_type) = reference.module_type.as_deref() {
            return ModuleRecord {
                module_type: module_type.to_string(),
                version: version(None),
                required: reference.required,
                properties: reference.properties.clone(),
                error: None,
            };
        }

        let declaration = Value::Object(reference.raw.clone());
        warn!(
            declaration = %declaration,
            "module declaration has neither $ref nor moduleType"
        );
        ModuleRecord {
            module_type: "unknown".to_string(),
            version: version(None),
            required: false,
            properties: reference.raw.clone(),
            error: Some(MISSING_TYPE.to_string()),
        }
    }

    /// Breadth-first closure of `modules` over declared dependencies.
    ///
    /// Each module is marked visited before its dependencies are queued, so
    /// cycles terminate and every module is looked up at most once.
    pub fn close_dependencies<I>(&self, modules: I) -> DependencyClosure
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut closure = DependencyClosure::default();
        let mut queue: VecDeque<String> = modules
            .into_iter()
            .map(|m| m.as_ref().to_string())
            .collect();

        while let Some(current) = queue.pop_front() {
            if !closure.modules.insert(current.clone()) {
                continue;
            }
            match self.schema_for_module(&current) {
                Ok(schema) => queue.extend(
                    schema
                        .dependencies
                        .into_iter()
                        .filter(|dep| !closure.modules.contains(dep)),
                ),
                Err(e) => {
                    warn!(module = %current, error = %e, "dependency lookup failed");
                    closure.warnings.push(format!(
                        "Could not resolve dependencies for module {current}: {e}"
                    ));
                }
            }
        }

        closure
    }

    /// Checks every unordered pair of distinct modules for declared conflicts.
    ///
    /// Duplicates are collapsed and pairs visited in sorted order, so the
    /// report does not depend on input order.
    pub fn check_compatibility<I>(&self, modules: I) -> CompatibilityReport
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let modules: BTreeSet<String> = modules
            .into_iter()
            .map(|m| m.as_ref().to_string())
            .collect();

        let mut warnings = Vec::new();
        let mut schemas: BTreeMap<&str, ModuleSchema> = BTreeMap::new();
        for module in &modules {
            match self.schema_for_module(module) {
                Ok(schema) => {
                    schemas.insert(module.as_str(), schema);
                }
                Err(e) => {
                    warn!(module = %module, error = %e, "compatibility lookup failed");
                    warnings.push(format!("Could not load schema for module: {module}"));
                }
            }
        }

        let mut conflicts = Vec::new();
        let ordered: Vec<&str> = modules.iter().map(String::as_str).collect();
        for (i, a) in ordered.iter().enumerate() {
            for b in &ordered[i + 1..] {
                if schemas.get(a).is_some_and(|s| s.conflicts_with(b)) {
                    conflicts.push(format!("{a} conflicts with {b}"));
                }
                if schemas.get(b).is_some_and(|s| s.conflicts_with(a)) {
                    conflicts.push(format!("{b} conflicts with {a}"));
                }
            }
        }

        CompatibilityReport {
            compatible: conflicts.is_empty(),
            conflicts,
            warnings,
        }
    }

    /// Modules the entity schema recommends, or a conservative fallback.
    pub fn recommended_modules(&self, entity_type: &str) -> ModuleRecommendations {
        match self.source.fetch_entity_schema(entity_type) {
            Ok(schema) => ModuleRecommendations {
                modules: schema.recommended_modules,
                warnings: Vec::new(),
            },
            Err(e) => {
                warn!(entity_type, error = %e, "entity schema unavailable");
                ModuleRecommendations {
                    modules: FALLBACK_RECOMMENDED_MODULES
                        .iter()
                        .map(|m| m.to_string())
                        .collect(),
                    warnings: vec![format!(
                        "Could not load entity schema for {entity_type}: {e}"
                    )],
                }
            }
        }
    }

    /// Checks that a module configuration names a standard module and sets
    /// every field its schema requires.
    pub fn check_module_config(&self, config: &ModuleConfiguration) -> Result<(), ModuleConfigError> {
        if !self.taxonomy.is_standard_module(&config.module_type) {
            return Err(ModuleConfigError::UnknownModule {
                module_type: config.module_type.clone(),
            });
        }

        let schema = self.schema_for_module(&config.module_type)?;
        if let Some(field) = schema
            .required
            .iter()
            .find(|field| !config.config.contains_key(*field))
        {
            return Err(ModuleConfigError::MissingField {
                module_type: config.module_type.clone(),
                field: field.clone(),
            });
        }
        Ok(())
    }

    fn schema_for_module(&self, module_type: &str) -> Result<ModuleSchema, SchemaSourceError> {
        let key = SchemaCache::module_key(module_type);
        if let Some(schema) = self.cache.get(&key) {
            return Ok(schema);
        }
        let schema = self.source.fetch_module_schema(module_type)?;
        self.cache.set(key, schema.clone());
        Ok(schema)
    }

    fn schema_for_reference(&self, reference: &str) -> Result<ModuleSchema, SchemaSourceError> {
        if let Some(schema) = self.cache.get(reference) {
            return Ok(schema);
        }

        let schema = if reference.starts_with("http://") || reference.starts_with("https://") {
            let document = self.source.fetch_by_reference(reference)?;
            ModuleSchema::from_document(reference, document)?
        } else {
            self.source
                .fetch_module_schema(module_type_from_ref(reference))?
        };

        self.cache.set(reference, schema.clone());
        Ok(schema)
    }
}

/// Module type named by a reference: its final non-empty path segment
/// without extension, query or fragment.
///
/// `/schemas/templates/module/auth.json`, `.../module/auth/`, `auth.yaml?v=2`
/// and `auth` all name `auth`.
pub fn module_type_from_ref(reference: &str) -> &str {
    let path = reference.split(['?', '#']).next().unwrap_or(reference);
    let segment = path
        .rsplit('/')
        .find(|s| !s.is_empty())
        .unwrap_or(path);
    match segment.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => segment,
    }
}
