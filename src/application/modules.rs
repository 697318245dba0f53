//! Module Use Case
//!
//! Sibling entry point to `Validator`: module resolution is enrichment and
//! never feeds the score. `ModuleService::analyze` resolves the declarations
//! in a document, closes the resolved types over their dependencies and checks
//! the closed set for conflicts.

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::domain::entities::{ModuleConfiguration, ModuleReference};
use crate::domain::ports::SchemaSource;
use crate::domain::services::{
    CompatibilityReport, DependencyClosure, ModuleConfigError, ModuleRecommendations,
    ModuleResolution, ModuleResolver,
};
use crate::domain::value_objects::Taxonomy;

/// Everything known about the modules a document declares.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleReport {
    pub resolution: ModuleResolution,
    pub closure: DependencyClosure,
    pub compatibility: CompatibilityReport,
    /// Present when the document names its entity type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<ModuleRecommendations>,
}

impl ModuleReport {
    /// Every warning from every step, in step order.
    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.resolution
            .warnings
            .iter()
            .chain(&self.closure.warnings)
            .chain(&self.compatibility.warnings)
            .chain(self.recommendations.iter().flat_map(|r| &r.warnings))
            .map(String::as_str)
    }
}

pub struct ModuleService<S> {
    resolver: ModuleResolver<S>,
}

impl<S: SchemaSource> ModuleService<S> {
    pub fn new(source: S, taxonomy: Taxonomy) -> Self {
        Self {
            resolver: ModuleResolver::new(source, taxonomy),
        }
    }

    pub fn resolver(&self) -> &ModuleResolver<S> {
        &self.resolver
    }

    /// Analyzes a module declaration array or an entity document.
    pub fn analyze(&self, document: &Value) -> ModuleReport {
        let references = ModuleReference::list_from_value(document);
        let resolution = self.resolver.resolve(&references);

        let resolved: Vec<&str> = resolution
            .modules
            .iter()
            .filter(|m| !m.is_error())
            .map(|m| m.module_type.as_str())
            .collect();
        let closure = self.resolver.close_dependencies(&resolved);
        let compatibility = self.resolver.check_compatibility(&closure.modules);

        let recommendations = document
            .get("entityType")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .map(|entity_type| self.resolver.recommended_modules(entity_type));

        let report = ModuleReport {
            resolution,
            closure,
            compatibility,
            recommendations,
        };
        info!(
            declared = references.len(),
            closed = report.closure.modules.len(),
            compatible = report.compatibility.compatible,
            warnings = report.warnings().count(),
            "analyzed modules"
        );
        report
    }

    pub fn resolve(&self, references: &[ModuleReference]) -> ModuleResolution {
        self.resolver.resolve(references)
    }

    pub fn close_dependencies(&self, modules: &[String]) -> DependencyClosure {
        self.resolver.close_dependencies(modules)
    }

    pub fn check_compatibility(&self, modules: &[String]) -> CompatibilityReport {
        self.resolver.check_compatibility(modules)
    }

    pub fn recommended_modules(&self, entity_type: &str) -> ModuleRecommendations {
        self.resolver.recommended_modules(entity_type)
    }

    pub fn check_module_config(&self, config: &ModuleConfiguration) -> Result<(), ModuleConfigError> {
        self.resolver.check_module_config(config)
    }
}
