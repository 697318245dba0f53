//! Validate Use Case
//!
//! `Validator` runs the rule engine and then the scoring engine over one entity
//! document and assembles the `ValidationResult`. Input that cannot be an
//! entity at all (null, empty text, bad JSON, a non-object) short-circuits
//! with a single structural error, and a panic inside the pipeline is caught
//! here and reported the same way.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::domain::entities::{
    Entity, EntityInfo, Finding, FindingCategory, FindingCounts, PerformanceMetrics, Severity,
    ValidationResult,
};
use crate::domain::services::{RuleEngine, ScoringEngine};
use crate::domain::value_objects::{json, Taxonomy};
use crate::error::AimlResult;

const PROVIDE_INPUT_HINT: &str = "Provide a valid AIML schema object or JSON string";
const JSON_SYNTAX_HINT: &str = "Please check for missing commas, brackets, or quotes";
const YAML_SYNTAX_HINT: &str = "Please check indentation, unclosed brackets, or quotes";

/// Validates entity documents against one taxonomy.
#[derive(Debug, Clone)]
pub struct Validator {
    taxonomy: Taxonomy,
    strict: bool,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(Taxonomy::default())
    }
}

impl Validator {
    pub fn new(taxonomy: Taxonomy) -> Self {
        Self {
            taxonomy,
            strict: false,
        }
    }

    /// Taxonomy and strictness from configuration.
    pub fn from_config(config: &Config) -> AimlResult<Self> {
        Ok(Self::new(config.taxonomy()?).with_strict(config.taxonomy.strict))
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Validates a serialized JSON document.
    pub fn validate_str(&self, input: &str) -> ValidationResult {
        if input.trim().is_empty() {
            return rejected("input", "Input data is empty", PROVIDE_INPUT_HINT);
        }

        match serde_json::from_str::<Value>(input) {
            Ok(document) => self.validate_document(&document),
            Err(e) => {
                debug!(error = %e, "entity document is not valid JSON");
                rejected("JSON", "Invalid JSON syntax", JSON_SYNTAX_HINT)
            }
        }
    }

    /// Same as [`Validator::validate_str`] for YAML text.
    pub fn validate_yaml_str(&self, input: &str) -> ValidationResult {
        if input.trim().is_empty() {
            return rejected("input", "Input data is empty", PROVIDE_INPUT_HINT);
        }

        match serde_yaml_ng::from_str::<Value>(input) {
            Ok(document) => self.validate_document(&document),
            Err(e) => {
                debug!(error = %e, "entity document is not valid YAML");
                rejected("YAML", "Invalid YAML syntax", YAML_SYNTAX_HINT)
            }
        }
    }

    /// Validates an already-decoded document; `None` means no input at all.
    ///
    /// A JSON string is taken as a serialized document and parsed.
    pub fn validate_value(&self, input: Option<&Value>) -> ValidationResult {
        match input {
            None => rejected("input", "Input data is undefined", PROVIDE_INPUT_HINT),
            Some(Value::String(text)) => self.validate_str(text),
            Some(document) => self.validate_document(document),
        }
    }

    pub fn validate(&self, document: &Value) -> ValidationResult {
        self.validate_value(Some(document))
    }

    pub fn is_valid(&self, input: &str) -> bool {
        self.validate_str(input).is_valid
    }

    pub fn entity_info(&self, input: &str) -> Option<EntityInfo> {
        self.validate_str(input).entity_info
    }

    fn validate_document(&self, document: &Value) -> ValidationResult {
        if document.is_null() {
            return rejected("input", "Input data is null", PROVIDE_INPUT_HINT);
        }
        if !document.is_object() {
            return rejected(
                "input",
                &format!(
                    "Input must be a JSON object, found {}",
                    json::type_name(document)
                ),
                PROVIDE_INPUT_HINT,
            );
        }

        match catch_unwind(AssertUnwindSafe(|| self.run_pipeline(document))) {
            Ok(result) => result,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                warn!(%message, "validation pipeline panicked");
                rejected(
                    "input",
                    &format!("Validation error: {message}"),
                    PROVIDE_INPUT_HINT,
                )
            }
        }
    }

    fn run_pipeline(&self, document: &Value) -> ValidationResult {
        let entity = match Entity::from_value(document) {
            Ok(entity) => entity,
            Err(e) => {
                return rejected(
                    "input",
                    &format!("Validation error: {e}"),
                    PROVIDE_INPUT_HINT,
                )
            }
        };

        let findings = RuleEngine::new(&self.taxonomy)
            .with_strict(self.strict)
            .evaluate(&entity);
        let counts = FindingCounts::tally(&findings);
        let grade = ScoringEngine::new(&self.taxonomy).score(&entity, counts);

        let result = ValidationResult::from_findings(
            findings,
            EntityInfo::extract(&entity),
            grade.score,
            grade.completeness,
            PerformanceMetrics::measure(document, &entity),
        );

        info!(
            entity_type = entity.entity_type_str().unwrap_or("-"),
            valid = result.is_valid,
            score = result.score,
            completeness = result.completeness,
            errors = counts.errors,
            warnings = counts.warnings,
            suggestions = counts.suggestions,
            "validated entity"
        );
        result
    }
}

fn rejected(field: &str, message: &str, suggestion: &str) -> ValidationResult {
    ValidationResult::rejected(
        Finding::new(Severity::Error, FindingCategory::Structure, field, message)
            .with_suggestion(suggestion),
    )
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "Unknown error".to_string())
}

#[cfg(test)]
mod tests;
