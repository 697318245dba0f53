//! Validation result entities

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::entity::Entity;
use super::finding::{Finding, FindingCounts, Severity};

/// Snapshot of what an entity declares about itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityInfo {
    pub entity_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    /// Base schema the entity extends (its category)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_schema: Option<String>,
    pub modules: Vec<String>,
    pub has_entity_capabilities: bool,
    pub has_site_capabilities: bool,
}

impl EntityInfo {
    /// `None` unless the entity names its type.
    pub fn extract(entity: &Entity) -> Option<Self> {
        let entity_type = entity.entity_type_str().filter(|t| !t.is_empty())?;
        let entity_category = entity.entity_category_str().map(String::from);

        Some(Self {
            entity_type: entity_type.to_string(),
            base_schema: entity_category.clone(),
            entity_category,
            subcategory: entity.subcategory_str().map(String::from),
            modules: entity.module_keys(),
            has_entity_capabilities: entity.has_entity_capabilities(),
            has_site_capabilities: entity.has_site_capabilities(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    #[default]
    Low,
    Medium,
    High,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Low => "low",
            Complexity::Medium => "medium",
            Complexity::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    /// Compact JSON size in bytes
    pub schema_size: usize,
    pub complexity: Complexity,
    pub module_count: usize,
}

impl PerformanceMetrics {
    pub fn measure(document: &Value, entity: &Entity) -> Self {
        let schema_size = serde_json::to_string(document)
            .map(|s| s.len())
            .unwrap_or(0);
        let module_count = entity.module_keys().len();

        let complexity = if module_count > 5 || schema_size > 5000 {
            Complexity::High
        } else if module_count > 2 || schema_size > 2000 {
            Complexity::Medium
        } else {
            Complexity::Low
        };

        Self {
            schema_size,
            complexity,
            module_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
    pub suggestions: Vec<Finding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_info: Option<EntityInfo>,
    pub score: u8,
    pub completeness: u8,
    pub performance: PerformanceMetrics,
}

impl ValidationResult {
    /// Partitions findings by severity, keeping their relative order.
    pub fn from_findings(
        findings: Vec<Finding>,
        entity_info: Option<EntityInfo>,
        score: u8,
        completeness: u8,
        performance: PerformanceMetrics,
    ) -> Self {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut suggestions = Vec::new();
        for finding in findings {
            match finding.severity {
                Severity::Error => errors.push(finding),
                Severity::Warning => warnings.push(finding),
                Severity::Info => suggestions.push(finding),
            }
        }

        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
            suggestions,
            entity_info,
            score,
            completeness,
            performance,
        }
    }

    /// Result for input that never reached the rule pipeline.
    pub fn rejected(finding: Finding) -> Self {
        Self {
            is_valid: false,
            errors: vec![finding],
            warnings: Vec::new(),
            suggestions: Vec::new(),
            entity_info: None,
            score: 0,
            completeness: 0,
            performance: PerformanceMetrics::default(),
        }
    }

    pub fn counts(&self) -> FindingCounts {
        FindingCounts::new(
            self.errors.len(),
            self.warnings.len(),
            self.suggestions.len(),
        )
    }

    /// All findings in severity order.
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.errors
            .iter()
            .chain(self.warnings.iter())
            .chain(self.suggestions.iter())
    }
}
