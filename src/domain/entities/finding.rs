//! Finding entity
//!
//! One reported issue or observation about an entity. Severity is fixed by the
//! check that emits the finding; only `Error` findings block validity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How much a finding matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    /// Improvement suggestion; never affects validity
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
            Severity::Info => f.write_str("info"),
        }
    }
}

/// Which aspect of the entity a finding is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingCategory {
    Structure,
    Schema,
    Semantic,
    Performance,
    BestPractice,
}

impl fmt::Display for FindingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FindingCategory::Structure => f.write_str("structure"),
            FindingCategory::Schema => f.write_str("schema"),
            FindingCategory::Semantic => f.write_str("semantic"),
            FindingCategory::Performance => f.write_str("performance"),
            FindingCategory::BestPractice => f.write_str("best_practice"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub field: String,
    pub message: String,
    pub severity: Severity,
    pub category: FindingCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Finding {
    pub fn new(
        severity: Severity,
        category: FindingCategory,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity,
            category,
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}] {}: {}",
            self.severity, self.category, self.field, self.message
        )
    }
}

/// Receives findings as checks produce them.
pub trait FindingSink {
    fn add_finding(&mut self, finding: Finding);

    fn add_error(
        &mut self,
        field: &str,
        message: &str,
        category: FindingCategory,
        suggestion: Option<&str>,
    ) {
        self.add_finding(make_finding(
            Severity::Error,
            category,
            field,
            message,
            suggestion,
        ));
    }

    fn add_warning(
        &mut self,
        field: &str,
        message: &str,
        category: FindingCategory,
        suggestion: Option<&str>,
    ) {
        self.add_finding(make_finding(
            Severity::Warning,
            category,
            field,
            message,
            suggestion,
        ));
    }

    fn add_suggestion(
        &mut self,
        field: &str,
        message: &str,
        category: FindingCategory,
        suggestion: Option<&str>,
    ) {
        self.add_finding(make_finding(
            Severity::Info,
            category,
            field,
            message,
            suggestion,
        ));
    }
}

fn make_finding(
    severity: Severity,
    category: FindingCategory,
    field: &str,
    message: &str,
    suggestion: Option<&str>,
) -> Finding {
    Finding {
        field: field.to_string(),
        message: message.to_string(),
        severity,
        category,
        suggestion: suggestion.map(String::from),
    }
}

impl FindingSink for Vec<Finding> {
    fn add_finding(&mut self, finding: Finding) {
        self.push(finding);
    }
}

/// Number of findings per severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FindingCounts {
    pub errors: usize,
    pub warnings: usize,
    pub suggestions: usize,
}

impl FindingCounts {
    pub fn new(errors: usize, warnings: usize, suggestions: usize) -> Self {
        Self {
            errors,
            warnings,
            suggestions,
        }
    }

    pub fn tally<'a>(findings: impl IntoIterator<Item = &'a Finding>) -> Self {
        let mut counts = Self::default();
        for finding in findings {
            match finding.severity {
                Severity::Error => counts.errors += 1,
                Severity::Warning => counts.warnings += 1,
                Severity::Info => counts.suggestions += 1,
            }
        }
        counts
    }
}
