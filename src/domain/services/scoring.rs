//! Scoring engine
//!
//! Turns an entity snapshot and its finding counts into two independent grades:
//! a tiered quality score and a weighted field-coverage percentage.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::{Entity, FindingCounts};
use crate::domain::value_objects::json;
use crate::domain::value_objects::Taxonomy;

use super::rule_engine::{is_http_url, MIN_DESCRIPTION_CHARS};

const ERROR_PENALTY: i64 = 30;
const WARNING_PENALTY: i64 = 10;
const SUGGESTION_PENALTY: i64 = 5;

const EXCELLENT_FLOOR: f64 = 90.0;
const GOOD_FLOOR: i64 = 50;
const POOR_FLOOR: i64 = 25;
/// More errors than this drops the floor from good to poor.
const POOR_ERROR_THRESHOLD: usize = 3;

const CRITICAL_WEIGHT: f64 = 50.0;
const RECOMMENDED_WEIGHT: f64 = 25.0;
const CAPABILITY_WEIGHT: f64 = 15.0;
const ENHANCEMENT_WEIGHT: f64 = 10.0;

const RECOMMENDED_FIELDS: &[&str] = &["url", "shortDescription", "logo"];
const CAPABILITY_FIELDS: &[&str] = &["entityCapabilities", "siteCapabilities"];
const ENHANCEMENT_FIELDS: &[&str] = &["properties", "modules", "foundingDate", "lastModified"];

/// Score band selected by the finding counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreZone {
    /// No errors and no warnings
    Excellent,
    /// Up to three errors, or warnings only
    Good,
    Poor,
}

impl ScoreZone {
    pub fn for_counts(counts: FindingCounts) -> Self {
        if counts.errors == 0 && counts.warnings == 0 {
            ScoreZone::Excellent
        } else if counts.errors > POOR_ERROR_THRESHOLD {
            ScoreZone::Poor
        } else {
            ScoreZone::Good
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Grade {
    pub score: u8,
    pub completeness: u8,
}

#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine<'a> {
    taxonomy: &'a Taxonomy,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(taxonomy: &'a Taxonomy) -> Self {
        Self { taxonomy }
    }

    pub fn score(&self, entity: &Entity, counts: FindingCounts) -> Grade {
        let completeness = self.completeness(entity);
        Grade {
            score: quality_score(counts, completeness),
            completeness,
        }
    }

    /// Weighted share of the four field tiers that are present, 0-100.
    pub fn completeness(&self, entity: &Entity) -> u8 {
        let critical: Vec<&str> = self
            .taxonomy
            .critical_fields()
            .iter()
            .map(String::as_str)
            .chain(std::iter::once("subcategory"))
            .collect();

        let tiers: [(&[&str], f64, fn(&Entity, &str) -> bool); 4] = [
            (&critical, CRITICAL_WEIGHT, critical_present),
            (RECOMMENDED_FIELDS, RECOMMENDED_WEIGHT, recommended_present),
            (CAPABILITY_FIELDS, CAPABILITY_WEIGHT, capability_present),
            (ENHANCEMENT_FIELDS, ENHANCEMENT_WEIGHT, enhancement_present),
        ];

        let total: f64 = tiers
            .iter()
            .map(|(fields, weight, present)| {
                let count = fields.iter().filter(|f| present(entity, f)).count();
                count as f64 / fields.len() as f64 * weight
            })
            .sum();

        to_percent(total)
    }
}

/// Tiered quality score for a set of finding counts.
///
/// The excellent zone starts at 90 and earns the last ten points from
/// completeness; otherwise every finding deducts from 100 down to the zone's
/// floor.
pub fn quality_score(counts: FindingCounts, completeness: u8) -> u8 {
    let deductions = counts.errors as i64 * ERROR_PENALTY
        + counts.warnings as i64 * WARNING_PENALTY
        + counts.suggestions as i64 * SUGGESTION_PENALTY;
    let base = (100 - deductions).max(0);

    let score = match ScoreZone::for_counts(counts) {
        ScoreZone::Excellent => {
            (EXCELLENT_FLOOR + f64::from(completeness) / 10.0).clamp(EXCELLENT_FLOOR, 100.0)
        }
        ScoreZone::Poor => base.max(POOR_FLOOR) as f64,
        ScoreZone::Good => base.max(GOOD_FLOOR) as f64,
    };

    to_percent(score)
}

fn to_percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

fn critical_present(entity: &Entity, field: &str) -> bool {
    let value = entity.field(field);
    match field {
        "name" => english_text(value).is_some(),
        "description" => {
            english_text(value).is_some_and(|en| json::char_len(en) >= MIN_DESCRIPTION_CHARS)
        }
        _ => value.is_some(),
    }
}

fn recommended_present(entity: &Entity, field: &str) -> bool {
    let value = entity.field(field);
    match field {
        "url" => value.and_then(Value::as_str).is_some_and(is_http_url),
        _ => value.is_some(),
    }
}

fn capability_present(entity: &Entity, field: &str) -> bool {
    json::non_empty_object(entity.field(field)).is_some()
}

fn enhancement_present(entity: &Entity, field: &str) -> bool {
    let value = entity.field(field);
    match field {
        "modules" => json::non_empty_object(value).is_some(),
        _ => value.is_some(),
    }
}

/// Non-empty `en` entry of a language mapping.
fn english_text(value: Option<&Value>) -> Option<&str> {
    value?
        .as_object()?
        .get("en")?
        .as_str()
        .filter(|en| !en.is_empty())
}
