//! Taxonomy Value Object
//!
//! The fixed category / type / subcategory / module tables an entity is checked
//! against. A `Taxonomy` is built once and passed by reference into the rule
//! engine, the scoring engine and the module resolver, so several rule sets can
//! live side by side (tests build variants with the `with_*` methods).

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};

const V2_0_1_VERSION: &str = "2.0.1";
const V2_0_1_CONTEXT: &str = "https://schemas.meta-aiml.org/v2.0.1/context.jsonld";

const LANGUAGE_CODE_PATTERN: &str = r"^[a-z]{2}(-[A-Z]{2})?$";

const CRITICAL_FIELDS: &[&str] = &[
    "@context",
    "@id",
    "@type",
    "schemaVersion",
    "entityType",
    "entityCategory",
    "name",
    "description",
];

const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "organization",
        &[
            "clinic",
            "education_platform",
            "fitness_platform",
            "hotel",
            "restaurant",
            "store",
        ],
    ),
    (
        "product_offering",
        &["ecommerce_store", "marketplace", "product", "software_product"],
    ),
    (
        "service",
        &[
            "business_services",
            "generative_ai_platform",
            "real_estate_platform",
            "ridesharing_service",
            "task_management_app",
            "telemedicine_platform",
            "virtual_event_platform",
            "web_app",
            "website_services",
        ],
    ),
    (
        "creative_work",
        &[
            "blog",
            "event",
            "file_hosting",
            "gaming_platform",
            "news",
            "personal_website",
            "photo_hosting",
            "streaming_platform",
            "video_hosting",
        ],
    ),
    ("community", &["dating_platform", "social_network"]),
    ("financial_product", &["online_banking"]),
];

const SUBCATEGORIES: &[(&str, &[&str])] = &[
    ("ecommerce_platform", &["ecommerce_store", "marketplace", "store"]),
    ("hospitality", &["hotel", "restaurant"]),
    (
        "healthcare_services",
        &["clinic", "fitness_platform", "telemedicine_platform"],
    ),
    ("education_services", &["education_platform"]),
    ("ai_platform", &["generative_ai_platform"]),
    ("professional_services", &["business_services"]),
    ("ridesharing_services", &["ridesharing_service"]),
    ("website_services", &["website_services"]),
    ("property_services", &["real_estate_platform"]),
    ("physical_product", &["product"]),
    (
        "digital_product",
        &[
            "file_hosting",
            "personal_website",
            "software_product",
            "task_management_app",
            "web_app",
        ],
    ),
    (
        "media_entertainment",
        &[
            "blog",
            "gaming_platform",
            "news",
            "photo_hosting",
            "streaming_platform",
            "video_hosting",
        ],
    ),
    ("social_platform", &["dating_platform", "social_network"]),
    ("event_platform", &["event", "virtual_event_platform"]),
    ("financial_services", &["online_banking"]),
];

const SUBCATEGORY_RULES: &[(&str, &[&str], &str)] = &[
    (
        "professional_services",
        &["service"],
        "Professional and business services",
    ),
    (
        "event_platform",
        &["creative_work", "service"],
        "Event organization and management platforms",
    ),
    (
        "physical_product",
        &["product_offering"],
        "Physical goods and products",
    ),
    (
        "website_services",
        &["service"],
        "Website development and maintenance services",
    ),
    (
        "gaming_platform",
        &["creative_work"],
        "Gaming and interactive entertainment platforms",
    ),
];

const STANDARD_MODULES: &[&str] = &[
    "auth",
    "compliance",
    "enhanced-auth",
    "location",
    "logistics",
    "multilingual",
    "notification",
    "payments",
    "recommendations",
    "search",
    "security",
    "streaming",
    "subscription",
    "user-management",
    "warranty",
];

const REQUIRED_MODULES: &[(&str, &[&str])] = &[
    ("clinic", &["auth", "security", "compliance"]),
    ("education_platform", &["auth", "user-management"]),
    ("hotel", &["location", "payments"]),
    ("restaurant", &["location"]),
    ("ecommerce_store", &["auth", "payments"]),
    ("marketplace", &["auth", "payments", "user-management"]),
    ("generative_ai_platform", &["auth", "security"]),
    ("ridesharing_service", &["auth", "location"]),
    ("social_network", &["auth", "user-management"]),
    ("online_banking", &["auth", "security", "compliance"]),
    (
        "telemedicine_platform",
        &["auth", "security", "compliance", "streaming"],
    ),
    ("dating_platform", &["auth", "user-management"]),
];

/// Taxonomy version selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TaxonomyVersion {
    /// Multilingual names, capability blocks, tiered scoring
    #[default]
    #[serde(rename = "2.0.1")]
    V2_0_1,
}

impl TaxonomyVersion {
    pub const ALL: &'static [TaxonomyVersion] = &[TaxonomyVersion::V2_0_1];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaxonomyVersion::V2_0_1 => V2_0_1_VERSION,
        }
    }

    /// Comma-separated list of supported selectors (for error messages).
    pub fn supported() -> String {
        Self::ALL
            .iter()
            .map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for TaxonomyVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaxonomyVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('v') {
            V2_0_1_VERSION => Ok(TaxonomyVersion::V2_0_1),
            other => Err(other.to_string()),
        }
    }
}

/// Restricts a subcategory to a set of top-level categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubcategoryRule {
    pub allowed_categories: Vec<String>,
    pub description: String,
}

impl SubcategoryRule {
    pub fn allows(&self, category: &str) -> bool {
        self.allowed_categories.iter().any(|c| c == category)
    }
}

/// Immutable rule tables for one taxonomy version.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    version: String,
    context: String,
    critical_fields: Vec<String>,
    categories: Vec<String>,
    types_by_category: BTreeMap<String, Vec<String>>,
    subcategories: BTreeMap<String, Vec<String>>,
    subcategory_rules: BTreeMap<String, SubcategoryRule>,
    standard_modules: Vec<String>,
    required_modules: BTreeMap<String, Vec<String>>,
    language_code: Regex,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn table(rows: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
    rows.iter()
        .map(|(key, values)| (key.to_string(), owned(values)))
        .collect()
}

impl Taxonomy {
    pub fn for_version(version: TaxonomyVersion) -> Self {
        match version {
            TaxonomyVersion::V2_0_1 => Self::v2_0_1(),
        }
    }

    /// The v2.0.1 rule set.
    pub fn v2_0_1() -> Self {
        Self {
            version: V2_0_1_VERSION.to_string(),
            context: V2_0_1_CONTEXT.to_string(),
            critical_fields: owned(CRITICAL_FIELDS),
            categories: CATEGORIES.iter().map(|(c, _)| c.to_string()).collect(),
            types_by_category: table(CATEGORIES),
            subcategories: table(SUBCATEGORIES),
            subcategory_rules: SUBCATEGORY_RULES
                .iter()
                .map(|(key, allowed, description)| {
                    (
                        key.to_string(),
                        SubcategoryRule {
                            allowed_categories: owned(allowed),
                            description: description.to_string(),
                        },
                    )
                })
                .collect(),
            standard_modules: owned(STANDARD_MODULES),
            required_modules: table(REQUIRED_MODULES),
            language_code: Regex::new(LANGUAGE_CODE_PATTERN)
                .expect("language code pattern is a valid regex"),
        }
    }

    pub fn with_version(mut self, version: &str, context: &str) -> Self {
        self.version = version.to_string();
        self.context = context.to_string();
        self
    }

    pub fn with_category(mut self, category: &str, types: &[&str]) -> Self {
        if !self.categories.iter().any(|c| c == category) {
            self.categories.push(category.to_string());
        }
        self.types_by_category
            .insert(category.to_string(), owned(types));
        self
    }

    pub fn with_subcategory(mut self, subcategory: &str, types: &[&str]) -> Self {
        self.subcategories
            .insert(subcategory.to_string(), owned(types));
        self
    }

    pub fn with_subcategory_rule(mut self, subcategory: &str, allowed: &[&str]) -> Self {
        self.subcategory_rules.insert(
            subcategory.to_string(),
            SubcategoryRule {
                allowed_categories: owned(allowed),
                description: String::new(),
            },
        );
        self
    }

    pub fn with_standard_modules(mut self, modules: &[&str]) -> Self {
        self.standard_modules = owned(modules);
        self
    }

    pub fn with_required_modules(mut self, entity_type: &str, modules: &[&str]) -> Self {
        if modules.is_empty() {
            self.required_modules.remove(entity_type);
        } else {
            self.required_modules
                .insert(entity_type.to_string(), owned(modules));
        }
        self
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Exact JSON-LD context an entity must declare.
    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn critical_fields(&self) -> &[String] {
        &self.critical_fields
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn is_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Types registered for a category (empty for unknown categories).
    pub fn types_for_category(&self, category: &str) -> &[String] {
        self.types_by_category
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every entity type across all categories, sorted.
    pub fn entity_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self
            .types_by_category
            .values()
            .flatten()
            .map(String::as_str)
            .collect();
        types.sort_unstable();
        types.dedup();
        types
    }

    pub fn subcategories(&self) -> Vec<&str> {
        self.subcategories.keys().map(String::as_str).collect()
    }

    /// Member types of a known subcategory.
    pub fn subcategory_types(&self, subcategory: &str) -> Option<&[String]> {
        self.subcategories.get(subcategory).map(Vec::as_slice)
    }

    pub fn subcategory_rule(&self, subcategory: &str) -> Option<&SubcategoryRule> {
        self.subcategory_rules.get(subcategory)
    }

    pub fn standard_modules(&self) -> &[String] {
        &self.standard_modules
    }

    pub fn is_standard_module(&self, module: &str) -> bool {
        self.standard_modules.iter().any(|m| m == module)
    }

    /// Modules an entity type must declare (empty when none are required).
    pub fn required_modules(&self, entity_type: &str) -> &[String] {
        self.required_modules
            .get(entity_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// ISO-639-1 code with an optional region, e.g. `en` or `en-US`.
    pub fn is_valid_language_code(&self, code: &str) -> bool {
        self.language_code.is_match(code)
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::v2_0_1()
    }
}
