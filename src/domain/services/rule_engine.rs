//! Rule engine
//!
//! Runs the fixed, ordered sequence of checks against one entity. Every check
//! appends zero or more findings to a sink; none of them fail. Wrong-typed or
//! missing fields are reported, never rejected.

use chrono::{DateTime, NaiveDate};
use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::entities::{Entity, Finding, FindingCategory, FindingSink};
use crate::domain::value_objects::json::{self, is_truthy, truthy};
use crate::domain::value_objects::Taxonomy;

/// Minimum length (in characters) of a useful English description.
pub const MIN_DESCRIPTION_CHARS: usize = 50;

/// Fewer declared functional features than this earns a suggestion.
const MIN_FUNCTIONAL_FEATURES: usize = 3;

/// Per-field wording for the multilingual checks.
struct MultilingualField {
    key: &'static str,
    not_a_mapping: &'static str,
    convert_hint: &'static str,
    missing_en: &'static str,
    missing_en_hint: &'static str,
    min_en_chars: Option<usize>,
}

const NAME: MultilingualField = MultilingualField {
    key: "name",
    not_a_mapping: "name must be a multilingual object in v2.0.1",
    convert_hint: r#"Convert to object format: {"en": "Your Name", "es": "Tu Nombre"}"#,
    missing_en: "English name (en) is required in multilingual names",
    missing_en_hint: r#"Add "en" field - English is required for international compatibility"#,
    min_en_chars: None,
};

const DESCRIPTION: MultilingualField = MultilingualField {
    key: "description",
    not_a_mapping: "description must be a multilingual object in v2.0.1",
    convert_hint: r#"Convert to object format: {"en": "Your Description"}"#,
    missing_en: "English description (en) is required",
    missing_en_hint: r#"Add "en" field - English description is mandatory"#,
    min_en_chars: Some(MIN_DESCRIPTION_CHARS),
};

/// Evaluates entities against one taxonomy.
#[derive(Debug, Clone, Copy)]
pub struct RuleEngine<'a> {
    taxonomy: &'a Taxonomy,
    strict: bool,
}

impl<'a> RuleEngine<'a> {
    pub fn new(taxonomy: &'a Taxonomy) -> Self {
        Self {
            taxonomy,
            strict: false,
        }
    }

    /// Enables the supplemental strict checks (recommended fields,
    /// category expectations, date shapes).
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        self.taxonomy
    }

    pub fn evaluate(&self, entity: &Entity) -> Vec<Finding> {
        let mut findings = Vec::new();
        self.evaluate_into(entity, &mut findings);
        findings
    }

    /// Runs every stage in order, appending findings to `sink`.
    pub fn evaluate_into(&self, entity: &Entity, sink: &mut impl FindingSink) {
        debug!(stage = "critical_fields", "evaluating");
        self.check_critical_fields(entity, sink);

        if self.strict {
            debug!(stage = "strict", "evaluating");
            self.check_strict_expectations(entity, sink);
        }

        debug!(stage = "context_version", "evaluating");
        self.check_context(entity, sink);
        self.check_schema_version(entity, sink);

        debug!(stage = "hierarchy", "evaluating");
        self.check_hierarchy(entity, sink);

        debug!(stage = "multilingual", "evaluating");
        self.check_multilingual(&NAME, entity.name.as_ref(), sink);
        self.check_multilingual(&DESCRIPTION, entity.description.as_ref(), sink);

        debug!(stage = "capabilities", "evaluating");
        check_entity_capabilities(entity.entity_capabilities.as_ref(), sink);
        check_site_capabilities(entity.site_capabilities.as_ref(), sink);

        debug!(stage = "modules", "evaluating");
        self.check_modules(entity, sink);

        debug!(stage = "best_practices", "evaluating");
        check_best_practices(entity, sink);
    }

    fn check_critical_fields(&self, entity: &Entity, sink: &mut impl FindingSink) {
        let version = self.taxonomy.version();
        for field in self.taxonomy.critical_fields() {
            if is_truthy(entity.field(field)) {
                continue;
            }
            let hint =
                format!("Add the {field} field to your schema (required for v{version} compliance)");
            sink.add_error(
                field,
                &format!("Critical required field '{field}' is missing"),
                FindingCategory::Structure,
                Some(hint.as_str()),
            );
        }
    }

    fn check_context(&self, entity: &Entity, sink: &mut impl FindingSink) {
        let expected = self.taxonomy.context();

        match truthy(entity.context.as_ref()) {
            None => {
                let hint = format!(r#"Add "@context": "{expected}""#);
                sink.add_error(
                    "@context",
                    "@context is required for JSON-LD compliance",
                    FindingCategory::Structure,
                    Some(hint.as_str()),
                );
            }
            Some(context) if context.as_str() != Some(expected) => {
                let hint = format!(
                    r#"Use exactly "{expected}" for AIML v{} schemas"#,
                    self.taxonomy.version()
                );
                sink.add_error(
                    "@context",
                    "Invalid @context value - must be exact",
                    FindingCategory::Structure,
                    Some(hint.as_str()),
                );
            }
            Some(_) => {}
        }
    }

    fn check_schema_version(&self, entity: &Entity, sink: &mut impl FindingSink) {
        let expected = self.taxonomy.version();

        match truthy(entity.schema_version.as_ref()) {
            None => {
                let hint = format!(r#"Add "schemaVersion": "{expected}""#);
                sink.add_error(
                    "schemaVersion",
                    &format!("schemaVersion is required for v{expected} compliance"),
                    FindingCategory::Structure,
                    Some(hint.as_str()),
                );
            }
            Some(version) if version.as_str() != Some(expected) => {
                let hint = format!(r#"Must be exactly "{expected}" for current META-AIML compliance"#);
                sink.add_error(
                    "schemaVersion",
                    &format!("Invalid schema version: {}", json::display(version)),
                    FindingCategory::Schema,
                    Some(hint.as_str()),
                );
            }
            Some(_) => {}
        }
    }

    fn check_hierarchy(&self, entity: &Entity, sink: &mut impl FindingSink) {
        let taxonomy = self.taxonomy;
        let category = truthy(entity.entity_category.as_ref());
        let entity_type = truthy(entity.entity_type.as_ref());

        if let Some(category) = category {
            if !category.as_str().is_some_and(|c| taxonomy.is_category(c)) {
                let hint = format!("Use one of: {}", taxonomy.categories().join(", "));
                sink.add_error(
                    "entityCategory",
                    &format!("Invalid entity category: {}", json::display(category)),
                    FindingCategory::Schema,
                    Some(hint.as_str()),
                );
            }
        }

        if let (Some(entity_type), Some(category)) = (entity_type, category) {
            let category = json::display(category);
            let valid_types = taxonomy.types_for_category(&category);
            if !valid_types.is_empty() && !contains(valid_types, entity_type) {
                let hint = format!("Valid types for {category}: {}", valid_types.join(", "));
                sink.add_error(
                    "entityType",
                    &format!(
                        "Entity type '{}' is not valid for category '{category}'",
                        json::display(entity_type)
                    ),
                    FindingCategory::Schema,
                    Some(hint.as_str()),
                );
            }
        }

        let Some(subcategory) = truthy(entity.subcategory.as_ref()) else {
            return;
        };
        let name = json::display(subcategory);
        let members = subcategory.as_str().and_then(|s| taxonomy.subcategory_types(s));

        if members.is_none() {
            let hint = format!("Common subcategories: {}", taxonomy.subcategories().join(", "));
            sink.add_warning(
                "subcategory",
                &format!("Subcategory '{name}' might not be standard"),
                FindingCategory::Schema,
                Some(hint.as_str()),
            );
        }

        let rule = subcategory.as_str().and_then(|s| taxonomy.subcategory_rule(s));
        if let (Some(rule), Some(category)) = (rule, category) {
            let category = json::display(category);
            if !rule.allows(&category) {
                let hint = format!(
                    "Valid categories for {name}: {}",
                    rule.allowed_categories.join(", ")
                );
                sink.add_error(
                    "subcategory",
                    &format!("Subcategory '{name}' is not valid for category '{category}'"),
                    FindingCategory::Schema,
                    Some(hint.as_str()),
                );
            }
        }

        if let (Some(members), Some(entity_type)) = (members, entity_type) {
            if !contains(members, entity_type) {
                let hint = format!("Valid types for {name}: {}", members.join(", "));
                sink.add_error(
                    "entityType",
                    &format!(
                        "Entity type '{}' is not valid for subcategory '{name}'",
                        json::display(entity_type)
                    ),
                    FindingCategory::Schema,
                    Some(hint.as_str()),
                );
            }
        }
    }

    fn check_multilingual(
        &self,
        field: &MultilingualField,
        value: Option<&Value>,
        sink: &mut impl FindingSink,
    ) {
        // Absence is reported by the critical field check.
        let Some(value) = truthy(value) else {
            return;
        };

        let Some(texts) = value.as_object() else {
            sink.add_error(
                field.key,
                field.not_a_mapping,
                FindingCategory::Structure,
                Some(field.convert_hint),
            );
            return;
        };

        let english = texts.get("en");
        if !is_truthy(english) {
            sink.add_error(
                field.key,
                field.missing_en,
                FindingCategory::Structure,
                Some(field.missing_en_hint),
            );
        }

        let english = english.and_then(Value::as_str).filter(|s| !s.is_empty());
        if let (Some(min), Some(english)) = (field.min_en_chars, english) {
            if json::char_len(english) < min {
                sink.add_warning(
                    field.key,
                    &format!("English {} should be at least {min} characters", field.key),
                    FindingCategory::BestPractice,
                    Some("Provide detailed description for better understanding and SEO"),
                );
            }
        }

        for (lang, text) in texts {
            if !self.taxonomy.is_valid_language_code(lang) {
                sink.add_warning(
                    field.key,
                    &format!("Language code '{lang}' might not be valid ISO 639-1 format"),
                    FindingCategory::BestPractice,
                    Some(r#"Use ISO 639-1 language codes (e.g., "en", "es", "fr", "en-US")"#),
                );
            }

            let blank = !text.as_str().is_some_and(|t| !t.trim().is_empty());
            if blank {
                let hint = format!("Provide meaningful {}s for all declared languages", field.key);
                sink.add_warning(
                    field.key,
                    &format!("Empty {} value for language '{lang}'", field.key),
                    FindingCategory::Structure,
                    Some(hint.as_str()),
                );
            }
        }
    }

    fn check_modules(&self, entity: &Entity, sink: &mut impl FindingSink) {
        let taxonomy = self.taxonomy;
        let modules = truthy(entity.modules.as_ref());
        let declared = modules.and_then(Value::as_object);

        if let Some(entity_type) = entity.entity_type_str() {
            for required in taxonomy.required_modules(entity_type) {
                if declared.is_some_and(|m| m.contains_key(required)) {
                    continue;
                }
                let hint = format!("Add the '{required}' module for {entity_type} entities");
                sink.add_warning(
                    "modules",
                    &format!(
                        "Required module '{required}' is missing for entity type '{entity_type}'"
                    ),
                    FindingCategory::Schema,
                    Some(hint.as_str()),
                );
            }
        }

        let Some(modules) = modules else {
            return;
        };
        let Some(declared) = declared else {
            sink.add_warning(
                "modules",
                &format!(
                    "modules must be an object keyed by module name, got {}",
                    json::type_name(modules)
                ),
                FindingCategory::Structure,
                Some(r#"Use {"location": {"version": "2.0.1", "enabled": true}}"#),
            );
            return;
        };

        for (key, module) in declared {
            if !taxonomy.is_standard_module(key) {
                let hint = format!("Standard modules: {}", taxonomy.standard_modules().join(", "));
                sink.add_warning(
                    "modules",
                    &format!("Module '{key}' is not a standard AIML module"),
                    FindingCategory::Schema,
                    Some(hint.as_str()),
                );
            }

            if let Some(module) = module.as_object() {
                self.check_module_entry(key, module, sink);
            }
        }
    }

    fn check_module_entry(
        &self,
        key: &str,
        module: &Map<String, Value>,
        sink: &mut impl FindingSink,
    ) {
        let field = format!("modules.{key}");
        let current = self.taxonomy.version();
        let version = truthy(module.get("version"));

        if version.is_none() {
            let hint = format!(r#"Add version "{current}" for compatibility tracking"#);
            sink.add_warning(
                &field,
                "Module should include version field",
                FindingCategory::BestPractice,
                Some(hint.as_str()),
            );
        }

        if !module.get("enabled").is_some_and(|v| !v.is_null()) {
            sink.add_suggestion(
                &field,
                "Consider adding enabled field to module",
                FindingCategory::BestPractice,
                Some(r#"Add "enabled": true/false for better module management"#),
            );
        }

        if let Some(version) = version.filter(|v| v.as_str() != Some(current)) {
            let hint = format!(r#"Consider using version "{current}" for latest features"#);
            sink.add_warning(
                &field,
                &format!("Module version {} might not be current", json::display(version)),
                FindingCategory::Schema,
                Some(hint.as_str()),
            );
        }
    }

    fn check_strict_expectations(&self, entity: &Entity, sink: &mut impl FindingSink) {
        for field in ["url", "shortDescription"] {
            if is_truthy(entity.field(field)) {
                continue;
            }
            let hint = format!("Add {field} for better schema completeness and usability");
            sink.add_warning(
                field,
                &format!("Strongly recommended field '{field}' is missing"),
                FindingCategory::BestPractice,
                Some(hint.as_str()),
            );
        }

        match entity.entity_category_str() {
            Some("organization") if !is_truthy(entity.founding_date.as_ref()) => {
                sink.add_warning(
                    "foundingDate",
                    "foundingDate is required for organization entities",
                    FindingCategory::Schema,
                    Some("Add foundingDate in ISO 8601 format (YYYY-MM-DD)"),
                );
            }
            Some("product_offering") if !is_truthy(entity.properties.as_ref()) => {
                sink.add_warning(
                    "properties",
                    "properties object is required for product_offering entities",
                    FindingCategory::Schema,
                    Some("Add properties object with product/offering characteristics"),
                );
            }
            Some("service") if !is_truthy(entity.service_type.as_ref()) => {
                sink.add_suggestion(
                    "serviceType",
                    "serviceType is recommended for service entities",
                    FindingCategory::Schema,
                    Some("Add serviceType to specify the type of service provided"),
                );
            }
            Some("creative_work") if !is_truthy(entity.properties.as_ref()) => {
                sink.add_suggestion(
                    "properties",
                    "properties object is recommended for creative_work entities",
                    FindingCategory::Schema,
                    Some("Add properties object with content characteristics"),
                );
            }
            _ => {}
        }

        if let Some(founding) = truthy(entity.founding_date.as_ref()) {
            if !founding.as_str().is_some_and(is_iso_date) {
                sink.add_warning(
                    "foundingDate",
                    &format!(
                        "foundingDate '{}' is not an ISO 8601 date",
                        json::display(founding)
                    ),
                    FindingCategory::BestPractice,
                    Some("Use the YYYY-MM-DD format"),
                );
            }
        }

        if let Some(modified) = truthy(entity.last_modified.as_ref()) {
            let parses = modified
                .as_str()
                .is_some_and(|s| is_iso_date(s) || DateTime::parse_from_rfc3339(s).is_ok());
            if !parses {
                sink.add_warning(
                    "lastModified",
                    &format!(
                        "lastModified '{}' is not an ISO 8601 date or timestamp",
                        json::display(modified)
                    ),
                    FindingCategory::BestPractice,
                    Some("Use YYYY-MM-DD or an RFC 3339 timestamp"),
                );
            }
        }
    }
}

fn check_entity_capabilities(block: Option<&Value>, sink: &mut impl FindingSink) {
    const FIELD: &str = "entityCapabilities";

    let Some(block) = truthy(block) else {
        sink.add_warning(
            FIELD,
            "Missing entityCapabilities - required in v2.0.1 for objective business features",
            FindingCategory::Semantic,
            Some("Add entityCapabilities with functionalFeatures, contentTypes, and businessModel"),
        );
        return;
    };
    let empty = Map::new();
    let capabilities = block.as_object().unwrap_or(&empty);
    let features = truthy(capabilities.get("functionalFeatures"));

    match features {
        None => sink.add_warning(
            FIELD,
            "Missing functionalFeatures - these define objective business capabilities",
            FindingCategory::Semantic,
            Some("Add functionalFeatures object with boolean values for entity capabilities"),
        ),
        Some(Value::Object(features)) => {
            for (key, value) in features {
                if value.is_boolean() {
                    continue;
                }
                sink.add_error(
                    FIELD,
                    &format!(
                        "functionalFeatures.{key} should be boolean, got {}",
                        json::type_name(value)
                    ),
                    FindingCategory::Semantic,
                    Some("Use true/false values for objective, verifiable business features"),
                );
            }
            if features.len() < MIN_FUNCTIONAL_FEATURES {
                sink.add_suggestion(
                    FIELD,
                    "Consider adding more functionalFeatures for comprehensive business description",
                    FindingCategory::Semantic,
                    Some("Add more objective capabilities like acceptsReservations, hasDelivery, acceptsCreditCards"),
                );
            }
        }
        Some(other) => sink.add_error(
            FIELD,
            &format!(
                "functionalFeatures should be an object, got {}",
                json::type_name(other)
            ),
            FindingCategory::Semantic,
            Some(r#"Use {"featureName": true} pairs"#),
        ),
    }

    match capabilities.get("contentTypes") {
        Some(Value::Array(items)) if items.is_empty() => sink.add_warning(
            FIELD,
            "contentTypes array is empty - add available content types",
            FindingCategory::Semantic,
            None,
        ),
        Some(Value::Array(_)) => {}
        _ => sink.add_warning(
            FIELD,
            "Missing contentTypes array - define what content types are available",
            FindingCategory::Semantic,
            Some(r#"Add contentTypes array (e.g., ["menu", "photos", "reviews", "support"])"#),
        ),
    }

    if !is_truthy(capabilities.get("businessModel")) {
        sink.add_suggestion(
            FIELD,
            "Consider adding businessModel for better business categorization",
            FindingCategory::Semantic,
            Some(r#"Add businessModel (e.g., "restaurant", "marketplace", "subscription")"#),
        );
    }

    let online_payments = features
        .and_then(|f| f.get("supportsOnlinePayments"))
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if online_payments && !capabilities.get("paymentMethods").is_some_and(Value::is_array) {
        sink.add_suggestion(
            FIELD,
            "Since online payments are supported, add paymentMethods array",
            FindingCategory::Semantic,
            Some(r#"Add paymentMethods array (e.g., ["credit_card", "paypal", "digital_wallet"])"#),
        );
    }
}

fn check_site_capabilities(block: Option<&Value>, sink: &mut impl FindingSink) {
    const FIELD: &str = "siteCapabilities";

    let Some(block) = truthy(block) else {
        sink.add_warning(
            FIELD,
            "Missing siteCapabilities - required in v2.0.1 for website interaction features",
            FindingCategory::Semantic,
            Some("Add siteCapabilities with availableActions, interactionMethods, and supportedDevices"),
        );
        return;
    };
    let empty = Map::new();
    let capabilities = block.as_object().unwrap_or(&empty);
    let is_array = |key: &str| capabilities.get(key).is_some_and(Value::is_array);

    match capabilities.get("availableActions") {
        Some(Value::Array(items)) if items.is_empty() => sink.add_warning(
            FIELD,
            "availableActions array is empty - add user interaction possibilities",
            FindingCategory::Semantic,
            None,
        ),
        Some(Value::Array(_)) => {}
        _ => sink.add_warning(
            FIELD,
            "Missing availableActions array - define what users can do on the site",
            FindingCategory::Semantic,
            Some(r#"Add availableActions array (e.g., ["view_menu", "make_reservation", "order_delivery"])"#),
        ),
    }

    if !is_array("interactionMethods") {
        sink.add_warning(
            FIELD,
            "Missing interactionMethods - define how users interact with business",
            FindingCategory::Semantic,
            Some(r#"Add interactionMethods array (e.g., ["online_form", "phone_call", "email"])"#),
        );
    }

    if !is_array("contentAccess") {
        sink.add_suggestion(
            FIELD,
            "Add contentAccess array for content accessibility levels",
            FindingCategory::Semantic,
            Some(r#"Add contentAccess (e.g., ["public", "members_only"])"#),
        );
    }

    if !is_array("supportedDevices") {
        sink.add_warning(
            FIELD,
            "Missing supportedDevices - important for accessibility information",
            FindingCategory::Semantic,
            Some(r#"Add supportedDevices array (e.g., ["desktop", "mobile", "tablet"])"#),
        );
    }

    if !is_array("languages") {
        sink.add_warning(
            FIELD,
            "Missing languages array - define interface languages",
            FindingCategory::Semantic,
            Some(r#"Add languages array for internationalization (e.g., ["en", "es"])"#),
        );
    }

    if !is_truthy(capabilities.get("realTimeFeatures")) {
        sink.add_suggestion(
            FIELD,
            "Consider adding realTimeFeatures if site has real-time functionality",
            FindingCategory::Semantic,
            Some(r#"Add realTimeFeatures array if applicable (e.g., ["real_time_availability", "instant_booking"])"#),
        );
    }
}

fn check_best_practices(entity: &Entity, sink: &mut impl FindingSink) {
    if let Some(url) = truthy(entity.url.as_ref()) {
        if !url.as_str().is_some_and(is_http_url) {
            sink.add_warning(
                "url",
                "URL should start with http:// or https://",
                FindingCategory::BestPractice,
                None,
            );
        }
    }

    let primary = match entity.description.as_ref() {
        Some(Value::String(text)) => Some(text.as_str()),
        Some(Value::Object(texts)) => texts.get("en").and_then(Value::as_str),
        _ => None,
    };
    let short = primary
        .filter(|text| !text.is_empty())
        .is_some_and(|text| json::char_len(text) < MIN_DESCRIPTION_CHARS);
    if short {
        sink.add_suggestion(
            "description",
            "Description is quite short, consider adding more detail",
            FindingCategory::BestPractice,
            Some("Aim for at least 50-100 characters for better SEO and understanding"),
        );
    }
}

/// `http://` or `https://` followed by at least one character.
pub fn is_http_url(url: &str) -> bool {
    ["http://", "https://"]
        .iter()
        .any(|scheme| url.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()))
}

fn is_iso_date(s: &str) -> bool {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

fn contains(list: &[String], value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|v| list.iter().any(|item| item == v))
}
