//! Entity
//!
//! The document under validation. Recognized fields are kept as raw JSON values
//! so a wrong type is something the rule engine reports rather than something
//! decoding rejects; unrecognized keys ride along in `extra` and serialize back
//! out untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::value_objects::json;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(rename = "@context", default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub type_tag: Option<Value>,
    #[serde(rename = "schemaVersion", default, skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<Value>,
    #[serde(rename = "entityType", default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<Value>,
    #[serde(rename = "entityCategory", default, skip_serializing_if = "Option::is_none")]
    pub entity_category: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
    #[serde(rename = "shortDescription", default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modules: Option<Value>,
    #[serde(rename = "entityCapabilities", default, skip_serializing_if = "Option::is_none")]
    pub entity_capabilities: Option<Value>,
    #[serde(rename = "siteCapabilities", default, skip_serializing_if = "Option::is_none")]
    pub site_capabilities: Option<Value>,
    #[serde(rename = "foundingDate", default, skip_serializing_if = "Option::is_none")]
    pub founding_date: Option<Value>,
    #[serde(rename = "lastModified", default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<Value>,
    #[serde(rename = "serviceType", default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<Value>,

    /// Keys the taxonomy does not recognize
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Entity {
    /// Decodes an entity from a JSON object.
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value.clone())
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Looks up a field by its document key, recognized or not.
    pub fn field(&self, key: &str) -> Option<&Value> {
        let recognized = match key {
            "@context" => &self.context,
            "@id" => &self.id,
            "@type" => &self.type_tag,
            "schemaVersion" => &self.schema_version,
            "entityType" => &self.entity_type,
            "entityCategory" => &self.entity_category,
            "subcategory" => &self.subcategory,
            "name" => &self.name,
            "description" => &self.description,
            "shortDescription" => &self.short_description,
            "url" => &self.url,
            "logo" => &self.logo,
            "properties" => &self.properties,
            "modules" => &self.modules,
            "entityCapabilities" => &self.entity_capabilities,
            "siteCapabilities" => &self.site_capabilities,
            "foundingDate" => &self.founding_date,
            "lastModified" => &self.last_modified,
            "serviceType" => &self.service_type,
            other => return self.extra.get(other).filter(|v| !v.is_null()),
        };
        recognized.as_ref()
    }

    pub fn entity_type_str(&self) -> Option<&str> {
        self.entity_type.as_ref().and_then(Value::as_str)
    }

    pub fn entity_category_str(&self) -> Option<&str> {
        self.entity_category.as_ref().and_then(Value::as_str)
    }

    pub fn subcategory_str(&self) -> Option<&str> {
        self.subcategory.as_ref().and_then(Value::as_str)
    }

    /// Keys of the `modules` mapping, sorted.
    pub fn module_keys(&self) -> Vec<String> {
        self.modules
            .as_ref()
            .and_then(Value::as_object)
            .map(|modules| modules.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn has_entity_capabilities(&self) -> bool {
        json::is_truthy(self.entity_capabilities.as_ref())
    }

    pub fn has_site_capabilities(&self) -> bool {
        json::is_truthy(self.site_capabilities.as_ref())
    }
}
