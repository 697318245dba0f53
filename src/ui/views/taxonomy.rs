use std::collections::BTreeMap;

use serde::Serialize;

use aiml_validator::Taxonomy;

use crate::ui::context::UiContext;
use crate::ui::text::ColoredText;

/// Serializable view of a taxonomy's tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomyListing {
    pub version: String,
    pub context: String,
    pub categories: BTreeMap<String, Vec<String>>,
    pub subcategories: BTreeMap<String, SubcategoryListing>,
    pub standard_modules: Vec<String>,
    pub required_modules: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryListing {
    pub types: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_categories: Vec<String>,
}

impl TaxonomyListing {
    pub fn from_taxonomy(taxonomy: &Taxonomy) -> Self {
        let categories = taxonomy
            .categories()
            .iter()
            .map(|c| (c.clone(), taxonomy.types_for_category(c).to_vec()))
            .collect();

        let subcategories = taxonomy
            .subcategories()
            .into_iter()
            .map(|s| {
                let listing = SubcategoryListing {
                    types: taxonomy.subcategory_types(s).unwrap_or_default().to_vec(),
                    allowed_categories: taxonomy
                        .subcategory_rule(s)
                        .map(|rule| rule.allowed_categories.clone())
                        .unwrap_or_default(),
                };
                (s.to_string(), listing)
            })
            .collect();

        let required_modules = taxonomy
            .entity_types()
            .into_iter()
            .filter(|t| !taxonomy.required_modules(t).is_empty())
            .map(|t| (t.to_string(), taxonomy.required_modules(t).to_vec()))
            .collect();

        Self {
            version: taxonomy.version().to_string(),
            context: taxonomy.context().to_string(),
            categories,
            subcategories,
            standard_modules: taxonomy.standard_modules().to_vec(),
            required_modules,
        }
    }

    pub fn render(&self, ui: &UiContext) -> String {
        let heading = |text: &str| format!("{}\n", ColoredText::info(text).bold().render(ui.color));
        let mut out = String::new();

        out.push_str(&heading(&format!("AIML taxonomy {}", self.version)));
        out.push_str(&format!("  context: {}\n\n", self.context));

        out.push_str(&heading("Categories"));
        for (category, types) in &self.categories {
            out.push_str(&format!("  {category}: {}\n", types.join(", ")));
        }

        out.push('\n');
        out.push_str(&heading("Subcategories"));
        for (subcategory, listing) in &self.subcategories {
            out.push_str(&format!("  {subcategory}: {}", listing.types.join(", ")));
            if !listing.allowed_categories.is_empty() {
                let only = format!(" (only in {})", listing.allowed_categories.join(", "));
                out.push_str(&ColoredText::dim(only).render(ui.color));
            }
            out.push('\n');
        }

        out.push('\n');
        out.push_str(&heading("Modules"));
        out.push_str(&format!("  {}\n", self.standard_modules.join(", ")));

        if ui.detail >= 2 {
            out.push('\n');
            out.push_str(&heading("Required modules"));
            for (entity_type, modules) in &self.required_modules {
                out.push_str(&format!("  {entity_type}: {}\n", modules.join(", ")));
            }
        }

        out
    }
}
