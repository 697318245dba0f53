use aiml_validator::{Finding, Severity, ValidationResult};

use crate::ui::context::UiContext;
use crate::ui::text::{ColoredText, Icon};

pub fn render_validation_report(source: &str, result: &ValidationResult, ui: &UiContext) -> String {
    let mut out = String::new();

    let (icon, status) = if result.is_valid {
        (Icon::Success, ColoredText::success("valid").bold())
    } else {
        (Icon::Error, ColoredText::error("invalid").bold())
    };
    out.push_str(&format!(
        "{} {}: {}  score {}/100  completeness {}%\n",
        icon.render(ui.unicode),
        source,
        status.render(ui.color),
        result.score,
        result.completeness
    ));

    if ui.detail == 0 {
        return out;
    }

    for finding in result.findings() {
        out.push_str(&render_finding(finding, ui));
    }

    if ui.detail >= 2 {
        if let Some(info) = &result.entity_info {
            let mut placement = Vec::new();
            placement.extend(info.entity_category.as_deref());
            placement.extend(info.subcategory.as_deref());
            let modules = if info.modules.is_empty() {
                "none".to_string()
            } else {
                info.modules.join(", ")
            };
            out.push_str(&format!(
                "  {}\n",
                ColoredText::dim(format!(
                    "entity: {} ({}), modules: {}",
                    info.entity_type,
                    placement.join(" / "),
                    modules
                ))
                .render(ui.color)
            ));
        }
        let performance = &result.performance;
        out.push_str(&format!(
            "  {}\n",
            ColoredText::dim(format!(
                "size: {} bytes, complexity: {}, modules: {}",
                performance.schema_size,
                performance.complexity.as_str(),
                performance.module_count
            ))
            .render(ui.color)
        ));
    }

    out
}

fn render_finding(finding: &Finding, ui: &UiContext) -> String {
    let (icon, label) = match finding.severity {
        Severity::Error => (Icon::Error, ColoredText::error(finding.severity.to_string())),
        Severity::Warning => (Icon::Warning, ColoredText::warning(finding.severity.to_string())),
        Severity::Info => (Icon::Info, ColoredText::info(finding.severity.to_string())),
    };

    let mut line = format!(
        "  {} {}[{}] {}: {}\n",
        icon.render(ui.unicode),
        label.render(ui.color),
        finding.category,
        finding.field,
        finding.message
    );
    if let Some(suggestion) = &finding.suggestion {
        line.push_str(&format!(
            "    {} {}\n",
            Icon::Arrow.render(ui.unicode),
            ColoredText::dim(suggestion.as_str()).render(ui.color)
        ));
    }
    line
}

pub fn render_validation_summary(valid: usize, invalid: usize, ui: &UiContext) -> String {
    let total = valid + invalid;
    let noun = if total == 1 { "document" } else { "documents" };
    let text = format!("{total} {noun}: {valid} valid, {invalid} invalid");
    let text = if invalid == 0 {
        ColoredText::success(text)
    } else {
        ColoredText::error(text)
    };
    format!("{}\n", text.bold().render(ui.color))
}
