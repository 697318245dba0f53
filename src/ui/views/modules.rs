use aiml_validator::domain::services::{
    CompatibilityReport, DependencyClosure, ModuleRecommendations,
};
use aiml_validator::ModuleReport;

use crate::ui::context::UiContext;
use crate::ui::text::{ColoredText, Icon};

pub fn render_module_report(report: &ModuleReport, ui: &UiContext) -> String {
    let mut out = String::new();

    out.push_str(&section("Resolved modules", ui));
    if report.resolution.modules.is_empty() {
        out.push_str("  (no module declarations)\n");
    }
    for module in &report.resolution.modules {
        match &module.error {
            Some(error) => out.push_str(&format!(
                "  {} {}: {}\n",
                Icon::Error.render(ui.unicode),
                module.module_type,
                ColoredText::error(error.as_str()).render(ui.color)
            )),
            None => {
                let required = if module.required { ", required" } else { "" };
                out.push_str(&format!(
                    "  {} {} {}\n",
                    Icon::Success.render(ui.unicode),
                    module.module_type,
                    ColoredText::dim(format!("v{}{required}", module.version)).render(ui.color)
                ));
            }
        }
    }

    out.push('\n');
    out.push_str(&render_closure(&report.closure, ui));
    out.push('\n');
    out.push_str(&render_compatibility(&report.compatibility, ui));
    if let Some(recommendations) = &report.recommendations {
        out.push('\n');
        out.push_str(&render_recommendations(recommendations, ui));
    }

    out.push_str(&render_warnings(report.resolution.warnings.iter(), ui));
    out
}

pub fn render_closure(closure: &DependencyClosure, ui: &UiContext) -> String {
    let mut out = section("Dependency closure", ui);
    let modules: Vec<&str> = closure.modules.iter().map(String::as_str).collect();
    out.push_str(&format!("  {}\n", modules.join(", ")));
    out.push_str(&render_warnings(closure.warnings.iter(), ui));
    out
}

pub fn render_compatibility(report: &CompatibilityReport, ui: &UiContext) -> String {
    let mut out = section("Compatibility", ui);
    if report.compatible {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Success.render(ui.unicode),
            ColoredText::success("no conflicts").render(ui.color)
        ));
    }
    for conflict in &report.conflicts {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Error.render(ui.unicode),
            ColoredText::error(conflict.as_str()).render(ui.color)
        ));
    }
    out.push_str(&render_warnings(report.warnings.iter(), ui));
    out
}

pub fn render_recommendations(recommendations: &ModuleRecommendations, ui: &UiContext) -> String {
    let mut out = section("Recommended modules", ui);
    out.push_str(&format!("  {}\n", recommendations.modules.join(", ")));
    out.push_str(&render_warnings(recommendations.warnings.iter(), ui));
    out
}

fn section(title: &str, ui: &UiContext) -> String {
    format!("{}\n", ColoredText::info(title).bold().render(ui.color))
}

fn render_warnings<'a>(warnings: impl Iterator<Item = &'a String>, ui: &UiContext) -> String {
    if ui.detail == 0 {
        return String::new();
    }
    warnings
        .map(|warning| {
            format!(
                "  {} {}\n",
                Icon::Warning.render(ui.unicode),
                ColoredText::warning(warning.as_str()).render(ui.color)
            )
        })
        .collect()
}
