use anyhow::{Context, Result};

use aiml_validator::domain::entities::ModuleConfiguration;
use aiml_validator::{AimlError, DirectorySchemaSource, ModuleService};

use super::{read_value, Session};
use crate::cli::ModulesAction;
use crate::ui::json::{emit_event, DataEvent};
use crate::ui::text::{ColoredText, Icon};
use crate::ui::views::modules::{
    render_closure, render_compatibility, render_module_report, render_recommendations,
};

pub fn cmd_modules(session: &Session, action: &ModulesAction) -> Result<()> {
    let directory = session
        .config
        .schemas
        .directory
        .clone()
        .ok_or(AimlError::MissingSchemaDirectory)?;
    let service = ModuleService::new(
        DirectorySchemaSource::new(directory),
        session.config.taxonomy()?,
    );
    let ui = &session.ui;

    match action {
        ModulesAction::Resolve { file } => {
            let document = read_value(file)?;
            let report = service.analyze(&document);
            if ui.json {
                emit_event(&DataEvent::new("modules.resolve", &report))?;
            } else {
                print!("{}", render_module_report(&report, ui));
            }
            if report.resolution.errors().next().is_some() || !report.compatibility.compatible {
                std::process::exit(1);
            }
        }
        ModulesAction::Close { modules } => {
            let closure = service.close_dependencies(modules);
            if ui.json {
                emit_event(&DataEvent::new("modules.close", &closure))?;
            } else {
                print!("{}", render_closure(&closure, ui));
            }
        }
        ModulesAction::Check { modules } => {
            let report = service.check_compatibility(modules);
            if ui.json {
                emit_event(&DataEvent::new("modules.check", &report))?;
            } else {
                print!("{}", render_compatibility(&report, ui));
            }
            if !report.compatible {
                std::process::exit(1);
            }
        }
        ModulesAction::Recommend { entity_type } => {
            let recommendations = service.recommended_modules(entity_type);
            if ui.json {
                emit_event(&DataEvent::new("modules.recommend", &recommendations))?;
            } else {
                print!("{}", render_recommendations(&recommendations, ui));
            }
        }
        ModulesAction::Verify { file } => {
            let configuration: ModuleConfiguration = serde_json::from_value(read_value(file)?)
                .with_context(|| format!("Invalid module configuration {}", file.display()))?;
            let outcome = service.check_module_config(&configuration);

            if ui.json {
                let data = serde_json::json!({
                    "moduleType": configuration.module_type,
                    "valid": outcome.is_ok(),
                    "error": outcome.as_ref().err().map(|e| e.to_string()),
                });
                emit_event(&DataEvent::new("modules.verify", &data))?;
            } else {
                match &outcome {
                    Ok(()) => println!(
                        "{} {}",
                        Icon::Success.render(ui.unicode),
                        ColoredText::success(format!(
                            "{} configuration is complete",
                            configuration.module_type
                        ))
                        .render(ui.color)
                    ),
                    Err(e) => println!(
                        "{} {}",
                        Icon::Error.render(ui.unicode),
                        ColoredText::error(e.to_string()).render(ui.color)
                    ),
                }
            }
            if outcome.is_err() {
                std::process::exit(1);
            }
        }
    }
    Ok(())
}
