use std::path::PathBuf;

use anyhow::Result;

use aiml_validator::Validator;

use super::{read_document, source_name, Document, Session};
use crate::ui::json::{emit_event, CompleteEvent, ResultEvent, StartEvent};
use crate::ui::views::validate::{render_validation_report, render_validation_summary};

pub fn cmd_validate(session: &Session, files: &[PathBuf], strict_warnings: bool) -> Result<()> {
    let ui = &session.ui;
    let validator = Validator::from_config(&session.config)?;

    if ui.json {
        emit_event(&StartEvent::new("validate"))?;
    }

    let mut valid = 0;
    let mut failed = 0;
    for file in files {
        let source = source_name(file);
        let result = match read_document(file)? {
            Document::Json(text) => validator.validate_str(&text),
            Document::Yaml(text) => validator.validate_yaml_str(&text),
        };

        let passes = result.is_valid && !(strict_warnings && !result.warnings.is_empty());
        if passes {
            valid += 1;
        } else {
            failed += 1;
        }

        if ui.json {
            emit_event(&ResultEvent::new(&source, &result))?;
        } else {
            print!("{}", render_validation_report(&source, &result, ui));
        }
    }

    if ui.json {
        emit_event(&CompleteEvent::new("validate", failed == 0))?;
    } else if files.len() > 1 {
        print!("{}", render_validation_summary(valid, failed, ui));
    }

    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
