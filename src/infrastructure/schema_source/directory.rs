//! Directory schema source
//!
//! Reads a local mirror of the schema host:
//!
//! ```text
//! <root>/templates/module/<module>.json
//! <root>/entity/<entity>.json
//! ```
//!
//! References resolve against the root by path. For `http(s)` URLs the host is
//! dropped, and a leading `schemas/` segment is accepted because documents
//! write references as `/schemas/templates/module/auth.json`.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::domain::ports::{EntitySchema, ModuleSchema, SchemaSource, SchemaSourceError};

const MODULE_DIR: &str = "templates/module";
const ENTITY_DIR: &str = "entity";
const SCHEMAS_PREFIX: &str = "schemas";

#[derive(Debug, Clone)]
pub struct DirectorySchemaSource {
    root: PathBuf,
}

impl DirectorySchemaSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn module_path(&self, module_type: &str) -> Option<PathBuf> {
        self.under_root(Path::new(MODULE_DIR), &format!("{module_type}.json"))
    }

    fn entity_path(&self, entity_type: &str) -> Option<PathBuf> {
        self.under_root(Path::new(ENTITY_DIR), &format!("{entity_type}.json"))
    }

    /// Maps a `$ref` path or URL onto the root.
    fn reference_path(&self, reference: &str) -> Option<PathBuf> {
        let path = if reference.starts_with("http://") || reference.starts_with("https://") {
            Url::parse(reference).ok()?.path().to_string()
        } else {
            reference.to_string()
        };

        let relative = path.trim_start_matches('/');
        let relative = relative
            .strip_prefix(SCHEMAS_PREFIX)
            .and_then(|rest| rest.strip_prefix('/'))
            .unwrap_or(relative);
        self.under_root(Path::new(""), relative)
    }

    /// Joins `dir/name` under the root; `None` if it would escape the root.
    fn under_root(&self, dir: &Path, name: &str) -> Option<PathBuf> {
        let relative = dir.join(name);
        let stays_inside = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        (stays_inside && !name.is_empty()).then(|| self.root.join(relative))
    }

    fn read_document(&self, reference: &str, path: Option<PathBuf>) -> Result<Value, SchemaSourceError> {
        let path = path.ok_or_else(|| SchemaSourceError::NotFound {
            reference: reference.to_string(),
        })?;
        debug!(path = %path.display(), "reading schema document");

        let content = fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SchemaSourceError::NotFound {
                reference: reference.to_string(),
            },
            _ => SchemaSourceError::Network {
                reference: reference.to_string(),
                message: format!("{}: {e}", path.display()),
            },
        })?;

        serde_json::from_str(&content).map_err(|e| SchemaSourceError::MalformedDocument {
            reference: reference.to_string(),
            message: e.to_string(),
        })
    }
}

impl SchemaSource for DirectorySchemaSource {
    fn fetch_module_schema(&self, module_type: &str) -> Result<ModuleSchema, SchemaSourceError> {
        let document = self.read_document(module_type, self.module_path(module_type))?;
        ModuleSchema::from_document(module_type, document)
    }

    fn fetch_entity_schema(&self, entity_type: &str) -> Result<EntitySchema, SchemaSourceError> {
        let document = self.read_document(entity_type, self.entity_path(entity_type))?;
        EntitySchema::from_document(entity_type, document)
    }

    fn fetch_by_reference(&self, reference: &str) -> Result<Value, SchemaSourceError> {
        self.read_document(reference, self.reference_path(reference))
    }
}
