//! Configuration handling for the TUI

use crate::state::{
    BuiltinSchemas, JsonSchemaFile, SchemaError, SchemaRegistry, SchemaSource,
};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// JSON file replacing the built-in form schemas
    pub schema_file: Option<PathBuf>,
    /// Render password values as bullets (default: true)
    pub mask_passwords: Option<bool>,
    /// Ask before deleting a submission (default: true)
    pub confirm_delete: Option<bool>,
    /// Form type selected at startup
    pub default_form_type: Option<String>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "dynform", "dynform-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn mask_passwords(&self) -> bool {
        self.mask_passwords.unwrap_or(true)
    }

    pub fn confirm_delete(&self) -> bool {
        self.confirm_delete.unwrap_or(true)
    }

    /// Schema source named by the config, falling back to the built-in schemas
    pub fn schema_source(&self) -> Box<dyn SchemaSource> {
        match &self.schema_file {
            Some(path) => Box::new(JsonSchemaFile::new(path)),
            None => Box::new(BuiltinSchemas),
        }
    }

    pub fn build_registry(&self) -> Result<SchemaRegistry, SchemaError> {
        SchemaRegistry::from_source(self.schema_source().as_ref())
    }
}
