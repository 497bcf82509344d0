//! Generator configuration loaded from `mkcol.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Optional per-location configuration. Every field has a default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Collection template settings.
    #[serde(default)]
    pub template: TemplateConfig,
    /// Output serialization settings.
    #[serde(default)]
    pub output: OutputConfig,
}

impl GeneratorConfig {
    pub fn parse_toml(content: &str) -> Result<Self, AppError> {
        let config: GeneratorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(path) = &self.template.path
            && path.as_os_str().is_empty()
        {
            return Err(AppError::config_error("template.path must not be empty"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateConfig {
    /// Template file overriding the bundled one. Relative paths resolve against
    /// the property object location.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Pretty-print generated collections.
    #[serde(default)]
    pub pretty: bool,
}
