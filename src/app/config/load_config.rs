use std::path::Path;

use tracing::debug;

use crate::domain::{AppError, GeneratorConfig, layout};
use crate::ports::PropertyStore;

/// Load `mkcol.toml` from the property object location, falling back to defaults.
pub fn load_config(store: &impl PropertyStore, root: &Path) -> Result<GeneratorConfig, AppError> {
    let path = layout::config(root);
    if !store.path_exists(&path) {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(GeneratorConfig::default());
    }

    let content = store.read_to_string(&path)?;
    let config = GeneratorConfig::parse_toml(&content).map_err(|err| match err {
        AppError::TomlParseError(e) => {
            AppError::config_error(format!("Invalid {}: {}", path.display(), e))
        }
        other => other,
    })?;
    debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}
