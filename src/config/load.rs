use crate::config::{AuditConfig, ConfigError};
use std::path::Path;
use tracing::debug;

fn get_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

/// Loads a configuration from a YAML file.
///
/// # Errors
/// Returns an error if reading or parsing fails.
pub fn load_config_yaml(path: &Path) -> Result<AuditConfig, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    // An empty document means "all defaults".
    if contents.trim().is_empty() {
        return Ok(AuditConfig::default());
    }
    Ok(serde_yaml::from_str(&contents)?)
}

/// Loads a configuration from a JSON file.
///
/// # Errors
/// Returns an error if reading or parsing fails.
pub fn load_config_json(path: &Path) -> Result<AuditConfig, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Loads a configuration, picking the parser from the file extension.
///
/// # Errors
/// Returns an error if the extension is not `yaml`, `yml` or `json`, or if
/// loading fails.
pub fn load_config_from_path(path: &Path) -> Result<AuditConfig, ConfigError> {
    let config = match get_extension(path).as_deref() {
        Some("yaml" | "yml") => load_config_yaml(path)?,
        Some("json") => load_config_json(path)?,
        _ => {
            return Err(ConfigError::UnsupportedFileFormat {
                path: path.display().to_string(),
            });
        }
    };
    debug!("Loaded configuration from {}: {:?}", path.display(), config);
    Ok(config)
}
