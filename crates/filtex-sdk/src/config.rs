//! Loading `FilterConfig` from YAML or JSON

use crate::error::{Result, SdkError};
use filtex_core::FilterConfig;
use std::path::Path;

/// Parse a configuration from YAML text
///
/// ```yaml
/// validation: lenient
/// ```
pub fn from_yaml_str(content: &str) -> Result<FilterConfig> {
    if content.trim().is_empty() {
        return Ok(FilterConfig::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

/// Parse a configuration from JSON text
pub fn from_json_str(content: &str) -> Result<FilterConfig> {
    Ok(serde_json::from_str(content)?)
}

/// Load a configuration file, picking the format from its extension
/// (`.yaml`, `.yml` or `.json`)
pub fn from_file(path: impl AsRef<Path>) -> Result<FilterConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;

    let config = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => from_yaml_str(&content)?,
        Some("json") => from_json_str(&content)?,
        other => {
            return Err(SdkError::ConfigError(format!(
                "unsupported config format {:?} for {}",
                other.unwrap_or(""),
                path.display()
            )));
        }
    };

    log::debug!("loaded filter config from {}: {:?}", path.display(), config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use filtex_core::ValidationMode;

    #[test]
    fn test_yaml_config() {
        let config = from_yaml_str("validation: lenient\n").unwrap();
        assert_eq!(config.validation, ValidationMode::Lenient);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(from_yaml_str("").unwrap(), FilterConfig::default());
    }

    #[test]
    fn test_json_config() {
        let config = from_json_str(r#"{"validation": "strict"}"#).unwrap();
        assert_eq!(config.validation, ValidationMode::Strict);
    }

    #[test]
    fn test_invalid_mode() {
        assert!(matches!(
            from_yaml_str("validation: loose"),
            Err(SdkError::YamlError(_))
        ));
        assert!(matches!(
            from_json_str(r#"{"validation": 1}"#),
            Err(SdkError::JsonError(_))
        ));
    }
}
