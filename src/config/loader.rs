//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Directory holding the error pages.
pub const ERROR_FILES_PATH_VAR: &str = "ERROR_FILES_PATH";

/// Any non-empty value turns on debug header echo.
pub const DEBUG_VAR: &str = "DEBUG";

/// Listener bind address.
pub const BIND_ADDRESS_VAR: &str = "BIND_ADDRESS";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration: defaults, then the TOML file if given, then the
/// process environment. The result is validated before it is returned.
pub fn load_config(path: Option<&Path>) -> Result<ServiceConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => ServiceConfig::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply environment overrides using `lookup` to read variables.
///
/// Empty values are treated as unset.
pub fn apply_env_overrides<F>(config: &mut ServiceConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

    if let Some(root) = get(ERROR_FILES_PATH_VAR) {
        config.pages.root = root;
    }

    if get(DEBUG_VAR).is_some() {
        config.pages.debug_headers = true;
    }

    if let Some(addr) = get(BIND_ADDRESS_VAR) {
        config.listener.bind_address = addr;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_env_overrides_root_and_debug() {
        let mut config = ServiceConfig::default();
        apply_env_overrides(
            &mut config,
            env(&[(ERROR_FILES_PATH_VAR, "/srv/errors"), (DEBUG_VAR, "1")]),
        );
        assert_eq!(config.pages.root, "/srv/errors");
        assert!(config.pages.debug_headers);
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let mut config = ServiceConfig::default();
        apply_env_overrides(
            &mut config,
            env(&[(ERROR_FILES_PATH_VAR, ""), (DEBUG_VAR, "")]),
        );
        assert_eq!(config.pages.root, "/www");
        assert!(!config.pages.debug_headers);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ServiceConfig = toml::from_str(
            r#"
[pages]
root = "/data/pages"
"#,
        )
        .unwrap();
        assert_eq!(config.pages.root, "/data/pages");
        assert!(!config.pages.debug_headers);
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert!(config.observability.metrics_enabled);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[listener]\nbind_address = \"nowhere\"").unwrap();

        match load_config(Some(file.path())) {
            Err(ConfigError::Validation(errors)) => {
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ValidationError::InvalidBindAddress(_))));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
