//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.boilercompass/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::state::DEFAULT_WELCOME_MESSAGE;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CompassConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub backend: BackendConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub welcome_message: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BackendConfig {
    pub endpoint: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/api/ask";

// ============================================================================
// Resolved Config (concrete values)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoint: String,
    /// `None` means requests may run indefinitely.
    pub request_timeout: Option<Duration>,
    pub welcome_message: String,
}

/// Values supplied on the command line (None = flag not given).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.boilercompass/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".boilercompass").join("config.toml"))
}

/// Load config from `~/.boilercompass/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CompassConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<CompassConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(CompassConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<CompassConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(CompassConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: CompassConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# BoilerCompass Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# welcome_message = "Hello! I'm BoilerCompass AI. Ask me about events, sports, and more at Purdue!"

# [backend]
# endpoint = "http://127.0.0.1:8000/api/ask"   # Or set BOILERCOMPASS_ENDPOINT
# request_timeout_secs = 60                     # Unset = wait indefinitely
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &CompassConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Endpoint: CLI → env → config → default
    let endpoint = cli
        .endpoint
        .clone()
        .or_else(|| std::env::var("BOILERCOMPASS_ENDPOINT").ok())
        .or_else(|| config.backend.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    // Timeout: CLI → env → config → none
    let timeout_secs = cli
        .timeout_secs
        .or_else(|| {
            std::env::var("BOILERCOMPASS_TIMEOUT_SECS")
                .ok()
                .and_then(|s| match s.trim().parse::<u64>() {
                    Ok(secs) => Some(secs),
                    Err(e) => {
                        warn!("Ignoring BOILERCOMPASS_TIMEOUT_SECS={:?}: {}", s, e);
                        None
                    }
                })
        })
        .or(config.backend.request_timeout_secs);

    let welcome_message = config
        .general
        .welcome_message
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_WELCOME_MESSAGE)
        .to_string();

    ResolvedConfig {
        endpoint,
        // A zero timeout would fail every request immediately
        request_timeout: timeout_secs.filter(|&s| s > 0).map(Duration::from_secs),
        welcome_message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_empty() {
        let config = CompassConfig::default();
        assert!(config.backend.endpoint.is_none());
        assert!(config.general.welcome_message.is_none());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = CompassConfig {
            general: GeneralConfig {
                welcome_message: Some("Boiler up!".to_string()),
            },
            backend: BackendConfig {
                endpoint: Some("http://campus.local/api/ask".to_string()),
                request_timeout_secs: Some(30),
            },
        };
        let cli = CliOverrides::default();
        let resolved = resolve(&config, &cli);
        // Env may override the endpoint on a developer machine
        if std::env::var("BOILERCOMPASS_ENDPOINT").is_err() {
            assert_eq!(resolved.endpoint, "http://campus.local/api/ask");
        }
        if std::env::var("BOILERCOMPASS_TIMEOUT_SECS").is_err() {
            assert_eq!(resolved.request_timeout, Some(Duration::from_secs(30)));
        }
        assert_eq!(resolved.welcome_message, "Boiler up!");
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = CompassConfig {
            backend: BackendConfig {
                endpoint: Some("http://from-file/api/ask".to_string()),
                request_timeout_secs: Some(30),
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            endpoint: Some("http://from-cli/api/ask".to_string()),
            timeout_secs: Some(5),
        };
        let resolved = resolve(&config, &cli);
        assert_eq!(resolved.endpoint, "http://from-cli/api/ask");
        assert_eq!(resolved.request_timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_zero_timeout_means_none() {
        let cli = CliOverrides {
            endpoint: None,
            timeout_secs: Some(0),
        };
        let resolved = resolve(&CompassConfig::default(), &cli);
        assert_eq!(resolved.request_timeout, None);
    }

    #[test]
    fn test_blank_welcome_falls_back_to_default() {
        let config = CompassConfig {
            general: GeneralConfig {
                welcome_message: Some("   ".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.welcome_message, DEFAULT_WELCOME_MESSAGE);
    }

    #[test]
    fn test_toml_parses() {
        let toml_str = r#"
[general]
welcome_message = "Hi there"

[backend]
endpoint = "http://10.0.0.5:8000/api/ask"
request_timeout_secs = 45
"#;
        let config: CompassConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.welcome_message.as_deref(), Some("Hi there"));
        assert_eq!(
            config.backend.endpoint.as_deref(),
            Some("http://10.0.0.5:8000/api/ask")
        );
        assert_eq!(config.backend.request_timeout_secs, Some(45));
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[backend]
endpoint = "http://localhost:9000/api/ask"
"#;
        let config: CompassConfig = toml::from_str(toml_str).unwrap();
        assert!(config.backend.request_timeout_secs.is_none());
        assert!(config.general.welcome_message.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("boilercompass-cfg-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[backend\nendpoint = ").unwrap();

        let result = load_config_from(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = std::env::temp_dir().join(format!("boilercompass-gen-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("config.toml");

        let config = load_config_from(&path).unwrap();
        assert!(config.backend.endpoint.is_none());
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# BoilerCompass Configuration"));
        // Everything is commented out, so the generated file parses to defaults
        let reparsed: CompassConfig = toml::from_str(&written).unwrap();
        assert!(reparsed.backend.endpoint.is_none());

        let _ = fs::remove_dir_all(&dir);
    }
}
