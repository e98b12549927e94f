//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.book-discovery/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{Level, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{CatalogKind, DEFAULT_RECOMMENDATION_LIMIT};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub catalog: Option<CatalogKind>,
    pub live_search: Option<bool>,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    pub recommendation_limit: Option<usize>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "book-discovery.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

const CATALOG_ENV: &str = "BOOK_DISCOVERY_CATALOG";
const LOG_LEVEL_ENV: &str = "BOOK_DISCOVERY_LOG_LEVEL";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub catalog: CatalogKind,
    pub live_search: bool,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    pub recommendation_limit: usize,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    /// A value that parsed as TOML but makes no sense (e.g. `log_level = "loud"`).
    InvalidValue { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::InvalidValue { key, value } => {
                write!(f, "invalid config value for {key}: {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// A log line produced while loading config.
///
/// Loading happens before the file logger exists (the log file path comes
/// from the config), so lines are collected here and replayed once it does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigNotice {
    pub level: Level,
    pub message: String,
}

/// The parsed config plus whatever loading had to say about it.
#[derive(Debug, Default)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub notices: Vec<ConfigNotice>,
}

impl LoadedConfig {
    fn note(&mut self, level: Level, message: String) {
        self.notices.push(ConfigNotice { level, message });
    }

    /// Emit the collected notices through the installed logger.
    pub fn replay_notices(&self) {
        for notice in &self.notices {
            log::log!(notice.level, "{}", notice.message);
        }
    }
}

/// Returns the path to `~/.book-discovery/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".book-discovery").join("config.toml"))
}

/// Load config from an explicit path, or from `~/.book-discovery/config.toml`.
///
/// An explicit path must exist. The default path is generated with
/// commented-out defaults when missing, and `AppConfig::default()` is returned.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    match explicit {
        Some(path) => read_config(path),
        None => load_default(config_path()),
    }
}

fn load_default(path: Option<PathBuf>) -> Result<LoadedConfig, ConfigError> {
    let mut loaded = LoadedConfig::default();
    let Some(path) = path else {
        loaded.note(
            Level::Warn,
            "Could not determine home directory, using default config".to_string(),
        );
        return Ok(loaded);
    };

    if !path.exists() {
        loaded.note(
            Level::Info,
            format!("No config file found, generating default at {}", path.display()),
        );
        if let Err(message) = generate_default_config(&path) {
            loaded.note(Level::Warn, message);
        }
        return Ok(loaded);
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: AppConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    let mut loaded = LoadedConfig::default();
    loaded.note(Level::Info, format!("Loaded config from {}", path.display()));
    loaded.note(Level::Debug, format!("Config: {:?}", config));
    loaded.config = config;
    Ok(loaded)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> Result<(), String> {
    let default_content = r#"# Book Discovery Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# catalog = "placeholder"            # "placeholder" or "sample" (or BOOK_DISCOVERY_CATALOG)
# live_search = true                 # search on every keystroke
# log_level = "debug"                # off, error, warn, info, debug, trace
# log_file = "book-discovery.log"

# [catalog]
# recommendation_limit = 5           # sample catalog only
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create config directory: {e}"))?;
    }
    fs::write(path, default_content).map_err(|e| format!("Failed to write default config: {e}"))
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(
    config: &AppConfig,
    cli_catalog: Option<CatalogKind>,
) -> Result<ResolvedConfig, ConfigError> {
    resolve_with_env(config, cli_catalog, |key| std::env::var(key).ok())
}

/// [`resolve`] with the environment supplied by `env`.
fn resolve_with_env(
    config: &AppConfig,
    cli_catalog: Option<CatalogKind>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig, ConfigError> {
    // Catalog: CLI → env → config → default
    let catalog = match cli_catalog {
        Some(kind) => kind,
        None => match env(CATALOG_ENV) {
            Some(value) => CatalogKind::parse(&value).ok_or(ConfigError::InvalidValue {
                key: CATALOG_ENV,
                value,
            })?,
            None => config.general.catalog.unwrap_or_default(),
        },
    };

    // Log level: env → config → default
    let log_level = match env(LOG_LEVEL_ENV).map(|v| (LOG_LEVEL_ENV, v)).or_else(|| {
        config
            .general
            .log_level
            .clone()
            .map(|v| ("general.log_level", v))
    }) {
        Some((key, value)) => value
            .trim()
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::InvalidValue { key, value })?,
        None => DEFAULT_LOG_LEVEL,
    };

    let recommendation_limit = config
        .catalog
        .recommendation_limit
        .unwrap_or(DEFAULT_RECOMMENDATION_LIMIT);
    if recommendation_limit == 0 {
        return Err(ConfigError::InvalidValue {
            key: "catalog.recommendation_limit",
            value: "0".to_string(),
        });
    }

    Ok(ResolvedConfig {
        catalog,
        live_search: config.general.live_search.unwrap_or(true),
        log_level,
        log_file: PathBuf::from(
            config
                .general
                .log_file
                .as_deref()
                .unwrap_or(DEFAULT_LOG_FILE),
        ),
        recommendation_limit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_empty() {
        let config = AppConfig::default();
        assert!(config.general.catalog.is_none());
        assert!(config.catalog.recommendation_limit.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = AppConfig::default();
        let resolved = resolve(&config, Some(CatalogKind::Placeholder)).unwrap();
        assert!(resolved.live_search);
        assert_eq!(resolved.recommendation_limit, DEFAULT_RECOMMENDATION_LIMIT);
        assert_eq!(resolved.log_file, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_resolve_cli_catalog_wins() {
        let config = AppConfig {
            general: GeneralConfig {
                catalog: Some(CatalogKind::Placeholder),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some(CatalogKind::Sample)).unwrap();
        assert_eq!(resolved.catalog, CatalogKind::Sample);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = AppConfig {
            general: GeneralConfig {
                catalog: Some(CatalogKind::Sample),
                live_search: Some(false),
                log_level: None,
                log_file: Some("/tmp/books.log".to_string()),
            },
            catalog: CatalogConfig {
                recommendation_limit: Some(2),
            },
        };
        let resolved = resolve(&config, Some(CatalogKind::Sample)).unwrap();
        assert!(!resolved.live_search);
        assert_eq!(resolved.recommendation_limit, 2);
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/books.log"));
    }

    #[test]
    fn test_zero_recommendation_limit_rejected() {
        let config = AppConfig {
            catalog: CatalogConfig {
                recommendation_limit: Some(0),
            },
            ..Default::default()
        };
        let err = resolve(&config, Some(CatalogKind::Sample)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: "catalog.recommendation_limit",
                ..
            }
        ));
    }

    #[test]
    fn test_toml_parses() {
        let toml_str = r#"
[general]
catalog = "sample"
live_search = false
log_level = "info"

[catalog]
recommendation_limit = 3
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.catalog, Some(CatalogKind::Sample));
        assert_eq!(config.general.live_search, Some(false));
        assert_eq!(config.general.log_level.as_deref(), Some("info"));
        assert_eq!(config.catalog.recommendation_limit, Some(3));
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[catalog]
recommendation_limit = 4
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert!(config.general.catalog.is_none());
        assert_eq!(config.catalog.recommendation_limit, Some(4));
    }

    #[test]
    fn test_unknown_catalog_in_toml_is_parse_error() {
        let toml_str = r#"
[general]
catalog = "postgres"
"#;
        assert!(toml::from_str::<AppConfig>(toml_str).is_err());
    }

    #[test]
    fn test_load_explicit_missing_file_is_io_error() {
        let err = load_config(Some(Path::new("/nonexistent/book-discovery.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    // ------------------------------------------------------------------------
    // Env layer
    // ------------------------------------------------------------------------

    fn env_of(pairs: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        let pairs = pairs.to_vec();
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    fn file_with_catalog(kind: CatalogKind) -> AppConfig {
        AppConfig {
            general: GeneralConfig {
                catalog: Some(kind),
                log_level: Some("error".to_string()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_env_catalog_overrides_file() {
        let config = file_with_catalog(CatalogKind::Placeholder);
        let env = env_of(&[(CATALOG_ENV, "Sample")]);
        let resolved = resolve_with_env(&config, None, env).unwrap();
        assert_eq!(resolved.catalog, CatalogKind::Sample);
    }

    #[test]
    fn test_cli_catalog_overrides_env() {
        let config = file_with_catalog(CatalogKind::Sample);
        let env = env_of(&[(CATALOG_ENV, "sample")]);
        let resolved = resolve_with_env(&config, Some(CatalogKind::Placeholder), env).unwrap();
        assert_eq!(resolved.catalog, CatalogKind::Placeholder);
    }

    #[test]
    fn test_file_catalog_used_without_env_or_cli() {
        let config = file_with_catalog(CatalogKind::Sample);
        let resolved = resolve_with_env(&config, None, env_of(&[])).unwrap();
        assert_eq!(resolved.catalog, CatalogKind::Sample);
        assert_eq!(resolved.log_level, LevelFilter::Error);
    }

    #[test]
    fn test_invalid_env_catalog_rejected() {
        let config = AppConfig::default();
        let env = env_of(&[(CATALOG_ENV, "postgres")]);
        let err = resolve_with_env(&config, None, env).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { key: CATALOG_ENV, ref value } if value == "postgres"
        ));
    }

    #[test]
    fn test_invalid_env_catalog_ignored_when_cli_set() {
        let config = AppConfig::default();
        let env = env_of(&[(CATALOG_ENV, "postgres")]);
        let resolved = resolve_with_env(&config, Some(CatalogKind::Sample), env).unwrap();
        assert_eq!(resolved.catalog, CatalogKind::Sample);
    }

    #[test]
    fn test_env_log_level_overrides_file() {
        let config = file_with_catalog(CatalogKind::Placeholder);
        let env = env_of(&[(LOG_LEVEL_ENV, "warn")]);
        let resolved = resolve_with_env(&config, None, env).unwrap();
        assert_eq!(resolved.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_invalid_env_log_level_rejected() {
        let config = AppConfig::default();
        let env = env_of(&[(CATALOG_ENV, "Sample"), (LOG_LEVEL_ENV, "loud")]);
        let err = resolve_with_env(&config, None, env).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid config value for BOOK_DISCOVERY_LOG_LEVEL: \"loud\""
        );
    }

    #[test]
    fn test_invalid_file_log_level_rejected() {
        let config = AppConfig {
            general: GeneralConfig {
                log_level: Some("loud".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let err = resolve_with_env(&config, None, env_of(&[])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: "general.log_level",
                ..
            }
        ));
    }

    #[test]
    fn test_log_level_defaults_to_debug() {
        let resolved = resolve_with_env(&AppConfig::default(), None, env_of(&[])).unwrap();
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(resolved.catalog, CatalogKind::Placeholder);
    }

    // ------------------------------------------------------------------------
    // Notices collected before the logger exists
    // ------------------------------------------------------------------------

    #[test]
    fn test_missing_home_dir_is_warn_notice() {
        let loaded = load_default(None).unwrap();
        assert!(loaded.config.general.catalog.is_none());
        assert_eq!(loaded.notices.len(), 1);
        assert_eq!(loaded.notices[0].level, Level::Warn);
        assert!(loaded.notices[0].message.contains("home directory"));
    }

    #[test]
    fn test_missing_default_file_is_generated_with_notice() {
        let dir = std::env::temp_dir().join(format!(
            "book-discovery-config-test-{}",
            std::process::id()
        ));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let loaded = load_default(Some(path.clone())).unwrap();
        assert_eq!(loaded.notices[0].level, Level::Info);
        assert!(loaded.notices[0].message.contains("generating default"));
        assert!(path.exists());

        // The generated file is all comments, so reading it back is a no-op config
        let reread = load_default(Some(path)).unwrap();
        assert!(reread.config.general.catalog.is_none());
        assert!(reread.notices[0].message.starts_with("Loaded config from"));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_unwritable_default_path_is_warn_notice() {
        let loaded = load_default(Some(PathBuf::from("/proc/book-discovery/config.toml"))).unwrap();
        assert!(loaded
            .notices
            .iter()
            .any(|n| n.level == Level::Warn && n.message.starts_with("Failed to")));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidValue {
            key: "general.log_level",
            value: "loud".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config value for general.log_level: \"loud\""
        );
    }
}
