use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use super::cli::CliConfig;
use super::constants::{
    CONFIG_FILE_NAME, DEFAULT_BUSY_TIMEOUT_SECS, DEFAULT_DB_PATH, DEFAULT_HOST,
    DEFAULT_MAX_CONNECTIONS, DEFAULT_PORT,
};

// =============================================================================
// File Config Structs (JSON deserialization)
// =============================================================================

/// Server configuration section
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ServerFileConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Allowed CORS origins; absent or empty allows any origin
    pub cors_origins: Option<Vec<String>>,
}

/// Database configuration section
#[derive(Debug, Default, Clone, Deserialize)]
pub struct DatabaseFileConfig {
    pub path: Option<PathBuf>,
    pub create_if_missing: Option<bool>,
    pub max_connections: Option<u32>,
    pub busy_timeout_secs: Option<u64>,
}

/// File-based configuration (JSON)
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub server: Option<ServerFileConfig>,
    pub database: Option<DatabaseFileConfig>,
    #[serde(flatten)]
    pub extra: serde_json::Value,
}

impl FileConfig {
    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "Loading config file");
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        tracing::trace!(config = ?config, "Parsed config file");
        Ok(config)
    }

    /// Warn about unknown fields in the config
    fn warn_unknown_fields(&self) {
        if let serde_json::Value::Object(map) = &self.extra
            && !map.is_empty()
        {
            let keys_str: String = map
                .keys()
                .map(|k| k.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            tracing::warn!(
                fields = %keys_str,
                "Unknown fields in config file (possible typos)"
            );
        }
    }
}

// =============================================================================
// Runtime Config Structs (final merged configuration)
// =============================================================================

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

/// SQLite database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub path: PathBuf,
    pub create_if_missing: bool,
    pub max_connections: u32,
    pub busy_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DB_PATH),
            create_if_missing: false,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            busy_timeout_secs: DEFAULT_BUSY_TIMEOUT_SECS,
        }
    }
}

/// Final merged application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from all sources
    ///
    /// Priority (lowest to highest):
    /// 1. Defaults
    /// 2. CLI-specified config path OR `crimedesk.json` in the working directory
    /// 3. CLI arguments (which include env var fallbacks via clap)
    pub fn load(cli: &CliConfig) -> Result<Self> {
        tracing::debug!("Loading application configuration");
        tracing::trace!(cli = ?cli, "CLI config");

        let path = if let Some(ref path) = cli.config {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            Some(path.clone())
        } else {
            let local = PathBuf::from(CONFIG_FILE_NAME);
            if local.exists() { Some(local) } else { None }
        };

        let file_config = match path {
            Some(path) => {
                let config = FileConfig::load_from_file(&path)?;
                config.warn_unknown_fields();
                tracing::debug!(path = %path.display(), "Config file loaded");
                config
            }
            None => FileConfig::default(),
        };

        Self::from_sources(cli, file_config)
    }

    /// Layer defaults, file config and CLI/env overrides, then validate
    fn from_sources(cli: &CliConfig, file_config: FileConfig) -> Result<Self> {
        let file_server = file_config.server.unwrap_or_default();
        let file_database = file_config.database.unwrap_or_default();
        let defaults = DatabaseConfig::default();

        let server = ServerConfig {
            host: cli
                .host
                .clone()
                .or(file_server.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: cli.port.or(file_server.port).unwrap_or(DEFAULT_PORT),
            cors_origins: file_server.cors_origins.unwrap_or_default(),
        };

        // --create-db can only switch creation on
        let database = DatabaseConfig {
            path: cli.db.clone().or(file_database.path).unwrap_or(defaults.path),
            create_if_missing: cli.create_db
                || file_database
                    .create_if_missing
                    .unwrap_or(defaults.create_if_missing),
            max_connections: file_database
                .max_connections
                .unwrap_or(defaults.max_connections),
            busy_timeout_secs: file_database
                .busy_timeout_secs
                .unwrap_or(defaults.busy_timeout_secs),
        };

        let config = Self { server, database };
        config.validate()?;
        tracing::debug!(config = ?config, "Configuration loaded");
        Ok(config)
    }

    /// Validate the configuration for consistency and correctness
    fn validate(&self) -> Result<()> {
        if self.server.host.is_empty() {
            anyhow::bail!("Configuration error: server.host must not be empty");
        }

        // Port 0 would bind an ephemeral port nobody knows about
        if self.server.port == 0 {
            anyhow::bail!("Configuration error: server.port must be greater than 0");
        }

        if self.database.path.as_os_str().is_empty() {
            anyhow::bail!("Configuration error: database.path must not be empty");
        }

        if self.database.max_connections == 0 {
            anyhow::bail!("Configuration error: database.max_connections must be at least 1");
        }

        Ok(())
    }
}

/// Check if host binds to all network interfaces
pub fn is_all_interfaces(host: &str) -> bool {
    matches!(host, "0.0.0.0" | "::" | "[::]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(json: &str) -> FileConfig {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_file_config_parse_full() {
        let config = parse(
            r#"{
                "server": { "host": "0.0.0.0", "port": 8080, "cors_origins": ["http://localhost:3000"] },
                "database": { "path": "/data/crime.db", "create_if_missing": true, "max_connections": 2 }
            }"#,
        );

        let server = config.server.as_ref().unwrap();
        assert_eq!(server.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(server.port, Some(8080));
        assert_eq!(server.cors_origins.as_ref().unwrap().len(), 1);

        let database = config.database.as_ref().unwrap();
        assert_eq!(database.path, Some(PathBuf::from("/data/crime.db")));
        assert_eq!(database.create_if_missing, Some(true));
        assert_eq!(database.max_connections, Some(2));
        assert!(database.busy_timeout_secs.is_none());
    }

    #[test]
    fn test_file_config_parse_empty() {
        let config = parse("{}");
        assert!(config.server.is_none());
        assert!(config.database.is_none());
    }

    #[test]
    fn test_file_config_unknown_fields_collected() {
        let config = parse(r#"{ "sever": { "port": 1 } }"#);
        assert!(config.server.is_none());
        assert!(config.extra.get("sever").is_some());
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_sources(&CliConfig::default(), FileConfig::default()).unwrap();

        assert_eq!(config.server.host, DEFAULT_HOST);
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert!(config.server.cors_origins.is_empty());
        assert_eq!(config.database.path, PathBuf::from(DEFAULT_DB_PATH));
        assert!(!config.database.create_if_missing);
        assert_eq!(config.database.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = parse(
            r#"{ "server": { "host": "0.0.0.0", "port": 8080 }, "database": { "path": "file.db" } }"#,
        );
        let cli = CliConfig {
            port: Some(9090),
            db: Some(PathBuf::from("cli.db")),
            ..Default::default()
        };

        let config = AppConfig::from_sources(&cli, file).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.database.path, PathBuf::from("cli.db"));
    }

    #[test]
    fn test_create_db_flag_enables_creation() {
        let file = parse(r#"{ "database": { "create_if_missing": false } }"#);
        let cli = CliConfig {
            create_db: true,
            ..Default::default()
        };

        let config = AppConfig::from_sources(&cli, file).unwrap();
        assert!(config.database.create_if_missing);
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let file = parse(r#"{ "server": { "port": 0 } }"#);
        let err = AppConfig::from_sources(&CliConfig::default(), file).unwrap_err();
        assert!(err.to_string().contains("server.port"));
    }

    #[test]
    fn test_validate_rejects_zero_connections() {
        let file = parse(r#"{ "database": { "max_connections": 0 } }"#);
        let err = AppConfig::from_sources(&CliConfig::default(), file).unwrap_err();
        assert!(err.to_string().contains("max_connections"));
    }

    #[test]
    fn test_load_from_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "server": {{ "port": 8123 }} }}"#).unwrap();

        let cli = CliConfig {
            config: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let config = AppConfig::load(&cli).unwrap();
        assert_eq!(config.server.port, 8123);
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let cli = CliConfig {
            config: Some(PathBuf::from("/nonexistent/crimedesk.json")),
            ..Default::default()
        };
        let err = AppConfig::load(&cli).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let cli = CliConfig {
            config: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let err = AppConfig::load(&cli).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_is_all_interfaces() {
        assert!(is_all_interfaces("0.0.0.0"));
        assert!(is_all_interfaces("::"));
        assert!(!is_all_interfaces("127.0.0.1"));
    }
}
