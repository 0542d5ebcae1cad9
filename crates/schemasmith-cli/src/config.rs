use std::path::{Path, PathBuf};

use clap::Args;
use serde::Deserialize;

use schemasmith_core::{
    ConnectionSettings, DEFAULT_NAMESPACE, DEFAULT_SCHEMA_PATH, Error as CoreError, SslMode,
    SynthConfig,
};

use crate::CliError;

/// Connection flags shared by the commands that talk to the catalog.
///
/// Flags override values from `--config`.
#[derive(Args, Debug, Default)]
pub struct ConnectionArgs {
    /// TOML config file with `[connection]`, `namespace` and `schema_path`.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub host: Option<String>,
    #[arg(long)]
    pub port: Option<u16>,
    #[arg(long)]
    pub database: Option<String>,
    #[arg(long)]
    pub user: Option<String>,
    /// Password; prefer the environment variable over the flag.
    #[arg(long, env = "SCHEMASMITH_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
    /// disable, allow, prefer, require, verify-ca or verify-full.
    #[arg(long, value_name = "MODE")]
    pub ssl_mode: Option<SslMode>,
    /// Postgres schema to read.
    #[arg(long)]
    pub namespace: Option<String>,
}

/// On-disk config; every field is optional so flags can fill the gaps.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub namespace: Option<String>,
    pub schema_path: Option<PathBuf>,
    #[serde(default)]
    pub connection: ConnectionFile,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConnectionFile {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub ssl_mode: Option<SslMode>,
}

pub fn load_config_file(path: &Path) -> Result<ConfigFile, CliError> {
    let content = std::fs::read_to_string(path)?;
    let config: ConfigFile = toml::from_str(&content)?;
    Ok(config)
}

fn required(field: &str, value: Option<String>) -> Result<String, CliError> {
    value
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| CliError::Core(CoreError::InvalidConfig(format!("{field} is required"))))
}

impl ConnectionArgs {
    fn file(&self) -> Result<ConfigFile, CliError> {
        match &self.config {
            Some(path) => load_config_file(path),
            None => Ok(ConfigFile::default()),
        }
    }

    /// Merge flags over the config file into a validated [`SynthConfig`].
    pub fn resolve(self) -> Result<SynthConfig, CliError> {
        let file = self.file()?;
        let conn = file.connection;

        let connection = ConnectionSettings {
            host: required("host", self.host.or(conn.host))?,
            port: self.port.or(conn.port).unwrap_or(5432),
            database: required("database", self.database.or(conn.database))?,
            user: required("user", self.user.or(conn.user))?,
            password: self.password.or(conn.password),
            ssl_mode: self.ssl_mode.or(conn.ssl_mode).unwrap_or_default(),
        };

        let config = SynthConfig {
            connection,
            namespace: self
                .namespace
                .or(file.namespace)
                .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string()),
            schema_path: file
                .schema_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SCHEMA_PATH)),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Schema path for commands that only touch the file: flag, then config, then default.
pub fn resolve_schema_path(
    explicit: Option<PathBuf>,
    config: Option<&Path>,
) -> Result<PathBuf, CliError> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    let from_file = match config {
        Some(path) => load_config_file(path)?.schema_path,
        None => None,
    };
    Ok(from_file.unwrap_or_else(|| PathBuf::from(DEFAULT_SCHEMA_PATH)))
}
