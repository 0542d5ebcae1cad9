use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::redaction::RedactedConnection;

/// Namespace introspected when none is configured.
pub const DEFAULT_NAMESPACE: &str = "public";

/// Default location of the generated schema source.
pub const DEFAULT_SCHEMA_PATH: &str = "drizzle/schema-postgresql.ts";

/// TLS negotiation mode, spelled the way libpq spells `sslmode`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SslMode {
    Disable,
    Allow,
    #[default]
    Prefer,
    Require,
    VerifyCa,
    VerifyFull,
}

impl SslMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SslMode::Disable => "disable",
            SslMode::Allow => "allow",
            SslMode::Prefer => "prefer",
            SslMode::Require => "require",
            SslMode::VerifyCa => "verify-ca",
            SslMode::VerifyFull => "verify-full",
        }
    }
}

impl fmt::Display for SslMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SslMode {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "disable" => Ok(SslMode::Disable),
            "allow" => Ok(SslMode::Allow),
            "prefer" => Ok(SslMode::Prefer),
            "require" => Ok(SslMode::Require),
            "verify-ca" | "verify_ca" => Ok(SslMode::VerifyCa),
            "verify-full" | "verify_full" => Ok(SslMode::VerifyFull),
            other => Err(Error::InvalidConfig(format!("unknown ssl mode: {other}"))),
        }
    }
}

fn default_port() -> u16 {
    5432
}

/// Parameters needed to open a catalog connection.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionSettings {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub database: String,
    pub user: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub ssl_mode: SslMode,
}

impl ConnectionSettings {
    /// Reject settings that cannot possibly connect.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("host", &self.host),
            ("database", &self.database),
            ("user", &self.user),
        ] {
            if value.trim().is_empty() {
                return Err(Error::InvalidConfig(format!("{field} is required")));
            }
        }
        Ok(())
    }

    pub fn redacted(&self) -> RedactedConnection {
        RedactedConnection::from(self)
    }
}

impl fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("ssl_mode", &self.ssl_mode)
            .finish()
    }
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_schema_path() -> PathBuf {
    PathBuf::from(DEFAULT_SCHEMA_PATH)
}

/// Everything a synthesis run needs, passed explicitly by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthConfig {
    pub connection: ConnectionSettings,
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default = "default_schema_path")]
    pub schema_path: PathBuf,
}

impl SynthConfig {
    pub fn new(connection: ConnectionSettings) -> Self {
        Self {
            connection,
            namespace: default_namespace(),
            schema_path: default_schema_path(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.connection.validate()?;
        if self.namespace.trim().is_empty() {
            return Err(Error::InvalidConfig("namespace is required".to_string()));
        }
        if self.schema_path.as_os_str().is_empty() {
            return Err(Error::InvalidConfig("schema_path is required".to_string()));
        }
        Ok(())
    }
}
