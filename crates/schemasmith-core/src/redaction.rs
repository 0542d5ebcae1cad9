use std::fmt;

use serde::{Deserialize, Serialize};

use crate::connection::ConnectionSettings;

/// Connection metadata with secrets redacted, safe for logs and summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactedConnection {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub ssl_mode: String,
    pub redacted: String,
}

impl From<&ConnectionSettings> for RedactedConnection {
    fn from(settings: &ConnectionSettings) -> Self {
        let auth = match settings.password {
            Some(_) => format!("{}:***", settings.user),
            None => settings.user.clone(),
        };
        let redacted = format!(
            "postgres://{auth}@{}:{}/{}?sslmode={}",
            settings.host, settings.port, settings.database, settings.ssl_mode
        );

        Self {
            host: settings.host.clone(),
            port: settings.port,
            database: settings.database.clone(),
            user: settings.user.clone(),
            ssl_mode: settings.ssl_mode.to_string(),
            redacted,
        }
    }
}

impl fmt::Display for RedactedConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted)
    }
}
