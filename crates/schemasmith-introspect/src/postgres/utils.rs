use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgSslMode};

use schemasmith_core::{ConnectionSettings, Error, SslMode};

pub const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Convert the configured SSL mode to the driver's enum.
pub fn pg_ssl_mode(mode: SslMode) -> PgSslMode {
    match mode {
        SslMode::Disable => PgSslMode::Disable,
        SslMode::Allow => PgSslMode::Allow,
        SslMode::Prefer => PgSslMode::Prefer,
        SslMode::Require => PgSslMode::Require,
        SslMode::VerifyCa => PgSslMode::VerifyCa,
        SslMode::VerifyFull => PgSslMode::VerifyFull,
    }
}

pub fn connect_options(settings: &ConnectionSettings) -> PgConnectOptions {
    let options = PgConnectOptions::new()
        .host(&settings.host)
        .port(settings.port)
        .database(&settings.database)
        .username(&settings.user)
        .ssl_mode(pg_ssl_mode(settings.ssl_mode));

    match &settings.password {
        Some(password) => options.password(password),
        None => options,
    }
}

pub fn connection_error(err: sqlx::Error) -> Error {
    Error::Connection(err.to_string())
}

/// Map a failed catalog query, keeping transport failures distinct.
pub fn query_error(err: sqlx::Error) -> Error {
    match err {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed => Error::Connection(err.to_string()),
        other => Error::Introspection(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_every_ssl_mode() {
        assert!(matches!(pg_ssl_mode(SslMode::Require), PgSslMode::Require));
        assert!(matches!(pg_ssl_mode(SslMode::Disable), PgSslMode::Disable));
        assert!(matches!(pg_ssl_mode(SslMode::VerifyFull), PgSslMode::VerifyFull));
    }

    #[test]
    fn classifies_query_errors() {
        assert!(matches!(
            query_error(sqlx::Error::PoolTimedOut),
            Error::Connection(_)
        ));
        assert!(matches!(
            query_error(sqlx::Error::RowNotFound),
            Error::Introspection(_)
        ));
    }
}
