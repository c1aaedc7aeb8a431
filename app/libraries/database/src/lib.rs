use app_config::AppConfig;
use app_error::AppError;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use sqlx::{ConnectOptions, PgConnection};

/// Builds connect options from configuration without touching the network.
pub fn connect_options(config: &AppConfig) -> Result<PgConnectOptions, AppError> {
    let ssl_mode = config.pg_sslmode.parse::<PgSslMode>()?;
    Ok(PgConnectOptions::new()
        .host(&config.pg_host)
        .port(config.pg_port)
        .username(&config.pg_user)
        .password(&config.pg_password)
        .database(&config.pg_database)
        .ssl_mode(ssl_mode))
}

/// Opens a dedicated connection for a single request. The caller owns the
/// connection and drops it once the last row has been consumed. No retry,
/// no pooling, no timeout.
pub async fn connect(config: &AppConfig) -> Result<PgConnection, AppError> {
    let options = connect_options(config)?;
    Ok(options.connect().await?)
}
