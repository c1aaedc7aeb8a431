use app_log::LogLevel;
use dotenv::dotenv;
use log::*;
use serde::{Deserialize, Serialize};
use std::{env, fs};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub backend_bind: String, // 0.0.0.0:9090
    pub log_level: LogLevel,  // Debug, Info, Warn, Error, Trace
    pub pg_user: String,
    pub pg_password: String,
    pub pg_database: String,
    pub pg_host: String,
    pub pg_port: u16,
    pub pg_sslmode: String, // disable, prefer, require
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_bind: "0.0.0.0:9090".to_string(),
            log_level: LogLevel::default(),
            pg_user: "postgres".to_string(),
            pg_password: "postgres".to_string(),
            pg_database: "a3db".to_string(),
            pg_host: "localhost".to_string(),
            pg_port: 5432,
            pg_sslmode: "disable".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads the JSON file named by APP_CONFIG; without the variable the
    /// built-in defaults apply. A file that is present but unreadable or
    /// malformed is a startup failure.
    pub fn new() -> Self {
        dotenv().ok();
        match env::var("APP_CONFIG") {
            Err(e) => {
                debug!("{}", &e);
                Self::default()
            }
            Ok(config_file_path) => match fs::File::open(config_file_path) {
                Err(e) => {
                    debug!("{}", &e);
                    panic!("Cannot read config file! {}", &e);
                }
                Ok(config_file) => match serde_json::from_reader(config_file) {
                    Err(e) => {
                        debug!("{}", &e);
                        panic!("Cannot parse json! {}", &e);
                    }
                    Ok(json) => json,
                },
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_matches_database_contract() {
        let config = AppConfig::default();
        assert_eq!(config.pg_user, "postgres");
        assert_eq!(config.pg_password, "postgres");
        assert_eq!(config.pg_database, "a3db");
        assert_eq!(config.pg_host, "localhost");
        assert_eq!(config.pg_port, 5432);
        assert_eq!(config.pg_sslmode, "disable");
        assert_eq!(config.backend_bind, "0.0.0.0:9090");
    }

    #[test]
    fn partial_config_file_keeps_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"pg_host":"db.internal","pg_port":6432}"#).unwrap();
        assert_eq!(config.pg_host, "db.internal");
        assert_eq!(config.pg_port, 6432);
        assert_eq!(config.pg_database, "a3db");
        assert_eq!(config.log_level, LogLevel::Debug);
    }
}
