//! Clinic administration core library
//!
//! REST service, typed client and the admin console screens for a small
//! clinic: patients, appointments, treatments, invoices, medications and
//! visitors.

pub mod api;
pub mod client;
pub mod db;
pub mod models;
pub mod security;
pub mod telemetry;
pub mod ui;

/// Application configuration
pub mod config {
    use serde::Deserialize;

    #[derive(Debug, Clone, Deserialize)]
    pub struct Config {
        pub server: ServerConfig,
        pub database: DatabaseConfig,
        pub client: ClientConfig,
        pub log: LogConfig,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ServerConfig {
        pub host: String,
        pub port: u16,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct DatabaseConfig {
        pub url: String,
        pub max_connections: u32,
    }

    /// Where the console finds the REST service.
    #[derive(Debug, Clone, Deserialize)]
    pub struct ClientConfig {
        pub base_url: String,
        pub timeout_secs: u64,
        /// Doctor whose dashboard the console shows.
        pub doctor_id: i64,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct LogConfig {
        pub filter: String,
        pub json: bool,
    }

    /// Load configuration: defaults, `config/default`, `config/{CLINIC_ENV}`,
    /// then `CLINIC__SECTION__KEY` environment variables.
    pub fn load_config() -> Result<Config, config::ConfigError> {
        let env = std::env::var("CLINIC_ENV").unwrap_or_else(|_| "development".into());

        config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("database.url", "sqlite://clinic.db")?
            .set_default("database.max_connections", 5)?
            .set_default("client.base_url", "http://127.0.0.1:5000")?
            .set_default("client.timeout_secs", 30)?
            .set_default("client.doctor_id", 1)?
            .set_default("log.filter", "info")?
            .set_default("log.json", false)?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                config::Environment::with_prefix("CLINIC")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::config::load_config;

    // One test so the environment changes below never race another loader.
    #[test]
    fn layers_defaults_files_and_environment() {
        std::env::remove_var("CLINIC_ENV");
        std::env::remove_var("CLINIC__SERVER__PORT");
        std::env::remove_var("CLINIC__CLIENT__BASE_URL");

        let config = load_config().unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.client.doctor_id, 1);
        assert_eq!(config.client.timeout_secs, 30);
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.log.filter, "info");
        assert!(!config.log.json);

        std::env::set_var("CLINIC_ENV", "test");
        let config = load_config().unwrap();
        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.log.filter, "clinic=debug");
        assert_eq!(config.server.port, 5000);

        std::env::set_var("CLINIC__SERVER__PORT", "6001");
        std::env::set_var("CLINIC__CLIENT__BASE_URL", "http://clinic.internal:6001");
        let config = load_config().unwrap();
        assert_eq!(config.server.port, 6001);
        assert_eq!(config.client.base_url, "http://clinic.internal:6001");
        assert_eq!(config.log.filter, "clinic=debug");

        std::env::remove_var("CLINIC_ENV");
        std::env::remove_var("CLINIC__SERVER__PORT");
        std::env::remove_var("CLINIC__CLIENT__BASE_URL");
    }
}
