use std::str::FromStr;

use notification_services::types::TermiiConfig;

/// Errors raised while reading the server configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable holds a value outside its allowed set
    #[error("Invalid value {value:?} for {name}")]
    InvalidValue {
        /// Variable name
        name: &'static str,
        /// Rejected value
        value: String,
    },
}

/// Where swap requests are persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// PostgreSQL through sqlx
    Postgres,
    /// Process memory; everything is lost on restart
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "postgres" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            _ => Err(ConfigError::InvalidValue {
                name: "STORE_BACKEND",
                value: value.to_string(),
            }),
        }
    }
}

/// Which SMS provider delivers recovery messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmsBackend {
    /// Termii HTTP API
    Termii,
    /// AWS SNS
    Sns,
    /// Write to the log only
    Log,
}

impl FromStr for SmsBackend {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "termii" => Ok(SmsBackend::Termii),
            "sns" => Ok(SmsBackend::Sns),
            "log" => Ok(SmsBackend::Log),
            _ => Err(ConfigError::InvalidValue {
                name: "SMS_PROVIDER",
                value: value.to_string(),
            }),
        }
    }
}

/// Runtime settings read from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP server binds to
    pub bind_address: String,
    /// PostgreSQL connection string
    pub database_url: String,
    /// Swap request storage
    pub store_backend: StoreBackend,
    /// Directory with the built frontend, served at `/` when set
    pub frontend_path: Option<String>,
    /// SMS provider for code recovery
    pub sms_backend: SmsBackend,
    /// Termii settings, also the source of the sender id for SNS
    pub termii: TermiiConfig,
}

impl ServerConfig {
    /// Reads the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = TermiiConfig::default();

        Ok(Self {
            bind_address: var("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0:8080".to_string()),
            database_url: var("DATABASE_URL")
                .unwrap_or_else(|| "postgres://localhost/uniform_swap".to_string()),
            store_backend: var("STORE_BACKEND")
                .map(|value| value.parse::<StoreBackend>())
                .transpose()?
                .unwrap_or(StoreBackend::Postgres),
            frontend_path: var("FRONTEND_PATH"),
            sms_backend: var("SMS_PROVIDER")
                .map(|value| value.parse::<SmsBackend>())
                .transpose()?
                .unwrap_or(SmsBackend::Termii),
            termii: TermiiConfig {
                base_url: var("TERMII_BASE_URL").unwrap_or(defaults.base_url),
                api_key: var("TERMII_API_KEY"),
                sender_id: var("SMS_SENDER_ID").unwrap_or(defaults.sender_id),
                channel: var("SMS_CHANNEL").unwrap_or(defaults.channel),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:8080");
        assert_eq!(config.database_url, "postgres://localhost/uniform_swap");
        assert_eq!(config.store_backend, StoreBackend::Postgres);
        assert_eq!(config.sms_backend, SmsBackend::Termii);
        assert_eq!(config.frontend_path, None);
        assert_eq!(config.termii.api_key, None);
        assert_eq!(config.termii.sender_id, "NYSC-Swap");
        assert_eq!(config.termii.channel, "dnd");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("STORE_BACKEND", "Memory"),
            ("SMS_PROVIDER", "log"),
            ("TERMII_API_KEY", "secret"),
            ("FRONTEND_PATH", "./frontend-build"),
            ("SMS_CHANNEL", ""),
        ])
        .unwrap();
        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert_eq!(config.sms_backend, SmsBackend::Log);
        assert_eq!(config.termii.api_key.as_deref(), Some("secret"));
        assert_eq!(config.frontend_path.as_deref(), Some("./frontend-build"));
        assert_eq!(config.termii.channel, "dnd");
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        assert!(matches!(
            config_from(&[("SMS_PROVIDER", "pigeon")]),
            Err(ConfigError::InvalidValue { name: "SMS_PROVIDER", .. })
        ));
        assert!(matches!(
            config_from(&[("STORE_BACKEND", "sqlite")]),
            Err(ConfigError::InvalidValue { name: "STORE_BACKEND", .. })
        ));
    }
}
