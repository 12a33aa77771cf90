use crate::errors::ConfigError;
use std::env;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Clone)]
pub struct AppConfig {
    pub jwt_secret: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// Reads the process environment. Call `dotenv::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|secret| !secret.is_empty())
            .ok_or(ConfigError::MissingSecret)?;

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            jwt_secret,
            host,
            port,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn secret_is_required() {
        assert_eq!(config_from(&[]).err(), Some(ConfigError::MissingSecret));
        assert_eq!(
            config_from(&[("JWT_SECRET", "")]).err(),
            Some(ConfigError::MissingSecret)
        );
    }

    #[test]
    fn defaults_apply() {
        let cfg = config_from(&[("JWT_SECRET", "s3cret")]).unwrap();
        assert_eq!(cfg.jwt_secret, "s3cret");
        assert_eq!(cfg.bind_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn port_must_be_numeric() {
        let cfg = config_from(&[("JWT_SECRET", "s3cret"), ("PORT", "9090"), ("HOST", "127.0.0.1")]).unwrap();
        assert_eq!(cfg.bind_addr(), "127.0.0.1:9090");

        assert_eq!(
            config_from(&[("JWT_SECRET", "s3cret"), ("PORT", "http")]).err(),
            Some(ConfigError::InvalidPort("http".into()))
        );
    }
}
