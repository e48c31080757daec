/**
 * Server Configuration
 *
 * This module loads server configuration from the environment.
 *
 * # Configuration Sources
 *
 * - `DATABASE_URL` - PostgreSQL connection string. Required, no default.
 * - `JWT_SECRET` - Token signing secret. Required, no default.
 * - `SERVER_PORT` - Listen port. Defaults to 3000.
 *
 * Missing required variables fail startup with a `ConfigError`; the
 * server never runs with a placeholder secret or without a database.
 */

use thiserror::Error;

/// Default listen port
pub const DEFAULT_PORT: u16 = 3000;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// SERVER_PORT is set but does not parse as a port number
    #[error("invalid SERVER_PORT value: {0}")]
    InvalidPort(String),
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Token signing secret
    pub jwt_secret: String,
    /// Listen port
    pub port: u16,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingVar` if `DATABASE_URL` or `JWT_SECRET`
    /// is not set, and `ConfigError::InvalidPort` if `SERVER_PORT` is set
    /// but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;
        let jwt_secret =
            std::env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?;

        let port = match std::env::var("SERVER_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn set_required() {
        std::env::set_var("DATABASE_URL", "postgres://localhost/inkpost");
        std::env::set_var("JWT_SECRET", "test-secret");
    }

    #[test]
    #[serial]
    fn test_from_env_with_required_vars() {
        set_required();
        std::env::remove_var("SERVER_PORT");

        let config = Config::from_env().unwrap();
        assert_eq!(config.database_url, "postgres://localhost/inkpost");
        assert_eq!(config.jwt_secret, "test-secret");
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    #[serial]
    fn test_missing_database_url_fails() {
        std::env::remove_var("DATABASE_URL");
        std::env::set_var("JWT_SECRET", "test-secret");

        let result = Config::from_env();
        assert!(matches!(result, Err(ConfigError::MissingVar("DATABASE_URL"))));
    }

    #[test]
    #[serial]
    fn test_missing_jwt_secret_fails() {
        std::env::set_var("DATABASE_URL", "postgres://localhost/inkpost");
        std::env::remove_var("JWT_SECRET");

        let result = Config::from_env();
        assert!(matches!(result, Err(ConfigError::MissingVar("JWT_SECRET"))));
    }

    #[test]
    #[serial]
    fn test_custom_port() {
        set_required();
        std::env::set_var("SERVER_PORT", "8080");

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 8080);

        std::env::remove_var("SERVER_PORT");
    }

    #[test]
    #[serial]
    fn test_invalid_port_fails() {
        set_required();
        std::env::set_var("SERVER_PORT", "not-a-port");

        let result = Config::from_env();
        assert!(matches!(result, Err(ConfigError::InvalidPort(_))));

        std::env::remove_var("SERVER_PORT");
    }
}
