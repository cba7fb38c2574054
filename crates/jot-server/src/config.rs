//! Server configuration from environment variables.

use std::env;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server port to listen on.
    pub port: u16,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// CORS allowed origins (comma-separated or "*" for all).
    pub cors_allowed_origins: String,
    /// Secret used to sign and verify credentials.
    pub jwt_secret: String,
    /// Credential lifetime in hours.
    pub jwt_expiry_hours: u64,
    /// Maximum accepted request body size in bytes.
    pub max_body_bytes: usize,
    /// Maximum JSON nesting depth accepted in request bodies.
    pub max_body_depth: usize,
    /// Maximum JSON node cost accepted in request bodies.
    pub max_body_cost: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `JWT_SECRET`: Credential signing secret
    ///
    /// Optional:
    /// - `PORT`: Server port (default: 4000)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    /// - `CORS_ALLOWED_ORIGINS`: Allowed CORS origins (default: "*")
    /// - `JWT_EXPIRY_HOURS`: Credential lifetime (default: 24)
    /// - `MAX_BODY_BYTES`: Request body byte cap (default: 65536)
    /// - `MAX_BODY_DEPTH`: Request body JSON depth cap (default: 5)
    /// - `MAX_BODY_COST`: Request body JSON cost cap (default: 1000)
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret =
            env::var("JWT_SECRET").map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?;

        if jwt_secret.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "JWT_SECRET".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(4000);

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let cors_allowed_origins =
            env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string());

        let jwt_expiry_hours = env::var("JWT_EXPIRY_HOURS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(24);

        let max_body_bytes = env::var("MAX_BODY_BYTES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(64 * 1024);

        let max_body_depth = env::var("MAX_BODY_DEPTH")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);

        let max_body_cost = env::var("MAX_BODY_COST")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(1000);

        Ok(Self {
            port,
            log_level,
            cors_allowed_origins,
            jwt_secret,
            jwt_expiry_hours,
            max_body_bytes,
            max_body_depth,
            max_body_cost,
        })
    }

    /// Get the socket address for the server.
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required environment variable is missing.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Invalid environment variable value.
    #[error("invalid value for environment variable {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        // This test requires JWT_SECRET to be set
        // SAFETY: This test is not run in parallel with other tests that read JWT_SECRET.
        unsafe { env::set_var("JWT_SECRET", "test_secret") };

        let config = ServerConfig::from_env().unwrap();

        assert_eq!(config.port, 4000);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.cors_allowed_origins, "*");
        assert_eq!(config.jwt_expiry_hours, 24);
        assert_eq!(config.max_body_depth, 5);
        assert_eq!(config.max_body_cost, 1000);

        // SAFETY: This test is not run in parallel with other tests that read JWT_SECRET.
        unsafe { env::remove_var("JWT_SECRET") };
    }
}
