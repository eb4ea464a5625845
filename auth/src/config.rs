//! Token service configuration.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Token validity used when `APP_JWT_EXPIRATION_MS` is unset: one hour.
const DEFAULT_EXPIRATION_MS: i64 = 3_600_000;

/// JWT configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// Secret the signing key is derived from
    pub secret: String,
    /// Token validity duration in milliseconds
    pub expiration_ms: i64,
}

impl JwtConfig {
    /// Create a new JWT configuration.
    pub fn new(secret: impl Into<String>, expiration_ms: i64) -> Self {
        Self {
            secret: secret.into(),
            expiration_ms,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `APP_JWT_SECRET` and `APP_JWT_EXPIRATION_MS`. The secret has
    /// no default; a missing secret is rejected by [`crate::TokenService::new`].
    pub fn from_env() -> Self {
        let secret = std::env::var("APP_JWT_SECRET").unwrap_or_default();
        let mut config = Self::new(secret, DEFAULT_EXPIRATION_MS);

        if let Ok(ms) = std::env::var("APP_JWT_EXPIRATION_MS") {
            if let Ok(n) = ms.parse() {
                config.expiration_ms = n;
            }
        }

        config
    }

    /// Token validity as a Duration.
    pub fn expiration(&self) -> Duration {
        Duration::milliseconds(self.expiration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_config() {
        let config = JwtConfig::new("a-secret", 3_600_000);
        assert_eq!(config.secret, "a-secret");
        assert_eq!(config.expiration_ms, 3_600_000);
        assert_eq!(config.expiration(), Duration::hours(1));
    }

    #[test]
    fn test_from_env() {
        std::env::set_var("APP_JWT_SECRET", "env-secret");
        std::env::set_var("APP_JWT_EXPIRATION_MS", "60000");

        let config = JwtConfig::from_env();
        assert_eq!(config.secret, "env-secret");
        assert_eq!(config.expiration_ms, 60_000);

        std::env::remove_var("APP_JWT_SECRET");
        std::env::remove_var("APP_JWT_EXPIRATION_MS");
    }
}
