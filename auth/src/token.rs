//! Token issuance and validation.

use chrono::Duration;
use error::AuthError;
use hmac::{Hmac, Mac};
use jwt::{SignWithKey, VerifyWithKey};
use sha2::Sha256;
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::claims::{Claims, Role};
use crate::config::JwtConfig;

type HmacSha256 = Hmac<Sha256>;

/// Minimum accepted length of the signing secret, in bytes.
pub const MIN_SECRET_LEN: usize = 32;

/// Issues and validates signed session tokens.
///
/// Holds the HMAC-SHA256 key derived from the configured secret. The key
/// is derived once at construction and never changes, so a `TokenService`
/// is safe to share across threads for concurrent read-only use.
#[derive(Debug)]
pub struct TokenService {
    key: HmacSha256,
    expiration: Duration,
}

impl TokenService {
    /// Build the service from configuration.
    ///
    /// Fails fast with [`AuthError::WeakSecret`] if the secret is missing
    /// or shorter than [`MIN_SECRET_LEN`] bytes; no key is derived and no
    /// token can be issued in that case.
    pub fn new(config: &JwtConfig) -> Result<Self, AuthError> {
        if config.secret.len() < MIN_SECRET_LEN {
            return Err(AuthError::WeakSecret {
                length: config.secret.len(),
            });
        }

        let key = HmacSha256::new_from_slice(config.secret.as_bytes()).map_err(|e| {
            tracing::error!("Failed to derive HMAC key: {}", e);
            AuthError::TokenCreationFailed
        })?;

        tracing::info!(secret_len = config.secret.len(), "Token service initialized");

        Ok(Self {
            key,
            expiration: config.expiration(),
        })
    }

    /// Mint a signed token for a user.
    ///
    /// Sets `iat` to the current time and `exp` to the current time plus
    /// the configured validity. Email and display-name formats are not
    /// validated here.
    pub fn generate_token(
        &self,
        user_id: Uuid,
        role: Role,
        email: &str,
        full_name: &str,
    ) -> Result<String, AuthError> {
        let claims = Claims::new(user_id, role, email, full_name, self.expiration);

        claims.sign_with_key(&self.key).map_err(|e| {
            tracing::error!("Failed to sign token: {}", e);
            AuthError::TokenCreationFailed
        })
    }

    /// Verify a token's signature and expiry and decode its claims.
    ///
    /// A bad signature, a malformed token, or a missing `sub`/`iat`/`exp`
    /// claim is reported as [`AuthError::InvalidToken`]; a past expiration
    /// timestamp as [`AuthError::TokenExpired`]. The `role`, `email` and
    /// `name` claims default to empty strings when absent; whether an
    /// empty role is acceptable is the accessor's concern.
    pub fn parse_all_claims(&self, token: &str) -> Result<Claims, AuthError> {
        let token_claims: BTreeMap<String, serde_json::Value> =
            token.verify_with_key(&self.key).map_err(|e| {
                tracing::warn!("Rejected token: {}", e);
                AuthError::InvalidToken
            })?;

        let sub = token_claims
            .get("sub")
            .and_then(|v| v.as_str())
            .ok_or(AuthError::InvalidToken)?
            .to_string();

        let role = token_claims
            .get("role")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();

        let email = token_claims
            .get("email")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();

        let name = token_claims
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();

        let iat = token_claims
            .get("iat")
            .and_then(|v| v.as_i64())
            .ok_or(AuthError::InvalidToken)?;

        let exp = token_claims
            .get("exp")
            .and_then(|v| v.as_i64())
            .ok_or(AuthError::InvalidToken)?;

        let claims = Claims {
            sub,
            role,
            email,
            name,
            iat,
            exp,
        };

        if claims.is_expired() {
            return Err(AuthError::TokenExpired);
        }

        Ok(claims)
    }

    /// Parse a token and resolve its role claim against [`Role`].
    pub fn extract_user_role(&self, token: &str) -> Result<Role, AuthError> {
        let claims = self.parse_all_claims(token)?;
        claims.role.parse()
    }

    /// Parse a token and return its subject as a user id.
    pub fn validate_and_extract_user_id(&self, token: &str) -> Result<Uuid, AuthError> {
        let claims = self.parse_all_claims(token)?;
        Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidSubject(claims.sub))
    }

    /// Check whether a token passes signature and expiry validation.
    ///
    /// Boolean view over [`Self::parse_all_claims`]; the failure reason
    /// is deliberately discarded.
    pub fn is_token_valid(&self, token: &str) -> bool {
        self.parse_all_claims(token).is_ok()
    }
}
