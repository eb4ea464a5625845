//! Token claims and role definitions.

use chrono::{Duration, Utc};
use error::AuthError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// User roles in the system.
///
/// The wire form is defined by [`Role::as_str`] and [`FromStr`] alone;
/// role values never travel through serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Administrator with full access
    Admin,
    /// Department manager
    Manager,
    /// Regular employee
    Employee,
}

impl Role {
    /// Wire form of the role, as embedded in the token payload.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Manager => "MANAGER",
            Role::Employee => "EMPLOYEE",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "MANAGER" => Ok(Role::Manager),
            "EMPLOYEE" => Ok(Role::Employee),
            other => Err(AuthError::InvalidRole(other.to_string())),
        }
    }
}

/// Decoded token payload.
///
/// The role is kept in its raw wire form here; resolving it against
/// [`Role`] is the accessor's job, so an unknown role value does not
/// make an otherwise well-signed token unparseable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID, UUID string form)
    pub sub: String,
    /// User's role
    pub role: String,
    /// User's email address
    pub email: String,
    /// User's display name
    pub name: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create new claims for a user, valid from now for `validity`.
    pub fn new(
        user_id: Uuid,
        role: Role,
        email: impl Into<String>,
        name: impl Into<String>,
        validity: Duration,
    ) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id.to_string(),
            role: role.as_str().to_string(),
            email: email.into(),
            name: name.into(),
            iat: now.timestamp(),
            exp: (now + validity).timestamp(),
        }
    }

    /// Check if the claims have expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_round_trip() {
        for role in [Role::Admin, Role::Manager, Role::Employee] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_unknown_role_rejected() {
        let err = "SUPERUSER".parse::<Role>().unwrap_err();
        assert!(matches!(err, AuthError::InvalidRole(v) if v == "SUPERUSER"));
    }

    #[test]
    fn test_new_claims() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id, Role::Manager, "m@example.com", "M N", Duration::hours(1));

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.role, "MANAGER");
        assert_eq!(claims.exp - claims.iat, 3600);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_expired_claims() {
        let mut claims = Claims::new(Uuid::new_v4(), Role::Employee, "e@example.com", "E F", Duration::hours(1));
        claims.exp = Utc::now().timestamp() - 60;
        assert!(claims.is_expired());
    }
}
