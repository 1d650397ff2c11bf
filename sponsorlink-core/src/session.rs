//! Signed session tokens
//!
//! Identity is always derived from a verified token, never from a
//! client-supplied body field. Tokens are opaque to callers:
//!
//! ```text
//! v1.<user_id>.<role>.<signature>
//! ```
//!
//! The signature is keyed by the server's `SESSION_SECRET`. Token issuance
//! belongs to the external auth collaborator; [`SessionKey::mint`] exists so
//! that collaborator (and the test suite) can produce compatible tokens.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const TOKEN_VERSION: &str = "v1";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session token missing")]
    Missing,

    #[error("session token malformed")]
    Malformed,

    #[error("session token signature invalid")]
    BadSignature,

    #[error("unknown role '{0}'")]
    UnknownRole(String),
}

/// Caller role carried by the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// An influencer or brand user.
    Creator,
    /// Privileged operator; may read across all users.
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Creator => "creator",
            Role::Admin => "admin",
        }
    }

    fn parse(value: &str) -> Result<Self, SessionError> {
        match value {
            "creator" => Ok(Role::Creator),
            "admin" => Ok(Role::Admin),
            other => Err(SessionError::UnknownRole(other.to_string())),
        }
    }
}

/// A verified caller identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub role: Role,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Shared signing key. Read-only after startup, cheap to clone.
#[derive(Clone)]
pub struct SessionKey {
    secret: String,
}

impl SessionKey {
    pub fn new(secret: String) -> Self {
        Self { secret }
    }

    /// Produce a token for the given identity.
    pub fn mint(&self, user_id: &str, role: Role) -> String {
        let sig = self.signature(user_id, role);
        format!("{TOKEN_VERSION}.{user_id}.{}.{sig}", role.as_str())
    }

    /// Verify a bearer token and recover the identity inside it.
    pub fn verify(&self, token: &str) -> Result<Session, SessionError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(SessionError::Missing);
        }

        let body = token
            .strip_prefix(TOKEN_VERSION)
            .and_then(|rest| rest.strip_prefix('.'))
            .ok_or(SessionError::Malformed)?;

        // user ids are opaque and may contain dots; role and signature never do.
        let mut parts = body.rsplitn(3, '.');
        let sig = parts.next().ok_or(SessionError::Malformed)?;
        let role = parts.next().ok_or(SessionError::Malformed)?;
        let user_id = parts.next().ok_or(SessionError::Malformed)?;
        if user_id.is_empty() {
            return Err(SessionError::Malformed);
        }

        let role = Role::parse(role)?;
        if sig != self.signature(user_id, role) {
            return Err(SessionError::BadSignature);
        }

        Ok(Session {
            user_id: user_id.to_string(),
            role,
        })
    }

    fn signature(&self, user_id: &str, role: Role) -> String {
        let digest = md5::compute(format!(
            "{user_id}:{role}:{secret}",
            role = role.as_str(),
            secret = self.secret
        ));
        format!("{digest:x}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> SessionKey {
        SessionKey::new("test-secret".to_string())
    }

    #[test]
    fn mint_verify_round_trip() {
        let token = key().mint("user-42", Role::Creator);
        let session = key().verify(&token).unwrap();
        assert_eq!(session.user_id, "user-42");
        assert_eq!(session.role, Role::Creator);
        assert!(!session.is_admin());
    }

    #[test]
    fn user_ids_with_dots_survive() {
        let token = key().mint("auth0|user.name", Role::Admin);
        let session = key().verify(&token).unwrap();
        assert_eq!(session.user_id, "auth0|user.name");
        assert!(session.is_admin());
    }

    #[test]
    fn tampered_role_is_rejected() {
        let token = key().mint("user-42", Role::Creator);
        let forged = token.replace(".creator.", ".admin.");
        assert!(matches!(
            key().verify(&forged),
            Err(SessionError::BadSignature)
        ));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = key().mint("user-42", Role::Admin);
        let other = SessionKey::new("other-secret".to_string());
        assert!(matches!(
            other.verify(&token),
            Err(SessionError::BadSignature)
        ));
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        for bad in ["", "v1", "v2.u.creator.sig", "v1.creator.sig", "garbage"] {
            let err = key().verify(bad).unwrap_err();
            assert!(
                matches!(err, SessionError::Missing | SessionError::Malformed),
                "token {bad:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        // Signature check happens after role parsing; a well-signed token
        // with an unknown role still fails.
        let token = "v1.user.superuser.deadbeef";
        assert!(matches!(
            key().verify(token),
            Err(SessionError::UnknownRole(_))
        ));
    }
}
