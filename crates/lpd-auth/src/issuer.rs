use super::*;
use lpd_core::Unique;

/// Bearer-token strategy selected at startup.
/// The two designs are alternatives, not layers: a deployment runs
/// exactly one, and they share no token state.
pub enum Issuer {
    /// Stateless signed claims. Survives restarts with a stable secret,
    /// but cannot revoke a token before its expiry.
    Signed(Crypto),
    /// Server-side opaque sessions. Revocable, lost on restart.
    Opaque(Sessions),
}

impl Issuer {
    /// Reads AUTH_MODE: `tokens` selects signed claims, anything else
    /// (or unset) the revocable session table.
    pub fn from_env() -> Self {
        match std::env::var("AUTH_MODE").as_deref() {
            Ok("tokens") => Self::Signed(Crypto::from_env()),
            _ => Self::Opaque(Sessions::default()),
        }
    }
    pub async fn issue(&self, member: &Member) -> Result<String, jsonwebtoken::errors::Error> {
        match self {
            Self::Signed(crypto) => {
                crypto.encode(&Claims::new(member.id(), member.username().to_string()))
            }
            Self::Opaque(sessions) => Ok(sessions.issue(member).await),
        }
    }
    pub async fn validate(&self, token: &str) -> Option<Passport> {
        match self {
            Self::Signed(crypto) => crypto
                .decode(token)
                .ok()
                .filter(|claims| !claims.expired())
                .map(|claims| claims.passport()),
            Self::Opaque(sessions) => sessions.validate(token).await,
        }
    }
    pub async fn revoke(&self, token: &str) {
        match self {
            Self::Signed(_) => log::warn!("signed tokens cannot be revoked before expiry"),
            Self::Opaque(sessions) => sessions.revoke(token).await,
        }
    }
}
