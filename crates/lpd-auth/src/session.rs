use super::*;
use lpd_core::ID;
use lpd_core::Unique;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Server-side record behind one opaque token.
#[derive(Debug, Clone)]
pub struct Session {
    user: ID<Member>,
    username: String,
    created: i64,
}

impl Session {
    pub fn new(user: ID<Member>, username: String) -> Self {
        Self {
            user,
            username,
            created: lpd_core::now(),
        }
    }
    pub fn user(&self) -> ID<Member> {
        self.user
    }
    pub fn username(&self) -> &str {
        &self.username
    }
    pub fn created(&self) -> i64 {
        self.created
    }
}

/// Opaque-reference token table. A token is 32 random bytes with no
/// decodable structure; validity is presence in the table and revocation
/// is removal. Entries never expire and live only as long as the process.
/// Keyed by SHA-256 digest so raw credentials never sit in memory.
#[derive(Default)]
pub struct Sessions {
    table: RwLock<HashMap<Vec<u8>, Session>>,
}

impl Sessions {
    fn mint() -> String {
        use base64::Engine;
        use rand::Rng;
        let ref mut bytes = [0u8; 32];
        rand::rng().fill(bytes);
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
    }
    pub async fn issue(&self, member: &Member) -> String {
        let token = Self::mint();
        let session = Session::new(member.id(), member.username().to_string());
        self.table.write().await.insert(Crypto::hash(&token), session);
        token
    }
    pub async fn validate(&self, token: &str) -> Option<Passport> {
        self.table
            .read()
            .await
            .get(&Crypto::hash(token))
            .map(|session| Passport::new(session.user(), session.username().to_string()))
    }
    /// Removing an absent token is a no-op.
    pub async fn revoke(&self, token: &str) {
        self.table.write().await.remove(&Crypto::hash(token));
    }
}
