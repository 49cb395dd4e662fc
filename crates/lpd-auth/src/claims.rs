use super::*;
use lpd_core::ID;

/// Payload of a signed-claim token. Identity travels inside the token
/// itself; the server stores nothing.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct Claims {
    pub sub: uuid::Uuid,
    pub usr: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(user: ID<Member>, username: String) -> Self {
        let now = lpd_core::now();
        Self {
            sub: user.inner(),
            usr: username,
            iat: now,
            exp: now + Crypto::duration().as_secs() as i64,
        }
    }
    pub fn expired(&self) -> bool {
        self.exp < lpd_core::now()
    }
    pub fn user(&self) -> ID<Member> {
        ID::from(self.sub)
    }
    pub fn username(&self) -> &str {
        &self.usr
    }
    pub fn passport(&self) -> Passport {
        Passport::new(self.user(), self.usr.clone())
    }
}
