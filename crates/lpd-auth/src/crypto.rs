use super::*;

const TOKEN_DURATION: std::time::Duration = std::time::Duration::from_secs(7 * 24 * 60 * 60);

/// Signed-claim token issuer. HS256 over a server-held secret.
/// Stateless by design, which means a token cannot be recalled before
/// its expiry.
pub struct Crypto {
    encoding: jsonwebtoken::EncodingKey,
    decoding: jsonwebtoken::DecodingKey,
}

impl Crypto {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: jsonwebtoken::EncodingKey::from_secret(secret),
            decoding: jsonwebtoken::DecodingKey::from_secret(secret),
        }
    }
    /// Reads TOKEN_SECRET. Falls back to ephemeral random key material,
    /// which invalidates outstanding tokens on restart.
    pub fn from_env() -> Self {
        match std::env::var("TOKEN_SECRET") {
            Ok(secret) => Self::new(secret.as_bytes()),
            Err(_) => {
                use rand::Rng;
                log::warn!("TOKEN_SECRET not set, signing with ephemeral key material");
                let ref mut bytes = [0u8; 32];
                rand::rng().fill(bytes);
                Self::new(bytes)
            }
        }
    }
    pub fn encode(&self, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
        jsonwebtoken::encode(&jsonwebtoken::Header::default(), claims, &self.encoding)
    }
    pub fn decode(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &jsonwebtoken::Validation::default())
            .map(|data| data.claims)
    }
    pub fn hash(token: &str) -> Vec<u8> {
        use sha2::Digest;
        sha2::Sha256::digest(token.as_bytes()).to_vec()
    }
    pub const fn duration() -> std::time::Duration {
        TOKEN_DURATION
    }
}
