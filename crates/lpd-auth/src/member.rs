use lpd_core::ID;
use lpd_core::Unique;

/// Registered launcher account with verified credentials.
/// Created on registration, never mutated. The password verifier lives
/// only in the credential store, not on this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Member {
    id: ID<Self>,
    username: String,
    created: std::time::SystemTime,
}

impl Member {
    pub fn new(id: ID<Self>, username: String, created: std::time::SystemTime) -> Self {
        Self {
            id,
            username,
            created,
        }
    }
    pub fn username(&self) -> &str {
        &self.username
    }
    pub fn created(&self) -> std::time::SystemTime {
        self.created
    }
}

impl Unique for Member {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

/// Verified identity produced by token validation.
/// Carries only what the read endpoints need.
#[derive(Debug, Clone)]
pub struct Passport {
    user: ID<Member>,
    username: String,
}

impl Passport {
    pub fn new(user: ID<Member>, username: String) -> Self {
        Self { user, username }
    }
    pub fn user(&self) -> ID<Member> {
        self.user
    }
    pub fn username(&self) -> &str {
        &self.username
    }
}
