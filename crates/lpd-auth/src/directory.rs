use super::*;
use lpd_core::ID;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory credential store. Check-then-insert happens under a single
/// write lock so concurrent registrations cannot both claim a username.
#[derive(Default)]
pub struct Roster {
    users: RwLock<HashMap<String, (Member, String)>>,
}

impl Roster {
    pub async fn register(&self, username: &str, hashword: &str) -> Option<Member> {
        let mut users = self.users.write().await;
        if users.contains_key(username) {
            return None;
        }
        let member = Member::new(
            ID::default(),
            username.to_string(),
            std::time::SystemTime::now(),
        );
        users.insert(
            username.to_string(),
            (member.clone(), hashword.to_string()),
        );
        Some(member)
    }
    pub async fn lookup(&self, username: &str) -> Option<(Member, String)> {
        self.users.read().await.get(username).cloned()
    }
}

/// Credential store facade. One deployment owns exactly one of these;
/// nothing above it knows which backing is in play.
pub enum Directory {
    Memory(Roster),
    #[cfg(feature = "database")]
    Durable(std::sync::Arc<tokio_postgres::Client>),
}

impl Directory {
    pub fn memory() -> Self {
        Self::Memory(Roster::default())
    }
    #[cfg(feature = "database")]
    pub fn durable(client: std::sync::Arc<tokio_postgres::Client>) -> Self {
        Self::Durable(client)
    }

    /// Stores a new account. Returns None when the username is taken.
    pub async fn register(&self, username: &str, hashword: &str) -> anyhow::Result<Option<Member>> {
        match self {
            Self::Memory(roster) => Ok(roster.register(username, hashword).await),
            #[cfg(feature = "database")]
            Self::Durable(client) => {
                if client.exists(username).await? {
                    return Ok(None);
                }
                let member = Member::new(
                    ID::default(),
                    username.to_string(),
                    std::time::SystemTime::now(),
                );
                match client.create(&member, hashword).await {
                    Ok(()) => Ok(Some(member)),
                    // lost the uniqueness race to a concurrent insert
                    Err(ref e) if taken(e) => Ok(None),
                    Err(e) => Err(e.into()),
                }
            }
        }
    }

    pub async fn lookup(&self, username: &str) -> anyhow::Result<Option<(Member, String)>> {
        match self {
            Self::Memory(roster) => Ok(roster.lookup(username).await),
            #[cfg(feature = "database")]
            Self::Durable(client) => Ok(client.lookup(username).await?),
        }
    }

    pub async fn ping(&self) -> anyhow::Result<()> {
        match self {
            Self::Memory(_) => Ok(()),
            #[cfg(feature = "database")]
            Self::Durable(client) => {
                client.execute("SELECT 1", &[]).await?;
                Ok(())
            }
        }
    }
}
