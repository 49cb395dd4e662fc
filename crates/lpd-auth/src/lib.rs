//! Accounts, bearer tokens, and sessions for the launcher backend.
//!
//! Argon2 password hashing over a pluggable credential store, with two
//! self-contained bearer-token designs selected at startup. The designs are
//! alternatives, never layered: a deployment runs exactly one.
//!
//! ## Identity Types
//!
//! - [`Member`] — Registered account with credentials
//! - [`Passport`] — Verified identity extracted from a bearer token
//!
//! ## Credential Store
//!
//! - [`Directory`] — Durable PostgreSQL table or mutex-guarded process memory
//! - [`Roster`] — The in-memory variant
//!
//! ## Tokens
//!
//! - [`Crypto`] / [`Claims`] — Stateless signed claims with a 7-day expiry
//! - [`Sessions`] / [`Session`] — Server-side opaque tokens, revocable, no expiry
//! - [`Issuer`] — The variant wired into the running server
//! - [`password`] — Argon2 hashing and verification
mod claims;
mod crypto;
mod directory;
mod dto;
mod issuer;
mod member;
pub mod password;
mod session;

pub use claims::*;
pub use crypto::*;
pub use directory::*;
pub use dto::*;
pub use issuer::*;
pub use member::*;
pub use session::*;

#[cfg(feature = "database")]
mod repository;
#[cfg(feature = "database")]
pub use repository::*;

#[cfg(feature = "server")]
mod handlers;
#[cfg(feature = "server")]
mod middleware;
#[cfg(feature = "server")]
pub use handlers::*;
#[cfg(feature = "server")]
pub use middleware::*;
