//! Launcher Backend Binary
//!
//! Serves the account and content API for the game launcher.
//! Listens on PORT (default 5000).

#[tokio::main]
async fn main() {
    lpd_core::log();
    lpd_server::run().await.unwrap();
}
