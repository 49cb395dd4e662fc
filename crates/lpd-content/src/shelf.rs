use serde_json::Value;
use serde_json::json;

/// The four named documents served to the launcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shelf {
    Version,
    News,
    Mods,
    Server,
}

impl Shelf {
    pub const ALL: [Shelf; 4] = [Shelf::Version, Shelf::News, Shelf::Mods, Shelf::Server];

    /// File name under the data directory.
    pub fn file(&self) -> &'static str {
        match self {
            Self::Version => "version.json",
            Self::News => "news.json",
            Self::Mods => "mods.json",
            Self::Server => "server.json",
        }
    }

    /// Default document written once when the file is missing at startup.
    pub fn seed(&self) -> Value {
        match self {
            Self::Version => json!({
                "latest_version": "1.0.0",
                "changelog": "Initial release",
                "players_online": 0,
                "server_ip": "87.107.155.110",
                "server_port": 15226
            }),
            Self::News => json!({
                "news": [
                    { "title": "Welcome", "content": "Launcher API ready." }
                ]
            }),
            Self::Mods => json!({
                "mods": [
                    {
                        "name": "Example Mod",
                        "version": "1.0",
                        "description": "Test mod",
                        "download_url": "https://example.com/mod.zip"
                    }
                ]
            }),
            Self::Server => json!({
                "name": "My SAMP Server",
                "server_ip": "87.107.155.110",
                "server_port": 15226,
                "players_online": 0,
                "max_players": 100,
                "updated_at": lpd_core::now()
            }),
        }
    }
}
