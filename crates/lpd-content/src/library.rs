use super::*;
use serde_json::Value;
use std::path::PathBuf;
use tokio::sync::Mutex;

/// On-disk JSON document store for launcher content.
/// Reads are verbatim file reads; the single mutation path shallow-merges
/// into one document behind a lock, so writes never interleave.
pub struct Library {
    dir: PathBuf,
    write: Mutex<()>,
}

impl Library {
    /// Opens the data directory, creating it and seeding missing
    /// documents. Existing files are left untouched.
    pub fn new(dir: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        for shelf in Shelf::ALL {
            let path = dir.join(shelf.file());
            if !path.exists() {
                log::info!("seeding {}", shelf.file());
                std::fs::write(&path, serde_json::to_vec_pretty(&shelf.seed())?)?;
            }
        }
        Ok(Self {
            dir,
            write: Mutex::new(()),
        })
    }

    fn load(&self, file: &str) -> Option<Value> {
        let bytes = std::fs::read(self.dir.join(file)).ok()?;
        serde_json::from_slice(&bytes).ok()
    }

    /// Returns the stored document, or None when the file is missing or
    /// unreadable.
    pub fn read(&self, shelf: Shelf) -> Option<Value> {
        match shelf {
            // older launchers upload update.json instead of version.json
            Shelf::Version => self.load(shelf.file()).or_else(|| self.load("update.json")),
            _ => self.load(shelf.file()),
        }
    }

    /// Shallow-merges top-level keys of `partial` into the stored
    /// document, refreshes `updated_at`, persists, and returns the merged
    /// result. Incoming fields are stored as-is, with no per-field
    /// validation; a non-object `partial` merges nothing.
    pub async fn merge(&self, shelf: Shelf, partial: Value) -> anyhow::Result<Value> {
        let _guard = self.write.lock().await;
        let mut merged = self.read(shelf).unwrap_or_else(|| shelf.seed());
        if let Some(map) = merged.as_object_mut() {
            if let Some(partial) = partial.as_object() {
                for (key, value) in partial {
                    map.insert(key.clone(), value.clone());
                }
            }
            map.insert("updated_at".to_string(), Value::from(lpd_core::now()));
        }
        std::fs::write(
            self.dir.join(shelf.file()),
            serde_json::to_vec_pretty(&merged)?,
        )?;
        Ok(merged)
    }

    /// Resolves a raw file under the data directory for download.
    /// Rejects anything that could escape the directory.
    pub fn resolve(&self, filename: &str) -> Option<PathBuf> {
        if filename.is_empty()
            || filename.contains("..")
            || filename.contains('/')
            || filename.contains('\\')
        {
            return None;
        }
        let path = self.dir.join(filename);
        path.is_file().then_some(path)
    }
}
