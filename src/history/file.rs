//! History file persistence.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{HISTORY_KEY, HistoryStore, Result, capped};
use crate::settings;

#[derive(Serialize, Deserialize, Default)]
struct HistoryFile {
    #[serde(rename = "vaultforge_pw_history_v1", default)]
    entries: Vec<String>,
}

/// JSON history file under the config directory.
#[derive(Debug, Clone)]
pub struct FileHistory {
    path: PathBuf,
}

impl FileHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// History at its default location.
    pub fn open_default() -> Self {
        Self::new(settings::config_dir().join("history.json"))
    }

    fn read(&self) -> Result<Vec<String>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }
        let file: HistoryFile = serde_json::from_str(&data)?;
        Ok(file.entries)
    }
}

impl HistoryStore for FileHistory {
    fn load(&self) -> Vec<String> {
        self.read().unwrap_or_else(|e| {
            log::warn!(
                "ignoring unreadable history {} ({HISTORY_KEY}): {e}",
                self.path.display()
            );
            Vec::new()
        })
    }

    fn save(&mut self, entries: &[String]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = HistoryFile {
            entries: capped(entries).to_vec(),
        };
        let data = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, data)?;

        log::debug!(
            "wrote {} history entries to {}",
            file.entries.len(),
            self.path.display()
        );
        Ok(())
    }
}
