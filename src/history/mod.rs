//! Saved password history.
//!
//! Entries are kept most recent first and capped at [`MAX_ENTRIES`].

mod file;

use thiserror::Error;

pub use file::FileHistory;

pub const MAX_ENTRIES: usize = 100;

/// Key of the entry list inside the history file.
pub const HISTORY_KEY: &str = "vaultforge_pw_history_v1";

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("history encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HistoryError>;

pub trait HistoryStore {
    /// Entries, most recent first. Unreadable storage reads as empty.
    fn load(&self) -> Vec<String>;

    /// Replace the stored list with at most the first [`MAX_ENTRIES`] items.
    fn save(&mut self, entries: &[String]) -> Result<()>;

    /// Put `password` at the front unless it is already stored.
    fn append(&mut self, password: &str) -> Result<()> {
        let mut entries = self.load();
        if !entries.iter().any(|e| e == password) {
            entries.insert(0, password.to_string());
        }
        self.save(&entries)
    }

    /// Remove the entry at `index`, returning it if there was one.
    fn remove(&mut self, index: usize) -> Result<Option<String>> {
        let mut entries = self.load();
        if index >= entries.len() {
            return Ok(None);
        }
        let removed = entries.remove(index);
        self.save(&entries)?;
        Ok(Some(removed))
    }

    fn clear(&mut self) -> Result<()> {
        self.save(&[])
    }
}

/// History that lives only as long as the value.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct MemoryHistory {
    entries: Vec<String>,
}

#[cfg(test)]
impl HistoryStore for MemoryHistory {
    fn load(&self) -> Vec<String> {
        self.entries.clone()
    }

    fn save(&mut self, entries: &[String]) -> Result<()> {
        self.entries = capped(entries).to_vec();
        Ok(())
    }
}

#[inline]
fn capped(entries: &[String]) -> &[String] {
    &entries[..entries.len().min(MAX_ENTRIES)]
}
