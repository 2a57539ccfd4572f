//! Conversion history
//!
//! An ordered, in-memory list of formatted conversion lines. Saving writes
//! one line per entry and replaces whatever the file held before.

use std::fmt;
use std::fs;
use std::path::Path;
use metron_core::MetronError;
use tracing::info;

/// Default file name used when saving history
pub const DEFAULT_HISTORY_FILE: &str = "conversion_history.txt";

/// One formatted conversion line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry(String);

impl HistoryEntry {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line
    pub fn record(&mut self, line: impl Into<String>) -> &HistoryEntry {
        self.entries.push(HistoryEntry(line.into()));
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The history as file contents, one line per entry
    fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(entry.as_str());
            out.push('\n');
        }
        out
    }

    /// Overwrite `path` with the history; returns the number of lines written
    pub fn save(&self, path: &Path) -> Result<usize, MetronError> {
        fs::write(path, self.render()).map_err(|e| MetronError::HistoryWrite {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        info!(path = %path.display(), entries = self.entries.len(), "history saved");
        Ok(self.entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_record_keeps_order() {
        let mut history = History::new();
        assert!(history.is_empty());
        history.record("1.0 meter = 3.2808 foot");
        let last = history.record("2.0 meter = 6.5617 foot");
        assert_eq!(last.as_str(), "2.0 meter = 6.5617 foot");
        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].as_str(), "1.0 meter = 3.2808 foot");
    }

    #[test]
    fn test_empty_history_saves_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.txt");
        assert_eq!(History::new().render(), "");
        assert_eq!(History::new().save(&path).unwrap(), 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_save_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_HISTORY_FILE);
        fs::write(&path, "stale line\nanother\n").unwrap();

        let mut history = History::new();
        history.record("5.0 kilometer = 3.1069 mile");
        history.record("100.0 celsius = 212.0000 fahrenheit");
        assert_eq!(history.save(&path).unwrap(), 2);

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "5.0 kilometer = 3.1069 mile\n100.0 celsius = 212.0000 fahrenheit\n"
        );
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("history.txt");
        let err = History::new().save(&path).unwrap_err();
        assert!(matches!(err, MetronError::HistoryWrite { .. }));
    }
}
