//! Settings read from the environment at startup

use std::env;
use std::path::PathBuf;
use crate::history::DEFAULT_HISTORY_FILE;

/// Where `save` writes the history
pub const HISTORY_PATH_ENV: &str = "METRON_HISTORY_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub history_path: PathBuf,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from any key lookup; empty values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let history_path = lookup(HISTORY_PATH_ENV)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_HISTORY_FILE));
        Settings { history_path }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_history_path() {
        assert_eq!(Settings::default().history_path, PathBuf::from("conversion_history.txt"));
    }

    #[test]
    fn test_history_path_override() {
        let settings = Settings::from_lookup(|key| {
            (key == HISTORY_PATH_ENV).then(|| "/tmp/metron/history.txt".to_string())
        });
        assert_eq!(settings.history_path, PathBuf::from("/tmp/metron/history.txt"));
    }

    #[test]
    fn test_empty_override_is_ignored() {
        let settings = Settings::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(settings, Settings::default());
    }
}
