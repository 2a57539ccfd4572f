//! Structured conversion errors
//!
//! Errors never crash the session. Each one carries a machine-readable code,
//! a severity and a suggestion so that any presentation layer can render it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const REGISTRY_UNAVAILABLE: &str = "REGISTRY_UNAVAILABLE";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const INCOMPATIBLE_DIMENSIONS: &str = "INCOMPATIBLE_DIMENSIONS";
    pub const INVALID_VALUE: &str = "INVALID_VALUE";
    pub const HISTORY_WRITE: &str = "HISTORY_WRITE";
}

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The request failed; the user may re-submit corrected input
    Error,
    /// The session cannot continue
    Fatal,
}

/// Errors raised by the registry, the gateway and the history store
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MetronError {
    /// The unit registry could not be initialised
    #[error("unit registry unavailable: {reason}")]
    RegistryUnavailable { reason: String },

    /// The symbol does not resolve in the registry
    #[error("unknown unit: {unit}")]
    UnknownUnit { unit: String },

    /// Both units resolve but measure different dimensions
    #[error("cannot convert {from} ({from_dim}) to {to} ({to_dim}): incompatible dimensions")]
    IncompatibleDimensions {
        from: String,
        to: String,
        from_dim: String,
        to_dim: String,
    },

    /// The magnitude is not a finite real number
    #[error("invalid value: {input}")]
    InvalidValue { input: String },

    /// The conversion history could not be written
    #[error("failed to write history to {path}: {reason}")]
    HistoryWrite { path: String, reason: String },
}

impl MetronError {
    pub fn registry_unavailable(reason: impl Into<String>) -> Self {
        Self::RegistryUnavailable { reason: reason.into() }
    }

    pub fn unknown_unit(unit: impl Into<String>) -> Self {
        Self::UnknownUnit { unit: unit.into() }
    }

    pub fn invalid_value(input: impl Into<String>) -> Self {
        Self::InvalidValue { input: input.into() }
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::RegistryUnavailable { .. } => codes::REGISTRY_UNAVAILABLE,
            Self::UnknownUnit { .. } => codes::UNKNOWN_UNIT,
            Self::IncompatibleDimensions { .. } => codes::INCOMPATIBLE_DIMENSIONS,
            Self::InvalidValue { .. } => codes::INVALID_VALUE,
            Self::HistoryWrite { .. } => codes::HISTORY_WRITE,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::RegistryUnavailable { .. } => Severity::Fatal,
            _ => Severity::Error,
        }
    }

    /// Whether the user can recover by re-submitting input
    pub fn is_recoverable(&self) -> bool {
        self.severity() != Severity::Fatal
    }

    /// Suggestion for fixing the error
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::RegistryUnavailable { .. } => "The unit table is inconsistent; this is a bug, please report it",
            Self::UnknownUnit { .. } => {
                "Check the spelling or pick a unit from the list of available units. \
                 Case is ignored unless two units differ only by case (mW/MW, gal/Gal); type those exactly"
            }
            Self::IncompatibleDimensions { .. } => "Pick a target unit from the list of compatible units",
            Self::InvalidValue { .. } => "Enter a finite number such as 5, -3.2 or 1e3",
            Self::HistoryWrite { .. } => "Check that the directory exists and is writable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(MetronError::unknown_unit("furlongs").code(), codes::UNKNOWN_UNIT);
        assert_eq!(MetronError::invalid_value("abc").code(), codes::INVALID_VALUE);
        assert_eq!(MetronError::registry_unavailable("dup").code(), codes::REGISTRY_UNAVAILABLE);
    }

    #[test]
    fn test_severity() {
        assert_eq!(MetronError::registry_unavailable("dup").severity(), Severity::Fatal);
        assert!(!MetronError::registry_unavailable("dup").is_recoverable());
        assert!(MetronError::unknown_unit("x").is_recoverable());
    }

    #[test]
    fn test_unknown_unit_suggestion_mentions_exact_case() {
        assert!(MetronError::unknown_unit("mw").suggestion().contains("mW/MW"));
    }

    #[test]
    fn test_display() {
        let err = MetronError::IncompatibleDimensions {
            from: "meter".to_string(),
            to: "second".to_string(),
            from_dim: "L".to_string(),
            to_dim: "T".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "cannot convert meter (L) to second (T): incompatible dimensions"
        );
        assert_eq!(MetronError::unknown_unit("bogusunit").to_string(), "unknown unit: bogusunit");
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_value(MetronError::unknown_unit("bogusunit")).unwrap();
        assert_eq!(json["kind"], "unknown_unit");
        assert_eq!(json["unit"], "bogusunit");
    }
}
