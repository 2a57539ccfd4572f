//! Presentation state
//!
//! What a front end holds between events: the shared gateway, injected at
//! startup, and the history of conversions made so far.

use std::path::Path;
use std::sync::Arc;
use metron_core::{ConversionRequest, ConversionResult, MetronError, UnitCatalog};
use metron_units::UnitRegistry;
use crate::format::{gui_line, parse_value};
use crate::{Gateway, History};

pub struct Session<C: UnitCatalog = UnitRegistry> {
    gateway: Arc<Gateway<C>>,
    history: History,
}

impl<C: UnitCatalog> Session<C> {
    pub fn new(gateway: Arc<Gateway<C>>) -> Self {
        Session {
            gateway,
            history: History::new(),
        }
    }

    pub fn gateway(&self) -> &Gateway<C> {
        &self.gateway
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Convert and record the result line in the history
    pub fn convert(&mut self, req: &ConversionRequest) -> Result<ConversionResult, MetronError> {
        let result = self.gateway.convert(req)?;
        self.history.record(gui_line(req, &result));
        Ok(result)
    }

    /// Convert raw text input; returns the recorded line
    pub fn convert_text(&mut self, value: &str, from: &str, to: &str) -> Result<String, MetronError> {
        let req = ConversionRequest::new(parse_value(value)?, from.trim(), to.trim());
        let result = self.convert(&req)?;
        Ok(gui_line(&req, &result))
    }

    pub fn save_history(&self, path: &Path) -> Result<usize, MetronError> {
        self.history.save(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn session() -> Session {
        Session::new(Arc::new(Gateway::with_default_registry().unwrap()))
    }

    #[test]
    fn test_convert_text_records_line() {
        let mut s = session();
        let line = s.convert_text(" 5 ", "kilometer", " mile").unwrap();
        assert_eq!(line, "5.0 kilometer = 3.1069 mile");
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.history().entries()[0].as_str(), line);
    }

    #[test]
    fn test_failed_conversion_not_recorded() {
        let mut s = session();
        assert!(matches!(
            s.convert_text("abc", "meter", "foot"),
            Err(MetronError::InvalidValue { .. })
        ));
        assert!(matches!(
            s.convert_text("1", "meter", "second"),
            Err(MetronError::IncompatibleDimensions { .. })
        ));
        assert!(s.history().is_empty());
    }

    #[test]
    fn test_convert_request() {
        let mut s = session();
        let result = s
            .convert(&ConversionRequest::new(100.0, "celsius", "fahrenheit"))
            .unwrap();
        assert_eq!(result.value, 212.0);
        assert_eq!(
            s.history().entries()[0].as_str(),
            "100.0 celsius = 212.0000 fahrenheit"
        );
    }

    #[test]
    fn test_sessions_share_gateway() {
        let gateway = Arc::new(Gateway::with_default_registry().unwrap());
        let a = Session::new(Arc::clone(&gateway));
        let b = Session::new(Arc::clone(&gateway));
        assert!(std::ptr::eq(a.gateway(), b.gateway()));
    }

    #[test]
    fn test_save_history() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.txt");
        let mut s = session();
        s.convert_text("1", "foot", "inch").unwrap();
        assert_eq!(s.save_history(&path).unwrap(), 1);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1.0 foot = 12.0000 inch\n");
    }
}
