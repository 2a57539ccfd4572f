//! Request and result types passed between presentation and gateway

use std::borrow::Borrow;
use std::fmt;
use serde::{Deserialize, Serialize};

/// A string token naming a unit of measure (e.g. "meter", "kg")
///
/// No internal structure; validity is decided by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitSymbol(String);

impl UnitSymbol {
    pub fn new(symbol: impl Into<String>) -> Self {
        UnitSymbol(symbol.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnitSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UnitSymbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for UnitSymbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UnitSymbol {
    fn from(s: &str) -> Self {
        UnitSymbol(s.to_string())
    }
}

impl From<String> for UnitSymbol {
    fn from(s: String) -> Self {
        UnitSymbol(s)
    }
}

impl PartialEq<str> for UnitSymbol {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for UnitSymbol {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A single conversion to perform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub value: f64,
    pub from_unit: UnitSymbol,
    pub to_unit: UnitSymbol,
}

impl ConversionRequest {
    pub fn new(value: f64, from_unit: impl Into<UnitSymbol>, to_unit: impl Into<UnitSymbol>) -> Self {
        ConversionRequest {
            value,
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
        }
    }

    /// The same pair of units the other way round, for `value`
    pub fn reversed(&self, value: f64) -> Self {
        ConversionRequest {
            value,
            from_unit: self.to_unit.clone(),
            to_unit: self.from_unit.clone(),
        }
    }
}

/// The converted magnitude expressed in the requested target unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub value: f64,
    pub unit: UnitSymbol,
}

/// Description of one registry entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitInfo {
    /// Short symbol (e.g. "km")
    pub symbol: String,
    /// Canonical name (e.g. "kilometer")
    pub name: String,
    /// Grouping such as "length" or "temperature"
    pub category: String,
    /// Rendered dimension signature (e.g. "L T^-1")
    pub dimensionality: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_compares_with_str() {
        let s = UnitSymbol::from("meter");
        assert_eq!(s, "meter");
        assert_eq!(s.as_str(), "meter");
        assert_eq!(format!("{}", s), "meter");
    }

    #[test]
    fn test_symbol_serializes_as_string() {
        let s = UnitSymbol::new("kg");
        assert_eq!(serde_json::to_string(&s).unwrap(), "\"kg\"");
    }

    #[test]
    fn test_reversed_request() {
        let req = ConversionRequest::new(5.0, "kilometer", "mile");
        let back = req.reversed(3.1);
        assert_eq!(back.from_unit, "mile");
        assert_eq!(back.to_unit, "kilometer");
        assert_eq!(back.value, 3.1);
    }
}
