//! Unit catalog trait
//!
//! The gateway talks to a unit registry only through this trait.

use std::fmt;
use crate::{MetronError, UnitInfo, UnitSymbol};

/// A source of known units, their dimensionality, and conversions between them
pub trait UnitCatalog: Send + Sync {
    /// Opaque, equality-comparable dimension signature
    type Dimensionality: Clone + Eq + fmt::Debug + fmt::Display;

    /// Every spelling the catalog resolves, in its enumeration order
    fn units(&self) -> Vec<UnitSymbol>;

    /// Dimension signature of a unit, or `None` if it does not resolve
    fn dimensionality(&self, symbol: &str) -> Option<Self::Dimensionality>;

    /// Convert a magnitude between two units
    fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, MetronError>;

    /// Describe a unit, or `None` if it does not resolve
    fn describe(&self, symbol: &str) -> Option<UnitInfo>;
}
