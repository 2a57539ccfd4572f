//! Metron Units - Unit registry
//!
//! A flat table of named units. Each unit has a dimension signature and an
//! exact rational factor (plus offset, for temperature scales) to its SI
//! base unit. Units are compatible when their dimensions are equal.
//!
//! Categories:
//! - Length (m, km, ft, mi, etc.)
//! - Mass (kg, g, lb, oz, etc.)
//! - Time (s, min, h, d, etc.)
//! - Temperature (K, degC, degF, degR)
//! - Current, amount, luminosity, illuminance
//! - Area, volume, velocity, acceleration
//! - Force, energy, power, pressure, frequency
//! - Electrical (V, ohm, Coul, etc.)
//! - Information (bit, byte, MB, etc.)
//! - Angle and ratio (rad, deg, %, etc.)

mod dimension;
mod unit;
mod units;

pub use dimension::Dimension;
pub use unit::{dec, int, ratio, Unit};
pub use units::UnitRegistry;

use metron_core::{MetronError, UnitCatalog, UnitInfo, UnitSymbol};

impl UnitCatalog for UnitRegistry {
    type Dimensionality = Dimension;

    fn units(&self) -> Vec<UnitSymbol> {
        self.keys().into_iter().map(UnitSymbol::from).collect()
    }

    fn dimensionality(&self, symbol: &str) -> Option<Dimension> {
        self.get(symbol).map(|u| u.dimension)
    }

    fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, MetronError> {
        let from_unit = self.get(from).ok_or_else(|| MetronError::unknown_unit(from))?;
        let to_unit = self.get(to).ok_or_else(|| MetronError::unknown_unit(to))?;
        from_unit.convert_to(value, to_unit)
    }

    fn describe(&self, symbol: &str) -> Option<UnitInfo> {
        self.get(symbol).map(|u| UnitInfo {
            symbol: u.symbol.clone(),
            name: u.name.clone(),
            category: u.category.clone(),
            dimensionality: u.dimension.to_string(),
        })
    }
}
