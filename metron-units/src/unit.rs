//! Unit representation with exact conversion factors

use std::fmt;
use dashu_base::Approximation;
use dashu_int::{IBig, UBig};
use dashu_ratio::RBig;
use metron_core::MetronError;
use crate::Dimension;

/// Integer factor
pub fn int(n: i128) -> RBig {
    RBig::from_parts(IBig::from(n), UBig::ONE)
}

/// Decimal factor `digits * 10^-scale`, e.g. `dec(3048, 4)` is 0.3048
pub fn dec(digits: i128, scale: u32) -> RBig {
    RBig::from_parts(IBig::from(digits), UBig::from(10u128.pow(scale)))
}

/// Fractional factor `num / den`
pub fn ratio(num: i128, den: u128) -> RBig {
    RBig::from_parts(IBig::from(num), UBig::from(den))
}

/// Represents a physical unit with its dimension and conversion factors
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    /// The unit symbol (e.g., "m", "kg", "s")
    pub symbol: String,
    /// The canonical unit name (e.g., "meter", "kilogram", "second")
    pub name: String,
    /// The dimensional signature
    pub dimension: Dimension,
    /// Factor to convert to SI base unit (value_si = value * to_si_factor + to_si_offset)
    pub to_si_factor: RBig,
    /// Offset for non-proportional units like temperature (Celsius, Fahrenheit)
    pub to_si_offset: RBig,
    /// Category for organization (e.g., "length", "mass", "time")
    pub category: String,
}

impl Unit {
    /// Create a new unit with proportional conversion (no offset)
    pub fn new(symbol: &str, name: &str, dimension: Dimension, to_si_factor: RBig, category: &str) -> Self {
        Self::with_offset(symbol, name, dimension, to_si_factor, RBig::ZERO, category)
    }

    /// Create a unit with offset (for temperature conversions)
    pub fn with_offset(
        symbol: &str,
        name: &str,
        dimension: Dimension,
        to_si_factor: RBig,
        to_si_offset: RBig,
        category: &str,
    ) -> Self {
        Unit {
            symbol: symbol.to_string(),
            name: name.to_string(),
            dimension,
            to_si_factor,
            to_si_offset,
            category: category.to_string(),
        }
    }

    /// Check if two units are dimensionally compatible (can be converted)
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.dimension == other.dimension
    }

    /// Convert an exact value from this unit to the SI base unit
    pub fn to_si(&self, value: &RBig) -> RBig {
        let scaled = value * &self.to_si_factor;
        &scaled + &self.to_si_offset
    }

    /// Convert an exact value from the SI base unit to this unit
    pub fn from_si(&self, value_si: &RBig) -> RBig {
        let shifted = value_si - &self.to_si_offset;
        &shifted / &self.to_si_factor
    }

    /// Convert a value from this unit to another unit
    ///
    /// The arithmetic is exact; the result is rounded to `f64` once.
    pub fn convert_to(&self, value: f64, target: &Unit) -> Result<f64, MetronError> {
        if !self.is_compatible(target) {
            return Err(MetronError::IncompatibleDimensions {
                from: self.name.clone(),
                to: target.name.clone(),
                from_dim: self.dimension.to_string(),
                to_dim: target.dimension.to_string(),
            });
        }

        let exact = RBig::try_from(value).map_err(|_| MetronError::invalid_value(format!("{:?}", value)))?;
        let converted = target.from_si(&self.to_si(&exact));

        let result = match converted.to_f64() {
            Approximation::Exact(v) => v,
            Approximation::Inexact(v, _) => v,
        };
        if !result.is_finite() {
            return Err(MetronError::invalid_value(format!(
                "{:e} {} is out of range in {}",
                value, self.name, target.name
            )));
        }
        Ok(result)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meter() -> Unit {
        Unit::new("m", "meter", Dimension::LENGTH, int(1), "length")
    }

    fn kilometer() -> Unit {
        Unit::new("km", "kilometer", Dimension::LENGTH, int(1000), "length")
    }

    fn second() -> Unit {
        Unit::new("s", "second", Dimension::TIME, int(1), "time")
    }

    fn kelvin() -> Unit {
        Unit::new("K", "kelvin", Dimension::TEMPERATURE, int(1), "temperature")
    }

    fn celsius() -> Unit {
        Unit::with_offset("degC", "celsius", Dimension::TEMPERATURE, int(1), dec(27315, 2), "temperature")
    }

    #[test]
    fn test_factor_helpers() {
        assert_eq!(dec(3048, 4), ratio(381, 1250));
        assert_eq!(int(5), ratio(10, 2));
    }

    #[test]
    fn test_compatible_units() {
        assert!(meter().is_compatible(&kilometer()));
        assert!(!meter().is_compatible(&second()));
    }

    #[test]
    fn test_to_si_conversion() {
        assert_eq!(kilometer().to_si(&int(5)), int(5000));
        assert_eq!(celsius().to_si(&int(0)), dec(27315, 2));
    }

    #[test]
    fn test_from_si_conversion() {
        assert_eq!(kilometer().from_si(&int(5000)), int(5));
        assert_eq!(celsius().from_si(&dec(37315, 2)), int(100));
    }

    #[test]
    fn test_unit_conversion() {
        assert_eq!(meter().convert_to(5000.0, &kilometer()).unwrap(), 5.0);
        assert_eq!(kelvin().convert_to(0.0, &celsius()).unwrap(), -273.15);
    }

    #[test]
    fn test_incompatible_conversion() {
        let err = meter().convert_to(1.0, &second()).unwrap_err();
        assert!(matches!(err, MetronError::IncompatibleDimensions { .. }));
    }

    #[test]
    fn test_non_finite_value_rejected() {
        let err = meter().convert_to(f64::NAN, &kilometer()).unwrap_err();
        assert_eq!(err, MetronError::invalid_value("NaN"));
    }

    #[test]
    fn test_overflow_rejected_in_scientific_notation() {
        let err = kilometer().convert_to(1e308, &meter()).unwrap_err();
        assert_eq!(err, MetronError::invalid_value("1e308 kilometer is out of range in meter"));
        assert!(err.to_string().len() < 64);
    }
}
