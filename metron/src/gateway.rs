//! Conversion gateway
//!
//! The single intermediary between a presentation layer and the unit
//! catalog. Holds the catalog behind an `Arc`; it is built once and never
//! mutated, so one gateway can serve every request of a process.

use std::sync::Arc;
use metron_core::{ConversionRequest, ConversionResult, MetronError, UnitCatalog, UnitInfo, UnitSymbol};
use metron_units::UnitRegistry;
use tracing::{debug, warn};

/// Lists units, finds compatible units, and converts values
#[derive(Debug)]
pub struct Gateway<C: UnitCatalog = UnitRegistry> {
    catalog: Arc<C>,
}

impl Gateway<UnitRegistry> {
    /// Gateway over the built-in unit registry
    pub fn with_default_registry() -> Result<Self, MetronError> {
        let registry = UnitRegistry::try_new()?;
        debug!(units = registry.len(), "gateway ready");
        Ok(Self::new(registry))
    }
}

impl<C: UnitCatalog> Gateway<C> {
    pub fn new(catalog: C) -> Self {
        Self::from_shared(Arc::new(catalog))
    }

    pub fn from_shared(catalog: Arc<C>) -> Self {
        Gateway { catalog }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Every known unit spelling, in the catalog's enumeration order
    pub fn list_units(&self) -> Vec<UnitSymbol> {
        self.catalog.units()
    }

    /// Every unit sharing `unit`'s dimensionality, `unit` itself included
    ///
    /// A spelling that only resolves case-insensitively is appended as given.
    /// An unresolved unit is an `UnknownUnit` error, never an empty list.
    pub fn list_compatible_units(&self, unit: &str) -> Result<Vec<UnitSymbol>, MetronError> {
        let dimension = self.dimension_of(unit)?;
        let mut compatible: Vec<UnitSymbol> = self
            .catalog
            .units()
            .into_iter()
            .filter(|u| self.catalog.dimensionality(u.as_str()).as_ref() == Some(&dimension))
            .collect();

        let unit = unit.trim();
        if !compatible.iter().any(|u| u == unit) {
            compatible.push(UnitSymbol::from(unit));
        }
        debug!(unit, %dimension, count = compatible.len(), "listed compatible units");
        Ok(compatible)
    }

    /// Like `list_compatible_units`, but an unresolved unit is logged and
    /// yields an empty list
    pub fn compatible_units_or_empty(&self, unit: &str) -> Vec<UnitSymbol> {
        match self.list_compatible_units(unit) {
            Ok(units) => units,
            Err(e) => {
                warn!(unit, error = %e, "no compatible units");
                Vec::new()
            }
        }
    }

    /// Convert a value between two units of equal dimensionality
    pub fn convert(&self, req: &ConversionRequest) -> Result<ConversionResult, MetronError> {
        if !req.value.is_finite() {
            return Err(MetronError::invalid_value(format!("{:?}", req.value)));
        }

        let from_dim = self.dimension_of(req.from_unit.as_str())?;
        let to_dim = self.dimension_of(req.to_unit.as_str())?;
        if from_dim != to_dim {
            return Err(MetronError::IncompatibleDimensions {
                from: req.from_unit.to_string(),
                to: req.to_unit.to_string(),
                from_dim: from_dim.to_string(),
                to_dim: to_dim.to_string(),
            });
        }

        let value = self
            .catalog
            .convert(req.value, req.from_unit.as_str(), req.to_unit.as_str())?;
        debug!(
            value = req.value,
            from = %req.from_unit,
            to = %req.to_unit,
            result = value,
            "converted"
        );

        Ok(ConversionResult {
            value,
            unit: req.to_unit.clone(),
        })
    }

    /// Whether two units can be converted into each other
    pub fn is_compatible(&self, a: &str, b: &str) -> Result<bool, MetronError> {
        Ok(self.dimension_of(a)? == self.dimension_of(b)?)
    }

    pub fn describe_unit(&self, unit: &str) -> Result<UnitInfo, MetronError> {
        self.catalog
            .describe(unit)
            .ok_or_else(|| MetronError::unknown_unit(unit.trim()))
    }

    fn dimension_of(&self, unit: &str) -> Result<C::Dimensionality, MetronError> {
        self.catalog
            .dimensionality(unit)
            .ok_or_else(|| MetronError::unknown_unit(unit.trim()))
    }
}

impl<C: UnitCatalog> Clone for Gateway<C> {
    fn clone(&self) -> Self {
        Gateway {
            catalog: Arc::clone(&self.catalog),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn gateway() -> Gateway {
        Gateway::with_default_registry().unwrap()
    }

    #[test]
    fn test_list_units_non_empty() {
        let units = gateway().list_units();
        assert!(!units.is_empty());
        assert!(units.iter().any(|u| u == "meter"));
    }

    #[test]
    fn test_every_unit_is_compatible_with_itself() {
        let gw = gateway();
        for unit in gw.list_units() {
            let compatible = gw.list_compatible_units(unit.as_str()).unwrap();
            assert!(compatible.contains(&unit), "{} missing from its own list", unit);
        }
    }

    #[test]
    fn test_compatible_list_contains_any_spelling_of_unit() {
        let gw = gateway();
        for unit in ["km", "kilometers", "kg", "lbs", "degC", "mW", "MW"] {
            let compatible = gw.list_compatible_units(unit).unwrap();
            assert!(compatible.iter().any(|u| u == unit), "{} missing from its own list", unit);
        }

        // Membership by target spelling, symbols and aliases included
        let from_km = gw.list_compatible_units("km").unwrap();
        for target in ["mi", "miles", "ft", "meter"] {
            assert!(from_km.iter().any(|u| u == target), "{} missing", target);
        }
        assert!(!from_km.iter().any(|u| u == "s"));
    }

    #[test]
    fn test_compatible_list_keeps_folded_spelling() {
        let gw = gateway();
        let compatible = gw.list_compatible_units("  KM ").unwrap();
        assert_eq!(compatible.last().unwrap(), "KM");
        assert_eq!(compatible.iter().filter(|u| *u == "KM").count(), 1);
    }

    #[test]
    fn test_compatible_units_share_dimension() {
        let gw = gateway();
        let compatible = gw.list_compatible_units("kilometer").unwrap();
        assert!(compatible.iter().any(|u| u == "mile"));
        assert!(compatible.iter().any(|u| u == "parsec"));
        assert!(!compatible.iter().any(|u| u == "second"));
        assert!(!compatible.iter().any(|u| u == "square meter"));
    }

    #[test]
    fn test_kilometer_to_mile() {
        let result = gateway()
            .convert(&ConversionRequest::new(5.0, "kilometer", "mile"))
            .unwrap();
        assert!((result.value - 3.10686).abs() < 1e-4);
        assert_eq!(result.unit, "mile");
    }

    #[test]
    fn test_celsius_to_fahrenheit_is_exact() {
        let result = gateway()
            .convert(&ConversionRequest::new(100.0, "celsius", "fahrenheit"))
            .unwrap();
        assert_eq!(result.value, 212.0);
    }

    #[test]
    fn test_result_keeps_caller_spelling() {
        let result = gateway()
            .convert(&ConversionRequest::new(1.0, "KM", "m"))
            .unwrap();
        assert_eq!(result.value, 1000.0);
        assert_eq!(result.unit, "m");
    }

    #[test]
    fn test_incompatible_dimensions() {
        let err = gateway()
            .convert(&ConversionRequest::new(1.0, "meter", "second"))
            .unwrap_err();
        assert_eq!(
            err,
            MetronError::IncompatibleDimensions {
                from: "meter".to_string(),
                to: "second".to_string(),
                from_dim: "L".to_string(),
                to_dim: "T".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_unit() {
        let gw = gateway();
        let err = gw
            .convert(&ConversionRequest::new(1.0, "bogusunit", "meter"))
            .unwrap_err();
        assert_eq!(err, MetronError::unknown_unit("bogusunit"));

        let err = gw
            .convert(&ConversionRequest::new(1.0, "meter", "bogusunit"))
            .unwrap_err();
        assert_eq!(err, MetronError::unknown_unit("bogusunit"));
    }

    #[test]
    fn test_unknown_unit_compatible_listing() {
        let gw = gateway();
        assert!(gw.compatible_units_or_empty("bogusunit").is_empty());
        assert_eq!(
            gw.list_compatible_units("bogusunit").unwrap_err(),
            MetronError::unknown_unit("bogusunit")
        );
    }

    #[test]
    fn test_invalid_value() {
        let gw = gateway();
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = gw
                .convert(&ConversionRequest::new(value, "meter", "foot"))
                .unwrap_err();
            assert!(matches!(err, MetronError::InvalidValue { .. }));
        }
    }

    #[test]
    fn test_invalid_value_checked_before_units() {
        let err = gateway()
            .convert(&ConversionRequest::new(f64::NAN, "bogusunit", "meter"))
            .unwrap_err();
        assert!(matches!(err, MetronError::InvalidValue { .. }));
    }

    #[test]
    fn test_is_compatible() {
        let gw = gateway();
        assert!(gw.is_compatible("km/h", "knot").unwrap());
        assert!(!gw.is_compatible("Hz", "m/s").unwrap());
        assert!(gw.is_compatible("Hz", "bogusunit").is_err());
    }

    #[test]
    fn test_describe_unit() {
        let gw = gateway();
        assert_eq!(gw.describe_unit("psi").unwrap().category, "pressure");
        assert_eq!(gw.describe_unit("lbs").unwrap().name, "pound");
        assert!(gw.describe_unit("bogusunit").is_err());
    }

    #[test]
    fn test_out_of_range_value_is_reported_compactly() {
        let err = gateway()
            .convert(&ConversionRequest::new(1e308, "kilometer", "meter"))
            .unwrap_err();
        assert_eq!(
            err,
            MetronError::invalid_value("1e308 kilometer is out of range in meter")
        );
    }

    #[test]
    fn test_clones_share_catalog() {
        let gw = gateway();
        let other = gw.clone();
        assert!(std::ptr::eq(gw.catalog(), other.catalog()));
    }

    fn compatible_pairs() -> Vec<(UnitSymbol, UnitSymbol)> {
        let gw = gateway();
        let mut pairs = Vec::new();
        for from in gw.list_units() {
            for to in gw.list_compatible_units(from.as_str()).unwrap() {
                pairs.push((from.clone(), to));
            }
        }
        pairs
    }

    proptest! {
        #[test]
        fn prop_round_trip(
            (from, to) in proptest::sample::select(compatible_pairs()),
            x in -1.0e6f64..1.0e6,
        ) {
            let gw = gateway();
            let req = ConversionRequest::new(x, from, to);
            let there = gw.convert(&req).unwrap();
            let back = gw.convert(&req.reversed(there.value)).unwrap();
            let tolerance = 1e-9 * x.abs().max(1.0);
            prop_assert!((back.value - x).abs() <= tolerance, "{} -> {} -> {}", x, there.value, back.value);
        }

        #[test]
        fn prop_incompatible_never_converts(
            a in proptest::sample::select(gateway().list_units()),
            b in proptest::sample::select(gateway().list_units()),
        ) {
            let gw = gateway();
            let compatible = gw.is_compatible(a.as_str(), b.as_str()).unwrap();
            let outcome = gw.convert(&ConversionRequest::new(1.0, a, b));
            if compatible {
                prop_assert!(outcome.is_ok());
            } else {
                let is_incompatible = matches!(outcome, Err(MetronError::IncompatibleDimensions { .. }));
                prop_assert!(is_incompatible);
            }
        }
    }
}
