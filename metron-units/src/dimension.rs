//! Dimension signatures
//!
//! Each unit has dimensions represented as an 8-element exponent vector:
//! [length, mass, time, current, temperature, amount, luminosity, information]
//!
//! Dimensions are only ever compared; there is no dimension arithmetic.

use std::fmt;

/// Represents the dimensions of a unit as exponents of the base dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimension {
    /// [length, mass, time, current, temperature, amount, luminosity, information]
    pub exponents: [i8; 8],
}

impl Dimension {
    /// Dimensionless quantity (all exponents zero)
    pub const DIMENSIONLESS: Dimension = Dimension::new([0, 0, 0, 0, 0, 0, 0, 0]);

    /// Length dimension [L]
    pub const LENGTH: Dimension = Dimension::new([1, 0, 0, 0, 0, 0, 0, 0]);

    /// Mass dimension [M]
    pub const MASS: Dimension = Dimension::new([0, 1, 0, 0, 0, 0, 0, 0]);

    /// Time dimension [T]
    pub const TIME: Dimension = Dimension::new([0, 0, 1, 0, 0, 0, 0, 0]);

    /// Electric current dimension [I]
    pub const CURRENT: Dimension = Dimension::new([0, 0, 0, 1, 0, 0, 0, 0]);

    /// Temperature dimension [Θ]
    pub const TEMPERATURE: Dimension = Dimension::new([0, 0, 0, 0, 1, 0, 0, 0]);

    /// Amount of substance dimension [N]
    pub const AMOUNT: Dimension = Dimension::new([0, 0, 0, 0, 0, 1, 0, 0]);

    /// Luminous intensity dimension [J]
    pub const LUMINOSITY: Dimension = Dimension::new([0, 0, 0, 0, 0, 0, 1, 0]);

    /// Information dimension [B]
    pub const INFORMATION: Dimension = Dimension::new([0, 0, 0, 0, 0, 0, 0, 1]);

    /// Illuminance [J L^-2]
    pub const ILLUMINANCE: Dimension = Dimension::new([-2, 0, 0, 0, 0, 0, 1, 0]);

    /// Area [L^2]
    pub const AREA: Dimension = Dimension::new([2, 0, 0, 0, 0, 0, 0, 0]);

    /// Volume [L^3]
    pub const VOLUME: Dimension = Dimension::new([3, 0, 0, 0, 0, 0, 0, 0]);

    /// Velocity [L T^-1]
    pub const VELOCITY: Dimension = Dimension::new([1, 0, -1, 0, 0, 0, 0, 0]);

    /// Acceleration [L T^-2]
    pub const ACCELERATION: Dimension = Dimension::new([1, 0, -2, 0, 0, 0, 0, 0]);

    /// Force [M L T^-2]
    pub const FORCE: Dimension = Dimension::new([1, 1, -2, 0, 0, 0, 0, 0]);

    /// Energy [M L^2 T^-2]
    pub const ENERGY: Dimension = Dimension::new([2, 1, -2, 0, 0, 0, 0, 0]);

    /// Power [M L^2 T^-3]
    pub const POWER: Dimension = Dimension::new([2, 1, -3, 0, 0, 0, 0, 0]);

    /// Pressure [M L^-1 T^-2]
    pub const PRESSURE: Dimension = Dimension::new([-1, 1, -2, 0, 0, 0, 0, 0]);

    /// Frequency [T^-1]
    pub const FREQUENCY: Dimension = Dimension::new([0, 0, -1, 0, 0, 0, 0, 0]);

    /// Electric charge [I T]
    pub const CHARGE: Dimension = Dimension::new([0, 0, 1, 1, 0, 0, 0, 0]);

    /// Voltage [M L^2 T^-3 I^-1]
    pub const VOLTAGE: Dimension = Dimension::new([2, 1, -3, -1, 0, 0, 0, 0]);

    /// Resistance [M L^2 T^-3 I^-2]
    pub const RESISTANCE: Dimension = Dimension::new([2, 1, -3, -2, 0, 0, 0, 0]);

    /// Data rate [B T^-1]
    pub const DATA_RATE: Dimension = Dimension::new([0, 0, -1, 0, 0, 0, 0, 1]);

    pub const fn new(exponents: [i8; 8]) -> Self {
        Dimension { exponents }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = ["L", "M", "T", "I", "Θ", "N", "J", "B"];
        let mut parts = Vec::new();

        for (i, &exp) in self.exponents.iter().enumerate() {
            match exp {
                0 => {}
                1 => parts.push(names[i].to_string()),
                _ => parts.push(format!("{}^{}", names[i], exp)),
            }
        }

        if parts.is_empty() {
            write!(f, "1")
        } else {
            write!(f, "{}", parts.join(" "))
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::DIMENSIONLESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dimensionless() {
        assert_eq!(Dimension::default(), Dimension::DIMENSIONLESS);
        assert_eq!(Dimension::default().to_string(), "1");
    }

    #[test]
    fn test_equality_is_exponentwise() {
        assert_eq!(Dimension::new([1, 0, -1, 0, 0, 0, 0, 0]), Dimension::VELOCITY);
        assert_ne!(Dimension::FREQUENCY, Dimension::VELOCITY);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Dimension::DIMENSIONLESS), "1");
        assert_eq!(format!("{}", Dimension::LENGTH), "L");
        assert_eq!(format!("{}", Dimension::VELOCITY), "L T^-1");
        assert_eq!(format!("{}", Dimension::DATA_RATE), "T^-1 B");
    }
}
