//! Unit definitions - the built-in registry organized by category

use std::collections::HashMap;
use metron_core::MetronError;
use tracing::debug;
use crate::unit::{dec, int, ratio};
use crate::{Dimension, Unit};

/// Registry of all known units
///
/// Every unit resolves by symbol, canonical name or alias. `keys()` lists
/// all of those spellings, grouped per unit in registration order.
#[derive(Debug, Clone)]
pub struct UnitRegistry {
    units: Vec<Unit>,
    index: HashMap<String, usize>,
    keys: Vec<String>,
    /// Lowercased keys; `None` marks a fold shared by two different units
    folded: HashMap<String, Option<usize>>,
}

/// Accumulates the table and any inconsistencies found while building it
#[derive(Default)]
struct Builder {
    units: Vec<Unit>,
    index: HashMap<String, usize>,
    /// Spellings per unit, in insertion order
    spellings: Vec<Vec<String>>,
    problems: Vec<String>,
}

impl UnitRegistry {
    /// Build the registry from the built-in unit table
    pub fn try_new() -> Result<Self, MetronError> {
        let mut builder = Builder::default();
        builder.register_all_units();
        builder.finish()
    }

    /// Get a unit by symbol, name or alias
    ///
    /// Exact matches win. Otherwise the lookup is case-insensitive as long
    /// as the lowercased key belongs to a single unit.
    pub fn get(&self, symbol: &str) -> Option<&Unit> {
        let key = symbol.trim();
        if let Some(&idx) = self.index.get(key) {
            return Some(&self.units[idx]);
        }
        match self.folded.get(&key.to_lowercase()) {
            Some(Some(idx)) => Some(&self.units[*idx]),
            Some(None) => {
                debug!(unit = key, "ambiguous case-insensitive unit lookup");
                None
            }
            None => None,
        }
    }

    /// Every registered spelling: per unit its name, symbol, then aliases
    pub fn keys(&self) -> Vec<&str> {
        self.keys.iter().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl Builder {
    fn finish(self) -> Result<UnitRegistry, MetronError> {
        if !self.problems.is_empty() {
            return Err(MetronError::registry_unavailable(self.problems.join("; ")));
        }
        if self.units.is_empty() {
            return Err(MetronError::registry_unavailable("no units registered"));
        }

        let mut folded: HashMap<String, Option<usize>> = HashMap::new();
        for (key, &idx) in &self.index {
            folded
                .entry(key.to_lowercase())
                .and_modify(|slot| {
                    if *slot != Some(idx) {
                        *slot = None;
                    }
                })
                .or_insert(Some(idx));
        }

        let keys: Vec<String> = self.spellings.into_iter().flatten().collect();
        debug!(units = self.units.len(), keys = keys.len(), "unit registry built");
        Ok(UnitRegistry {
            units: self.units,
            index: self.index,
            keys,
            folded,
        })
    }

    fn register(&mut self, unit: Unit) {
        if unit.to_si_factor == int(0) {
            self.problems.push(format!("unit '{}' has a zero factor", unit.name));
            return;
        }
        let idx = self.units.len();
        let (symbol, name) = (unit.symbol.clone(), unit.name.clone());
        self.units.push(unit);
        self.spellings.push(Vec::new());
        self.insert_key(&name, idx);
        self.insert_key(&symbol, idx);
    }

    fn alias(&mut self, alias: &str, target: &str) {
        match self.index.get(target) {
            Some(&idx) => self.insert_key(alias, idx),
            None => self.problems.push(format!("alias '{}' targets unknown unit '{}'", alias, target)),
        }
    }

    fn insert_key(&mut self, key: &str, idx: usize) {
        match self.index.get(key) {
            Some(&existing) if existing != idx => self.problems.push(format!(
                "'{}' names both '{}' and '{}'",
                key, self.units[existing].name, self.units[idx].name
            )),
            Some(_) => {}
            None => {
                self.index.insert(key.to_string(), idx);
                self.spellings[idx].push(key.to_string());
            }
        }
    }

    fn register_all_units(&mut self) {
        self.register_length_units();
        self.register_mass_units();
        self.register_time_units();
        self.register_temperature_units();
        self.register_current_units();
        self.register_amount_units();
        self.register_luminosity_units();
        self.register_area_units();
        self.register_volume_units();
        self.register_velocity_units();
        self.register_acceleration_units();
        self.register_force_units();
        self.register_energy_units();
        self.register_power_units();
        self.register_pressure_units();
        self.register_frequency_units();
        self.register_electrical_units();
        self.register_information_units();
        self.register_angle_units();
    }

    fn register_length_units(&mut self) {
        let l = Dimension::LENGTH;
        self.register(Unit::new("m", "meter", l, int(1), "length"));
        self.register(Unit::new("km", "kilometer", l, int(1000), "length"));
        self.register(Unit::new("cm", "centimeter", l, dec(1, 2), "length"));
        self.register(Unit::new("mm", "millimeter", l, dec(1, 3), "length"));
        self.register(Unit::new("um", "micrometer", l, dec(1, 6), "length"));
        self.register(Unit::new("nm", "nanometer", l, dec(1, 9), "length"));
        self.register(Unit::new("pm", "picometer", l, dec(1, 12), "length"));

        // Imperial/US
        self.register(Unit::new("in", "inch", l, dec(254, 4), "length"));
        self.register(Unit::new("ft", "foot", l, dec(3048, 4), "length"));
        self.register(Unit::new("yd", "yard", l, dec(9144, 4), "length"));
        self.register(Unit::new("mi", "mile", l, dec(1_609_344, 3), "length"));
        self.register(Unit::new("nmi", "nautical mile", l, int(1852), "length"));

        // Astronomical
        self.register(Unit::new("au", "astronomical unit", l, int(149_597_870_700), "length"));
        self.register(Unit::new("ly", "light year", l, int(9_460_730_472_580_800), "length"));
        self.register(Unit::new("pc", "parsec", l, int(30_856_775_814_913_673), "length"));

        self.alias("meters", "m");
        self.alias("metre", "m");
        self.alias("metres", "m");
        self.alias("kilometers", "km");
        self.alias("kilometre", "km");
        self.alias("kilometres", "km");
        self.alias("centimeters", "cm");
        self.alias("millimeters", "mm");
        self.alias("inches", "in");
        self.alias("feet", "ft");
        self.alias("yards", "yd");
        self.alias("miles", "mi");
        self.alias("μm", "um");
        self.alias("micron", "um");
        self.alias("microns", "um");
    }

    fn register_mass_units(&mut self) {
        let m = Dimension::MASS;
        self.register(Unit::new("kg", "kilogram", m, int(1), "mass"));
        self.register(Unit::new("g", "gram", m, dec(1, 3), "mass"));
        self.register(Unit::new("mg", "milligram", m, dec(1, 6), "mass"));
        self.register(Unit::new("ug", "microgram", m, dec(1, 9), "mass"));
        self.register(Unit::new("t", "tonne", m, int(1000), "mass"));

        // Imperial/US
        self.register(Unit::new("lb", "pound", m, dec(45_359_237, 8), "mass"));
        self.register(Unit::new("oz", "ounce", m, dec(28_349_523_125, 12), "mass"));
        self.register(Unit::new("st", "stone", m, dec(635_029_318, 8), "mass"));
        self.register(Unit::new("ton", "short ton", m, dec(90_718_474, 5), "mass"));
        self.register(Unit::new("lton", "long ton", m, dec(10_160_469_088, 7), "mass"));

        self.register(Unit::new("ct", "carat", m, dec(2, 4), "mass"));
        self.register(Unit::new("gr", "grain", m, dec(6_479_891, 11), "mass"));

        self.alias("kilograms", "kg");
        self.alias("grams", "g");
        self.alias("milligrams", "mg");
        self.alias("pounds", "lb");
        self.alias("lbs", "lb");
        self.alias("ounces", "oz");
        self.alias("tonnes", "t");
        self.alias("metric ton", "t");
        self.alias("μg", "ug");
        self.alias("mcg", "ug");
    }

    fn register_time_units(&mut self) {
        let t = Dimension::TIME;
        self.register(Unit::new("s", "second", t, int(1), "time"));
        self.register(Unit::new("ms", "millisecond", t, dec(1, 3), "time"));
        self.register(Unit::new("us", "microsecond", t, dec(1, 6), "time"));
        self.register(Unit::new("ns", "nanosecond", t, dec(1, 9), "time"));
        self.register(Unit::new("min", "minute", t, int(60), "time"));
        self.register(Unit::new("h", "hour", t, int(3600), "time"));
        self.register(Unit::new("d", "day", t, int(86_400), "time"));
        self.register(Unit::new("wk", "week", t, int(604_800), "time"));
        // Gregorian averages
        self.register(Unit::new("mo", "month", t, int(2_629_746), "time"));
        self.register(Unit::new("yr", "year", t, int(31_556_952), "time"));

        self.alias("seconds", "s");
        self.alias("sec", "s");
        self.alias("milliseconds", "ms");
        self.alias("microseconds", "us");
        self.alias("μs", "us");
        self.alias("minutes", "min");
        self.alias("hours", "h");
        self.alias("hr", "h");
        self.alias("days", "d");
        self.alias("weeks", "wk");
        self.alias("months", "mo");
        self.alias("years", "yr");
        self.alias("y", "yr");
    }

    fn register_temperature_units(&mut self) {
        let theta = Dimension::TEMPERATURE;
        self.register(Unit::new("K", "kelvin", theta, int(1), "temperature"));

        // K = C + 273.15
        self.register(Unit::with_offset("degC", "celsius", theta, int(1), dec(27_315, 2), "temperature"));

        // K = (F + 459.67) * 5/9 = F * 5/9 + 45967/180
        self.register(Unit::with_offset("degF", "fahrenheit", theta, ratio(5, 9), ratio(45_967, 180), "temperature"));

        // K = R * 5/9
        self.register(Unit::new("degR", "rankine", theta, ratio(5, 9), "temperature"));

        self.alias("°C", "degC");
        self.alias("degree_Celsius", "degC");
        self.alias("°F", "degF");
        self.alias("degree_Fahrenheit", "degF");
        self.alias("°R", "degR");
    }

    fn register_current_units(&mut self) {
        let i = Dimension::CURRENT;
        self.register(Unit::new("A", "ampere", i, int(1), "current"));
        self.register(Unit::new("mA", "milliampere", i, dec(1, 3), "current"));
        self.register(Unit::new("uA", "microampere", i, dec(1, 6), "current"));
        self.register(Unit::new("kA", "kiloampere", i, int(1000), "current"));

        self.alias("amperes", "A");
        self.alias("amp", "A");
        self.alias("amps", "A");
        self.alias("μA", "uA");
    }

    fn register_amount_units(&mut self) {
        let n = Dimension::AMOUNT;
        self.register(Unit::new("mol", "mole", n, int(1), "amount"));
        self.register(Unit::new("mmol", "millimole", n, dec(1, 3), "amount"));
        self.register(Unit::new("umol", "micromole", n, dec(1, 6), "amount"));
        self.register(Unit::new("kmol", "kilomole", n, int(1000), "amount"));

        self.alias("moles", "mol");
        self.alias("μmol", "umol");
    }

    fn register_luminosity_units(&mut self) {
        // Steradians are dimensionless, so a lumen (cd·sr) measures like a candela
        self.register(Unit::new("cd", "candela", Dimension::LUMINOSITY, int(1), "luminosity"));
        self.register(Unit::new("lm", "lumen", Dimension::LUMINOSITY, int(1), "luminosity"));
        self.register(Unit::new("lx", "lux", Dimension::ILLUMINANCE, int(1), "illuminance"));
        self.register(Unit::new("fc", "footcandle", Dimension::ILLUMINANCE, dec(1_076_391_041_670_972, 14), "illuminance"));

        self.alias("lumens", "lm");
    }

    fn register_area_units(&mut self) {
        let a = Dimension::AREA;
        self.register(Unit::new("m2", "square meter", a, int(1), "area"));
        self.register(Unit::new("km2", "square kilometer", a, int(1_000_000), "area"));
        self.register(Unit::new("cm2", "square centimeter", a, dec(1, 4), "area"));
        self.register(Unit::new("mm2", "square millimeter", a, dec(1, 6), "area"));
        self.register(Unit::new("ha", "hectare", a, int(10_000), "area"));
        self.register(Unit::new("ac", "acre", a, dec(40_468_564_224, 7), "area"));
        self.register(Unit::new("ft2", "square foot", a, dec(9_290_304, 8), "area"));
        self.register(Unit::new("in2", "square inch", a, dec(64_516, 8), "area"));
        self.register(Unit::new("mi2", "square mile", a, dec(2_589_988_110_336, 6), "area"));
        self.register(Unit::new("yd2", "square yard", a, dec(83_612_736, 8), "area"));

        self.alias("m²", "m2");
        self.alias("sq m", "m2");
        self.alias("sqm", "m2");
        self.alias("km²", "km2");
        self.alias("cm²", "cm2");
        self.alias("mm²", "mm2");
        self.alias("ft²", "ft2");
        self.alias("sq ft", "ft2");
        self.alias("sqft", "ft2");
        self.alias("in²", "in2");
        self.alias("mi²", "mi2");
        self.alias("yd²", "yd2");
        self.alias("hectares", "ha");
        self.alias("acres", "ac");
    }

    fn register_volume_units(&mut self) {
        let v = Dimension::VOLUME;
        self.register(Unit::new("m3", "cubic meter", v, int(1), "volume"));
        self.register(Unit::new("L", "liter", v, dec(1, 3), "volume"));
        self.register(Unit::new("dL", "deciliter", v, dec(1, 4), "volume"));
        self.register(Unit::new("cL", "centiliter", v, dec(1, 5), "volume"));
        self.register(Unit::new("mL", "milliliter", v, dec(1, 6), "volume"));
        self.register(Unit::new("cm3", "cubic centimeter", v, dec(1, 6), "volume"));
        self.register(Unit::new("mm3", "cubic millimeter", v, dec(1, 9), "volume"));

        // US fluid
        self.register(Unit::new("gal", "gallon", v, dec(3_785_411_784, 12), "volume"));
        self.register(Unit::new("qt", "quart", v, dec(946_352_946, 12), "volume"));
        self.register(Unit::new("pt", "pint", v, dec(473_176_473, 12), "volume"));
        self.register(Unit::new("cup", "cup", v, dec(2_365_882_365, 13), "volume"));
        self.register(Unit::new("floz", "fluid ounce", v, dec(295_735_295_625, 16), "volume"));
        self.register(Unit::new("tbsp", "tablespoon", v, dec(1_478_676_478_125, 17), "volume"));
        self.register(Unit::new("tsp", "teaspoon", v, dec(492_892_159_375, 17), "volume"));

        // Imperial
        self.register(Unit::new("impgal", "imperial gallon", v, dec(454_609, 8), "volume"));
        self.register(Unit::new("imppt", "imperial pint", v, dec(56_826_125, 11), "volume"));

        self.register(Unit::new("ft3", "cubic foot", v, dec(28_316_846_592, 12), "volume"));
        self.register(Unit::new("in3", "cubic inch", v, dec(16_387_064, 12), "volume"));

        self.alias("m³", "m3");
        self.alias("liters", "L");
        self.alias("litre", "L");
        self.alias("litres", "L");
        self.alias("milliliters", "mL");
        self.alias("deciliters", "dL");
        self.alias("centiliters", "cL");
        self.alias("cc", "cm3");
        self.alias("cm³", "cm3");
        self.alias("mm³", "mm3");
        self.alias("gallons", "gal");
        self.alias("quarts", "qt");
        self.alias("pints", "pt");
        self.alias("cups", "cup");
        self.alias("ft³", "ft3");
        self.alias("in³", "in3");
    }

    fn register_velocity_units(&mut self) {
        let v = Dimension::VELOCITY;
        self.register(Unit::new("m/s", "meter per second", v, int(1), "velocity"));
        self.register(Unit::new("km/h", "kilometer per hour", v, ratio(5, 18), "velocity"));
        self.register(Unit::new("mph", "mile per hour", v, dec(44_704, 5), "velocity"));
        self.register(Unit::new("ft/s", "foot per second", v, dec(3048, 4), "velocity"));
        self.register(Unit::new("kn", "knot", v, ratio(463, 900), "velocity"));
        self.register(Unit::new("c", "speed of light", v, int(299_792_458), "velocity"));
        // At sea level
        self.register(Unit::new("mach", "mach", v, dec(34_029, 2), "velocity"));

        self.alias("kph", "km/h");
        self.alias("kmh", "km/h");
        self.alias("kmph", "km/h");
        self.alias("knots", "kn");
        self.alias("fps", "ft/s");
    }

    fn register_acceleration_units(&mut self) {
        let a = Dimension::ACCELERATION;
        self.register(Unit::new("m/s2", "meter per second squared", a, int(1), "acceleration"));
        self.register(Unit::new("g0", "standard gravity", a, dec(980_665, 5), "acceleration"));
        self.register(Unit::new("ft/s2", "foot per second squared", a, dec(3048, 4), "acceleration"));
        self.register(Unit::new("Gal", "galileo", a, dec(1, 2), "acceleration"));

        self.alias("m/s²", "m/s2");
        self.alias("ft/s²", "ft/s2");
        self.alias("gee", "g0");
    }

    fn register_force_units(&mut self) {
        let f = Dimension::FORCE;
        self.register(Unit::new("N", "newton", f, int(1), "force"));
        self.register(Unit::new("kN", "kilonewton", f, int(1000), "force"));
        self.register(Unit::new("mN", "millinewton", f, dec(1, 3), "force"));
        self.register(Unit::new("dyn", "dyne", f, dec(1, 5), "force"));
        self.register(Unit::new("lbf", "pound-force", f, dec(44_482_216_152_605, 13), "force"));
        self.register(Unit::new("kgf", "kilogram-force", f, dec(980_665, 5), "force"));

        self.alias("newtons", "N");
    }

    fn register_energy_units(&mut self) {
        let e = Dimension::ENERGY;
        self.register(Unit::new("J", "joule", e, int(1), "energy"));
        self.register(Unit::new("kJ", "kilojoule", e, int(1000), "energy"));
        self.register(Unit::new("MJ", "megajoule", e, int(1_000_000), "energy"));
        self.register(Unit::new("GJ", "gigajoule", e, int(1_000_000_000), "energy"));
        self.register(Unit::new("mJ", "millijoule", e, dec(1, 3), "energy"));
        self.register(Unit::new("cal", "calorie", e, dec(4184, 3), "energy"));
        self.register(Unit::new("kcal", "kilocalorie", e, int(4184), "energy"));
        self.register(Unit::new("Wh", "watt-hour", e, int(3600), "energy"));
        self.register(Unit::new("kWh", "kilowatt-hour", e, int(3_600_000), "energy"));
        self.register(Unit::new("eV", "electronvolt", e, dec(1_602_176_634, 28), "energy"));
        self.register(Unit::new("BTU", "british thermal unit", e, dec(105_505_585_262, 8), "energy"));
        self.register(Unit::new("erg", "erg", e, dec(1, 7), "energy"));
        self.register(Unit::new("ftlb", "foot-pound", e, dec(13_558_179_483_314, 13), "energy"));

        self.alias("joules", "J");
        self.alias("calories", "cal");
        self.alias("kilocalories", "kcal");
        self.alias("Cal", "kcal");
    }

    fn register_power_units(&mut self) {
        let p = Dimension::POWER;
        self.register(Unit::new("W", "watt", p, int(1), "power"));
        self.register(Unit::new("kW", "kilowatt", p, int(1000), "power"));
        self.register(Unit::new("MW", "megawatt", p, int(1_000_000), "power"));
        self.register(Unit::new("GW", "gigawatt", p, int(1_000_000_000), "power"));
        self.register(Unit::new("mW", "milliwatt", p, dec(1, 3), "power"));
        self.register(Unit::new("uW", "microwatt", p, dec(1, 6), "power"));
        self.register(Unit::new("hp", "horsepower", p, dec(745_699_872, 6), "power"));
        self.register(Unit::new("PS", "metric horsepower", p, dec(73_549_875, 5), "power"));

        self.alias("watts", "W");
        self.alias("μW", "uW");
    }

    fn register_pressure_units(&mut self) {
        let p = Dimension::PRESSURE;
        self.register(Unit::new("Pa", "pascal", p, int(1), "pressure"));
        self.register(Unit::new("kPa", "kilopascal", p, int(1000), "pressure"));
        self.register(Unit::new("MPa", "megapascal", p, int(1_000_000), "pressure"));
        self.register(Unit::new("hPa", "hectopascal", p, int(100), "pressure"));
        self.register(Unit::new("bar", "bar", p, int(100_000), "pressure"));
        self.register(Unit::new("mbar", "millibar", p, int(100), "pressure"));
        self.register(Unit::new("atm", "atmosphere", p, int(101_325), "pressure"));
        self.register(Unit::new("psi", "pound per square inch", p, dec(6_894_757_293_168, 9), "pressure"));
        self.register(Unit::new("mmHg", "millimeter of mercury", p, dec(133_322_387_415, 9), "pressure"));
        // 1/760 of a standard atmosphere
        self.register(Unit::new("torr", "torr", p, ratio(101_325, 760), "pressure"));
        self.register(Unit::new("inHg", "inch of mercury", p, dec(3_386_389, 3), "pressure"));

        self.alias("pascals", "Pa");
        self.alias("atmospheres", "atm");
    }

    fn register_frequency_units(&mut self) {
        let f = Dimension::FREQUENCY;
        self.register(Unit::new("Hz", "hertz", f, int(1), "frequency"));
        self.register(Unit::new("kHz", "kilohertz", f, int(1000), "frequency"));
        self.register(Unit::new("MHz", "megahertz", f, int(1_000_000), "frequency"));
        self.register(Unit::new("GHz", "gigahertz", f, int(1_000_000_000), "frequency"));
        self.register(Unit::new("THz", "terahertz", f, int(1_000_000_000_000), "frequency"));
        self.register(Unit::new("rpm", "revolutions per minute", f, ratio(1, 60), "frequency"));
    }

    fn register_electrical_units(&mut self) {
        // Voltage
        self.register(Unit::new("V", "volt", Dimension::VOLTAGE, int(1), "electrical"));
        self.register(Unit::new("mV", "millivolt", Dimension::VOLTAGE, dec(1, 3), "electrical"));
        self.register(Unit::new("kV", "kilovolt", Dimension::VOLTAGE, int(1000), "electrical"));
        self.register(Unit::new("MV", "megavolt", Dimension::VOLTAGE, int(1_000_000), "electrical"));

        // Resistance
        self.register(Unit::new("ohm", "ohm", Dimension::RESISTANCE, int(1), "electrical"));
        self.register(Unit::new("kohm", "kiloohm", Dimension::RESISTANCE, int(1000), "electrical"));
        self.register(Unit::new("Mohm", "megaohm", Dimension::RESISTANCE, int(1_000_000), "electrical"));
        self.register(Unit::new("mohm", "milliohm", Dimension::RESISTANCE, dec(1, 3), "electrical"));

        // Charge uses "Coul" so that "c" stays the speed of light
        self.register(Unit::new("Coul", "coulomb", Dimension::CHARGE, int(1), "electrical"));
        self.register(Unit::new("mCoul", "millicoulomb", Dimension::CHARGE, dec(1, 3), "electrical"));
        self.register(Unit::new("uCoul", "microcoulomb", Dimension::CHARGE, dec(1, 6), "electrical"));
        self.register(Unit::new("Ah", "ampere-hour", Dimension::CHARGE, int(3600), "electrical"));
        self.register(Unit::new("mAh", "milliampere-hour", Dimension::CHARGE, dec(36, 1), "electrical"));

        self.alias("volts", "V");
        self.alias("Ω", "ohm");
        self.alias("ohms", "ohm");
        self.alias("kΩ", "kohm");
        self.alias("MΩ", "Mohm");
        self.alias("mΩ", "mohm");
        self.alias("coulombs", "Coul");
        self.alias("mC", "mCoul");
        self.alias("uC", "uCoul");
        self.alias("μC", "uCoul");
    }

    fn register_information_units(&mut self) {
        let b = Dimension::INFORMATION;
        self.register(Unit::new("bit", "bit", b, int(1), "information"));
        self.register(Unit::new("byte", "byte", b, int(8), "information"));
        self.register(Unit::new("kB", "kilobyte", b, int(8000), "information"));
        self.register(Unit::new("MB", "megabyte", b, int(8_000_000), "information"));
        self.register(Unit::new("GB", "gigabyte", b, int(8_000_000_000), "information"));
        self.register(Unit::new("TB", "terabyte", b, int(8_000_000_000_000), "information"));

        // IEC binary
        self.register(Unit::new("KiB", "kibibyte", b, int(8 << 10), "information"));
        self.register(Unit::new("MiB", "mebibyte", b, int(8 << 20), "information"));
        self.register(Unit::new("GiB", "gibibyte", b, int(8 << 30), "information"));
        self.register(Unit::new("TiB", "tebibyte", b, int(8 << 40), "information"));

        let rate = Dimension::DATA_RATE;
        self.register(Unit::new("bps", "bit per second", rate, int(1), "data rate"));
        self.register(Unit::new("kbps", "kilobit per second", rate, int(1000), "data rate"));
        self.register(Unit::new("Mbps", "megabit per second", rate, int(1_000_000), "data rate"));
        self.register(Unit::new("Gbps", "gigabit per second", rate, int(1_000_000_000), "data rate"));

        self.alias("bits", "bit");
        self.alias("bytes", "byte");
        self.alias("B", "byte");
        self.alias("kilobytes", "kB");
        self.alias("megabytes", "MB");
        self.alias("gigabytes", "GB");
        self.alias("terabytes", "TB");
    }

    fn register_angle_units(&mut self) {
        // Angles and ratios are dimensionless
        let one = Dimension::DIMENSIONLESS;
        self.register(Unit::new("rad", "radian", one, int(1), "angle"));
        self.register(Unit::new("deg", "degree", one, dec(17_453_292_519_943_295, 18), "angle"));
        self.register(Unit::new("grad", "gradian", one, dec(15_707_963_267_948_967, 18), "angle"));
        self.register(Unit::new("arcmin", "arcminute", one, dec(2_908_882_086_657_216, 19), "angle"));
        self.register(Unit::new("arcsec", "arcsecond", one, dec(4_848_136_811_095_360, 21), "angle"));
        self.register(Unit::new("turn", "turn", one, dec(6_283_185_307_179_586, 15), "angle"));
        self.register(Unit::new("%", "percent", one, dec(1, 2), "ratio"));
        self.register(Unit::new("ppm", "parts per million", one, dec(1, 6), "ratio"));

        self.alias("radians", "rad");
        self.alias("degrees", "deg");
        self.alias("°", "deg");
        self.alias("gradians", "grad");
        self.alias("gon", "grad");
        self.alias("turns", "turn");
    }
}
