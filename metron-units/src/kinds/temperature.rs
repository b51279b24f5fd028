//! Temperature units - the only kind with affine conversions

use std::fmt;
use std::sync::LazyLock;

use metron_core::Rational;
use serde::{Deserialize, Serialize};

use crate::factor::ConversionFactor;
use crate::registry::UnitRegistry;
use crate::unit::UnitKind;

static REGISTRY: LazyLock<UnitRegistry<Temperature>> =
    LazyLock::new(|| UnitRegistry::build(table()).unwrap_or_else(|e| panic!("{e}")));

/// Units of temperature. Base unit: kelvin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Temperature {
    Celsius,
    Fahrenheit,
    Kelvin,
    Rankine,
}

impl Temperature {
    /// Unit name, e.g. "celsius"
    pub fn name(self) -> &'static str {
        match self {
            Temperature::Celsius => "celsius",
            Temperature::Fahrenheit => "fahrenheit",
            Temperature::Kelvin => "kelvin",
            Temperature::Rankine => "rankine",
        }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl UnitKind for Temperature {
    const NAME: &'static str = "temperature";

    const ALL: &'static [Temperature] = &[
        Temperature::Celsius,
        Temperature::Fahrenheit,
        Temperature::Kelvin,
        Temperature::Rankine,
    ];

    fn ordinal(self) -> usize {
        self as usize
    }

    fn registry() -> &'static UnitRegistry<Temperature> {
        &REGISTRY
    }
}

fn table() -> Vec<(Temperature, ConversionFactor)> {
    vec![
        // K = C + 273.15
        (
            Temperature::Celsius,
            ConversionFactor::integer(1).with_offset(Rational::from_ratio(27_315, 100)),
        ),
        // K = (F + 459.67) * 5/9
        (
            Temperature::Fahrenheit,
            ConversionFactor::ratio(5, 9).with_offset(Rational::from_ratio(45_967, 180)),
        ),
        (Temperature::Kelvin, ConversionFactor::base()),
        // K = R * 5/9
        (Temperature::Rankine, ConversionFactor::ratio(5, 9)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::convert;

    #[test]
    fn test_registry_covers_all_units() {
        assert_eq!(Temperature::ALL.len(), 4);
        assert_eq!(Temperature::registry().len(), Temperature::ALL.len());
        assert_eq!(Temperature::registry().base(), Temperature::Kelvin);
    }

    #[test]
    fn test_celsius_to_kelvin() {
        assert_eq!(
            convert(0.0, Temperature::Celsius, Temperature::Kelvin),
            273.15
        );
        assert_eq!(
            convert(100.0, Temperature::Celsius, Temperature::Kelvin),
            373.15
        );
        assert_eq!(
            convert(0.0, Temperature::Kelvin, Temperature::Celsius),
            -273.15
        );
    }

    #[test]
    fn test_fahrenheit_to_celsius() {
        let freezing = convert(32.0, Temperature::Fahrenheit, Temperature::Celsius);
        assert!(freezing.abs() < 1e-9, "32 F should be 0 C: {freezing}");

        let boiling = convert(212.0, Temperature::Fahrenheit, Temperature::Celsius);
        assert!((boiling - 100.0).abs() < 1e-9, "212 F should be 100 C: {boiling}");
    }

    #[test]
    fn test_fahrenheit_celsius_crossover() {
        // the scales agree at -40
        let c = convert(-40.0, Temperature::Fahrenheit, Temperature::Celsius);
        assert!((c + 40.0).abs() < 1e-9, "-40 F should be -40 C: {c}");
    }

    #[test]
    fn test_rankine_to_kelvin() {
        assert_eq!(convert(9.0, Temperature::Rankine, Temperature::Kelvin), 5.0);
        assert_eq!(convert(5.0, Temperature::Kelvin, Temperature::Rankine), 9.0);
    }

    #[test]
    fn test_affine_round_trip() {
        let start = 25.3;
        let f = convert(start, Temperature::Celsius, Temperature::Fahrenheit);
        let back = convert(f, Temperature::Fahrenheit, Temperature::Celsius);
        assert!(((back - start) / start).abs() < 1e-12);
    }

    #[test]
    fn test_offset_flags() {
        let reg = Temperature::registry();
        assert!(reg.factor(Temperature::Celsius).has_offset());
        assert!(reg.factor(Temperature::Fahrenheit).has_offset());
        assert!(!reg.factor(Temperature::Kelvin).has_offset());
        assert!(!reg.factor(Temperature::Rankine).has_offset());
    }
}
