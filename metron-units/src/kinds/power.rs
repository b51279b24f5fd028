//! Power units - watt across the SI prefixes

use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::factor::ConversionFactor;
use crate::registry::UnitRegistry;
use crate::unit::UnitKind;

static REGISTRY: LazyLock<UnitRegistry<Power>> =
    LazyLock::new(|| UnitRegistry::build(table()).unwrap_or_else(|e| panic!("{e}")));

/// Units of power. Base unit: watt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Power {
    Yottawatt,
    Zettawatt,
    Exawatt,
    Petawatt,
    Terawatt,
    Gigawatt,
    Megawatt,
    Kilowatt,
    Hectowatt,
    Decawatt,
    Watt,
    Deciwatt,
    Centiwatt,
    Milliwatt,
    Microwatt,
    Nanowatt,
    Picowatt,
    Femtowatt,
    Attowatt,
    Zeptowatt,
    Yoctowatt,
}

impl Power {
    /// Unit name, e.g. "kilowatt"
    pub fn name(self) -> &'static str {
        match self {
            Power::Yottawatt => "yottawatt",
            Power::Zettawatt => "zettawatt",
            Power::Exawatt => "exawatt",
            Power::Petawatt => "petawatt",
            Power::Terawatt => "terawatt",
            Power::Gigawatt => "gigawatt",
            Power::Megawatt => "megawatt",
            Power::Kilowatt => "kilowatt",
            Power::Hectowatt => "hectowatt",
            Power::Decawatt => "decawatt",
            Power::Watt => "watt",
            Power::Deciwatt => "deciwatt",
            Power::Centiwatt => "centiwatt",
            Power::Milliwatt => "milliwatt",
            Power::Microwatt => "microwatt",
            Power::Nanowatt => "nanowatt",
            Power::Picowatt => "picowatt",
            Power::Femtowatt => "femtowatt",
            Power::Attowatt => "attowatt",
            Power::Zeptowatt => "zeptowatt",
            Power::Yoctowatt => "yoctowatt",
        }
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl UnitKind for Power {
    const NAME: &'static str = "power";

    const ALL: &'static [Power] = &[
        Power::Yottawatt,
        Power::Zettawatt,
        Power::Exawatt,
        Power::Petawatt,
        Power::Terawatt,
        Power::Gigawatt,
        Power::Megawatt,
        Power::Kilowatt,
        Power::Hectowatt,
        Power::Decawatt,
        Power::Watt,
        Power::Deciwatt,
        Power::Centiwatt,
        Power::Milliwatt,
        Power::Microwatt,
        Power::Nanowatt,
        Power::Picowatt,
        Power::Femtowatt,
        Power::Attowatt,
        Power::Zeptowatt,
        Power::Yoctowatt,
    ];

    fn ordinal(self) -> usize {
        self as usize
    }

    fn registry() -> &'static UnitRegistry<Power> {
        &REGISTRY
    }
}

fn table() -> Vec<(Power, ConversionFactor)> {
    vec![
        (Power::Yottawatt, ConversionFactor::pow10(24)),
        (Power::Zettawatt, ConversionFactor::pow10(21)),
        (Power::Exawatt, ConversionFactor::pow10(18)),
        (Power::Petawatt, ConversionFactor::pow10(15)),
        (Power::Terawatt, ConversionFactor::pow10(12)),
        (Power::Gigawatt, ConversionFactor::pow10(9)),
        (Power::Megawatt, ConversionFactor::pow10(6)),
        (Power::Kilowatt, ConversionFactor::pow10(3)),
        (Power::Hectowatt, ConversionFactor::pow10(2)),
        (Power::Decawatt, ConversionFactor::pow10(1)),
        (Power::Watt, ConversionFactor::base()),
        (Power::Deciwatt, ConversionFactor::pow10(-1)),
        (Power::Centiwatt, ConversionFactor::pow10(-2)),
        (Power::Milliwatt, ConversionFactor::pow10(-3)),
        (Power::Microwatt, ConversionFactor::pow10(-6)),
        (Power::Nanowatt, ConversionFactor::pow10(-9)),
        (Power::Picowatt, ConversionFactor::pow10(-12)),
        (Power::Femtowatt, ConversionFactor::pow10(-15)),
        (Power::Attowatt, ConversionFactor::pow10(-18)),
        (Power::Zeptowatt, ConversionFactor::pow10(-21)),
        (Power::Yoctowatt, ConversionFactor::pow10(-24)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::convert;

    #[test]
    fn test_registry_covers_all_units() {
        assert_eq!(Power::ALL.len(), 21);
        assert_eq!(Power::registry().len(), Power::ALL.len());
        assert_eq!(Power::registry().base(), Power::Watt);
    }

    #[test]
    fn test_kilowatt_to_watt() {
        assert_eq!(convert(1.0, Power::Kilowatt, Power::Watt), 1000.0);
        assert_eq!(convert(5.0, Power::Kilowatt, Power::Watt), 5000.0);
    }

    #[test]
    fn test_watt_to_milliwatt() {
        assert_eq!(convert(1.0, Power::Watt, Power::Milliwatt), 1000.0);
        assert_eq!(convert(1000.0, Power::Milliwatt, Power::Watt), 1.0);
    }

    #[test]
    fn test_gigawatt_to_megawatt() {
        assert_eq!(convert(1.0, Power::Gigawatt, Power::Megawatt), 1000.0);
    }

    #[test]
    fn test_extreme_ratio_does_not_collapse() {
        // yocto to yotta spans 48 orders of magnitude
        let up = convert(1e48, Power::Yoctowatt, Power::Yottawatt);
        assert!((up - 1.0).abs() < 1e-12, "1e48 yW should be ~1 YW: {up}");

        let tiny = convert(1e24, Power::Yoctowatt, Power::Yottawatt);
        assert!(tiny > 0.0, "must not collapse to zero");
        assert!(((tiny - 1e-24) / 1e-24).abs() < 1e-12);

        let down = convert(1.0, Power::Yottawatt, Power::Yoctowatt);
        assert!(((down - 1e48) / 1e48).abs() < 1e-12);
    }
}
