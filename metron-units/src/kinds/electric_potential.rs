//! Electric potential units - volt across the SI prefixes

use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::factor::ConversionFactor;
use crate::registry::UnitRegistry;
use crate::unit::UnitKind;

static REGISTRY: LazyLock<UnitRegistry<ElectricPotential>> =
    LazyLock::new(|| UnitRegistry::build(table()).unwrap_or_else(|e| panic!("{e}")));

/// Units of electric potential. Base unit: volt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElectricPotential {
    Yottavolt,
    Zettavolt,
    Exavolt,
    Petavolt,
    Teravolt,
    Gigavolt,
    Megavolt,
    Kilovolt,
    Hectovolt,
    Decavolt,
    Volt,
    Decivolt,
    Centivolt,
    Millivolt,
    Microvolt,
    Nanovolt,
    Picovolt,
    Femtovolt,
    Attovolt,
    Zeptovolt,
    Yoctovolt,
}

impl ElectricPotential {
    /// Unit name, e.g. "millivolt"
    pub fn name(self) -> &'static str {
        match self {
            ElectricPotential::Yottavolt => "yottavolt",
            ElectricPotential::Zettavolt => "zettavolt",
            ElectricPotential::Exavolt => "exavolt",
            ElectricPotential::Petavolt => "petavolt",
            ElectricPotential::Teravolt => "teravolt",
            ElectricPotential::Gigavolt => "gigavolt",
            ElectricPotential::Megavolt => "megavolt",
            ElectricPotential::Kilovolt => "kilovolt",
            ElectricPotential::Hectovolt => "hectovolt",
            ElectricPotential::Decavolt => "decavolt",
            ElectricPotential::Volt => "volt",
            ElectricPotential::Decivolt => "decivolt",
            ElectricPotential::Centivolt => "centivolt",
            ElectricPotential::Millivolt => "millivolt",
            ElectricPotential::Microvolt => "microvolt",
            ElectricPotential::Nanovolt => "nanovolt",
            ElectricPotential::Picovolt => "picovolt",
            ElectricPotential::Femtovolt => "femtovolt",
            ElectricPotential::Attovolt => "attovolt",
            ElectricPotential::Zeptovolt => "zeptovolt",
            ElectricPotential::Yoctovolt => "yoctovolt",
        }
    }
}

impl fmt::Display for ElectricPotential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl UnitKind for ElectricPotential {
    const NAME: &'static str = "electric potential";

    const ALL: &'static [ElectricPotential] = &[
        ElectricPotential::Yottavolt,
        ElectricPotential::Zettavolt,
        ElectricPotential::Exavolt,
        ElectricPotential::Petavolt,
        ElectricPotential::Teravolt,
        ElectricPotential::Gigavolt,
        ElectricPotential::Megavolt,
        ElectricPotential::Kilovolt,
        ElectricPotential::Hectovolt,
        ElectricPotential::Decavolt,
        ElectricPotential::Volt,
        ElectricPotential::Decivolt,
        ElectricPotential::Centivolt,
        ElectricPotential::Millivolt,
        ElectricPotential::Microvolt,
        ElectricPotential::Nanovolt,
        ElectricPotential::Picovolt,
        ElectricPotential::Femtovolt,
        ElectricPotential::Attovolt,
        ElectricPotential::Zeptovolt,
        ElectricPotential::Yoctovolt,
    ];

    fn ordinal(self) -> usize {
        self as usize
    }

    fn registry() -> &'static UnitRegistry<ElectricPotential> {
        &REGISTRY
    }
}

fn table() -> Vec<(ElectricPotential, ConversionFactor)> {
    vec![
        (ElectricPotential::Yottavolt, ConversionFactor::pow10(24)),
        (ElectricPotential::Zettavolt, ConversionFactor::pow10(21)),
        (ElectricPotential::Exavolt, ConversionFactor::pow10(18)),
        (ElectricPotential::Petavolt, ConversionFactor::pow10(15)),
        (ElectricPotential::Teravolt, ConversionFactor::pow10(12)),
        (ElectricPotential::Gigavolt, ConversionFactor::pow10(9)),
        (ElectricPotential::Megavolt, ConversionFactor::pow10(6)),
        (ElectricPotential::Kilovolt, ConversionFactor::pow10(3)),
        (ElectricPotential::Hectovolt, ConversionFactor::pow10(2)),
        (ElectricPotential::Decavolt, ConversionFactor::pow10(1)),
        (ElectricPotential::Volt, ConversionFactor::base()),
        (ElectricPotential::Decivolt, ConversionFactor::pow10(-1)),
        (ElectricPotential::Centivolt, ConversionFactor::pow10(-2)),
        (ElectricPotential::Millivolt, ConversionFactor::pow10(-3)),
        (ElectricPotential::Microvolt, ConversionFactor::pow10(-6)),
        (ElectricPotential::Nanovolt, ConversionFactor::pow10(-9)),
        (ElectricPotential::Picovolt, ConversionFactor::pow10(-12)),
        (ElectricPotential::Femtovolt, ConversionFactor::pow10(-15)),
        (ElectricPotential::Attovolt, ConversionFactor::pow10(-18)),
        (ElectricPotential::Zeptovolt, ConversionFactor::pow10(-21)),
        (ElectricPotential::Yoctovolt, ConversionFactor::pow10(-24)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::convert;

    #[test]
    fn test_registry_covers_all_units() {
        assert_eq!(ElectricPotential::ALL.len(), 21);
        assert_eq!(ElectricPotential::registry().len(), ElectricPotential::ALL.len());
        assert_eq!(ElectricPotential::registry().base(), ElectricPotential::Volt);
    }

    #[test]
    fn test_kilovolt_to_volt() {
        assert_eq!(
            convert(1.0, ElectricPotential::Kilovolt, ElectricPotential::Volt),
            1000.0
        );
    }

    #[test]
    fn test_millivolt_to_volt() {
        assert_eq!(
            convert(1.0, ElectricPotential::Millivolt, ElectricPotential::Volt),
            0.001
        );
        assert_eq!(
            convert(1500.0, ElectricPotential::Millivolt, ElectricPotential::Volt),
            1.5
        );
    }
}
