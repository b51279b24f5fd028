//! Frequency units - hertz across the SI prefixes

use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::factor::ConversionFactor;
use crate::registry::UnitRegistry;
use crate::unit::UnitKind;

static REGISTRY: LazyLock<UnitRegistry<Frequency>> =
    LazyLock::new(|| UnitRegistry::build(table()).unwrap_or_else(|e| panic!("{e}")));

/// Units of frequency. Base unit: hertz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frequency {
    Yottahertz,
    Zettahertz,
    Exahertz,
    Petahertz,
    Terahertz,
    Gigahertz,
    Megahertz,
    Kilohertz,
    Hectohertz,
    Decahertz,
    Hertz,
    Decihertz,
    Centihertz,
    Millihertz,
    Microhertz,
    Nanohertz,
    Picohertz,
    Femtohertz,
    Attohertz,
    Zeptohertz,
    Yoctohertz,
}

impl Frequency {
    /// Unit name, e.g. "megahertz"
    pub fn name(self) -> &'static str {
        match self {
            Frequency::Yottahertz => "yottahertz",
            Frequency::Zettahertz => "zettahertz",
            Frequency::Exahertz => "exahertz",
            Frequency::Petahertz => "petahertz",
            Frequency::Terahertz => "terahertz",
            Frequency::Gigahertz => "gigahertz",
            Frequency::Megahertz => "megahertz",
            Frequency::Kilohertz => "kilohertz",
            Frequency::Hectohertz => "hectohertz",
            Frequency::Decahertz => "decahertz",
            Frequency::Hertz => "hertz",
            Frequency::Decihertz => "decihertz",
            Frequency::Centihertz => "centihertz",
            Frequency::Millihertz => "millihertz",
            Frequency::Microhertz => "microhertz",
            Frequency::Nanohertz => "nanohertz",
            Frequency::Picohertz => "picohertz",
            Frequency::Femtohertz => "femtohertz",
            Frequency::Attohertz => "attohertz",
            Frequency::Zeptohertz => "zeptohertz",
            Frequency::Yoctohertz => "yoctohertz",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl UnitKind for Frequency {
    const NAME: &'static str = "frequency";

    const ALL: &'static [Frequency] = &[
        Frequency::Yottahertz,
        Frequency::Zettahertz,
        Frequency::Exahertz,
        Frequency::Petahertz,
        Frequency::Terahertz,
        Frequency::Gigahertz,
        Frequency::Megahertz,
        Frequency::Kilohertz,
        Frequency::Hectohertz,
        Frequency::Decahertz,
        Frequency::Hertz,
        Frequency::Decihertz,
        Frequency::Centihertz,
        Frequency::Millihertz,
        Frequency::Microhertz,
        Frequency::Nanohertz,
        Frequency::Picohertz,
        Frequency::Femtohertz,
        Frequency::Attohertz,
        Frequency::Zeptohertz,
        Frequency::Yoctohertz,
    ];

    fn ordinal(self) -> usize {
        self as usize
    }

    fn registry() -> &'static UnitRegistry<Frequency> {
        &REGISTRY
    }
}

fn table() -> Vec<(Frequency, ConversionFactor)> {
    vec![
        (Frequency::Yottahertz, ConversionFactor::pow10(24)),
        (Frequency::Zettahertz, ConversionFactor::pow10(21)),
        (Frequency::Exahertz, ConversionFactor::pow10(18)),
        (Frequency::Petahertz, ConversionFactor::pow10(15)),
        (Frequency::Terahertz, ConversionFactor::pow10(12)),
        (Frequency::Gigahertz, ConversionFactor::pow10(9)),
        (Frequency::Megahertz, ConversionFactor::pow10(6)),
        (Frequency::Kilohertz, ConversionFactor::pow10(3)),
        (Frequency::Hectohertz, ConversionFactor::pow10(2)),
        (Frequency::Decahertz, ConversionFactor::pow10(1)),
        (Frequency::Hertz, ConversionFactor::base()),
        (Frequency::Decihertz, ConversionFactor::pow10(-1)),
        (Frequency::Centihertz, ConversionFactor::pow10(-2)),
        (Frequency::Millihertz, ConversionFactor::pow10(-3)),
        (Frequency::Microhertz, ConversionFactor::pow10(-6)),
        (Frequency::Nanohertz, ConversionFactor::pow10(-9)),
        (Frequency::Picohertz, ConversionFactor::pow10(-12)),
        (Frequency::Femtohertz, ConversionFactor::pow10(-15)),
        (Frequency::Attohertz, ConversionFactor::pow10(-18)),
        (Frequency::Zeptohertz, ConversionFactor::pow10(-21)),
        (Frequency::Yoctohertz, ConversionFactor::pow10(-24)),
    ]
}
