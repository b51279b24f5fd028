//! Pressure units - SI pascal prefixes plus bar, atmosphere, psi, torr and mmHg

use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::factor::ConversionFactor;
use crate::registry::UnitRegistry;
use crate::unit::UnitKind;

static REGISTRY: LazyLock<UnitRegistry<Pressure>> =
    LazyLock::new(|| UnitRegistry::build(table()).unwrap_or_else(|e| panic!("{e}")));

/// Units of pressure. Base unit: pascal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pressure {
    Yottapascal,
    Zettapascal,
    Exapascal,
    Petapascal,
    Terapascal,
    Gigapascal,
    Megapascal,
    Kilopascal,
    Hectopascal,
    Decapascal,
    Pascal,
    Decipascal,
    Centipascal,
    Millipascal,
    Micropascal,
    Nanopascal,
    Picopascal,
    Femtopascal,
    Attopascal,
    Zeptopascal,
    Yoctopascal,
    Bar,
    Megabar,
    Kilobar,
    Decibar,
    Centibar,
    Millibar,
    Atmosphere,
    Psi,
    Torr,
    Millitorr,
    MmHg,
}

impl Pressure {
    /// Unit name, e.g. "kilopascal"
    pub fn name(self) -> &'static str {
        match self {
            Pressure::Yottapascal => "yottapascal",
            Pressure::Zettapascal => "zettapascal",
            Pressure::Exapascal => "exapascal",
            Pressure::Petapascal => "petapascal",
            Pressure::Terapascal => "terapascal",
            Pressure::Gigapascal => "gigapascal",
            Pressure::Megapascal => "megapascal",
            Pressure::Kilopascal => "kilopascal",
            Pressure::Hectopascal => "hectopascal",
            Pressure::Decapascal => "decapascal",
            Pressure::Pascal => "pascal",
            Pressure::Decipascal => "decipascal",
            Pressure::Centipascal => "centipascal",
            Pressure::Millipascal => "millipascal",
            Pressure::Micropascal => "micropascal",
            Pressure::Nanopascal => "nanopascal",
            Pressure::Picopascal => "picopascal",
            Pressure::Femtopascal => "femtopascal",
            Pressure::Attopascal => "attopascal",
            Pressure::Zeptopascal => "zeptopascal",
            Pressure::Yoctopascal => "yoctopascal",
            Pressure::Bar => "bar",
            Pressure::Megabar => "megabar",
            Pressure::Kilobar => "kilobar",
            Pressure::Decibar => "decibar",
            Pressure::Centibar => "centibar",
            Pressure::Millibar => "millibar",
            Pressure::Atmosphere => "atmosphere",
            Pressure::Psi => "psi",
            Pressure::Torr => "torr",
            Pressure::Millitorr => "millitorr",
            Pressure::MmHg => "mmHg",
        }
    }
}

impl fmt::Display for Pressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl UnitKind for Pressure {
    const NAME: &'static str = "pressure";

    const ALL: &'static [Pressure] = &[
        Pressure::Yottapascal,
        Pressure::Zettapascal,
        Pressure::Exapascal,
        Pressure::Petapascal,
        Pressure::Terapascal,
        Pressure::Gigapascal,
        Pressure::Megapascal,
        Pressure::Kilopascal,
        Pressure::Hectopascal,
        Pressure::Decapascal,
        Pressure::Pascal,
        Pressure::Decipascal,
        Pressure::Centipascal,
        Pressure::Millipascal,
        Pressure::Micropascal,
        Pressure::Nanopascal,
        Pressure::Picopascal,
        Pressure::Femtopascal,
        Pressure::Attopascal,
        Pressure::Zeptopascal,
        Pressure::Yoctopascal,
        Pressure::Bar,
        Pressure::Megabar,
        Pressure::Kilobar,
        Pressure::Decibar,
        Pressure::Centibar,
        Pressure::Millibar,
        Pressure::Atmosphere,
        Pressure::Psi,
        Pressure::Torr,
        Pressure::Millitorr,
        Pressure::MmHg,
    ];

    fn ordinal(self) -> usize {
        self as usize
    }

    fn registry() -> &'static UnitRegistry<Pressure> {
        &REGISTRY
    }
}

fn table() -> Vec<(Pressure, ConversionFactor)> {
    vec![
        (Pressure::Yottapascal, ConversionFactor::pow10(24)),
        (Pressure::Zettapascal, ConversionFactor::pow10(21)),
        (Pressure::Exapascal, ConversionFactor::pow10(18)),
        (Pressure::Petapascal, ConversionFactor::pow10(15)),
        (Pressure::Terapascal, ConversionFactor::pow10(12)),
        (Pressure::Gigapascal, ConversionFactor::pow10(9)),
        (Pressure::Megapascal, ConversionFactor::pow10(6)),
        (Pressure::Kilopascal, ConversionFactor::pow10(3)),
        (Pressure::Hectopascal, ConversionFactor::pow10(2)),
        (Pressure::Decapascal, ConversionFactor::pow10(1)),
        (Pressure::Pascal, ConversionFactor::base()),
        (Pressure::Decipascal, ConversionFactor::pow10(-1)),
        (Pressure::Centipascal, ConversionFactor::pow10(-2)),
        (Pressure::Millipascal, ConversionFactor::pow10(-3)),
        (Pressure::Micropascal, ConversionFactor::pow10(-6)),
        (Pressure::Nanopascal, ConversionFactor::pow10(-9)),
        (Pressure::Picopascal, ConversionFactor::pow10(-12)),
        (Pressure::Femtopascal, ConversionFactor::pow10(-15)),
        (Pressure::Attopascal, ConversionFactor::pow10(-18)),
        (Pressure::Zeptopascal, ConversionFactor::pow10(-21)),
        (Pressure::Yoctopascal, ConversionFactor::pow10(-24)),
        (Pressure::Bar, ConversionFactor::pow10(5)),
        (Pressure::Megabar, ConversionFactor::pow10(11)),
        (Pressure::Kilobar, ConversionFactor::pow10(8)),
        (Pressure::Decibar, ConversionFactor::pow10(4)),
        (Pressure::Centibar, ConversionFactor::pow10(3)),
        (Pressure::Millibar, ConversionFactor::pow10(2)),
        (Pressure::Atmosphere, ConversionFactor::integer(101_325)),
        // pound-force per square inch from exact avoirdupois pound,
        // standard gravity and inch definitions
        (
            Pressure::Psi,
            ConversionFactor::ratio(44_482_216_152_605, 6_451_600_000),
        ),
        (Pressure::Torr, ConversionFactor::ratio(101_325, 760)),
        (Pressure::Millitorr, ConversionFactor::ratio(101_325, 760_000)),
        (Pressure::MmHg, ConversionFactor::decimal(133_322_387_415, 9)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::convert;

    #[test]
    fn test_registry_covers_all_units() {
        assert_eq!(Pressure::ALL.len(), 32);
        assert_eq!(Pressure::registry().len(), Pressure::ALL.len());
        assert_eq!(Pressure::registry().base(), Pressure::Pascal);
    }

    #[test]
    fn test_bar_to_pascal() {
        assert_eq!(convert(1.0, Pressure::Bar, Pressure::Pascal), 100_000.0);
        assert_eq!(convert(1.0, Pressure::Millibar, Pressure::Pascal), 100.0);
    }

    #[test]
    fn test_atmosphere_to_pascal() {
        assert_eq!(
            convert(1.0, Pressure::Atmosphere, Pressure::Pascal),
            101_325.0
        );
    }

    #[test]
    fn test_torr_to_atmosphere() {
        // 760 torr is one standard atmosphere by definition
        assert_eq!(convert(760.0, Pressure::Torr, Pressure::Pascal), 101_325.0);
        assert_eq!(
            convert(1.0, Pressure::Atmosphere, Pressure::Torr),
            760.0
        );
    }

    #[test]
    fn test_psi_to_pascal() {
        let pa = convert(1.0, Pressure::Psi, Pressure::Pascal);
        let expected = 6894.757293168361;
        assert!(((pa - expected) / expected).abs() < 1e-12, "got {pa}");
    }

    #[test]
    fn test_mmhg_to_pascal() {
        assert_eq!(
            convert(1.0, Pressure::MmHg, Pressure::Pascal),
            133.322387415
        );
    }

    #[test]
    fn test_millitorr_to_torr() {
        assert_eq!(
            convert(1000.0, Pressure::Millitorr, Pressure::Torr),
            1.0
        );
    }
}
