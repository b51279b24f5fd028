//! Time units - second across the SI prefixes plus minute, hour and day

use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::factor::ConversionFactor;
use crate::registry::UnitRegistry;
use crate::unit::UnitKind;

static REGISTRY: LazyLock<UnitRegistry<Time>> =
    LazyLock::new(|| UnitRegistry::build(table()).unwrap_or_else(|e| panic!("{e}")));

/// Units of time. Base unit: second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Time {
    Yottasecond,
    Zettasecond,
    Exasecond,
    Petasecond,
    Terasecond,
    Gigasecond,
    Megasecond,
    Kilosecond,
    Hectosecond,
    Decasecond,
    Second,
    Decisecond,
    Centisecond,
    Millisecond,
    Microsecond,
    Nanosecond,
    Picosecond,
    Femtosecond,
    Attosecond,
    Zeptosecond,
    Yoctosecond,
    Minute,
    Hour,
    Day,
}

impl Time {
    /// Unit name, e.g. "millisecond"
    pub fn name(self) -> &'static str {
        match self {
            Time::Yottasecond => "yottasecond",
            Time::Zettasecond => "zettasecond",
            Time::Exasecond => "exasecond",
            Time::Petasecond => "petasecond",
            Time::Terasecond => "terasecond",
            Time::Gigasecond => "gigasecond",
            Time::Megasecond => "megasecond",
            Time::Kilosecond => "kilosecond",
            Time::Hectosecond => "hectosecond",
            Time::Decasecond => "decasecond",
            Time::Second => "second",
            Time::Decisecond => "decisecond",
            Time::Centisecond => "centisecond",
            Time::Millisecond => "millisecond",
            Time::Microsecond => "microsecond",
            Time::Nanosecond => "nanosecond",
            Time::Picosecond => "picosecond",
            Time::Femtosecond => "femtosecond",
            Time::Attosecond => "attosecond",
            Time::Zeptosecond => "zeptosecond",
            Time::Yoctosecond => "yoctosecond",
            Time::Minute => "minute",
            Time::Hour => "hour",
            Time::Day => "day",
        }
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl UnitKind for Time {
    const NAME: &'static str = "time";

    const ALL: &'static [Time] = &[
        Time::Yottasecond,
        Time::Zettasecond,
        Time::Exasecond,
        Time::Petasecond,
        Time::Terasecond,
        Time::Gigasecond,
        Time::Megasecond,
        Time::Kilosecond,
        Time::Hectosecond,
        Time::Decasecond,
        Time::Second,
        Time::Decisecond,
        Time::Centisecond,
        Time::Millisecond,
        Time::Microsecond,
        Time::Nanosecond,
        Time::Picosecond,
        Time::Femtosecond,
        Time::Attosecond,
        Time::Zeptosecond,
        Time::Yoctosecond,
        Time::Minute,
        Time::Hour,
        Time::Day,
    ];

    fn ordinal(self) -> usize {
        self as usize
    }

    fn registry() -> &'static UnitRegistry<Time> {
        &REGISTRY
    }
}

fn table() -> Vec<(Time, ConversionFactor)> {
    vec![
        (Time::Yottasecond, ConversionFactor::pow10(24)),
        (Time::Zettasecond, ConversionFactor::pow10(21)),
        (Time::Exasecond, ConversionFactor::pow10(18)),
        (Time::Petasecond, ConversionFactor::pow10(15)),
        (Time::Terasecond, ConversionFactor::pow10(12)),
        (Time::Gigasecond, ConversionFactor::pow10(9)),
        (Time::Megasecond, ConversionFactor::pow10(6)),
        (Time::Kilosecond, ConversionFactor::pow10(3)),
        (Time::Hectosecond, ConversionFactor::pow10(2)),
        (Time::Decasecond, ConversionFactor::pow10(1)),
        (Time::Second, ConversionFactor::base()),
        (Time::Decisecond, ConversionFactor::pow10(-1)),
        (Time::Centisecond, ConversionFactor::pow10(-2)),
        (Time::Millisecond, ConversionFactor::pow10(-3)),
        (Time::Microsecond, ConversionFactor::pow10(-6)),
        (Time::Nanosecond, ConversionFactor::pow10(-9)),
        (Time::Picosecond, ConversionFactor::pow10(-12)),
        (Time::Femtosecond, ConversionFactor::pow10(-15)),
        (Time::Attosecond, ConversionFactor::pow10(-18)),
        (Time::Zeptosecond, ConversionFactor::pow10(-21)),
        (Time::Yoctosecond, ConversionFactor::pow10(-24)),
        (Time::Minute, ConversionFactor::integer(60)),
        (Time::Hour, ConversionFactor::integer(3600)),
        (Time::Day, ConversionFactor::integer(86_400)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::convert;

    #[test]
    fn test_registry_covers_all_units() {
        assert_eq!(Time::ALL.len(), 24);
        assert_eq!(Time::registry().len(), Time::ALL.len());
        assert_eq!(Time::registry().base(), Time::Second);
    }

    #[test]
    fn test_hour_to_second() {
        assert_eq!(convert(1.0, Time::Hour, Time::Second), 3600.0);
        assert_eq!(convert(0.5, Time::Hour, Time::Minute), 30.0);
    }

    #[test]
    fn test_day_to_hour() {
        assert_eq!(convert(1.0, Time::Day, Time::Hour), 24.0);
    }

    #[test]
    fn test_minute_to_millisecond() {
        assert_eq!(convert(1.0, Time::Minute, Time::Millisecond), 60_000.0);
    }

    #[test]
    fn test_second_to_minute() {
        assert_eq!(convert(90.0, Time::Second, Time::Minute), 1.5);
    }
}
