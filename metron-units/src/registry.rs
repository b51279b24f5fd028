//! Per-kind unit registries with build-time validation

use metron_core::Rational;
use thiserror::Error;
use tracing::debug;

use crate::factor::ConversionFactor;
use crate::unit::UnitKind;

/// Errors detected while building a kind's registry
///
/// Each one is a defect in the kind's declarative table, never a runtime
/// condition: the per-kind initializer escalates them to a panic before
/// the first conversion can run.
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    #[error("{kind} registry: expected {expected} units, found {found}")]
    SizeMismatch {
        kind: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{kind} registry: {unit} has ordinal {ordinal} but sits at row {index}")]
    NonContiguous {
        kind: &'static str,
        unit: String,
        ordinal: usize,
        index: usize,
    },

    #[error("{kind} registry: row {index} declares {found}, expected {expected}")]
    OutOfOrder {
        kind: &'static str,
        index: usize,
        expected: String,
        found: String,
    },

    #[error("{kind} registry: {unit} has a non-positive scale")]
    NonPositiveScale { kind: &'static str, unit: String },

    #[error("{kind} registry: no unit with scale 1 and offset 0")]
    MissingBase { kind: &'static str },

    #[error("{kind} registry: {first} and {second} both have scale 1 and offset 0")]
    AmbiguousBase {
        kind: &'static str,
        first: String,
        second: String,
    },
}

/// A validated factor plus its precomputed reciprocal scale, so the
/// conversion path never divides
#[derive(Debug, Clone)]
struct Entry {
    factor: ConversionFactor,
    inv_scale: Rational,
}

/// Immutable per-kind table mapping each unit to its conversion factor
///
/// Built once from the kind's declarative table, validated, then read-only
/// for the process lifetime. Lookup is O(1) by enum ordinal.
#[derive(Debug)]
pub struct UnitRegistry<K: UnitKind> {
    entries: Vec<Entry>,
    base: K,
}

impl<K: UnitKind> UnitRegistry<K> {
    /// Build and validate a registry from a kind's declarative rows
    ///
    /// Verifies that the rows cover the enumeration exactly once, in
    /// declaration order, that every scale is strictly positive, and that
    /// exactly one unit is the base (scale 1, offset 0). Duplicated or
    /// missing units surface as `NonContiguous` or `SizeMismatch`.
    pub fn build(rows: Vec<(K, ConversionFactor)>) -> Result<Self, RegistryError> {
        if rows.len() != K::ALL.len() {
            return Err(RegistryError::SizeMismatch {
                kind: K::NAME,
                expected: K::ALL.len(),
                found: rows.len(),
            });
        }

        let mut base: Option<K> = None;
        let mut entries = Vec::with_capacity(rows.len());
        for (index, (unit, factor)) in rows.into_iter().enumerate() {
            if unit.ordinal() != index {
                return Err(RegistryError::NonContiguous {
                    kind: K::NAME,
                    unit: unit.to_string(),
                    ordinal: unit.ordinal(),
                    index,
                });
            }
            if unit != K::ALL[index] {
                return Err(RegistryError::OutOfOrder {
                    kind: K::NAME,
                    index,
                    expected: K::ALL[index].to_string(),
                    found: unit.to_string(),
                });
            }
            if !factor.scale().is_positive() {
                return Err(RegistryError::NonPositiveScale {
                    kind: K::NAME,
                    unit: unit.to_string(),
                });
            }
            if factor.is_base() {
                if let Some(first) = base {
                    return Err(RegistryError::AmbiguousBase {
                        kind: K::NAME,
                        first: first.to_string(),
                        second: unit.to_string(),
                    });
                }
                base = Some(unit);
            }

            let inv_scale = Rational::ONE.checked_div(factor.scale()).map_err(|_| {
                RegistryError::NonPositiveScale {
                    kind: K::NAME,
                    unit: unit.to_string(),
                }
            })?;
            entries.push(Entry { factor, inv_scale });
        }
        let base = base.ok_or(RegistryError::MissingBase { kind: K::NAME })?;

        debug!(kind = K::NAME, units = entries.len(), "unit registry built");

        Ok(Self { entries, base })
    }

    /// The unit's conversion factor
    pub fn factor(&self, unit: K) -> &ConversionFactor {
        &self.entry(unit).factor
    }

    /// The kind's base unit (scale 1, offset 0)
    pub fn base(&self) -> K {
        self.base
    }

    /// Number of registered units
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the registry holds no units (never, for a valid kind)
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookup is total over variants covered by the build checks; a
    /// variant missing from both `ALL` and the table is a configuration
    /// error, and panics here rather than resolving a wrong factor.
    fn entry(&self, unit: K) -> &Entry {
        match self.entries.get(unit.ordinal()) {
            Some(entry) => entry,
            None => panic!("{} registry has no entry for {}", K::NAME, unit),
        }
    }

    /// Convert a magnitude in `unit` into the kind's base unit
    ///
    /// Exact rational arithmetic with a single rounding back to f64.
    /// Non-finite magnitudes pass through unchanged: scales are strictly
    /// positive, so an infinity keeps its sign and NaN stays NaN.
    pub(crate) fn to_base_value(&self, unit: K, value: f64) -> f64 {
        let exact = match Rational::from_f64(value) {
            Ok(exact) => exact,
            Err(_) => return value,
        };
        let entry = self.entry(unit);
        exact
            .mul(entry.factor.scale())
            .add(entry.factor.offset())
            .to_f64()
    }

    /// Convert a magnitude in the kind's base unit into `unit`
    pub(crate) fn from_base_value(&self, unit: K, base: f64) -> f64 {
        let exact = match Rational::from_f64(base) {
            Ok(exact) => exact,
            Err(_) => return base,
        };
        let entry = self.entry(unit);
        exact
            .sub(entry.factor.offset())
            .mul(&entry.inv_scale)
            .to_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::Temperature;

    fn good_rows() -> Vec<(Temperature, ConversionFactor)> {
        vec![
            (
                Temperature::Celsius,
                ConversionFactor::integer(1).with_offset(Rational::from_ratio(27315, 100)),
            ),
            (
                Temperature::Fahrenheit,
                ConversionFactor::ratio(5, 9).with_offset(Rational::from_ratio(45967, 180)),
            ),
            (Temperature::Kelvin, ConversionFactor::base()),
            (Temperature::Rankine, ConversionFactor::ratio(5, 9)),
        ]
    }

    #[test]
    fn test_build_valid_table() {
        let registry = UnitRegistry::build(good_rows()).unwrap();
        assert_eq!(registry.len(), 4);
        assert!(!registry.is_empty());
        assert_eq!(registry.base(), Temperature::Kelvin);
    }

    #[test]
    fn test_missing_unit_rejected() {
        let mut rows = good_rows();
        rows.pop();
        assert!(matches!(
            UnitRegistry::build(rows),
            Err(RegistryError::SizeMismatch {
                expected: 4,
                found: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_swapped_rows_rejected() {
        let mut rows = good_rows();
        rows.swap(0, 1);
        assert!(matches!(
            UnitRegistry::build(rows),
            Err(RegistryError::NonContiguous { index: 0, .. })
        ));
    }

    #[test]
    fn test_duplicate_unit_rejected() {
        let mut rows = good_rows();
        rows[1] = rows[0].clone();
        assert!(matches!(
            UnitRegistry::build(rows),
            Err(RegistryError::NonContiguous { index: 1, .. })
        ));
    }

    #[test]
    fn test_zero_scale_rejected() {
        let mut rows = good_rows();
        rows[3].1 = ConversionFactor::integer(0);
        assert!(matches!(
            UnitRegistry::build(rows),
            Err(RegistryError::NonPositiveScale { .. })
        ));
    }

    #[test]
    fn test_negative_scale_rejected() {
        let mut rows = good_rows();
        rows[3].1 = ConversionFactor::ratio(-5, 9);
        assert!(matches!(
            UnitRegistry::build(rows),
            Err(RegistryError::NonPositiveScale { .. })
        ));
    }

    #[test]
    fn test_missing_base_rejected() {
        let mut rows = good_rows();
        rows[2].1 = ConversionFactor::integer(2);
        assert!(matches!(
            UnitRegistry::build(rows),
            Err(RegistryError::MissingBase { .. })
        ));
    }

    #[test]
    fn test_ambiguous_base_rejected() {
        let mut rows = good_rows();
        rows[3].1 = ConversionFactor::base();
        assert!(matches!(
            UnitRegistry::build(rows),
            Err(RegistryError::AmbiguousBase { .. })
        ));
    }

    #[test]
    fn test_error_messages_name_the_kind() {
        let mut rows = good_rows();
        rows.pop();
        let err = UnitRegistry::build(rows).unwrap_err();
        assert!(err.to_string().contains("temperature"));
    }

    // `ALL` here disagrees with the discriminant order, the one drift the
    // ordinal check alone cannot see.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Scrambled {
        Alpha,
        Beta,
    }

    impl std::fmt::Display for Scrambled {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Scrambled::Alpha => write!(f, "alpha"),
                Scrambled::Beta => write!(f, "beta"),
            }
        }
    }

    impl UnitKind for Scrambled {
        const NAME: &'static str = "scrambled";
        const ALL: &'static [Scrambled] = &[Scrambled::Beta, Scrambled::Alpha];

        fn ordinal(self) -> usize {
            self as usize
        }

        fn registry() -> &'static UnitRegistry<Scrambled> {
            unreachable!("fixture kind never builds a registry")
        }
    }

    #[test]
    fn test_misdeclared_all_rejected() {
        let rows = vec![
            (Scrambled::Alpha, ConversionFactor::base()),
            (Scrambled::Beta, ConversionFactor::integer(2)),
        ];
        assert!(matches!(
            UnitRegistry::build(rows),
            Err(RegistryError::OutOfOrder { index: 0, .. })
        ));
    }
}
