//! Quantity type - a value with an associated unit

use std::fmt;

use metron_core::Rational;
use serde::{Deserialize, Serialize};

use crate::convert;
use crate::unit::UnitKind;

/// A physical quantity: a numeric value with an associated unit
///
/// The unit's kind is the type parameter, so quantities of different kinds
/// are different types and a conversion can only name a destination unit
/// of its own kind:
///
/// ```compile_fail
/// use metron_units::{Power, Pressure, Quantity};
///
/// let q = Quantity::new(1.0, Power::Watt);
/// q.convert_to(Pressure::Pascal); // expected `Power`, found `Pressure`
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Quantity<K: UnitKind> {
    /// The numeric value
    value: f64,
    /// The unit of measurement
    unit: K,
}

impl<K: UnitKind> Quantity<K> {
    /// Create a new quantity
    pub fn new(value: f64, unit: K) -> Self {
        Quantity { value, unit }
    }

    /// The numeric value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The unit of measurement
    pub fn unit(&self) -> K {
        self.unit
    }

    /// Convert to another unit of the same kind
    ///
    /// Returns a new quantity; the receiver is unchanged. Converting to
    /// the quantity's own unit returns the value bit for bit.
    ///
    /// ```
    /// use metron_units::{Pressure, Quantity};
    ///
    /// let atm = Quantity::new(1.0, Pressure::Atmosphere);
    /// assert_eq!(atm.convert_to(Pressure::Pascal).value(), 101325.0);
    /// ```
    pub fn convert_to(&self, target: K) -> Quantity<K> {
        Quantity::new(convert::convert(self.value, self.unit, target), target)
    }

    /// Convert to the kind's base unit
    pub fn to_base(&self) -> Quantity<K> {
        self.convert_to(K::registry().base())
    }

    /// The value expressed in the kind's base unit
    pub fn base_value(&self) -> f64 {
        convert::to_base(self.value, self.unit)
    }

    /// Add another quantity, converted to this quantity's unit first
    pub fn add(&self, other: &Quantity<K>) -> Quantity<K> {
        let converted = other.convert_to(self.unit);
        Quantity::new(self.value + converted.value, self.unit)
    }

    /// Subtract another quantity, converted to this quantity's unit first
    pub fn sub(&self, other: &Quantity<K>) -> Quantity<K> {
        let converted = other.convert_to(self.unit);
        Quantity::new(self.value - converted.value, self.unit)
    }
}

impl<K: UnitKind> fmt::Display for Quantity<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

impl<K: UnitKind> PartialEq for Quantity<K> {
    /// Quantities are equal when their magnitudes agree exactly in the
    /// kind's base unit, compared in the rational domain. Non-finite
    /// magnitudes compare equal only under the same unit, with plain f64
    /// semantics (so NaN never equals anything).
    fn eq(&self, other: &Self) -> bool {
        if self.unit == other.unit {
            return self.value == other.value;
        }
        match (
            Rational::from_f64(self.value),
            Rational::from_f64(other.value),
        ) {
            (Ok(a), Ok(b)) => {
                let fa = K::registry().factor(self.unit);
                let fb = K::registry().factor(other.unit);
                a.mul(fa.scale()).add(fa.offset()) == b.mul(fb.scale()).add(fb.offset())
            }
            _ => false,
        }
    }
}
