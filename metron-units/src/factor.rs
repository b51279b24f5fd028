//! Conversion factors - how a unit maps onto its kind's base unit

use metron_core::Rational;

/// Scale and offset mapping one unit onto its kind's base unit
///
/// A magnitude converts to the base unit as `value * scale + offset` and
/// back as `(value - offset) / scale`. The scale must be strictly positive;
/// the registry enforces that when a kind's table is built. The offset is
/// zero for all but affine units (Celsius, Fahrenheit).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionFactor {
    scale: Rational,
    offset: Rational,
}

impl ConversionFactor {
    /// The base unit's own factor: scale 1, offset 0
    pub fn base() -> Self {
        Self {
            scale: Rational::ONE,
            offset: Rational::ZERO,
        }
    }

    /// Integer scale, e.g. 3600 seconds per hour
    pub fn integer(scale: i64) -> Self {
        Self {
            scale: Rational::from_i64(scale),
            offset: Rational::ZERO,
        }
    }

    /// Power-of-ten scale for SI prefixes, e.g. 24 for yotta-, -24 for yocto-
    pub fn pow10(exp: i32) -> Self {
        Self {
            scale: Rational::pow10(exp),
            offset: Rational::ZERO,
        }
    }

    /// Exact ratio scale, e.g. 101325/760 pascal per torr
    ///
    /// # Panics
    /// Panics if `den` is zero.
    pub fn ratio(num: i64, den: i64) -> Self {
        Self {
            scale: Rational::from_ratio(num, den),
            offset: Rational::ZERO,
        }
    }

    /// Decimal scale given as digits and decimal places,
    /// e.g. (133_322_387_415, 9) for 133.322387415
    pub fn decimal(digits: i64, places: u32) -> Self {
        Self {
            scale: Rational::from_i64(digits).mul(&Rational::pow10(-(places as i32))),
            offset: Rational::ZERO,
        }
    }

    /// Attach an additive offset for affine units like Celsius
    pub fn with_offset(mut self, offset: Rational) -> Self {
        self.offset = offset;
        self
    }

    /// Multiplicative part of the mapping to base
    pub fn scale(&self) -> &Rational {
        &self.scale
    }

    /// Additive part of the mapping to base (zero for most units)
    pub fn offset(&self) -> &Rational {
        &self.offset
    }

    /// Check if this is the base unit's factor (scale 1, offset 0)
    pub fn is_base(&self) -> bool {
        self.scale == Rational::ONE && self.offset.is_zero()
    }

    /// Check if this factor has an offset (affine conversion)
    pub fn has_offset(&self) -> bool {
        !self.offset.is_zero()
    }
}
