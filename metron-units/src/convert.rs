//! Unit conversion routed through each kind's base unit

use crate::unit::UnitKind;

/// Convert a magnitude between two units of one kind
///
/// Identity conversions return the input unchanged, bit for bit (NaN
/// included). Everything else routes through the kind's base unit: the
/// source leg multiplies into base, the destination leg divides out of it,
/// each leg in exact rational arithmetic with one rounding back to f64.
///
/// For scale-only kinds the two roundings bound the relative error by
/// 2 ULP (about 4.5e-16), even for yocto-to-yotta ratios spanning 48
/// orders of magnitude. Affine kinds get an absolute bound instead: about
/// one ULP of the base-unit magnitude. A result near the destination
/// scale's zero (0 Celsius sits at 273.15 kelvin) is the cancellation of
/// two base-sized values, so its relative error is unbounded even though
/// the absolute error stays within that ULP.
///
/// The base magnitude is materialized as f64 between the legs, so a direct
/// conversion and one staged through the base unit agree bit for bit.
pub fn convert<K: UnitKind>(value: f64, from: K, to: K) -> f64 {
    if from == to {
        return value;
    }
    from_base(to_base(value, from), to)
}

/// Convert a magnitude in `unit` into the kind's base unit
pub fn to_base<K: UnitKind>(value: f64, unit: K) -> f64 {
    K::registry().to_base_value(unit, value)
}

/// Convert a magnitude in the kind's base unit into `unit`
pub fn from_base<K: UnitKind>(value: f64, unit: K) -> f64 {
    K::registry().from_base_value(unit, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::{Power, Pressure, Temperature};

    #[test]
    fn test_identity_is_bitwise() {
        assert_eq!(convert(0.1, Power::Kilowatt, Power::Kilowatt), 0.1);
        assert_eq!(
            convert(-0.0, Power::Watt, Power::Watt).to_bits(),
            (-0.0f64).to_bits()
        );
        assert!(convert(f64::NAN, Power::Watt, Power::Watt).is_nan());
    }

    #[test]
    fn test_routes_through_base() {
        assert_eq!(to_base(1.0, Power::Kilowatt), 1000.0);
        assert_eq!(from_base(1000.0, Power::Kilowatt), 1.0);
        assert_eq!(convert(1.0, Power::Kilowatt, Power::Watt), 1000.0);
    }

    #[test]
    fn test_non_finite_propagates() {
        assert!(convert(f64::NAN, Power::Kilowatt, Power::Watt).is_nan());
        assert_eq!(
            convert(f64::INFINITY, Pressure::Torr, Pressure::Psi),
            f64::INFINITY
        );
        assert_eq!(
            convert(f64::NEG_INFINITY, Pressure::Torr, Pressure::Psi),
            f64::NEG_INFINITY
        );
    }

    #[test]
    fn test_zero_stays_zero() {
        assert_eq!(convert(0.0, Power::Yottawatt, Power::Yoctowatt), 0.0);
        assert_eq!(convert(0.0, Pressure::Psi, Pressure::Millitorr), 0.0);
    }

    #[test]
    fn test_affine_error_near_scale_zero() {
        // A hair above freezing lands next to the Celsius zero. The base
        // magnitude is ~273 K, so the materialized base leaves up to about
        // one ULP of 273 in absolute error; no relative guarantee holds for
        // a result this close to zero.
        let c = convert(
            32.0 + 1.8e-10,
            Temperature::Fahrenheit,
            Temperature::Celsius,
        );
        let base_ulp = 273.15 * f64::EPSILON;
        assert!((c - 1e-10).abs() < base_ulp, "got {c}");
    }
}
