//! The trait binding a unit enumeration to its conversion machinery

use std::fmt;
use std::hash::Hash;

use crate::registry::UnitRegistry;

/// A closed, ordered enumeration of mutually convertible units
///
/// Implemented by one fieldless enum per quantity kind. Variant order is
/// the declaration order: `ordinal` must index `ALL` and the kind's factor
/// table identically, which the registry verifies when it is built. Adding
/// a variant means extending the `name` match, `ALL` and the factor table;
/// the exhaustive match breaks the build until all three are updated, and
/// the registry checks catch any remaining drift.
///
/// The kind itself is the implementing type, so two kinds never share a
/// quantity or a conversion: `Quantity<Power>` cannot name a `Pressure`
/// unit.
pub trait UnitKind:
    Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + Sized + 'static
{
    /// Kind name used in diagnostics, e.g. "power"
    const NAME: &'static str;

    /// Every unit of the kind, in declaration order
    const ALL: &'static [Self];

    /// Dense index of this unit within `ALL`
    fn ordinal(self) -> usize;

    /// The kind's registry, built on first use and immutable afterward
    fn registry() -> &'static UnitRegistry<Self>;
}
