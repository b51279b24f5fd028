//! Metron Units - Typed physical quantities with exact unit conversion
//!
//! Each quantity kind is a closed enum of units backed by a registry of
//! exact rational conversion factors. Conversions route through the kind's
//! base unit, so adding a unit means adding one table row, not one pairing
//! per existing unit.
//!
//! Kinds:
//! - Power (watt and SI prefixes)
//! - Pressure (pascal, bar, atmosphere, psi, torr, mmHg)
//! - Temperature (celsius, fahrenheit, kelvin, rankine)
//! - Frequency (hertz and SI prefixes)
//! - ElectricPotential (volt and SI prefixes)
//! - Time (second and SI prefixes, minute, hour, day)
//!
//! ```
//! use metron_units::{convert, Power, Quantity};
//!
//! let q = Quantity::new(5.0, Power::Kilowatt);
//! assert_eq!(q.convert_to(Power::Watt).value(), 5000.0);
//!
//! assert_eq!(convert(1.0, Power::Kilowatt, Power::Watt), 1000.0);
//! ```

mod factor;
mod unit;
mod registry;
mod convert;
mod quantity;
mod kinds;

pub use convert::{convert, from_base, to_base};
pub use factor::ConversionFactor;
pub use kinds::{ElectricPotential, Frequency, Power, Pressure, Temperature, Time};
pub use quantity::Quantity;
pub use registry::{RegistryError, UnitRegistry};
pub use unit::UnitKind;

pub use metron_core::{Rational, RationalError};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        convert, ConversionFactor, ElectricPotential, Frequency, Power, Pressure, Quantity,
        Temperature, Time, UnitKind,
    };
}
