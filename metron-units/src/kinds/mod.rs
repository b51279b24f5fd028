//! Quantity kinds - one closed unit enumeration per physical quantity
//!
//! Each kind declares its units in a fixed order, a declarative factor
//! table and a lazily built registry:
//! - `Power`: watt across the SI prefixes
//! - `Pressure`: pascal across the SI prefixes, plus bar, atmosphere,
//!   psi, torr, millitorr and mmHg
//! - `Temperature`: celsius, fahrenheit, kelvin, rankine (affine)
//! - `Frequency`: hertz across the SI prefixes
//! - `ElectricPotential`: volt across the SI prefixes
//! - `Time`: second across the SI prefixes, plus minute, hour and day

mod electric_potential;
mod frequency;
mod power;
mod pressure;
mod temperature;
mod time;

pub use electric_potential::ElectricPotential;
pub use frequency::Frequency;
pub use power::Power;
pub use pressure::Pressure;
pub use temperature::Temperature;
pub use time::Time;
