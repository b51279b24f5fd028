//! Metron Core - Fundamental types
//!
//! This crate provides the numeric foundation used throughout Metron:
//! - `Rational`: exact arbitrary precision rational numbers
//! - `RationalError`: errors for the fallible rational operations

mod rational;

pub use rational::{Rational, RationalError};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Rational, RationalError};
}
