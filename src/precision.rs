//! Epsilons used when comparing floating-point values for equality.
//!
//! Each constant can be overridden by setting the environment variable of
//! the same name while the crate is compiled, e.g.
//!
//! ```text
//! FLOAT_EQUALITY_PRECISION=1e-5 cargo build
//! ```
//!
//! The value is a plain decimal literal with at most 19 significant digits
//! and a magnitude between `1e-30` and `1e30`. Anything else fails the build.
//! Accepted values become float literals, so they round exactly like the same
//! literal written in source.

use crate::Extended;

/// Precision when testing `f32` for equality.
pub const FLOAT_EQUALITY_PRECISION: f32 =
    include!(concat!(env!("OUT_DIR"), "/float_equality_precision.rs"));

/// Precision when testing `f64` for equality.
pub const DOUBLE_EQUALITY_PRECISION: f64 =
    include!(concat!(env!("OUT_DIR"), "/double_equality_precision.rs"));

/// Precision when testing [`Extended`] for equality.
///
/// Only used when the `f128` feature makes [`Extended`] wider than `f64`.
/// Otherwise extended values are `f64` and use [`DOUBLE_EQUALITY_PRECISION`].
pub const LONG_DOUBLE_EQUALITY_PRECISION: Extended =
    include!(concat!(env!("OUT_DIR"), "/long_double_equality_precision.rs"));
