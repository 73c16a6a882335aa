//! Compile-time numeric type traits.
//!
//! Every supported numeric type gets a trait bundle: an epsilon, an equality
//! predicate and the floating-point type it normalizes into. Integers compare
//! exactly, floats compare with a fixed absolute epsilon.
//!
//! ```
//! use math_type_traits::{epsilon, equals, FloatingPointOf};
//!
//! assert!(equals(1.0_f32, 1.000_000_1));
//! assert!(!equals(1.0_f32, 1.001));
//! assert_eq!(epsilon::<u16>(), 1);
//!
//! let normalized: FloatingPointOf<i32> = math_type_traits::to_floating_point(7_i32);
//! assert_eq!(normalized, 7.0_f64);
//! ```
//!
//! Types without a registered bundle only get exact equality, and asking for
//! their epsilon does not compile:
//!
//! ```compile_fail
//! use math_type_traits::{epsilon, TypeTraits};
//!
//! #[derive(Clone, Copy, PartialEq)]
//! struct Meters(u32);
//!
//! impl TypeTraits for Meters {}
//!
//! let _ = epsilon::<Meters>();
//! ```
//!
//! # Known limitations
//!
//! * Two equal infinities are not `equals`, since their difference is NaN.
//! * The float comparison is an absolute threshold, so it is too strict for
//!   large magnitudes and too lax for tiny ones.

// For tests we use std.
#![cfg_attr(not(test), no_std)]
#![cfg_attr(feature = "f128", feature(f128))]

mod fuzzy;
pub mod precision;
mod traits;

pub use fuzzy::Fuzzy;
pub use traits::{equals, equals_all, epsilon, to_floating_point};
pub use traits::{FloatingPoint, FloatingPointOf, Integral, NumericKind, NumericTraits, TypeTraits};

/// The widest floating-point type available to this build.
#[cfg(not(feature = "f128"))]
pub type Extended = f64;

/// The widest floating-point type available to this build.
#[cfg(feature = "f128")]
pub type Extended = f128;
