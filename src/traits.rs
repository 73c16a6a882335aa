use crate::precision::{DOUBLE_EQUALITY_PRECISION, FLOAT_EQUALITY_PRECISION};
use crate::Extended;

/// The default trait bundle. Equality is plain `==`.
///
/// Types outside the numeric registry opt in with an empty impl. They get
/// exact equality but no epsilon or floating-point counterpart, since
/// neither can be inferred for an arbitrary type.
pub trait TypeTraits: Copy + PartialEq {
    /// Fuzzy compare for floating-point types (using [`NumericTraits::epsilon`]),
    /// pure equality everywhere else.
    #[inline]
    fn equals(a: Self, b: Self) -> bool {
        a == b
    }
}

/// Trait bundle for the registered numeric types.
pub trait NumericTraits: TypeTraits {
    /// Corresponding floating-point type for normalization.
    ///
    /// The type itself for floats, otherwise the smallest floating-point type
    /// wide enough for the integer.
    type FloatingPointType: FloatingPoint;

    /// Which family of bundles this type belongs to.
    const KIND: NumericKind;

    /// Minimal difference between two values for them to be considered not
    /// equal. `1` for integers, a small configured value for floats.
    fn epsilon() -> Self;

    /// Converts the value to [`Self::FloatingPointType`].
    fn to_floating_point(self) -> Self::FloatingPointType;
}

/// Floating-point types. They normalize to themselves.
pub trait FloatingPoint: NumericTraits<FloatingPointType = Self> {}

/// Integer types. Their epsilon is always one.
pub trait Integral: NumericTraits {}

/// Shorthand for the floating-point counterpart of `T`.
pub type FloatingPointOf<T> = <T as NumericTraits>::FloatingPointType;

/// Family of a registered numeric type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NumericKind {
    Integral,
    FloatingPoint,
}

macro_rules! integral_traits {
    ($($t:ty => $fp:ty),* $(,)?) => {
        $(
            impl TypeTraits for $t {}

            impl NumericTraits for $t {
                type FloatingPointType = $fp;

                const KIND: NumericKind = NumericKind::Integral;

                #[inline]
                fn epsilon() -> Self {
                    1
                }

                #[inline]
                fn to_floating_point(self) -> $fp {
                    self as $fp
                }
            }

            impl Integral for $t {}
        )*
    };
}

integral_traits! {
    u8 => f32,
    i8 => f32,
    u16 => f32,
    i16 => f32,
    u32 => f64,
    i32 => f64,
    u64 => Extended,
    i64 => Extended,
}

// Absolute epsilon only. A NaN difference (from NaN operands or two equal
// infinities) is never below epsilon, so `equals(inf, inf)` is false.
macro_rules! floating_point_traits {
    ($($t:ty => $eps:expr),* $(,)?) => {
        $(
            impl TypeTraits for $t {
                #[inline]
                fn equals(a: Self, b: Self) -> bool {
                    let n = a - b;
                    if n.is_nan() {
                        log::trace!(
                            "fuzzy compare of {} with NaN difference",
                            core::any::type_name::<$t>()
                        );
                    }
                    let eps = <$t as NumericTraits>::epsilon();
                    n > -eps && n < eps
                }
            }

            impl NumericTraits for $t {
                type FloatingPointType = $t;

                const KIND: NumericKind = NumericKind::FloatingPoint;

                #[inline]
                fn epsilon() -> Self {
                    $eps
                }

                #[inline]
                fn to_floating_point(self) -> $t {
                    self
                }
            }

            impl FloatingPoint for $t {}
        )*
    };
}

floating_point_traits! {
    f32 => FLOAT_EQUALITY_PRECISION,
    f64 => DOUBLE_EQUALITY_PRECISION,
}

#[cfg(feature = "f128")]
floating_point_traits! {
    f128 => crate::precision::LONG_DOUBLE_EQUALITY_PRECISION,
}

/// Compares two values with the policy registered for `T`.
#[inline]
pub fn equals<T: TypeTraits>(a: T, b: T) -> bool {
    T::equals(a, b)
}

/// The epsilon registered for `T`.
#[inline]
pub fn epsilon<T: NumericTraits>() -> T {
    T::epsilon()
}

/// Normalizes `value` into its floating-point counterpart.
#[inline]
pub fn to_floating_point<T: NumericTraits>(value: T) -> FloatingPointOf<T> {
    value.to_floating_point()
}

/// Element-wise [`equals`]. Slices of different length are never equal.
pub fn equals_all<T: TypeTraits>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| T::equals(*x, *y))
}
