use crate::TypeTraits;

/// Wrapper whose `==` uses [`TypeTraits::equals`].
///
/// Mostly useful in assertions, e.g. `assert_eq!(out, [2., 0.].map(Fuzzy))`.
/// There is no `Eq` impl since fuzzy equality isn't transitive.
#[derive(Clone, Copy, Default)]
pub struct Fuzzy<T>(pub T);

impl<T: TypeTraits> PartialEq for Fuzzy<T> {
    fn eq(&self, other: &Self) -> bool {
        T::equals(self.0, other.0)
    }
}

impl<T: TypeTraits> PartialEq<T> for Fuzzy<T> {
    fn eq(&self, other: &T) -> bool {
        T::equals(self.0, *other)
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Fuzzy<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "~{:?}", self.0)
    }
}

impl<T> From<T> for Fuzzy<T> {
    fn from(value: T) -> Self {
        Fuzzy(value)
    }
}

macro_rules! fuzzy_rhs {
    ($($t:ty),*) => {
        $(
            impl PartialEq<Fuzzy<$t>> for $t {
                fn eq(&self, other: &Fuzzy<$t>) -> bool {
                    <$t as TypeTraits>::equals(*self, other.0)
                }
            }
        )*
    };
}

fuzzy_rhs!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

#[cfg(feature = "f128")]
fuzzy_rhs!(f128);
