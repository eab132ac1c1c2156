use std::fmt::{Debug, Display};
use std::hash::Hasher;
use std::ops::Add;

/// T values are primitive scalars that are stored unboxed by primitive containers.
///
/// Equality between primitives is defined on their bit patterns. For integers, booleans and
/// chars this is the usual equality; for floats it makes `NaN` equal to itself and tells `0.0`
/// and `-0.0` apart, which is what lets primitive containers be `Eq` and `Hash`.
pub trait Primitive: Copy + Debug + Display + Default + PartialOrd + 'static {
    /// Bit pattern of the value, widened to 64 bits.
    fn bits(self) -> u64;

    #[inline(always)]
    fn same(self, other: Self) -> bool {
        self.bits() == other.bits()
    }

    #[inline(always)]
    fn hash_into<H: Hasher>(self, state: &mut H) {
        state.write_u64(self.bits());
    }
}

/// T values are numeric primitives that can be aggregated.
pub trait Numeric: Primitive + ::num::ToPrimitive {
    /// Type wide enough to accumulate a sum of many values without overflowing in practice.
    type Sum: Copy
        + Debug
        + PartialEq
        + ::num::Zero
        + ::num::ToPrimitive
        + Add<Output = Self::Sum>;

    fn widen(self) -> Self::Sum;
}

impl Primitive for bool {
    #[inline(always)]
    fn bits(self) -> u64 {
        self as u64
    }
}

impl Primitive for char {
    #[inline(always)]
    fn bits(self) -> u64 {
        self as u64
    }
}

macro_rules! integer_primitive {
    ($($t:ty),*) => {
        $(
            impl Primitive for $t {
                #[inline(always)]
                fn bits(self) -> u64 {
                    self as u64
                }
            }

            impl Numeric for $t {
                type Sum = i128;

                #[inline(always)]
                fn widen(self) -> Self::Sum {
                    self as i128
                }
            }
        )*
    };
}

integer_primitive!(i8, i16, i32, i64, u8, u16, u32, u64);

impl Primitive for f32 {
    #[inline(always)]
    fn bits(self) -> u64 {
        self.to_bits() as u64
    }
}

impl Numeric for f32 {
    type Sum = f64;

    #[inline(always)]
    fn widen(self) -> Self::Sum {
        self as f64
    }
}

impl Primitive for f64 {
    #[inline(always)]
    fn bits(self) -> u64 {
        self.to_bits()
    }
}

impl Numeric for f64 {
    type Sum = f64;

    #[inline(always)]
    fn widen(self) -> Self::Sum {
        self
    }
}
