//! Fixed-width tick counter values.
//!
//! The `Tick` trait covers the unsigned integer widths a platform tick counter
//! can have. All arithmetic is wrapping, so differences stay correct across
//! counter overflow.

use core::fmt;

/// Unsigned fixed-width tick count with wrapping arithmetic.
///
/// Implemented for `u8`, `u16`, `u32`, `u64` and `usize`. Narrow widths are
/// mostly useful in tests, where wraparound is cheap to reach.
pub trait Tick: Copy + Eq + Ord + fmt::Debug {
    /// Zero ticks
    const ZERO: Self;

    /// Largest representable tick count (the counter wraps after this)
    const MAX: Self;

    /// Counter width in bits
    const BITS: u32;

    /// Modular addition.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Modular subtraction.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Widen to `u64`.
    fn to_u64(self) -> u64;

    /// Narrow from `u64`, `None` if the value does not fit.
    fn from_u64(value: u64) -> Option<Self>;
}

macro_rules! impl_tick {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Tick for $ty {
                const ZERO: Self = 0;
                const MAX: Self = <$ty>::MAX;
                const BITS: u32 = <$ty>::BITS;

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$ty>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$ty>::wrapping_sub(self, rhs)
                }

                #[inline]
                fn to_u64(self) -> u64 {
                    self as u64
                }

                #[inline]
                fn from_u64(value: u64) -> Option<Self> {
                    <$ty>::try_from(value).ok()
                }
            }
        )*
    };
}

impl_tick!(u8, u16, u32, u64, usize);
