//! Tick source abstraction for platform-agnostic time keeping.
//!
//! The `TickSource` trait is the only boundary to the platform: one call
//! returning the current value of a monotonically increasing, wrapping tick
//! counter. Hardware timers, interrupt handlers and clock setup stay on the
//! platform side.

use core::fmt;
use core::marker::PhantomData;

use crate::config::{Millis, TickRate};
use crate::tick::Tick;

/// Platform-agnostic tick counter.
///
/// Implementations must be cheap and non-blocking. The counter is expected to
/// increase monotonically and wrap silently at `Self::Tick::MAX`.
///
/// Platform clocks are usually zero-sized types (see `#[derive(TickSource)]`),
/// which keeps an `ElapsedTimer` exactly as wide as its tick.
pub trait TickSource {
    /// Counter width
    type Tick: Tick;

    /// Counter frequency
    type Rate: TickRate;

    /// Read the current tick count.
    fn now(&self) -> Self::Tick;
}

impl<S: TickSource + ?Sized> TickSource for &S {
    type Tick = S::Tick;
    type Rate = S::Rate;

    #[inline]
    fn now(&self) -> Self::Tick {
        (**self).now()
    }
}

/// Tick source backed by a plain function, such as a HAL's `millis()`.
pub struct FnTickSource<T, R = Millis> {
    now: fn() -> T,
    _rate: PhantomData<R>,
}

impl<T, R> FnTickSource<T, R> {
    /// Wrap a tick function.
    pub const fn new(now: fn() -> T) -> Self {
        Self {
            now,
            _rate: PhantomData,
        }
    }
}

// Copy for any `T` and `R`; a derive would bound both.
impl<T, R> Clone for FnTickSource<T, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, R> Copy for FnTickSource<T, R> {}

impl<T, R> fmt::Debug for FnTickSource<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTickSource").finish_non_exhaustive()
    }
}

impl<T: Tick, R: TickRate> TickSource for FnTickSource<T, R> {
    type Tick = T;
    type Rate = R;

    #[inline]
    fn now(&self) -> T {
        (self.now)()
    }
}

/// Host clock counting milliseconds since construction (requires `std` feature).
///
/// The count is truncated to `u32`, so it wraps after about 49.7 days exactly
/// like a 32-bit hardware `millis()` counter.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    /// Start counting from zero now.
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl TickSource for StdClock {
    type Tick = u32;
    type Rate = Millis;

    fn now(&self) -> u32 {
        self.origin.elapsed().as_millis() as u32
    }
}
