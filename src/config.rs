//! Tick rate configuration.
//!
//! The `TickRate` trait fixes the frequency of a tick source at compile time,
//! without runtime overhead. It is only consulted when converting between raw
//! ticks and `core::time::Duration`.

use core::time::Duration;

const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Tick frequency of a clock.
///
/// Implementations define how many ticks make up one second. The conversion
/// helpers truncate sub-tick remainders.
pub trait TickRate {
    /// Ticks per second (must be non-zero)
    const TICKS_PER_SECOND: u32;

    /// Convert a tick count to a `Duration`.
    fn ticks_to_duration(ticks: u64) -> Duration {
        let tps = Self::TICKS_PER_SECOND as u64;
        let secs = ticks / tps;
        // rem < tps <= u32::MAX, so rem * 1e9 fits in u64
        let nanos = (ticks % tps) * NANOS_PER_SEC / tps;
        Duration::new(secs, nanos as u32)
    }

    /// Convert a `Duration` to whole ticks.
    ///
    /// Returns `None` if the tick count overflows `u64`.
    fn duration_to_ticks(duration: Duration) -> Option<u64> {
        let tps = Self::TICKS_PER_SECOND as u64;
        let whole = duration.as_secs().checked_mul(tps)?;
        let frac = duration.subsec_nanos() as u64 * tps / NANOS_PER_SEC;
        whole.checked_add(frac)
    }
}

/// Millisecond ticks, the common `millis()` counter.
///
/// - TICKS_PER_SECOND: 1_000
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Millis;

impl TickRate for Millis {
    const TICKS_PER_SECOND: u32 = 1_000;
}

/// Microsecond ticks, the common `micros()` counter.
///
/// - TICKS_PER_SECOND: 1_000_000
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Micros;

impl TickRate for Micros {
    const TICKS_PER_SECOND: u32 = 1_000_000;
}

/// Arbitrary tick frequency in Hz, e.g. `Hz<32_768>` for an RTC crystal.
///
/// `N = 0` is rejected when the rate is first used.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Hz<const N: u32>;

impl<const N: u32> TickRate for Hz<N> {
    const TICKS_PER_SECOND: u32 = {
        assert!(N > 0, "tick rate must be non-zero");
        N
    };
}
