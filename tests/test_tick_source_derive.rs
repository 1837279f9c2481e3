//! Tests for `#[derive(TickSource)]`.
//!
//! Platform tick functions are simulated with atomics, the way a HAL backs
//! `millis()` with a counter incremented from the SysTick interrupt.

use core::sync::atomic::{AtomicU16, AtomicU32, AtomicU64, Ordering};
use core::time::Duration;

use elapsed_millis::{ElapsedTimer, Hz, Micros, Millis, TickRate, TickSource};

static MILLIS: AtomicU32 = AtomicU32::new(0);
static MICROS: AtomicU64 = AtomicU64::new(0);
static RTC: AtomicU16 = AtomicU16::new(0);

mod hal {
    use super::*;

    pub fn millis() -> u32 {
        MILLIS.load(Ordering::Relaxed)
    }

    pub fn micros() -> u64 {
        MICROS.load(Ordering::Relaxed)
    }

    pub fn rtc_ticks() -> u16 {
        RTC.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Clone, Copy, TickSource)]
#[tick_source(now = hal::millis)]
struct SysTick;

#[derive(Debug, Clone, Copy, TickSource)]
#[tick_source(now = hal::micros, tick = u64, rate = Micros)]
struct HighRes;

#[derive(Debug, Clone, Copy, TickSource)]
#[tick_source(now = hal::rtc_ticks, tick = u16)]
#[tick_source(rate = Hz<1_024>)]
struct Rtc;

fn rate_of<S: TickSource>(_: &S) -> u32 {
    S::Rate::TICKS_PER_SECOND
}

// Each test drives its own counter, so tests can run in parallel

#[test]
fn test_defaults_are_u32_millis() {
    MILLIS.store(1_000, Ordering::Relaxed);
    let timer = ElapsedTimer::new(SysTick);

    MILLIS.store(1_500, Ordering::Relaxed);
    assert_eq!(timer.elapsed(), 500u32);
    assert_eq!(rate_of(&SysTick), Millis::TICKS_PER_SECOND);
    assert_eq!(timer.elapsed_duration(), Duration::from_millis(500));
}

#[test]
fn test_explicit_tick_and_rate() {
    MICROS.store(10, Ordering::Relaxed);
    let timer = ElapsedTimer::new(HighRes);

    MICROS.store(2_000_010, Ordering::Relaxed);
    assert_eq!(timer.elapsed(), 2_000_000u64);
    assert_eq!(timer.elapsed_duration(), Duration::from_secs(2));
}

#[test]
fn test_properties_across_attributes() {
    RTC.store(u16::MAX - 511, Ordering::Relaxed);
    let timer = ElapsedTimer::new(Rtc);

    // Wraps through zero
    RTC.store(512, Ordering::Relaxed);
    assert_eq!(timer.elapsed(), 1_024u16);
    assert_eq!(rate_of(&Rtc), 1_024);
    assert_eq!(timer.elapsed_duration(), Duration::from_secs(1));
}

#[test]
fn test_zero_sized_clock_timer_is_tick_sized() {
    assert_eq!(core::mem::size_of::<SysTick>(), 0);
    assert_eq!(core::mem::size_of::<ElapsedTimer<SysTick>>(), 4);
    assert_eq!(core::mem::size_of::<ElapsedTimer<HighRes>>(), 8);
    assert_eq!(core::mem::size_of::<ElapsedTimer<Rtc>>(), 2);
}
