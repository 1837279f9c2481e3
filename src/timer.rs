//! Elapsed time measurement against a tick source.
//!
//! `ElapsedTimer` records a single baseline tick and reports `now - baseline`
//! on demand. Every operation is a rebase of that baseline, computed with
//! wrapping arithmetic so results stay correct across counter overflow.
//!
//! Elapsed spans longer than the counter range (e.g. ~49.7 days for a 32-bit
//! millisecond counter) alias to smaller values. Query often enough, or pick a
//! wider tick.

use core::time::Duration;

use crate::clock::TickSource;
use crate::config::TickRate;
use crate::error::TimerError;
use crate::tick::Tick;

/// Stopwatch over a platform tick counter.
///
/// Copying a timer copies its baseline: the copy reports the same elapsed
/// value at the same instant, and the two evolve independently afterwards.
#[derive(Debug, Clone, Copy)]
pub struct ElapsedTimer<C: TickSource> {
    baseline: C::Tick,
    clock: C,
}

impl<C: TickSource> ElapsedTimer<C> {
    /// Start a timer at the current tick.
    pub fn new(clock: C) -> Self {
        let baseline = clock.now();
        Self { baseline, clock }
    }

    /// Start a timer as if `initial` ticks had already passed.
    pub fn with_elapsed(clock: C, initial: C::Tick) -> Self {
        let baseline = clock.now().wrapping_sub(initial);
        Self { baseline, clock }
    }

    /// Start a timer as if `initial` had already passed.
    ///
    /// Fails if `initial` does not fit in the tick counter.
    pub fn with_elapsed_duration(clock: C, initial: Duration) -> Result<Self, TimerError> {
        let ticks = duration_to_ticks::<C>(initial)?;
        Ok(Self::with_elapsed(clock, ticks))
    }

    /// Ticks elapsed since the baseline.
    #[inline]
    pub fn elapsed(&self) -> C::Tick {
        self.clock.now().wrapping_sub(self.baseline)
    }

    /// Time elapsed since the baseline, at the clock's tick rate.
    pub fn elapsed_duration(&self) -> Duration {
        C::Rate::ticks_to_duration(self.elapsed().to_u64())
    }

    /// Rebase so that `elapsed()` reports `value` right now.
    pub fn set_elapsed(&mut self, value: C::Tick) {
        self.baseline = self.clock.now().wrapping_sub(value);
    }

    /// Rebase so that `elapsed_duration()` reports `value` (truncated to whole
    /// ticks) right now.
    ///
    /// On error the timer is left unchanged.
    pub fn set_elapsed_duration(&mut self, value: Duration) -> Result<(), TimerError> {
        let ticks = duration_to_ticks::<C>(value)?;
        self.set_elapsed(ticks);
        Ok(())
    }

    /// Restart from zero.
    pub fn reset(&mut self) {
        self.set_elapsed(C::Tick::ZERO);
    }

    /// Increase the elapsed value by `delta` ticks.
    ///
    /// Does not read the clock.
    pub fn advance(&mut self, delta: C::Tick) {
        self.baseline = self.baseline.wrapping_sub(delta);
    }

    /// Decrease the elapsed value by `delta` ticks.
    ///
    /// Does not read the clock. Rewinding past zero wraps to a large value.
    pub fn rewind(&mut self, delta: C::Tick) {
        self.baseline = self.baseline.wrapping_add(delta);
    }

    /// Copy reporting `delta` more ticks than `self`.
    #[must_use]
    pub fn advanced(mut self, delta: C::Tick) -> Self {
        self.advance(delta);
        self
    }

    /// Copy reporting `delta` fewer ticks than `self`.
    #[must_use]
    pub fn rewound(mut self, delta: C::Tick) -> Self {
        self.rewind(delta);
        self
    }

    /// Take over the baseline of `other`, keeping this timer's clock.
    pub fn assign_from<O>(&mut self, other: &ElapsedTimer<O>)
    where
        O: TickSource<Tick = C::Tick>,
    {
        self.baseline = other.baseline;
    }

    /// `true` once at least `period` ticks have elapsed.
    #[inline]
    pub fn has_elapsed(&self, period: C::Tick) -> bool {
        self.elapsed() >= period
    }

    /// Fire once per `interval` ticks.
    ///
    /// When at least `interval` ticks have elapsed, the baseline moves forward
    /// by exactly `interval` and `true` is returned, so lateness in calling
    /// this does not accumulate as drift. Missed intervals are reported one
    /// per call.
    pub fn poll_interval(&mut self, interval: C::Tick) -> bool {
        if self.has_elapsed(interval) {
            self.rewind(interval);
            true
        } else {
            false
        }
    }

    /// Baseline tick (the counter value treated as time zero).
    pub fn baseline(&self) -> C::Tick {
        self.baseline
    }

    /// The tick source this timer reads.
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

fn duration_to_ticks<C: TickSource>(duration: Duration) -> Result<C::Tick, TimerError> {
    C::Rate::duration_to_ticks(duration)
        .and_then(C::Tick::from_u64)
        .ok_or(TimerError::DurationOutOfRange {
            max_ticks: C::Tick::MAX.to_u64(),
        })
}

#[cfg(feature = "defmt")]
impl<C: TickSource> defmt::Format for ElapsedTimer<C> {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(
            f,
            "ElapsedTimer {{ baseline: {=u64} }}",
            self.baseline.to_u64()
        )
    }
}
