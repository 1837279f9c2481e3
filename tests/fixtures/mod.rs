//! Test fixtures for elapsed-millis testing.
//!
//! Provides:
//! - `MockClock`: Manually driven tick counter of any width
//! - `ScriptedClock`: Replays a fixed sequence of ticks, one per read

#![allow(dead_code)]

use core::cell::{Cell, RefCell};
use core::marker::PhantomData;

use elapsed_millis::{Millis, Tick, TickRate, TickSource};

// ============================================================================
// MockClock - Manually Driven Counter
// ============================================================================

/// Mock tick counter.
///
/// Time only moves when the test says so. Interior mutability lets timers
/// hold `&MockClock` while the test drives it.
#[derive(Debug)]
pub struct MockClock<T: Tick, R: TickRate = Millis> {
    ticks: Cell<T>,
    reads: Cell<usize>,
    _rate: PhantomData<R>,
}

impl<T: Tick, R: TickRate> MockClock<T, R> {
    /// Create a clock reading `tick`.
    pub fn at(tick: T) -> Self {
        Self {
            ticks: Cell::new(tick),
            reads: Cell::new(0),
            _rate: PhantomData,
        }
    }

    /// Jump to an absolute tick.
    pub fn set(&self, tick: T) {
        self.ticks.set(tick);
    }

    /// Move forward by `delta` ticks, wrapping like hardware.
    pub fn tick(&self, delta: T) {
        self.ticks.set(self.ticks.get().wrapping_add(delta));
    }

    /// Number of `now()` calls so far.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl<T: Tick, R: TickRate> TickSource for MockClock<T, R> {
    type Tick = T;
    type Rate = R;

    fn now(&self) -> T {
        self.reads.set(self.reads.get() + 1);
        self.ticks.get()
    }
}

// ============================================================================
// ScriptedClock - Replayed Tick Sequence
// ============================================================================

/// Maximum number of scripted ticks
pub const SCRIPT_LEN: usize = 32;

/// Clock returning a scripted sequence of ticks.
///
/// Each `now()` pops the next tick. Once the script runs out, the last tick
/// is repeated (time stands still).
#[derive(Debug)]
pub struct ScriptedClock {
    script: RefCell<heapless::Deque<u32, SCRIPT_LEN>>,
    last: Cell<u32>,
}

impl ScriptedClock {
    /// Create a clock replaying `ticks` in order.
    pub fn new(ticks: &[u32]) -> Self {
        let mut script = heapless::Deque::new();
        for &tick in ticks {
            script.push_back(tick).expect("script too long");
        }
        Self {
            script: RefCell::new(script),
            last: Cell::new(0),
        }
    }

    /// Ticks not yet replayed.
    pub fn remaining(&self) -> usize {
        self.script.borrow().len()
    }
}

impl TickSource for ScriptedClock {
    type Tick = u32;
    type Rate = Millis;

    fn now(&self) -> u32 {
        if let Some(tick) = self.script.borrow_mut().pop_front() {
            self.last.set(tick);
        }
        self.last.get()
    }
}
