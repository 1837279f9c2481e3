//! Error types for timer operations.
//!
//! Tick arithmetic never fails. The only fallible surface is converting a
//! `core::time::Duration` into a tick count of fixed width.

use core::fmt;

/// Timer error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerError {
    /// Duration does not fit in the clock's tick counter
    DurationOutOfRange {
        /// Largest tick count the counter can hold
        max_ticks: u64,
    },
}

impl fmt::Display for TimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerError::DurationOutOfRange { max_ticks } => {
                write!(f, "Duration exceeds tick range (max {} ticks)", max_ticks)
            }
        }
    }
}

impl core::error::Error for TimerError {}
