//! # elapsed-millis
//!
//! Wraparound-safe elapsed time measurement for embedded systems.
//!
//! **Key features:**
//! - **Value type** - An `ElapsedTimer` is one baseline tick plus its clock
//! - **Injected clock** - The platform tick counter is a `TickSource`, not a global
//! - **Zero-cost clocks** - `#[derive(TickSource)]` binds a HAL `millis()` to a zero-sized type
//! - **Overflow-safe** - All tick arithmetic wraps, so counter rollover is harmless
//! - **Any width** - `u8` through `u64` tick counters, at any compile-time `TickRate`
//!
//! ```ignore
//! use elapsed_millis::{ElapsedTimer, TickSource};
//!
//! #[derive(Clone, Copy, TickSource)]
//! #[tick_source(now = hal::millis)]
//! struct SysTick;
//!
//! let mut blink = ElapsedTimer::new(SysTick);
//! loop {
//!     if blink.poll_interval(500) {
//!         led.toggle();
//!     }
//! }
//! ```
//!
//! ## Optional Features
//!
//! - `std` - `StdClock`, a host millisecond counter backed by `std::time::Instant`
//! - `defmt` - `defmt::Format` for timers and errors
//!
//! This library is `no_std` compatible.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

#[cfg(feature = "std")]
extern crate std;

// Re-export derive macro (always available)
pub use elapsed_millis_macros::TickSource;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod clock;
pub mod config;
pub mod error;
pub mod tick;
pub mod timer;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Tick source (the trait shares its name with the derive macro)
pub use clock::FnTickSource;
pub use clock::TickSource;

#[cfg(feature = "std")]
pub use clock::StdClock;

// Configuration
pub use config::{Hz, Micros, Millis, TickRate};

// Error types
pub use error::TimerError;

pub use tick::Tick;
pub use timer::ElapsedTimer;

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
