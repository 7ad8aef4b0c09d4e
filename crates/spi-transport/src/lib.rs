//! spi-transport: blocking SPI bus abstractions
//!
//! This crate provides the trait and types for talking to devices on a shared
//! SPI bus, with feature-gated backends. The default build enables a `mock`
//! backend so that binaries and tests can run on any host without hardware.

mod error;
pub use error::{Result, TransportError};

mod traits;
pub use traits::SpiBus;

#[cfg(feature = "mock")]
mod mock;

#[cfg(feature = "mock")]
pub use mock::MockSpi;

#[cfg(feature = "rpi")]
mod rpi;

#[cfg(feature = "rpi")]
pub use rpi::RppalSpi;

/// SPI clock used by the reference wiring (2 MHz).
pub const DEFAULT_CLOCK_HZ: u32 = 2_000_000;
