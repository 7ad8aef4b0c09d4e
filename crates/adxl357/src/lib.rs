//! adxl357: driver for the Analog Devices ADXL357 accelerometer over SPI
//!
//! Covers the small register surface the acquisition path needs: power and
//! output-data-rate setup, STATUS reads, and decoding of the 10-byte FIFO
//! bursts into calibrated three-axis readings.

pub mod registers;

mod frame;
pub use frame::{RawFrame, CALIBRATION_G_PER_LSB};

mod driver;
pub use driver::Adxl357;
