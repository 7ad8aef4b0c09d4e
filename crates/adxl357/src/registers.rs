//! ADXL357 register addresses and the values the driver writes.

pub const DEVID_AD: u8 = 0x00;
pub const STATUS: u8 = 0x04;
pub const FIFO_DATA: u8 = 0x11;
pub const FILTER: u8 = 0x28;
pub const POWER_CTL: u8 = 0x2D;

/// STATUS bit: the on-device FIFO overran and dropped samples.
pub const STATUS_FIFO_OVR: u8 = 0b100;

/// POWER_CTL value entering measurement mode (standby bit cleared).
pub const POWER_CTL_MEASURE: u8 = 0x00;

/// FILTER value selecting a 2 kHz output data rate with no high-pass filter.
pub const FILTER_ODR_2KHZ: u8 = 0x01;
