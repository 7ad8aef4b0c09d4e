use crate::Result;

/// A minimal blocking SPI bus interface.
///
/// Every transfer blocks until the bus round-trip completes; the bus is the
/// shared resource that defines ordering between devices.
pub trait SpiBus {
    /// Open a chip-select channel on the shared bus (0 or 1 on a Pi).
    fn open(channel: u8, clock_hz: u32) -> Result<Self>
    where
        Self: Sized;

    /// Full-duplex transfer: clock out `tx` while filling `rx`.
    /// Both slices must have the same length.
    fn transfer(&mut self, tx: &[u8], rx: &mut [u8]) -> Result<()>;

    /// Write-only transfer; whatever the device clocks back is discarded.
    fn write(&mut self, tx: &[u8]) -> Result<()>;
}
