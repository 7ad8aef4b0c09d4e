use crate::{registers, RawFrame};
use acquisition::{AcquireError, Reading, SampleChannel};
use spi_transport::{Result, SpiBus, TransportError};
use tracing::debug;

/// Register reads set bit 0 of the shifted address; writes leave it clear.
const READ_BIT: u8 = 1;

/// One ADXL357 behind a chip-select line of the shared bus.
pub struct Adxl357<B: SpiBus> {
    bus: B,
    label: String,
}

impl<B: SpiBus> Adxl357<B> {
    pub fn open(channel: u8, clock_hz: u32) -> Result<Self> {
        let bus = B::open(channel, clock_hz)?;
        Ok(Self {
            bus,
            label: format!("adxl357/{channel}"),
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Write one register; fails only if the bus transfer fails.
    pub fn write_register(&mut self, addr: u8, value: u8) -> Result<()> {
        self.bus.write(&[addr << 1, value])
    }

    /// Read `count` register bytes. The command byte is the shifted address
    /// with the read bit set, clocked out along with dummy bytes; the first
    /// byte received is a transfer artifact and is stripped from the result.
    pub fn read_registers(&mut self, addr: u8, count: usize) -> Result<Vec<u8>> {
        let mut tx = vec![0u8; count + 1];
        tx[0] = (addr << 1) | READ_BIT;
        let mut rx = vec![0u8; count + 1];
        self.bus.transfer(&tx, &mut rx)?;
        rx.remove(0);
        Ok(rx)
    }

    /// Enter measurement mode at the fastest supported output data rate.
    /// Runs once before the acquisition loop starts polling.
    pub fn init(&mut self) -> Result<()> {
        self.write_register(registers::POWER_CTL, registers::POWER_CTL_MEASURE)?;
        self.write_register(registers::FILTER, registers::FILTER_ODR_2KHZ)?;
        debug!(device = self.label, "measurement mode enabled");
        Ok(())
    }

    /// Read one 10-byte FIFO burst and decode it. `None` means the FIFO had
    /// nothing new for at least one axis this cycle.
    pub fn poll_fifo(&mut self) -> Result<Option<Reading>> {
        let mut tx = [0u8; RawFrame::LEN];
        tx[0] = (registers::FIFO_DATA << 1) | READ_BIT;
        let mut rx = [0u8; RawFrame::LEN];
        self.bus.transfer(&tx, &mut rx)?;
        Ok(RawFrame(rx).decode())
    }

    /// Whether the on-device FIFO overran since the last STATUS read.
    pub fn fifo_overrange(&mut self) -> Result<bool> {
        let status = self.read_registers(registers::STATUS, 1)?;
        Ok(status
            .first()
            .is_some_and(|s| s & registers::STATUS_FIFO_OVR != 0))
    }

    fn channel_error(&self, e: TransportError) -> AcquireError {
        AcquireError::Channel {
            channel: self.label.clone(),
            message: e.to_string(),
        }
    }
}

impl<B: SpiBus> SampleChannel for Adxl357<B> {
    fn initialize(&mut self) -> acquisition::Result<()> {
        self.init().map_err(|e| self.channel_error(e))
    }

    fn poll(&mut self) -> acquisition::Result<Option<Reading>> {
        self.poll_fifo().map_err(|e| self.channel_error(e))
    }

    fn overrange(&mut self) -> acquisition::Result<bool> {
        self.fifo_overrange().map_err(|e| self.channel_error(e))
    }

    fn label(&self) -> &str {
        &self.label
    }
}
