use crate::{Result, SpiBus, TransportError};
use rppal::spi::{Bus, Mode, SlaveSelect, Spi};
use tracing::debug;

/// Hardware SPI on a Raspberry Pi via rppal. The ADXL357 talks SPI mode 0.
pub struct RppalSpi {
    spi: Spi,
}

impl SpiBus for RppalSpi {
    fn open(channel: u8, clock_hz: u32) -> Result<Self> {
        let select = match channel {
            0 => SlaveSelect::Ss0,
            1 => SlaveSelect::Ss1,
            2 => SlaveSelect::Ss2,
            _ => {
                return Err(TransportError::BusUnavailable(format!(
                    "no slave select line for channel {channel}"
                )))
            }
        };
        let spi = Spi::new(Bus::Spi0, select, clock_hz, Mode::Mode0)
            .map_err(|e| TransportError::BusUnavailable(e.to_string()))?;
        debug!(channel, clock_hz, "opened SPI channel");
        Ok(Self { spi })
    }

    fn transfer(&mut self, tx: &[u8], rx: &mut [u8]) -> Result<()> {
        if tx.len() != rx.len() {
            return Err(TransportError::InvalidTransfer("tx/rx length mismatch"));
        }
        self.spi
            .transfer(rx, tx)
            .map_err(|e| TransportError::Io(e.to_string()))?;
        Ok(())
    }

    fn write(&mut self, tx: &[u8]) -> Result<()> {
        self.spi
            .write(tx)
            .map_err(|e| TransportError::Io(e.to_string()))?;
        Ok(())
    }
}
