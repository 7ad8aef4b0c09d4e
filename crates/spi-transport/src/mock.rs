use crate::{Result, SpiBus, TransportError};
use std::collections::VecDeque;
use tracing::debug;

/// A simple in-process mock bus. Responses for full-duplex transfers are
/// scripted ahead of time; an exhausted script answers with zero bytes.
/// Write-only transfers are recorded for inspection.
pub struct MockSpi {
    channel: u8,
    responses: VecDeque<Vec<u8>>,
    writes: Vec<Vec<u8>>,
}

impl MockSpi {
    /// Queue the receive bytes for the next `transfer` call.
    pub fn queue_response(&mut self, rx: &[u8]) {
        self.responses.push_back(rx.to_vec());
    }

    /// Every command sent through `write`, oldest first.
    pub fn writes(&self) -> &[Vec<u8>] {
        &self.writes
    }

    pub fn channel(&self) -> u8 {
        self.channel
    }
}

impl SpiBus for MockSpi {
    fn open(channel: u8, clock_hz: u32) -> Result<Self> {
        debug!(channel, clock_hz, "opened mock SPI channel");
        Ok(Self {
            channel,
            responses: VecDeque::new(),
            writes: Vec::new(),
        })
    }

    fn transfer(&mut self, tx: &[u8], rx: &mut [u8]) -> Result<()> {
        if tx.len() != rx.len() {
            return Err(TransportError::InvalidTransfer("tx/rx length mismatch"));
        }
        match self.responses.pop_front() {
            Some(scripted) => {
                if scripted.len() != rx.len() {
                    return Err(TransportError::InvalidTransfer("scripted length mismatch"));
                }
                rx.copy_from_slice(&scripted);
            }
            None => rx.fill(0),
        }
        Ok(())
    }

    fn write(&mut self, tx: &[u8]) -> Result<()> {
        self.writes.push(tx.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_response_round_trip() {
        let mut bus = MockSpi::open(0, 1_000_000).unwrap();
        bus.queue_response(&[0xAA, 0xBB, 0xCC]);
        let mut rx = [0u8; 3];
        bus.transfer(&[0x01, 0x00, 0x00], &mut rx).unwrap();
        assert_eq!(rx, [0xAA, 0xBB, 0xCC]);
    }

    #[test]
    fn test_exhausted_script_yields_zeros() {
        let mut bus = MockSpi::open(0, 1_000_000).unwrap();
        let mut rx = [0xFFu8; 4];
        bus.transfer(&[0; 4], &mut rx).unwrap();
        assert_eq!(rx, [0, 0, 0, 0]);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let mut bus = MockSpi::open(1, 1_000_000).unwrap();
        let mut rx = [0u8; 2];
        let err = bus.transfer(&[0; 3], &mut rx).unwrap_err();
        assert!(matches!(err, TransportError::InvalidTransfer(_)));
    }

    #[test]
    fn test_writes_recorded_in_order() {
        let mut bus = MockSpi::open(1, 1_000_000).unwrap();
        bus.write(&[0x5A, 0x00]).unwrap();
        bus.write(&[0x50, 0x01]).unwrap();
        assert_eq!(bus.writes(), &[vec![0x5A, 0x00], vec![0x50, 0x01]]);
        assert_eq!(bus.channel(), 1);
    }
}
