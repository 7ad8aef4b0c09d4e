use crate::{AcquireError, Result};

/// Axis values from one decoded frame, in gravities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// One time-stamped reading. `time` is seconds since acquisition start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Sample {
    pub fn new(time: f64, reading: Reading) -> Self {
        Self {
            time,
            x: reading.x,
            y: reading.y,
            z: reading.z,
        }
    }
}

/// Append-only per-channel storage with a hard capacity. The loop owns one
/// buffer per channel; nothing else mutates it.
#[derive(Debug)]
pub struct SampleBuffer {
    samples: Vec<Sample>,
    capacity: usize,
}

impl SampleBuffer {
    /// Size for a nominal rate and duration, with 10% headroom above the
    /// nominal sample count to absorb rate jitter.
    pub fn with_target(freq_hz: u32, duration_s: u32) -> Self {
        let capacity = (1.1 * f64::from(freq_hz) * f64::from(duration_s)).ceil() as usize;
        Self {
            samples: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append one sample. Appending at capacity is rejected, never a silent
    /// overwrite.
    pub fn push(&mut self, sample: Sample) -> Result<()> {
        if self.samples.len() >= self.capacity {
            return Err(AcquireError::BufferFull {
                len: self.samples.len(),
                capacity: self.capacity,
            });
        }
        self.samples.push(sample);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(v: f64) -> Reading {
        Reading { x: v, y: v, z: v }
    }

    #[test]
    fn test_capacity_has_headroom() {
        let buf = SampleBuffer::with_target(1000, 3);
        assert_eq!(buf.capacity(), 3300);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_capacity_rounds_up() {
        // 1.1 * 3 * 1 = 3.3 -> 4
        let buf = SampleBuffer::with_target(3, 1);
        assert_eq!(buf.capacity(), 4);
    }

    #[test]
    fn test_push_at_capacity_rejected() {
        let mut buf = SampleBuffer::with_target(1, 1); // capacity 2
        buf.push(Sample::new(0.0, reading(1.0))).unwrap();
        buf.push(Sample::new(0.5, reading(2.0))).unwrap();
        let err = buf.push(Sample::new(1.0, reading(3.0))).unwrap_err();
        assert!(matches!(
            err,
            AcquireError::BufferFull {
                len: 2,
                capacity: 2
            }
        ));
        // Earlier samples are intact after the rejected append.
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.samples()[1].x, 2.0);
    }
}
