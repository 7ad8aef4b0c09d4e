use acquisition::Reading;

/// Scale from one raw LSB to gravities: a 20 g full-scale span (±10 g)
/// spread over 2^20 codes. Applied once at decode time.
pub const CALIBRATION_G_PER_LSB: f64 = 20.0 / (1 << 20) as f64;

/// Values at or above 2^19 wrap negative after subtracting the code span.
const CODE_SPAN: i32 = 1 << 20;
const SIGN_BIT: u8 = 0x80;

/// Bit 1 of each axis's low byte flags an empty FIFO slot.
const EMPTY_BIT: u8 = 0b10;

/// One 10-byte FIFO burst exactly as it comes off the bus. Byte 0 is the
/// artifact clocked in while the read command went out and carries no data;
/// bytes 1..=9 hold the x, y, z triplets.
#[derive(Debug, Clone, Copy)]
pub struct RawFrame(pub [u8; 10]);

impl RawFrame {
    pub const LEN: usize = 10;

    /// Decode into a calibrated reading. Yields `None` when any axis flags
    /// an empty slot: the FIFO had nothing new for that axis this cycle, so
    /// the whole frame is discarded.
    pub fn decode(&self) -> Option<Reading> {
        let d = &self.0;
        if d[3] & EMPTY_BIT != 0 || d[6] & EMPTY_BIT != 0 || d[9] & EMPTY_BIT != 0 {
            return None;
        }
        let x = decode_axis(d[1], d[2], d[3]);
        let y = decode_axis(d[4], d[5], d[6]);
        let z = decode_axis(d[7], d[8], d[9]);
        Some(Reading {
            x: f64::from(x) * CALIBRATION_G_PER_LSB,
            y: f64::from(y) * CALIBRATION_G_PER_LSB,
            z: f64::from(z) * CALIBRATION_G_PER_LSB,
        })
    }
}

/// Reassemble one axis from its packed triplet: 20 bits across three bytes,
/// with the low nibble of the third byte reserved for status flags.
fn decode_axis(hi: u8, mid: u8, lo: u8) -> i32 {
    let mut value = (i32::from(hi) << 12) | (i32::from(mid) << 4) | (i32::from(lo) >> 4);
    if hi & SIGN_BIT != 0 {
        value -= CODE_SPAN;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pack a 20-bit two's-complement axis value into its wire triplet.
    fn encode_axis(value: i32) -> (u8, u8, u8) {
        let u = (value as u32) & 0xF_FFFF;
        (
            ((u >> 12) & 0xFF) as u8,
            ((u >> 4) & 0xFF) as u8,
            ((u & 0xF) << 4) as u8,
        )
    }

    fn frame(x: i32, y: i32, z: i32) -> RawFrame {
        let mut d = [0u8; 10];
        for (i, v) in [x, y, z].into_iter().enumerate() {
            let (hi, mid, lo) = encode_axis(v);
            d[1 + 3 * i] = hi;
            d[2 + 3 * i] = mid;
            d[3 + 3 * i] = lo;
        }
        RawFrame(d)
    }

    #[test]
    fn test_decode_is_bit_exact() {
        let r = frame(1, -1, 0).decode().unwrap();
        assert_eq!(r.x, CALIBRATION_G_PER_LSB);
        assert_eq!(r.y, -CALIBRATION_G_PER_LSB);
        assert_eq!(r.z, 0.0);
    }

    #[test]
    fn test_sign_boundary() {
        // 2^19 - 1 is the largest positive code; 2^19 is the most negative.
        assert_eq!(decode_axis(0x7F, 0xFF, 0xF0), 524_287);
        assert_eq!(decode_axis(0x80, 0x00, 0x00), -524_288);
        assert_eq!(decode_axis(0x80, 0x00, 0x10), -524_287);
    }

    #[test]
    fn test_encode_decode_extremes() {
        let r = frame(524_287, -524_288, -524_287).decode().unwrap();
        assert_eq!(r.x, 524_287.0 * CALIBRATION_G_PER_LSB);
        assert_eq!(r.y, -524_288.0 * CALIBRATION_G_PER_LSB);
        assert_eq!(r.z, -524_287.0 * CALIBRATION_G_PER_LSB);
    }

    #[test]
    fn test_any_empty_bit_discards_frame() {
        for idx in [3, 6, 9] {
            let mut f = frame(100, 200, 300);
            f.0[idx] |= 0b10;
            assert!(f.decode().is_none(), "empty bit at byte {idx}");
        }
        assert!(frame(100, 200, 300).decode().is_some());
    }

    #[test]
    fn test_flag_nibble_does_not_leak_into_value() {
        // Low nibble of the third byte is padding/flags, not data. Bit 0
        // (DATA_RDY on hardware) must not change the decoded value.
        let mut f = frame(12_345, 0, 0);
        f.0[3] |= 0b01;
        let r = f.decode().unwrap();
        assert_eq!(r.x, 12_345.0 * CALIBRATION_G_PER_LSB);
    }

    #[test]
    fn test_full_scale_calibration() {
        // 2^19 codes at +10 g: full scale maps to the range edge.
        let r = frame(524_288 / 2, 0, 0).decode().unwrap();
        assert_eq!(r.x, 5.0);
    }
}
