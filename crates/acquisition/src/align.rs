use crate::Sample;

/// Nearest-neighbor resampling of one channel's irregular series onto the
/// uniform grid `{0, Δ, 2Δ, ...}` with `Δ = 1 / target_freq_hz` and
/// `grid_len` points. Output times are the exact grid values, not the raw
/// timestamps; axis values are copied from the closest raw sample.
///
/// The cursor only moves forward, which makes the scan linear in the raw
/// count. That relies on raw timestamps being non-decreasing, which holds
/// by construction since the loop timestamps in acquisition order. The raw
/// rate is expected to exceed the target rate; undersampling is not
/// detected. If the raw series runs out before the grid does, every
/// remaining grid point repeats the last raw sample's values.
pub fn align(raw: &[Sample], target_freq_hz: u32, grid_len: usize) -> Vec<Sample> {
    let Some(first) = raw.first() else {
        return Vec::new();
    };
    if grid_len == 0 {
        return Vec::new();
    }
    let delta = 1.0 / f64::from(target_freq_hz);
    let mut out = Vec::with_capacity(grid_len);
    out.push(Sample { time: 0.0, ..*first });

    let mut cursor = 0usize;
    for i in 1..grid_len {
        let target = i as f64 * delta;
        let mut best = (raw[cursor].time - target).abs();
        // Advance while the distance to the grid point keeps shrinking; the
        // first increase means the closest sample has been passed.
        for (j, candidate) in raw.iter().enumerate().skip(cursor + 1) {
            let err = (candidate.time - target).abs();
            if err <= best {
                cursor = j;
                best = err;
            } else {
                break;
            }
        }
        out.push(Sample {
            time: target,
            ..raw[cursor]
        });
    }
    out
}
