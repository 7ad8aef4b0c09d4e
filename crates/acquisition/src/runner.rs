use crate::{Clock, Result, Sample, SampleBuffer, SampleChannel};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Discarded polls per channel before the timed window opens. The device
/// FIFO may hold stale samples captured before the configured output rate
/// took effect.
pub const WARMUP_POLLS: usize = 10;

#[derive(Debug, Clone, Copy)]
pub struct AcquisitionConfig {
    /// Wall-clock length of the capture window.
    pub duration: Duration,
    /// Nominal per-device rate, used only to size the buffers.
    pub target_freq_hz: u32,
}

/// Round-robins over the channels until the window elapses, timestamping
/// each retrieved reading against the shared start instant. Returns one
/// buffer per channel, in channel order.
///
/// The elapsed-time check runs before every poll, so no new poll starts
/// once the window has closed; the last in-flight transfer still lands.
/// A full buffer closes the window early with a warning and keeps the data
/// collected so far.
pub fn run(
    channels: &mut [Box<dyn SampleChannel>],
    clock: &mut dyn Clock,
    config: &AcquisitionConfig,
) -> Result<Vec<SampleBuffer>> {
    for channel in channels.iter_mut() {
        channel.initialize()?;
    }
    warm_up(channels)?;

    let duration_s = config.duration.as_secs() as u32;
    let mut buffers: Vec<SampleBuffer> = channels
        .iter()
        .map(|_| SampleBuffer::with_target(config.target_freq_hz, duration_s))
        .collect();

    let start = clock.now();
    'window: loop {
        for (channel, buffer) in channels.iter_mut().zip(buffers.iter_mut()) {
            if clock.now().saturating_sub(start) >= config.duration {
                break 'window;
            }
            let Some(reading) = channel.poll()? else {
                continue;
            };
            let elapsed = clock.now().saturating_sub(start);
            let sample = Sample::new(elapsed.as_secs_f64(), reading);
            if let Err(e) = buffer.push(sample) {
                warn!(
                    channel = channel.label(),
                    error = %e,
                    "buffer full, closing capture window early"
                );
                break 'window;
            }
            debug!(
                channel = channel.label(),
                t = sample.time,
                x = sample.x,
                y = sample.y,
                z = sample.z,
                "sample"
            );
        }
    }
    let elapsed = clock.now().saturating_sub(start);
    info!(elapsed_s = elapsed.as_secs_f64(), "capture window closed");

    for channel in channels.iter_mut() {
        if channel.overrange()? {
            warn!(
                channel = channel.label(),
                "device FIFO overran during capture, samples were dropped"
            );
        }
    }

    Ok(buffers)
}

fn warm_up(channels: &mut [Box<dyn SampleChannel>]) -> Result<()> {
    for _ in 0..WARMUP_POLLS {
        for channel in channels.iter_mut() {
            let _ = channel.poll()?;
        }
    }
    Ok(())
}
