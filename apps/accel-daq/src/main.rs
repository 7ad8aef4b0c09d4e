use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use std::time::Duration;
use tracing::info;

use acquisition::{AcquisitionConfig, MonotonicClock, Sample, SampleBuffer, SampleChannel};
use adxl357::Adxl357;
use spi_transport::DEFAULT_CLOCK_HZ;

/// Chip-select channels of the two sensors on the shared bus.
const DEVICE_CHANNELS: [u8; 2] = [0, 1];

const FREQ_MAX: u32 = 2000;
const FREQ_DEFAULT: u32 = 1000;
const TIME_DEFAULT: u32 = 1;

#[derive(Parser, Debug)]
#[command(
    name = "accel-daq",
    version,
    about = "Stream dual ADXL357 accelerometer data over SPI"
)]
struct Cli {
    /// Save CSV data to FILE (printed to stdout if not specified)
    #[arg(short = 's', long = "save", value_name = "FILE")]
    save: Option<String>,

    /// Duration of the data stream in seconds
    #[arg(short = 't', long = "time", value_name = "SECONDS", default_value_t = TIME_DEFAULT)]
    time: u32,

    /// Target sampling rate in Hz; sizes the buffers and the alignment grid
    /// (the devices always run at their fastest internal rate)
    #[arg(short = 'f', long = "freq", value_name = "FREQ", default_value_t = FREQ_DEFAULT)]
    freq: u32,

    /// Resample each device onto the uniform grid before output
    #[arg(long, action = ArgAction::SetTrue)]
    align: bool,

    /// Use the mock SPI backend (portable)
    #[arg(long, action = ArgAction::SetTrue)]
    mock: bool,
}

fn main() -> ExitCode {
    setup_tracing();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version also land here; only real parse errors fail.
            let failed = e.use_stderr();
            let _ = e.print();
            return if failed {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn setup_tracing() {
    // Best-effort; avoid panics if already set
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    if cli.freq < 1 || cli.freq > FREQ_MAX {
        anyhow::bail!("freq must be within 1..={FREQ_MAX}, got {}", cli.freq);
    }
    if cli.time == 0 {
        anyhow::bail!("time must be at least 1 second");
    }

    let mut channels = open_channels(cli.mock)?;
    let config = AcquisitionConfig {
        duration: Duration::from_secs(u64::from(cli.time)),
        target_freq_hz: cli.freq,
    };
    let mut clock = MonotonicClock::new();
    let buffers = acquisition::run(&mut channels, &mut clock, &config)?;
    for (channel, buffer) in channels.iter().zip(&buffers) {
        info!(
            channel = channel.label(),
            samples = buffer.len(),
            "acquisition complete"
        );
    }

    let series = output_series(&buffers, cli.align, cli.freq, cli.time);
    match cli.save.as_deref() {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("creating {path}"))?;
            let mut writer = BufWriter::new(file);
            write_csv(&mut writer, &series)?;
            writer.flush()?;
            info!(path, "wrote CSV");
        }
        None => {
            let stdout = io::stdout();
            write_csv(&mut stdout.lock(), &series)?;
        }
    }
    Ok(())
}

fn open_channels(mock: bool) -> Result<Vec<Box<dyn SampleChannel>>> {
    let mut out: Vec<Box<dyn SampleChannel>> = Vec::new();
    for channel in DEVICE_CHANNELS {
        if mock {
            let dev = Adxl357::<spi_transport::MockSpi>::open(channel, DEFAULT_CLOCK_HZ)
                .with_context(|| format!("opening mock SPI channel {channel}"))?;
            out.push(Box::new(dev));
        } else {
            #[cfg(feature = "rpi")]
            {
                let dev = Adxl357::<spi_transport::RppalSpi>::open(channel, DEFAULT_CLOCK_HZ)
                    .with_context(|| format!("opening SPI channel {channel}"))?;
                out.push(Box::new(dev));
            }
            #[cfg(not(feature = "rpi"))]
            anyhow::bail!("built without SPI hardware support (rpi feature); pass --mock");
        }
    }
    Ok(out)
}

/// One output block per device: either the raw timestamped series or the
/// series resampled onto the uniform grid at the target rate.
fn output_series(
    buffers: &[SampleBuffer],
    do_align: bool,
    freq: u32,
    time_s: u32,
) -> Vec<Vec<Sample>> {
    buffers
        .iter()
        .map(|buf| {
            if do_align {
                let grid_len = (freq as usize) * (time_s as usize);
                acquisition::align(buf.samples(), freq, grid_len)
            } else {
                buf.samples().to_vec()
            }
        })
        .collect()
}

/// CSV with one device's block after the other, not time-interleaved.
fn write_csv<W: Write>(writer: &mut W, series: &[Vec<Sample>]) -> Result<()> {
    writeln!(writer, "time, x, y, z")?;
    for block in series {
        for s in block {
            writeln!(writer, "{:.6}, {:.6}, {:.6}, {:.6}", s.time, s.x, s.y, s.z)?;
        }
    }
    Ok(())
}
