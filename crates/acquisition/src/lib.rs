//! acquisition: polling loop and resampling for slow-bus sensor capture
//!
//! The bus round-trip latency is far below the devices' internal sampling
//! rate, so the loop simply polls each device in a fixed round-robin order
//! and timestamps whatever comes back. The resulting irregular per-device
//! series can then be resampled onto a uniform time grid.

mod error;
pub use error::{AcquireError, Result};

mod sample;
pub use sample::{Reading, Sample, SampleBuffer};

mod clock;
pub use clock::{Clock, ManualClock, MonotonicClock};

mod channel;
pub use channel::SampleChannel;

mod runner;
pub use runner::{run, AcquisitionConfig, WARMUP_POLLS};

mod align;
pub use align::align;
