use crate::{Reading, Result};

/// One pollable sensor on the shared bus. The loop drives any number of
/// devices through a homogeneous collection of these.
pub trait SampleChannel {
    /// Put the device into measurement mode; called once before polling.
    fn initialize(&mut self) -> Result<()>;

    /// Attempt one FIFO read. `Ok(None)` is the normal, frequent outcome of
    /// polling faster than the device produces data, not an error.
    fn poll(&mut self) -> Result<Option<Reading>>;

    /// Whether the device-side FIFO overran since last asked.
    fn overrange(&mut self) -> Result<bool> {
        Ok(false)
    }

    /// Stable name used in logs and diagnostics.
    fn label(&self) -> &str;
}
