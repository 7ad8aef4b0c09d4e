use thiserror::Error;

pub type Result<T, E = AcquireError> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum AcquireError {
    #[error("channel {channel}: {message}")]
    Channel { channel: String, message: String },
    #[error("buffer full: {len} samples at capacity {capacity}")]
    BufferFull { len: usize, capacity: usize },
}
