use thiserror::Error;

pub type Result<T, E = TransportError> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("bus unavailable: {0}")]
    BusUnavailable(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("invalid transfer: {0}")]
    InvalidTransfer(&'static str),
}
