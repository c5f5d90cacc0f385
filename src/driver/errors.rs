use thiserror::Error;

/// Errors that can occur while writing the transcript
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("Failed to write transcript: {0}")]
    Io(#[from] std::io::Error),
}
