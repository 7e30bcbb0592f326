//! Errors raised by the band dispatcher before or during a filter pass.
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Worker count outside `1..=MAX_WORKERS`; nothing has been computed.
    #[error("number of workers must be between 1 and {max}, got {requested}")]
    InvalidWorkerCount { requested: usize, max: usize },
    /// The pixel slice is too short for the declared dimensions.
    #[error("image buffer of {actual} bytes does not match {width}x{height} (expected {expected})")]
    BufferShape {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
    #[error("failed to allocate {bytes} bytes for the output image")]
    OutputAllocation { bytes: usize },
    #[error("worker for rows {start_row}..{end_row} panicked")]
    WorkerPanicked { start_row: usize, end_row: usize },
}
