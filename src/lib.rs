#![doc = include_str!("../README.md")]

pub mod bands;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod edges;
pub mod error;
pub mod image;

// --- High-level re-exports -------------------------------------------------

pub use crate::bands::{
    filter, filter_with_report, partition_rows, Band, WorkerCount, MAX_WORKERS,
};
pub use crate::diagnostics::DispatchReport;
pub use crate::error::FilterError;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use sobel_bands::prelude::*;
///
/// # fn main() -> Result<(), FilterError> {
/// let (w, h) = (640usize, 480usize);
/// let gray = vec![0u8; w * h];
/// let img = ImageU8::new(w, h, &gray)?;
///
/// let (edges, report) = filter_with_report(&img, 4)?;
/// println!("{}x{} in {:.3} ms", edges.width(), edges.height(), report.elapsed_ms);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{GrayImageU8, ImageU8};
    pub use crate::{filter, filter_with_report, FilterError, MAX_WORKERS};
}
