//! Timing instrumentation for a filter pass.
//!
//! Reports are serializable so tools can dump them as JSON next to the
//! filtered image.

pub mod timing;

pub use timing::{BandTiming, DispatchReport};
