//! Per-pixel Sobel evaluation on 8-bit grayscale images.
//!
//! - Integer 3×3 kernel pair (`X` and `Y`) as compile-time constants.
//! - Borders use a zero-skip rule: neighbors outside the image contribute
//!   nothing. There is no clamping to the edge and no reflection, so border
//!   responses are systematically weaker than interior ones.
//! - Magnitude `sqrt(gx² + gy²)` is truncated to an integer, then clamped to
//!   `[0, 255]`.
//!
//! The evaluator is a pure function of the view and the location; the band
//! dispatcher calls it once per output pixel.

pub mod grad;

pub use grad::{
    clamp_intensity, evaluate, gradient_at, magnitude, Gradient, Kernel3, SOBEL_KERNEL_X,
    SOBEL_KERNEL_Y,
};
