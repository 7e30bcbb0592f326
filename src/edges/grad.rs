//! Sobel gradient response and clamped magnitude for a single pixel.
//!
//! Accumulation is in `i32`: samples are at most 255 and kernel weights lie in
//! `[-2, 2]`, so `|gx|, |gy| <= 1020` and `gx² + gy²` stays far below
//! `i32::MAX`.
use crate::image::{ImageU8, ImageView};

pub type Kernel3 = [[i32; 3]; 3];

pub const SOBEL_KERNEL_X: Kernel3 = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
pub const SOBEL_KERNEL_Y: Kernel3 = [[1, 2, 1], [0, 0, 0], [-1, -2, -1]];

/// Horizontal and vertical kernel responses at one pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Gradient {
    pub gx: i32,
    pub gy: i32,
}

/// Convolve both kernels around `(x, y)`, skipping out-of-bounds neighbors.
pub fn gradient_at(img: &ImageU8<'_>, x: usize, y: usize) -> Gradient {
    let mut g = Gradient::default();
    for (ky, dy) in (-1isize..=1).enumerate() {
        let Some(iy) = y.checked_add_signed(dy).filter(|&iy| iy < img.height()) else {
            continue;
        };
        let row = img.row(iy);
        for (kx, dx) in (-1isize..=1).enumerate() {
            let Some(&sample) = x.checked_add_signed(dx).and_then(|ix| row.get(ix)) else {
                continue;
            };
            let pixel = i32::from(sample);
            g.gx += pixel * SOBEL_KERNEL_X[ky][kx];
            g.gy += pixel * SOBEL_KERNEL_Y[ky][kx];
        }
    }
    g
}

/// Euclidean norm of the gradient, truncated toward zero (not rounded).
#[inline]
pub fn magnitude(gx: i32, gy: i32) -> i32 {
    let sq = f64::from(gx * gx + gy * gy);
    sq.sqrt() as i32
}

/// Clamp a magnitude into the 8-bit output range.
#[inline]
pub fn clamp_intensity(magnitude: i32) -> u8 {
    magnitude.clamp(0, 255) as u8
}

/// Output intensity for pixel `(x, y)`.
#[inline]
pub fn evaluate(img: &ImageU8<'_>, x: usize, y: usize) -> u8 {
    let g = gradient_at(img, x, y);
    clamp_intensity(magnitude(g.gx, g.gy))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATCH: [u8; 9] = [10, 20, 30, 40, 50, 60, 70, 80, 90];

    fn view(w: usize, h: usize, data: &[u8]) -> ImageU8<'_> {
        ImageU8::new(w, h, data).unwrap()
    }

    #[test]
    fn uniform_field_has_no_response() {
        let data = [255u8; 9];
        let img = view(3, 3, &data);
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(gradient_at(&img, x, y), Gradient { gx: 0, gy: 0 });
                assert_eq!(evaluate(&img, x, y), 0);
            }
        }
    }

    #[test]
    fn corner_skips_out_of_bounds_neighbors() {
        let img = view(3, 3, &PATCH);
        // Only (0,0)=10, (1,0)=20, (0,1)=40, (1,1)=50 take part.
        let g = gradient_at(&img, 0, 0);
        assert_eq!(g, Gradient { gx: 90, gy: -130 });
        assert_eq!(evaluate(&img, 0, 0), 158);
        // Replicating the border would give gx=40, gy=-120 -> 126.
        assert_ne!(evaluate(&img, 0, 0), 126);
    }

    #[test]
    fn opposite_corner_mirrors_the_skip_rule() {
        let img = view(3, 3, &PATCH);
        // Neighbors (1,1)=50, (2,1)=60, (1,2)=80, (2,2)=90.
        let g = gradient_at(&img, 2, 2);
        assert_eq!(g, Gradient { gx: -210, gy: 170 });
        // sqrt(73000) = 270.1..., clamped
        assert_eq!(evaluate(&img, 2, 2), 255);
    }

    #[test]
    fn interior_magnitude_is_truncated() {
        let img = view(3, 3, &PATCH);
        let g = gradient_at(&img, 1, 1);
        assert_eq!(g, Gradient { gx: 80, gy: -240 });
        // sqrt(64000) = 252.98..., truncation keeps 252
        assert_eq!(evaluate(&img, 1, 1), 252);
    }

    #[test]
    fn magnitude_truncates_toward_zero() {
        assert_eq!(magnitude(0, 0), 0);
        assert_eq!(magnitude(1, 1), 1);
        assert_eq!(magnitude(2, 3), 3);
        assert_eq!(magnitude(-3, 4), 5);
        assert_eq!(magnitude(1020, 1020), 1442);
    }

    #[test]
    fn clamp_covers_both_bounds() {
        assert_eq!(clamp_intensity(-1), 0);
        assert_eq!(clamp_intensity(i32::MIN), 0);
        assert_eq!(clamp_intensity(0), 0);
        assert_eq!(clamp_intensity(200), 200);
        assert_eq!(clamp_intensity(255), 255);
        assert_eq!(clamp_intensity(256), 255);
    }

    #[test]
    fn strong_step_saturates() {
        let data = [0u8, 0, 255, 0, 0, 255, 0, 0, 255];
        let img = view(3, 3, &data);
        let g = gradient_at(&img, 1, 1);
        assert_eq!(g, Gradient { gx: 1020, gy: 0 });
        assert_eq!(evaluate(&img, 1, 1), 255);
    }

    #[test]
    fn location_outside_image_yields_zero() {
        let img = view(3, 3, &PATCH);
        assert_eq!(evaluate(&img, 10, 10), 0);
        let empty = view(0, 0, &[]);
        assert_eq!(evaluate(&empty, 0, 0), 0);
    }
}
