#![allow(dead_code)]

/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard_u8(width: usize, height: usize, cell: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let cx = (x / cell) as i32;
            let cy = (y / cell) as i32;
            let sum = cx + cy;
            let val = if sum & 1 == 0 { 32u8 } else { 220u8 };
            img[y * width + x] = val;
        }
    }
    img
}

/// Dark left part (`x < split_x`), bright right part.
pub fn vertical_step_u8(width: usize, height: usize, split_x: usize) -> Vec<u8> {
    let mut img = vec![0u8; width * height];
    for row in img.chunks_mut(width) {
        for v in &mut row[split_x.min(width)..] {
            *v = 255;
        }
    }
    img
}

/// Deterministic pseudo-random texture (xorshift), useful for parity checks.
pub fn noise_u8(width: usize, height: usize, seed: u64) -> Vec<u8> {
    let mut state = seed | 1;
    (0..width * height)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 24) as u8
        })
        .collect()
}
