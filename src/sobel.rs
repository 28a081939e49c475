//! Sobel edge detection on grayscale images.
//!
//! 3x3 Gx/Gy convolution with zero padding outside the image; the gradient
//! magnitude is truncated and clamped to 255.

use rayon::prelude::*;

/// Computes the edge image of `gray` (one byte per pixel, row-major) on a
/// single thread. Panics if the buffer length does not match
/// `width * height`.
pub fn edges(gray: &[u8], width: usize, height: usize) -> Vec<u8> {
    assert_eq!(gray.len(), width * height);
    let mut out = vec![0; gray.len()];
    for (row, line) in out.chunks_exact_mut(width.max(1)).enumerate() {
        edge_row(gray, line, row, width, height);
    }
    out
}

/// Same operator with one rayon task per output row. The input is only
/// read, so the result is identical to [`edges`].
pub fn edges_parallel(gray: &[u8], width: usize, height: usize) -> Vec<u8> {
    assert_eq!(gray.len(), width * height);
    let mut out = vec![0; gray.len()];
    out.par_chunks_exact_mut(width.max(1))
        .enumerate()
        .for_each(|(row, line)| edge_row(gray, line, row, width, height));
    out
}

fn edge_row(gray: &[u8], line: &mut [u8], row: usize, width: usize, height: usize) {
    for (col, out) in line.iter_mut().enumerate() {
        let p = |dy: isize, dx: isize| pixel(gray, row as isize + dy, col as isize + dx, width, height);

        let gx = -p(-1, -1) - 2 * p(-1, 0) - p(-1, 1) + p(1, -1) + 2 * p(1, 0) + p(1, 1);
        let gy = -p(-1, -1) - 2 * p(0, -1) - p(1, -1) + p(-1, 1) + 2 * p(0, 1) + p(1, 1);

        let magnitude = ((gx * gx + gy * gy) as f32).sqrt() as i32;
        *out = magnitude.min(255) as u8;
    }
}

/// Reads a pixel, treating everything outside the image as black.
fn pixel(gray: &[u8], y: isize, x: isize, width: usize, height: usize) -> i32 {
    if x < 0 || x >= width as isize || y < 0 || y >= height as isize {
        return 0;
    }
    gray[y as usize * width + x as usize] as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_image_has_no_edges() {
        let gray = vec![200; 6 * 4];
        let out = edges(&gray, 6, 4);
        // Interior gradients cancel; only the image border reacts to the
        // zero padding.
        for row in 1..3 {
            for col in 1..5 {
                assert_eq!(out[row * 6 + col], 0);
            }
        }
        assert!(out[0] > 0);
    }

    #[test]
    fn vertical_step_edge() {
        // Left half 0, right half 255 in a 4x3 image.
        let gray = vec![
            0, 0, 255, 255, //
            0, 0, 255, 255, //
            0, 0, 255, 255,
        ];
        let out = edges(&gray, 4, 3);
        // Middle row, columns adjacent to the step: Gx = +/-1020, clamped.
        assert_eq!(out[4 + 1], 255);
        assert_eq!(out[4 + 2], 255);
    }

    #[test]
    fn parallel_matches_serial() {
        let gray: Vec<u8> = (0..64u32 * 48).map(|i| (i * 37 % 256) as u8).collect();
        assert_eq!(edges(&gray, 64, 48), edges_parallel(&gray, 64, 48));
    }

    #[test]
    fn empty_image() {
        assert!(edges(&[], 0, 0).is_empty());
        assert!(edges_parallel(&[], 0, 0).is_empty());
    }
}
