//! Mandelbrot set rendering.
//!
//! Maps the viewport x in [-2.5, 1.0), y in [-1.0, 1.0) over the image,
//! iterates z := z^2 + c up to 800 times per pixel, and writes a smoothly
//! scaled escape count to the green channel
//! (smoothing: http://linas.org/art-gallery/escape/).

use rayon::prelude::*;

use crate::raster::Image;

const MAX_ITERATION: u32 = 800;

/// Renders the set pixel by pixel on a single thread.
pub fn render(width: usize, height: usize) -> Image {
    let mut img = Image::new(width, height);
    if width == 0 {
        return img;
    }
    for (row, line) in img.pixels.chunks_exact_mut(width * 4).enumerate() {
        render_row(line, row, width, height);
    }
    img
}

/// Renders the set with one rayon task per row. Rows are independent, so
/// the output is byte-for-byte identical to [`render`].
pub fn render_parallel(width: usize, height: usize) -> Image {
    let mut img = Image::new(width, height);
    if width == 0 {
        return img;
    }
    img.pixels
        .par_chunks_exact_mut(width * 4)
        .enumerate()
        .for_each(|(row, line)| render_row(line, row, width, height));
    img
}

fn render_row(line: &mut [u8], row: usize, width: usize, height: usize) {
    for (col, px) in line.chunks_exact_mut(4).enumerate() {
        let green = escape_color(col, row, width, height);
        px[0] = 0;
        px[1] = green;
        px[2] = 0;
        px[3] = 255;
    }
}

fn escape_color(col: usize, row: usize, width: usize, height: usize) -> u8 {
    let x0 = col as f32 / width as f32 * 3.5 - 2.5;
    let y0 = row as f32 / height as f32 * 2.0 - 1.0;

    let mut x = 0.0f32;
    let mut y = 0.0f32;
    let mut iter = 0u32;
    while x * x + y * y <= 4.0 && iter < MAX_ITERATION {
        let xtemp = x * x - y * y + x0;
        y = 2.0 * x * y + y0;
        x = xtemp;
        iter += 1;
    }

    let smooth = 1.0 + iter as f32 - ((x * x + y * y).sqrt().ln()).ln() / 2.0f32.ln();
    let color = 8.0 * 255.0 * smooth / MAX_ITERATION as f32;
    if color.is_nan() || color < 0.0 {
        0
    } else if color > 255.0 {
        255
    } else {
        color as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallel_matches_serial() {
        let serial = render(64, 48);
        let parallel = render_parallel(64, 48);
        assert_eq!(serial, parallel);
    }

    #[test]
    fn only_green_channel_is_used() {
        let img = render(32, 32);
        for px in img.pixels.chunks_exact(4) {
            assert_eq!(px[0], 0);
            assert_eq!(px[2], 0);
            assert_eq!(px[3], 255);
        }
    }

    #[test]
    fn interior_point_renders_dark() {
        // col 4 of width 7 maps to x0 = -0.5, row 1 of height 2 to y0 = 0.
        // c = -0.5 never escapes, the orbit settles below |z| = 1, and the
        // smoothing log goes NaN, which the clamp maps to 0.
        let width = 7;
        let img = render(width, 2);
        assert_eq!(img.rgba(width + 4)[1], 0);
    }

    #[test]
    fn far_exterior_escapes_quickly() {
        // col 0, row 0 maps to c = -2.5 - i, well outside the set.
        let img = render(8, 8);
        assert!(img.rgba(0)[1] < 64);
    }
}
