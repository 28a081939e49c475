//! Per-channel RGB histograms.
//!
//! Counts the red, green, and blue byte values of every pixel; the alpha
//! channel is ignored. The parallel variant folds partial histograms per
//! rayon task and merges them, so no counter is ever shared between
//! threads.

use rayon::prelude::*;

use crate::raster::Image;

/// 256-bucket counters for each color channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    pub r: [u32; 256],
    pub g: [u32; 256],
    pub b: [u32; 256],
}

impl Default for Histogram {
    fn default() -> Self {
        Self {
            r: [0; 256],
            g: [0; 256],
            b: [0; 256],
        }
    }
}

impl Histogram {
    fn count(&mut self, px: &[u8]) {
        self.r[px[0] as usize] += 1;
        self.g[px[1] as usize] += 1;
        self.b[px[2] as usize] += 1;
    }

    fn merge(mut self, other: Histogram) -> Histogram {
        for i in 0..256 {
            self.r[i] += other.r[i];
            self.g[i] += other.g[i];
            self.b[i] += other.b[i];
        }
        self
    }

    /// Total count per channel; equals the pixel count for each channel.
    pub fn totals(&self) -> (u64, u64, u64) {
        (
            self.r.iter().map(|&c| c as u64).sum(),
            self.g.iter().map(|&c| c as u64).sum(),
            self.b.iter().map(|&c| c as u64).sum(),
        )
    }
}

/// Computes the histogram on a single thread.
pub fn histogram(img: &Image) -> Histogram {
    let mut hist = Histogram::default();
    for px in img.pixels.chunks_exact(4) {
        hist.count(px);
    }
    hist
}

/// Computes the histogram with rayon: each task folds pixels into its own
/// local histogram, and the partial histograms are merged at the end.
pub fn histogram_parallel(img: &Image) -> Histogram {
    img.pixels
        .par_chunks_exact(4)
        .fold(Histogram::default, |mut hist, px| {
            hist.count(px);
            hist
        })
        .reduce(Histogram::default, Histogram::merge)
}
