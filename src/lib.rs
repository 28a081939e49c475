//! Parallel computing lab algorithms.
//!
//! Each module holds one small, self-contained algorithm with a serial
//! reference implementation and a parallel variant, so the two can be timed
//! against each other:
//!
//! - [`odd_even`]: odd-even transposition sort (serial, and a persistent
//!   worker pool synchronized with barriers)
//! - [`mandelbrot`]: Mandelbrot set rendering
//! - [`sobel`]: Sobel edge detection on grayscale images
//! - [`histogram`]: per-channel RGB histograms
//! - [`kmeans`]: k-means color quantization
//! - [`amicable`]: amicable number search via proper-divisor sums
//!
//! Run the timing demos with:
//! `cargo run --release --bin sort_timing` and
//! `cargo run --release --bin image_labs`

pub mod amicable;
pub mod histogram;
pub mod kmeans;
pub mod mandelbrot;
pub mod odd_even;
pub mod partition;
pub mod raster;
pub mod sobel;

pub use odd_even::{sort, sort_serial};
pub use partition::{split_even, Partition};
pub use raster::Image;

use thiserror::Error;

/// Rejected configuration. Every fallible entry point checks its arguments
/// up front and returns this before spawning threads or touching data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("worker count must be at least 1")]
    NoWorkers,
    #[error("cluster count must be at least 1")]
    NoClusters,
    #[error("cannot seed {clusters} clusters from an empty image")]
    EmptyImage { clusters: usize },
}
