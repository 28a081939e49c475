//! K-means color quantization.
//!
//! Seeds `k` centroids from randomly chosen pixels, then alternates
//! assignment (nearest centroid by squared RGB distance) and update
//! (per-cluster mean; an empty cluster keeps its centroid) for a fixed
//! number of rounds, and finally repaints every pixel with its centroid's
//! color. Alpha passes through unchanged.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::raster::Image;
use crate::ConfigError;

/// Cluster count the lab used for its timing runs.
pub const DEFAULT_CLUSTERS: usize = 64;
/// Refinement rounds the lab used for its timing runs.
pub const DEFAULT_ITERATIONS: usize = 10;

/// Quantizes `img` to at most `clusters` colors on a single thread.
/// Deterministic for a fixed `seed`.
pub fn quantize(
    img: &Image,
    clusters: usize,
    iterations: usize,
    seed: u64,
) -> Result<Image, ConfigError> {
    let mut centroids = seed_centroids(img, clusters, seed)?;
    let mut indices = vec![0usize; img.pixel_count()];

    for _ in 0..iterations {
        for (j, idx) in indices.iter_mut().enumerate() {
            *idx = nearest(img.rgba(j), &centroids);
        }

        let mut acc = vec![([0u64; 3], 0u64); clusters];
        for (j, &idx) in indices.iter().enumerate() {
            accumulate(&mut acc, idx, img.rgba(j));
        }
        apply_means(&mut centroids, &acc);
    }

    Ok(recolor(img, &indices, &centroids))
}

/// Same refinement with rayon: parallel assignment, and the cluster sums
/// folded per task and merged. Integer sums make the merge order
/// irrelevant, so the result matches [`quantize`] for the same seed.
pub fn quantize_parallel(
    img: &Image,
    clusters: usize,
    iterations: usize,
    seed: u64,
) -> Result<Image, ConfigError> {
    let mut centroids = seed_centroids(img, clusters, seed)?;
    let mut indices = vec![0usize; img.pixel_count()];

    for _ in 0..iterations {
        indices
            .par_iter_mut()
            .enumerate()
            .for_each(|(j, idx)| *idx = nearest(img.rgba(j), &centroids));

        let acc = indices
            .par_iter()
            .enumerate()
            .fold(
                || vec![([0u64; 3], 0u64); clusters],
                |mut acc, (j, &idx)| {
                    accumulate(&mut acc, idx, img.rgba(j));
                    acc
                },
            )
            .reduce(
                || vec![([0u64; 3], 0u64); clusters],
                |mut a, b| {
                    for (ca, cb) in a.iter_mut().zip(b) {
                        ca.0[0] += cb.0[0];
                        ca.0[1] += cb.0[1];
                        ca.0[2] += cb.0[2];
                        ca.1 += cb.1;
                    }
                    a
                },
            );
        apply_means(&mut centroids, &acc);
    }

    Ok(recolor(img, &indices, &centroids))
}

fn seed_centroids(img: &Image, clusters: usize, seed: u64) -> Result<Vec<[u8; 3]>, ConfigError> {
    if clusters == 0 {
        return Err(ConfigError::NoClusters);
    }
    if img.pixel_count() == 0 {
        return Err(ConfigError::EmptyImage { clusters });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    Ok((0..clusters)
        .map(|_| {
            let [r, g, b, _] = img.rgba(rng.gen_range(0..img.pixel_count()));
            [r, g, b]
        })
        .collect())
}

/// Index of the centroid closest to `px`; ties go to the lower index.
fn nearest(px: [u8; 4], centroids: &[[u8; 3]]) -> usize {
    let mut best = 0;
    let mut best_dist = distance_squared(px, centroids[0]);
    for (k, &c) in centroids.iter().enumerate().skip(1) {
        let d = distance_squared(px, c);
        if d < best_dist {
            best = k;
            best_dist = d;
        }
    }
    best
}

fn distance_squared(px: [u8; 4], c: [u8; 3]) -> i32 {
    let dr = px[0] as i32 - c[0] as i32;
    let dg = px[1] as i32 - c[1] as i32;
    let db = px[2] as i32 - c[2] as i32;
    dr * dr + dg * dg + db * db
}

fn accumulate(acc: &mut [([u64; 3], u64)], idx: usize, px: [u8; 4]) {
    let (sums, count) = &mut acc[idx];
    sums[0] += px[0] as u64;
    sums[1] += px[1] as u64;
    sums[2] += px[2] as u64;
    *count += 1;
}

fn apply_means(centroids: &mut [[u8; 3]], acc: &[([u64; 3], u64)]) {
    for (c, &(sums, count)) in centroids.iter_mut().zip(acc) {
        if count == 0 {
            continue;
        }
        c[0] = (sums[0] / count) as u8;
        c[1] = (sums[1] / count) as u8;
        c[2] = (sums[2] / count) as u8;
    }
}

fn recolor(img: &Image, indices: &[usize], centroids: &[[u8; 3]]) -> Image {
    let mut out = img.clone();
    for (px, &idx) in out.pixels.chunks_exact_mut(4).zip(indices) {
        px[0] = centroids[idx][0];
        px[1] = centroids[idx][1];
        px[2] = centroids[idx][2];
    }
    out
}
