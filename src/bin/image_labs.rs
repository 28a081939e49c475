//! Timing comparison for the image and number labs, serial vs rayon.
//!
//! Run with: cargo run --release --bin image_labs

use std::time::Instant;

use parallel_labs::raster::Image;
use parallel_labs::{amicable, histogram, kmeans, mandelbrot, sobel};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_image(width: usize, height: usize) -> Image {
    let mut rng = StdRng::seed_from_u64(1);
    let pixels = (0..width * height * 4).map(|_| rng.gen()).collect();
    Image::from_pixels(pixels, width, height)
}

fn main() {
    println!("Threads available: {}\n", num_cpus::get());

    println!("=== Mandelbrot (1024x1024) ===\n");
    let start = Instant::now();
    let serial = mandelbrot::render(1024, 1024);
    println!("Serial:   {:?}", start.elapsed());
    let start = Instant::now();
    let parallel = mandelbrot::render_parallel(1024, 1024);
    println!("Parallel: {:?}", start.elapsed());
    assert_eq!(serial, parallel);

    println!("\n=== Sobel (1920x1080) ===\n");
    let gray: Vec<u8> = {
        let mut rng = StdRng::seed_from_u64(2);
        (0..1920 * 1080).map(|_| rng.gen()).collect()
    };
    let start = Instant::now();
    let serial = sobel::edges(&gray, 1920, 1080);
    println!("Serial:   {:?}", start.elapsed());
    let start = Instant::now();
    let parallel = sobel::edges_parallel(&gray, 1920, 1080);
    println!("Parallel: {:?}", start.elapsed());
    assert_eq!(serial, parallel);

    println!("\n=== RGB histogram (1920x1080) ===\n");
    let img = random_image(1920, 1080);
    let start = Instant::now();
    let serial = histogram::histogram(&img);
    println!("Serial:   {:?}", start.elapsed());
    let start = Instant::now();
    let parallel = histogram::histogram_parallel(&img);
    println!("Parallel: {:?}", start.elapsed());
    assert_eq!(serial, parallel);

    println!("\n=== K-means quantization (640x480, k=64, 10 rounds) ===\n");
    let img = random_image(640, 480);
    let start = Instant::now();
    let serial = kmeans::quantize(&img, kmeans::DEFAULT_CLUSTERS, kmeans::DEFAULT_ITERATIONS, 5)
        .expect("valid configuration");
    println!("Serial:   {:?}", start.elapsed());
    let start = Instant::now();
    let parallel =
        kmeans::quantize_parallel(&img, kmeans::DEFAULT_CLUSTERS, kmeans::DEFAULT_ITERATIONS, 5)
            .expect("valid configuration");
    println!("Parallel: {:?}", start.elapsed());
    assert_eq!(serial, parallel);

    println!("\n=== Amicable numbers (limit 1_000_000) ===\n");
    let start = Instant::now();
    let serial = amicable::amicable_sum(1_000_000);
    println!("Serial:   {:?} (sum = {})", start.elapsed(), serial);
    let start = Instant::now();
    let parallel = amicable::amicable_sum_parallel(1_000_000);
    println!("Parallel: {:?} (sum = {})", start.elapsed(), parallel);
    assert_eq!(serial, parallel);
}
