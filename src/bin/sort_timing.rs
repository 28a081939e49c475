//! Odd-even transposition sort: serial reference vs persistent worker pool.
//!
//! Run with: cargo run --release --bin sort_timing

use std::time::Instant;

use parallel_labs::odd_even;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const N: usize = 50_000;

fn random_sequence(len: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    (0..len).map(|_| rng.gen_range(0..2 * len as i32)).collect()
}

fn main() {
    let input = random_sequence(N);
    println!("Sorting {} random integers\n", N);

    let mut reference = input.clone();
    let start = Instant::now();
    odd_even::sort_serial(&mut reference);
    let serial_time = start.elapsed();
    println!("Serial reference: {:?}", serial_time);

    println!("\nThreads  | Duration     | Speedup");
    println!("----------------------------------");
    let max_workers = num_cpus::get().max(4);
    let mut workers = 1;
    while workers <= max_workers {
        let mut seq = input.clone();
        let start = Instant::now();
        odd_even::sort(&mut seq, workers).expect("worker count is nonzero");
        let elapsed = start.elapsed();
        assert_eq!(seq, reference);

        println!(
            "{:8} | {:12.3?} | {:.2}x",
            workers,
            elapsed,
            serial_time.as_secs_f64() / elapsed.as_secs_f64()
        );
        workers *= 2;
    }
}
