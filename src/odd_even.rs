//! Odd-even transposition sort, serial and parallel.
//!
//! The parallel variant runs a persistent pool of worker threads over
//! contiguous partitions of the sequence. A cycle is one odd phase followed
//! by one even phase; workers meet at a barrier after each phase, and the
//! calling thread acts as controller, deciding after each cycle whether any
//! worker still swapped. Threads are spawned once and joined once, not
//! recreated per phase.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Barrier;
use std::thread;

use crate::partition::{split_even, Partition};
use crate::ConfigError;

/// Sorts `seq` in place with the textbook single-threaded odd-even
/// transposition loop: repeat (odd pass, even pass) until a full cycle
/// performs no swap.
pub fn sort_serial<T: Ord>(seq: &mut [T]) {
    if seq.len() < 2 {
        return;
    }
    loop {
        let mut changed = false;
        for parity in [1, 0] {
            let mut i = parity;
            while i + 1 < seq.len() {
                if seq[i] > seq[i + 1] {
                    seq.swap(i, i + 1);
                    changed = true;
                }
                i += 2;
            }
        }
        if !changed {
            return;
        }
    }
}

/// Sorts `seq` in place to ascending order using `workers` threads.
///
/// Rejects `workers == 0` before spawning anything. Sequences shorter than
/// two elements are already sorted and return immediately. Worker counts
/// above `seq.len()` are clamped; the extra partitions would be empty.
pub fn sort<T: Ord + Send>(seq: &mut [T], workers: usize) -> Result<(), ConfigError> {
    if workers == 0 {
        return Err(ConfigError::NoWorkers);
    }
    if seq.len() < 2 {
        return Ok(());
    }

    let workers = workers.min(seq.len());
    let parts = split_even(seq.len(), workers)?;

    let shared = SharedSeq {
        ptr: seq.as_mut_ptr(),
        len: seq.len(),
    };
    let changed: Vec<AtomicBool> = (0..workers).map(|_| AtomicBool::new(false)).collect();
    let sorted = AtomicBool::new(false);
    let rendezvous = Barrier::new(workers + 1);

    thread::scope(|s| {
        for (&part, flag) in parts.iter().zip(&changed) {
            let shared = &shared;
            let sorted = &sorted;
            let rendezvous = &rendezvous;
            s.spawn(move || run_worker(shared, part, flag, sorted, rendezvous));
        }
        // The calling thread doubles as the controller.
        run_controller(&changed, &sorted, &rendezvous);
    });

    Ok(())
}

/// Shared view of the sequence handed to every worker.
///
/// Safety argument: within one phase, pair `(i, i + 1)` is touched only by
/// the worker whose partition contains `i`, and every pair index in a phase
/// has the same parity, so no index is written by two workers. Across
/// phases, the barrier rendezvous orders every write before any read of the
/// next phase.
struct SharedSeq<T> {
    ptr: *mut T,
    len: usize,
}

unsafe impl<T: Send> Send for SharedSeq<T> {}
unsafe impl<T: Send> Sync for SharedSeq<T> {}

impl<T: Ord> SharedSeq<T> {
    /// Compares pair `(i, i + 1)` and swaps it if out of order.
    ///
    /// Caller must own index `i` for the current phase and guarantee
    /// `i + 1 < len`.
    unsafe fn exchange(&self, i: usize) -> bool {
        debug_assert!(i + 1 < self.len);
        let a = self.ptr.add(i);
        let b = self.ptr.add(i + 1);
        if *a > *b {
            std::ptr::swap(a, b);
            true
        } else {
            false
        }
    }
}

/// One phase over one partition: compares every pair `(i, i + 1)` with `i`
/// of the given parity, `i` inside the partition, and `i + 1` in bounds.
///
/// The pair that spans the partition's right boundary belongs to this
/// worker (its `i` is the partition's last index); the pair spanning the
/// left boundary belongs to the left neighbor. Every pair therefore has
/// exactly one owner per phase, including at array ends, for odd lengths,
/// and for empty partitions.
fn run_phase<T: Ord>(seq: &SharedSeq<T>, part: Partition, parity: usize) -> bool {
    let mut i = if part.offset % 2 == parity {
        part.offset
    } else {
        part.offset + 1
    };
    let mut swapped = false;
    while i < part.end() && i + 1 < seq.len {
        if unsafe { seq.exchange(i) } {
            swapped = true;
        }
        i += 2;
    }
    swapped
}

/// Worker loop: odd phase, rendezvous, even phase, rendezvous, then block
/// until the controller publishes its decision and either start another
/// cycle or exit.
fn run_worker<T: Ord>(
    seq: &SharedSeq<T>,
    part: Partition,
    changed: &AtomicBool,
    sorted: &AtomicBool,
    rendezvous: &Barrier,
) {
    loop {
        if run_phase(seq, part, 1) {
            // Relaxed suffices: the barrier publishes the store before the
            // controller reads it.
            changed.store(true, Ordering::Relaxed);
        }
        rendezvous.wait();

        if run_phase(seq, part, 0) {
            changed.store(true, Ordering::Relaxed);
        }
        rendezvous.wait();

        // The controller inspects all flags between these two rendezvous.
        rendezvous.wait();
        if sorted.load(Ordering::Relaxed) {
            return;
        }
    }
}

/// Controller loop. Observes the same barriers as the workers but performs
/// no comparisons; after the even-phase rendezvous it alone reads and
/// clears the changed flags, so the decision for a cycle sees exactly that
/// cycle's flags.
fn run_controller(changed: &[AtomicBool], sorted: &AtomicBool, rendezvous: &Barrier) {
    loop {
        rendezvous.wait(); // odd phase complete everywhere
        rendezvous.wait(); // even phase complete everywhere

        let mut any = false;
        for flag in changed {
            if flag.swap(false, Ordering::Relaxed) {
                any = true;
            }
        }
        if !any {
            sorted.store(true, Ordering::Relaxed);
        }
        rendezvous.wait(); // decision published
        if !any {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};

    #[test]
    fn two_workers_small() {
        let mut seq = vec![5, 3, 8, 1];
        sort(&mut seq, 2).unwrap();
        assert_eq!(seq, vec![1, 3, 5, 8]);
    }

    #[test]
    fn four_workers_small() {
        let mut seq = vec![2, 1, 4, 9, 5, 3, 6, 10];
        sort(&mut seq, 4).unwrap();
        assert_eq!(seq, vec![1, 2, 3, 4, 5, 6, 9, 10]);
    }

    #[test]
    fn empty_and_singleton() {
        let mut empty: Vec<i32> = vec![];
        sort(&mut empty, 3).unwrap();
        assert!(empty.is_empty());

        let mut one = vec![7];
        sort(&mut one, 3).unwrap();
        assert_eq!(one, vec![7]);
    }

    #[test]
    fn zero_workers_is_rejected() {
        let mut seq = vec![3, 1, 2];
        assert_eq!(sort(&mut seq, 0), Err(ConfigError::NoWorkers));
        // Untouched on rejection.
        assert_eq!(seq, vec![3, 1, 2]);
    }

    #[test]
    fn more_workers_than_elements() {
        let mut seq = vec![9, 2, 7];
        sort(&mut seq, 16).unwrap();
        assert_eq!(seq, vec![2, 7, 9]);
    }

    #[test]
    fn already_sorted_is_untouched() {
        let mut seq: Vec<i32> = (0..100).collect();
        let expected = seq.clone();
        sort(&mut seq, 4).unwrap();
        assert_eq!(seq, expected);
    }

    #[test]
    fn reverse_sorted() {
        let mut seq: Vec<i32> = (0..257).rev().collect();
        sort(&mut seq, 3).unwrap();
        let expected: Vec<i32> = (0..257).collect();
        assert_eq!(seq, expected);
    }

    #[test]
    fn duplicates() {
        let mut seq = vec![4, 4, 1, 4, 0, 1, 4, 0];
        sort(&mut seq, 3).unwrap();
        assert_eq!(seq, vec![0, 0, 1, 1, 4, 4, 4, 4]);
    }

    #[test]
    fn single_worker_matches_serial() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for len in [2, 9, 33, 128] {
            let input: Vec<i32> = (0..len).map(|_| rng.gen_range(0..100)).collect();

            let mut serial = input.clone();
            sort_serial(&mut serial);

            let mut pooled = input.clone();
            sort(&mut pooled, 1).unwrap();

            assert_eq!(pooled, serial);
        }
    }

    #[test]
    fn random_inputs_match_std_sort() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for workers in [1, 2, 3, 4, 8] {
            for len in [2, 5, 17, 64, 1001] {
                let mut seq: Vec<i32> = (0..len).map(|_| rng.gen_range(-500..500)).collect();
                let mut expected = seq.clone();
                expected.sort();

                sort(&mut seq, workers).unwrap();
                assert_eq!(seq, expected, "workers={} len={}", workers, len);
            }
        }
    }

    #[test]
    fn serial_matches_std_sort() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(11);
        for len in [0, 1, 2, 3, 10, 255] {
            let mut seq: Vec<i32> = (0..len).map(|_| rng.gen_range(0..50)).collect();
            let mut expected = seq.clone();
            expected.sort();

            sort_serial(&mut seq);
            assert_eq!(seq, expected, "len={}", len);
        }
    }

    #[test]
    fn sorts_non_integer_elements() {
        let mut seq = vec!["pear", "apple", "quince", "fig"];
        sort(&mut seq, 2).unwrap();
        assert_eq!(seq, vec!["apple", "fig", "pear", "quince"]);
    }
}
