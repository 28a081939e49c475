//! Even work partitioning.
//!
//! Splits an index range into contiguous, near-equal parts, one per worker.

use crate::ConfigError;

/// A contiguous sub-range of a sequence assigned to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    pub offset: usize,
    pub count: usize,
}

impl Partition {
    /// One past the last index of this partition.
    pub fn end(&self) -> usize {
        self.offset + self.count
    }
}

/// Splits `[0, len)` into `parts` contiguous partitions whose sizes differ
/// by at most one element, with monotonically increasing offsets and no gaps.
///
/// Pure function of `(len, parts)`. `parts > len` produces zero-count
/// partitions at the tail; callers must tolerate them. `parts == 0` is
/// rejected.
pub fn split_even(len: usize, parts: usize) -> Result<Vec<Partition>, ConfigError> {
    if parts == 0 {
        return Err(ConfigError::NoWorkers);
    }

    // i-th boundary at i * len / parts keeps sizes within one of each other
    // without floating-point division.
    Ok((0..parts)
        .map(|i| {
            let offset = i * len / parts;
            let count = (i + 1) * len / parts - offset;
            Partition { offset, count }
        })
        .collect())
}
