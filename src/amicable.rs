//! Amicable number search via proper-divisor sums.
//!
//! For every n in [1, limit] the sum of proper divisors is computed by
//! trial division up to sqrt(n); a pair (i, d) with d = sigma(i), i < d,
//! d <= limit and sigma(d) = i is amicable, and both members contribute to
//! the total. Perfect numbers (d = i) are excluded by the i < d condition.
//! Divisor-sum cost grows with n, which is why the parallel variant leans
//! on rayon's work stealing instead of a static split.

use rayon::prelude::*;

/// Sum of the proper divisors of `n` (1 counts as a divisor, `n` itself
/// does not).
pub fn divisor_sum(n: u64) -> u64 {
    let mut sum = 1;
    let mut i = 2;
    while i * i <= n {
        if n % i == 0 {
            sum += i;
            let paired = n / i;
            if paired != i {
                sum += paired;
            }
        }
        i += 1;
    }
    sum
}

/// Sum of all members of amicable pairs fully contained in [1, limit],
/// computed on a single thread.
pub fn amicable_sum(limit: usize) -> u64 {
    let sums: Vec<u64> = (1..=limit).map(|n| divisor_sum(n as u64)).collect();
    (1..=limit).map(|i| pair_contribution(&sums, limit, i)).sum()
}

/// Same search with both passes parallelized: divisor sums first, then the
/// pair filter over the finished table.
pub fn amicable_sum_parallel(limit: usize) -> u64 {
    let sums: Vec<u64> = (1..=limit)
        .into_par_iter()
        .map(|n| divisor_sum(n as u64))
        .collect();
    (1..=limit)
        .into_par_iter()
        .map(|i| pair_contribution(&sums, limit, i))
        .sum()
}

/// `i + sigma(i)` if `(i, sigma(i))` is an amicable pair inside the limit,
/// counted once at its smaller member.
fn pair_contribution(sums: &[u64], limit: usize, i: usize) -> u64 {
    let d = sums[i - 1];
    if d as usize <= limit && d > i as u64 && sums[d as usize - 1] == i as u64 {
        i as u64 + d
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divisor_sums_of_known_numbers() {
        assert_eq!(divisor_sum(1), 1);
        assert_eq!(divisor_sum(6), 6);
        assert_eq!(divisor_sum(12), 16);
        assert_eq!(divisor_sum(28), 28);
        assert_eq!(divisor_sum(220), 284);
        assert_eq!(divisor_sum(284), 220);
        // Primes only have the divisor 1.
        assert_eq!(divisor_sum(97), 1);
    }

    #[test]
    fn first_amicable_pair() {
        // (220, 284) is the smallest amicable pair.
        assert_eq!(amicable_sum(300), 504);
    }

    #[test]
    fn pair_must_fit_inside_the_limit() {
        // 284 is beyond the limit, so 220 does not count either.
        assert_eq!(amicable_sum(250), 0);
    }

    #[test]
    fn perfect_numbers_are_not_amicable() {
        // 6 and 28 pair with themselves and are excluded.
        assert_eq!(amicable_sum(30), 0);
    }

    #[test]
    fn two_pairs_below_1300() {
        // (220, 284) and (1184, 1210).
        assert_eq!(amicable_sum(1300), 504 + 1184 + 1210);
    }

    #[test]
    fn empty_range() {
        assert_eq!(amicable_sum(0), 0);
        assert_eq!(amicable_sum_parallel(0), 0);
    }

    #[test]
    fn parallel_matches_serial() {
        for limit in [0, 1, 100, 300, 1500] {
            assert_eq!(amicable_sum_parallel(limit), amicable_sum(limit), "limit={}", limit);
        }
    }
}
