//! Growth policy: pick the next bucket count once the table is full.
//!
//! Capacity doubles and is then bumped to the next prime. The table runs the
//! actual rehash (see `CourseTable::grow`); this module only does arithmetic.

/// Load factor at which an insert triggers a resize.
pub const MAX_LOAD_FACTOR: f64 = 1.0;

/// Trial-division primality test, exiting on the first factor.
///
/// Only divisors with `d * d <= n` are tried. That accepts exactly the numbers
/// accepted by trying every `d` in `2..=n / 2`.
pub fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2usize;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

/// Smallest prime `>= 2 * current`, or `None` if that would overflow `usize`.
pub fn next_capacity(current: usize) -> Option<usize> {
    let mut candidate = current.checked_mul(2)?;
    while !is_prime(candidate) {
        candidate = candidate.checked_add(1)?;
    }
    Some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_primes() {
        let primes: Vec<usize> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, [2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn squares_of_primes_are_composite() {
        for p in [2usize, 3, 5, 7, 11, 13, 179, 359] {
            assert!(!is_prime(p * p), "{} squared", p);
        }
    }

    #[test]
    fn next_capacity_doubles_then_finds_prime() {
        assert_eq!(next_capacity(1), Some(2));
        assert_eq!(next_capacity(2), Some(5));
        assert_eq!(next_capacity(3), Some(7));
        assert_eq!(next_capacity(7), Some(17));
        assert_eq!(next_capacity(179), Some(359));
        assert_eq!(next_capacity(359), Some(719));
    }

    #[test]
    fn next_capacity_reports_overflow() {
        assert_eq!(next_capacity(usize::MAX / 2 + 1), None);
        assert_eq!(next_capacity(usize::MAX), None);
    }

    #[test]
    fn next_capacity_is_prime_and_at_least_double() {
        for cap in 1..500usize {
            let next = next_capacity(cap).unwrap();
            assert!(is_prime(next));
            assert!(next >= 2 * cap);
        }
    }
}
