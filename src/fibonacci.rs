//! Fibonacci sequence starting `1, 1, 2, 3, 5, ...`.
//!
//! The sequence is produced once, by [`Fibonacci`], and everything else in
//! this module is built on top of that iterator.
//!
//! ```rust
//! use hsmath::fibonacci::{fibonacci, odd_square_sum};
//!
//! let terms = fibonacci(6).unwrap();
//! assert_eq!(terms, vec![1, 1, 2, 3, 5, 8]);
//!
//! // 1 + 1 + 9 + 25 (4 and 64 are even)
//! assert_eq!(odd_square_sum(&terms).unwrap(), 36);
//! ```

use crate::error::{Error, Result};

/// Number of Fibonacci terms that fit in a `u64`.
pub const MAX_U64_TERMS: usize = 93;

/// Iterator over the Fibonacci numbers.
///
/// Ends after the last term representable as `u64` instead of wrapping.
#[derive(Debug, Clone)]
pub struct Fibonacci {
    current: Option<u64>,
    next: Option<u64>,
}

impl Fibonacci {
    /// An iterator positioned at the first term, 1.
    pub const fn new() -> Self {
        Self {
            current: Some(1),
            next: Some(1),
        }
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.current?;
        self.current = self.next;
        self.next = match self.current {
            Some(current) => value.checked_add(current),
            None => None,
        };
        Some(value)
    }
}

/// Returns the first `n` Fibonacci numbers.
///
/// # Errors
///
/// Returns [`Error::Overflow`] when `n` exceeds [`MAX_U64_TERMS`].
pub fn fibonacci(n: usize) -> Result<Vec<u64>> {
    if n > MAX_U64_TERMS {
        return Err(Error::Overflow {
            what: "fibonacci term",
            index: MAX_U64_TERMS,
        });
    }
    Ok(Fibonacci::new().take(n).collect())
}

/// Sums the squares of `terms` that are odd.
///
/// Squares are taken in `u128` so any `u64` squares without overflow; only
/// the running sum can fail.
pub fn odd_square_sum(terms: &[u64]) -> Result<u128> {
    terms
        .iter()
        .map(|&t| u128::from(t) * u128::from(t))
        .enumerate()
        .filter(|(_, sq)| sq % 2 != 0)
        .try_fold(0u128, |acc, (index, sq)| {
            acc.checked_add(sq).ok_or(Error::Overflow {
                what: "odd square sum",
                index,
            })
        })
}

/// Sum of the odd squares of the first `n` Fibonacci numbers.
pub fn fibonacci_odd_square_sum(n: usize) -> Result<u128> {
    odd_square_sum(&fibonacci(n)?)
}
