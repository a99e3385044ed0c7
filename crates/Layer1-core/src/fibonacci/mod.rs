//! Fibonacci sequence computation
//!
//! Rolling accumulator 방식: 마지막 두 항만 유지하면서 다음 항을 계산
//!
//! Convention: fib(1) = 1, fib(2) = 1, fib(3) = 2, …
//!
//! Note: index 0 and index 1 both yield 1. The loop body only runs for
//! indices above 1, so anything at or below 1 falls through to the initial
//! accumulator value. This matches the original program and is kept as-is.

use tracing::debug;

use crate::error::{Error, Result};

/// Largest index whose term fits in `u64`
///
/// fib(93) = 12200160415121876738; fib(94)는 u64 범위를 벗어난다.
pub const MAX_SAFE_INDEX: u64 = 93;

/// Compute the `n`th Fibonacci number.
///
/// Valid for `n <= MAX_SAFE_INDEX`; use [`compute_checked`] for arbitrary
/// indices.
pub fn compute(n: u64) -> u64 {
    debug_assert!(n <= MAX_SAFE_INDEX);

    let mut previous: u64 = 0;
    let mut current: u64 = 1;
    let mut remaining = n;
    while remaining > 1 {
        let next = previous + current;
        previous = current;
        current = next;
        remaining -= 1;
    }

    debug!(index = n, value = current, "computed sequence term");
    current
}

/// Compute the `n`th Fibonacci number, failing on overflow.
///
/// Returns [`Error::Overflow`] when the term at `n` does not fit in `u64`,
/// i.e. for every `n > MAX_SAFE_INDEX`.
pub fn compute_checked(n: u64) -> Result<u64> {
    let mut previous: u64 = 0;
    let mut current: u64 = 1;
    let mut remaining = n;
    while remaining > 1 {
        let next = previous
            .checked_add(current)
            .ok_or(Error::Overflow { index: n })?;
        previous = current;
        current = next;
        remaining -= 1;
    }
    Ok(current)
}

/// Iterator over the sequence starting at index 1 (1, 1, 2, 3, 5, …)
///
/// 다음 항이 u64를 넘으면 종료 (93개 항)
#[derive(Debug, Clone)]
pub struct Sequence {
    previous: u64,
    current: Option<u64>,
}

impl Sequence {
    pub fn new() -> Self {
        Self {
            previous: 0,
            current: Some(1),
        }
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Sequence {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let term = self.current?;
        self.current = self.previous.checked_add(term);
        self.previous = term;
        Some(term)
    }
}
