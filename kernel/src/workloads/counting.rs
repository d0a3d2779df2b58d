//! Counting loop kernel: a tight scalar increment loop.
//!
//! An optimizer would fold `for _ in 0..n { c += 1 }` into `c = n`. Each
//! increment is routed through [`black_box`] so the compiler cannot see
//! through the data dependency, and the bound and final value are opaque too.

use std::hint::black_box;

/// Increment a counter `bound` times starting from zero and return it.
#[must_use]
pub fn count_to(bound: u64) -> u64 {
    let bound = black_box(bound);
    let mut counter: u64 = 0;
    for _ in 0..bound {
        counter = black_box(counter + 1);
    }
    black_box(counter)
}

/// Observable use of a counting-loop result.
///
/// The zero branch cannot be taken for a positive bound, but it keeps the
/// result live in the binary. Returns the line to print, if any.
#[must_use]
pub fn zero_sentinel(counter: u64) -> Option<&'static str> {
    if black_box(counter) == 0 {
        Some("Zero")
    } else {
        None
    }
}
