//! Recursion kernel: naive doubly-recursive Fibonacci.
//!
//! No memoization and no iteration. The cost is the call tree itself
//! (`fib(40)` makes roughly 3.3 × 10^8 calls), which is what this kernel
//! measures.

/// The n-th Fibonacci number, `fib(0) = 0`, `fib(1) = 1`.
///
/// Values up to `n = 93` fit in `u64`; the suite only ever asks for
/// [`crate::config::FIB_N`].
#[must_use]
pub fn fib(n: u32) -> u64 {
    if n < 2 {
        return u64::from(n);
    }
    fib(n - 1) + fib(n - 2)
}
