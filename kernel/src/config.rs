//! Compiled-in kernel parameters.
//!
//! Every kernel runs with exactly these values so that printed results stay
//! comparable across runs, builds, and implementations. There is no runtime
//! override: no arguments, no environment, no files.

/// Input to the recursive Fibonacci kernel.
pub const FIB_N: u32 = 40;

/// Number of pseudo-random values inserted by the tree kernel.
pub const TREE_COUNT: usize = 100_000;

/// Seed the tree kernel's generator is reset to on every invocation.
pub const TREE_SEED: i64 = 12_345;

/// Number of increments performed by the counting loop kernel.
pub const LOOP_BOUND: u64 = 100_000_000;

/// Side length of the square matrices multiplied by the matrix kernel.
pub const MATRIX_SIZE: usize = 300;

/// Inclusive upper bound of the prime sieve.
pub const SIEVE_LIMIT: usize = 10_000_000;

/// Linear-congruential generator constants (`seed = (seed*A + C) mod M`).
pub mod lcg {
    /// Multiplier.
    pub const A: i64 = 1_664_525;
    /// Increment.
    pub const C: i64 = 1_013_904_223;
    /// Modulus (2^31 - 1).
    pub const M: i64 = 2_147_483_647;
}
