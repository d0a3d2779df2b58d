//! Shared helpers for cpubench benchmark suites.
//!
//! Benchmarks run the kernels at reduced sizes so a criterion sample takes
//! milliseconds. The full-size kernels are measured by an external harness
//! through the kernel binaries, not here.

use cpubench_kernel::config::TREE_SEED;
use cpubench_kernel::workloads::{counting, matrix, recursion, sieve, tree};

/// Kernel sizes for one benchmark configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchSizes {
    pub fib_n: u32,
    pub tree_count: usize,
    pub loop_bound: u64,
    pub matrix_size: usize,
    pub sieve_limit: usize,
}

/// Default reduced sizes.
pub const REDUCED: BenchSizes = BenchSizes {
    fib_n: 25,
    tree_count: 10_000,
    loop_bound: 1_000_000,
    matrix_size: 64,
    sieve_limit: 200_000,
};

/// Results the kernels must produce at [`REDUCED`] sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchExpectations {
    pub fib: u64,
    pub tree_nodes: usize,
    pub counter: u64,
    pub checksum: i64,
    pub primes: usize,
}

pub const REDUCED_EXPECTED: BenchExpectations = BenchExpectations {
    fib: 75_025,
    tree_nodes: 10_000,
    counter: 1_000_000,
    checksum: 89_456_640,
    primes: 17_984,
};

/// Run every kernel once at `sizes`.
#[must_use]
pub fn run_all(sizes: &BenchSizes) -> BenchExpectations {
    BenchExpectations {
        fib: recursion::fib(sizes.fib_n),
        tree_nodes: tree::run(TREE_SEED, sizes.tree_count),
        counter: counting::count_to(sizes.loop_bound),
        checksum: matrix::run(sizes.matrix_size),
        primes: sieve::run(sizes.sieve_limit),
    }
}

/// Determinism guard: a kernel that computes something different must not
/// be timed as if it were a speedup.
///
/// # Panics
///
/// Panics if any kernel diverges from [`REDUCED_EXPECTED`].
pub fn guard_reduced() {
    let actual = run_all(&REDUCED);
    assert_eq!(
        actual, REDUCED_EXPECTED,
        "kernel output changed at reduced sizes; refusing to benchmark"
    );
}
