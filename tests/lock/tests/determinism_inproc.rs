//! In-process determinism: repeated runs yield identical records and digests.
//!
//! Kernels hold no state between calls and read no clock, environment, or
//! input, so every call must reproduce the previous one exactly.

use cpubench_kernel::config::{MATRIX_SIZE, TREE_SEED};
use cpubench_kernel::proof::manifest::SuiteManifest;
use cpubench_kernel::proof::record::ProofOfWork;
use cpubench_kernel::workloads::{counting, matrix, recursion, sieve, tree, Workload};

#[test]
fn every_workload_is_idempotent() {
    for &workload in Workload::ALL {
        let first = ProofOfWork::measure(workload);
        let first_digest = first.digest().unwrap();
        for i in 1..=2 {
            let again = ProofOfWork::measure(workload);
            assert_eq!(again, first, "{workload} run {i}: record differs");
            assert_eq!(
                again.digest().unwrap(),
                first_digest,
                "{workload} run {i}: digest differs"
            );
        }
    }
}

#[test]
fn small_kernels_n10() {
    let fib = recursion::fib(25);
    let nodes = tree::run(TREE_SEED, 10_000);
    let loops = counting::count_to(1_000_000);
    let checksum = matrix::run(64);
    let primes = sieve::run(200_000);
    for i in 1..=10 {
        assert_eq!(recursion::fib(25), fib, "run {i}: fib");
        assert_eq!(tree::run(TREE_SEED, 10_000), nodes, "run {i}: tree");
        assert_eq!(counting::count_to(1_000_000), loops, "run {i}: loop");
        assert_eq!(matrix::run(64), checksum, "run {i}: matmul");
        assert_eq!(sieve::run(200_000), primes, "run {i}: sieve");
    }
}

#[test]
fn tree_in_order_is_identical_across_builds() {
    let a = tree::build(TREE_SEED, 20_000).in_order();
    let b = tree::build(TREE_SEED, 20_000).in_order();
    assert_eq!(a, b);
}

#[test]
fn matrix_product_is_identical_across_builds() {
    let a = matrix::Matrix::sum_indexed(MATRIX_SIZE);
    let b = matrix::Matrix::difference_indexed(MATRIX_SIZE);
    assert_eq!(a.multiply(&b), a.multiply(&b));
}

#[test]
fn collected_manifest_is_stable() {
    let first = SuiteManifest::collect();
    let second = SuiteManifest::collect();
    assert_eq!(first, second);
    assert_eq!(
        first.canonical_bytes().unwrap(),
        second.canonical_bytes().unwrap()
    );
    first.verify().unwrap();
}
