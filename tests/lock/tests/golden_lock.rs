//! Golden baselines, re-derived independently of the kernels.
//!
//! Each pinned value in `proof::golden` is checked here against a second
//! computation that does not share code with the kernel under test.

use std::collections::BTreeSet;

use sha2::{Digest, Sha256};

use cpubench_kernel::config::{lcg, LOOP_BOUND, MATRIX_SIZE, SIEVE_LIMIT, TREE_COUNT, TREE_SEED};
use cpubench_kernel::proof::golden;
use cpubench_kernel::proof::hash_domain::HashDomain;
use cpubench_kernel::workloads::Workload;

/// Iterative Fibonacci, the cheap cross-check for the recursive kernel.
fn fib_iterative(n: u32) -> u64 {
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..n {
        let next = a + b;
        a = b;
        b = next;
    }
    a
}

#[test]
fn fib_golden() {
    assert_eq!(fib_iterative(40), golden::FIB_VALUE);
    assert_eq!(fib_iterative(10), 55);
}

#[test]
fn tree_inputs_are_distinct() {
    // Every insert allocates a node; with no repeated values the count is
    // also the number of distinct keys.
    let mut seed = TREE_SEED;
    let mut seen = BTreeSet::new();
    for _ in 0..TREE_COUNT {
        seed = (seed * lcg::A + lcg::C) % lcg::M;
        if seed < 0 {
            seed = -seed;
        }
        seen.insert(seed);
    }
    assert_eq!(seen.len(), TREE_COUNT);
    assert_eq!(golden::TREE_NODES, TREE_COUNT);
}

#[test]
fn loop_golden() {
    assert_eq!(
        golden::expected(Workload::CountingLoop).to_string(),
        format!("count_loop(bound={LOOP_BOUND}) counter = {LOOP_BOUND}")
    );
    assert_eq!(golden::expected(Workload::CountingLoop).stdout_line(), None);
}

#[test]
fn matrix_golden_by_factorization() {
    // sum(C) = sum_k (sum_i A[i][k]) * (sum_j B[k][j]).
    let n = i64::try_from(MATRIX_SIZE).unwrap();
    let mut total: i64 = 0;
    for k in 0..n {
        let col_a: i64 = (0..n).map(|i| i + k).sum();
        let row_b: i64 = (0..n).map(|j| k - j).sum();
        total = total.wrapping_add(col_a.wrapping_mul(row_b));
    }
    assert_eq!(total, golden::MATRIX_CHECKSUM);
}

#[test]
fn sieve_golden_by_odd_only_sieve() {
    // Index i stands for 2i + 1.
    let half = SIEVE_LIMIT / 2 + 1;
    let mut composite = vec![false; half];
    let mut i = 1;
    while (2 * i + 1) * (2 * i + 1) <= SIEVE_LIMIT {
        if !composite[i] {
            let p = 2 * i + 1;
            let mut j = p * p / 2;
            while j < half {
                composite[j] = true;
                j += p;
            }
        }
        i += 1;
    }
    let odd_primes = (1..half)
        .filter(|&i| 2 * i < SIEVE_LIMIT && !composite[i])
        .count();
    assert_eq!(odd_primes + 1, golden::PRIME_COUNT);
}

#[test]
fn record_digests_recomputed_with_sha2() {
    for &workload in Workload::ALL {
        let value = serde_json::to_value(golden::expected(workload)).unwrap();
        // serde_json's default map is ordered and compact output has no
        // whitespace, so this matches the canonical form for these records.
        let json = serde_json::to_vec(&value).unwrap();

        let mut hasher = Sha256::new();
        hasher.update(HashDomain::ProofRecord.as_bytes());
        hasher.update(&json);
        let recomputed = format!("sha256:{}", hex::encode(hasher.finalize()));

        assert_eq!(recomputed, golden::expected_digest(workload), "{workload}");
    }
}

#[test]
fn record_parameters_are_the_compiled_constants() {
    assert_eq!(
        golden::expected(Workload::Matrix).stdout_line().unwrap(),
        format!("Matrix {MATRIX_SIZE}x{MATRIX_SIZE} sum: {}", golden::MATRIX_CHECKSUM)
    );
    assert_eq!(
        golden::expected(Workload::Sieve).stdout_line().unwrap(),
        format!("Primes up to {SIEVE_LIMIT}: {}", golden::PRIME_COUNT)
    );
}
