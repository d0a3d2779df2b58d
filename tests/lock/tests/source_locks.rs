//! Structural locks over the kernel source tree.
//!
//! - Exactly one canonical JSON implementation (`proof/canon.rs`).
//! - Exactly one SHA-256 call site (`proof/hash.rs`).
//! - No raw `CPUBENCH::` domain literals outside `proof/hash_domain.rs`.
//! - Kernels read no clock, environment, files, or randomness source.

use cpubench_kernel::proof::hash_domain::HashDomain;
use lock_tests::{hit_files, kernel_src, scan_source};

#[test]
fn one_canonical_json_implementation() {
    let hits = scan_source(&kernel_src(), &|line| line.contains("fn canonical_json_bytes"));
    assert_eq!(hit_files(&hits), vec!["proof/canon.rs"], "{hits:?}");
}

#[test]
fn one_hashing_site() {
    let hits = scan_source(&kernel_src(), &|line| line.contains("Sha256::new"));
    assert_eq!(hit_files(&hits), vec!["proof/hash.rs"], "{hits:?}");
}

#[test]
fn domain_literals_live_in_hash_domain() {
    let hits = scan_source(&kernel_src(), &|line| line.contains("CPUBENCH::"));
    assert_eq!(hit_files(&hits), vec!["proof/hash_domain.rs"], "{hits:?}");
    assert_eq!(hits.len(), HashDomain::ALL.len());
}

#[test]
fn workloads_are_pure_computation() {
    let forbidden = [
        "std::time",
        "Instant",
        "SystemTime",
        "std::env",
        "std::fs",
        "thread_rng",
        "unsafe",
        "static mut",
    ];
    let hits = scan_source(&kernel_src().join("workloads"), &|line| {
        forbidden.iter().any(|f| line.contains(f))
    });
    assert!(hits.is_empty(), "workloads touch outside state: {hits:?}");
}

#[test]
fn scanner_sees_the_kernels() {
    let hits = scan_source(&kernel_src().join("workloads"), &|line| {
        line.starts_with("pub fn run(")
    });
    assert_eq!(
        hit_files(&hits),
        vec!["workloads/matrix.rs", "workloads/sieve.rs", "workloads/tree.rs"]
    );
}
