//! Pinned baselines for every kernel at its compiled-in parameters.
//!
//! These are regression locks. Each value was derived once from the kernel
//! itself; a change here means a kernel now computes something different.
//!
//! - Tree: the first 100,000 generator outputs after seed 12345 are pairwise
//!   distinct and every insert allocates a node, so the count equals the
//!   number of inserts. The tree is 40 levels deep.
//! - Sieve: 664,579 is π(10^7).
//! - Matrix: the 300×300 checksum stays below `i64::MAX`; no wraparound
//!   occurs at this size.

use super::error::ProofError;
use super::record::ProofOfWork;
use crate::config::{FIB_N, LOOP_BOUND, MATRIX_SIZE, SIEVE_LIMIT, TREE_COUNT};
use crate::workloads::Workload;

pub const FIB_VALUE: u64 = 102_334_155;
pub const TREE_NODES: usize = 100_000;
pub const MATRIX_CHECKSUM: i64 = 202_497_750_000;
pub const PRIME_COUNT: usize = 664_579;

/// Digest of the full-suite manifest built from the baselines below.
pub const MANIFEST_DIGEST: &str =
    "sha256:99addfc9bfd900a1b76726e1f97639f37a900329b8e4456eb0d80ce039bacabf";

/// The record `workload` must produce.
#[must_use]
pub const fn expected(workload: Workload) -> ProofOfWork {
    match workload {
        Workload::Fibonacci => ProofOfWork::Fibonacci {
            n: FIB_N,
            value: FIB_VALUE,
        },
        Workload::Tree => ProofOfWork::TreeNodes {
            inserted: TREE_COUNT,
            nodes: TREE_NODES,
        },
        Workload::CountingLoop => ProofOfWork::CountingLoop {
            bound: LOOP_BOUND,
            counter: LOOP_BOUND,
        },
        Workload::Matrix => ProofOfWork::MatrixChecksum {
            size: MATRIX_SIZE,
            checksum: MATRIX_CHECKSUM,
        },
        Workload::Sieve => ProofOfWork::PrimeCount {
            limit: SIEVE_LIMIT,
            count: PRIME_COUNT,
        },
    }
}

/// Pinned record digest for `workload`.
#[must_use]
pub const fn expected_digest(workload: Workload) -> &'static str {
    match workload {
        Workload::Fibonacci => {
            "sha256:689fd2ff515416ec8be7a7f32d8075e382ef77daa7e2fcf15f33c888a7f8a2b8"
        }
        Workload::Tree => {
            "sha256:d3bb7023cab15716ac7468237fd6cd5a6dbd536c86ab87d3b9b0b41d12f028f2"
        }
        Workload::CountingLoop => {
            "sha256:4bb94854c3361ceb2c2f0928269b8d3cbe379413e4ffd98dee24cef1247333c1"
        }
        Workload::Matrix => {
            "sha256:ca0d5f998fe09ec7a6f38572e49695c8e0c911cf69f4174a1d488aee94e63a13"
        }
        Workload::Sieve => {
            "sha256:1215386d969cccb32cd6f6f8dc29661539fcd70f241be562c8afebc2ac97b949"
        }
    }
}

/// Check `record` against the baseline for its workload.
///
/// # Errors
///
/// [`ProofError::Mismatch`] if any field differs.
pub fn verify(record: &ProofOfWork) -> Result<(), ProofError> {
    let expected = expected(record.workload());
    if *record == expected {
        Ok(())
    } else {
        Err(ProofError::Mismatch {
            expected,
            actual: *record,
        })
    }
}

/// Run `workload` and verify its record.
///
/// # Errors
///
/// [`ProofError::Mismatch`] if the kernel diverges from its baseline.
pub fn measure_and_verify(workload: Workload) -> Result<ProofOfWork, ProofError> {
    let record = ProofOfWork::measure(workload);
    verify(&record)?;
    Ok(record)
}
