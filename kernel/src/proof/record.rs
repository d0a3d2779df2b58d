//! `ProofOfWork`: the scalar result of one kernel run.
//!
//! A record carries the parameter the kernel ran with alongside its result,
//! so two records are only equal when both the input and the output agree.
//!
//! # Printed form
//!
//! | Workload     | Line                               |
//! |--------------|------------------------------------|
//! | `fib`        | `Fib(40) = 102334155`              |
//! | `tree`       | `Tree nodes: 100000`               |
//! | `count_loop` | nothing (`Zero` if the counter is 0) |
//! | `matmul`     | `Matrix 300x300 sum: 202497750000` |
//! | `sieve`      | `Primes up to 10000000: 664579`    |
//!
//! # Serialized form
//!
//! Internally tagged on `workload` with the workload id, integers only, e.g.
//! `{"n":40,"value":102334155,"workload":"fib"}` once canonicalized.

use serde::{Deserialize, Serialize};

use super::canon::canonical_json_bytes;
use super::error::ProofError;
use super::hash::{canonical_hash, ContentHash};
use super::hash_domain::HashDomain;
use crate::config::{FIB_N, LOOP_BOUND, MATRIX_SIZE, SIEVE_LIMIT, TREE_COUNT, TREE_SEED};
use crate::workloads::{counting, matrix, recursion, sieve, tree, Workload};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "workload")]
pub enum ProofOfWork {
    #[serde(rename = "fib")]
    Fibonacci { n: u32, value: u64 },

    #[serde(rename = "tree")]
    TreeNodes { inserted: usize, nodes: usize },

    #[serde(rename = "count_loop")]
    CountingLoop { bound: u64, counter: u64 },

    #[serde(rename = "matmul")]
    MatrixChecksum { size: usize, checksum: i64 },

    #[serde(rename = "sieve")]
    PrimeCount { limit: usize, count: usize },
}

impl ProofOfWork {
    /// Run `workload` with its compiled-in parameters.
    #[must_use]
    pub fn measure(workload: Workload) -> Self {
        let _span = tracing::debug_span!("measure", %workload).entered();
        let record = match workload {
            Workload::Fibonacci => Self::Fibonacci {
                n: FIB_N,
                value: recursion::fib(FIB_N),
            },
            Workload::Tree => Self::TreeNodes {
                inserted: TREE_COUNT,
                nodes: tree::run(TREE_SEED, TREE_COUNT),
            },
            Workload::CountingLoop => Self::CountingLoop {
                bound: LOOP_BOUND,
                counter: counting::count_to(LOOP_BOUND),
            },
            Workload::Matrix => Self::MatrixChecksum {
                size: MATRIX_SIZE,
                checksum: matrix::run(MATRIX_SIZE),
            },
            Workload::Sieve => Self::PrimeCount {
                limit: SIEVE_LIMIT,
                count: sieve::run(SIEVE_LIMIT),
            },
        };
        tracing::debug!(%record, "kernel finished");
        record
    }

    #[must_use]
    pub const fn workload(&self) -> Workload {
        match self {
            Self::Fibonacci { .. } => Workload::Fibonacci,
            Self::TreeNodes { .. } => Workload::Tree,
            Self::CountingLoop { .. } => Workload::CountingLoop,
            Self::MatrixChecksum { .. } => Workload::Matrix,
            Self::PrimeCount { .. } => Workload::Sieve,
        }
    }

    /// The line the kernel's binary prints, if any.
    #[must_use]
    pub fn stdout_line(&self) -> Option<String> {
        match *self {
            Self::Fibonacci { n, value } => Some(format!("Fib({n}) = {value}")),
            Self::TreeNodes { nodes, .. } => Some(format!("Tree nodes: {nodes}")),
            Self::CountingLoop { counter, .. } => {
                counting::zero_sentinel(counter).map(str::to_string)
            }
            Self::MatrixChecksum { size, checksum } => {
                Some(format!("Matrix {size}x{size} sum: {checksum}"))
            }
            Self::PrimeCount { limit, count } => Some(format!("Primes up to {limit}: {count}")),
        }
    }

    /// Parse a line printed by `workload`'s binary back into a record.
    ///
    /// The tree line carries only the node count; `inserted` is the
    /// compiled-in [`TREE_COUNT`]. The counting loop prints only its zero
    /// sentinel, which parses to a zero counter.
    ///
    /// # Errors
    ///
    /// [`ProofError::MalformedLine`] if the line does not match the
    /// workload's format, [`ProofError::NoScalarOutput`] for an empty
    /// counting-loop output.
    pub fn parse_line(workload: Workload, line: &str) -> Result<Self, ProofError> {
        let line = line.trim();
        let malformed = || ProofError::MalformedLine {
            workload,
            line: line.to_string(),
        };

        match workload {
            Workload::Fibonacci => {
                let (n, value) = line
                    .strip_prefix("Fib(")
                    .and_then(|rest| rest.split_once(") = "))
                    .ok_or_else(malformed)?;
                Ok(Self::Fibonacci {
                    n: n.parse().map_err(|_| malformed())?,
                    value: value.parse().map_err(|_| malformed())?,
                })
            }
            Workload::Tree => {
                let nodes = line.strip_prefix("Tree nodes: ").ok_or_else(malformed)?;
                Ok(Self::TreeNodes {
                    inserted: TREE_COUNT,
                    nodes: nodes.parse().map_err(|_| malformed())?,
                })
            }
            Workload::CountingLoop => match line {
                "" => Err(ProofError::NoScalarOutput { workload }),
                "Zero" => Ok(Self::CountingLoop {
                    bound: LOOP_BOUND,
                    counter: 0,
                }),
                _ => Err(malformed()),
            },
            Workload::Matrix => {
                let (dims, checksum) = line
                    .strip_prefix("Matrix ")
                    .and_then(|rest| rest.split_once(" sum: "))
                    .ok_or_else(malformed)?;
                let (rows, cols) = dims.split_once('x').ok_or_else(malformed)?;
                if rows != cols {
                    return Err(malformed());
                }
                Ok(Self::MatrixChecksum {
                    size: rows.parse().map_err(|_| malformed())?,
                    checksum: checksum.parse().map_err(|_| malformed())?,
                })
            }
            Workload::Sieve => {
                let (limit, count) = line
                    .strip_prefix("Primes up to ")
                    .and_then(|rest| rest.split_once(": "))
                    .ok_or_else(malformed)?;
                Ok(Self::PrimeCount {
                    limit: limit.parse().map_err(|_| malformed())?,
                    count: count.parse().map_err(|_| malformed())?,
                })
            }
        }
    }

    /// Canonical JSON of the tagged record.
    ///
    /// # Errors
    ///
    /// Propagates serialization failures; none occur for integer-only records.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, ProofError> {
        let value = serde_json::to_value(self)?;
        Ok(canonical_json_bytes(&value)?)
    }

    /// Content hash of [`Self::canonical_bytes`] under [`HashDomain::ProofRecord`].
    ///
    /// # Errors
    ///
    /// See [`Self::canonical_bytes`].
    pub fn digest(&self) -> Result<ContentHash, ProofError> {
        Ok(canonical_hash(HashDomain::ProofRecord, &self.canonical_bytes()?))
    }
}

impl std::fmt::Display for ProofOfWork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fibonacci { n, value } => write!(f, "fib(n={n}) = {value}"),
            Self::TreeNodes { inserted, nodes } => {
                write!(f, "tree(inserted={inserted}) nodes = {nodes}")
            }
            Self::CountingLoop { bound, counter } => {
                write!(f, "count_loop(bound={bound}) counter = {counter}")
            }
            Self::MatrixChecksum { size, checksum } => {
                write!(f, "matmul(size={size}) checksum = {checksum}")
            }
            Self::PrimeCount { limit, count } => write!(f, "sieve(limit={limit}) primes = {count}"),
        }
    }
}
