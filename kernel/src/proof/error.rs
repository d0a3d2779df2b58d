//! Typed proof-layer errors.
//!
//! The kernels themselves cannot fail. Everything here comes from checking a
//! result: parsing a printed line, comparing against a pinned baseline, or
//! reading a manifest back.

use super::canon::CanonError;
use super::record::ProofOfWork;
use crate::workloads::Workload;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProofError {
    /// A printed line does not have the shape the workload prints.
    MalformedLine { workload: Workload, line: String },
    /// The workload prints nothing under normal execution.
    NoScalarOutput { workload: Workload },
    /// A record disagrees with its pinned baseline.
    Mismatch {
        expected: ProofOfWork,
        actual: ProofOfWork,
    },
    /// A manifest has no record for a workload.
    MissingRecord { workload: Workload },
    /// Two records for the same workload were supplied.
    DuplicateRecord { workload: Workload },
    /// A manifest entry is keyed under a different workload than its tag.
    RecordKeyMismatch { key: String, workload: Workload },
    /// A manifest carries a schema version this crate does not read.
    UnsupportedSchema { found: String },
    /// Canonical serialization failed.
    Canon(CanonError),
    /// JSON encoding or decoding failed.
    Json { detail: String },
}

impl std::fmt::Display for ProofError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedLine { workload, line } => {
                write!(f, "malformed {workload} output line: {line:?}")
            }
            Self::NoScalarOutput { workload } => {
                write!(f, "{workload} prints no scalar under normal execution")
            }
            Self::Mismatch { expected, actual } => {
                write!(f, "proof mismatch: expected {expected}, got {actual}")
            }
            Self::MissingRecord { workload } => write!(f, "manifest has no {workload} record"),
            Self::DuplicateRecord { workload } => write!(f, "duplicate {workload} record"),
            Self::RecordKeyMismatch { key, workload } => {
                write!(f, "manifest key {key:?} holds a {workload} record")
            }
            Self::UnsupportedSchema { found } => {
                write!(f, "unsupported manifest schema version: {found:?}")
            }
            Self::Canon(e) => write!(f, "canonical JSON: {e}"),
            Self::Json { detail } => write!(f, "JSON: {detail}"),
        }
    }
}

impl std::error::Error for ProofError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Canon(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CanonError> for ProofError {
    fn from(e: CanonError) -> Self {
        Self::Canon(e)
    }
}

impl From<serde_json::Error> for ProofError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json {
            detail: e.to_string(),
        }
    }
}
