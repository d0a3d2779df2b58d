//! Suite manifest: every kernel's record under one digest.
//!
//! The manifest is what an external harness can store next to its timings
//! and compare across machines, builds, or implementations. It carries no
//! timing, host, or path information, so its digest depends only on what the
//! kernels computed.
//!
//! # Canonical form
//!
//! ```text
//! {"records":{"<workload id>":<record>,...},"schema_version":"cpubench.suite_manifest.v1"}
//! ```
//!
//! Keys sorted, compact, hashed under [`HashDomain::SuiteManifest`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::canon::canonical_json_bytes;
use super::error::ProofError;
use super::golden;
use super::hash::{canonical_hash, ContentHash};
use super::hash_domain::HashDomain;
use super::record::ProofOfWork;
use crate::workloads::Workload;

/// Schema version written into and required of every manifest.
pub const SCHEMA_VERSION: &str = "cpubench.suite_manifest.v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteManifest {
    schema_version: String,
    records: BTreeMap<String, ProofOfWork>,
}

impl SuiteManifest {
    /// Run every kernel in [`Workload::ALL`] order and collect the records.
    #[must_use]
    pub fn collect() -> Self {
        let records = Workload::ALL
            .iter()
            .map(|&workload| {
                let record = ProofOfWork::measure(workload);
                (workload.id().to_string(), record)
            })
            .collect();
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            records,
        }
    }

    /// Build from explicit records. Partial manifests are allowed.
    ///
    /// # Errors
    ///
    /// [`ProofError::DuplicateRecord`] if a workload appears twice.
    pub fn from_records(
        records: impl IntoIterator<Item = ProofOfWork>,
    ) -> Result<Self, ProofError> {
        let mut map = BTreeMap::new();
        for record in records {
            let workload = record.workload();
            if map.insert(workload.id().to_string(), record).is_some() {
                return Err(ProofError::DuplicateRecord { workload });
            }
        }
        Ok(Self {
            schema_version: SCHEMA_VERSION.to_string(),
            records: map,
        })
    }

    /// Parse a manifest previously produced by [`Self::canonical_bytes`]
    /// (or any JSON with the same shape).
    ///
    /// # Errors
    ///
    /// - [`ProofError::Json`] for invalid JSON or record shapes
    /// - [`ProofError::UnsupportedSchema`] for a foreign schema version
    /// - [`ProofError::RecordKeyMismatch`] if a key disagrees with its record's tag
    pub fn from_json(bytes: &[u8]) -> Result<Self, ProofError> {
        let manifest: Self = serde_json::from_slice(bytes)?;
        if manifest.schema_version != SCHEMA_VERSION {
            return Err(ProofError::UnsupportedSchema {
                found: manifest.schema_version,
            });
        }
        for (key, record) in &manifest.records {
            if key != record.workload().id() {
                return Err(ProofError::RecordKeyMismatch {
                    key: key.clone(),
                    workload: record.workload(),
                });
            }
        }
        Ok(manifest)
    }

    #[must_use]
    pub fn schema_version(&self) -> &str {
        &self.schema_version
    }

    #[must_use]
    pub fn record(&self, workload: Workload) -> Option<&ProofOfWork> {
        self.records.get(workload.id())
    }

    /// Records in workload-id order.
    pub fn records(&self) -> impl Iterator<Item = &ProofOfWork> {
        self.records.values()
    }

    /// # Errors
    ///
    /// Propagates serialization failures.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, ProofError> {
        let value = serde_json::to_value(self)?;
        Ok(canonical_json_bytes(&value)?)
    }

    /// # Errors
    ///
    /// Propagates serialization failures.
    pub fn digest(&self) -> Result<ContentHash, ProofError> {
        Ok(canonical_hash(HashDomain::SuiteManifest, &self.canonical_bytes()?))
    }

    /// Check that every workload is present and matches its baseline.
    ///
    /// # Errors
    ///
    /// The first [`ProofError::MissingRecord`] or [`ProofError::Mismatch`]
    /// in [`Workload::ALL`] order.
    pub fn verify(&self) -> Result<(), ProofError> {
        for &workload in Workload::ALL {
            let record = self
                .record(workload)
                .ok_or(ProofError::MissingRecord { workload })?;
            golden::verify(record)?;
        }
        Ok(())
    }

    /// `key=value` lines: one `<id>_digest` per record in [`Workload::ALL`]
    /// order, then `manifest_digest`.
    ///
    /// # Errors
    ///
    /// Propagates serialization failures.
    pub fn fixture_lines(&self) -> Result<Vec<String>, ProofError> {
        let mut lines = Vec::with_capacity(self.records.len() + 1);
        for &workload in Workload::ALL {
            if let Some(record) = self.record(workload) {
                lines.push(format!("{workload}_digest={}", record.digest()?));
            }
        }
        lines.push(format!("manifest_digest={}", self.digest()?));
        Ok(lines)
    }
}
