//! Proof module: what a kernel run proves, and how that is checked.
//!
//! Depends on `workloads` and `config`. Nothing in the kernels depends on
//! `proof`.

pub mod canon;
pub mod error;
pub mod golden;
pub mod hash;
pub mod hash_domain;
pub mod manifest;
pub mod record;
