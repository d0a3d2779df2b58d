//! cpubench kernel: deterministic CPU workload kernels and their proofs of work.
//!
//! # API Surface
//!
//! - [`workloads`] -- the five kernels (recursion, tree, counting loop, matrix, sieve)
//!   and the [`workloads::Workload`] enumeration naming them
//! - [`proof`] -- typed proof-of-work records, pinned golden baselines, canonical
//!   hashing and the suite manifest
//! - [`config`] -- the compiled-in constants every kernel runs with
//! - [`diagnostics`], [`entry`] -- opt-in stderr tracing and the shared `main` of
//!   the kernel binaries
//!
//! # Module Dependency Direction
//!
//! `config` ← `workloads` ← `proof`
//!
//! One-way only. Kernels are plain functions over their size parameters and
//! know nothing about records or hashing; [`proof::record::ProofOfWork::measure`]
//! binds the constants from `config` and dispatches.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod diagnostics;
pub mod entry;
pub mod proof;
pub mod workloads;
