//! Runs every kernel and prints the suite manifest digests for
//! cross-process and cross-build comparison.
//!
//! Usage: `manifest`
//! Output: six lines, each `key=value`:
//!   `fib_digest`=sha256:...
//!   `tree_digest`=sha256:...
//!   `count_loop_digest`=sha256:...
//!   `matmul_digest`=sha256:...
//!   `sieve_digest`=sha256:...
//!   `manifest_digest`=sha256:...
//!
//! Exits non-zero if any kernel diverges from its pinned baseline.

use std::process::ExitCode;

use cpubench_kernel::diagnostics;
use cpubench_kernel::proof::manifest::SuiteManifest;

fn main() -> ExitCode {
    diagnostics::init();

    let manifest = SuiteManifest::collect();
    let lines = match manifest.fixture_lines() {
        Ok(lines) => lines,
        Err(e) => {
            eprintln!("manifest: {e}");
            return ExitCode::FAILURE;
        }
    };
    for line in &lines {
        println!("{line}");
    }

    if let Err(e) = manifest.verify() {
        eprintln!("manifest: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
