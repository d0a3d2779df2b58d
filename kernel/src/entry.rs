//! Shared `main` for the per-kernel binaries.

use std::io::Write;
use std::process::ExitCode;

use crate::diagnostics;
use crate::proof::record::ProofOfWork;
use crate::workloads::Workload;

/// Run `workload` at its fixed parameters and print its result line.
///
/// Exits 0 once the kernel completes. A failed stdout write (closed pipe)
/// is the only non-zero exit.
#[must_use]
pub fn run(workload: Workload) -> ExitCode {
    diagnostics::init();
    let record = ProofOfWork::measure(workload);
    let Some(line) = record.stdout_line() else {
        return ExitCode::SUCCESS;
    };

    let mut out = std::io::stdout().lock();
    match writeln!(out, "{line}").and_then(|()| out.flush()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(%workload, error = %e, "failed to write result");
            ExitCode::FAILURE
        }
    }
}
