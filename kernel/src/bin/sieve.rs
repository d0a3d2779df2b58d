//! Kernel entry point: Sieve of Eratosthenes up to 10,000,000.

use std::process::ExitCode;

use cpubench_kernel::workloads::Workload;

fn main() -> ExitCode {
    cpubench_kernel::entry::run(Workload::Sieve)
}
