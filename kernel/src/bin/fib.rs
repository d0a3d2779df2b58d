//! Kernel entry point: recursive Fibonacci of 40.

use std::process::ExitCode;

use cpubench_kernel::workloads::Workload;

fn main() -> ExitCode {
    cpubench_kernel::entry::run(Workload::Fibonacci)
}
