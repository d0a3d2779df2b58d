//! Kernel entry point: binary search tree of 100,000 generated values.

use std::process::ExitCode;

use cpubench_kernel::workloads::Workload;

fn main() -> ExitCode {
    cpubench_kernel::entry::run(Workload::Tree)
}
