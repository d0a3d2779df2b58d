//! Kernel entry point: 300×300 integer matrix product checksum.

use std::process::ExitCode;

use cpubench_kernel::workloads::Workload;

fn main() -> ExitCode {
    cpubench_kernel::entry::run(Workload::Matrix)
}
