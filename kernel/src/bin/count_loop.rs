//! Kernel entry point: 100,000,000-step counting loop.
//!
//! Prints nothing on a normal run. The `Zero` line exists only so the
//! loop's result stays observable.

use std::process::ExitCode;

use cpubench_kernel::workloads::Workload;

fn main() -> ExitCode {
    cpubench_kernel::entry::run(Workload::CountingLoop)
}
