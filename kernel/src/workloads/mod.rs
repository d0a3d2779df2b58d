//! The five compute kernels.
//!
//! Each submodule is a leaf: no kernel imports another, and none holds state
//! between calls. Every kernel takes its size as an argument; the fixed suite
//! parameters live in [`crate::config`].

pub mod counting;
pub mod matrix;
pub mod recursion;
pub mod sieve;
pub mod tree;

/// Declares `Workload` enum, `id()`, `ALL`, `Display`, and `FromStr` from one list.
macro_rules! define_workloads {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $id:literal
        ),+ $(,)?
    ) => {
        /// One of the suite's kernels.
        ///
        /// The id string is stable: it names the kernel's binary, keys the
        /// suite manifest and tags serialized records.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Workload {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl Workload {
            /// Stable identifier.
            #[must_use]
            pub const fn id(self) -> &'static str {
                match self {
                    $( Self::$variant => $id, )+
                }
            }

            /// All workloads in declaration order.
            pub const ALL: &[Workload] = &[
                $( Self::$variant, )+
            ];
        }

        impl core::fmt::Display for Workload {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.id())
            }
        }

        impl core::str::FromStr for Workload {
            type Err = UnknownWorkload;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $id => Ok(Self::$variant), )+
                    _ => Err(UnknownWorkload { id: s.to_string() }),
                }
            }
        }
    };
}

define_workloads! {
    /// Naive recursive Fibonacci.
    Fibonacci => "fib",

    /// Binary search tree insert and count.
    Tree => "tree",

    /// Tight increment loop.
    CountingLoop => "count_loop",

    /// Dense matrix product checksum.
    Matrix => "matmul",

    /// Sieve of Eratosthenes prime count.
    Sieve => "sieve",
}

/// A workload id that names no kernel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownWorkload {
    pub id: String,
}

impl std::fmt::Display for UnknownWorkload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown workload id: {:?}", self.id)
    }
}

impl std::error::Error for UnknownWorkload {}
