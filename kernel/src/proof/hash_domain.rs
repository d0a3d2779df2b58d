//! Typed domain separators for canonical hashing.
//!
//! Every hash computation selects a domain via [`HashDomain`], so a record
//! digest can never collide with a manifest digest over the same bytes.

/// Declares `HashDomain` enum, `as_bytes()`, `ALL`, and `Display` from one list.
macro_rules! define_hash_domains {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $bytes:expr
        ),+ $(,)?
    ) => {
        /// Typed domain separator for [`super::hash::canonical_hash`].
        ///
        /// Every variant maps to a unique, null-terminated byte string used as
        /// a SHA-256 prefix.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HashDomain {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl HashDomain {
            /// The raw domain-separator bytes (null-terminated).
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $bytes, )+
                }
            }

            /// All domain variants in declaration order.
            pub const ALL: &[HashDomain] = &[
                $( Self::$variant, )+
            ];
        }

        impl core::fmt::Display for HashDomain {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    $( Self::$variant => write!(f, stringify!($variant)), )+
                }
            }
        }
    };
}

define_hash_domains! {
    /// A single kernel's proof-of-work record.
    ProofRecord => b"CPUBENCH::PROOF_RECORD::V1\0",

    /// The whole-suite manifest.
    SuiteManifest => b"CPUBENCH::SUITE_MANIFEST::V1\0",
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn all_bytes_unique() {
        let mut seen = BTreeSet::new();
        for domain in HashDomain::ALL {
            assert!(
                seen.insert(domain.as_bytes()),
                "duplicate domain bytes: {domain}"
            );
        }
    }

    #[test]
    fn all_follow_naming_convention() {
        for domain in HashDomain::ALL {
            let bytes = domain.as_bytes();
            assert!(bytes.starts_with(b"CPUBENCH::"), "{domain} prefix");
            assert!(bytes.ends_with(b"::V1\0"), "{domain} suffix");
        }
    }

    #[test]
    fn display_returns_variant_name() {
        assert_eq!(HashDomain::ProofRecord.to_string(), "ProofRecord");
        assert_eq!(HashDomain::SuiteManifest.to_string(), "SuiteManifest");
    }
}
