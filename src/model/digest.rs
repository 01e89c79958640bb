//! Canonical, order-independent term identity.
//!
//! ## Purpose
//!
//! This module computes the content digest that gives terms their identity:
//! two terms with the same parts in any order digest identically, while any
//! differing triple (even by lag alone) produces a different digest.
//!
//! ## Design notes
//!
//! * Each part is encoded as 24 canonical little-endian bytes (column as
//!   u64, exponent as the f64 bit pattern, lag as u64) and hashed with
//!   SHA-256; the per-part digests are sorted lexicographically and the
//!   sorted concatenation is hashed again. Sorting digests rather than
//!   parts sidesteps any float-ordering question.
//! * Stable across process runs and platforms; the hex rendering is a
//!   fixed-length string usable as a map key.
//!
//! ## Invariants
//!
//! * Permutation-invariant over parts; exact-value-sensitive per part.
//! * `-0.0` exponents fold into `+0.0` so numerically equal parts digest
//!   equally.

use core::fmt;

use num_traits::Float;
use sha2::{Digest, Sha256};

use super::term::TermPart;

// ============================================================================
// TermDigest
// ============================================================================

/// A canonical SHA-256 content digest of a term's parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TermDigest([u8; 32]);

impl TermDigest {
    /// The raw digest bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for TermDigest {
    /// Render as 64 lowercase hex characters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

// ============================================================================
// Digest Computation
// ============================================================================

/// Digest a parts list: hash each part, sort the digests, hash the sorted
/// sequence.
pub fn digest_parts<T: Float>(parts: &[TermPart<T>]) -> TermDigest {
    let mut part_digests: Vec<[u8; 32]> = parts.iter().map(digest_part).collect();
    part_digests.sort_unstable();

    let mut hasher = Sha256::new();
    for digest in &part_digests {
        hasher.update(digest);
    }
    TermDigest(hasher.finalize().into())
}

fn digest_part<T: Float>(part: &TermPart<T>) -> [u8; 32] {
    let mut exponent = part.exponent.to_f64().unwrap_or(f64::NAN);
    if exponent == 0.0 {
        // Folds -0.0 into +0.0.
        exponent = 0.0;
    }
    if exponent.is_nan() {
        // Canonical NaN bit pattern.
        exponent = f64::NAN;
    }

    let mut hasher = Sha256::new();
    hasher.update((part.column as u64).to_le_bytes());
    hasher.update(exponent.to_bits().to_le_bytes());
    hasher.update((part.lag as u64).to_le_bytes());
    hasher.finalize().into()
}
