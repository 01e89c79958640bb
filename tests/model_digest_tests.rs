#![cfg(feature = "dev")]
//! Tests for canonical term identity digests.
//!
//! ## Test Organization
//!
//! 1. **Permutation Invariance** - part order never changes the digest
//! 2. **Sensitivity** - any differing triple changes the digest
//! 3. **Canonical Encoding** - -0.0 folding and part multiplicity
//! 4. **Rendering** - fixed-length lowercase hex, map-key traits

use std::collections::{BTreeMap, HashSet};

use polyterm::internals::model::digest::digest_parts;
use polyterm::prelude::*;

// ============================================================================
// Permutation Invariance
// ============================================================================

#[test]
fn test_digest_is_permutation_invariant() {
    let a = TermPart::new(1, 2.0);
    let b = TermPart::lagged(2, 1.0, 1);
    assert_eq!(digest_parts(&[a, b]), digest_parts(&[b, a]));
}

#[test]
fn test_digest_is_permutation_invariant_over_three_parts() {
    let a = TermPart::new(0, 0.5);
    let b = TermPart::lagged(3, -1.0, 2);
    let c = TermPart::new(1, 3.0);

    let reference = digest_parts(&[a, b, c]);
    assert_eq!(digest_parts(&[b, c, a]), reference);
    assert_eq!(digest_parts(&[c, a, b]), reference);
    assert_eq!(digest_parts(&[c, b, a]), reference);
}

// ============================================================================
// Sensitivity
// ============================================================================

/// Changing any one value of a triple changes the digest.
#[test]
fn test_digest_is_sensitive_to_every_field() {
    let reference = digest_parts(&[TermPart::lagged(1, 2.0, 0)]);

    assert_ne!(digest_parts(&[TermPart::lagged(2, 2.0, 0)]), reference);
    assert_ne!(digest_parts(&[TermPart::lagged(1, 2.5, 0)]), reference);
    assert_ne!(digest_parts(&[TermPart::lagged(1, 2.0, 1)]), reference);
}

/// A repeated part is not the same as a single occurrence.
#[test]
fn test_digest_counts_part_multiplicity() {
    let part = TermPart::new(1, 2.0);
    assert_ne!(digest_parts(&[part]), digest_parts(&[part, part]));
}

// ============================================================================
// Canonical Encoding
// ============================================================================

/// Numerically equal exponents digest equally even across the -0.0/+0.0
/// bit-pattern split.
#[test]
fn test_digest_folds_negative_zero_exponent() {
    assert_eq!(
        digest_parts(&[TermPart::new(0, -0.0)]),
        digest_parts(&[TermPart::new(0, 0.0)])
    );
}

/// Two independently computed digests of equal lists are identical, so the
/// digest is usable as a content address.
#[test]
fn test_digest_is_deterministic() {
    let parts = [TermPart::lagged(4, 0.25, 3), TermPart::new(2, 1.0)];
    assert_eq!(digest_parts(&parts), digest_parts(&parts.to_vec()));
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_digest_displays_as_64_hex_chars() {
    let digest = digest_parts(&[TermPart::new(1, 2.0)]);
    let rendered = format!("{}", digest);
    assert_eq!(rendered.len(), 64);
    assert!(rendered.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[test]
fn test_digest_works_as_map_key() {
    let a = digest_parts(&[TermPart::new(1, 2.0)]);
    let b = digest_parts(&[TermPart::new(2, 2.0)]);

    let mut set = HashSet::new();
    set.insert(a);
    set.insert(b);
    set.insert(a);
    assert_eq!(set.len(), 2);

    let mut map = BTreeMap::new();
    map.insert(a, "first");
    map.insert(b, "second");
    assert_eq!(map.len(), 2);
}
