// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Deterministic hashing of configuration objects.
//!
//! Reconcilers use these digests as fingerprints to detect configuration drift: an object is
//! reduced to a canonical YAML text (generic value tree, keys sorted at every level) and the
//! SHA-224 of that text is returned as 56 lowercase hex characters.
//!
//! Hashing never fails. If an object cannot be normalized, it is hashed as `null`; if the
//! canonical text cannot be rendered, the empty string is hashed. Both cases are logged. A
//! digest is therefore not proof that the input was well formed, and two distinct malformed
//! inputs will hash identically. The digest is a fingerprint, not a MAC.

#![deny(clippy::all, clippy::pedantic)]

mod canonical;
mod digest;

pub use canonical::{normalize, pretty_yaml, sort_keys};
pub use digest::{DIGEST_HEX_LEN, compute_hash};

use serde::Serialize;

/// Compute the drift-detection digest of `object`.
#[must_use]
pub fn hash_object<T: Serialize + ?Sized>(object: &T) -> String {
    compute_hash(&pretty_yaml(&sort_keys(&normalize(object))))
}

/// Anything serializable can be fingerprinted.
pub trait HashObject {
    fn hash_object(&self) -> String;
}

impl<T: Serialize + ?Sized> HashObject for T {
    fn hash_object(&self) -> String {
        hash_object(self)
    }
}
