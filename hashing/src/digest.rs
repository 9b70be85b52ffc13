// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

use sha2::{Digest, Sha224};

/// Length of a hex encoded digest (SHA-224, 4 bits per hex character)
pub const DIGEST_HEX_LEN: usize = 224 / 4;

/// SHA-224 of the UTF-8 bytes of `target`, as lowercase hex.
#[must_use]
pub fn compute_hash(target: &str) -> String {
    hex::encode(Sha224::digest(target.as_bytes()))
}
